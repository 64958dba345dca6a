use clap::Parser;
use std::process::ExitCode;

mod commands;
mod handlers;
mod output;
mod render;
mod shell;

use commands::Cli;
use handlers::handle_command;
use output::print_error;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    match handle_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print_error(&err.to_string());
            ExitCode::FAILURE
        }
    }
}
