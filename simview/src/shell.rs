use crate::output::*;
use crate::render::export_chart;
use rustyline::{error::ReadlineError, DefaultEditor};
use simview_core::{InspectError, Inspector, InspectorSettings};
use std::io;
use std::path::Path;

const HELP: &str = "\
load <path>            load a result file
columns                list available columns
describe <column>      show a column description
add <column>...        add columns to the graph
remove <column>...     remove columns from the graph
selected               list the columns currently displayed
range [<start> <end>]  show or set the time window
range reset            go back to the file's full time range
show [table|csv|json]  print the selected series
plot <path>            render the selected series (.svg or .png)
help                   this text
quit                   leave the shell";

/// Splits a command line on whitespace, keeping double-quoted words together.
pub fn split_words(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut has_word = false;
    for ch in line.chars() {
        match ch {
            '"' => {
                quoted = !quoted;
                has_word = true;
            }
            c if c.is_whitespace() && !quoted => {
                if has_word {
                    words.push(std::mem::take(&mut current));
                    has_word = false;
                }
            }
            c => {
                current.push(c);
                has_word = true;
            }
        }
    }
    if has_word {
        words.push(current);
    }
    words
}

/// Reads commands until `quit`, Ctrl-C or end of input.
pub fn run_shell(
    inspector: &mut Inspector,
    settings: &InspectorSettings,
    file: Option<&Path>,
) -> Result<(), ReadlineError> {
    let mut rl = DefaultEditor::new()?;
    if let Some(path) = file {
        load(inspector, path);
    }
    print_info("Type 'help' for commands");
    loop {
        let line = match rl.readline("simview> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!();
                break;
            }
            Err(err) => return Err(err),
        };
        let words = split_words(&line);
        let Some((command, args)) = words.split_first() else {
            continue;
        };
        let _ = rl.add_history_entry(line.trim());
        if matches!(command.as_str(), "quit" | "exit") {
            break;
        }
        dispatch(inspector, settings, command, args);
    }
    Ok(())
}

fn load(inspector: &mut Inspector, path: &Path) {
    match inspector.load(path) {
        Ok(report) => {
            let name = inspector.file_name().unwrap_or_default();
            print_load_report(&name, &report, inspector.default_range());
        }
        Err(err) => print_error(&err.to_string()),
    }
}

fn dispatch(
    inspector: &mut Inspector,
    settings: &InspectorSettings,
    command: &str,
    args: &[String],
) {
    match command {
        "help" => println!("{HELP}"),
        "load" => match args {
            [path] => load(inspector, Path::new(path)),
            _ => print_error("usage: load <path>"),
        },
        "columns" if !inspector.is_loaded() => {
            print_error(&InspectError::NotLoaded.to_string())
        }
        "columns" => print_catalog(inspector.catalog()),
        "describe" => match args {
            [name] => match inspector.describe(name) {
                Some(entry) => print_description(entry),
                None => print_error(&format!("Unknown column: {name}")),
            },
            _ => print_error("usage: describe <column>"),
        },
        "add" => {
            inspector.add(args);
            print_selection(inspector.current());
        }
        "remove" => {
            inspector.remove(args);
            print_selection(inspector.current());
        }
        "selected" => print_selection(inspector.current()),
        "range" => set_range(inspector, args),
        "show" => {
            let format = args.first().map(String::as_str).unwrap_or("table");
            match inspector.assemble() {
                Ok(series) => {
                    let result = match format {
                        "csv" => write_series_csv(&series, io::stdout()).map_err(|e| e.to_string()),
                        "json" => print_series_json(&series).map_err(|e| e.to_string()),
                        _ => {
                            print_series_table(&series);
                            Ok(())
                        }
                    };
                    if let Err(err) = result {
                        print_error(&err);
                    }
                }
                Err(err) => print_error(&err.to_string()),
            }
        }
        "plot" => match args {
            [path] => match inspector.assemble() {
                Ok(series) => match export_chart(&series, &settings.chart, Path::new(path)) {
                    Ok(()) => print_info(&format!("Chart written to {path}")),
                    Err(err) => print_error(&err),
                },
                Err(err) => print_error(&err.to_string()),
            },
            _ => print_error("usage: plot <path>"),
        },
        other => print_error(&format!("Unknown command: {other} (try 'help')")),
    }
}

fn set_range(inspector: &mut Inspector, args: &[String]) {
    match args {
        [] => {}
        [reset] if reset == "reset" => inspector.clear_range(),
        [start, end] => match (start.trim().parse::<f64>(), end.trim().parse::<f64>()) {
            (Ok(start), Ok(end)) => inspector.set_range(start, end),
            _ => {
                print_error("Start and end must be numbers.");
                return;
            }
        },
        _ => {
            print_error("usage: range [<start> <end>|reset]");
            return;
        }
    }
    print_range(inspector.effective_range());
}
