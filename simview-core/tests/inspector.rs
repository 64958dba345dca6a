use simview_core::{
    assemble, build_catalog, filter, InspectError, Inspector, Table, TimeRange, TIME_COLUMN,
};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

const SCENARIO: &str = "Time,Temp,CO2\ns,C,ppm\n0,20,400\n10,21,410\n20,bad,420\n";

fn write_csv(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write csv");
    path
}

fn scenario_table() -> Table {
    Table::from_reader(SCENARIO.as_bytes(), "scenario").expect("load scenario")
}

#[test]
fn catalog_excludes_time_and_keeps_header_order() {
    let table = Table::from_reader(
        "Zeta,Time,Alpha,Mid\n-,s,-,-\n1,0,2,3\n".as_bytes(),
        "inline",
    )
    .unwrap();
    let names: Vec<String> = build_catalog(&table).into_iter().map(|e| e.name).collect();
    assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
    assert!(!names.iter().any(|name| name == TIME_COLUMN));
    assert!(build_catalog(&table).iter().all(|e| e.description.is_empty()));
}

#[test]
fn scenario_table_has_expected_time_keys() {
    let table = scenario_table();
    let times: Vec<f64> = table.rows().iter().map(|row| row.time).collect();
    assert_eq!(times, vec![0.0, 10.0, 20.0]);
}

#[test]
fn scenario_temp_series_keeps_gap() {
    let table = scenario_table();
    let series = assemble(&table, &["Temp"], &TimeRange::new(0.0, 20.0)).unwrap();
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].name, "Temp");
    assert_eq!(
        series[0].points,
        vec![(0.0, Some(20.0)), (10.0, Some(21.0)), (20.0, None)]
    );
}

#[test]
fn scenario_degenerate_range_is_invalid() {
    let table = scenario_table();
    let err = filter(&table, &TimeRange::new(5.0, 5.0)).unwrap_err();
    assert!(matches!(err, InspectError::InvalidRange { .. }));
}

#[test]
fn scenario_all_text_column_has_no_numeric_data() {
    let table = Table::from_reader(
        "Time,Temp,CO2\ns,C,ppm\n0,20,n/a\n10,21,off\n20,bad,\n".as_bytes(),
        "inline",
    )
    .unwrap();
    let err = assemble(&table, &["CO2"], &TimeRange::new(0.0, 20.0)).unwrap_err();
    assert_eq!(err, InspectError::NoNumericData);
}

#[test]
fn filter_results_stay_within_bounds() {
    let table = Table::from_reader(
        "Time,A\ns,u\n-5,0\n0,1\n2.5,2\n7,3\n10,4\n11,5\n".as_bytes(),
        "inline",
    )
    .unwrap();
    for (start, end) in [(0.0, 10.0), (-100.0, 100.0), (3.0, 6.0), (10.0, 10.5)] {
        let slice = filter(&table, &TimeRange::new(start, end)).unwrap();
        assert!(slice.times().all(|time| start <= time && time <= end));
    }
    let slice = filter(&table, &TimeRange::new(0.0, 10.0)).unwrap();
    assert_eq!(slice.times().collect::<Vec<_>>(), vec![0.0, 2.5, 7.0, 10.0]);
}

#[test]
fn filter_rejects_start_not_below_end() {
    let table = scenario_table();
    for (start, end) in [(5.0, 5.0), (10.0, 0.0), (f64::NAN, 1.0)] {
        assert!(matches!(
            filter(&table, &TimeRange::new(start, end)),
            Err(InspectError::InvalidRange { .. })
        ));
    }
}

#[test]
fn empty_window_is_not_a_filter_error() {
    let table = scenario_table();
    let slice = filter(&table, &TimeRange::new(1.0, 2.0)).unwrap();
    assert!(slice.is_empty());
    let err = assemble(&table, &["Temp"], &TimeRange::new(1.0, 2.0)).unwrap_err();
    assert_eq!(err, InspectError::NoNumericData);
}

#[test]
fn assemble_with_empty_selection_always_fails() {
    let table = scenario_table();
    let none: [&str; 0] = [];
    assert_eq!(
        assemble(&table, &none, &TimeRange::new(0.0, 20.0)),
        Err(InspectError::EmptySelection)
    );
    assert_eq!(
        assemble(&table, &none, &TimeRange::new(5.0, 5.0)),
        Err(InspectError::EmptySelection)
    );
    assert_eq!(Inspector::new().assemble(), Err(InspectError::EmptySelection));
}

#[test]
fn assemble_succeeds_if_any_column_has_a_number() {
    let table = Table::from_reader(
        "Time,A,B\ns,u,v\n0,x,y\n1,x,2\n".as_bytes(),
        "inline",
    )
    .unwrap();
    let series = assemble(&table, &["B", "A"], &TimeRange::new(0.0, 1.0)).unwrap();
    let names: Vec<&str> = series.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["B", "A"]);
    assert_eq!(series[1].points, vec![(0.0, None), (1.0, None)]);
}

#[test]
fn add_then_remove_restores_selection() {
    let mut inspector = Inspector::new();
    inspector.load_from_reader(SCENARIO.as_bytes(), "scenario").unwrap();
    inspector.add(&["CO2"]);
    let before = inspector.current().to_vec();
    inspector.add(&["Temp"]);
    inspector.remove(&["Temp"]);
    assert_eq!(inspector.current(), before.as_slice());
}

#[test]
fn add_is_idempotent() {
    let mut inspector = Inspector::new();
    inspector.load_from_reader(SCENARIO.as_bytes(), "scenario").unwrap();
    inspector.add(&["Temp", "CO2"]);
    inspector.add(&["CO2", "Temp"]);
    assert_eq!(inspector.current(), &["Temp", "CO2"]);
}

#[test]
fn reload_drops_names_missing_from_new_catalog() {
    let dir = tempfile::tempdir().expect("tempdir");
    let first = write_csv(&dir, "first.csv", SCENARIO);
    let second = write_csv(&dir, "second.csv", "Time,CO2,O2\ns,ppm,%\n0,400,21\n");

    let mut inspector = Inspector::new();
    inspector.load(&first).unwrap();
    inspector.add(&["Temp", "CO2"]);

    let report = inspector.load(&second).unwrap();
    assert_eq!(report.dropped_selection, vec!["Temp".to_string()]);
    assert_eq!(inspector.current(), &["CO2"]);
    assert_eq!(inspector.file_name().as_deref(), Some("second.csv"));
}

#[test]
fn failed_load_leaves_state_untouched() {
    let dir = tempfile::tempdir().expect("tempdir");
    let good = write_csv(&dir, "good.csv", SCENARIO);
    let no_time = write_csv(&dir, "no_time.csv", "t,Temp\ns,C\n0,1\n");

    let mut inspector = Inspector::new();
    inspector.load(&good).unwrap();
    inspector.add(&["Temp"]);
    inspector.set_range(0.0, 10.0);

    let err = inspector.load(&no_time).unwrap_err();
    assert!(matches!(err, InspectError::Schema(_)));
    let err = inspector.load(dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, InspectError::SourceRead(_)));

    assert_eq!(inspector.source_path(), Some(good.as_path()));
    assert_eq!(inspector.current(), &["Temp"]);
    assert_eq!(inspector.explicit_range(), Some(TimeRange::new(0.0, 10.0)));
    assert_eq!(inspector.catalog().len(), 2);
}

#[test]
fn failed_assemble_leaves_state_untouched() {
    let mut inspector = Inspector::new();
    inspector.load_from_reader(SCENARIO.as_bytes(), "scenario").unwrap();
    inspector.add(&["Temp"]);
    inspector.set_range(20.0, 0.0);
    assert!(matches!(
        inspector.assemble(),
        Err(InspectError::InvalidRange { .. })
    ));
    assert_eq!(inspector.current(), &["Temp"]);
    assert_eq!(inspector.explicit_range(), Some(TimeRange::new(20.0, 0.0)));
}

#[test]
fn default_range_comes_from_table_bounds() {
    let mut inspector = Inspector::new();
    assert_eq!(inspector.default_range(), None);
    inspector.load_from_reader(SCENARIO.as_bytes(), "scenario").unwrap();
    assert_eq!(inspector.default_range(), Some(TimeRange::new(0.0, 20.0)));

    inspector.set_range(5.0, 15.0);
    assert_eq!(inspector.effective_range(), Some(TimeRange::new(5.0, 15.0)));
    inspector.add(&["Temp"]);
    let series = inspector.assemble().unwrap();
    assert_eq!(series[0].points, vec![(10.0, Some(21.0))]);

    inspector.clear_range();
    assert_eq!(inspector.effective_range(), Some(TimeRange::new(0.0, 20.0)));
}

#[test]
fn reload_resets_explicit_range() {
    let mut inspector = Inspector::new();
    inspector.load_from_reader(SCENARIO.as_bytes(), "a").unwrap();
    inspector.set_range(1.0, 2.0);
    inspector
        .load_from_reader("Time,Temp\ns,C\n100,1\n200,2\n".as_bytes(), "b")
        .unwrap();
    assert_eq!(inspector.explicit_range(), None);
    assert_eq!(inspector.effective_range(), Some(TimeRange::new(100.0, 200.0)));
}

#[test]
fn empty_table_loads_and_reports_downstream() {
    let mut inspector = Inspector::new();
    let report = inspector
        .load_from_reader("Time,Temp\ns,C\nend,1\n".as_bytes(), "empty")
        .unwrap();
    assert!(report.empty);
    assert_eq!(report.dropped_rows, 1);
    assert_eq!(inspector.default_range(), None);

    inspector.add(&["Temp"]);
    assert_eq!(inspector.assemble(), Err(InspectError::NoNumericData));
    assert!(inspector.filter(&TimeRange::new(0.0, 1.0)).unwrap().is_empty());
}

#[test]
fn unloaded_engine_reports_not_loaded() {
    let inspector = Inspector::new();
    assert!(!inspector.is_loaded());
    assert!(matches!(
        inspector.filter(&TimeRange::new(0.0, 1.0)),
        Err(InspectError::NotLoaded)
    ));
    assert!(inspector.catalog().is_empty());
}

#[test]
fn descriptions_come_from_the_configured_source() {
    let mut descriptions = BTreeMap::new();
    descriptions.insert("Temp".to_string(), "Zone air temperature".to_string());
    let mut inspector = Inspector::with_descriptions(descriptions);
    inspector.load_from_reader(SCENARIO.as_bytes(), "scenario").unwrap();

    assert_eq!(
        inspector.describe("Temp").map(|e| e.description.as_str()),
        Some("Zone air temperature")
    );
    assert_eq!(inspector.describe("CO2").map(|e| e.description.as_str()), Some(""));
    assert!(inspector.describe("Time").is_none());
}

#[test]
fn series_serialize_gaps_as_null() {
    let table = scenario_table();
    let series = assemble(&table, &["Temp"], &TimeRange::new(0.0, 20.0)).unwrap();
    let json = serde_json::to_value(&series[0]).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"name": "Temp", "points": [[0.0, 20.0], [10.0, 21.0], [20.0, null]]})
    );
}
