mod common;

use chrono::NaiveDate;
use player_stats_clean::{
    config::{CleanConfig, DerivedColumn},
    data::Cell,
    pipeline,
    scan::Category,
};

use common::{TestWorkspace, sample_table};

fn sample_config() -> CleanConfig {
    CleanConfig {
        drop_columns: vec!["photoUrl".to_string()],
        ..CleanConfig::default()
    }
}

#[test]
fn default_pipeline_produces_typed_columns() {
    let cleaned = pipeline::run(sample_table(), &sample_config()).expect("run pipeline");
    assert_eq!(
        cleaned.headers(),
        vec![
            "ID",
            "Name",
            "Club",
            "Joined",
            "Hits",
            "Weight_kg",
            "Height_cm",
            "Value_eur",
            "Wage_eur",
            "Release Clause_eur",
        ]
    );
    assert_eq!(cleaned.row_count(), 5);

    let messi = cleaned.row(0).expect("first row");
    assert_eq!(messi[2], &Cell::text("FC Barcelona"));
    assert_eq!(
        messi[3],
        &Cell::Date(NaiveDate::from_ymd_opt(2004, 7, 1).unwrap())
    );
    assert_eq!(messi[4], &Cell::Integer(771));
    assert_eq!(messi[5], &Cell::Integer(72));
    assert_eq!(messi[6], &Cell::Float(170.0));
    assert_eq!(messi[7], &Cell::Float(103_500_000.0));
    assert_eq!(messi[8], &Cell::Float(560_000.0));

    let unknown = cleaned.row(4).expect("last row");
    assert!(unknown[2..7].iter().all(|cell| cell.is_missing()));
    assert_eq!(unknown[9], &Cell::Float(0.0));
}

#[test]
fn pipeline_leaves_untouched_columns_alone() {
    let mut config = CleanConfig::empty();
    config.weight = Some(DerivedColumn::new("Weight", "Weight_kg"));
    let raw = sample_table();
    let cleaned = pipeline::run(raw.clone(), &config).expect("run pipeline");
    assert_eq!(cleaned.cells("Club").unwrap(), raw.cells("Club").unwrap());
    assert_eq!(cleaned.cells("Hits").unwrap(), raw.cells("Hits").unwrap());
}

#[test]
fn pipeline_stops_on_unknown_drop_column() {
    let mut config = sample_config();
    config.drop_columns.push("Stamina".to_string());
    let err = pipeline::run(sample_table(), &config).unwrap_err();
    assert_eq!(err.to_string(), "Column 'Stamina' not found in table");
}

#[test]
fn scan_uses_configured_columns() {
    let report = pipeline::scan(&sample_table(), &CleanConfig::default()).expect("scan");
    assert_eq!(report.len(), 7);
    assert_eq!(
        report
            .get("Release Clause")
            .unwrap()
            .count(Category::EndsInM),
        4
    );
}

#[test]
fn config_file_drives_pipeline() {
    let workspace = TestWorkspace::new();
    let path = workspace.write(
        "clean.yaml",
        "drop_columns: [photoUrl, ID]\nclub: null\njoined: null\nmoney:\n  columns: [Wage]\n  suffix: _euros\n",
    );
    let config = CleanConfig::load(&path).expect("load config");
    let cleaned = pipeline::run(sample_table(), &config).expect("run pipeline");
    assert!(cleaned.has_column("Wage_euros"));
    assert!(cleaned.has_column("Value"));
    assert_eq!(
        cleaned.cells("Club").unwrap()[0],
        Cell::text("\n\n\n\nFC Barcelona")
    );
    assert!(!cleaned.has_column("ID"));
}

#[test]
fn config_round_trips_through_json() {
    let workspace = TestWorkspace::new();
    let path = workspace.path().join("clean.json");
    let config = sample_config();
    config.save(&path).expect("save config");
    let loaded = CleanConfig::load(&path).expect("load config");
    assert_eq!(loaded, config);
}
