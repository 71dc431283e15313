mod common;

use chrono::NaiveDate;
use player_stats_clean::{
    data::{Cell, Parsed},
    error::TableError,
    normalize::{club, height, hits, joined, money, weight},
    table::{Column, Table},
};
use proptest::prelude::*;

use common::sample_table;

#[test]
fn club_names_lose_leading_noise() {
    let cleaned = club::normalize(sample_table(), "Club").expect("clean club");
    assert_eq!(
        cleaned.cells("Club").unwrap(),
        &[
            Cell::text("FC Barcelona"),
            Cell::text("Juventus"),
            Cell::text("Atlético Madrid"),
            Cell::text("FC Köln"),
            Cell::Missing,
        ]
    );
}

#[test]
fn club_cleaning_example_is_stable() {
    assert_eq!(club::clean_club_name(" 3FC Barcelona "), "FC Barcelona");
    assert_eq!(club::clean_club_name("FC Barcelona"), "FC Barcelona");
}

#[test]
fn hit_counts_follow_examples() {
    assert_eq!(hits::parse_hits("1.2K"), Parsed::Parsed(1200));
    assert_eq!(hits::parse_hits("-"), Parsed::Unparseable);
    assert_eq!(hits::parse_hits("500"), Parsed::Parsed(500));
    assert_eq!(hits::parse_hits("abc"), Parsed::Unparseable);

    let cleaned = hits::normalize(sample_table(), "Hits").expect("clean hits");
    assert_eq!(
        cleaned.cells("Hits").unwrap(),
        &[
            Cell::Integer(771),
            Cell::Integer(562),
            Cell::Integer(150),
            Cell::Integer(1600),
            Cell::Missing,
        ]
    );
}

#[test]
fn weights_convert_to_kilograms() {
    assert_eq!(weight::parse_weight_kg("80kg"), Parsed::Parsed(80));
    assert_eq!(weight::parse_weight_kg("176lbs"), Parsed::Parsed(80));
    assert_eq!(weight::weight_cell(&Cell::Missing), Cell::Missing);

    let cleaned = weight::normalize(sample_table(), "Weight", "Weight_kg").expect("clean weight");
    assert!(!cleaned.has_column("Weight"));
    assert_eq!(
        cleaned.cells("Weight_kg").unwrap(),
        &[
            Cell::Integer(72),
            Cell::Integer(83),
            Cell::Integer(87),
            Cell::Integer(70),
            Cell::Missing,
        ]
    );
}

#[test]
fn heights_convert_to_centimetres() {
    assert_eq!(height::parse_height_cm("175cm"), Parsed::Parsed(175.0));
    assert_eq!(height::parse_height_cm("5'11\""), Parsed::Parsed(180.3));
    assert_eq!(height::parse_height_cm("unknown"), Parsed::Unparseable);
    assert_eq!(height::height_cell(&Cell::Float(180.0)), Cell::Missing);

    let cleaned = height::normalize(sample_table(), "Height", "Height_cm").expect("clean height");
    assert!(!cleaned.has_column("Height"));
    assert_eq!(
        cleaned.cells("Height_cm").unwrap(),
        &[
            Cell::Float(170.0),
            Cell::Float(187.0),
            Cell::Float(188.0),
            Cell::Float(180.3),
            Cell::Missing,
        ]
    );
}

#[test]
fn join_dates_parse_leniently() {
    let cleaned = joined::normalize(sample_table(), "Joined").expect("clean joined");
    let cells = cleaned.cells("Joined").unwrap();
    assert_eq!(
        cells[0],
        Cell::Date(NaiveDate::from_ymd_opt(2004, 7, 1).unwrap())
    );
    assert_eq!(
        cells[3],
        Cell::Date(NaiveDate::from_ymd_opt(2015, 8, 30).unwrap())
    );
    assert_eq!(cells[4], Cell::NotADate);
    assert!(cells[4].is_missing());
}

#[test]
fn money_columns_gain_suffix_and_lose_original() {
    assert_eq!(money::parse_money("€1.5M"), Parsed::Parsed(1_500_000.0));
    assert_eq!(money::parse_money("€500K"), Parsed::Parsed(500_000.0));
    assert_eq!(money::parse_money("€0"), Parsed::Parsed(0.0));
    assert_eq!(money::money_cell(&Cell::Integer(3)), Cell::Missing);

    let cleaned = money::normalize(
        sample_table(),
        &["Value", "Wage", "Release Clause"],
        money::DEFAULT_SUFFIX,
    )
    .expect("clean money");
    for original in ["Value", "Wage", "Release Clause"] {
        assert!(!cleaned.has_column(original));
    }
    assert_eq!(
        cleaned.cells("Wage_eur").unwrap(),
        &[
            Cell::Float(560_000.0),
            Cell::Float(220_000.0),
            Cell::Float(125_000.0),
            Cell::Float(370_000.0),
            Cell::Float(0.0),
        ]
    );
    assert_eq!(
        cleaned.cells("Value_eur").unwrap()[0],
        Cell::Float(103_500_000.0)
    );
}

#[test]
fn normalizers_keep_row_count() {
    let table = sample_table();
    let rows = table.row_count();
    let table = club::normalize(table, "Club").unwrap();
    let table = weight::normalize(table, "Weight", "Weight_kg").unwrap();
    let table = height::normalize(table, "Height", "Height_cm").unwrap();
    assert_eq!(table.row_count(), rows);
}

#[test]
fn normalizers_order_does_not_matter() {
    let forward = height::normalize(
        weight::normalize(sample_table(), "Weight", "Weight_kg").unwrap(),
        "Height",
        "Height_cm",
    )
    .unwrap();
    let backward = weight::normalize(
        height::normalize(sample_table(), "Height", "Height_cm").unwrap(),
        "Weight",
        "Weight_kg",
    )
    .unwrap();
    assert_eq!(
        forward.cells("Weight_kg").unwrap(),
        backward.cells("Weight_kg").unwrap()
    );
    assert_eq!(
        forward.cells("Height_cm").unwrap(),
        backward.cells("Height_cm").unwrap()
    );
}

#[test]
fn unknown_columns_are_structural_errors() {
    let table = Table::new(vec![Column::from_text("Name", ["A"])]).unwrap();
    assert_eq!(
        hits::normalize(table.clone(), "Hits").unwrap_err(),
        TableError::MissingColumn("Hits".to_string())
    );
    assert_eq!(
        weight::normalize(table, "Weight", "Weight_kg").unwrap_err(),
        TableError::MissingColumn("Weight".to_string())
    );
}

proptest! {
    #[test]
    fn club_cleaning_is_idempotent(raw in "[ \\t\\n0-9.#*-]{0,4}[A-Za-zÀ-ÿ0-9 .]{0,12}[ \\n]{0,2}") {
        let once = club::clean_club_name(&raw);
        let twice = club::clean_club_name(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn hit_counts_never_panic(raw in "\\PC{0,12}") {
        let _ = hits::parse_hits(&raw);
        let _ = weight::parse_weight_kg(&raw);
        let _ = height::parse_height_cm(&raw);
        let _ = money::parse_money(&raw);
    }
}
