//! Counting semantics of the stats handler

use crate::app::models::{DataValue, ValueKind};
use crate::app::services::datavalue_parser::tests::qualifier_row;
use crate::app::services::datavalue_parser::parse_row;
use crate::app::services::handlers::{StatsHandler, ValueHandler};

fn feed(handler: &mut StatsHandler, rows: &[(&str, &str, &str)]) {
    for (dv_type, dv_string, dv_entity) in rows {
        let row = qualifier_row(dv_type, dv_string, dv_entity);
        parse_row(&row, handler).unwrap();
    }
}

fn mixed_stream() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        ("string", "hello", ""),
        ("string", "novalue", ""),
        ("wikibase-entityid", "", "Q42"),
        ("wikibase-entityid", "", "XX"),
        ("quantity", r#"{"amount"=>"+1", "unit"=>"1"}"#, ""),
        ("quantity", r#"{"amount"=>"1", "unit"=>"1"}"#, ""),
        ("time", "novalue", ""),
    ]
}

#[test]
fn test_counters_split_by_outcome() {
    let mut stats = StatsHandler::new(false);
    feed(&mut stats, &mixed_stream());

    assert_eq!(stats.parsed(ValueKind::String), 1);
    assert_eq!(stats.missing(ValueKind::String), 1);
    assert_eq!(stats.parsed(ValueKind::EntityId), 1);
    assert_eq!(stats.invalid(ValueKind::EntityId), 1);
    assert_eq!(stats.parsed(ValueKind::Quantity), 1);
    assert_eq!(stats.invalid(ValueKind::Quantity), 1);
    assert_eq!(stats.missing(ValueKind::Time), 1);
}

#[test]
fn test_row_count_includes_meta_variants() {
    let mut stats = StatsHandler::new(false);
    feed(&mut stats, &mixed_stream());

    // Every delivery counts, so the total exceeds the parsed sum
    assert_eq!(stats.row_count(), 7);
    let parsed_total: u64 = ValueKind::all().iter().map(|k| stats.parsed(*k)).sum();
    assert_eq!(parsed_total, 3);
}

#[test]
fn test_double_run_doubles_counts() {
    let stream = mixed_stream();

    let mut once = StatsHandler::new(false);
    feed(&mut once, &stream);

    let mut twice = StatsHandler::new(false);
    feed(&mut twice, &stream);
    feed(&mut twice, &stream);

    assert_eq!(twice.row_count(), 2 * once.row_count());
    for kind in ValueKind::all() {
        assert_eq!(twice.parsed(*kind), 2 * once.parsed(*kind));
        assert_eq!(twice.missing(*kind), 2 * once.missing(*kind));
        assert_eq!(twice.invalid(*kind), 2 * once.invalid(*kind));
    }
}

#[test]
fn test_empty_stream_counters_and_summary() {
    let mut stats = StatsHandler::new(false);
    assert_eq!(stats.row_count(), 0);
    for kind in ValueKind::all() {
        assert_eq!(stats.parsed(*kind), 0);
        assert_eq!(stats.missing(*kind), 0);
        assert_eq!(stats.invalid(*kind), 0);
    }
    // Summary on an empty stream still succeeds
    ValueHandler::<crate::app::services::tsv_reader::QualifiersRow>::summary(&mut stats).unwrap();
}

#[test]
fn test_report_snapshot() {
    let mut stats = StatsHandler::new(false);
    feed(&mut stats, &mixed_stream());

    let report = stats.report();
    assert_eq!(report.row_count, 7);
    assert_eq!(report.parsed.total(), 3);
    assert_eq!(report.missing.total(), 2);
    assert_eq!(report.invalid.total(), 2);

    // The report serializes for --stats-json
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"row_count\":7"));
}

#[test]
fn test_invalid_time_with_illegal_value_printing() {
    let row = qualifier_row(
        "time",
        r#"{"time"=>"+2023-02-30T00:00:00Z", "timezone"=>0, "before"=>0, "after"=>0, "precision"=>11, "calendarmodel"=>"http://www.wikidata.org/entity/Q1985727"}"#,
        "",
    );
    let mut stats = StatsHandler::new(true);
    parse_row(&row, &mut stats).unwrap();
    assert_eq!(stats.invalid(ValueKind::Time), 1);
}

#[test]
fn test_direct_meta_delivery() {
    let row = qualifier_row("string", "x", "");
    let mut stats = StatsHandler::new(false);
    stats
        .handle(&row, &DataValue::NoValue(ValueKind::Coordinate))
        .unwrap();
    stats
        .handle(&row, &DataValue::Invalid(ValueKind::Text))
        .unwrap();
    assert_eq!(stats.missing(ValueKind::Coordinate), 1);
    assert_eq!(stats.invalid(ValueKind::Text), 1);
    assert_eq!(stats.row_count(), 2);
}
