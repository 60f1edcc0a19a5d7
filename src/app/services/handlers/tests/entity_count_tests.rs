//! Degree histogram semantics

use crate::app::models::{DataValue, ValueKind};
use crate::app::services::datavalue_parser::tests::claims_row;
use crate::app::services::datavalue_parser::parse_row;
use crate::app::services::handlers::{EntityCountHandler, ValueHandler};

#[test]
fn test_counts_subject_entity_per_parsed_value() {
    let mut handler = EntityCountHandler::new();

    parse_row(&claims_row("Q1", "string", "a", ""), &mut handler).unwrap();
    parse_row(&claims_row("Q1", "string", "b", ""), &mut handler).unwrap();
    parse_row(
        &claims_row("Q2", "quantity", r#"{"amount"=>"+1", "unit"=>"1"}"#, ""),
        &mut handler,
    )
    .unwrap();

    assert_eq!(handler.values_counted(), 3);
    assert_eq!(handler.distinct_entities(), 2);
    // Q2 has one occurrence, Q1 has two
    assert_eq!(handler.entities_within(1), 1);
    assert_eq!(handler.entities_within(2), 2);
}

#[test]
fn test_entity_reference_counts_target_too() {
    let mut handler = EntityCountHandler::new();
    parse_row(&claims_row("Q1", "wikibase-entityid", "", "Q99"), &mut handler).unwrap();

    // Both the subject and the referenced entity gained an edge
    assert_eq!(handler.distinct_entities(), 2);
    assert_eq!(handler.entities_within(1), 2);
}

#[test]
fn test_meta_variants_do_not_count() {
    let mut handler = EntityCountHandler::new();
    parse_row(&claims_row("Q1", "string", "novalue", ""), &mut handler).unwrap();
    parse_row(&claims_row("Q1", "wikibase-entityid", "", "XX"), &mut handler).unwrap();

    assert_eq!(handler.distinct_entities(), 0);
}

#[test]
fn test_threshold_buckets_are_cumulative() {
    let mut handler = EntityCountHandler::new();
    // Q1 gets 3 values, Q2 gets 1
    for _ in 0..3 {
        parse_row(&claims_row("Q1", "string", "x", ""), &mut handler).unwrap();
    }
    parse_row(&claims_row("Q2", "string", "x", ""), &mut handler).unwrap();

    assert_eq!(handler.entities_within(1), 1);
    assert_eq!(handler.entities_within(2), 1);
    assert_eq!(handler.entities_within(3), 2);
    assert_eq!(handler.entities_within(1000), 2);
}

#[test]
fn test_summary_on_empty_stream() {
    let mut handler = EntityCountHandler::new();
    assert_eq!(handler.distinct_entities(), 0);
    ValueHandler::<crate::app::services::tsv_reader::ClaimsRow>::summary(&mut handler).unwrap();
}

#[test]
fn test_direct_meta_delivery_is_skipped() {
    let row = claims_row("Q1", "string", "x", "");
    let mut handler = EntityCountHandler::new();
    handler
        .handle(&row, &DataValue::NoValue(ValueKind::Quantity))
        .unwrap();
    handler
        .handle(&row, &DataValue::Invalid(ValueKind::Time))
        .unwrap();
    assert_eq!(handler.distinct_entities(), 0);
}
