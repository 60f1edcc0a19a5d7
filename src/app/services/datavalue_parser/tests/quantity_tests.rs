//! Quantity payload decoding

use super::{qualifier_row, RecordingHandler};
use crate::app::models::{DataValue, QuantityValue, ValueKind};
use crate::app::services::datavalue_parser::parse_row;
use crate::Error;

fn parse_quantity(payload: &str) -> crate::Result<Vec<DataValue>> {
    let row = qualifier_row("quantity", payload, "");
    let mut handler = RecordingHandler::default();
    parse_row(&row, &mut handler)?;
    Ok(handler.values)
}

#[test]
fn test_quantity_with_unit() {
    let values =
        parse_quantity(r#"{"amount"=>"-3.54", "unit"=>"http://www.wikidata.org/entity/Q11573"}"#)
            .unwrap();
    assert_eq!(
        values,
        vec![DataValue::Quantity(QuantityValue {
            amount: "-3.54".to_string(),
            unit: Some("Q11573".to_string()),
            lower_bound: String::new(),
            upper_bound: String::new(),
        })]
    );
}

#[test]
fn test_quantity_dimensionless() {
    let values = parse_quantity(r#"{"amount"=>"+57613", "unit"=>"1"}"#).unwrap();
    match &values[0] {
        DataValue::Quantity(v) => {
            assert_eq!(v.amount, "+57613");
            assert_eq!(v.unit, None);
        }
        other => panic!("unexpected value: {:?}", other),
    }
}

#[test]
fn test_quantity_with_bounds() {
    let values = parse_quantity(
        r#"{"amount"=>"+50", "unit"=>"http://www.wikidata.org/entity/Q39369", "upperBound"=>"+51", "lowerBound"=>"+49"}"#,
    )
    .unwrap();
    match &values[0] {
        DataValue::Quantity(v) => {
            assert_eq!(v.upper_bound, "+51");
            assert_eq!(v.lower_bound, "+49");
        }
        other => panic!("unexpected value: {:?}", other),
    }
}

#[test]
fn test_quantity_upper_bound_only() {
    let values = parse_quantity(r#"{"amount"=>"+50", "unit"=>"1", "upperBound"=>"+51"}"#).unwrap();
    match &values[0] {
        DataValue::Quantity(v) => {
            assert_eq!(v.upper_bound, "+51");
            assert_eq!(v.lower_bound, "");
        }
        other => panic!("unexpected value: {:?}", other),
    }
}

#[test]
fn test_quantity_novalue() {
    let values = parse_quantity("novalue").unwrap();
    assert_eq!(values, vec![DataValue::NoValue(ValueKind::Quantity)]);
}

#[test]
fn test_unsigned_amount_is_invalid() {
    for payload in [
        r#"{"amount"=>"0", "unit"=>"1"}"#,
        r#"{"amount"=>"3.54", "unit"=>"1"}"#,
        r#"{"amount"=>"", "unit"=>"1"}"#,
    ] {
        let values = parse_quantity(payload).unwrap();
        assert_eq!(
            values,
            vec![DataValue::Invalid(ValueKind::Quantity)],
            "payload {:?}",
            payload
        );
    }
}

#[test]
fn test_quantity_structural_failure_is_fatal() {
    let err = parse_quantity(r#"{"amount"=>"+1"}"#).unwrap_err();
    assert!(matches!(
        err,
        Error::StructuralParse {
            datavalue_type: "quantity",
            ..
        }
    ));
}

#[test]
fn test_quantity_bad_unit_uri_is_fatal() {
    let err = parse_quantity(r#"{"amount"=>"+1", "unit"=>"meters"}"#).unwrap_err();
    assert!(matches!(
        err,
        Error::StructuralParse {
            datavalue_type: "quantity",
            ..
        }
    ));
}
