//! The per-type datavalue sub-parsers
//!
//! Each parser recognises one `datavalue_type` discriminator, decodes the
//! bespoke textual payload encoding, and delivers exactly one
//! [`DataValue`] to the handler. Violations of a payload's structural
//! shape are fatal (schema drift); semantic problems known to occur in
//! real dumps degrade to `Invalid` so the stats handler can quantify
//! them.

use tracing::error;

use super::patterns;
use crate::app::models::{
    CoordinateValue, DataValue, EntityIdValue, QuantityValue, StringValue, TextValue, TimeValue,
    ValueKind,
};
use crate::app::services::calendar;
use crate::app::services::handlers::ValueHandler;
use crate::app::services::tsv_reader::WikidataRow;
use crate::constants::{
    DATAVALUE_TYPE_COORDINATE, DATAVALUE_TYPE_ENTITY_ID, DATAVALUE_TYPE_QUANTITY,
    DATAVALUE_TYPE_STRING, DATAVALUE_TYPE_TEXT, DATAVALUE_TYPE_TIME, NOVALUE_LITERAL,
};
use crate::{Error, Result};

/// One branch of the dispatch chain
pub trait SubParser {
    /// Discriminator this parser recognises
    const TYPE_IDENTIFIER: &'static str;

    /// Whether this parser applies to the row
    fn can_parse<R: WikidataRow>(row: &R) -> bool {
        row.datavalue_type() == Self::TYPE_IDENTIFIER
    }

    /// Decode the payload and deliver one value to the handler
    fn parse<R: WikidataRow, H: ValueHandler<R>>(row: &R, handler: &mut H) -> Result<()>;
}

fn structural_error(datavalue_type: &'static str, payload: &str) -> Error {
    error!(
        "Unexpected {} string encountered: {}",
        datavalue_type, payload
    );
    Error::structural_parse(datavalue_type, payload)
}

/// Plain string payloads; decoding is trivial
pub struct StringParser;

impl SubParser for StringParser {
    const TYPE_IDENTIFIER: &'static str = DATAVALUE_TYPE_STRING;

    fn parse<R: WikidataRow, H: ValueHandler<R>>(row: &R, handler: &mut H) -> Result<()> {
        let value = row.datavalue_string();
        // Rows sometimes encode a missing string as an empty field rather
        // than the novalue literal; both count as declared-missing.
        if value == NOVALUE_LITERAL || value.is_empty() {
            return handler.handle(row, &DataValue::NoValue(ValueKind::String));
        }
        handler.handle(
            row,
            &DataValue::String(StringValue {
                value: value.to_string(),
            }),
        )
    }
}

/// Entity references, read from the dedicated entity column
pub struct EntityParser;

impl SubParser for EntityParser {
    const TYPE_IDENTIFIER: &'static str = DATAVALUE_TYPE_ENTITY_ID;

    fn parse<R: WikidataRow, H: ValueHandler<R>>(row: &R, handler: &mut H) -> Result<()> {
        let entity_id = row.datavalue_entity();
        if entity_id.is_empty() {
            return handler.handle(row, &DataValue::NoValue(ValueKind::EntityId));
        }
        if entity_id.len() < 2 || !(entity_id.starts_with('P') || entity_id.starts_with('Q')) {
            return handler.handle(row, &DataValue::Invalid(ValueKind::EntityId));
        }
        handler.handle(
            row,
            &DataValue::EntityId(EntityIdValue {
                value: entity_id.to_string(),
            }),
        )
    }
}

/// Monolingual text payloads
pub struct TextParser;

impl SubParser for TextParser {
    const TYPE_IDENTIFIER: &'static str = DATAVALUE_TYPE_TEXT;

    fn parse<R: WikidataRow, H: ValueHandler<R>>(row: &R, handler: &mut H) -> Result<()> {
        let text_str = row.datavalue_string();
        if text_str == NOVALUE_LITERAL {
            return handler.handle(row, &DataValue::NoValue(ValueKind::Text));
        }
        let caps = patterns::text_pattern()
            .captures(text_str)
            .ok_or_else(|| structural_error(DATAVALUE_TYPE_TEXT, text_str))?;
        handler.handle(
            row,
            &DataValue::Text(TextValue {
                text: caps[1].to_string(),
                language: caps[2].to_string(),
            }),
        )
    }
}

/// Timestamp payloads
pub struct TimeParser;

impl TimeParser {
    /// Decode a `[+-]YYYY-MM-DDThh:mm:ssZ` timestamp to epoch
    /// milliseconds.
    ///
    /// A month or day of `00` is first rewritten to `01` (in a copy; the
    /// caller keeps the captured string) because the dump encodes
    /// year-only and month-only precision that way and the instant must
    /// still be representable.
    fn parse_iso8601(time: &str) -> Option<i64> {
        let mut normalized = time.as_bytes().to_vec();
        if normalized.len() > 7 && normalized[6] == b'0' && normalized[7] == b'0' {
            normalized[7] = b'1';
        }
        if normalized.len() > 10 && normalized[9] == b'0' && normalized[10] == b'0' {
            normalized[10] = b'1';
        }
        let normalized = String::from_utf8(normalized).ok()?;

        let caps = patterns::iso8601_pattern().captures(&normalized)?;
        let year: i64 = caps[2].parse().ok()?;
        let year = if &caps[1] == "-" { -year } else { year };
        let month: u32 = caps[3].parse().ok()?;
        let day: u32 = caps[4].parse().ok()?;
        let hour: u32 = caps[5].parse().ok()?;
        let minute: u32 = caps[6].parse().ok()?;
        let second: u32 = caps[7].parse().ok()?;

        calendar::epoch_ms(year, month, day, hour, minute, second)
    }
}

impl SubParser for TimeParser {
    const TYPE_IDENTIFIER: &'static str = DATAVALUE_TYPE_TIME;

    fn parse<R: WikidataRow, H: ValueHandler<R>>(row: &R, handler: &mut H) -> Result<()> {
        let time_str = row.datavalue_string();
        if time_str == NOVALUE_LITERAL {
            return handler.handle(row, &DataValue::NoValue(ValueKind::Time));
        }
        let caps = patterns::time_pattern()
            .captures(time_str)
            .ok_or_else(|| structural_error(DATAVALUE_TYPE_TIME, time_str))?;

        let raw = &caps[1];
        let instant_ms = match Self::parse_iso8601(raw) {
            Some(instant) => instant,
            None => return handler.handle(row, &DataValue::Invalid(ValueKind::Time)),
        };

        let parse_field = |index: usize| -> Result<u64> {
            caps[index]
                .parse::<u64>()
                .map_err(|_| structural_error(DATAVALUE_TYPE_TIME, time_str))
        };

        handler.handle(
            row,
            &DataValue::Time(TimeValue {
                raw: raw.to_string(),
                instant_ms,
                calendar_model: caps[6].to_string(),
                timezone: parse_field(2)?,
                before: parse_field(3)?,
                after: parse_field(4)?,
                precision: parse_field(5)?,
            }),
        )
    }
}

/// Decimal quantity payloads
pub struct QuantityParser;

impl SubParser for QuantityParser {
    const TYPE_IDENTIFIER: &'static str = DATAVALUE_TYPE_QUANTITY;

    fn parse<R: WikidataRow, H: ValueHandler<R>>(row: &R, handler: &mut H) -> Result<()> {
        let quantity_str = row.datavalue_string();
        if quantity_str == NOVALUE_LITERAL {
            return handler.handle(row, &DataValue::NoValue(ValueKind::Quantity));
        }
        let caps = patterns::quantity_pattern()
            .captures(quantity_str)
            .ok_or_else(|| structural_error(DATAVALUE_TYPE_QUANTITY, quantity_str))?;

        let amount = &caps[1];
        let unit_str = &caps[2];
        let upper_bound = caps.get(4).map_or("", |m| m.as_str());
        let lower_bound = caps.get(6).map_or("", |m| m.as_str());

        if !(amount.starts_with('+') || amount.starts_with('-')) {
            return handler.handle(row, &DataValue::Invalid(ValueKind::Quantity));
        }

        let unit = if unit_str == "1" {
            None
        } else {
            let unit_caps = patterns::quantity_unit_pattern()
                .captures(unit_str)
                .ok_or_else(|| structural_error(DATAVALUE_TYPE_QUANTITY, quantity_str))?;
            Some(unit_caps[1].to_string())
        };

        handler.handle(
            row,
            &DataValue::Quantity(QuantityValue {
                amount: amount.to_string(),
                unit,
                lower_bound: lower_bound.to_string(),
                upper_bound: upper_bound.to_string(),
            }),
        )
    }
}

/// Globe coordinate payloads; fields stay textual, no reprojection
pub struct CoordinateParser;

impl SubParser for CoordinateParser {
    const TYPE_IDENTIFIER: &'static str = DATAVALUE_TYPE_COORDINATE;

    fn parse<R: WikidataRow, H: ValueHandler<R>>(row: &R, handler: &mut H) -> Result<()> {
        let coordinate_str = row.datavalue_string();
        if coordinate_str == NOVALUE_LITERAL {
            return handler.handle(row, &DataValue::NoValue(ValueKind::Coordinate));
        }
        let caps = patterns::coordinate_pattern()
            .captures(coordinate_str)
            .ok_or_else(|| structural_error(DATAVALUE_TYPE_COORDINATE, coordinate_str))?;
        handler.handle(
            row,
            &DataValue::Coordinate(CoordinateValue {
                latitude: caps[1].to_string(),
                longitude: caps[2].to_string(),
                altitude: caps[3].to_string(),
                precision: caps[4].to_string(),
                globe: caps[5].to_string(),
            }),
        )
    }
}
