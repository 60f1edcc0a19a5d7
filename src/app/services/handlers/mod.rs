//! Handler capability and observer pipeline
//!
//! A [`ValueHandler`] receives `(row, value)` for every typed value the
//! dispatcher produces. The provided `handle` method splits the value on
//! its tag and forwards to one per-variant method; a handler implements
//! only the variants it cares about. Every per-variant default delegates
//! to [`ValueHandler::on_unhandled`], which is fatal unless overridden, so
//! a handler that is fed a variant outside its contract stops the job
//! instead of silently miscounting.
//!
//! Pipelines are plain tuples: `(stats, scale, emit)` owns its elements
//! and fans every value out to each of them in declaration order, then
//! does the same for `summary` once the stream ends.

pub mod csv_emit;
pub mod entity_count;
pub mod quantity_scale;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use csv_emit::CsvEmitHandler;
pub use entity_count::EntityCountHandler;
pub use quantity_scale::QuantityScaleHandler;
pub use stats::StatsHandler;

use crate::app::models::{
    CoordinateValue, DataValue, EntityIdValue, QuantityValue, StringValue, TextValue, TimeValue,
    ValueKind,
};
use crate::app::services::tsv_reader::WikidataRow;
use crate::{Error, Result};

/// Observer of the typed values produced for one dump stream
pub trait ValueHandler<R: WikidataRow> {
    /// Deliver one typed value; dispatches on the tag
    fn handle(&mut self, row: &R, value: &DataValue) -> Result<()> {
        match value {
            DataValue::String(v) => self.on_string(row, v),
            DataValue::EntityId(v) => self.on_entity_id(row, v),
            DataValue::Text(v) => self.on_text(row, v),
            DataValue::Time(v) => self.on_time(row, v),
            DataValue::Quantity(v) => self.on_quantity(row, v),
            DataValue::Coordinate(v) => self.on_coordinate(row, v),
            DataValue::NoValue(kind) => self.on_no_value(row, *kind),
            DataValue::Invalid(kind) => self.on_invalid(row, *kind),
        }
    }

    fn on_string(&mut self, _row: &R, _value: &StringValue) -> Result<()> {
        self.on_unhandled("string")
    }

    fn on_entity_id(&mut self, _row: &R, _value: &EntityIdValue) -> Result<()> {
        self.on_unhandled("entity")
    }

    fn on_text(&mut self, _row: &R, _value: &TextValue) -> Result<()> {
        self.on_unhandled("text")
    }

    fn on_time(&mut self, _row: &R, _value: &TimeValue) -> Result<()> {
        self.on_unhandled("time")
    }

    fn on_quantity(&mut self, _row: &R, _value: &QuantityValue) -> Result<()> {
        self.on_unhandled("quantity")
    }

    fn on_coordinate(&mut self, _row: &R, _value: &CoordinateValue) -> Result<()> {
        self.on_unhandled("coordinate")
    }

    fn on_no_value(&mut self, _row: &R, kind: ValueKind) -> Result<()> {
        self.on_unhandled(&format!("novalue<{}>", kind))
    }

    fn on_invalid(&mut self, _row: &R, kind: ValueKind) -> Result<()> {
        self.on_unhandled(&format!("invalid<{}>", kind))
    }

    /// Fallback for variants without an explicit implementation; fatal by
    /// default, overridden to `Ok(())` by handlers that observe a subset
    fn on_unhandled(&mut self, descriptor: &str) -> Result<()> {
        Err(Error::unhandled_value(
            std::any::type_name::<Self>(),
            descriptor,
        ))
    }

    /// Called exactly once after the stream ends
    fn summary(&mut self) -> Result<()> {
        Ok(())
    }
}

macro_rules! impl_handler_stack {
    ($($ty:ident => $idx:tt),+) => {
        impl<R: WikidataRow, $($ty: ValueHandler<R>),+> ValueHandler<R> for ($($ty,)+) {
            fn handle(&mut self, row: &R, value: &DataValue) -> Result<()> {
                $(self.$idx.handle(row, value)?;)+
                Ok(())
            }

            fn summary(&mut self) -> Result<()> {
                $(self.$idx.summary()?;)+
                Ok(())
            }
        }
    };
}

impl_handler_stack!(H0 => 0);
impl_handler_stack!(H0 => 0, H1 => 1);
impl_handler_stack!(H0 => 0, H1 => 1, H2 => 2);
impl_handler_stack!(H0 => 0, H1 => 1, H2 => 2, H3 => 3);
impl_handler_stack!(H0 => 0, H1 => 1, H2 => 2, H3 => 3, H4 => 4);
impl_handler_stack!(H0 => 0, H1 => 1, H2 => 2, H3 => 3, H4 => 4, H5 => 5);
