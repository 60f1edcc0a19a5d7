//! Payload shape patterns
//!
//! These patterns are part of the input contract: the dump writes its
//! nested-map literals byte for byte in this shape, and a payload that
//! does not match the pattern for its declared discriminator means the
//! export schema drifted. Patterns are anchored because a match must
//! cover the whole payload.

use regex::Regex;
use std::sync::OnceLock;

static TEXT_RE: OnceLock<Regex> = OnceLock::new();
static TIME_RE: OnceLock<Regex> = OnceLock::new();
static QUANTITY_RE: OnceLock<Regex> = OnceLock::new();
static QUANTITY_UNIT_RE: OnceLock<Regex> = OnceLock::new();
static COORDINATE_RE: OnceLock<Regex> = OnceLock::new();
static ISO8601_RE: OnceLock<Regex> = OnceLock::new();

/// `{"text"=>"…", "language"=>"…"}`
pub fn text_pattern() -> &'static Regex {
    TEXT_RE.get_or_init(|| {
        Regex::new(r#"^\{"text"=>"(.*?)", "language"=>"([^"]*?)"\}$"#).unwrap()
    })
}

/// `{"time"=>"+2023-09-13T00:00:00Z", "timezone"=>0, "before"=>0,
/// "after"=>0, "precision"=>11,
/// "calendarmodel"=>"http://www.wikidata.org/entity/Q1985727"}`
pub fn time_pattern() -> &'static Regex {
    TIME_RE.get_or_init(|| {
        Regex::new(
            r#"^\{"time"=>"([^"]*?)", "timezone"=>(\d+), "before"=>(\d+), "after"=>(\d+), "precision"=>(\d+).*, "calendarmodel"=>"http://www.wikidata.org/entity/([^"]*?)"\}$"#,
        )
        .unwrap()
    })
}

/// `{"amount"=>"-3.54", "unit"=>"http://www.wikidata.org/entity/Q11573"}`
/// with optional `upperBound`/`lowerBound` members
pub fn quantity_pattern() -> &'static Regex {
    QUANTITY_RE.get_or_init(|| {
        Regex::new(
            r#"^\{"amount"=>"([^"]*?)", "unit"=>"([^"]*?)"(, "upperBound"=>"([^"]*?)")?(, "lowerBound"=>"([^"]*?)")?\}$"#,
        )
        .unwrap()
    })
}

/// The unit member when it is not the dimensionless literal `"1"`
pub fn quantity_unit_pattern() -> &'static Regex {
    QUANTITY_UNIT_RE
        .get_or_init(|| Regex::new(r"^http://www.wikidata.org/entity/(.*)$").unwrap())
}

/// `{"latitude"=>38.70661, "longitude"=>-77.08723, "altitude"=>nil,
/// "precision"=>0.000277778, "globe"=>"http://www.wikidata.org/entity/Q2"}`
pub fn coordinate_pattern() -> &'static Regex {
    COORDINATE_RE.get_or_init(|| {
        Regex::new(
            r#"^\{"latitude"=>([^,]*?), "longitude"=>([^,]*?), "altitude"=>([^,]*?), "precision"=>([^,]*?), "globe"=>"([^"]*?)"\}$"#,
        )
        .unwrap()
    })
}

/// `[+-]YYYY-MM-DDThh:mm:ssZ` with a variable-width year
pub fn iso8601_pattern() -> &'static Regex {
    ISO8601_RE.get_or_init(|| {
        Regex::new(r"^([+-]?)(\d+)-(\d{2})-(\d{2})T(\d{2}):(\d{2}):(\d{2})Z$").unwrap()
    })
}
