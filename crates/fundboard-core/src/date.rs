use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Serialize, Serializer};
use std::fmt;

const DATE_FORMAT: &str = "%Y-%m-%d";

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

// ---------------------------------------------------------------------------
// Moment
// ---------------------------------------------------------------------------

/// A resolved point in time on the chart.
///
/// Unparseable input becomes `Invalid` instead of an error so that display
/// code can render a fallback. Every valid moment orders before `Invalid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Moment {
    At(NaiveDateTime),
    Invalid,
}

impl Moment {
    pub fn parse(raw: &str) -> Self {
        parse_date_time(raw).map_or(Moment::Invalid, Moment::At)
    }

    pub fn is_valid(self) -> bool {
        matches!(self, Moment::At(_))
    }

    pub fn value(self) -> Option<NaiveDateTime> {
        match self {
            Moment::At(at) => Some(at),
            Moment::Invalid => None,
        }
    }
}

impl fmt::Display for Moment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Moment::At(at) => write!(f, "{}", at.format("%Y-%m-%dT%H:%M:%S")),
            Moment::Invalid => f.write_str("Invalid Date"),
        }
    }
}

impl Serialize for Moment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Moment::At(at) => serializer.collect_str(&at.format("%Y-%m-%dT%H:%M:%S")),
            Moment::Invalid => serializer.serialize_none(),
        }
    }
}

// ---------------------------------------------------------------------------
// Parsing helpers
// ---------------------------------------------------------------------------

/// Parse a calendar date (`YYYY-MM-DD`). Date-time strings resolve to their
/// calendar date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .or_else(|| parse_date_time(raw).map(|dt| dt.date()))
}

/// Parse a calendar date or a date-time. Bare dates resolve to midnight and
/// RFC 3339 offsets are normalized to UTC.
pub fn parse_date_time(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Some(date.and_time(NaiveTime::MIN));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// Inclusive calendar-day count between two dates: `(end - start) + 1`.
pub fn inclusive_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
