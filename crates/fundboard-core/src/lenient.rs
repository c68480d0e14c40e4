//! Field deserializers for hand-edited plan files.
//!
//! A rating or amount that doesn't parse becomes a sentinel (`None`, NaN or
//! zero) instead of failing the whole plan load.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Int(i64),
    Float(f64),
    Text(String),
    Null(()),
    Other(IgnoredAny),
}

/// Whole-number rating. Fractions, out-of-range integers and non-numeric
/// text become `None`. Numeric strings such as `"3"` are accepted.
pub fn rating<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Loose::deserialize(deserializer)? {
        Loose::Int(n) => i32::try_from(n).ok(),
        Loose::Float(f) if f.is_finite() && f.fract() == 0.0 => {
            i32::try_from(f as i64).ok()
        }
        Loose::Text(s) => s.trim().parse().ok(),
        Loose::Float(_) | Loose::Null(()) | Loose::Other(_) => None,
    };
    Ok(value)
}

/// Money or quantity. Null reads as zero; anything unparseable reads as NaN
/// so it poisons the totals it flows into rather than hiding as zero.
pub fn amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Loose::deserialize(deserializer)? {
        Loose::Int(n) => n as f64,
        Loose::Float(f) => f,
        Loose::Text(s) => s.trim().parse().unwrap_or(f64::NAN),
        Loose::Null(()) => 0.0,
        Loose::Other(_) => f64::NAN,
    };
    Ok(value)
}

/// Like [`amount`] but keeps a missing value distinguishable.
pub fn optional_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Loose::deserialize(deserializer)? {
        Loose::Int(n) => Some(n as f64),
        Loose::Float(f) => Some(f),
        Loose::Text(s) => s.trim().parse().ok(),
        Loose::Null(()) | Loose::Other(_) => None,
    };
    Ok(value)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
