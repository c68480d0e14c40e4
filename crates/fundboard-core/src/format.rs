//! Display formatting for money, dates and percentages.
//!
//! One `Formatter` is built from the configured locale settings and handed
//! to every view, so no call site carries its own formatting rules.

use crate::config::FormatConfig;
use crate::date::Moment;
use std::fmt::Write as _;

pub const NOT_AVAILABLE: &str = "N/A";
pub const INVALID_DATE: &str = "Invalid date";

#[derive(Debug, Clone)]
pub struct Formatter {
    config: FormatConfig,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(&FormatConfig::default())
    }
}

impl Formatter {
    pub fn new(config: &FormatConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// `$1,234.50` by default; non-finite amounts render as `N/A`.
    pub fn currency(&self, amount: f64) -> String {
        if !amount.is_finite() {
            return NOT_AVAILABLE.to_string();
        }
        let number = self.number(amount, self.config.currency_decimals);
        if self.config.symbol_after {
            format!("{number} {}", self.config.currency_symbol)
        } else if let Some(unsigned) = number.strip_prefix('-') {
            format!("-{}{unsigned}", self.config.currency_symbol)
        } else {
            format!("{}{number}", self.config.currency_symbol)
        }
    }

    pub fn date(&self, moment: Moment) -> String {
        let Some(at) = moment.value() else {
            return INVALID_DATE.to_string();
        };
        let mut out = String::new();
        // chrono reports bad strftime patterns as a fmt error
        if write!(out, "{}", at.format(&self.config.date_format)).is_err() {
            return at.format("%Y-%m-%d").to_string();
        }
        out
    }

    /// One decimal place, e.g. `42.5%`.
    pub fn percent(&self, value: f64) -> String {
        if !value.is_finite() {
            return NOT_AVAILABLE.to_string();
        }
        format!("{}%", self.number(value, 1))
    }

    pub fn days(&self, days: Option<i64>) -> String {
        match days {
            Some(1) => "1 day".to_string(),
            Some(n) => format!("{n} days"),
            None => NOT_AVAILABLE.to_string(),
        }
    }

    fn number(&self, value: f64, decimals: usize) -> String {
        let fixed = format!("{:.*}", decimals, value.abs());
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (fixed.as_str(), None),
        };

        let mut grouped = String::with_capacity(fixed.len() + int_part.len() / 3);
        for (i, ch) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                grouped.push_str(&self.config.thousands_separator);
            }
            grouped.push(ch);
        }
        if let Some(frac) = frac_part {
            grouped.push_str(&self.config.decimal_separator);
            grouped.push_str(frac);
        }

        let is_zero = fixed.chars().all(|c| c == '0' || c == '.');
        if value.is_sign_negative() && !is_zero {
            format!("-{grouped}")
        } else {
            grouped
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
