use crate::error::{FundboardError, Result};
use crate::paths;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// FormatConfig
// ---------------------------------------------------------------------------

/// Locale settings for every currency, date and percentage shown to users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatConfig {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Render the symbol after the amount ("1.234,50 €").
    #[serde(default)]
    pub symbol_after: bool,
    #[serde(default = "default_currency_decimals")]
    pub currency_decimals: usize,
    #[serde(default = "default_thousands_separator")]
    pub thousands_separator: String,
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: String,
    /// chrono strftime pattern.
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_currency_decimals() -> usize {
    2
}

fn default_thousands_separator() -> String {
    ",".to_string()
}

fn default_decimal_separator() -> String {
    ".".to_string()
}

fn default_date_format() -> String {
    "%b %d, %Y".to_string()
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            symbol_after: false,
            currency_decimals: default_currency_decimals(),
            thousands_separator: default_thousands_separator(),
            decimal_separator: default_decimal_separator(),
            date_format: default_date_format(),
        }
    }
}

// ---------------------------------------------------------------------------
// TimelineConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineConfig {
    #[serde(default = "default_deliverable_color")]
    pub deliverable_color: String,
    #[serde(default = "default_decision_gate_color")]
    pub decision_gate_color: String,
    /// What to do with tasks whose `activityId` names no activity record.
    ///
    /// `false` (the default) keeps the group and emits its activity bar with
    /// an empty name, so no scheduled work vanishes from the chart. `true`
    /// treats such tasks as orphans and drops them together with the bar.
    #[serde(default)]
    pub drop_unknown_activities: bool,
}

fn default_deliverable_color() -> String {
    "#f59e0b".to_string()
}

fn default_decision_gate_color() -> String {
    "#8b5cf6".to_string()
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            deliverable_color: default_deliverable_color(),
            decision_gate_color: default_decision_gate_color(),
            drop_unknown_activities: false,
        }
    }
}

// ---------------------------------------------------------------------------
// ProjectConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// Config (top-level)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    pub project: ProjectConfig,
    #[serde(default)]
    pub format: FormatConfig,
    #[serde(default)]
    pub timeline: TimelineConfig,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self::new("untitled")
    }
}

impl Config {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            version: 1,
            project: ProjectConfig {
                name: project_name.into(),
                description: None,
            },
            format: FormatConfig::default(),
            timeline: TimelineConfig::default(),
        }
    }

    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Err(FundboardError::NotInitialized);
        }
        let data = std::fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    /// Like [`Config::load`], but an uninitialized root yields the defaults.
    pub fn load_or_default(root: &Path) -> Result<Self> {
        match Self::load(root) {
            Err(FundboardError::NotInitialized) => {
                tracing::debug!(root = %root.display(), "no config found, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        for (key, color) in [
            ("timeline.deliverable_color", &self.timeline.deliverable_color),
            ("timeline.decision_gate_color", &self.timeline.decision_gate_color),
        ] {
            if !color_re().is_match(color) {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Error,
                    message: format!("{key} '{color}' is not a #rrggbb color"),
                });
            }
        }

        if self.format.date_format.trim().is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "format.date_format is empty".to_string(),
            });
        }

        if self.format.currency_decimals > 4 {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!(
                    "format.currency_decimals={} (>4 is unusual)",
                    self.format.currency_decimals
                ),
            });
        }

        if self.format.thousands_separator == self.format.decimal_separator {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!(
                    "format.thousands_separator and format.decimal_separator are both '{}'",
                    self.format.decimal_separator
                ),
            });
        }

        warnings
    }
}

static COLOR_RE: OnceLock<Regex> = OnceLock::new();

fn color_re() -> &'static Regex {
    COLOR_RE.get_or_init(|| Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
