use crate::types::{ActivityId, RiskId, RiskStatus};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Axis values of the matrix, inclusive.
pub const AXIS_MIN: i32 = 1;
pub const AXIS_MAX: i32 = 5;

const HIGH_THRESHOLD: i32 = 16;
const MEDIUM_THRESHOLD: i32 = 9;

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn all() -> &'static [Severity] {
        &[Severity::Low, Severity::Medium, Severity::High]
    }

    pub fn from_score(score: i32) -> Self {
        if score >= HIGH_THRESHOLD {
            Severity::High
        } else if score >= MEDIUM_THRESHOLD {
            Severity::Medium
        } else {
            Severity::Low
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        };
        f.write_str(s)
    }
}

pub fn classify_severity(impact: i32, probability: i32) -> Severity {
    Severity::from_score(impact.saturating_mul(probability))
}

// ---------------------------------------------------------------------------
// Risk
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MitigationAction {
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Risk {
    pub id: RiskId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "crate::lenient::rating")]
    pub impact: Option<i32>,
    #[serde(default, deserialize_with = "crate::lenient::rating")]
    pub probability: Option<i32>,
    #[serde(default)]
    pub associated_activities: Vec<ActivityId>,
    #[serde(default)]
    pub mitigation_actions: Vec<MitigationAction>,
    #[serde(default)]
    pub status: RiskStatus,
}

impl Risk {
    pub fn new(id: impl Into<RiskId>, name: impl Into<String>, impact: i32, probability: i32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            impact: Some(impact),
            probability: Some(probability),
            associated_activities: Vec::new(),
            mitigation_actions: Vec::new(),
            status: RiskStatus::default(),
        }
    }

    pub fn score(&self) -> Option<i32> {
        Some(self.impact?.saturating_mul(self.probability?))
    }

    /// Badge tier for this risk, `None` when an axis is missing.
    pub fn severity(&self) -> Option<Severity> {
        Some(classify_severity(self.impact?, self.probability?))
    }

    pub fn is_active(&self) -> bool {
        self.status == RiskStatus::Active
    }

    /// True when both axes are present and inside the matrix bounds.
    pub fn in_matrix(&self) -> bool {
        let in_range = |v: Option<i32>| v.is_some_and(|v| (AXIS_MIN..=AXIS_MAX).contains(&v));
        in_range(self.impact) && in_range(self.probability)
    }
}

// ---------------------------------------------------------------------------
// RiskMatrix
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskMatrixCell<'a> {
    pub probability: i32,
    pub impact: i32,
    pub severity: Severity,
    pub risks: Vec<&'a Risk>,
}

impl RiskMatrixCell<'_> {
    pub fn is_empty(&self) -> bool {
        self.risks.is_empty()
    }
}

/// Rows run probability 5 down to 1, columns run impact 1 up to 5.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskMatrix<'a> {
    pub rows: Vec<Vec<RiskMatrixCell<'a>>>,
}

impl<'a> RiskMatrix<'a> {
    pub fn cell(&self, probability: i32, impact: i32) -> Option<&RiskMatrixCell<'a>> {
        if !(AXIS_MIN..=AXIS_MAX).contains(&probability) || !(AXIS_MIN..=AXIS_MAX).contains(&impact) {
            return None;
        }
        let row = (AXIS_MAX - probability) as usize;
        let col = (impact - AXIS_MIN) as usize;
        self.rows.get(row)?.get(col)
    }

    pub fn cells(&self) -> impl Iterator<Item = &RiskMatrixCell<'a>> {
        self.rows.iter().flatten()
    }

    /// Number of risks placed in the grid.
    pub fn total(&self) -> usize {
        self.cells().map(|c| c.risks.len()).sum()
    }
}

pub fn build_risk_matrix(risks: &[Risk]) -> RiskMatrix<'_> {
    let rows: Vec<Vec<RiskMatrixCell<'_>>> = (AXIS_MIN..=AXIS_MAX)
        .rev()
        .map(|probability| {
            (AXIS_MIN..=AXIS_MAX)
                .map(|impact| RiskMatrixCell {
                    probability,
                    impact,
                    severity: classify_severity(impact, probability),
                    risks: risks
                        .iter()
                        .filter(|r| r.probability == Some(probability) && r.impact == Some(impact))
                        .collect(),
                })
                .collect()
        })
        .collect();

    let matrix = RiskMatrix { rows };
    tracing::debug!(
        risks = risks.len(),
        placed = matrix.total(),
        "built risk matrix"
    );
    matrix
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
