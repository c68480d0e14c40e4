use crate::date::Moment;
use crate::types::{ActivityId, DecisionGateId, DeliverableId};
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// MilestoneKind
// ---------------------------------------------------------------------------

/// The two flavours of zero-width marker on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneKind {
    Deliverable,
    DecisionGate,
}

impl fmt::Display for MilestoneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MilestoneKind::Deliverable => "deliverable",
            MilestoneKind::DecisionGate => "decision_gate",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// Deliverable
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deliverable {
    pub id: DeliverableId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub deadline: String,
    #[serde(default)]
    pub dependent_activities: Vec<ActivityId>,
    #[serde(default)]
    pub success_criteria: Vec<String>,
}

impl Deliverable {
    pub fn new(
        id: impl Into<DeliverableId>,
        name: impl Into<String>,
        deadline: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            deadline: deadline.into(),
            dependent_activities: Vec::new(),
            success_criteria: Vec::new(),
        }
    }

    pub fn deadline_moment(&self) -> Moment {
        Moment::parse(&self.deadline)
    }
}

// ---------------------------------------------------------------------------
// DecisionGate
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionGate {
    pub id: DecisionGateId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub date_time: String,
    #[serde(default)]
    pub objective: String,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl DecisionGate {
    pub fn new(
        id: impl Into<DecisionGateId>,
        name: impl Into<String>,
        date_time: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            date_time: date_time.into(),
            objective: String::new(),
            participants: Vec::new(),
        }
    }

    pub fn moment(&self) -> Moment {
        Moment::parse(&self.date_time)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
