use crate::date::{self, Moment};
use crate::types::{ActivityId, Priority, ResourceId, TaskId, TaskStatus};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// DateRange
// ---------------------------------------------------------------------------

/// Inclusive calendar-date range, stored as the raw strings the record carried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start_date: String,
    pub end_date: String,
}

impl DateRange {
    pub fn new(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }

    /// Inclusive day count, `None` when either bound is unparseable.
    pub fn duration_days(&self) -> Option<i64> {
        crate::cost::resource_duration(&self.start_date, &self.end_date)
    }
}

// ---------------------------------------------------------------------------
// ResourceAssignment
// ---------------------------------------------------------------------------

/// A resource bound to a task, either for one range or a list of ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceAssignment {
    pub resource_id: ResourceId,
    #[serde(default, deserialize_with = "crate::lenient::amount")]
    pub quantity: f64,
    #[serde(default, deserialize_with = "crate::lenient::amount")]
    pub daily_cost: f64,
    #[serde(default, deserialize_with = "crate::lenient::amount")]
    pub total_cost: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub date_ranges: Vec<DateRange>,
}

impl ResourceAssignment {
    pub fn new(resource_id: impl Into<ResourceId>, quantity: f64) -> Self {
        Self {
            resource_id: resource_id.into(),
            quantity,
            daily_cost: 0.0,
            total_cost: 0.0,
            start_date: None,
            end_date: None,
            date_ranges: Vec::new(),
        }
    }

    /// The explicit `date_ranges` list wins over the single start/end pair.
    pub fn ranges(&self) -> Vec<DateRange> {
        if !self.date_ranges.is_empty() {
            return self.date_ranges.clone();
        }
        match (&self.start_date, &self.end_date) {
            (Some(start), Some(end)) => vec![DateRange::new(start.as_str(), end.as_str())],
            _ => Vec::new(),
        }
    }

    /// Sum of inclusive durations over all ranges. Unparseable ranges count as zero.
    pub fn duration_days(&self) -> i64 {
        self.ranges()
            .iter()
            .filter_map(DateRange::duration_days)
            .sum()
    }
}

// ---------------------------------------------------------------------------
// Task
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub activity_id: ActivityId,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub resources: Vec<ResourceAssignment>,
}

impl Task {
    pub fn new(
        id: impl Into<TaskId>,
        activity_id: impl Into<ActivityId>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            activity_id: activity_id.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
            status: TaskStatus::default(),
            priority: Priority::default(),
            resources: Vec::new(),
        }
    }

    pub fn start(&self) -> Moment {
        Moment::parse(&self.start_date)
    }

    pub fn end(&self) -> Moment {
        Moment::parse(&self.end_date)
    }

    /// Inclusive duration of the task's own date range.
    pub fn duration_days(&self) -> Option<i64> {
        let start = date::parse_date(&self.start_date)?;
        let end = date::parse_date(&self.end_date)?;
        Some(date::inclusive_days(start, end))
    }
}

// ---------------------------------------------------------------------------
// Task list helpers
// ---------------------------------------------------------------------------

pub fn tasks_for_activity<'a>(
    tasks: &'a [Task],
    activity_id: &'a ActivityId,
) -> impl Iterator<Item = &'a Task> + 'a {
    tasks.iter().filter(move |t| &t.activity_id == activity_id)
}

/// Human-readable summary: "3/5 completed, 1 in progress, 1 blocked"
pub fn summarize(tasks: &[Task]) -> String {
    let total = tasks.len();
    let count = |s: TaskStatus| tasks.iter().filter(|t| t.status == s).count();
    let done = count(TaskStatus::Completed);
    let in_progress = count(TaskStatus::InProgress);
    let blocked = count(TaskStatus::Blocked);
    format!("{done}/{total} completed, {in_progress} in progress, {blocked} blocked")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
