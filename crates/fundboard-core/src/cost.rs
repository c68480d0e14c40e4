//! Cost and duration arithmetic shared by the task, activity and milestone views.
//!
//! Everything here is total over numeric input: zero divisors yield `inf`/`NaN`
//! rather than panicking, and unparseable dates yield `None`.

use crate::date;
use crate::milestone::Deliverable;
use crate::resource::{MaterialBilling, Resource, ResourceKind};
use crate::task::{tasks_for_activity, Task};
use crate::types::ActivityId;
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceCost {
    pub daily_cost: f64,
    pub total_cost: f64,
}

/// Inclusive day count between two calendar dates. Non-positive spans are
/// returned as computed.
pub fn resource_duration(start_date: &str, end_date: &str) -> Option<i64> {
    let start = date::parse_date(start_date)?;
    let end = date::parse_date(end_date)?;
    Some(date::inclusive_days(start, end))
}

pub fn resource_cost(resource: &Resource, quantity: f64, duration_days: i64) -> ResourceCost {
    let days = duration_days as f64;
    match &resource.kind {
        ResourceKind::Human { cost_per_day } => ResourceCost {
            daily_cost: *cost_per_day,
            total_cost: cost_per_day * quantity * days,
        },
        ResourceKind::Material {
            cost_amount,
            billing: MaterialBilling::OneTime,
        } => ResourceCost {
            // informational only
            daily_cost: cost_amount / days,
            total_cost: cost_amount * quantity,
        },
        ResourceKind::Material {
            cost_amount,
            billing: MaterialBilling::Recurring {
                amortization_period,
            },
        } => {
            let daily_cost = cost_amount / amortization_period;
            ResourceCost {
                daily_cost,
                total_cost: daily_cost * quantity * days,
            }
        }
    }
}

pub fn task_total_cost(task: &Task) -> f64 {
    task.resources.iter().map(|r| r.total_cost).sum()
}

pub fn activity_total_cost(activity_id: &ActivityId, tasks: &[Task]) -> f64 {
    tasks_for_activity(tasks, activity_id)
        .map(task_total_cost)
        .sum()
}

/// Sum of task durations in the activity; tasks with unparseable dates add nothing.
pub fn activity_duration(activity_id: &ActivityId, tasks: &[Task]) -> i64 {
    tasks_for_activity(tasks, activity_id)
        .filter_map(Task::duration_days)
        .sum()
}

/// Cost rolled up from every activity the deliverable depends on. Repeated
/// activity references are counted once.
pub fn deliverable_total_cost(deliverable: &Deliverable, tasks: &[Task]) -> f64 {
    let mut seen = HashSet::new();
    deliverable
        .dependent_activities
        .iter()
        .filter(|id| seen.insert(*id))
        .map(|id| activity_total_cost(id, tasks))
        .sum()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::ResourceAssignment;

    fn assignment(total: f64) -> ResourceAssignment {
        let mut r = ResourceAssignment::new("r1", 1.0);
        r.total_cost = total;
        r
    }

    fn costed_task(id: &str, activity: &str, totals: &[f64]) -> Task {
        let mut t = Task::new(id, activity, "2025-01-01", "2025-01-05");
        t.resources = totals.iter().map(|&c| assignment(c)).collect();
        t
    }

    #[test]
    fn duration_is_inclusive() {
        assert_eq!(resource_duration("2025-01-01", "2025-01-05"), Some(5));
        assert_eq!(resource_duration("2025-01-01", "2025-01-01"), Some(1));
        assert_eq!(resource_duration("2025-01-05", "2025-01-01"), Some(-3));
        assert_eq!(resource_duration("2025-01-01", "n/a"), None);
    }

    #[test]
    fn human_cost() {
        let r = Resource::human("r1", "Analyst", 100.0);
        let c = resource_cost(&r, 2.0, 5);
        assert_eq!(c.daily_cost, 100.0);
        assert_eq!(c.total_cost, 1000.0);
    }

    #[test]
    fn one_time_material_cost() {
        let r = Resource::material("r2", "Tent", 400.0, MaterialBilling::OneTime);
        let c = resource_cost(&r, 3.0, 4);
        assert_eq!(c.total_cost, 1200.0);
        assert_eq!(c.daily_cost, 100.0);
    }

    #[test]
    fn recurring_material_cost() {
        let r = Resource::material(
            "r3",
            "Generator rental",
            300.0,
            MaterialBilling::Recurring {
                amortization_period: 30.0,
            },
        );
        let c = resource_cost(&r, 2.0, 15);
        assert_eq!(c.daily_cost, 10.0);
        assert_eq!(c.total_cost, 300.0);
    }

    #[test]
    fn zero_duration_does_not_panic() {
        let r = Resource::material("r2", "Tent", 400.0, MaterialBilling::OneTime);
        let c = resource_cost(&r, 1.0, 0);
        assert!(c.daily_cost.is_infinite());
        assert_eq!(c.total_cost, 400.0);

        let r = Resource::material(
            "r3",
            "Lease",
            0.0,
            MaterialBilling::Recurring {
                amortization_period: 0.0,
            },
        );
        assert!(resource_cost(&r, 1.0, 3).daily_cost.is_nan());
    }

    #[test]
    fn task_and_activity_totals() {
        let tasks = vec![
            costed_task("t1", "a1", &[100.0, 250.5]),
            costed_task("t2", "a1", &[49.5]),
            costed_task("t3", "a2", &[1000.0]),
        ];
        assert_eq!(task_total_cost(&tasks[0]), 350.5);
        assert_eq!(activity_total_cost(&ActivityId::new("a1"), &tasks), 400.0);
        assert_eq!(activity_total_cost(&ActivityId::new("zz"), &tasks), 0.0);
        assert_eq!(activity_duration(&ActivityId::new("a1"), &tasks), 10);
    }

    #[test]
    fn activity_duration_skips_bad_dates() {
        let tasks = vec![
            Task::new("t1", "a1", "2025-01-01", "2025-01-02"),
            Task::new("t2", "a1", "bogus", "2025-01-02"),
        ];
        assert_eq!(activity_duration(&ActivityId::new("a1"), &tasks), 2);
    }

    #[test]
    fn deliverable_cost_dedups_activities() {
        let tasks = vec![
            costed_task("t1", "a1", &[100.0]),
            costed_task("t2", "a2", &[50.0]),
        ];
        let mut d = Deliverable::new("d1", "Report", "2025-02-01");
        d.dependent_activities = vec!["a1".into(), "a2".into(), "a1".into()];
        assert_eq!(deliverable_total_cost(&d, &tasks), 150.0);
    }
}
