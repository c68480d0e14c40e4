//! Gantt model for the project timeline view.
//!
//! Tasks are grouped under their activity and the activity bar spans the
//! earliest task start to the latest task end. Deliverables and decision
//! gates become zero-width milestones. The output is ordered by start.

use crate::activity::Activity;
use crate::config::TimelineConfig;
use crate::date::Moment;
use crate::error::FundboardError;
use crate::index::PlanIndex;
use crate::milestone::{DecisionGate, Deliverable, MilestoneKind};
use crate::task::Task;
use crate::types::ActivityId;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

// ---------------------------------------------------------------------------
// TimelineKind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineKind {
    Activity,
    Task,
    Milestone,
}

impl TimelineKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TimelineKind::Activity => "activity",
            TimelineKind::Task => "task",
            TimelineKind::Milestone => "milestone",
        }
    }

    /// Name used by Gantt chart libraries, where a parent bar is a "project".
    pub fn chart_type(self) -> &'static str {
        match self {
            TimelineKind::Activity => "project",
            TimelineKind::Task => "task",
            TimelineKind::Milestone => "milestone",
        }
    }
}

impl fmt::Display for TimelineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TimelineKind {
    type Err = FundboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "activity" | "project" => Ok(TimelineKind::Activity),
            "task" => Ok(TimelineKind::Task),
            "milestone" => Ok(TimelineKind::Milestone),
            _ => Err(FundboardError::InvalidKind(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// TimelineItem
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemStyle {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineItem {
    pub kind: TimelineKind,
    pub id: String,
    pub name: String,
    pub start: Moment,
    pub end: Moment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<ActivityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<MilestoneKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ItemStyle>,
}

impl TimelineItem {
    fn milestone_at(
        id: &str,
        name: &str,
        at: Moment,
        kind: MilestoneKind,
        color: &str,
    ) -> Self {
        Self {
            kind: TimelineKind::Milestone,
            id: id.to_string(),
            name: name.to_string(),
            start: at,
            end: at,
            parent: None,
            milestone: Some(kind),
            style: Some(ItemStyle {
                color: color.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// TimelineBuilder
// ---------------------------------------------------------------------------

pub struct TimelineBuilder<'c> {
    config: &'c TimelineConfig,
}

impl<'c> TimelineBuilder<'c> {
    pub fn new(config: &'c TimelineConfig) -> Self {
        Self { config }
    }

    pub fn build(
        &self,
        activities: &[Activity],
        tasks: &[Task],
        deliverables: &[Deliverable],
        decision_gates: &[DecisionGate],
    ) -> Vec<TimelineItem> {
        let index = PlanIndex::new(activities, &[]);
        let mut items = Vec::with_capacity(
            tasks.len() + activities.len() + deliverables.len() + decision_gates.len(),
        );
        let mut dropped = 0usize;

        for (activity_id, group) in group_by_activity(tasks) {
            let activity = index.activity(activity_id);
            if activity.is_none() && self.config.drop_unknown_activities {
                tracing::debug!(activity = %activity_id, tasks = group.len(), "dropping tasks of unknown activity");
                dropped += group.len();
                continue;
            }

            let start = group
                .iter()
                .map(|t| t.start())
                .filter(|m| m.is_valid())
                .min()
                .unwrap_or(Moment::Invalid);
            let end = group
                .iter()
                .map(|t| t.end())
                .filter(|m| m.is_valid())
                .max()
                .unwrap_or(Moment::Invalid);

            items.push(TimelineItem {
                kind: TimelineKind::Activity,
                id: activity_id.to_string(),
                name: activity.map(|a| a.name.clone()).unwrap_or_default(),
                start,
                end: not_before(start, end),
                parent: None,
                milestone: None,
                style: None,
            });

            for task in group {
                let start = task.start();
                items.push(TimelineItem {
                    kind: TimelineKind::Task,
                    id: task.id.to_string(),
                    name: task.name.clone(),
                    start,
                    end: not_before(start, task.end()),
                    parent: Some(activity_id.clone()),
                    milestone: None,
                    style: None,
                });
            }
        }

        for d in deliverables {
            items.push(TimelineItem::milestone_at(
                d.id.as_str(),
                &d.name,
                d.deadline_moment(),
                MilestoneKind::Deliverable,
                &self.config.deliverable_color,
            ));
        }

        for g in decision_gates {
            items.push(TimelineItem::milestone_at(
                g.id.as_str(),
                &g.name,
                g.moment(),
                MilestoneKind::DecisionGate,
                &self.config.decision_gate_color,
            ));
        }

        items.sort_by_key(|item| item.start);
        tracing::debug!(items = items.len(), dropped, "built timeline");
        items
    }
}

/// Build a timeline with the default milestone palette.
pub fn build_timeline(
    activities: &[Activity],
    tasks: &[Task],
    deliverables: &[Deliverable],
    decision_gates: &[DecisionGate],
) -> Vec<TimelineItem> {
    TimelineBuilder::new(&TimelineConfig::default()).build(
        activities,
        tasks,
        deliverables,
        decision_gates,
    )
}

/// Sort tasks by start, then group by activity. Groups come out in order of
/// first appearance in the sorted list, which is also ascending earliest start.
fn group_by_activity(tasks: &[Task]) -> Vec<(&ActivityId, Vec<&Task>)> {
    let mut sorted: Vec<&Task> = tasks.iter().collect();
    sorted.sort_by_key(|t| t.start());

    let mut groups: Vec<(&ActivityId, Vec<&Task>)> = Vec::new();
    let mut slots: HashMap<&ActivityId, usize> = HashMap::new();
    for task in sorted {
        match slots.get(&task.activity_id) {
            Some(&i) => groups[i].1.push(task),
            None => {
                slots.insert(&task.activity_id, groups.len());
                groups.push((&task.activity_id, vec![task]));
            }
        }
    }
    groups
}

/// Clamp a valid `end` that precedes a valid `start`.
fn not_before(start: Moment, end: Moment) -> Moment {
    match (start, end) {
        (Moment::At(s), Moment::At(e)) if e < s => start,
        _ => end,
    }
}

// ---------------------------------------------------------------------------
// Click resolution
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", content = "record", rename_all = "snake_case")]
pub enum ClickedElement<'a> {
    Activity(&'a Activity),
    Task(&'a Task),
    Deliverable(&'a Deliverable),
    DecisionGate(&'a DecisionGate),
}

/// Map a clicked chart item back to its source record. Milestones check
/// deliverables before decision gates.
pub fn resolve_clicked_element<'a>(
    id: &str,
    kind: TimelineKind,
    activities: &'a [Activity],
    tasks: &'a [Task],
    deliverables: &'a [Deliverable],
    decision_gates: &'a [DecisionGate],
) -> Option<ClickedElement<'a>> {
    match kind {
        TimelineKind::Activity => activities
            .iter()
            .find(|a| a.id.as_str() == id)
            .map(ClickedElement::Activity),
        TimelineKind::Task => tasks
            .iter()
            .find(|t| t.id.as_str() == id)
            .map(ClickedElement::Task),
        TimelineKind::Milestone => deliverables
            .iter()
            .find(|d| d.id.as_str() == id)
            .map(ClickedElement::Deliverable)
            .or_else(|| {
                decision_gates
                    .iter()
                    .find(|g| g.id.as_str() == id)
                    .map(ClickedElement::DecisionGate)
            }),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, activity: &str, start: &str, end: &str) -> Task {
        let mut t = Task::new(id, activity, start, end);
        t.name = format!("Task {id}");
        t
    }

    fn ids(items: &[TimelineItem]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn single_activity_scenario() {
        let activities = vec![Activity::new("a1", "Survey")];
        let tasks = vec![
            task("t1", "a1", "2025-01-01", "2025-01-03"),
            task("t2", "a1", "2025-01-04", "2025-01-06"),
        ];
        let items = build_timeline(&activities, &tasks, &[], &[]);

        assert_eq!(ids(&items), vec!["a1", "t1", "t2"]);
        assert_eq!(items[0].kind, TimelineKind::Activity);
        assert_eq!(items[0].name, "Survey");
        assert_eq!(items[0].start, Moment::parse("2025-01-01"));
        assert_eq!(items[0].end, Moment::parse("2025-01-06"));
        assert_eq!(items[1].parent, Some(ActivityId::new("a1")));
        assert_eq!(items[2].kind, TimelineKind::Task);
    }

    #[test]
    fn activity_span_uses_latest_end_not_longest_task() {
        let activities = vec![Activity::new("a1", "Build")];
        let tasks = vec![
            task("long", "a1", "2025-01-01", "2025-01-20"),
            task("late", "a1", "2025-01-25", "2025-01-26"),
        ];
        let items = build_timeline(&activities, &tasks, &[], &[]);
        assert_eq!(items[0].end, Moment::parse("2025-01-26"));
    }

    #[test]
    fn groups_ordered_by_earliest_task() {
        let activities = vec![Activity::new("a1", "Late"), Activity::new("a2", "Early")];
        let tasks = vec![
            task("t1", "a1", "2025-03-01", "2025-03-05"),
            task("t2", "a2", "2025-01-10", "2025-01-12"),
            task("t3", "a2", "2025-04-01", "2025-04-02"),
        ];
        let items = build_timeline(&activities, &tasks, &[], &[]);
        assert_eq!(ids(&items), vec!["a2", "t2", "a1", "t1", "t3"]);
    }

    #[test]
    fn every_task_once_with_parent() {
        let activities = vec![Activity::new("a1", "A"), Activity::new("a2", "B")];
        let tasks = vec![
            task("t1", "a2", "2025-02-01", "2025-02-03"),
            task("t2", "a1", "2025-01-01", "2025-01-03"),
            task("t3", "a2", "2025-01-15", "2025-01-16"),
        ];
        let items = build_timeline(&activities, &tasks, &[], &[]);
        for t in &tasks {
            let matching: Vec<_> = items
                .iter()
                .filter(|i| i.kind == TimelineKind::Task && i.id == t.id.as_str())
                .collect();
            assert_eq!(matching.len(), 1);
            assert_eq!(matching[0].start, t.start());
            assert_eq!(matching[0].end, t.end());
            assert_eq!(matching[0].parent.as_ref(), Some(&t.activity_id));
        }
        let activity_items = items.iter().filter(|i| i.kind == TimelineKind::Activity).count();
        assert_eq!(activity_items, 2);
    }

    #[test]
    fn activity_without_tasks_is_not_emitted() {
        let activities = vec![Activity::new("a1", "Busy"), Activity::new("idle", "Idle")];
        let tasks = vec![task("t1", "a1", "2025-01-01", "2025-01-02")];
        let items = build_timeline(&activities, &tasks, &[], &[]);
        assert!(!items.iter().any(|i| i.id == "idle"));
    }

    #[test]
    fn missing_activity_record_falls_back_to_empty_name() {
        let tasks = vec![task("t1", "ghost", "2025-01-01", "2025-01-02")];
        let items = build_timeline(&[], &tasks, &[], &[]);
        assert_eq!(ids(&items), vec!["ghost", "t1"]);
        assert_eq!(items[0].name, "");
    }

    #[test]
    fn unknown_activities_dropped_when_configured() {
        let config = TimelineConfig {
            drop_unknown_activities: true,
            ..TimelineConfig::default()
        };
        let activities = vec![Activity::new("a1", "Known")];
        let tasks = vec![
            task("t1", "ghost", "2025-01-01", "2025-01-02"),
            task("t2", "a1", "2025-01-03", "2025-01-04"),
        ];
        let items = TimelineBuilder::new(&config).build(&activities, &tasks, &[], &[]);
        assert_eq!(ids(&items), vec!["a1", "t2"]);
    }

    #[test]
    fn milestones_are_points_with_distinct_colors() {
        let deliverables = vec![Deliverable::new("d1", "Report", "2025-02-01")];
        let gates = vec![DecisionGate::new("g1", "Board review", "2025-01-15T10:00:00")];
        let items = build_timeline(&[], &[], &deliverables, &gates);

        assert_eq!(ids(&items), vec!["g1", "d1"]);
        for item in &items {
            assert_eq!(item.kind, TimelineKind::Milestone);
            assert_eq!(item.start, item.end);
            assert!(item.parent.is_none());
        }
        assert_eq!(items[0].milestone, Some(MilestoneKind::DecisionGate));
        assert_eq!(items[1].milestone, Some(MilestoneKind::Deliverable));
        assert_ne!(items[0].style, items[1].style);
        assert_eq!(items[1].start, Moment::parse("2025-02-01"));
    }

    #[test]
    fn configured_colors_are_used() {
        let config = TimelineConfig {
            deliverable_color: "#111111".to_string(),
            ..TimelineConfig::default()
        };
        let deliverables = vec![Deliverable::new("d1", "Report", "2025-02-01")];
        let items = TimelineBuilder::new(&config).build(&[], &[], &deliverables, &[]);
        assert_eq!(items[0].style.as_ref().unwrap().color, "#111111");
    }

    #[test]
    fn output_sorted_by_start() {
        let activities = vec![Activity::new("a1", "A"), Activity::new("a2", "B")];
        let tasks = vec![
            task("t1", "a1", "2025-01-10", "2025-02-10"),
            task("t2", "a1", "2025-01-05", "2025-01-06"),
            task("t3", "a2", "2025-01-07", "2025-01-08"),
        ];
        let deliverables = vec![Deliverable::new("d1", "Mid", "2025-01-06")];
        let gates = vec![DecisionGate::new("g1", "Start", "2025-01-01T08:00")];
        let items = build_timeline(&activities, &tasks, &deliverables, &gates);

        assert!(items.windows(2).all(|w| w[0].start <= w[1].start));
        assert_eq!(items.len(), 2 + 3 + 1 + 1);
        assert_eq!(items[0].id, "g1");
    }

    #[test]
    fn invalid_dates_propagate_and_sort_last() {
        let activities = vec![Activity::new("a1", "A")];
        let tasks = vec![
            task("bad", "a1", "someday", "2025-01-02"),
            task("ok", "a1", "2025-01-01", "2025-01-03"),
        ];
        let deliverables = vec![Deliverable::new("d1", "Unknown", "tbd")];
        let items = build_timeline(&activities, &tasks, &deliverables, &[]);

        let bad = items.iter().find(|i| i.id == "bad").unwrap();
        assert_eq!(bad.start, Moment::Invalid);
        let activity = items.iter().find(|i| i.id == "a1").unwrap();
        assert_eq!(activity.start, Moment::parse("2025-01-01"));
        assert_eq!(activity.end, Moment::parse("2025-01-03"));
        assert_eq!(items.last().unwrap().start, Moment::Invalid);
    }

    #[test]
    fn end_before_start_is_clamped() {
        let tasks = vec![task("t1", "a1", "2025-01-05", "2025-01-01")];
        let items = build_timeline(&[Activity::new("a1", "A")], &tasks, &[], &[]);
        assert!(items.iter().all(|i| i.end >= i.start));
    }

    #[test]
    fn build_is_idempotent_and_pure() {
        let activities = vec![Activity::new("a1", "A")];
        let tasks = vec![
            task("t1", "a1", "2025-01-01", "2025-01-02"),
            task("t2", "a1", "2025-01-01", "2025-01-02"),
        ];
        let before = tasks.clone();
        let first = build_timeline(&activities, &tasks, &[], &[]);
        let second = build_timeline(&activities, &tasks, &[], &[]);
        assert_eq!(first, second);
        assert_eq!(tasks, before);
        // ties keep input order
        assert_eq!(ids(&first), vec!["a1", "t1", "t2"]);
    }

    #[test]
    fn item_json_shape() {
        let tasks = vec![task("t1", "a1", "2025-01-01", "2025-01-02")];
        let items = build_timeline(&[Activity::new("a1", "A")], &tasks, &[], &[]);
        let json = serde_json::to_value(&items[1]).unwrap();
        assert_eq!(json["kind"], "task");
        assert_eq!(json["parent"], "a1");
        assert_eq!(json["start"], "2025-01-01T00:00:00");
        assert!(json.get("style").is_none());
    }

    #[test]
    fn kind_parses_chart_alias() {
        use std::str::FromStr;
        assert_eq!(TimelineKind::from_str("project").unwrap(), TimelineKind::Activity);
        assert_eq!(TimelineKind::from_str("activity").unwrap(), TimelineKind::Activity);
        assert_eq!(TimelineKind::from_str("milestone").unwrap(), TimelineKind::Milestone);
        assert!(TimelineKind::from_str("epic").is_err());
        assert_eq!(TimelineKind::Activity.chart_type(), "project");
    }

    #[test]
    fn resolve_click_by_kind() {
        let activities = vec![Activity::new("x", "Activity X")];
        let tasks = vec![task("x", "x", "2025-01-01", "2025-01-02")];
        let deliverables = vec![Deliverable::new("m", "Deliverable M", "2025-01-05")];
        let gates = vec![
            DecisionGate::new("m", "Gate M", "2025-01-05T00:00"),
            DecisionGate::new("g", "Gate G", "2025-01-06T00:00"),
        ];

        let hit = |id: &str, kind| {
            resolve_clicked_element(id, kind, &activities, &tasks, &deliverables, &gates)
        };

        assert!(matches!(hit("x", TimelineKind::Activity), Some(ClickedElement::Activity(a)) if a.name == "Activity X"));
        assert!(matches!(hit("x", TimelineKind::Task), Some(ClickedElement::Task(_))));
        assert!(matches!(hit("m", TimelineKind::Milestone), Some(ClickedElement::Deliverable(_))));
        assert!(matches!(hit("g", TimelineKind::Milestone), Some(ClickedElement::DecisionGate(_))));
        assert_eq!(hit("nope", TimelineKind::Task), None);
        assert_eq!(hit("x", TimelineKind::Milestone), None);
    }
}
