use crate::cost::{activity_duration, activity_total_cost, task_total_cost};
use crate::plan::ProjectPlan;
use crate::risk::Severity;
use crate::types::{ActivityId, TaskStatus};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusCount {
    pub status: TaskStatus,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeverityCount {
    pub severity: Severity,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityRow {
    pub id: ActivityId,
    pub name: String,
    pub tasks: usize,
    pub duration_days: i64,
    pub total_cost: f64,
}

/// Dashboard headline numbers for one project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectSummary {
    pub project: String,
    pub total_tasks: usize,
    pub tasks_by_status: Vec<StatusCount>,
    pub completion_pct: f64,
    pub planned_cost: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_utilization_pct: Option<f64>,
    pub activities: Vec<ActivityRow>,
    pub active_risks_by_severity: Vec<SeverityCount>,
    pub unrated_active_risks: usize,
    pub resolved_risks: usize,
}

impl ProjectSummary {
    pub fn compute(plan: &ProjectPlan) -> Self {
        let tasks = &plan.tasks;
        let total_tasks = tasks.len();

        let tasks_by_status: Vec<StatusCount> = TaskStatus::all()
            .iter()
            .map(|&status| StatusCount {
                status,
                count: tasks.iter().filter(|t| t.status == status).count(),
            })
            .collect();

        let completed = tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Completed)
            .count();
        let completion_pct = if total_tasks == 0 {
            0.0
        } else {
            completed as f64 * 100.0 / total_tasks as f64
        };

        let planned_cost: f64 = tasks.iter().map(task_total_cost).sum();
        let budget = plan.project.budget;
        let budget_utilization_pct = budget
            .filter(|b| *b > 0.0)
            .map(|b| planned_cost * 100.0 / b);

        let activities = plan
            .activities
            .iter()
            .map(|a| ActivityRow {
                id: a.id.clone(),
                name: a.name.clone(),
                tasks: tasks.iter().filter(|t| t.activity_id == a.id).count(),
                duration_days: activity_duration(&a.id, tasks),
                total_cost: activity_total_cost(&a.id, tasks),
            })
            .collect();

        let active: Vec<_> = plan.risks.iter().filter(|r| r.is_active()).collect();
        let active_risks_by_severity = Severity::all()
            .iter()
            .map(|&severity| SeverityCount {
                severity,
                count: active
                    .iter()
                    .filter(|r| r.severity() == Some(severity))
                    .count(),
            })
            .collect();
        let unrated_active_risks = active.iter().filter(|r| r.severity().is_none()).count();

        Self {
            project: plan.project.name.clone(),
            total_tasks,
            tasks_by_status,
            completion_pct,
            planned_cost,
            budget,
            budget_utilization_pct,
            activities,
            active_risks_by_severity,
            unrated_active_risks,
            resolved_risks: plan.risks.len() - active.len(),
        }
    }

    pub fn count_for(&self, status: TaskStatus) -> usize {
        self.tasks_by_status
            .iter()
            .find(|c| c.status == status)
            .map_or(0, |c| c.count)
    }

    pub fn risks_for(&self, severity: Severity) -> usize {
        self.active_risks_by_severity
            .iter()
            .find(|c| c.severity == severity)
            .map_or(0, |c| c.count)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
