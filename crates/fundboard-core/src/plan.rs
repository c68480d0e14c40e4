use crate::activity::Activity;
use crate::config::TimelineConfig;
use crate::error::{FundboardError, Result};
use crate::milestone::{DecisionGate, Deliverable};
use crate::resource::Resource;
use crate::risk::{build_risk_matrix, Risk, RiskMatrix};
use crate::task::Task;
use crate::timeline::{resolve_clicked_element, ClickedElement, TimelineBuilder, TimelineItem, TimelineKind};
use crate::types::ResourceId;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// ProjectInfo
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::lenient::optional_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub budget: Option<f64>,
}

// ---------------------------------------------------------------------------
// ProjectPlan
// ---------------------------------------------------------------------------

/// Snapshot of every record a project dashboard renders from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPlan {
    #[serde(default)]
    pub project: ProjectInfo,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub deliverables: Vec<Deliverable>,
    #[serde(default)]
    pub decision_gates: Vec<DecisionGate>,
    #[serde(default)]
    pub risks: Vec<Risk>,
    #[serde(default)]
    pub resources: Vec<Resource>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlanFormat {
    Yaml,
    Json,
}

fn plan_format(path: &Path) -> Result<PlanFormat> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    match ext.as_str() {
        "yaml" | "yml" => Ok(PlanFormat::Yaml),
        "json" => Ok(PlanFormat::Json),
        _ => Err(FundboardError::UnsupportedPlanFormat(
            path.display().to_string(),
        )),
    }
}

impl ProjectPlan {
    pub fn load(path: &Path) -> Result<Self> {
        let format = plan_format(path)?;
        if !path.exists() {
            return Err(FundboardError::PlanNotFound(path.to_path_buf()));
        }
        let data = std::fs::read_to_string(path)?;
        let plan: ProjectPlan = match format {
            PlanFormat::Yaml => serde_yaml::from_str(&data)?,
            PlanFormat::Json => serde_json::from_str(&data)?,
        };
        tracing::debug!(
            path = %path.display(),
            activities = plan.activities.len(),
            tasks = plan.tasks.len(),
            risks = plan.risks.len(),
            "loaded project plan"
        );
        Ok(plan)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let data = match plan_format(path)? {
            PlanFormat::Yaml => serde_yaml::to_string(self)?,
            PlanFormat::Json => serde_json::to_string_pretty(self)?,
        };
        crate::io::atomic_write(path, data.as_bytes())
    }

    pub fn timeline(&self, config: &TimelineConfig) -> Vec<TimelineItem> {
        TimelineBuilder::new(config).build(
            &self.activities,
            &self.tasks,
            &self.deliverables,
            &self.decision_gates,
        )
    }

    pub fn resolve_click(&self, id: &str, kind: TimelineKind) -> Option<ClickedElement<'_>> {
        resolve_clicked_element(
            id,
            kind,
            &self.activities,
            &self.tasks,
            &self.deliverables,
            &self.decision_gates,
        )
    }

    pub fn risk_matrix(&self) -> RiskMatrix<'_> {
        build_risk_matrix(&self.risks)
    }

    pub fn resource(&self, id: &ResourceId) -> Option<&Resource> {
        self.resources.iter().find(|r| &r.id == id)
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id.as_str() == id)
    }

    pub fn activity(&self, id: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.id.as_str() == id)
    }

    pub fn deliverable(&self, id: &str) -> Option<&Deliverable> {
        self.deliverables.iter().find(|d| d.id.as_str() == id)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const PLAN_YAML: &str = r#"
project:
  id: p1
  name: Rural water access
  budget: 5000
activities:
  - id: a1
    name: Survey
tasks:
  - id: t1
    name: Household interviews
    activityId: a1
    startDate: "2025-01-01"
    endDate: "2025-01-03"
    status: In Progress
    resources:
      - resourceId: r1
        quantity: 2
        dailyCost: 100
        totalCost: 600
        startDate: "2025-01-01"
        endDate: "2025-01-03"
deliverables:
  - id: d1
    name: Survey report
    deadline: "2025-01-10"
decisionGates:
  - id: g1
    name: Scale-up decision
    dateTime: "2025-01-12T10:00"
risks:
  - id: k1
    name: Access roads flooded
    impact: 4
    probability: 4
resources:
  - id: r1
    name: Enumerator
    kind:
      type: human
      costPerDay: 100
"#;

    #[test]
    fn load_yaml_plan() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plan.yaml");
        std::fs::write(&path, PLAN_YAML).unwrap();

        let plan = ProjectPlan::load(&path).unwrap();
        assert_eq!(plan.project.budget, Some(5000.0));
        assert_eq!(plan.tasks[0].resources[0].total_cost, 600.0);
        assert_eq!(plan.decision_gates.len(), 1);
        assert!(plan.resource(&ResourceId::new("r1")).unwrap().is_human());
        assert_eq!(plan.timeline(&TimelineConfig::default()).len(), 4);
        assert_eq!(plan.risk_matrix().total(), 1);
    }

    #[test]
    fn json_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let yaml_path = dir.path().join("plan.yml");
        std::fs::write(&yaml_path, PLAN_YAML).unwrap();
        let plan = ProjectPlan::load(&yaml_path).unwrap();

        let json_path = dir.path().join("out/plan.json");
        plan.save(&json_path).unwrap();
        let raw = std::fs::read_to_string(&json_path).unwrap();
        assert!(raw.contains("\"decisionGates\""));
        assert_eq!(ProjectPlan::load(&json_path).unwrap(), plan);
    }

    #[test]
    fn empty_document_is_empty_plan() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plan.json");
        std::fs::write(&path, "{}").unwrap();
        assert_eq!(ProjectPlan::load(&path).unwrap(), ProjectPlan::default());
    }

    #[test]
    fn unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plan.toml");
        std::fs::write(&path, "").unwrap();
        assert!(matches!(
            ProjectPlan::load(&path),
            Err(FundboardError::UnsupportedPlanFormat(_))
        ));
    }

    #[test]
    fn missing_file() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            ProjectPlan::load(&dir.path().join("nope.yaml")),
            Err(FundboardError::PlanNotFound(_))
        ));
    }

    #[test]
    fn malformed_numbers_do_not_fail_the_load() {
        let yaml = r#"
project:
  name: Mixed quality
  budget: "lots"
activities:
  - id: a1
    name: Survey
tasks:
  - id: t1
    activityId: a1
    startDate: "2025-01-01"
    endDate: "2025-01-02"
    resources:
      - resourceId: r1
        quantity: "2"
        totalCost: "600"
      - resourceId: r2
        quantity: two
        totalCost: 50
risks:
  - id: k1
    name: Rated
    impact: 4
    probability: 4
  - id: k2
    name: Text rating
    impact: "3"
    probability: "2"
  - id: k3
    name: Fractional rating
    impact: 2.5
    probability: 3
  - id: k4
    name: Word rating
    impact: high
    probability: 1
resources:
  - id: r1
    name: Enumerator
    kind:
      type: human
      costPerDay: "n/a"
"#;
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plan.yaml");
        std::fs::write(&path, yaml).unwrap();
        let plan = ProjectPlan::load(&path).unwrap();

        assert_eq!(plan.project.budget, None);
        assert_eq!(plan.risks[1].impact, Some(3));
        assert_eq!(plan.risks[2].impact, None);
        assert_eq!(plan.risks[3].impact, None);
        assert_eq!(plan.risk_matrix().total(), 2);

        let summary = crate::summary::ProjectSummary::compute(&plan);
        assert_eq!(summary.unrated_active_risks, 2);

        let assignments = &plan.tasks[0].resources;
        assert_eq!(assignments[0].quantity, 2.0);
        assert_eq!(assignments[0].total_cost, 600.0);
        assert!(assignments[1].quantity.is_nan());
        assert_eq!(crate::cost::task_total_cost(&plan.tasks[0]), 650.0);

        let r1 = plan.resource(&ResourceId::new("r1")).unwrap();
        let crate::resource::ResourceKind::Human { cost_per_day } = r1.kind else {
            panic!("expected a human resource");
        };
        assert!(cost_per_day.is_nan());
        assert_eq!(plan.timeline(&TimelineConfig::default()).len(), 2);
    }

    #[test]
    fn resolve_click_through_plan() {
        let plan: ProjectPlan = serde_yaml::from_str(PLAN_YAML).unwrap();
        assert!(matches!(
            plan.resolve_click("g1", TimelineKind::Milestone),
            Some(ClickedElement::DecisionGate(_))
        ));
        assert!(plan.resolve_click("a1", TimelineKind::Task).is_none());
        assert_eq!(plan.activity("a1").unwrap().name, "Survey");
        assert_eq!(plan.task("t1").unwrap().name, "Household interviews");
        assert!(plan.deliverable("d2").is_none());
    }
}
