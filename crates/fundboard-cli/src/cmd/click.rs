use crate::output::print_json;
use crate::root::Workspace;
use clap::Args;
use fundboard_core::{
    cost::{activity_duration, activity_total_cost, deliverable_total_cost, task_total_cost},
    format::Formatter,
    index::PlanIndex,
    plan::ProjectPlan,
    task::{summarize, tasks_for_activity},
    timeline::{ClickedElement, TimelineKind},
};

#[derive(Args)]
pub struct ClickArgs {
    /// Item kind: activity (or project), task, milestone
    pub kind: String,
    /// Item id as shown in the timeline
    pub id: String,
}

pub fn run(ws: &Workspace, args: ClickArgs, json: bool) -> anyhow::Result<()> {
    let kind: TimelineKind = args.kind.parse()?;
    let config = ws.config()?;
    let plan = ws.plan()?;

    let Some(element) = plan.resolve_click(&args.id, kind) else {
        anyhow::bail!("no {kind} with id '{}'", args.id);
    };

    if json {
        return print_json(&element);
    }

    let fmt = Formatter::new(&config.format);
    describe(&plan, &fmt, element);
    Ok(())
}

fn describe(plan: &ProjectPlan, fmt: &Formatter, element: ClickedElement<'_>) {
    match element {
        ClickedElement::Activity(a) => {
            println!("Activity: {} [{}]", a.name, a.id);
            if let Some(desc) = &a.description {
                println!("Description: {desc}");
            }
            let tasks: Vec<_> = tasks_for_activity(&plan.tasks, &a.id).cloned().collect();
            println!("Tasks: {}", summarize(&tasks));
            println!("Duration: {}", fmt.days(Some(activity_duration(&a.id, &plan.tasks))));
            println!("Total cost: {}", fmt.currency(activity_total_cost(&a.id, &plan.tasks)));
        }
        ClickedElement::Task(t) => {
            println!("Task: {} [{}]", t.name, t.id);
            let index = PlanIndex::new(&plan.activities, &plan.resources);
            let activity = index
                .activity(&t.activity_id)
                .map(|a| a.name.as_str())
                .unwrap_or("-");
            println!("Activity: {activity}");
            println!("Start: {}", fmt.date(t.start()));
            println!("End: {}", fmt.date(t.end()));
            println!("Duration: {}", fmt.days(t.duration_days()));
            println!("Status: {}", t.status);
            println!("Priority: {}", t.priority);
            println!("Total cost: {}", fmt.currency(task_total_cost(t)));
            for r in &t.resources {
                let label = index
                    .resource(&r.resource_id)
                    .map(|res| res.name.clone())
                    .unwrap_or_else(|| r.resource_id.to_string());
                println!(
                    "  - {label} x{} ({} days): {}",
                    r.quantity,
                    r.duration_days(),
                    fmt.currency(r.total_cost)
                );
            }
        }
        ClickedElement::Deliverable(d) => {
            println!("Deliverable: {} [{}]", d.name, d.id);
            println!("Deadline: {}", fmt.date(d.deadline_moment()));
            if !d.dependent_activities.is_empty() {
                let deps: Vec<&str> = d.dependent_activities.iter().map(|a| a.as_str()).collect();
                println!("Depends on: {}", deps.join(", "));
            }
            println!("Cost: {}", fmt.currency(deliverable_total_cost(d, &plan.tasks)));
            for c in &d.success_criteria {
                println!("  - {c}");
            }
        }
        ClickedElement::DecisionGate(g) => {
            println!("Decision gate: {} [{}]", g.name, g.id);
            println!("When: {}", fmt.date(g.moment()));
            if !g.objective.is_empty() {
                println!("Objective: {}", g.objective);
            }
            if !g.participants.is_empty() {
                println!("Participants: {}", g.participants.join(", "));
            }
        }
    }
}
