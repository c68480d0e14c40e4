use crate::output::print_json;
use crate::root::Workspace;
use anyhow::Context;
use clap::Subcommand;
use fundboard_core::{
    cost::{
        activity_duration, activity_total_cost, deliverable_total_cost, resource_cost,
        resource_duration, task_total_cost,
    },
    format::Formatter,
    types::{ActivityId, ResourceId},
};

#[derive(Subcommand)]
pub enum CostSubcommand {
    /// Total cost of a task's resource assignments
    Task { id: String },
    /// Total cost and duration of every task in an activity
    Activity { id: String },
    /// Cost rolled up from a deliverable's dependent activities
    Deliverable { id: String },
    /// Price a resource for a quantity over an inclusive date range
    Resource {
        id: String,
        #[arg(long, default_value = "1")]
        quantity: f64,
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start: String,
        /// End date (YYYY-MM-DD), inclusive
        #[arg(long)]
        end: String,
    },
}

pub fn run(ws: &Workspace, subcmd: CostSubcommand, json: bool) -> anyhow::Result<()> {
    let config = ws.config()?;
    let fmt = Formatter::new(&config.format);
    let plan = ws.plan()?;

    match subcmd {
        CostSubcommand::Task { id } => {
            let task = plan
                .task(&id)
                .with_context(|| format!("task '{id}' not found"))?;
            let total = task_total_cost(task);
            if json {
                print_json(&serde_json::json!({
                    "task": id,
                    "durationDays": task.duration_days(),
                    "totalCost": total,
                }))?;
            } else {
                println!("Task {id}: {} over {}", fmt.currency(total), fmt.days(task.duration_days()));
            }
        }
        CostSubcommand::Activity { id } => {
            let activity_id = ActivityId::new(id.as_str());
            let total = activity_total_cost(&activity_id, &plan.tasks);
            let days = activity_duration(&activity_id, &plan.tasks);
            if json {
                print_json(&serde_json::json!({
                    "activity": id,
                    "durationDays": days,
                    "totalCost": total,
                }))?;
            } else {
                println!("Activity {id}: {} over {}", fmt.currency(total), fmt.days(Some(days)));
            }
        }
        CostSubcommand::Deliverable { id } => {
            let deliverable = plan
                .deliverable(&id)
                .with_context(|| format!("deliverable '{id}' not found"))?;
            let total = deliverable_total_cost(deliverable, &plan.tasks);
            if json {
                print_json(&serde_json::json!({ "deliverable": id, "totalCost": total }))?;
            } else {
                println!("Deliverable {id}: {}", fmt.currency(total));
            }
        }
        CostSubcommand::Resource {
            id,
            quantity,
            start,
            end,
        } => {
            let resource = plan
                .resource(&ResourceId::new(id.as_str()))
                .with_context(|| format!("resource '{id}' not found"))?;
            let days = resource_duration(&start, &end)
                .with_context(|| format!("invalid date range '{start}'..'{end}'"))?;
            let cost = resource_cost(resource, quantity, days);
            if json {
                print_json(&serde_json::json!({
                    "resource": id,
                    "quantity": quantity,
                    "durationDays": days,
                    "dailyCost": cost.daily_cost,
                    "totalCost": cost.total_cost,
                }))?;
            } else {
                println!(
                    "{} x{quantity} for {}: {}/day, {} total",
                    resource.name,
                    fmt.days(Some(days)),
                    fmt.currency(cost.daily_cost),
                    fmt.currency(cost.total_cost)
                );
            }
        }
    }
    Ok(())
}
