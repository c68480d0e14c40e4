use crate::output::{print_json, print_table};
use crate::root::Workspace;
use fundboard_core::{format::Formatter, risk::Severity, summary::ProjectSummary};

pub fn run(ws: &Workspace, json: bool) -> anyhow::Result<()> {
    let config = ws.config()?;
    let plan = ws.plan()?;
    let summary = ProjectSummary::compute(&plan);

    if json {
        return print_json(&summary);
    }

    let fmt = Formatter::new(&config.format);
    let name = if summary.project.is_empty() {
        config.project.name.as_str()
    } else {
        summary.project.as_str()
    };

    println!("Project: {name}");
    println!(
        "Tasks:   {} ({} complete)",
        summary.total_tasks,
        fmt.percent(summary.completion_pct)
    );
    for c in summary.tasks_by_status.iter().filter(|c| c.count > 0) {
        println!("  {:<12} {}", c.status.as_str(), c.count);
    }

    match (summary.budget, summary.budget_utilization_pct) {
        (Some(budget), Some(pct)) => println!(
            "Cost:    {} of {} ({})",
            fmt.currency(summary.planned_cost),
            fmt.currency(budget),
            fmt.percent(pct)
        ),
        _ => println!("Cost:    {}", fmt.currency(summary.planned_cost)),
    }

    let risks: Vec<String> = Severity::all()
        .iter()
        .rev()
        .map(|&s| format!("{} {s}", summary.risks_for(s)))
        .collect();
    print!("Risks:   {}", risks.join(", "));
    if summary.unrated_active_risks > 0 {
        print!(", {} unrated", summary.unrated_active_risks);
    }
    println!(" ({} resolved)", summary.resolved_risks);

    if !summary.activities.is_empty() {
        println!();
        let rows = summary
            .activities
            .iter()
            .map(|a| {
                vec![
                    a.id.to_string(),
                    a.name.clone(),
                    a.tasks.to_string(),
                    fmt.days(Some(a.duration_days)),
                    fmt.currency(a.total_cost),
                ]
            })
            .collect();
        print_table(&["ID", "ACTIVITY", "TASKS", "DURATION", "COST"], rows);
    }
    Ok(())
}
