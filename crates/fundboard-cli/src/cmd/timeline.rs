use crate::output::{print_json, print_table};
use crate::root::Workspace;
use fundboard_core::format::Formatter;

pub fn run(ws: &Workspace, json: bool) -> anyhow::Result<()> {
    let config = ws.config()?;
    let plan = ws.plan()?;
    let items = plan.timeline(&config.timeline);

    if json {
        return print_json(&items);
    }

    if items.is_empty() {
        println!("No scheduled items.");
        return Ok(());
    }

    let fmt = Formatter::new(&config.format);
    let rows = items
        .iter()
        .map(|item| {
            let kind = match item.milestone {
                Some(m) => format!("{}:{m}", item.kind.chart_type()),
                None => item.kind.chart_type().to_string(),
            };
            let name = if item.parent.is_some() {
                format!("  {}", item.name)
            } else {
                item.name.clone()
            };
            vec![
                kind,
                item.id.clone(),
                name,
                fmt.date(item.start),
                fmt.date(item.end),
                item.parent
                    .as_ref()
                    .map(|p| p.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ]
        })
        .collect();
    print_table(&["KIND", "ID", "NAME", "START", "END", "PARENT"], rows);
    Ok(())
}
