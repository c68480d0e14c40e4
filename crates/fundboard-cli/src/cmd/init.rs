use crate::root::Workspace;
use anyhow::Context;
use fundboard_core::{config::Config, paths, plan::ProjectPlan};

pub fn run(ws: &Workspace) -> anyhow::Result<()> {
    let root = &ws.root;
    let project_name = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "project".to_string());

    println!("Initializing fundboard in: {}", root.display());

    // 1. Write config.yaml if missing
    let config_path = paths::config_path(root);
    if !config_path.exists() {
        Config::new(&project_name)
            .save(root)
            .context("failed to write config.yaml")?;
        println!("  created: {}", paths::CONFIG_FILE);
    } else {
        println!("  exists:  {}", paths::CONFIG_FILE);
    }

    // 2. Write an empty plan.yaml if missing
    let plan_path = paths::plan_path(root);
    if !plan_path.exists() {
        let mut plan = ProjectPlan::default();
        plan.project.name = project_name;
        plan.save(&plan_path).context("failed to write plan.yaml")?;
        println!("  created: {}", paths::PLAN_FILE);
    } else {
        println!("  exists:  {}", paths::PLAN_FILE);
    }

    Ok(())
}
