use crate::output::print_json;
use crate::root::Workspace;
use clap::Subcommand;
use fundboard_core::config::WarnLevel;

// ---------------------------------------------------------------------------
// Subcommand types
// ---------------------------------------------------------------------------

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Show the effective configuration (defaults when no config.yaml exists)
    Show,

    /// Validate the config for common mistakes
    Validate,
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub fn run(ws: &Workspace, subcmd: ConfigSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ConfigSubcommand::Show => show(ws, json),
        ConfigSubcommand::Validate => validate(ws, json),
    }
}

// ---------------------------------------------------------------------------
// show
// ---------------------------------------------------------------------------

fn show(ws: &Workspace, json: bool) -> anyhow::Result<()> {
    let config = ws.config()?;
    if json {
        return print_json(&config);
    }

    let f = &config.format;
    let t = &config.timeline;
    println!("project:     {}", config.project.name);
    println!(
        "currency:    {} ({}, {} decimals, '{}' thousands, '{}' decimal)",
        f.currency_symbol,
        if f.symbol_after { "after" } else { "before" },
        f.currency_decimals,
        f.thousands_separator,
        f.decimal_separator
    );
    println!("dates:       {}", f.date_format);
    println!("deliverable: {}", t.deliverable_color);
    println!("gate:        {}", t.decision_gate_color);
    println!("orphans:     {}", if t.drop_unknown_activities { "dropped" } else { "kept" });
    Ok(())
}

// ---------------------------------------------------------------------------
// validate
// ---------------------------------------------------------------------------

fn validate(ws: &Workspace, json: bool) -> anyhow::Result<()> {
    let config = ws.config()?;
    let warnings = config.validate();

    if json {
        let value = serde_json::json!({
            "warnings": warnings,
        });
        print_json(&value)?;
    } else if warnings.is_empty() {
        println!("Config is valid. No warnings.");
    } else {
        for w in &warnings {
            let prefix = match w.level {
                WarnLevel::Warning => "warning",
                WarnLevel::Error => "error",
            };
            println!("[{prefix}] {}", w.message);
        }
    }

    if warnings.iter().any(|w| w.level == WarnLevel::Error) {
        anyhow::bail!("config validation found errors");
    }

    Ok(())
}
