use crate::output::{print_json, print_table};
use crate::root::Workspace;
use clap::Subcommand;
use fundboard_core::risk::{classify_severity, Severity};

#[derive(Subcommand)]
pub enum RiskSubcommand {
    /// Show the 5x5 probability x impact matrix
    Matrix,
    /// List risks with score and severity badge
    List {
        /// Include resolved risks
        #[arg(long)]
        all: bool,
    },
    /// Classify an impact/probability pair (each 1-5)
    Classify { impact: i32, probability: i32 },
}

pub fn run(ws: &Workspace, subcmd: RiskSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        RiskSubcommand::Matrix => matrix(ws, json),
        RiskSubcommand::List { all } => list(ws, all, json),
        RiskSubcommand::Classify {
            impact,
            probability,
        } => classify(impact, probability, json),
    }
}

fn badge(severity: Severity) -> char {
    match severity {
        Severity::Low => 'L',
        Severity::Medium => 'M',
        Severity::High => 'H',
    }
}

fn matrix(ws: &Workspace, json: bool) -> anyhow::Result<()> {
    let plan = ws.plan()?;
    let matrix = plan.risk_matrix();

    if json {
        return print_json(&matrix);
    }

    let mut headers = vec!["P \\ I".to_string()];
    headers.extend((1..=5).map(|i| i.to_string()));
    let header_refs: Vec<&str> = headers.iter().map(String::as_str).collect();

    let rows = matrix
        .rows
        .iter()
        .map(|row| {
            let mut cells = vec![row.first().map_or(0, |c| c.probability).to_string()];
            cells.extend(
                row.iter()
                    .map(|cell| format!("{}:{}", badge(cell.severity), cell.risks.len())),
            );
            cells
        })
        .collect();
    print_table(&header_refs, rows);

    let unplaced = plan.risks.len() - matrix.total();
    if unplaced > 0 {
        println!("\n{unplaced} risk(s) without a valid impact/probability rating");
    }
    Ok(())
}

fn list(ws: &Workspace, all: bool, json: bool) -> anyhow::Result<()> {
    let plan = ws.plan()?;
    let risks: Vec<_> = plan
        .risks
        .iter()
        .filter(|r| all || r.is_active())
        .collect();

    if json {
        let value: Vec<_> = risks
            .iter()
            .map(|r| {
                serde_json::json!({
                    "id": r.id,
                    "name": r.name,
                    "impact": r.impact,
                    "probability": r.probability,
                    "score": r.score(),
                    "severity": r.severity(),
                    "status": r.status,
                })
            })
            .collect();
        return print_json(&value);
    }

    if risks.is_empty() {
        println!("No risks.");
        return Ok(());
    }

    let opt = |v: Option<i32>| v.map_or_else(|| "-".to_string(), |v| v.to_string());
    let rows = risks
        .iter()
        .map(|r| {
            vec![
                r.id.to_string(),
                r.name.clone(),
                opt(r.impact),
                opt(r.probability),
                opt(r.score()),
                r.severity().map_or_else(|| "-".to_string(), |s| s.to_string()),
                r.status.to_string(),
            ]
        })
        .collect();
    print_table(
        &["ID", "NAME", "IMPACT", "PROB", "SCORE", "SEVERITY", "STATUS"],
        rows,
    );
    Ok(())
}

fn classify(impact: i32, probability: i32, json: bool) -> anyhow::Result<()> {
    let severity = classify_severity(impact, probability);
    if json {
        print_json(&serde_json::json!({
            "impact": impact,
            "probability": probability,
            "score": impact.saturating_mul(probability),
            "severity": severity,
        }))?;
    } else {
        println!("{severity}");
    }
    Ok(())
}
