mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{
    click::ClickArgs, config::ConfigSubcommand, cost::CostSubcommand, risk::RiskSubcommand,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "fundboard",
    about = "Project and fund plan dashboard: timelines, risk matrix and cost roll-ups",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from .fundboard/ or .git/)
    #[arg(long, global = true, env = "FUNDBOARD_ROOT")]
    root: Option<PathBuf>,

    /// Plan file to read (.yaml, .yml or .json; default: .fundboard/plan.yaml)
    #[arg(long, global = true, env = "FUNDBOARD_PLAN")]
    plan: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize fundboard in the current project
    Init,

    /// Show the Gantt timeline: activities, tasks, and milestones by start date
    Timeline,

    /// Resolve a timeline item back to its source record
    Click(ClickArgs),

    /// Risk matrix and severity classification
    Risk {
        #[command(subcommand)]
        subcommand: RiskSubcommand,
    },

    /// Cost and duration roll-ups
    Cost {
        #[command(subcommand)]
        subcommand: CostSubcommand,
    },

    /// Project headline numbers: progress, spend against budget, open risks
    Summary,

    /// Inspect and validate the configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());
    let ws = root::Workspace::new(root, cli.plan);

    let result = match cli.command {
        Commands::Init => cmd::init::run(&ws),
        Commands::Timeline => cmd::timeline::run(&ws, cli.json),
        Commands::Click(args) => cmd::click::run(&ws, args, cli.json),
        Commands::Risk { subcommand } => cmd::risk::run(&ws, subcommand, cli.json),
        Commands::Cost { subcommand } => cmd::cost::run(&ws, subcommand, cli.json),
        Commands::Summary => cmd::summary::run(&ws, cli.json),
        Commands::Config { subcommand } => cmd::config::run(&ws, subcommand, cli.json),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
