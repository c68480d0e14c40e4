use anyhow::Context;
use fundboard_core::{config::Config, paths, plan::ProjectPlan};
use std::path::{Path, PathBuf};

/// Resolve the project root directory.
///
/// Priority:
/// 1. `--root` flag / `FUNDBOARD_ROOT` env var (passed in as `explicit`)
/// 2. Walk upward from `cwd` looking for `.fundboard/`
/// 3. Walk upward from `cwd` looking for `.git/`
/// 4. Fall back to `cwd`
pub fn resolve_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    find_upward(&cwd, paths::FUNDBOARD_DIR)
        .or_else(|| find_upward(&cwd, ".git"))
        .unwrap_or(cwd)
}

fn find_upward(start: &Path, marker: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(marker).is_dir())
        .map(Path::to_path_buf)
}

/// Where commands read their inputs from.
pub struct Workspace {
    pub root: PathBuf,
    pub plan_path: PathBuf,
}

impl Workspace {
    pub fn new(root: PathBuf, plan: Option<PathBuf>) -> Self {
        let plan_path = match plan {
            Some(p) if p.is_absolute() => p,
            Some(p) => std::env::current_dir()
                .map(|cwd| cwd.join(&p))
                .unwrap_or(p),
            None => paths::plan_path(&root),
        };
        Self { root, plan_path }
    }

    pub fn config(&self) -> anyhow::Result<Config> {
        Config::load_or_default(&self.root).context("failed to load config")
    }

    pub fn plan(&self) -> anyhow::Result<ProjectPlan> {
        ProjectPlan::load(&self.plan_path)
            .with_context(|| format!("failed to load plan '{}'", self.plan_path.display()))
    }
}
