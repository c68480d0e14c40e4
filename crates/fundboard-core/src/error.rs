use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FundboardError {
    #[error("not initialized: run 'fundboard init'")]
    NotInitialized,

    #[error("plan not found: {}", .0.display())]
    PlanNotFound(PathBuf),

    #[error("unsupported plan format '{0}': expected .yaml, .yml or .json")]
    UnsupportedPlanFormat(String),

    #[error("invalid timeline kind '{0}': expected activity, project, task or milestone")]
    InvalidKind(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FundboardError>;
