//! Error handling for the scenario runner

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: failed to create output directory '{}': {source}", .path.display())]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Workflow construction failed: {0}")]
    Workflow(String),
}

pub type Result<T> = std::result::Result<T, ScenarioError>;

/// Convert anyhow errors raised by workflow builders to our custom error type
impl From<anyhow::Error> for ScenarioError {
    fn from(err: anyhow::Error) -> Self {
        ScenarioError::Workflow(format!("{:#}", err))
    }
}
