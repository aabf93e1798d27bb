//! Scenario runner library

pub mod cli;
pub mod clock;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod runner;
pub mod workflow;

pub use config::ScenarioConfig;
pub use error::{Result, ScenarioError};
