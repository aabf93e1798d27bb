//! Workflow construction for the selected agent framework

pub mod framework;
pub mod prompts;

use crate::config::ScenarioConfig;
use crate::error::Result;
use crate::input::InputFile;
use framework::WorkflowBuilder;
use log::{debug, info};
use prompts::{make_environment_prompt, WorkflowStage};
use serde::Serialize;
use std::path::PathBuf;

/// How the agent framework wires the stages together
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Topology {
    Chain,
    Graph { edges: Vec<(WorkflowStage, WorkflowStage)> },
}

/// A workflow ready to hand to the agent framework
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Workflow {
    pub framework: String,
    pub base_llm: String,
    pub prompt: String,
    pub stages: Vec<WorkflowStage>,
    pub inputs: Vec<InputFile>,
    pub output_dir: PathBuf,
    pub topology: Topology,
}

/// Build the environment prompt and pass it with the config to `builder`
pub fn prepare(config: &ScenarioConfig, builder: &dyn WorkflowBuilder) -> Result<Workflow> {
    let prompt = make_environment_prompt();
    debug!("Environment prompt is {} characters", prompt.len());

    let workflow = builder.build(config, prompt)?;
    info!(
        "Built {} workflow with {} stages for {} input file(s)",
        builder.name(),
        workflow.stages.len(),
        workflow.inputs.len()
    );
    Ok(workflow)
}
