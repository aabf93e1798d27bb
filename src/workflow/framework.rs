//! Agent framework adapters
//!
//! The orchestration library itself lives outside this crate. Each adapter turns a
//! scenario config and the environment prompt into a [`Workflow`] the library can run.

use super::prompts::WorkflowStage;
use super::{Topology, Workflow};
use crate::config::ScenarioConfig;
use crate::input;
use anyhow::ensure;
use log::warn;

/// Capability to build a runnable workflow for one agent framework
pub trait WorkflowBuilder {
    /// Framework name as accepted on the command line
    fn name(&self) -> &'static str;

    fn build(&self, config: &ScenarioConfig, prompt: &str) -> anyhow::Result<Workflow>;
}

/// Sequential chain: every stage feeds the next
pub struct LangChainBuilder;

impl WorkflowBuilder for LangChainBuilder {
    fn name(&self) -> &'static str {
        "langchain"
    }

    fn build(&self, config: &ScenarioConfig, prompt: &str) -> anyhow::Result<Workflow> {
        ensure!(!prompt.trim().is_empty(), "environment prompt is empty");
        Ok(assemble(self.name(), config, prompt, Topology::Chain))
    }
}

/// State graph with one node per stage and an edge to its successor
pub struct LangGraphBuilder;

impl WorkflowBuilder for LangGraphBuilder {
    fn name(&self) -> &'static str {
        "langgraph"
    }

    fn build(&self, config: &ScenarioConfig, prompt: &str) -> anyhow::Result<Workflow> {
        ensure!(!prompt.trim().is_empty(), "environment prompt is empty");

        let edges = WorkflowStage::ALL
            .windows(2)
            .map(|pair| (pair[0], pair[1]))
            .collect();
        Ok(assemble(self.name(), config, prompt, Topology::Graph { edges }))
    }
}

/// Look up the adapter for a framework name, ignoring case.
///
/// Names without an adapter fall back to LangGraph.
pub fn builder_for(name: &str) -> Box<dyn WorkflowBuilder> {
    match name.trim().to_lowercase().as_str() {
        "langchain" => Box::new(LangChainBuilder),
        "langgraph" => Box::new(LangGraphBuilder),
        _ => {
            warn!("No adapter for framework '{}', falling back to langgraph", name);
            Box::new(LangGraphBuilder)
        }
    }
}

fn assemble(framework: &str, config: &ScenarioConfig, prompt: &str, topology: Topology) -> Workflow {
    Workflow {
        framework: framework.to_string(),
        base_llm: config.base_llm().to_string(),
        prompt: prompt.to_string(),
        stages: WorkflowStage::ALL.to_vec(),
        inputs: input::classify(config.file_paths()),
        output_dir: config.output_dir().to_path_buf(),
        topology,
    }
}
