//! One end-to-end scenario run: config, output directory, summary, workflow

use crate::cli::{self, Cli};
use crate::clock::Clock;
use crate::config::{ScenarioConfig, Settings};
use crate::error::{Result, ScenarioError};
use crate::output::formatter::formatter_for;
use crate::output::report::RunSummary;
use crate::workflow::{self, framework, Workflow};
use log::info;

/// Everything a run produced, for the caller to print
#[derive(Debug)]
pub struct RunOutcome {
    pub config: ScenarioConfig,
    pub summary: String,
    pub workflow: Workflow,
}

pub fn run(cli: &Cli, clock: &dyn Clock) -> Result<RunOutcome> {
    let settings = Settings::load(cli.config.as_deref())?;

    let format = match cli.format.as_deref() {
        Some(raw) => cli::parse_output_format(raw).map_err(ScenarioError::InvalidArgument)?,
        None => settings.output.format,
    };

    let config = ScenarioConfig::load(cli, &settings, clock)?;
    info!(
        "Scenario ready: framework={}, base llm={}, {} input file(s), output={}",
        config.framework(),
        config.base_llm(),
        config.file_paths().len(),
        config.output_dir().display()
    );

    let summary = formatter_for(format, settings.output.color)
        .format_summary(&RunSummary::from_config(&config))?;

    let builder = framework::builder_for(config.framework());
    let workflow = workflow::prepare(&config, builder.as_ref())?;

    Ok(RunOutcome {
        config,
        summary,
        workflow,
    })
}
