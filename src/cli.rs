//! CLI interface for the scenario runner

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "scenario-runner")]
#[command(about = "Running Scenario On Desired Multi Agent Framework")]
#[command(long_about = "Prepare a data science scenario (ingest, clean, analyze, model, visualize, report) for a multi-agent LLM framework")]
pub struct Cli {
    /// Multi-agent framework to use (default: langchain)
    #[arg(short, long, value_name = "NAME")]
    pub framework: Option<String>,

    /// Output directory (default: outputs/output_<YYYY-MM-DD>)
    #[arg(short, long, value_name = "DIR")]
    pub outputdir: Option<String>,

    /// Base LLM identifier (default: open-ai)
    #[arg(short = 'l', long, value_name = "NAME")]
    pub basellm: Option<String>,

    /// Input files to analyze, separated by commas.
    /// Whitespace around each entry is trimmed and empty entries are skipped
    #[arg(short = 'p', long, visible_alias = "fp", value_name = "LIST")]
    pub filepaths: Option<String>,

    /// Settings file path
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Summary format: console, json
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Print the environment prompt handed to the agents
    #[arg(long)]
    pub show_prompt: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Input files derived from the parsed `--filepaths` value
    pub fn file_list(&self) -> Vec<PathBuf> {
        self.filepaths
            .as_deref()
            .map(parse_file_list)
            .unwrap_or_default()
    }
}

/// Split a comma separated file list, keeping order and dropping blank entries
pub fn parse_file_list(raw: &str) -> Vec<PathBuf> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(PathBuf::from)
        .collect()
}

/// Parse and validate the summary output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.trim().to_lowercase().as_str() {
        "console" | "text" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        _ => Err(format!("Invalid output format: {}. Supported: console, json", format)),
    }
}
