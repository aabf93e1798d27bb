//! Configuration management for the scenario runner

use crate::cli::Cli;
use crate::clock::Clock;
use crate::error::{Result, ScenarioError};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_FRAMEWORK: &str = "langchain";
pub const DEFAULT_BASE_LLM: &str = "open-ai";
pub const DEFAULT_OUTPUT_ROOT: &str = "outputs";

/// Settings file contents. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub defaults: DefaultsConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub framework: String,
    pub basellm: String,
    pub output_root: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            framework: DEFAULT_FRAMEWORK.to_string(),
            basellm: DEFAULT_BASE_LLM.to_string(),
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            color: true,
        }
    }
}

impl Settings {
    /// Load settings from an explicit path, or from the user config dir when present.
    ///
    /// An explicit path that does not exist is an error; a missing default file is not.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ScenarioError::Configuration(format!(
                        "Settings file not found: {}",
                        path.display()
                    )));
                }
                Self::from_file(path)
            }
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => {
                    debug!("No settings file found, using built-in defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        info!("Loading settings from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| ScenarioError::Configuration(format!("Failed to parse settings: {}", e)))
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("scenario-runner").join("config.toml"))
    }
}

/// Settings for a single run, resolved once from the command line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioConfig {
    framework: String,
    base_llm: String,
    file_paths: Vec<PathBuf>,
    output_dir: PathBuf,
}

impl ScenarioConfig {
    /// Resolve the run settings and make sure the output directory exists
    pub fn load(cli: &Cli, settings: &Settings, clock: &dyn Clock) -> Result<Self> {
        let config = Self::resolve(cli, settings, clock)?;
        config.ensure_output_dir()?;
        Ok(config)
    }

    /// Resolve the run settings without touching the filesystem.
    ///
    /// Precedence is CLI flag, then settings file, then built-in default.
    pub fn resolve(cli: &Cli, settings: &Settings, clock: &dyn Clock) -> Result<Self> {
        let framework = pick("--framework", cli.framework.as_deref(), &settings.defaults.framework)?;
        let base_llm = pick("--basellm", cli.basellm.as_deref(), &settings.defaults.basellm)?;

        let output_dir = match cli.outputdir.as_deref() {
            Some(dir) if dir.trim().is_empty() => {
                return Err(ScenarioError::InvalidArgument(
                    "--outputdir must not be empty".to_string(),
                ));
            }
            Some(dir) => PathBuf::from(dir),
            None => default_output_dir(&settings.defaults.output_root, clock),
        };

        let config = Self {
            framework,
            base_llm,
            file_paths: cli.file_list(),
            output_dir,
        };
        debug!("Resolved scenario config: {:?}", config);
        Ok(config)
    }

    /// Create the output directory and any missing parents. Safe to call repeatedly.
    pub fn ensure_output_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.output_dir).map_err(|source| {
            ScenarioError::OutputDirectory {
                path: self.output_dir.clone(),
                source,
            }
        })?;
        debug!("Output directory ready: {}", self.output_dir.display());
        Ok(())
    }

    pub fn framework(&self) -> &str {
        &self.framework
    }

    pub fn base_llm(&self) -> &str {
        &self.base_llm
    }

    pub fn file_paths(&self) -> &[PathBuf] {
        &self.file_paths
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

/// `<root>/output_<YYYY-MM-DD>` for the clock's current date
pub fn default_output_dir(root: &Path, clock: &dyn Clock) -> PathBuf {
    root.join(format!("output_{}", clock.date_stamp()))
}

fn pick(flag: &str, cli_value: Option<&str>, fallback: &str) -> Result<String> {
    let value = cli_value.unwrap_or(fallback);
    if value.trim().is_empty() {
        return Err(ScenarioError::InvalidArgument(format!("{} must not be empty", flag)));
    }
    Ok(value.to_string())
}
