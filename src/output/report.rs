//! Run summary reported before the workflow is built

use crate::config::ScenarioConfig;
use crate::input::InputFile;
use serde::Serialize;
use std::path::PathBuf;

/// Resolved settings of one run, as shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub framework: String,
    pub base_llm: String,
    pub files: Vec<InputFile>,
    pub output_dir: PathBuf,
}

impl RunSummary {
    pub fn from_config(config: &ScenarioConfig) -> Self {
        Self {
            framework: config.framework().to_string(),
            base_llm: config.base_llm().to_string(),
            files: config
                .file_paths()
                .iter()
                .map(|path| InputFile::new(path.clone()))
                .collect(),
            output_dir: config.output_dir().to_path_buf(),
        }
    }

    /// Input paths joined with ", "
    pub fn file_list(&self) -> String {
        self.files
            .iter()
            .map(|f| f.path.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
