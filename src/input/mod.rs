//! Input file handling
//! Classifies the files named on the command line without reading them

pub mod file_detector;

use file_detector::FileKind;
use log::{debug, warn};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputFile {
    pub path: PathBuf,
    pub kind: FileKind,
}

impl InputFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let kind = FileKind::from_path(&path);
        Self { path, kind }
    }
}

/// Classify every path, warning about ones the workflow cannot load as tables
pub fn classify(paths: &[PathBuf]) -> Vec<InputFile> {
    paths
        .iter()
        .map(|path| {
            let input = InputFile::new(path.clone());
            debug!("Input {} detected as {}", path.display(), input.kind);
            if !input.kind.is_tabular() {
                warn!("Input file {} is not a recognised tabular format", path.display());
            }
            input
        })
        .collect()
}
