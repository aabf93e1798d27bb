//! File type detection for scenario inputs

use serde::Serialize;
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Csv,
    Tsv,
    Json,
    Excel,
    Parquet,
    Unknown,
}

impl FileKind {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "csv" => FileKind::Csv,
            "tsv" | "tab" => FileKind::Tsv,
            "json" | "jsonl" | "ndjson" => FileKind::Json,
            "xls" | "xlsx" => FileKind::Excel,
            "parquet" | "pq" => FileKind::Parquet,
            _ => FileKind::Unknown,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(FileKind::Unknown)
    }

    /// Whether the workflow can load this kind straight into a data frame
    pub fn is_tabular(&self) -> bool {
        !matches!(self, FileKind::Unknown)
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FileKind::Csv => "CSV",
            FileKind::Tsv => "TSV",
            FileKind::Json => "JSON",
            FileKind::Excel => "Excel",
            FileKind::Parquet => "Parquet",
            FileKind::Unknown => "unknown",
        };
        f.write_str(name)
    }
}
