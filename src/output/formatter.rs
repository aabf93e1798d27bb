//! Output formatters for the run summary

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::RunSummary;
use colored::Colorize;

/// Trait for formatting run summaries
pub trait OutputFormatter {
    fn format_summary(&self, summary: &RunSummary) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Plain console lines, optionally colored
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// JSON formatter for scripting
pub struct JsonFormatter {
    pretty: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn format_line(&self, label: &str, value: &str) -> String {
        if self.use_colors {
            format!("{} {}", label.bold(), value.cyan())
        } else {
            format!("{} {}", label, value)
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_summary(&self, summary: &RunSummary) -> Result<String> {
        let lines = [
            self.format_line("Running with framework:", &summary.framework),
            self.format_line("With base llm:", &summary.base_llm),
            self.format_line("Analyzing the following files:", &summary.file_list()),
            self.format_line(
                "Output directory:",
                &summary.output_dir.display().to_string(),
            ),
        ];
        Ok(lines.join("\n"))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_summary(&self, summary: &RunSummary) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(summary)?
        } else {
            serde_json::to_string(summary)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

/// Pick the formatter for `format`
pub fn formatter_for(format: OutputFormat, use_colors: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Console => Box::new(ConsoleFormatter::new(use_colors)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
    }
}
