//! Environment prompt describing the data science workflow handed to the agents

use serde::Serialize;
use std::fmt;

/// One step of the data science workflow, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStage {
    IngestValidate,
    CleanTransform,
    StatisticalAnalysis,
    MachineLearning,
    Visualizations,
    Report,
}

impl WorkflowStage {
    pub const ALL: [WorkflowStage; 6] = [
        WorkflowStage::IngestValidate,
        WorkflowStage::CleanTransform,
        WorkflowStage::StatisticalAnalysis,
        WorkflowStage::MachineLearning,
        WorkflowStage::Visualizations,
        WorkflowStage::Report,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            WorkflowStage::IngestValidate => "Ingest & Validate",
            WorkflowStage::CleanTransform => "Clean & Transform",
            WorkflowStage::StatisticalAnalysis => "Statistical Analysis",
            WorkflowStage::MachineLearning => "Machine Learning",
            WorkflowStage::Visualizations => "Visualizations",
            WorkflowStage::Report => "Report",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            WorkflowStage::IngestValidate => {
                "Load the CSV files into DataFrames and check for missing values, data types, and consistency."
            }
            WorkflowStage::CleanTransform => {
                "Handle missing data, outliers, and apply necessary feature engineering (e.g., encoding, scaling)."
            }
            WorkflowStage::StatisticalAnalysis => {
                "Generate descriptive stats, correlation matrix, and conduct hypothesis tests if needed."
            }
            WorkflowStage::MachineLearning => {
                "Preprocess data, split into training/test sets, train a model, and evaluate performance using metrics (e.g., accuracy, precision)."
            }
            WorkflowStage::Visualizations => {
                "Create key plots (e.g., histograms, scatter plots, heatmaps) to visualize data and model performance."
            }
            WorkflowStage::Report => {
                "Summarize findings, analysis, model results, and visualizations in a report (PDF or HTML)."
            }
        }
    }
}

impl fmt::Display for WorkflowStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// The fixed instruction text for the data science scenario
pub fn make_environment_prompt() -> &'static str {
    DATA_SCIENCE_WORKFLOW_TEMPLATE
}

const DATA_SCIENCE_WORKFLOW_TEMPLATE: &str = r#"
Given multiple CSV files, execute the following data science workflow:

1. **Ingest & Validate**: Load the CSV files into DataFrames and check for missing values, data types, and consistency.
2. **Clean & Transform**: Handle missing data, outliers, and apply necessary feature engineering (e.g., encoding, scaling).
3. **Statistical Analysis**: Generate descriptive stats, correlation matrix, and conduct hypothesis tests if needed.
4. **Machine Learning**: Preprocess data, split into training/test sets, train a model, and evaluate performance using metrics (e.g., accuracy, precision).
5. **Visualizations**: Create key plots (e.g., histograms, scatter plots, heatmaps) to visualize data and model performance.
6. **Report**: Summarize findings, analysis, model results, and visualizations in a report (PDF or HTML).
"#;
