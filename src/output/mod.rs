//! Output module
//! Renders the run summary for the console or as JSON

pub mod formatter;
pub mod report;
