//! Integration tests for the scenario runner

use chrono::NaiveDate;
use clap::Parser;
use scenario_runner::cli::Cli;
use scenario_runner::clock::FixedClock;
use scenario_runner::config::{ScenarioConfig, Settings};
use scenario_runner::runner;
use scenario_runner::workflow::prompts::{make_environment_prompt, WorkflowStage};
use scenario_runner::workflow::Topology;
use scenario_runner::ScenarioError;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn clock() -> FixedClock {
    FixedClock(
        NaiveDate::from_ymd_opt(2024, 7, 14)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap(),
    )
}

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["scenario-runner"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

/// Settings file pointing the default output root into `dir`
fn settings_file(dir: &Path, extra: &str) -> PathBuf {
    let path = dir.join("config.toml");
    let content = format!(
        "[defaults]\noutput_root = {:?}\n\n[output]\ncolor = false\n{}",
        dir.join("outputs").to_string_lossy(),
        extra
    );
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_creates_nested_output_dir() {
    let tmp = TempDir::new().unwrap();
    let target = tmp.path().join("a").join("b").join("c");
    let target_str = target.to_string_lossy().to_string();

    let config = ScenarioConfig::load(&parse(&["-o", target_str.as_str()]), &Settings::default(), &clock()).unwrap();

    assert!(target.is_dir());
    assert_eq!(config.output_dir(), target.as_path());
}

#[test]
fn test_load_twice_is_idempotent() {
    let tmp = TempDir::new().unwrap();
    let target = tmp.path().join("fresh");
    let target_str = target.to_string_lossy().to_string();
    let cli = parse(&["--outputdir", target_str.as_str()]);

    assert!(!target.exists());
    let first = ScenarioConfig::load(&cli, &Settings::default(), &clock()).unwrap();
    let second = ScenarioConfig::load(&cli, &Settings::default(), &clock()).unwrap();

    assert!(target.is_dir());
    assert_eq!(first, second);
}

#[test]
fn test_output_dir_blocked_by_file() {
    let tmp = TempDir::new().unwrap();
    let blocker = tmp.path().join("taken");
    fs::write(&blocker, "not a directory").unwrap();
    let target = blocker.join("sub");
    let target_str = target.to_string_lossy().to_string();

    let err = ScenarioConfig::load(&parse(&["-o", target_str.as_str()]), &Settings::default(), &clock()).unwrap_err();

    match err {
        ScenarioError::OutputDirectory { path, .. } => assert_eq!(path, target),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_default_output_dir_uses_clock_date() {
    let tmp = TempDir::new().unwrap();
    let config_path = settings_file(tmp.path(), "");
    let cli = parse(&["--config", config_path.to_str().unwrap()]);

    let outcome = runner::run(&cli, &clock()).unwrap();

    let output_dir = outcome.config.output_dir();
    assert!(output_dir.to_string_lossy().contains("2024-07-14"));
    assert_eq!(output_dir, tmp.path().join("outputs").join("output_2024-07-14"));
    assert!(output_dir.is_dir());
}

#[test]
fn test_run_reports_settings_and_builds_chain() {
    let tmp = TempDir::new().unwrap();
    let config_path = settings_file(tmp.path(), "");
    let out = tmp.path().join("run");
    let cli = parse(&[
        "--config",
        config_path.to_str().unwrap(),
        "--outputdir",
        out.to_str().unwrap(),
        "--basellm",
        "gpt-4o-mini",
        "--filepaths",
        "a.csv,b.csv",
    ]);

    let outcome = runner::run(&cli, &clock()).unwrap();

    assert_eq!(
        outcome.config.file_paths(),
        &[PathBuf::from("a.csv"), PathBuf::from("b.csv")]
    );
    assert!(outcome.summary.contains("Running with framework: langchain"));
    assert!(outcome.summary.contains("With base llm: gpt-4o-mini"));
    assert!(outcome.summary.contains("Analyzing the following files: a.csv, b.csv"));

    let workflow = outcome.workflow;
    assert_eq!(workflow.framework, "langchain");
    assert_eq!(workflow.topology, Topology::Chain);
    assert_eq!(workflow.stages.len(), WorkflowStage::ALL.len());
    assert_eq!(workflow.prompt, make_environment_prompt());
    assert_eq!(workflow.output_dir, out);
}

#[test]
fn test_run_with_langgraph_and_json_summary() {
    let tmp = TempDir::new().unwrap();
    let config_path = settings_file(tmp.path(), "format = \"json\"\n");
    let cli = parse(&["-c", config_path.to_str().unwrap(), "-f", "langgraph"]);

    let outcome = runner::run(&cli, &clock()).unwrap();

    let summary: serde_json::Value = serde_json::from_str(&outcome.summary).unwrap();
    assert_eq!(summary["framework"], "langgraph");
    assert_eq!(summary["files"].as_array().unwrap().len(), 0);
    assert!(matches!(outcome.workflow.topology, Topology::Graph { .. }));
}

#[test]
fn test_run_with_unknown_framework_falls_back_to_langgraph() {
    let tmp = TempDir::new().unwrap();
    let config_path = settings_file(tmp.path(), "");
    let out = tmp.path().join("crewai_run");
    let cli = parse(&[
        "-c",
        config_path.to_str().unwrap(),
        "-f",
        "crewai",
        "-o",
        out.to_str().unwrap(),
    ]);

    let outcome = runner::run(&cli, &clock()).unwrap();

    assert!(out.is_dir());
    assert_eq!(outcome.config.framework(), "crewai");
    assert!(outcome.summary.contains("Running with framework: crewai"));
    assert_eq!(outcome.workflow.framework, "langgraph");
    assert!(matches!(outcome.workflow.topology, Topology::Graph { .. }));
}

#[test]
fn test_run_rejects_bad_format_flag() {
    let tmp = TempDir::new().unwrap();
    let config_path = settings_file(tmp.path(), "");
    let cli = parse(&["-c", config_path.to_str().unwrap(), "--format", "html"]);

    let err = runner::run(&cli, &clock()).unwrap_err();
    assert!(matches!(err, ScenarioError::InvalidArgument(_)));
}

#[test]
fn test_run_with_missing_settings_file() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("nope.toml");
    let cli = parse(&["-c", missing.to_str().unwrap()]);

    let err = runner::run(&cli, &clock()).unwrap_err();
    assert!(matches!(err, ScenarioError::Configuration(_)));
}
