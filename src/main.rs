//! Scenario runner: prepare a data science scenario for a multi-agent LLM framework

use clap::Parser;
use log::error;
use scenario_runner::cli::Cli;
use scenario_runner::clock::SystemClock;
use scenario_runner::runner;
use scenario_runner::workflow::prompts::make_environment_prompt;
use std::process;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match runner::run(&cli, &SystemClock) {
        Ok(outcome) => {
            println!("{}", outcome.summary);
            if cli.show_prompt {
                println!("{}", make_environment_prompt());
            }
        }
        Err(e) => {
            error!("Scenario failed: {}", e);
            // Logging may be filtered out via RUST_LOG
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}
