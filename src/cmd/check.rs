//! `prlint check`: validate a description payload and report per section.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use prlint::config::Config;
use prlint::description::ParsedDescription;
use prlint::report::Report;
use prlint::ui;

use crate::cli::OutputFormat;

/// Load config, decode the payload, run the section checks and print the report.
///
/// Returns the exit status: 0 when every section passed, 1 otherwise.
/// Unreadable or malformed input is returned as an error.
pub fn cmd_check(
    env: Option<&str>,
    file: Option<&Path>,
    format: OutputFormat,
    config_path: Option<&Path>,
) -> Result<i32> {
    let config = load_config(config_path)?;

    let description = match file {
        Some(path) => {
            ui::info(&format!("Reading description payload from {}", path.display()));
            let encoded = fs::read_to_string(path)
                .with_context(|| format!("Failed to read payload from {}", path.display()))?;
            ParsedDescription::decode(&encoded)?
        }
        None => {
            let var = env.unwrap_or(config.input_env.as_str());
            ui::info(&format!("Reading description payload from ${}", var));
            ParsedDescription::from_env(var)?
        }
    };

    let report = Report::build(&description, &config.rules());

    match format {
        OutputFormat::Text => println!("{}", report.render_text()),
        OutputFormat::Json => println!(
            "{}",
            report
                .render_json()
                .context("Failed to serialize report")?
        ),
    }

    if !report.passed() {
        ui::info(&format!(
            "{} of {} sections need attention; edit the PR description and re-run",
            report.failed_count(),
            report.outcomes.len()
        ));
    }

    Ok(report.exit_code())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => {
            ui::info(&format!("Using config {}", path.display()));
            Config::load_from(path)
        }
        None => Config::load(),
    }
}
