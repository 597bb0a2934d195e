//! Implementation of the `lingo check` command.

use std::fs::read_to_string;
use std::path::PathBuf;

use lingo::parse_source;
use miette::{IntoDiagnostic, Result, miette};
use serde::Serialize;

use crate::output::LingoDiagnostic;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Files to check
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one checked file.
#[derive(Serialize)]
struct CheckResult {
    file: String,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    keys: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<i32> {
    let mut results: Vec<CheckResult> = Vec::new();
    let mut first_failure: Option<LingoDiagnostic> = None;

    for file in &args.files {
        let content = read_to_string(file)
            .into_diagnostic()
            .map_err(|e| miette!("Failed to read {:?}: {}", file, e))?;

        match parse_source(&content) {
            Ok(root) => {
                results.push(CheckResult {
                    file: file.display().to_string(),
                    ok: true,
                    keys: Some(root.leaf_keys().len()),
                    error: None,
                });
            }
            Err(e) => {
                if first_failure.is_none() {
                    first_failure = Some(LingoDiagnostic::from_parse_error(file, &content, &e));
                }
                results.push(CheckResult {
                    file: file.display().to_string(),
                    ok: false,
                    keys: None,
                    error: Some(e.to_string()),
                });
            }
        }
    }

    if args.json {
        let json_output = serde_json::to_string_pretty(&results).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        for result in &results {
            if result.ok {
                println!("ok: {} ({} keys)", result.file, result.keys.unwrap_or(0));
            } else {
                println!("error: {}", result.file);
            }
        }
        if let Some(diagnostic) = first_failure {
            return Err(diagnostic.into());
        }
    }

    if results.iter().all(|r| r.ok) {
        Ok(exitcode::OK)
    } else {
        Ok(exitcode::DATAERR)
    }
}
