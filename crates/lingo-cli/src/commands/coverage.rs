//! Coverage command implementation.

use std::collections::HashSet;
use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use clap::Args;
use lingo::parse_source;
use miette::{IntoDiagnostic, Result, miette};
use serde::Serialize;

use crate::output::LingoDiagnostic;
use crate::output::table::{LocaleCoverage, format_coverage_table};

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Source locale file (e.g. en.lingo).
    #[arg(long)]
    pub source: PathBuf,

    /// Locales to check coverage for (comma-separated).
    #[arg(long, value_delimiter = ',')]
    pub lang: Vec<String>,

    /// Directory containing translation files. Defaults to the source
    /// file's directory.
    #[arg(long)]
    pub translations: Option<PathBuf>,

    /// Exit with non-zero code if any translation is incomplete.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for coverage data.
#[derive(Debug, Serialize)]
struct CoverageJson {
    locale: String,
    translated: usize,
    total: usize,
    missing: Vec<String>,
}

/// Run the coverage command.
pub fn run_coverage(args: CoverageArgs) -> Result<i32> {
    // Parse the source file to get the leaf key set.
    let source_content = read_to_string(&args.source)
        .into_diagnostic()
        .map_err(|e| miette!("Failed to read source file {:?}: {}", args.source, e))?;

    let source_root = match parse_source(&source_content) {
        Ok(root) => root,
        Err(e) => {
            let diagnostic = LingoDiagnostic::from_parse_error(&args.source, &source_content, &e);
            return Err(diagnostic.into());
        }
    };

    // Coverage counts leaf keys; containers are not translations.
    let source_keys: Vec<String> = source_root.leaf_keys();
    let source_count = source_keys.len();

    let extension = args
        .source
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("lingo")
        .to_string();

    // Determine base directory for translation files.
    let base_dir = args
        .translations
        .clone()
        .or_else(|| args.source.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));

    // Collect coverage data for each locale.
    let mut coverage_data: Vec<LocaleCoverage> = Vec::new();

    for lang in &args.lang {
        let lang_file = base_dir.join(format!("{}.{}", lang, extension));

        let missing: Vec<String> = if lang_file.exists() {
            let lang_content = read_to_string(&lang_file)
                .into_diagnostic()
                .map_err(|e| miette!("Failed to read translation file {:?}: {}", lang_file, e))?;

            match parse_source(&lang_content) {
                Ok(root) => {
                    let translated: HashSet<String> = root.leaf_keys().into_iter().collect();
                    source_keys
                        .iter()
                        .filter(|key| !translated.contains(*key))
                        .cloned()
                        .collect()
                }
                Err(e) => {
                    let diagnostic =
                        LingoDiagnostic::from_parse_error(&lang_file, &lang_content, &e);
                    return Err(diagnostic.into());
                }
            }
        } else {
            // File doesn't exist - every key is missing.
            source_keys.clone()
        };

        coverage_data.push(LocaleCoverage {
            locale: lang.clone(),
            translated: source_count - missing.len(),
            missing,
        });
    }

    let any_incomplete = coverage_data.iter().any(|c| !c.missing.is_empty());

    // Output results.
    if args.json {
        let json_data: Vec<CoverageJson> = coverage_data
            .iter()
            .map(|c| CoverageJson {
                locale: c.locale.clone(),
                translated: c.translated,
                total: source_count,
                missing: c.missing.clone(),
            })
            .collect();

        let json_output = serde_json::to_string_pretty(&json_data).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        let table = format_coverage_table(source_count, &coverage_data);
        println!("{}", table);

        for lang_coverage in &coverage_data {
            if !lang_coverage.missing.is_empty() {
                println!("\nMissing in {}:", lang_coverage.locale);
                for key in &lang_coverage.missing {
                    println!("  - {}", key);
                }
            }
        }
    }

    if args.strict && any_incomplete {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
