//! Implementation of the `lingo translate` command.

use std::path::PathBuf;

use lingo::{FileSource, I18n, Lookup, Params, Value};
use serde::Serialize;

/// Arguments for the translate command.
#[derive(Debug, clap::Args)]
pub struct TranslateArgs {
    /// Key path to resolve (e.g. user.messages)
    #[arg(long, required = true)]
    pub key: String,

    /// Locale preference list, most preferred first (comma-separated)
    #[arg(long, value_delimiter = ',', required = true)]
    pub locales: Vec<String>,

    /// Directory containing translation files
    #[arg(long, default_value = "i18n")]
    pub dir: PathBuf,

    /// Parameters in name=value format (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for translate results.
#[derive(Serialize)]
pub struct TranslateResult {
    pub key: String,
    pub locale: String,
    pub result: String,
    pub found: bool,
}

/// Parse a key=value parameter string.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid parameter format '{}': expected name=value", s))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

/// Run the translate command.
pub fn run_translate(args: TranslateArgs) -> miette::Result<i32> {
    let mut i18n = I18n::new(&args.locales);
    i18n.load_source(&FileSource::new(&args.dir))
        .map_err(|e| miette::miette!("Failed to load translations: {}", e))?;

    // Convert parameters, trying i64 then f64 before falling back to String.
    let params: Params = args
        .params
        .into_iter()
        .map(|(k, v)| {
            let value = if let Ok(n) = v.parse::<i64>() {
                Value::from(n)
            } else if let Ok(x) = v.parse::<f64>() {
                Value::from(x)
            } else {
                Value::from(v)
            };
            (k, value)
        })
        .collect();

    let lookup = i18n.translate(&args.key);
    let found = lookup.is_found();
    if !found && !args.json {
        if let Lookup::Missing(missing) = &lookup {
            if !missing.suggestions().is_empty() {
                eprintln!("did you mean: {}", missing.suggestions().join(", "));
            }
        }
    }

    let rendered = i18n.t_with(&args.key, &params);

    if args.json {
        let output = TranslateResult {
            key: args.key.clone(),
            locale: i18n.locale().code().to_string(),
            result: rendered,
            found,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).expect("JSON serialization should not fail")
        );
    } else {
        println!("{}", rendered);
    }

    if found {
        Ok(exitcode::OK)
    } else {
        Ok(exitcode::DATAERR)
    }
}
