//! Admin CLI commands
//!
//! The results API itself is never called from here. `range` prints the
//! request body the admin panel would send and `inspect` reads a saved
//! response body.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context as _, Result};
use clap::Subcommand;
use serde_json::Value;

use super::app::Context;
use super::output::Output;
use crate::domain::{DataRange, DataRequest, DataResponse};

#[derive(Subcommand)]
pub enum AdminCommands {
    /// Validate a record range and print the fetch request body
    Range {
        /// First record index (defaults to admin.default_range)
        #[arg(allow_negative_numbers = true)]
        start: Option<i64>,

        /// Last record index, inclusive (defaults to admin.default_range)
        #[arg(allow_negative_numbers = true)]
        end: Option<i64>,

        /// Session token to put in the request
        #[arg(long, env = "AHAHA_TOKEN", default_value = "")]
        token: String,
    },

    /// Read a saved results response and show its records or its error
    Inspect {
        /// JSON file holding the response body
        file: PathBuf,
    },
}

pub fn run(cmd: AdminCommands, ctx: &Context, output: &Output) -> Result<()> {
    if !ctx.site.role().is_admin() {
        bail!("Admin commands require --admin");
    }

    match cmd {
        AdminCommands::Range { start, end, token } => {
            let [default_start, default_end] = ctx.config.admin.default_range;
            range(
                output,
                start.unwrap_or(default_start),
                end.unwrap_or(default_end),
                &token,
            )
        }
        AdminCommands::Inspect { file } => inspect(output, &file),
    }
}

fn range(output: &Output, start: i64, end: i64, token: &str) -> Result<()> {
    output.verbose_ctx("admin", &format!("Validating range {}..={}", start, end));
    let range = DataRange::new(start, end)?;
    let request = DataRequest::new(token, range);

    if output.is_json() {
        output.data(&request);
    } else {
        println!(
            "Range {}..={} ({} records)",
            range.start(),
            range.end(),
            range.count()
        );
        output.data(&request);
    }

    Ok(())
}

fn inspect(output: &Output, path: &Path) -> Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read response: {}", path.display()))?;
    let body: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse response: {}", path.display()))?;

    let response = DataResponse::from_body(&body)?;
    output.verbose_ctx("admin", &format!("{} records", response.records.len()));

    if output.is_json() {
        output.data(&response);
    } else if response.records.is_empty() {
        println!("No records.");
    } else {
        for record in &response.records {
            let choices: Vec<String> = record
                .choice
                .iter()
                .map(|(word, color)| format!("{}={}", word, color))
                .collect();
            println!("{:<20} {}", record.name, choices.join(", "));
        }
    }

    Ok(())
}
