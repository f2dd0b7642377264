//! Check command implementation.
//!
//! Runs the whole conversion without writing a document and reports every
//! problem at once: unrecognized questions are always skipped here, whatever
//! the settings say.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

use examiner_core::{ConversionReport, ConvertContext, FailurePolicy, convert};
use examiner_error_reporting::DiagnosticMessage;

use super::{load_config, load_outline, render_diagnostics};

/// Arguments for the check command
#[derive(Debug)]
pub struct CheckArgs {
    pub input: PathBuf,
    pub config: Option<PathBuf>,
    pub json: bool,
}

/// Everything `check` found out about an outline.
#[derive(Debug, Serialize)]
pub struct CheckOutput {
    /// Missing when the outline has no category heading.
    pub report: Option<ConversionReport>,
    pub diagnostics: Vec<DiagnosticMessage>,
}

impl CheckOutput {
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    /// Plain-text rendering: one line per question, then the diagnostics.
    pub fn to_text(&self) -> String {
        let mut lines = Vec::new();

        if let Some(report) = &self.report {
            lines.push(format!("Category: {}", report.category));
            for outcome in &report.outcomes {
                lines.push(format!("  {} ({})", outcome.heading, outcome.variant));
            }
            lines.push(format!(
                "{} questions converted, {} skipped",
                report.converted(),
                report.skipped()
            ));
        }

        if !self.diagnostics.is_empty() {
            lines.push(String::new());
            lines.push(render_diagnostics(&self.diagnostics));
        }

        lines.join("\n")
    }
}

/// Build the report for an outline file.
pub fn run(args: &CheckArgs) -> Result<CheckOutput> {
    let mut config = load_config(args.config.as_deref())?;
    config.on_invalid = FailurePolicy::Skip;

    let mut outline = load_outline(&args.input)?;

    let mut ctx = ConvertContext::new();
    let report = match convert(&mut outline, &config, &mut ctx) {
        Ok(conversion) => Some(conversion.report),
        Err(err) => {
            ctx.add_diagnostic(err.to_diagnostic());
            None
        }
    };

    Ok(CheckOutput {
        report,
        diagnostics: ctx.take_diagnostics(),
    })
}

/// Execute the check command
pub fn execute(args: CheckArgs) -> Result<()> {
    let output = run(&args)?;

    if args.json {
        let json = serde_json::to_string_pretty(&output).context("Failed to serialize report")?;
        println!("{}", json);
    } else {
        println!("{}", output.to_text());
    }

    let errors = output.error_count();
    if errors > 0 {
        anyhow::bail!("{} found {} errors", args.input.display(), errors);
    }

    Ok(())
}
