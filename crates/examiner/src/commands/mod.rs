//! Command implementations for the examiner CLI
//!
//! Each command module handles the CLI interface and delegates to
//! examiner-core for the conversion itself.

pub mod check;
pub mod convert;

use std::path::Path;

use anyhow::{Context, Result};
use examiner_core::ConvertConfig;
use examiner_error_reporting::DiagnosticMessage;
use examiner_outline::Outline;

/// Load the settings file, or the defaults when none is given.
pub(crate) fn load_config(path: Option<&Path>) -> Result<ConvertConfig> {
    match path {
        Some(path) => ConvertConfig::from_path(path)
            .with_context(|| format!("Failed to load configuration {}", path.display())),
        None => Ok(ConvertConfig::default()),
    }
}

pub(crate) fn load_outline(path: &Path) -> Result<Outline> {
    Outline::from_path(path).with_context(|| format!("Failed to load outline {}", path.display()))
}

/// Render diagnostics as text, separated by blank lines.
pub(crate) fn render_diagnostics(diagnostics: &[DiagnosticMessage]) -> String {
    diagnostics
        .iter()
        .map(DiagnosticMessage::to_text)
        .collect::<Vec<_>>()
        .join("\n\n")
}
