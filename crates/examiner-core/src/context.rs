//! Diagnostic collection during a conversion.

use examiner_error_reporting::{DiagnosticKind, DiagnosticMessage};

/// Collects the diagnostics raised while converting an outline.
///
/// Every diagnostic is also emitted as a `debug` level `tracing` event.
/// Presenting them to the user is up to the caller.
///
/// # Example
///
/// ```rust
/// use examiner_core::{ConvertContext, build};
/// use examiner_outline::OutlineNode;
///
/// let mut node = OutlineNode::new("Guess")
///     .with_child(OutlineNode::new("a").with_tag("60"))
///     .with_child(OutlineNode::new("b").with_tag("60"))
///     .with_child(OutlineNode::new("c").with_tag("_10"));
///
/// let mut ctx = ConvertContext::new();
/// let question = build(&mut node, &mut ctx);
///
/// assert!(question.parse_succeeded());
/// assert_eq!(ctx.warnings().count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct ConvertContext {
    diagnostics: Vec<DiagnosticMessage>,
}

impl ConvertContext {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    /// Record a diagnostic and log it.
    pub fn add_diagnostic(&mut self, diagnostic: DiagnosticMessage) {
        tracing::debug!(
            code = diagnostic.code.as_deref().unwrap_or("-"),
            kind = ?diagnostic.kind,
            title = %diagnostic.title,
            "{}",
            diagnostic.problem.as_deref().unwrap_or_default()
        );
        self.diagnostics.push(diagnostic);
    }

    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn diagnostics(&self) -> &[DiagnosticMessage] {
        &self.diagnostics
    }

    /// Take all collected diagnostics, leaving the context empty.
    pub fn take_diagnostics(&mut self) -> Vec<DiagnosticMessage> {
        std::mem::take(&mut self.diagnostics)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(DiagnosticMessage::is_error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &DiagnosticMessage> {
        self.diagnostics
            .iter()
            .filter(|d| d.kind == DiagnosticKind::Warning)
    }

    /// Diagnostics carrying the given code.
    pub fn with_code<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a DiagnosticMessage> {
        self.diagnostics
            .iter()
            .filter(move |d| d.code.as_deref() == Some(code))
    }
}
