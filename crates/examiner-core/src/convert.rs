//! Convert a whole outline into a quiz document.
//!
//! The first top-level heading names the category; its children are the
//! questions, converted in document order.

use crate::config::FailurePolicy;
use crate::{
    ConvertConfig, ConvertContext, ConvertError, QuestionVariant, build_with_config, diagnostics,
    emit, emit_category,
};
use examiner_outline::Outline;
use examiner_xml::{XmlDocument, XmlElement};
use serde::Serialize;

/// The converted document and what happened to each question.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub document: XmlDocument,
    pub report: ConversionReport,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConversionReport {
    pub category: String,
    pub outcomes: Vec<QuestionOutcome>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionOutcome {
    pub heading: String,
    pub variant: QuestionVariant,
}

impl ConversionReport {
    /// Number of questions written to the document.
    pub fn converted(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.variant != QuestionVariant::Unrecognized)
            .count()
    }

    /// Number of questions left out under [`FailurePolicy::Skip`].
    pub fn skipped(&self) -> usize {
        self.outcomes.len() - self.converted()
    }
}

/// Convert `outline` into a `quiz` document.
///
/// Marker tags are consumed, so the outline cannot be converted a second
/// time. Warnings and per-question errors go to `ctx`; an empty outline or,
/// with [`FailurePolicy::Abort`], an unrecognized question stops the
/// conversion.
pub fn convert(
    outline: &mut Outline,
    config: &ConvertConfig,
    ctx: &mut ConvertContext,
) -> Result<Conversion, ConvertError> {
    if outline.children.len() > 1 {
        ctx.add_diagnostic(diagnostics::extra_top_level_headings(
            outline.children.len() - 1,
        ));
    }

    let Some(category) = outline.children.first_mut() else {
        return Err(ConvertError::EmptyOutline);
    };

    let mut report = ConversionReport {
        category: category.heading.trim().to_string(),
        outcomes: Vec::new(),
    };

    let mut quiz = XmlElement::new("quiz");
    emit_category(&report.category, category.body.trim(), &mut quiz);

    if category.children.is_empty() {
        ctx.add_diagnostic(diagnostics::no_questions(&report.category));
    }

    for node in &mut category.children {
        let heading = node.heading.trim().to_string();
        let question = build_with_config(node, config, ctx);

        if !question.parse_succeeded() {
            match config.on_invalid {
                FailurePolicy::Abort => {
                    return Err(ConvertError::UnrecognizedQuestion { heading });
                }
                FailurePolicy::Skip => {
                    ctx.add_diagnostic(diagnostics::unrecognized_question(&heading));
                    report.outcomes.push(QuestionOutcome {
                        heading,
                        variant: QuestionVariant::Unrecognized,
                    });
                    continue;
                }
            }
        }

        tracing::info!("Adding question: {}", heading);
        emit(&question, &mut quiz, config);
        report.outcomes.push(QuestionOutcome {
            heading,
            variant: question.variant(),
        });
    }

    Ok(Conversion {
        document: XmlDocument::new(quiz),
        report,
    })
}
