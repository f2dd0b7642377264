//! Decide which question variant an outline heading represents.
//!
//! The decision rests on the first answer heading:
//! - no answer headings at all: an essay question,
//! - first answer tagged `true` or `false`: a K-Prime question,
//! - first answer tagged with anything else (a weight): multiple choice,
//! - first answer without a tag: unrecognized.
//!
//! The tag is a single-use marker and is consumed by the classification.

use crate::QuestionVariant;
use examiner_outline::OutlineNode;

/// Result of classifying a question heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub variant: QuestionVariant,
    /// The marker taken from the first answer, if there is one.
    ///
    /// The builder decodes the first answer from this value; the tag is no
    /// longer on the node.
    pub marker: Option<String>,
}

/// Classify a question heading, consuming the first answer's marker.
pub fn classify(node: &mut OutlineNode) -> QuestionVariant {
    classify_marker(node).variant
}

/// Classify a question heading and hand back the consumed marker.
pub fn classify_marker(node: &mut OutlineNode) -> Classification {
    let Some(first) = node.children.first_mut() else {
        tracing::debug!(heading = %node.heading, "no answers, treating as essay");
        return Classification {
            variant: QuestionVariant::Essay,
            marker: None,
        };
    };

    let marker = first.take_marker();
    let variant = match marker.as_deref() {
        Some("true" | "false") => QuestionVariant::KPrime,
        Some(_) => QuestionVariant::MultipleChoice,
        None => QuestionVariant::Unrecognized,
    };

    tracing::debug!(heading = %node.heading, ?marker, %variant, "classified question");

    Classification { variant, marker }
}
