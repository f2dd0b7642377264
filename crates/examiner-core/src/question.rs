//! The canonical question model.
//!
//! A [`CanonicalQuestion`] is built once per outline heading and consumed
//! once by the emitter. The variant and its answers live together in
//! [`QuestionKind`], so a K-Prime question cannot carry weighted answers and
//! an essay cannot carry answers at all.

use serde::Serialize;

/// The supported question kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionVariant {
    MultipleChoice,
    KPrime,
    Essay,
    Unrecognized,
}

impl QuestionVariant {
    /// The value of the `type` attribute in Moodle XML.
    pub fn schema_keyword(self) -> Option<&'static str> {
        match self {
            QuestionVariant::MultipleChoice => Some("multichoice"),
            QuestionVariant::KPrime => Some("kprime"),
            QuestionVariant::Essay => Some("essay"),
            QuestionVariant::Unrecognized => None,
        }
    }
}

impl std::fmt::Display for QuestionVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            QuestionVariant::MultipleChoice => "multiple choice",
            QuestionVariant::KPrime => "K-Prime",
            QuestionVariant::Essay => "essay",
            QuestionVariant::Unrecognized => "unrecognized",
        };
        f.write_str(label)
    }
}

/// An answer option of a multiple-choice question.
#[derive(Debug, Clone, PartialEq)]
pub struct MultipleChoiceAnswer {
    pub answer_text: String,
    pub feedback_text: String,
    /// Percentage weight, negative for wrong answers.
    pub fraction: f64,
}

/// One of the four statements of a K-Prime question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KPrimeAnswer {
    pub answer_text: String,
    pub feedback_text: String,
    pub correct: bool,
}

/// Variant-specific payload.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionKind {
    MultipleChoice { answers: Vec<MultipleChoiceAnswer> },
    /// The target schema has exactly four rows.
    KPrime { answers: [KPrimeAnswer; 4] },
    Essay,
    Unrecognized,
}

/// A question ready for emission.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalQuestion {
    /// Trimmed heading.
    pub name: String,
    /// Trimmed body, the question prompt.
    pub body_text: String,

    // Property drawer values, passed through verbatim.
    pub shuffle_answers: Option<String>,
    pub single_answer: Option<String>,
    pub default_grade: Option<String>,
    pub penalty: Option<String>,

    pub kind: QuestionKind,
}

impl CanonicalQuestion {
    /// A question that could not be classified. Nothing else is populated.
    pub fn unrecognized() -> Self {
        Self {
            name: String::new(),
            body_text: String::new(),
            shuffle_answers: None,
            single_answer: None,
            default_grade: None,
            penalty: None,
            kind: QuestionKind::Unrecognized,
        }
    }

    pub fn variant(&self) -> QuestionVariant {
        match self.kind {
            QuestionKind::MultipleChoice { .. } => QuestionVariant::MultipleChoice,
            QuestionKind::KPrime { .. } => QuestionVariant::KPrime,
            QuestionKind::Essay => QuestionVariant::Essay,
            QuestionKind::Unrecognized => QuestionVariant::Unrecognized,
        }
    }

    /// Whether this question may be handed to the emitter.
    pub fn parse_succeeded(&self) -> bool {
        self.variant() != QuestionVariant::Unrecognized
    }

    /// Answers of a multiple-choice question, `None` for other variants.
    pub fn multiple_choice_answers(&self) -> Option<&[MultipleChoiceAnswer]> {
        match &self.kind {
            QuestionKind::MultipleChoice { answers } => Some(answers),
            _ => None,
        }
    }

    /// Statements of a K-Prime question, `None` for other variants.
    pub fn kprime_answers(&self) -> Option<&[KPrimeAnswer; 4]> {
        match &self.kind {
            QuestionKind::KPrime { answers } => Some(answers),
            _ => None,
        }
    }
}
