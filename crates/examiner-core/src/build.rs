//! Build a [`CanonicalQuestion`] from an outline heading.
//!
//! Building never fails: a heading that cannot be turned into a question
//! yields [`QuestionKind::Unrecognized`] and the reason is recorded in the
//! [`ConvertContext`]. Check [`CanonicalQuestion::parse_succeeded`] before
//! emitting.
//!
//! Every answer's marker tag is consumed while building, so the same node
//! cannot be built twice with the same result.

use crate::classify::{Classification, classify_marker};
use crate::fraction::{decode_fraction, sum_out_of_range};
use crate::{
    CanonicalQuestion, ConvertConfig, ConvertContext, KPrimeAnswer, MultipleChoiceAnswer,
    QuestionKind, QuestionVariant, diagnostics,
};
use examiner_outline::OutlineNode;

/// Build a question with the default settings.
pub fn build(node: &mut OutlineNode, ctx: &mut ConvertContext) -> CanonicalQuestion {
    build_with_config(node, &ConvertConfig::default(), ctx)
}

/// Build a question.
pub fn build_with_config(
    node: &mut OutlineNode,
    config: &ConvertConfig,
    ctx: &mut ConvertContext,
) -> CanonicalQuestion {
    let Classification { variant, marker } = classify_marker(node);
    let name = node.heading.trim().to_string();

    let kind = match variant {
        QuestionVariant::Essay => Some(QuestionKind::Essay),
        QuestionVariant::KPrime => build_kprime(&name, &mut node.children, marker, ctx),
        QuestionVariant::MultipleChoice => {
            build_multiple_choice(&name, &mut node.children, marker, config, ctx)
        }
        QuestionVariant::Unrecognized => None,
    };

    let Some(kind) = kind else {
        return CanonicalQuestion::unrecognized();
    };

    CanonicalQuestion {
        name,
        body_text: node.body.trim().to_string(),
        shuffle_answers: property(node, "shuffleanswers"),
        single_answer: property(node, "single"),
        default_grade: property(node, "defaultgrade"),
        penalty: property(node, "penalty"),
        kind,
    }
}

fn property(node: &OutlineNode, name: &str) -> Option<String> {
    node.property(name).map(str::to_string)
}

/// Pair every answer heading with its marker, in document order.
///
/// The first answer's marker was already taken by the classifier and is
/// passed in as `first`.
fn take_markers<'a>(
    question: &str,
    answers: &'a mut [OutlineNode],
    first: Option<String>,
    ctx: &mut ConvertContext,
) -> Option<Vec<(&'a OutlineNode, String)>> {
    let mut first = first;
    let mut marked = Vec::with_capacity(answers.len());

    for (index, answer) in answers.iter_mut().enumerate() {
        let marker = if index == 0 {
            first.take()
        } else {
            answer.take_marker()
        };
        let answer: &'a OutlineNode = answer;

        match marker {
            Some(marker) => marked.push((answer, marker)),
            None => {
                ctx.add_diagnostic(diagnostics::missing_marker(question, answer.heading.trim()));
                return None;
            }
        }
    }

    Some(marked)
}

fn build_kprime(
    question: &str,
    answers: &mut [OutlineNode],
    first: Option<String>,
    ctx: &mut ConvertContext,
) -> Option<QuestionKind> {
    let marked = take_markers(question, answers, first, ctx)?;

    let statements: Vec<KPrimeAnswer> = marked
        .into_iter()
        .map(|(answer, marker)| {
            let answer_text = answer.heading.trim().to_string();
            if marker != "true" && marker != "false" {
                ctx.add_diagnostic(diagnostics::unknown_kprime_marker(
                    question,
                    &answer_text,
                    &marker,
                ));
            }
            KPrimeAnswer {
                answer_text,
                feedback_text: answer.body.trim().to_string(),
                correct: marker == "true",
            }
        })
        .collect();

    let found = statements.len();
    match <[KPrimeAnswer; 4]>::try_from(statements) {
        Ok(answers) => Some(QuestionKind::KPrime { answers }),
        Err(_) => {
            ctx.add_diagnostic(diagnostics::kprime_answer_count(question, found));
            None
        }
    }
}

fn build_multiple_choice(
    question: &str,
    answers: &mut [OutlineNode],
    first: Option<String>,
    config: &ConvertConfig,
    ctx: &mut ConvertContext,
) -> Option<QuestionKind> {
    let marked = take_markers(question, answers, first, ctx)?;

    let mut options = Vec::with_capacity(marked.len());
    let mut plausible_sum = 0.0;

    for (answer, marker) in marked {
        let answer_text = answer.heading.trim().to_string();
        let fraction = match decode_fraction(&marker) {
            Ok(fraction) => fraction,
            Err(err) => {
                ctx.add_diagnostic(diagnostics::invalid_weight(question, &answer_text, &err));
                return None;
            }
        };

        plausible_sum += fraction;
        options.push(MultipleChoiceAnswer {
            answer_text,
            feedback_text: answer.body.trim().to_string(),
            fraction,
        });
    }

    if sum_out_of_range(plausible_sum, config.fraction_sum_bound) {
        ctx.add_diagnostic(diagnostics::fraction_sum_out_of_range(
            question,
            plausible_sum,
        ));
    }

    Some(QuestionKind::MultipleChoice { answers: options })
}
