//! Diagnostic messages raised while converting questions.
//!
//! Codes are listed in the `examiner-error-reporting` catalog.

use crate::error::FractionError;
use examiner_error_reporting::{DiagnosticMessage, DiagnosticMessageBuilder};

pub fn missing_marker(question: &str, answer: &str) -> DiagnosticMessage {
    DiagnosticMessageBuilder::error("Missing Answer Marker")
        .with_code("E-1-1")
        .problem("Every answer must carry a tag with its weight or correctness")
        .add_detail(format!("Question: {}", question))
        .add_note(format!("Answer: {}", answer))
        .add_hint("Tag the answer with `:true:`, `:false:` or a weight like `:_33_3:`?")
        .build()
}

pub fn invalid_weight(question: &str, answer: &str, err: &FractionError) -> DiagnosticMessage {
    DiagnosticMessageBuilder::error("Invalid Answer Weight")
        .with_code("E-1-2")
        .problem(err.to_string())
        .add_detail(format!("Question: {}", question))
        .add_note(format!("Answer: {}", answer))
        .add_hint("Write `_` for the minus sign and the decimal point, e.g. `_33_33333`?")
        .build()
}

pub fn kprime_answer_count(question: &str, found: usize) -> DiagnosticMessage {
    DiagnosticMessageBuilder::error("Wrong Number of K-Prime Statements")
        .with_code("E-1-3")
        .problem("A K-Prime question must have exactly 4 statements")
        .add_detail(format!("Question: {}", question))
        .add_info(format!("Found {} statements", found))
        .build()
}

pub fn unknown_kprime_marker(question: &str, answer: &str, marker: &str) -> DiagnosticMessage {
    DiagnosticMessageBuilder::warning("Unknown K-Prime Marker")
        .with_code("E-1-4")
        .problem(format!(
            "`{}` is neither `true` nor `false`; the statement counts as false",
            marker
        ))
        .add_detail(format!("Question: {}", question))
        .add_note(format!("Answer: {}", answer))
        .build()
}

pub fn fraction_sum_out_of_range(question: &str, sum: f64) -> DiagnosticMessage {
    DiagnosticMessageBuilder::warning("Answer Weights Out Of Range")
        .with_code("E-1-5")
        .problem(
            "The sum of the fractions should be 0. Otherwise always selecting all answers is a winning strategy.",
        )
        .add_detail(format!("Question: {}", question))
        .add_info(format!("Checksum is: {}", sum))
        .build()
}

pub fn unrecognized_question(question: &str) -> DiagnosticMessage {
    DiagnosticMessageBuilder::error("Unrecognized Question")
        .with_code("E-2-1")
        .problem(format!("Error parsing question: {}", question))
        .add_hint("Tag the first answer with `:true:`/`:false:` or a weight?")
        .build()
}

pub fn empty_outline() -> DiagnosticMessage {
    DiagnosticMessageBuilder::error("Empty Outline")
        .with_code("E-2-2")
        .problem("The outline must start with a category heading")
        .build()
}

pub fn extra_top_level_headings(ignored: usize) -> DiagnosticMessage {
    DiagnosticMessageBuilder::warning("Extra Top-Level Headings")
        .with_code("E-2-3")
        .problem("Only the first top-level heading is converted")
        .add_info(format!("{} further top-level headings were ignored", ignored))
        .build()
}

pub fn no_questions(category: &str) -> DiagnosticMessage {
    DiagnosticMessageBuilder::warning("No Questions")
        .with_code("E-2-4")
        .problem("No questions in file")
        .add_detail(format!("Category: {}", category))
        .build()
}
