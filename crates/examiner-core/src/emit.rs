//! Emit canonical questions as Moodle XML `question` elements.

use crate::config::{AbsentProperty, ConvertConfig};
use crate::fraction::format_fraction;
use crate::{CanonicalQuestion, KPrimeAnswer, MultipleChoiceAnswer, QuestionKind};
use examiner_xml::XmlElement;

/// Append `question` to `destination` (normally the `quiz` root).
///
/// The question must have been built successfully; emitting an
/// unrecognized question is a programming error.
pub fn emit(question: &CanonicalQuestion, destination: &mut XmlElement, config: &ConvertConfig) {
    let Some(keyword) = question.variant().schema_keyword() else {
        debug_assert!(false, "emit called on an unrecognized question");
        tracing::error!(name = %question.name, "refusing to emit an unrecognized question");
        return;
    };

    let node = destination.push_element(XmlElement::new("question").with_attribute("type", keyword));
    push_text_node(node, "name", &question.name);

    match &question.kind {
        QuestionKind::MultipleChoice { answers } => {
            emit_multiple_choice(node, question, answers, config);
        }
        QuestionKind::KPrime { answers } => emit_kprime(node, question, answers, config),
        QuestionKind::Essay => emit_essay(node, question, config),
        QuestionKind::Unrecognized => unreachable!("no schema keyword for unrecognized questions"),
    }
}

fn emit_multiple_choice(
    node: &mut XmlElement,
    question: &CanonicalQuestion,
    answers: &[MultipleChoiceAnswer],
    config: &ConvertConfig,
) {
    push_html_node(node, "questiontext", &question.body_text);
    push_text_node(node, "generalfeedback", "");

    push_grading(node, question, config);
    push_property(node, "single", question.single_answer.as_deref(), config);
    push_property(node, "shuffleanswers", question.shuffle_answers.as_deref(), config);

    push_html_node(node, "correctfeedback", &config.feedback.correct);
    push_html_node(node, "partiallycorrectfeedback", &config.feedback.partially_correct);
    push_html_node(node, "incorrectfeedback", &config.feedback.incorrect);

    for answer in answers {
        let element = node.push_element(
            XmlElement::new("answer").with_attribute("fraction", format_fraction(answer.fraction)),
        );
        element
            .push_element(XmlElement::new("text").with_attribute("format", "html"))
            .push_cdata(answer.answer_text.as_str());
        push_html_node(element, "feedback", &answer.feedback_text);
    }
}

fn emit_kprime(
    node: &mut XmlElement,
    question: &CanonicalQuestion,
    answers: &[KPrimeAnswer; 4],
    config: &ConvertConfig,
) {
    // K-Prime prompts are plain text in the target format
    push_text_node(node, "questiontext", &question.body_text);
    push_text_node(node, "generalfeedback", "");

    push_grading(node, question, config);
    push_property(node, "single", question.single_answer.as_deref(), config);
    push_property(node, "shuffleanswers", question.shuffle_answers.as_deref(), config);

    push_text_node(node, "scoringmethod", "kprime");

    for (number, answer) in (1..).zip(answers) {
        let row = node.push_element(
            XmlElement::new("row").with_attribute("number", number.to_string()),
        );
        push_html_node(row, "optiontext", &answer.answer_text);
        push_html_node(row, "feedbacktext", &answer.feedback_text);
    }

    for (number, label) in [(1, &config.kprime.true_label), (2, &config.kprime.false_label)] {
        let column = node.push_element(
            XmlElement::new("column").with_attribute("number", number.to_string()),
        );
        push_text_node(column, "responsetext", label);
    }

    for (number, answer) in (1..).zip(answers) {
        push_weights(node, number, answer.correct);
    }
}

fn emit_essay(node: &mut XmlElement, question: &CanonicalQuestion, config: &ConvertConfig) {
    push_html_node(node, "questiontext", &question.body_text);
    push_text_node(node, "generalfeedback", "");

    push_grading(node, question, config);

    // Fixed response settings
    node.push_text_element("responseformat", "editor");
    node.push_text_element("responserequired", "1");
    node.push_text_element("responsefieldlines", "15");
    node.push_text_element("minwordlimit", "");
    node.push_text_element("maxwordlimit", "");
    node.push_text_element("attachments", "0");
    node.push_text_element("attachmentsrequired", "0");
    node.push_text_element("filetypeslist", "");
    push_text_node(node, "graderinfo", "");
    push_text_node(node, "responsetemplate", "");
}

/// `<name><text>text</text></name>`
fn push_text_node(parent: &mut XmlElement, name: &str, text: &str) {
    parent
        .push_element(XmlElement::new(name))
        .push_text_element("text", text);
}

/// `<name><text format="html"><![CDATA[text]]></text></name>`
fn push_html_node(parent: &mut XmlElement, name: &str, text: &str) {
    parent
        .push_element(XmlElement::new(name))
        .push_element(XmlElement::new("text").with_attribute("format", "html"))
        .push_cdata(text);
}

fn push_property(
    parent: &mut XmlElement,
    name: &str,
    value: Option<&str>,
    config: &ConvertConfig,
) {
    match (value, config.absent_properties) {
        (Some(value), _) => {
            parent.push_text_element(name, value);
        }
        (None, AbsentProperty::Empty) => {
            parent.push_element(XmlElement::new(name));
        }
        (None, AbsentProperty::Omit) => {}
    }
}

fn push_grading(parent: &mut XmlElement, question: &CanonicalQuestion, config: &ConvertConfig) {
    push_property(parent, "defaultgrade", question.default_grade.as_deref(), config);
    push_property(parent, "penalty", question.penalty.as_deref(), config);
}

/// One weight per column: the statement is either in column 1 (true) or 2 (false).
fn push_weights(parent: &mut XmlElement, row: usize, correct: bool) {
    let (first, second) = if correct {
        ("1.000", "0.000")
    } else {
        ("0.000", "1.000")
    };

    for (column, value) in [("1", first), ("2", second)] {
        parent
            .push_element(
                XmlElement::new("weight")
                    .with_attribute("rownumber", row.to_string())
                    .with_attribute("columnnumber", column),
            )
            .push_text_element("value", value);
    }
}
