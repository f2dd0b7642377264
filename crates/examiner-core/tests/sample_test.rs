//! Convert the sample quiz end to end and read the written XML back.

use examiner_core::{ConvertConfig, ConvertContext, QuestionVariant, convert};
use examiner_outline::Outline;
use examiner_xml::{XmlElement, parse, write_to_string};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Convert the sample, write it and parse the written text again.
fn written_sample() -> (XmlElement, ConvertContext) {
    let mut outline = Outline::from_path(&fixture("sample.yaml")).unwrap();
    let mut ctx = ConvertContext::new();
    let conversion = convert(&mut outline, &ConvertConfig::default(), &mut ctx).unwrap();

    let xml = write_to_string(&conversion.document).unwrap();
    assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));

    (parse(&xml).unwrap().root, ctx)
}

fn question<'a>(quiz: &'a XmlElement, name: &str) -> &'a XmlElement {
    quiz.get_children("question")
        .into_iter()
        .find(|q| {
            q.child("name")
                .and_then(|n| n.child_text("text"))
                .as_deref()
                == Some(name)
        })
        .unwrap_or_else(|| panic!("no question named {name}"))
}

#[test]
fn test_sample_converts_without_diagnostics() {
    let mut outline = Outline::from_path(&fixture("sample.yaml")).unwrap();
    let mut ctx = ConvertContext::new();
    let conversion = convert(&mut outline, &ConvertConfig::default(), &mut ctx).unwrap();

    assert!(!ctx.has_diagnostics(), "{:?}", ctx.diagnostics());

    let variants: Vec<QuestionVariant> = conversion
        .report
        .outcomes
        .iter()
        .map(|o| o.variant)
        .collect();
    assert_eq!(
        variants,
        vec![
            QuestionVariant::MultipleChoice,
            QuestionVariant::Essay,
            QuestionVariant::KPrime,
        ]
    );
}

#[test]
fn test_sample_document_order() {
    let (quiz, _) = written_sample();

    let types: Vec<&str> = quiz
        .get_children("question")
        .into_iter()
        .map(|q| q.get_attribute("type").unwrap())
        .collect();
    assert_eq!(types, vec!["category", "multichoice", "essay", "kprime"]);

    let header = quiz.get_children("question")[0];
    assert_eq!(
        header.child("category").unwrap().child_text("text"),
        Some("$course$/top/Capitals".to_string())
    );
}

#[test]
fn test_sample_multiple_choice() {
    let (quiz, _) = written_sample();
    let mc = question(&quiz, "Capitals of the world");

    let fractions: Vec<&str> = mc
        .get_children("answer")
        .into_iter()
        .map(|a| a.get_attribute("fraction").unwrap())
        .collect();
    assert_eq!(fractions, vec!["-33.33333", "-33.33333", "100", "-33.33333"]);

    let berlin = mc.get_children("answer")[2];
    assert_eq!(berlin.child_text("text"), Some("Berlin".to_string()));
    assert_eq!(
        berlin.child("feedback").unwrap().child_text("text"),
        Some("Yes, let's face it, that is the Capital of Germany.".to_string())
    );

    assert_eq!(mc.child_text("defaultgrade"), Some("2.00".to_string()));
    assert_eq!(mc.child_text("penalty"), Some("0.33".to_string()));
    assert_eq!(mc.child_text("single"), Some("false".to_string()));
    assert_eq!(mc.child_text("shuffleanswers"), Some("true".to_string()));
    assert_eq!(
        mc.child("questiontext").unwrap().child_text("text"),
        Some("What is the capital of Germany?".to_string())
    );
}

#[test]
fn test_sample_essay() {
    let (quiz, _) = written_sample();
    let essay = question(&quiz, "Open question with text field");

    assert_eq!(essay.child_text("defaultgrade"), Some("3.00".to_string()));
    assert_eq!(essay.child_text("responseformat"), Some("editor".to_string()));
    assert_eq!(
        essay.child("questiontext").unwrap().child_text("text"),
        Some(
            "What are three advantages of <b>Berlin</b> being the capital of Germany?".to_string()
        )
    );
    assert!(essay.child("penalty").unwrap().is_empty());
}

#[test]
fn test_sample_kprime_weights() {
    let (quiz, _) = written_sample();
    let kprime = question(&quiz, "K-Prime");

    let values: Vec<String> = kprime
        .get_children("weight")
        .into_iter()
        .map(|w| w.child_text("value").unwrap())
        .collect();
    assert_eq!(
        values,
        vec!["1.000", "0.000", "0.000", "1.000", "1.000", "0.000", "0.000", "1.000"]
    );

    let rows = kprime.get_children("row");
    assert_eq!(rows.len(), 4);
    assert_eq!(
        rows[3].child("feedbacktext").unwrap().child_text("text"),
        Some("Serious? You mix up Austria and Switzerland.".to_string())
    );
}

#[test]
fn test_sample_cannot_be_converted_twice() {
    let mut outline = Outline::from_path(&fixture("sample.yaml")).unwrap();
    let config = ConvertConfig::default();

    let mut ctx = ConvertContext::new();
    convert(&mut outline, &config, &mut ctx).unwrap();

    // The markers were consumed by the first run
    let mut ctx = ConvertContext::new();
    assert!(convert(&mut outline, &config, &mut ctx).is_err());
}
