//! Conversion settings.
//!
//! Everything that is not carried by the outline itself: fixed feedback
//! texts, K-Prime column labels, and how the driver reacts to questions it
//! cannot classify. All keys are optional in the TOML file.
//!
//! ```toml
//! on_invalid = "skip"
//! fraction_sum_bound = 100.0
//! absent_properties = "omit"
//!
//! [feedback]
//! correct = "Correct!"
//!
//! [kprime]
//! true_label = "True"
//! false_label = "False"
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// What the driver does with a question it cannot classify.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop converting the document.
    #[default]
    Abort,
    /// Report the question and continue with the next one.
    Skip,
}

/// How a property missing from the outline node is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbsentProperty {
    /// `<penalty/>`
    #[default]
    Empty,
    /// No element at all.
    Omit,
}

/// Overall feedback of a multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeedbackTexts {
    pub correct: String,
    pub partially_correct: String,
    pub incorrect: String,
}

impl Default for FeedbackTexts {
    fn default() -> Self {
        Self {
            correct: "Die Antwort ist richtig!".to_string(),
            partially_correct: "Die Antwort ist teilweise richtig!".to_string(),
            incorrect: "Die Antwort ist falsch!".to_string(),
        }
    }
}

/// Column titles of a K-Prime question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KPrimeLabels {
    pub true_label: String,
    pub false_label: String,
}

impl Default for KPrimeLabels {
    fn default() -> Self {
        Self {
            true_label: "Richtig".to_string(),
            false_label: "Falsch".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertConfig {
    pub on_invalid: FailurePolicy,

    /// Multiple-choice weights summing outside `[-bound, bound]` raise a warning.
    pub fraction_sum_bound: f64,

    pub absent_properties: AbsentProperty,

    pub feedback: FeedbackTexts,

    pub kprime: KPrimeLabels,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            on_invalid: FailurePolicy::default(),
            fraction_sum_bound: 100.0,
            absent_properties: AbsentProperty::default(),
            feedback: FeedbackTexts::default(),
            kprime: KPrimeLabels::default(),
        }
    }
}

impl ConvertConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ConvertConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.fraction_sum_bound.is_finite() || self.fraction_sum_bound < 0.0 {
            return Err(ConfigError::Invalid {
                message: format!(
                    "fraction_sum_bound must be a non-negative number, got {}",
                    self.fraction_sum_bound
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConvertConfig::default();
        assert_eq!(config.on_invalid, FailurePolicy::Abort);
        assert_eq!(config.fraction_sum_bound, 100.0);
        assert_eq!(config.absent_properties, AbsentProperty::Empty);
        assert_eq!(config.feedback.correct, "Die Antwort ist richtig!");
        assert_eq!(
            config.feedback.partially_correct,
            "Die Antwort ist teilweise richtig!"
        );
        assert_eq!(config.feedback.incorrect, "Die Antwort ist falsch!");
        assert_eq!(config.kprime.true_label, "Richtig");
        assert_eq!(config.kprime.false_label, "Falsch");
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(
            ConvertConfig::from_toml_str("").unwrap(),
            ConvertConfig::default()
        );
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = ConvertConfig::from_toml_str(
            r#"
on_invalid = "skip"
absent_properties = "omit"

[feedback]
correct = "Correct!"

[kprime]
true_label = "True"
"#,
        )
        .unwrap();

        assert_eq!(config.on_invalid, FailurePolicy::Skip);
        assert_eq!(config.absent_properties, AbsentProperty::Omit);
        assert_eq!(config.feedback.correct, "Correct!");
        assert_eq!(config.feedback.incorrect, "Die Antwort ist falsch!");
        assert_eq!(config.kprime.true_label, "True");
        assert_eq!(config.kprime.false_label, "Falsch");
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = ConvertConfig::from_toml_str("on_invalid_typo = \"skip\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_negative_bound_is_rejected() {
        let err = ConvertConfig::from_toml_str("fraction_sum_bound = -1.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("examiner.toml");
        std::fs::write(&path, "fraction_sum_bound = 1.0\n").unwrap();

        let config = ConvertConfig::from_path(&path).unwrap();
        assert_eq!(config.fraction_sum_bound, 1.0);

        let err = ConvertConfig::from_path(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
