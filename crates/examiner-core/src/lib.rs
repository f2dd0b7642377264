//! Outline to Moodle XML quiz conversion.
//!
//! Each question of an outline goes through three steps:
//!
//! 1. [`classify`] decides the [`QuestionVariant`] from the first answer's
//!    marker tag,
//! 2. [`build_with_config`] decodes the answers into a [`CanonicalQuestion`],
//! 3. [`emit`] appends the matching `question` element to the quiz.
//!
//! [`convert`] runs all of them over a whole outline and puts the category
//! header from [`emit_category`] in front.
//!
//! Problems found on the way are collected as coded diagnostics in a
//! [`ConvertContext`]; see [`diagnostics`] for the list.
//!
//! # Example
//!
//! ```rust
//! use examiner_core::{ConvertConfig, ConvertContext, convert};
//! use examiner_outline::{Outline, OutlineNode};
//!
//! let mut outline = Outline::new(vec![
//!     OutlineNode::new("Geography").with_child(
//!         OutlineNode::new("Capital of Germany")
//!             .with_child(OutlineNode::new("Berlin").with_tag("100"))
//!             .with_child(OutlineNode::new("Bonn").with_tag("_100")),
//!     ),
//! ]);
//!
//! let mut ctx = ConvertContext::new();
//! let conversion = convert(&mut outline, &ConvertConfig::default(), &mut ctx).unwrap();
//!
//! let questions = conversion.document.root.get_children("question");
//! assert_eq!(questions[0].get_attribute("type"), Some("category"));
//! assert_eq!(questions[1].get_attribute("type"), Some("multichoice"));
//! ```

pub mod build;
pub mod category;
pub mod classify;
pub mod config;
pub mod context;
pub mod convert;
pub mod diagnostics;
pub mod emit;
pub mod error;
pub mod fraction;
pub mod question;

pub use build::{build, build_with_config};
pub use category::emit_category;
pub use classify::{Classification, classify, classify_marker};
pub use config::{AbsentProperty, ConvertConfig, FailurePolicy, FeedbackTexts, KPrimeLabels};
pub use context::ConvertContext;
pub use convert::{Conversion, ConversionReport, QuestionOutcome, convert};
pub use emit::emit;
pub use error::{ConfigError, ConvertError, FractionError};
pub use fraction::{decode_fraction, format_fraction};
pub use question::{
    CanonicalQuestion, KPrimeAnswer, MultipleChoiceAnswer, QuestionKind, QuestionVariant,
};
