//! Structured diagnostic messages for examiner.
//!
//! Converting an outline into a quiz rarely fails outright. Most problems are
//! local to one question (a missing answer tag, weights that do not add up),
//! so they are reported as [`DiagnosticMessage`]s and collected instead of
//! being printed as they happen. The caller decides whether to log them,
//! print them, or serialize them as JSON.
//!
//! # Example
//!
//! ```
//! use examiner_error_reporting::{DiagnosticKind, DiagnosticMessageBuilder};
//!
//! let warning = DiagnosticMessageBuilder::warning("Answer Weights Out Of Range")
//!     .with_code("E-1-5")
//!     .problem("Selecting all answers may be a winning strategy")
//!     .add_info("Sum of fractions: 110")
//!     .build();
//!
//! assert_eq!(warning.kind, DiagnosticKind::Warning);
//! assert!(warning.to_text().starts_with("Warning [E-1-5]"));
//! ```

pub mod builder;
pub mod catalog;
pub mod diagnostic;

pub use builder::DiagnosticMessageBuilder;
pub use catalog::{ERROR_CATALOG, ErrorCodeInfo, get_error_info, get_subsystem};
pub use diagnostic::{DetailItem, DetailKind, DiagnosticKind, DiagnosticMessage};
