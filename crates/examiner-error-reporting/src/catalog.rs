//! Error code catalog and lookup.
//!
//! Maps error codes (like "E-1-2") to their subsystem and a short description.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Metadata for an error code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorCodeInfo {
    /// Subsystem name ("question" or "document")
    pub subsystem: String,

    pub title: String,

    pub message_template: String,

    /// When this code was introduced (version)
    pub since_version: String,
}

/// Global error catalog, embedded at compile time.
///
/// # Panics
///
/// Panics on first access if the embedded JSON is invalid.
pub static ERROR_CATALOG: Lazy<HashMap<String, ErrorCodeInfo>> = Lazy::new(|| {
    let json_data = include_str!("../error_catalog.json");
    serde_json::from_str(json_data).expect("Invalid error catalog JSON - this is a bug in examiner")
});

/// Look up error code information.
///
/// # Example
///
/// ```
/// use examiner_error_reporting::get_error_info;
///
/// let info = get_error_info("E-1-3").unwrap();
/// assert_eq!(info.title, "Wrong Number of K-Prime Statements");
/// ```
pub fn get_error_info(code: &str) -> Option<&ErrorCodeInfo> {
    ERROR_CATALOG.get(code)
}

/// Get the subsystem name for an error code.
pub fn get_subsystem(code: &str) -> Option<&str> {
    ERROR_CATALOG.get(code).map(|info| info.subsystem.as_str())
}
