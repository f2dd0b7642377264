//! Error types for reading and writing XML.

use thiserror::Error;

/// Result type alias for examiner-xml operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading or writing XML.
#[derive(Debug, Error)]
pub enum Error {
    /// XML syntax error from quick-xml.
    #[error("XML syntax error: {message}{}", at_byte(.position))]
    XmlSyntax {
        message: String,
        /// Byte offset where the error occurred.
        position: Option<u64>,
    },

    /// Unexpected end of input.
    #[error("Unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: String },

    /// Mismatched end tag.
    #[error("Mismatched end tag: expected </{expected}>, found </{found}>")]
    MismatchedEndTag { expected: String, found: String },

    /// Empty document (no root element).
    #[error("Empty XML document: no root element found")]
    EmptyDocument,

    /// Multiple root elements.
    #[error("Invalid XML: multiple root elements")]
    MultipleRoots,

    /// Failure of the underlying writer.
    #[error("Failed to write XML: {0}")]
    Io(#[from] std::io::Error),

    /// The written bytes were not valid UTF-8.
    #[error("Written XML is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

fn at_byte(position: &Option<u64>) -> String {
    match position {
        Some(pos) => format!(" at byte {}", pos),
        None => String::new(),
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlSyntax {
            message: err.to_string(),
            position: None,
        }
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::XmlSyntax {
            message: format!("Attribute error: {}", err),
            position: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::XmlSyntax {
            message: "bad".to_string(),
            position: Some(7),
        };
        assert_eq!(err.to_string(), "XML syntax error: bad at byte 7");

        let err = Error::XmlSyntax {
            message: "bad".to_string(),
            position: None,
        };
        assert_eq!(err.to_string(), "XML syntax error: bad");

        let err = Error::MismatchedEndTag {
            expected: "quiz".to_string(),
            found: "question".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Mismatched end tag: expected </quiz>, found </question>"
        );
    }
}
