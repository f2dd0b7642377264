//! Owned XML element trees for building quiz documents.
//!
//! The emitter in `examiner-core` appends elements to an [`XmlElement`] tree;
//! [`write_document`] serializes the finished tree with [`quick-xml`], and
//! [`parse`] reads a written document back into the same tree shape.
//!
//! # Example
//!
//! ```rust
//! use examiner_xml::{XmlDocument, XmlElement, parse, write_to_string};
//!
//! let mut root = XmlElement::new("quiz");
//! root.push_element(XmlElement::new("question").with_attribute("type", "essay"))
//!     .push_element(XmlElement::new("name"))
//!     .push_text_element("text", "Capitals");
//!
//! let xml = write_to_string(&XmlDocument::new(root)).unwrap();
//! let parsed = parse(&xml).unwrap();
//!
//! let question = &parsed.root.get_children("question")[0];
//! assert_eq!(question.get_attribute("type"), Some("essay"));
//! assert_eq!(question.child("name").unwrap().child_text("text"), Some("Capitals".to_string()));
//! ```

pub mod error;
pub mod parser;
pub mod types;
pub mod writer;

pub use error::{Error, Result};
pub use parser::parse;
pub use types::{XmlAttribute, XmlChild, XmlDocument, XmlElement};
pub use writer::{WriteOptions, write_document, write_to_string, write_with_options};
