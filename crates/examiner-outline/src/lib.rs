//! In-memory outline trees.
//!
//! An outline is a tree of headings. Each [`OutlineNode`] carries a heading,
//! a body, a set of tags, a property drawer and ordered children. Parsing the
//! outline syntax is done elsewhere; this crate only holds the result and
//! loads it from the YAML or JSON an outline parser hands over.
//!
//! Tags double as single-use markers: [`OutlineNode::take_marker`] removes a
//! tag as it reads it, so every marker is decoded exactly once.
//!
//! # Example
//!
//! ```rust
//! use examiner_outline::Outline;
//!
//! let outline = Outline::from_yaml_str(r#"
//! children:
//!   - heading: Geography
//!     body: Questions about capitals
//!     children:
//!       - heading: Capitals of the world
//!         properties:
//!           defaultgrade: "2.00"
//! "#).unwrap();
//!
//! let category = &outline.children[0];
//! assert_eq!(category.heading, "Geography");
//! assert_eq!(category.children[0].property("defaultgrade"), Some("2.00"));
//! ```

pub mod error;
pub mod load;
pub mod node;

pub use error::{Error, Result};
pub use node::{Outline, OutlineNode};
