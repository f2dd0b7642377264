//! XML reader that builds owned [`XmlElement`] trees.
//!
//! Used to inspect written quiz documents. Whitespace-only text between
//! elements is dropped; CDATA sections are kept as [`XmlChild::CData`].

use crate::{Error, Result, XmlChild, XmlDocument, XmlElement};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Parse XML from a string.
///
/// # Example
///
/// ```rust
/// use examiner_xml::parse;
///
/// let xml = parse("<quiz><question type=\"essay\"/></quiz>").unwrap();
/// assert_eq!(xml.root.name, "quiz");
/// assert_eq!(xml.root.get_children("question").len(), 1);
/// ```
///
/// # Errors
///
/// Returns an error if the XML is malformed.
pub fn parse(content: &str) -> Result<XmlDocument> {
    let mut parser = XmlParser::new(content);
    parser.parse()
}

/// Internal parser state.
struct XmlParser<'a> {
    reader: Reader<&'a [u8]>,

    /// Stack of elements being built.
    stack: Vec<XmlElement>,
}

impl<'a> XmlParser<'a> {
    fn new(source: &'a str) -> Self {
        let mut reader = Reader::from_str(source);
        reader.config_mut().trim_text_start = false;
        reader.config_mut().trim_text_end = false;

        Self {
            reader,
            stack: Vec::new(),
        }
    }

    fn parse(&mut self) -> Result<XmlDocument> {
        let mut root: Option<XmlElement> = None;

        loop {
            let event_start = self.reader.buffer_position();

            match self.reader.read_event() {
                Ok(Event::Start(e)) => {
                    let element = self.start_element(&e)?;
                    self.stack.push(element);
                }
                Ok(Event::End(e)) => {
                    let end_name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                    let element = self.stack.pop().ok_or_else(|| Error::XmlSyntax {
                        message: format!("Unexpected closing tag </{}>", end_name),
                        position: Some(event_start),
                    })?;

                    if element.name != end_name {
                        return Err(Error::MismatchedEndTag {
                            expected: element.name,
                            found: end_name,
                        });
                    }

                    self.attach(element, &mut root)?;
                }
                Ok(Event::Empty(e)) => {
                    let element = self.start_element(&e)?;
                    self.attach(element, &mut root)?;
                }
                Ok(Event::Text(e)) => {
                    let text = e.unescape().map_err(|err| Error::XmlSyntax {
                        message: format!("Invalid text content: {}", err),
                        position: Some(event_start),
                    })?;

                    if let Some(node) = self.stack.last_mut() {
                        if !text.trim().is_empty() {
                            node.push_text(text.into_owned());
                        }
                    }
                }
                Ok(Event::CData(e)) => {
                    let text = String::from_utf8_lossy(e.as_ref()).to_string();
                    if let Some(node) = self.stack.last_mut() {
                        node.push_cdata(text);
                    }
                }
                Ok(Event::Comment(_) | Event::PI(_) | Event::Decl(_) | Event::DocType(_)) => {}
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(Error::XmlSyntax {
                        message: e.to_string(),
                        position: Some(self.reader.error_position()),
                    });
                }
            }
        }

        if let Some(node) = self.stack.last() {
            return Err(Error::UnexpectedEof {
                expected: format!("closing tag </{}>", node.name),
            });
        }

        let root = root.ok_or(Error::EmptyDocument)?;
        Ok(XmlDocument::new(root))
    }

    fn start_element(&self, e: &BytesStart<'_>) -> Result<XmlElement> {
        let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
        let mut element = XmlElement::new(name);

        for attr_result in e.attributes() {
            let attr = attr_result?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
            let value = attr.unescape_value()?;
            element.set_attribute(key, value.into_owned());
        }

        Ok(element)
    }

    /// Add a finished element to its parent, or make it the root.
    fn attach(&mut self, element: XmlElement, root: &mut Option<XmlElement>) -> Result<()> {
        match self.stack.last_mut() {
            Some(parent) => {
                parent.children.push(XmlChild::Element(element));
            }
            None => {
                if root.is_some() {
                    return Err(Error::MultipleRoots);
                }
                *root = Some(element);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_element() {
        let xml = parse("<quiz/>").unwrap();
        assert_eq!(xml.root.name, "quiz");
        assert!(xml.root.is_empty());
    }

    #[test]
    fn test_parse_nested_elements() {
        let xml = parse("<quiz><question/></quiz>").unwrap();
        assert!(xml.root.has_elements());

        let children = xml.root.all_children();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].name, "question");
    }

    #[test]
    fn test_parse_text_and_entities() {
        let xml = parse("<text>Berlin &amp; Bonn</text>").unwrap();
        assert_eq!(xml.root.text(), Some("Berlin & Bonn".to_string()));
        assert!(!xml.root.has_cdata());
    }

    #[test]
    fn test_parse_cdata() {
        let xml = parse("<text format=\"html\"><![CDATA[<b>Berlin</b>]]></text>").unwrap();
        assert_eq!(xml.root.get_attribute("format"), Some("html"));
        assert_eq!(xml.root.text(), Some("<b>Berlin</b>".to_string()));
        assert!(xml.root.has_cdata());
    }

    #[test]
    fn test_whitespace_between_elements_is_dropped() {
        let xml = parse("<quiz>\n  <question/>\n  <question/>\n</quiz>").unwrap();
        assert_eq!(xml.root.children.len(), 2);
    }

    #[test]
    fn test_declaration_is_skipped() {
        let xml = parse("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<quiz/>").unwrap();
        assert_eq!(xml.root.name, "quiz");
    }

    #[test]
    fn test_empty_document_error() {
        assert!(matches!(parse(""), Err(Error::EmptyDocument)));
    }

    #[test]
    fn test_unclosed_element_error() {
        assert!(matches!(
            parse("<quiz>"),
            Err(Error::UnexpectedEof { .. } | Error::XmlSyntax { .. })
        ));
    }

    #[test]
    fn test_multiple_roots_error() {
        assert!(matches!(
            parse("<quiz/><quiz/>"),
            Err(Error::MultipleRoots)
        ));
    }

    #[test]
    fn test_mismatched_tags_error() {
        // quick-xml checks end names itself, so either error is acceptable
        let result = parse("<quiz></question>");
        assert!(
            matches!(
                result,
                Err(Error::MismatchedEndTag { .. } | Error::XmlSyntax { .. })
            ),
            "Expected MismatchedEndTag or XmlSyntax error, got: {:?}",
            result
        );
    }
}
