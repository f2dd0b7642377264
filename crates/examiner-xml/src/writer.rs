//! Serialize [`XmlDocument`] trees with quick-xml.

use crate::{Result, XmlChild, XmlDocument, XmlElement};
use quick_xml::Writer;
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};

/// Options controlling the serialized form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    /// Spaces per nesting level; `None` writes everything on one line.
    pub indent: Option<usize>,

    /// Whether to start with `<?xml version="1.0" encoding="UTF-8"?>`.
    pub declaration: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            indent: Some(2),
            declaration: true,
        }
    }
}

impl WriteOptions {
    /// One line, no declaration. Handy for comparing fragments.
    pub fn compact() -> Self {
        Self {
            indent: None,
            declaration: false,
        }
    }
}

/// Write a document with the default options.
pub fn write_document<W: std::io::Write>(document: &XmlDocument, sink: W) -> Result<()> {
    write_with_options(document, sink, WriteOptions::default())
}

/// Write a document to a string with the default options.
pub fn write_to_string(document: &XmlDocument) -> Result<String> {
    let mut buffer = Vec::new();
    write_document(document, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

/// Write a document with explicit options.
pub fn write_with_options<W: std::io::Write>(
    document: &XmlDocument,
    sink: W,
    options: WriteOptions,
) -> Result<()> {
    let mut writer = match options.indent {
        Some(width) => Writer::new_with_indent(sink, b' ', width),
        None => Writer::new(sink),
    };

    if options.declaration {
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    }

    write_element(&mut writer, &document.root)?;

    if options.indent.is_some() {
        writer.get_mut().write_all(b"\n")?;
    }

    Ok(())
}

fn write_element<W: std::io::Write>(writer: &mut Writer<W>, element: &XmlElement) -> Result<()> {
    let mut start = BytesStart::new(element.name.as_str());
    for attr in &element.attributes {
        start.push_attribute((attr.name.as_str(), attr.value.as_str()));
    }

    if element.children.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;

    for child in &element.children {
        match child {
            XmlChild::Element(e) => write_element(writer, e)?,
            XmlChild::Text(text) => {
                writer.write_event(Event::Text(BytesText::new(text)))?;
            }
            XmlChild::CData(text) => {
                for section in cdata_sections(text) {
                    writer.write_event(Event::CData(BytesCData::new(section)))?;
                }
            }
        }
    }

    writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
    Ok(())
}

/// Split text so that no section contains the `]]>` terminator.
///
/// `a]]>b` becomes `a]]` and `>b`, which readers join back together.
fn cdata_sections(text: &str) -> Vec<&str> {
    let mut sections = Vec::new();
    let mut rest = text;
    while let Some(pos) = rest.find("]]>") {
        sections.push(&rest[..pos + 2]);
        rest = &rest[pos + 2..];
    }
    sections.push(rest);
    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    fn compact(root: XmlElement) -> String {
        let mut buffer = Vec::new();
        write_with_options(&XmlDocument::new(root), &mut buffer, WriteOptions::compact()).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_write_compact_fragment() {
        let mut root = XmlElement::new("answer").with_attribute("fraction", "100");
        root.push_element(XmlElement::new("text").with_attribute("format", "html"))
            .push_cdata("Berlin");
        root.push_text_element("single", "");

        insta::assert_snapshot!(
            compact(root),
            @r#"<answer fraction="100"><text format="html"><![CDATA[Berlin]]></text><single/></answer>"#
        );
    }

    #[test]
    fn test_text_is_escaped() {
        let mut root = XmlElement::new("text");
        root.push_text("a < b & c");

        assert_eq!(compact(root), "<text>a &lt; b &amp; c</text>");
    }

    #[test]
    fn test_cdata_sections_split_terminator() {
        assert_eq!(cdata_sections("plain"), vec!["plain"]);
        assert_eq!(cdata_sections("a]]>b"), vec!["a]]", ">b"]);
        assert_eq!(cdata_sections("]]>]]>"), vec!["]]", ">]]", ">"]);
    }

    #[test]
    fn test_cdata_with_terminator_reads_back() {
        let mut root = XmlElement::new("text");
        root.push_cdata("x]]>y");

        let parsed = parse(&compact(root)).unwrap();
        assert_eq!(parsed.root.text(), Some("x]]>y".to_string()));
    }

    #[test]
    fn test_indented_document_has_declaration() {
        let mut root = XmlElement::new("quiz");
        root.push_element(XmlElement::new("question"));

        let xml = write_to_string(&XmlDocument::new(root)).unwrap();
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains("\n  <question/>"));
        assert!(xml.ends_with("</quiz>\n"));
    }
}
