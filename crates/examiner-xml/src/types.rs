//! Core types for owned XML trees.

/// An XML document: a single root element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlDocument {
    pub root: XmlElement,
}

/// An XML element.
///
/// Children keep document order; text and CDATA sections are separate
/// child kinds so that writers can reproduce them faithfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    /// The element name, including any namespace prefix.
    pub name: String,

    /// Attributes in insertion order.
    pub attributes: Vec<XmlAttribute>,

    /// Child content of this element.
    pub children: Vec<XmlChild>,
}

/// An XML attribute (value unescaped).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlAttribute {
    pub name: String,
    pub value: String,
}

/// A single child of an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlChild {
    /// A child element.
    Element(XmlElement),

    /// Character data, escaped on write.
    Text(String),

    /// Character data written as a `<![CDATA[...]]>` section.
    CData(String),
}

impl XmlDocument {
    pub fn new(root: XmlElement) -> Self {
        Self { root }
    }
}

impl XmlElement {
    /// Create a new empty element.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style attribute setter.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Set an attribute, replacing an existing one of the same name.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|a| a.name == name) {
            Some(attr) => attr.value = value,
            None => self.attributes.push(XmlAttribute { name, value }),
        }
    }

    /// Append a child element and return a handle to it.
    pub fn push_element(&mut self, element: XmlElement) -> &mut XmlElement {
        self.children.push(XmlChild::Element(element));
        match self.children.last_mut() {
            Some(XmlChild::Element(e)) => e,
            _ => unreachable!("an element was just pushed"),
        }
    }

    pub fn push_text(&mut self, text: impl Into<String>) {
        self.children.push(XmlChild::Text(text.into()));
    }

    pub fn push_cdata(&mut self, text: impl Into<String>) {
        self.children.push(XmlChild::CData(text.into()));
    }

    /// Append `<name>text</name>` and return a handle to the new element.
    ///
    /// An empty `text` produces an element without children.
    pub fn push_text_element(
        &mut self,
        name: impl Into<String>,
        text: impl Into<String>,
    ) -> &mut XmlElement {
        let text = text.into();
        let mut element = XmlElement::new(name);
        if !text.is_empty() {
            element.push_text(text);
        }
        self.push_element(element)
    }

    /// Get an attribute value by name.
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Check if this element has child elements.
    pub fn has_elements(&self) -> bool {
        self.children
            .iter()
            .any(|c| matches!(c, XmlChild::Element(_)))
    }

    /// Check if this element has no children at all.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Concatenated text and CDATA content, or `None` if there is none.
    pub fn text(&self) -> Option<String> {
        let mut text: Option<String> = None;
        for child in &self.children {
            if let XmlChild::Text(t) | XmlChild::CData(t) = child {
                text.get_or_insert_with(String::new).push_str(t);
            }
        }
        text
    }

    /// Whether the content of this element is (at least partly) CDATA.
    pub fn has_cdata(&self) -> bool {
        self.children.iter().any(|c| matches!(c, XmlChild::CData(_)))
    }

    /// First child element with the given name.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.all_children().into_iter().find(|e| e.name == name)
    }

    /// Text of the first child element with the given name.
    pub fn child_text(&self, name: &str) -> Option<String> {
        self.child(name).and_then(XmlElement::text)
    }

    /// Get child elements by name.
    pub fn get_children(&self, name: &str) -> Vec<&XmlElement> {
        self.all_children()
            .into_iter()
            .filter(|e| e.name == name)
            .collect()
    }

    /// Get all child elements (ignoring text).
    pub fn all_children(&self) -> Vec<&XmlElement> {
        self.children
            .iter()
            .filter_map(|c| match c {
                XmlChild::Element(e) => Some(e),
                _ => None,
            })
            .collect()
    }
}
