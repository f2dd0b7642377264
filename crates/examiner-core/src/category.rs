//! The category header that opens every quiz.

use examiner_xml::XmlElement;

/// Category path prefix understood by the quiz importer.
pub const CATEGORY_PREFIX: &str = "$course$/top/";

/// Append the `question type="category"` element naming the target category.
pub fn emit_category(name: &str, description: &str, destination: &mut XmlElement) {
    let node = destination
        .push_element(XmlElement::new("question").with_attribute("type", "category"));

    node.push_element(XmlElement::new("category"))
        .push_text_element("text", format!("{CATEGORY_PREFIX}{name}"));
    node.push_element(XmlElement::new("info"))
        .push_text_element("text", description);
}
