//! Outline tree types.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::collections::BTreeMap;

/// The root of an outline document. It has no heading of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outline {
    #[serde(default)]
    pub children: Vec<OutlineNode>,
}

/// One heading of an outline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineNode {
    /// Heading text without stars, TODO keywords or tags.
    pub heading: String,

    /// Text between this heading and the next one.
    #[serde(default)]
    pub body: String,

    /// Tags in the order the parser listed them; duplicates are dropped.
    #[serde(default, deserialize_with = "deserialize_tag_set")]
    tags: Vec<String>,

    /// Property drawer entries.
    #[serde(default, deserialize_with = "deserialize_properties")]
    pub properties: BTreeMap<String, String>,

    #[serde(default)]
    pub children: Vec<OutlineNode>,
}

impl Outline {
    pub fn new(children: Vec<OutlineNode>) -> Self {
        Self { children }
    }
}

impl OutlineNode {
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            ..Self::default()
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Add a tag unless it is already present.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.add_tag(tag);
        self
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: OutlineNode) -> Self {
        self.children.push(child);
        self
    }

    /// Add a tag unless it is already present.
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    /// The tags currently on this node.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Remove and return one marker tag (the last one listed).
    ///
    /// A marker is meant to be read once: after this call it is gone from
    /// the node, and a second call yields the next tag or `None`.
    pub fn take_marker(&mut self) -> Option<String> {
        self.tags.pop()
    }

    /// Look up a property drawer entry.
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }
}

/// A tag or property value kept as its source text.
///
/// YAML hands plain scalars such as `2.00`, `true` or `100` to
/// `deserialize_str` verbatim, so `3.00` keeps its trailing zeros.
struct RawScalar(String);

struct RawScalarVisitor;

impl<'de> Visitor<'de> for RawScalarVisitor {
    type Value = RawScalar;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, boolean or integer")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(RawScalar(value.to_string()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
        Ok(RawScalar(value))
    }

    // Deserializers that answer `deserialize_str` with their own value type
    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
        Ok(RawScalar(value.to_string()))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(RawScalar(value.to_string()))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(RawScalar(value.to_string()))
    }
}

impl<'de> Deserialize<'de> for RawScalar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(RawScalarVisitor)
    }
}

fn deserialize_tag_set<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let listed = Vec::<RawScalar>::deserialize(deserializer)?;
    let mut tags: Vec<String> = Vec::with_capacity(listed.len());
    for RawScalar(tag) in listed {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    Ok(tags)
}

fn deserialize_properties<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let listed = BTreeMap::<String, RawScalar>::deserialize(deserializer)?;
    Ok(listed
        .into_iter()
        .map(|(name, RawScalar(value))| (name, value))
        .collect())
}
