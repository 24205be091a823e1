//! Tag tree nodes and their construction from YAML

use serde::de::{
    self, Deserialize, Deserializer, EnumAccess, MapAccess, SeqAccess, VariantAccess, Visitor,
};
use std::collections::BTreeMap;
use std::fmt;

/// Mapping from key to child node, ordered by key
pub type TagMap = BTreeMap<String, TagNode>;

/// One node of a tag hierarchy
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagNode {
    /// A single value, returned as-is
    Scalar(String),
    /// Candidates of which one is picked at random
    List(Vec<String>),
    /// Named children
    Map(TagMap),
}

/// Structural problem found while converting YAML into a tag tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeError {
    /// Colon-joined location of the offending value
    pub path: String,
    pub message: String,
}

/// YAML as written, before list entries are checked.
///
/// Repeated mapping keys keep the last value.
#[derive(Debug, Clone, PartialEq)]
pub enum YamlNode {
    Null,
    Scalar(String),
    Sequence(Vec<YamlNode>),
    Mapping(BTreeMap<String, YamlNode>),
}

impl YamlNode {
    pub fn is_null(&self) -> bool {
        matches!(self, YamlNode::Null)
    }

    fn into_text(self) -> Option<String> {
        match self {
            YamlNode::Null => Some(String::new()),
            YamlNode::Scalar(text) => Some(text),
            YamlNode::Sequence(_) | YamlNode::Mapping(_) => None,
        }
    }
}

impl<'de> Deserialize<'de> for YamlNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(YamlNodeVisitor)
    }
}

struct YamlNodeVisitor;

impl<'de> Visitor<'de> for YamlNodeVisitor {
    type Value = YamlNode;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a YAML scalar, sequence or mapping")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<YamlNode, E> {
        Ok(YamlNode::Scalar(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<YamlNode, E> {
        Ok(YamlNode::Scalar(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<YamlNode, E> {
        Ok(YamlNode::Scalar(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<YamlNode, E> {
        Ok(YamlNode::Scalar(v.to_string()))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<YamlNode, E> {
        Ok(YamlNode::Scalar(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<YamlNode, E> {
        Ok(YamlNode::Scalar(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<YamlNode, E> {
        Ok(YamlNode::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<YamlNode, E> {
        Ok(YamlNode::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<YamlNode, D::Error>
    where
        D: Deserializer<'de>,
    {
        YamlNode::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<YamlNode, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::new();
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(YamlNode::Sequence(items))
    }

    fn visit_map<A>(self, mut access: A) -> Result<YamlNode, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut map = BTreeMap::new();
        while let Some((key, value)) = access.next_entry::<YamlNode, YamlNode>()? {
            let Some(key) = key.into_text() else {
                return Err(de::Error::custom("mapping keys must be plain values"));
            };
            map.insert(key, value);
        }
        Ok(YamlNode::Mapping(map))
    }

    // `!tag value`: the tag is dropped
    fn visit_enum<A>(self, data: A) -> Result<YamlNode, A::Error>
    where
        A: EnumAccess<'de>,
    {
        let (_tag, variant): (String, _) = data.variant()?;
        variant.newtype_variant()
    }
}

impl TagNode {
    /// Convert a YAML tree into a tag tree.
    ///
    /// List entries that are themselves collections are dropped and
    /// reported; the rest of the tree is kept.
    pub fn from_yaml(value: YamlNode) -> (Self, Vec<ShapeError>) {
        let mut issues = Vec::new();
        let node = Self::convert(value, &mut Vec::new(), &mut issues);
        (node, issues)
    }

    /// Whether this node carries no values at all
    pub fn is_empty(&self) -> bool {
        match self {
            TagNode::Scalar(_) => false,
            TagNode::List(items) => items.is_empty(),
            TagNode::Map(map) => map.is_empty(),
        }
    }

    fn convert(value: YamlNode, path: &mut Vec<String>, issues: &mut Vec<ShapeError>) -> Self {
        match value {
            YamlNode::Sequence(items) => {
                let mut values = Vec::new();
                for (index, item) in items.into_iter().enumerate() {
                    match item.into_text() {
                        Some(text) => values.push(text),
                        None => {
                            path.push(index.to_string());
                            issues.push(shape_error(
                                path,
                                "list entry is not a plain value, skipped",
                            ));
                            path.pop();
                        }
                    }
                }
                TagNode::List(values)
            }
            YamlNode::Mapping(mapping) => {
                let mut map = TagMap::new();
                for (key, child) in mapping {
                    path.push(key.clone());
                    let node = Self::convert(child, path, issues);
                    path.pop();
                    map.insert(key, node);
                }
                TagNode::Map(map)
            }
            YamlNode::Scalar(text) => TagNode::Scalar(text),
            YamlNode::Null => TagNode::Scalar(String::new()),
        }
    }
}

fn shape_error(path: &[String], message: &str) -> ShapeError {
    ShapeError {
        path: path.join(":"),
        message: message.to_string(),
    }
}
