//! Position-keyed conversion schema
//!
//! A [`Schema`] is a flat table from position strings (`/person/contacts`)
//! to a [`PositionConfig`]. Every query is an exact-string lookup except
//! [`Schema::namespace_at`], which falls back to the `childNamespace` of the
//! outermost ancestor that declares one.
//!
//! Schemas are usually authored as data:
//!
//! ```
//! use a2x::{Schema, Value};
//! # fn main() -> Result<(), serde_json::Error> {
//! let raw: Value = serde_json::from_str(r#"{
//!     "@namespaces": {"ns": "urn:example"},
//!     "/person": {"attributes": ["id"]},
//!     "/person/contacts": {"sendItemsAs": "contact", "childNamespace": "ns"}
//! }"#)?;
//! let schema = Schema::from_value(&raw);
//! assert_eq!(schema.item_name_at("/person/contacts"), Some("contact"));
//! assert_eq!(schema.namespace_at("/person/contacts/contact"), Some("ns"));
//! # Ok(())
//! # }
//! ```

use indexmap::IndexMap;
use tracing::trace;

use crate::value::{Object, Value};

/// Reserved top-level key holding `prefix -> uri` declarations
pub const NAMESPACES_KEY: &str = "@namespaces";

/// Settings for one position of the tree
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PositionConfig {
    /// Child keys rendered as attributes, in output order
    pub attributes: Option<Vec<String>>,
    /// Element name for each item of a sequence at this position
    pub send_items_as: Option<String>,
    /// Prefix for the element at exactly this position
    pub namespace: Option<String>,
    /// Prefix inherited by descendants without their own `namespace`
    pub child_namespace: Option<String>,
    /// `Some(false)` drops the element's own tags
    pub include_wrapping_tag: Option<bool>,
}

impl PositionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attributes<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes = Some(keys.into_iter().map(Into::into).collect());
        self
    }

    pub fn send_items_as(mut self, name: impl Into<String>) -> Self {
        self.send_items_as = Some(name.into());
        self
    }

    pub fn namespace(mut self, prefix: impl Into<String>) -> Self {
        self.namespace = Some(prefix.into());
        self
    }

    pub fn child_namespace(mut self, prefix: impl Into<String>) -> Self {
        self.child_namespace = Some(prefix.into());
        self
    }

    pub fn include_wrapping_tag(mut self, include: bool) -> Self {
        self.include_wrapping_tag = Some(include);
        self
    }

    /// Reads one config record, dropping fields of the wrong shape
    fn from_object(obj: &Object) -> Self {
        Self {
            attributes: obj.get("attributes").and_then(string_list),
            send_items_as: obj.get("sendItemsAs").and_then(non_empty_string),
            namespace: obj.get("namespace").and_then(non_empty_string),
            child_namespace: obj.get("childNamespace").and_then(non_empty_string),
            include_wrapping_tag: obj.get("includeWrappingTag").map(truthy),
        }
    }
}

/// Conversion schema: position table plus root namespace declarations
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Schema {
    positions: IndexMap<String, PositionConfig>,
    namespaces: Option<IndexMap<String, String>>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Schema::insert`]
    pub fn with_position(mut self, position: impl Into<String>, config: PositionConfig) -> Self {
        self.insert(position, config);
        self
    }

    /// Adds an `xmlns:<prefix>="<uri>"` declaration for the root element
    pub fn with_namespace(mut self, prefix: impl Into<String>, uri: impl Into<String>) -> Self {
        self.namespaces
            .get_or_insert_with(IndexMap::new)
            .insert(prefix.into(), uri.into());
        self
    }

    /// Sets the config for a position, returning the one it replaced
    pub fn insert(
        &mut self,
        position: impl Into<String>,
        config: PositionConfig,
    ) -> Option<PositionConfig> {
        self.positions.insert(position.into(), config)
    }

    /// Config declared at exactly this position
    pub fn get(&self, position: &str) -> Option<&PositionConfig> {
        self.positions.get(position)
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() && self.namespaces.is_none()
    }

    /// Builds a schema from loosely typed data.
    ///
    /// Entries whose shape does not match are skipped: a non-object root
    /// gives an empty schema, a non-object position record is ignored and
    /// so is any field with the wrong type.
    pub fn from_value(value: &Value) -> Self {
        let mut schema = Self::new();
        let Some(root) = value.as_object() else {
            trace!(found = value.type_name(), "schema root is not a map, ignoring");
            return schema;
        };

        for (key, entry) in root {
            if key == NAMESPACES_KEY {
                schema.namespaces = entry.as_object().map(|decls| {
                    decls
                        .iter()
                        .filter_map(|(prefix, uri)| {
                            uri.as_string().map(|uri| (prefix.clone(), uri.to_owned()))
                        })
                        .collect()
                });
                continue;
            }
            match entry.as_object() {
                Some(obj) => {
                    schema.insert(key.clone(), PositionConfig::from_object(obj));
                }
                None => trace!(position = %key, "schema entry is not a map, ignoring"),
            }
        }
        schema
    }

    /// Attribute keys declared at this position
    pub fn attributes_at(&self, position: &str) -> Option<&[String]> {
        self.get(position)?.attributes.as_deref()
    }

    /// Element name for the items of a sequence found at `position`.
    ///
    /// Uses `sendItemsAs` when declared, otherwise the last path segment
    /// without its trailing `s`. `None` means the caller should fall back to
    /// [`crate::DEFAULT_ITEM_NAME`].
    pub fn item_name_at<'a>(&'a self, position: &'a str) -> Option<&'a str> {
        if let Some(name) = self
            .get(position)
            .and_then(|config| config.send_items_as.as_deref())
        {
            return Some(name);
        }

        let segment = position.rsplit('/').next().unwrap_or(position);
        segment.strip_suffix('s').filter(|stem| !stem.is_empty())
    }

    /// Namespace prefix for the element at `position`.
    ///
    /// An explicit `namespace` wins; otherwise the ancestors are walked from
    /// the root down and the first `childNamespace` found applies.
    pub fn namespace_at(&self, position: &str) -> Option<&str> {
        if let Some(prefix) = self
            .get(position)
            .and_then(|config| config.namespace.as_deref())
        {
            return Some(prefix);
        }

        position
            .match_indices('/')
            .filter(|(idx, _)| *idx > 0)
            .filter_map(|(idx, _)| position.get(..idx))
            .find_map(|ancestor| {
                self.get(ancestor)
                    .and_then(|config| config.child_namespace.as_deref())
            })
    }

    /// Whether the element at `position` keeps its own tags (default true)
    pub fn wrapping_tag_at(&self, position: &str) -> bool {
        self.get(position)
            .and_then(|config| config.include_wrapping_tag)
            .unwrap_or(true)
    }

    /// Root namespace declarations, in declaration order
    pub fn namespace_declarations(&self) -> Option<&IndexMap<String, String>> {
        self.namespaces.as_ref()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Schema {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <Value as serde::Deserialize>::deserialize(deserializer)
            .map(|value| Self::from_value(&value))
    }
}

fn string_list(value: &Value) -> Option<Vec<String>> {
    let items = value.as_array()?;
    Some(
        items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.clone()),
                Value::Number(_) => item.scalar_text().map(|text| text.into_owned()),
                _ => None,
            })
            .collect(),
    )
}

fn non_empty_string(value: &Value) -> Option<String> {
    value
        .as_string()
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// Loose boolean cast used for flags written as data
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => !n.is_zero(),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(arr) => !arr.is_empty(),
        Value::Object(obj) => !obj.is_empty(),
    }
}
