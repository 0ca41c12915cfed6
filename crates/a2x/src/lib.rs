//! a2x - schema-guided conversion of nested key/value trees into XML
//!
//! # Quick Start
//!
//! ```
//! use a2x::{to_xml, Object, Value};
//! # fn main() -> Result<(), a2x::Error> {
//! let mut name = Object::new();
//! name.insert("given", "first");
//! name.insert("surname", "last");
//! let mut person = Object::new();
//! person.insert("name", name);
//! person.insert("age", 40);
//! let mut root = Object::new();
//! root.insert("person", person);
//!
//! let xml = to_xml(&Value::Object(root), None)?;
//! assert_eq!(
//!     xml,
//!     r#"<?xml version="1.0" encoding="UTF-8"?><person><name><given>first</given><surname>last</surname></name><age>40</age></person>"#
//! );
//! # Ok(())
//! # }
//! ```
//!
//! Text and attribute values are written verbatim; callers that need
//! escaping must escape before conversion.

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, ErrorKind, Result};

pub mod value;
pub use value::{Array, Number, Object, Value};

pub mod node;
pub use node::{classify, Node, NodeKind};

pub mod schema;
pub use schema::{PositionConfig, Schema, NAMESPACES_KEY};

pub mod emit;
pub use emit::{Emitter, DEFAULT_ITEM_NAME};

pub mod document;
pub use document::{Config, XmlDocument};

/// Convert a tree to an XML string with the default declaration
pub fn to_xml(value: &Value, schema: Option<&Schema>) -> Result<String> {
    XmlDocument::new(value, schema).map(XmlDocument::into_string)
}

/// Convert a tree to an XML string with custom configuration
pub fn to_xml_with_config(value: &Value, schema: Option<&Schema>, config: &Config) -> Result<String> {
    XmlDocument::with_config(value, schema, config).map(XmlDocument::into_string)
}
