//! Recursive markup emitter

use std::borrow::Cow;

use tracing::trace;

use crate::error::{Error, ErrorKind, Result};
use crate::node::Node;
use crate::schema::Schema;
use crate::value::Value;

/// Element name for sequence items when the schema gives none
pub const DEFAULT_ITEM_NAME: &str = "item";

/// Renders collections as markup under the rules of a [`Schema`].
///
/// The emitter never modifies its input: attribute keys pulled out of a map
/// are tracked per element and skipped when that map's children render.
#[derive(Clone, Copy, Debug)]
pub struct Emitter<'s> {
    schema: &'s Schema,
    max_depth: u16,
}

impl<'s> Emitter<'s> {
    pub const fn new(schema: &'s Schema) -> Self {
        Self {
            schema,
            max_depth: 0,
        }
    }

    /// Limit collection nesting (0 means unlimited)
    pub const fn with_max_depth(mut self, max_depth: u16) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Render a collection found at `position`. Scalars are rejected.
    pub fn render(&self, value: &Value, position: &str) -> Result<String> {
        let mut out = String::new();
        self.render_into(value, position, &mut out)?;
        Ok(out)
    }

    /// Like [`Emitter::render`], appending to an existing buffer
    pub fn render_into(&self, value: &Value, position: &str, out: &mut String) -> Result<()> {
        self.render_node(value, &[], position, 1, out)
    }

    fn render_node(
        &self,
        value: &Value,
        consumed: &[&str],
        position: &str,
        depth: u16,
        out: &mut String,
    ) -> Result<()> {
        let node = Node::classify_excluding(value, consumed)
            .ok_or_else(|| Error::not_collection(value.type_name(), position))?;

        if self.max_depth > 0 && depth > self.max_depth {
            return Err(Error::new(
                ErrorKind::MaxDepthExceeded {
                    max: self.max_depth,
                },
                position,
            ));
        }

        trace!(position, kind = ?node.kind(), entries = node.len(), "node");
        if node.is_empty() {
            return Ok(());
        }

        match node {
            Node::Keyed(entries) => {
                for (key, child) in entries {
                    self.render_element(key, child, position, depth, out)?;
                }
            }
            Node::Sequential(items) => {
                let name = self.schema.item_name_at(position).unwrap_or_else(|| {
                    trace!(position, "no item name resolved, using default");
                    DEFAULT_ITEM_NAME
                });
                for item in items {
                    self.render_element(name, item, position, depth, out)?;
                }
            }
        }
        Ok(())
    }

    fn render_element(
        &self,
        name: &str,
        value: &Value,
        parent: &str,
        depth: u16,
        out: &mut String,
    ) -> Result<()> {
        let position = format!("{parent}/{name}");
        let wrap = self.schema.wrapping_tag_at(&position);
        let (attributes, consumed) = self.collect_attributes(&position, value);

        let tag: Cow<'_, str> = match self.schema.namespace_at(&position) {
            Some(prefix) => Cow::Owned(format!("{prefix}:{name}")),
            None => Cow::Borrowed(name),
        };
        trace!(position = %position, tag = %tag, wrap, "element");

        if wrap {
            out.push('<');
            out.push_str(&tag);
            if parent.is_empty() {
                self.push_namespace_declarations(out);
            }
            for (key, text) in &attributes {
                push_attribute(out, key, text);
            }
            out.push('>');
        }

        match value.scalar_text() {
            Some(text) => out.push_str(&text),
            None => self.render_node(value, &consumed, &position, depth.saturating_add(1), out)?,
        }

        if wrap {
            out.push_str("</");
            out.push_str(&tag);
            out.push('>');
        }
        Ok(())
    }

    /// Attribute pairs for the element at `position`, in schema order, plus
    /// the keys they consume. Only scalar, non-null members qualify.
    fn collect_attributes<'v>(
        &self,
        position: &str,
        value: &'v Value,
    ) -> (Vec<(&'s str, Cow<'v, str>)>, Vec<&'s str>) {
        let mut attributes = Vec::new();
        let mut consumed = Vec::new();

        let (Some(keys), Some(obj)) = (self.schema.attributes_at(position), value.as_object())
        else {
            return (attributes, consumed);
        };

        for key in keys {
            let key = key.as_str();
            if consumed.contains(&key) {
                continue;
            }
            let Some(member) = obj.get(key).filter(|member| !member.is_null()) else {
                continue;
            };
            match member.scalar_text() {
                Some(text) => {
                    attributes.push((key, text));
                    consumed.push(key);
                }
                None => trace!(position, key, "collection cannot be an attribute, keeping as child"),
            }
        }
        (attributes, consumed)
    }

    fn push_namespace_declarations(&self, out: &mut String) {
        if let Some(decls) = self.schema.namespace_declarations() {
            for (prefix, uri) in decls {
                out.push_str(" xmlns:");
                push_attribute_value(out, prefix, uri);
            }
        }
    }
}

fn push_attribute(out: &mut String, key: &str, value: &str) {
    out.push(' ');
    push_attribute_value(out, key, value);
}

fn push_attribute_value(out: &mut String, key: &str, value: &str) {
    out.push_str(key);
    out.push_str("=\"");
    out.push_str(value);
    out.push('"');
}
