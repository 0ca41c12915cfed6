//! XML document builder

use std::fmt;

use tracing::{debug, instrument};

use crate::emit::Emitter;
use crate::error::Result;
use crate::schema::Schema;
use crate::value::Value;

/// Configuration for document output
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Value of the declaration's `version` pseudo-attribute
    pub version: String,
    /// Value of the declaration's `encoding` pseudo-attribute
    pub encoding: String,
    /// Maximum collection nesting depth (0 means unlimited)
    pub max_depth: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            encoding: "UTF-8".to_string(),
            max_depth: 0,
        }
    }
}

impl Config {
    pub fn new(version: impl Into<String>, encoding: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            encoding: encoding.into(),
            max_depth: 0,
        }
    }

    pub fn with_max_depth(mut self, max_depth: u16) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// `<?xml version="..." encoding="..."?>`
    pub fn declaration(&self) -> String {
        format!(
            "<?xml version=\"{}\" encoding=\"{}\"?>",
            self.version, self.encoding
        )
    }
}

/// A finished XML document. One construction is one conversion.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct XmlDocument {
    xml: String,
}

impl XmlDocument {
    /// Convert `value` with the default declaration
    pub fn new(value: &Value, schema: Option<&Schema>) -> Result<Self> {
        Self::with_config(value, schema, &Config::default())
    }

    /// Convert `value` with a custom declaration and limits
    #[instrument(level = "debug", skip_all, fields(root = value.type_name()))]
    pub fn with_config(value: &Value, schema: Option<&Schema>, config: &Config) -> Result<Self> {
        let empty = Schema::new();
        let schema = schema.unwrap_or(&empty);

        let mut xml = config.declaration();
        Emitter::new(schema)
            .with_max_depth(config.max_depth)
            .render_into(value, "", &mut xml)?;

        debug!(bytes = xml.len(), "document built");
        Ok(Self { xml })
    }

    pub fn as_xml(&self) -> &str {
        &self.xml
    }

    pub fn into_string(self) -> String {
        self.xml
    }
}

impl fmt::Display for XmlDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.xml)
    }
}

impl AsRef<str> for XmlDocument {
    fn as_ref(&self) -> &str {
        &self.xml
    }
}

impl From<XmlDocument> for String {
    fn from(doc: XmlDocument) -> Self {
        doc.xml
    }
}
