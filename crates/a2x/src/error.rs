//! Error types for a2x

use std::fmt;
use thiserror::Error;

/// Error kind for detailed categorization
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A scalar reached the collection entry point
    NotCollection { found: &'static str },
    /// The tree is nested deeper than the configured limit
    MaxDepthExceeded { max: u16 },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotCollection { found } => {
                write!(f, "expected a keyed or sequential collection, found {found}")
            }
            Self::MaxDepthExceeded { max } => write!(f, "max depth exceeded: {max}"),
        }
    }
}

/// Main error type for a2x
#[derive(Error, Clone, Debug, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    position: String,
    message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, position: impl Into<String>) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            position: position.into(),
            message,
        }
    }

    /// Shorthand for [`ErrorKind::NotCollection`]
    pub fn not_collection(found: &'static str, position: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotCollection { found }, position)
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Position of the offending node; empty for the document root
    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_not_collection(&self) -> bool {
        matches!(self.kind, ErrorKind::NotCollection { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.position.is_empty() {
            write!(f, "error at document root: {}", self.message)
        } else {
            write!(f, "error at {}: {}", self.position, self.message)
        }
    }
}

/// Result type alias for a2x
pub type Result<T> = std::result::Result<T, Error>;
