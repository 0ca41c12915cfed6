//! Keyed/sequential classification of collection values

use crate::value::Value;

/// Shape of a collection node
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Keyed,
    Sequential,
}

/// A classified collection, borrowing its entries from the input tree
#[derive(Clone, Debug, PartialEq)]
pub enum Node<'a> {
    /// Entries addressed by name, in insertion order
    Keyed(Vec<(&'a str, &'a Value)>),
    /// Items in order
    Sequential(Vec<&'a Value>),
}

impl<'a> Node<'a> {
    /// Classify a value. Scalars are not nodes and yield `None`.
    pub fn classify(value: &'a Value) -> Option<Self> {
        Self::classify_excluding(value, &[])
    }

    /// Classify the entries of `value` that are not listed in `excluded`.
    ///
    /// An object is keyed iff at least one remaining key is not integer-like;
    /// an object with no remaining entries is an empty sequence.
    pub fn classify_excluding(value: &'a Value, excluded: &[&str]) -> Option<Self> {
        match value {
            Value::Array(arr) => Some(Self::Sequential(arr.iter().collect())),
            Value::Object(obj) => {
                let entries: Vec<(&str, &Value)> = obj
                    .iter()
                    .filter(|(key, _)| !excluded.contains(&key.as_str()))
                    .map(|(key, value)| (key.as_str(), value))
                    .collect();

                if entries.iter().any(|(key, _)| !is_integer_key(key)) {
                    Some(Self::Keyed(entries))
                } else {
                    Some(Self::Sequential(
                        entries.into_iter().map(|(_, value)| value).collect(),
                    ))
                }
            }
            _ => None,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Keyed(_) => NodeKind::Keyed,
            Self::Sequential(_) => NodeKind::Sequential,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Keyed(entries) => entries.len(),
            Self::Sequential(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Kind of a value, or `None` for scalars
pub fn classify(value: &Value) -> Option<NodeKind> {
    Node::classify(value).map(|node| node.kind())
}

/// True for canonical decimal integers: `0`, `7`, `-12`.
/// Leading zeros, signs other than a single `-`, `-0` and values
/// outside the i64 range are ordinary string keys.
pub fn is_integer_key(key: &str) -> bool {
    let digits = key.strip_prefix('-').unwrap_or(key);
    let Some(first) = digits.bytes().next() else {
        return false;
    };
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if first == b'0' {
        return key == "0";
    }
    key.parse::<i64>().is_ok()
}
