//! Typed node tree for property-list documents.
//!
//! Profiles are assembled as a tree of these nodes and only turned into XML
//! by the serializer, so user-supplied text is never spliced into markup.

/// A single property-list value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlistValue {
    String(String),
    Integer(i64),
    Boolean(bool),
    Array(Vec<PlistValue>),
    Dict(PlistDict),
}

impl From<&str> for PlistValue {
    fn from(value: &str) -> Self {
        PlistValue::String(value.to_string())
    }
}

impl From<String> for PlistValue {
    fn from(value: String) -> Self {
        PlistValue::String(value)
    }
}

impl From<i64> for PlistValue {
    fn from(value: i64) -> Self {
        PlistValue::Integer(value)
    }
}

impl From<bool> for PlistValue {
    fn from(value: bool) -> Self {
        PlistValue::Boolean(value)
    }
}

impl From<PlistDict> for PlistValue {
    fn from(value: PlistDict) -> Self {
        PlistValue::Dict(value)
    }
}

/// A dictionary that keeps keys in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlistDict {
    entries: Vec<(String, PlistValue)>,
}

impl PlistDict {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `key`, replacing the value in place if the key already exists
    pub fn insert<K: Into<String>, V: Into<PlistValue>>(mut self, key: K, value: V) -> Self {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PlistValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}
