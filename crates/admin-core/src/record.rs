//! # Record
//!
//! A fetched entity as a loosely-typed field-name to value mapping. The
//! controller never inspects record content beyond the id; everything else
//! is pass-through material for the presentation and translation layers.

use crate::identifier::Identifier;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One fetched entity's field-value mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builder-style field assignment, handy in tests and demo data.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// The record's own id field, if it carries one in a usable shape.
    ///
    /// Matching the resolved identifier is expected but not enforced at
    /// this layer.
    pub fn id(&self) -> Option<Identifier> {
        match self.0.get("id")? {
            Value::String(s) => Some(Identifier::Text(s.clone())),
            Value::Number(n) => n.as_i64().map(Identifier::Number),
            _ => None,
        }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_accessor_handles_both_shapes() {
        let numeric = Record::new().with("id", 42);
        assert_eq!(numeric.id(), Some(Identifier::Number(42)));

        let textual = Record::new().with("id", "post-1");
        assert_eq!(textual.id(), Some(Identifier::from("post-1")));

        assert_eq!(Record::new().id(), None);
    }

    #[test]
    fn deserializes_from_a_plain_json_object() {
        let record: Record = serde_json::from_str(r#"{"id": 1, "title": "Dune"}"#).unwrap();
        assert_eq!(record.get("title"), Some(&Value::from("Dune")));
    }
}
