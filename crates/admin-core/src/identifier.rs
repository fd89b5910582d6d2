//! # Identifier Resolution
//!
//! A show page can receive its record identifier from two places: an explicit
//! prop handed down by the caller, or the id segment of the current route.
//! [`resolve`] picks exactly one of them per controller invocation.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use tracing::debug;

/// Opaque primitive addressing one record within a resource collection.
///
/// Backends disagree on whether ids are numbers or strings, so both shapes
/// are first-class. The untagged serde representation lets a JSON id field
/// deserialize into whichever variant matches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Number(i64),
    Text(String),
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Identifier::Number(n) => write!(f, "{n}"),
            Identifier::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for Identifier {
    fn from(id: i64) -> Self {
        Self::Number(id)
    }
}

impl From<&str> for Identifier {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl From<String> for Identifier {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

impl From<&Identifier> for serde_json::Value {
    fn from(id: &Identifier) -> Self {
        match id {
            Identifier::Number(n) => serde_json::Value::from(*n),
            Identifier::Text(s) => serde_json::Value::from(s.as_str()),
        }
    }
}

/// Determine the identifier to display.
///
/// An explicit id wins over the route parameter and is returned verbatim;
/// the caller is assumed to have supplied the canonical form. A route id is
/// percent-decoded, since it was lifted straight out of a URL. When neither
/// is present the result is `None` and the fetcher decides what that means.
///
/// Resolution is total: a route value that is not valid percent-encoded
/// UTF-8 is used verbatim rather than turned into an error.
pub fn resolve(explicit: Option<Identifier>, route: Option<&str>) -> Option<Identifier> {
    if let Some(id) = explicit {
        return Some(id);
    }
    let raw = route?;
    match urlencoding::decode(raw) {
        Ok(decoded) => Some(Identifier::Text(decoded.into_owned())),
        Err(error) => {
            debug!(raw, %error, "route id is not valid percent-encoding, using it verbatim");
            Some(Identifier::Text(raw.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_id_wins_over_route() {
        let resolved = resolve(Some(Identifier::Number(7)), Some("ignored"));
        assert_eq!(resolved, Some(Identifier::Number(7)));
    }

    #[test]
    fn explicit_id_is_not_decoded() {
        let resolved = resolve(Some(Identifier::from("a%2Fb")), None);
        assert_eq!(resolved, Some(Identifier::from("a%2Fb")));
    }

    #[test]
    fn route_id_is_percent_decoded() {
        let resolved = resolve(None, Some("a%2Fb"));
        assert_eq!(resolved, Some(Identifier::from("a/b")));
    }

    #[test]
    fn decoding_preserves_surrounding_spaces() {
        let resolved = resolve(None, Some("%20Title%20"));
        assert_eq!(resolved, Some(Identifier::from(" Title ")));
    }

    #[test]
    fn neither_source_yields_none() {
        assert_eq!(resolve(None, None), None);
    }

    #[test]
    fn malformed_route_id_is_used_verbatim() {
        let resolved = resolve(None, Some("%ZZ"));
        assert_eq!(resolved, Some(Identifier::from("%ZZ")));
    }

    #[test]
    fn json_id_deserializes_into_matching_variant() {
        let number: Identifier = serde_json::from_str("42").unwrap();
        assert_eq!(number, Identifier::Number(42));
        let text: Identifier = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(text, Identifier::from("42"));
    }
}
