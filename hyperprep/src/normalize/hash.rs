//! Content-derived fact identifiers.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::models::FactId;

/// Computes the fact identifier of a sequence of fields.
///
/// The payload is the compact JSON array of the fields in order, so field
/// boundaries are unambiguous whatever the cell content.
pub fn fact_id<S: AsRef<str> + Serialize>(fields: &[S]) -> FactId {
    // Serializing a slice of strings cannot fail
    let json = serde_json::to_vec(fields).unwrap_or_default();
    let mut hasher = Sha256::new();
    hasher.update(json);
    FactId::new(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digest() {
        let expected = hex::encode(Sha256::digest(br#"["r1","s1","t1"]"#));
        assert_eq!(fact_id(&["r1", "s1", "t1"]).as_str(), expected);
    }

    #[test]
    fn test_stable_and_hex() {
        let a = fact_id(&["x", "y"]);
        let b = fact_id(&vec!["x".to_string(), "y".to_string()]);
        assert_eq!(a, b);
        assert_eq!(a.as_str().len(), 64);
        assert!(a.as_str().chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_field_boundaries_matter() {
        assert_ne!(fact_id(&["ab", "c"]), fact_id(&["a", "bc"]));
        assert_ne!(fact_id(&["a\tb"]), fact_id(&["a", "b"]));
    }
}
