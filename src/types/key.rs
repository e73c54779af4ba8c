//! Record identifiers for the Sales Report Engine
//!
//! Seller ids and product SKUs arrive from loosely typed sources where the
//! same identifier may be written as `1` in one collection and `"1"` in
//! another. `RecordKey` normalizes both spellings to their string form so that
//! lookups never miss because of a numeric/string mismatch.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Normalized string key for sellers and products
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordKey(String);

/// Seller identifier
pub type SellerId = RecordKey;

/// Product stock keeping unit
pub type Sku = RecordKey;

impl RecordKey {
    pub fn new(value: impl Into<String>) -> Self {
        RecordKey(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordKey {
    fn from(value: &str) -> Self {
        RecordKey(value.to_string())
    }
}

impl From<String> for RecordKey {
    fn from(value: String) -> Self {
        RecordKey(value)
    }
}

impl From<u64> for RecordKey {
    fn from(value: u64) -> Self {
        RecordKey(value.to_string())
    }
}

impl<'de> Deserialize<'de> for RecordKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(RecordKeyVisitor)
    }
}

struct RecordKeyVisitor;

impl<'de> Visitor<'de> for RecordKeyVisitor {
    type Value = RecordKey;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string or integer identifier")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<RecordKey, E> {
        Ok(RecordKey::from(value))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<RecordKey, E> {
        Ok(RecordKey(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<RecordKey, E> {
        Ok(RecordKey(value.to_string()))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<RecordKey, E> {
        Ok(RecordKey(value.to_string()))
    }

    // Identifiers like 7.0 are written the way a JavaScript number would print.
    fn visit_f64<E: de::Error>(self, value: f64) -> Result<RecordKey, E> {
        if value.fract() == 0.0 && value.is_finite() && value.abs() < 1e15 {
            Ok(RecordKey(format!("{}", value as i64)))
        } else {
            Ok(RecordKey(value.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::string("\"seller_1\"", "seller_1")]
    #[case::unsigned("42", "42")]
    #[case::negative("-3", "-3")]
    #[case::whole_float("7.0", "7")]
    #[case::fractional_float("1.5", "1.5")]
    fn test_record_key_deserialization(#[case] json: &str, #[case] expected: &str) {
        let key: RecordKey = serde_json::from_str(json).unwrap();
        assert_eq!(key.as_str(), expected);
    }

    #[test]
    fn test_numeric_and_string_keys_are_equal() {
        let numeric: RecordKey = serde_json::from_str("12").unwrap();
        let string: RecordKey = serde_json::from_str("\"12\"").unwrap();
        assert_eq!(numeric, string);
    }

    #[test]
    fn test_record_key_rejects_non_scalar() {
        let result: Result<RecordKey, _> = serde_json::from_str("[1]");
        assert!(result.is_err());
    }

    #[test]
    fn test_record_key_serializes_as_string() {
        let key = RecordKey::from(5u64);
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"5\"");
    }
}
