//! Memory schema - wire shapes shared with the Ensue memory service.

use serde::{Deserialize, Serialize};

/// A stored key as returned by `list_keys`.
///
/// Key names are namespaced paths of the form
/// `@{username}/{category}/{...path}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryKey {
    /// Fully namespaced key name
    pub key_name: String,

    /// Last update time, seconds since the epoch (0 when unknown)
    #[serde(default)]
    pub updated_at: f64,
}

impl MemoryKey {
    pub fn new(key_name: impl Into<String>, updated_at: f64) -> Self {
        Self {
            key_name: key_name.into(),
            updated_at,
        }
    }
}

/// A stored value as delivered by the service.
///
/// Values arrive either as plain text or as a sequence of Unicode code
/// points; anything else is kept raw and rendered via its JSON form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MemoryValue {
    Text(String),
    CodePoints(Vec<u32>),
    Raw(serde_json::Value),
}

impl MemoryValue {
    /// Normalize the value to display text.
    ///
    /// Code points outside the Unicode scalar range (surrogate halves,
    /// values above U+10FFFF) decode to U+FFFD.
    pub fn decode(&self) -> String {
        match self {
            MemoryValue::Text(text) => text.clone(),
            MemoryValue::CodePoints(points) => points
                .iter()
                .map(|&p| char::from_u32(p).unwrap_or(char::REPLACEMENT_CHARACTER))
                .collect(),
            MemoryValue::Raw(value) => value.to_string(),
        }
    }
}

/// One per-key result of a `get_memory` bulk fetch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FetchedMemory {
    #[serde(default)]
    pub key_name: String,

    /// Whether this key's retrieval succeeded
    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub value: Option<MemoryValue>,

    #[serde(default)]
    pub description: Option<String>,
}

impl FetchedMemory {
    /// Decoded display text for the value, empty when absent.
    pub fn decoded_value(&self) -> String {
        self.value.as_ref().map(MemoryValue::decode).unwrap_or_default()
    }
}

/// One result of a `discover_memories` free-text query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryResult {
    #[serde(default)]
    pub key_name: String,

    /// Relevance score assigned by the service, nominally in [0, 1]
    #[serde(default)]
    pub score: f64,
}

/// Memory category, derived from a key's namespace prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Who the user is
    Identity,
    /// Standing user preferences
    Preferences,
    /// Past corrections the agent must not repeat
    Corrections,
    /// Per-project memory
    Project,
}

impl Category {
    /// All categories, in the order sections appear in formatted context.
    pub const ALL: [Category; 4] = [
        Category::Identity,
        Category::Preferences,
        Category::Corrections,
        Category::Project,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_code_points() {
        let value: MemoryValue = serde_json::from_str("[72,105]").unwrap();
        assert_eq!(value.decode(), "Hi");
    }

    #[test]
    fn test_decode_text_passthrough() {
        let value: MemoryValue = serde_json::from_str(r#""plain""#).unwrap();
        assert_eq!(value.decode(), "plain");
    }

    #[test]
    fn test_decode_surrogate_half_replaced() {
        // U+D800 is not a Unicode scalar value
        let value = MemoryValue::CodePoints(vec![0x48, 0xD800, 0x69]);
        assert_eq!(value.decode(), "H\u{FFFD}i");
    }

    #[test]
    fn test_decode_raw_json_coerced() {
        let value: MemoryValue = serde_json::from_str("42.5").unwrap();
        assert_eq!(value.decode(), "42.5");
    }

    #[test]
    fn test_fetched_memory_defaults() {
        let fetched: FetchedMemory =
            serde_json::from_str(r#"{"key_name":"@u/preferences/editor"}"#).unwrap();
        assert!(!fetched.success);
        assert_eq!(fetched.decoded_value(), "");
    }

    #[test]
    fn test_memory_key_missing_timestamp() {
        let key: MemoryKey = serde_json::from_str(r#"{"key_name":"@u/identity/name"}"#).unwrap();
        assert_eq!(key.updated_at, 0.0);
    }

    #[test]
    fn test_discovery_result_shape() {
        let result: DiscoveryResult =
            serde_json::from_str(r#"{"key_name":"@u/preferences/style","score":0.83}"#).unwrap();
        assert_eq!(result.score, 0.83);
    }
}
