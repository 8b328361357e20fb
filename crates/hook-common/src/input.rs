//! Hook input parsing from stdin.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::{self, Read};

/// Main hook input structure received from Claude Code.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HookInput {
    /// Hook event name (e.g., "SessionStart", "UserPromptSubmit")
    #[serde(default)]
    pub hook_event_name: Option<String>,

    /// User prompt (for UserPromptSubmit hooks)
    #[serde(default)]
    pub user_prompt: Option<String>,

    /// Session ID
    #[serde(default)]
    pub session_id: Option<String>,

    /// Working directory the session runs in
    #[serde(default)]
    pub cwd: Option<String>,

    /// Additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl HookInput {
    /// Read and parse hook input from stdin.
    pub fn from_stdin() -> anyhow::Result<Self> {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        let parsed: HookInput = serde_json::from_str(&input)?;
        Ok(parsed)
    }

    /// Get the user prompt, treating an empty string as absent.
    pub fn prompt(&self) -> Option<&str> {
        match self.user_prompt.as_deref() {
            Some("") | None => None,
            Some(p) => Some(p),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_prompt() {
        let json = r#"{"hook_event_name": "UserPromptSubmit", "user_prompt": "Hello"}"#;
        let input: HookInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.hook_event_name, Some("UserPromptSubmit".to_string()));
        assert_eq!(input.prompt(), Some("Hello"));
    }

    #[test]
    fn test_empty_prompt_is_absent() {
        let json = r#"{"user_prompt": ""}"#;
        let input: HookInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.prompt(), None);
    }

    #[test]
    fn test_unknown_fields_are_kept() {
        let json = r#"{"user_prompt": "hi", "transcript_path": "/tmp/t.jsonl"}"#;
        let input: HookInput = serde_json::from_str(json).unwrap();
        assert!(input.extra.contains_key("transcript_path"));
    }

    #[test]
    fn test_malformed_input_is_an_error() {
        assert!(serde_json::from_str::<HookInput>("not json").is_err());
    }
}
