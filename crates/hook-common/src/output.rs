//! Hook output generation for stdout.

use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// Main hook output structure.
///
/// Hooks communicate with the host exclusively through this envelope;
/// failures are reported as message content, never as a non-zero exit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookOutput {
    /// Message injected into the session context
    pub system_message: String,
}

impl HookOutput {
    /// Create a new hook output carrying a system message.
    pub fn system_message(message: impl Into<String>) -> Self {
        Self {
            system_message: message.into(),
        }
    }

    /// Write the output to stdout.
    pub fn write_stdout(&self) -> anyhow::Result<()> {
        let json = serde_json::to_string(self)?;
        io::stdout().write_all(json.as_bytes())?;
        io::stdout().flush()?;
        Ok(())
    }

    /// Write nothing to stdout (silent pass).
    pub fn silent() {
        // Do nothing - hook passes silently
    }
}
