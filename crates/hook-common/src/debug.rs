//! Debug logging for hooks.
//!
//! Logs hook pipeline outcomes to a JSONL file for debugging memory
//! retrieval issues without polluting the stdout protocol.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Debug log entry for one hook execution stage
#[derive(Debug, Serialize)]
pub struct HookDebugLog {
    /// Timestamp
    pub timestamp: DateTime<Utc>,
    /// Hook name (e.g., "prompt-recall")
    pub hook_name: String,
    /// Pipeline stage (e.g., "discover", "emit")
    pub stage: String,
    /// Stage detail (truncated for large payloads)
    pub detail: String,
    /// Outcome (emitted/silent/error)
    pub outcome: String,
}

impl HookDebugLog {
    pub fn new(hook_name: &str, stage: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            hook_name: hook_name.to_string(),
            stage: stage.to_string(),
            detail: String::new(),
            outcome: String::new(),
        }
    }

    pub fn with_detail(mut self, detail: &str) -> Self {
        // Truncate to 200 chars to avoid huge logs
        self.detail = if detail.len() > 200 {
            let cut = detail
                .char_indices()
                .take_while(|(i, _)| *i <= 200)
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            format!("{}...", &detail[..cut])
        } else {
            detail.to_string()
        };
        self
    }

    pub fn with_outcome(mut self, outcome: &str) -> Self {
        self.outcome = outcome.to_string();
        self
    }

    /// Write log entry to the default log file, if debug mode is enabled.
    pub fn write(&self) -> std::io::Result<()> {
        if !is_debug_enabled() {
            return Ok(());
        }
        self.write_to(&debug_log_path())
    }

    /// Append the entry to the given JSONL file.
    pub fn write_to(&self, log_path: &Path) -> std::io::Result<()> {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        let json = serde_json::to_string(self).unwrap_or_default();
        writeln!(file, "{}", json)?;

        Ok(())
    }
}

/// Check if debug mode is enabled
pub fn is_debug_enabled() -> bool {
    // Enable via environment variable
    if std::env::var("CLAUDE_HOOK_DEBUG").is_ok() {
        return true;
    }

    // Or check for debug marker file
    let project_dir = std::env::var("CLAUDE_PROJECT_DIR").unwrap_or_else(|_| ".".to_string());
    let marker = PathBuf::from(&project_dir)
        .join(".claude")
        .join(".hook-debug");
    marker.exists()
}

/// Get debug log file path
pub fn debug_log_path() -> PathBuf {
    let project_dir = std::env::var("CLAUDE_PROJECT_DIR").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(&project_dir)
        .join(".claude")
        .join("logs")
        .join("memory-hooks.jsonl")
}

/// Quick helper to log a stage outcome.
pub fn log_stage(hook_name: &str, stage: &str, detail: &str, outcome: &str) {
    let log = HookDebugLog::new(hook_name, stage)
        .with_detail(detail)
        .with_outcome(outcome);

    let _ = log.write();
}
