//! Common utilities for Claude Code memory hooks.
//!
//! This crate provides the hook wire protocol shared by all hook binaries:
//! - JSON input parsing from stdin
//! - `systemMessage` output on stdout
//! - Opt-in debug logging

pub mod debug;
pub mod input;
pub mod output;

pub use debug::{HookDebugLog, is_debug_enabled, log_stage};
pub use input::HookInput;
pub use output::HookOutput;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::debug::{HookDebugLog, is_debug_enabled, log_stage};
    pub use crate::input::HookInput;
    pub use crate::output::HookOutput;
    pub use anyhow::{Context, Result};
    pub use serde::{Deserialize, Serialize};
}
