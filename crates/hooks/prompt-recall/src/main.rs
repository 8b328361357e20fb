//! UserPromptSubmit hook: surface memories relevant to the utterance.
//!
//! Flags save-worthy statements (preferences, corrections, identity) and
//! queries Ensue for memories related to the prompt. Entirely best-effort:
//! on malformed input or missing credentials it exits silently and never
//! blocks the host.

use anyhow::Result;
use hook_common::prelude::*;
use hook_memory::{MemoryConfig, RemoteGateway, prompt_messages};
use std::time::Duration;

const HOOK_NAME: &str = "prompt-recall";
const GATEWAY_TIMEOUT: Duration = Duration::from_secs(10);

fn main() -> Result<()> {
    let input = match HookInput::from_stdin() {
        Ok(input) => input,
        Err(_) => {
            // Malformed stdin: nothing to do
            HookOutput::silent();
            return Ok(());
        }
    };

    let Some(prompt) = input.prompt() else {
        HookOutput::silent();
        return Ok(());
    };

    // Not configured: this hook is optional, pass silently
    let Ok(config) = MemoryConfig::from_env() else {
        log_stage(HOOK_NAME, "config", "credentials not configured", "silent");
        HookOutput::silent();
        return Ok(());
    };

    let Ok(gateway) = RemoteGateway::new(&config.api_url, &config.api_key, GATEWAY_TIMEOUT) else {
        HookOutput::silent();
        return Ok(());
    };

    match prompt_messages(&gateway, &config, prompt) {
        Some(message) => {
            log_stage(HOOK_NAME, "emit", &format!("{} chars", message.len()), "emitted");
            HookOutput::system_message(message).write_stdout()?;
        }
        None => {
            log_stage(HOOK_NAME, "emit", "no messages", "silent");
            HookOutput::silent();
        }
    }

    Ok(())
}
