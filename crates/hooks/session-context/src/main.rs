//! SessionStart hook: inject stored memories as session context.
//!
//! Retrieves the user's memories from Ensue, categorizes them, and emits
//! a single context block. Failures are reported through the message
//! channel and the hook always exits 0, so the host is never blocked.

use anyhow::Result;
use hook_common::prelude::*;
use hook_memory::{MemoryConfig, RemoteGateway, session_context};
use std::time::Duration;

const HOOK_NAME: &str = "session-context";
const GATEWAY_TIMEOUT: Duration = Duration::from_secs(15);

fn main() -> Result<()> {
    let config = match MemoryConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            log_stage(HOOK_NAME, "config", &err.to_string(), "setup-hint");
            let message = format!(
                "Ensue Auto-Memory: {} environment variable is not set. \
                 Please set it to enable automatic memory. \
                 Get an API key at https://www.ensue-network.ai/dashboard",
                err.var_name()
            );
            HookOutput::system_message(message).write_stdout()?;
            return Ok(());
        }
    };

    let gateway = match RemoteGateway::new(&config.api_url, &config.api_key, GATEWAY_TIMEOUT) {
        Ok(gateway) => gateway,
        Err(err) => {
            log_stage(HOOK_NAME, "client", &err.to_string(), "error");
            let message = format!("Ensue Auto-Memory: Failed to retrieve memories: {err}");
            HookOutput::system_message(message).write_stdout()?;
            return Ok(());
        }
    };

    let message = session_context(&gateway, &config);
    log_stage(HOOK_NAME, "emit", &format!("{} chars", message.len()), "emitted");
    HookOutput::system_message(message).write_stdout()?;

    Ok(())
}
