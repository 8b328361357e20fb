//! CLI behavior of the SessionStart hook.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("session-context").unwrap();
    cmd.env_remove("ENSUE_API_KEY")
        .env_remove("ENSUE_USERNAME")
        .env_remove("CLAUDE_HOOK_DEBUG");
    cmd
}

#[test]
fn missing_api_key_emits_setup_hint() {
    cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("systemMessage"))
        .stdout(predicate::str::contains("ENSUE_API_KEY"));
}

#[test]
fn missing_username_emits_setup_hint() {
    cmd()
        .env("ENSUE_API_KEY", "sk-test")
        .assert()
        .success()
        .stdout(predicate::str::contains("ENSUE_USERNAME"));
}

#[test]
fn setup_hint_points_at_dashboard() {
    cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("ensue-network.ai/dashboard"));
}
