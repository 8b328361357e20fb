//! The two hook pipelines.
//!
//! Both are strictly sequential: each step consumes the previous step's
//! output, gateway calls block with the client's timeout, and every failure
//! is absorbed into either an informational message (session start) or a
//! silently omitted contribution (prompt).

use crate::catalog::filter_by_prefix;
use crate::config::MemoryConfig;
use crate::format::{MemoryEntry, MemorySections, format_context};
use crate::gateway::MemoryService;
use crate::patterns::RuleSet;
use crate::relevance::filter_relevant;
use crate::schema::Category;

/// Page size for the session key listing.
pub const LIST_PAGE_SIZE: usize = 200;

/// Hard cap on keys fetched per prompt, independent of the discovery limit.
pub const RELEVANT_FETCH_LIMIT: usize = 5;

/// Utterances at or below this length never trigger a discovery call.
/// Filters out greetings and one-word prompts before spending a network
/// round-trip.
pub const MIN_DISCOVERY_CHARS: usize = 20;

/// Session-start pipeline: list, filter per category, bulk-fetch, format.
///
/// Always produces a message: the formatted context block on success, an
/// informational notice when the store is empty or a gateway call fails.
pub fn session_context(service: &dyn MemoryService, config: &MemoryConfig) -> String {
    let keys = match service.list_keys(LIST_PAGE_SIZE) {
        Ok(keys) => keys,
        Err(err) => {
            return format!("Ensue Auto-Memory: Failed to retrieve memories: {err}");
        }
    };

    let mut selected: Vec<String> = Vec::new();
    for category in Category::ALL {
        let matched = filter_by_prefix(
            &keys,
            &config.prefix_for(category),
            config.limit_for(category),
        );
        selected.extend(matched.into_iter().map(|key| key.key_name));
    }

    if selected.is_empty() {
        return format!(
            "Ensue Auto-Memory: No memories found for @{}. \
             Memories will be automatically saved as you work.",
            config.username
        );
    }

    let fetched = match service.get_memory(&selected) {
        Ok(fetched) => fetched,
        Err(err) => {
            return format!("Ensue Auto-Memory: Failed to retrieve memory values: {err}");
        }
    };

    let mut sections = MemorySections::default();
    for item in fetched {
        if !item.success {
            continue;
        }
        // Keys outside every known namespace are dropped silently.
        let Some((category, short_key)) = config.classify_key(&item.key_name) else {
            continue;
        };
        let value = item.decoded_value();
        sections.push(category, MemoryEntry::new(short_key, value));
    }

    format_context(&config.username, &config.project_name, &sections)
}

/// Prompt pipeline: save suggestions plus relevant-memory recall.
///
/// Returns `None` when there is nothing to say; callers emit no output in
/// that case.
pub fn prompt_messages(
    service: &dyn MemoryService,
    config: &MemoryConfig,
    prompt: &str,
) -> Option<String> {
    let mut messages: Vec<String> = Vec::new();

    let classification = RuleSet::builtin().detect(prompt);
    if classification.has_preference {
        messages.push(format!(
            "Detected preference statement. Consider saving to Ensue: @{}/preferences/...",
            config.username
        ));
    }
    if classification.has_correction {
        messages.push(format!(
            "Detected correction. Consider saving to Ensue: @{}/corrections/...",
            config.username
        ));
    }
    if classification.has_identity {
        messages.push(format!(
            "Detected identity information. Consider saving to Ensue: @{}/identity/...",
            config.username
        ));
    }

    if prompt.chars().count() > MIN_DISCOVERY_CHARS {
        if let Some(block) = relevant_memories(service, config, prompt) {
            messages.push(block);
        }
    }

    if messages.is_empty() {
        None
    } else {
        Some(messages.join("\n\n"))
    }
}

/// Discovery leg of the prompt pipeline.
///
/// Best-effort: a gateway failure here drops the recall contribution
/// without affecting the save suggestions.
fn relevant_memories(
    service: &dyn MemoryService,
    config: &MemoryConfig,
    prompt: &str,
) -> Option<String> {
    let results = service
        .discover_memories(prompt, config.discover_limit)
        .ok()?;

    let user_prefix = config.user_prefix();
    let relevant = filter_relevant(
        &results,
        &user_prefix,
        config.relevancy_threshold,
        RELEVANT_FETCH_LIMIT,
    );
    if relevant.is_empty() {
        return None;
    }

    let fetched = service.get_memory(&relevant).ok()?;
    let lines: Vec<String> = fetched
        .iter()
        .filter(|item| item.success)
        .map(|item| {
            let short_key = item
                .key_name
                .strip_prefix(&user_prefix)
                .unwrap_or(&item.key_name);
            format!("- {}: {}", short_key, item.decoded_value())
        })
        .collect();

    if lines.is_empty() {
        return None;
    }

    Some(format!(
        "Relevant memories from Ensue:\n{}",
        lines.join("\n")
    ))
}
