//! Per-invocation configuration.
//!
//! Hooks are short-lived processes; configuration is read from the
//! environment exactly once, frozen into a [`MemoryConfig`], and passed
//! explicitly to every component.

use crate::schema::Category;
use camino::Utf8Path;
use std::str::FromStr;
use thiserror::Error;

/// Default Ensue API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.ensue-network.ai/";

const DEFAULT_RELEVANCY_THRESHOLD: f64 = 0.7;
const DEFAULT_DISCOVER_LIMIT: usize = 10;
const DEFAULT_PREFERENCES_LIMIT: usize = 10;
const DEFAULT_CORRECTIONS_LIMIT: usize = 5;
const DEFAULT_PROJECT_LIMIT: usize = 5;

/// Configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} environment variable is not set")]
    MissingVar(&'static str),
}

impl ConfigError {
    /// Name of the missing environment variable.
    pub fn var_name(&self) -> &'static str {
        match self {
            ConfigError::MissingVar(name) => name,
        }
    }
}

/// Immutable configuration for one hook invocation.
#[derive(Debug, Clone)]
pub struct MemoryConfig {
    /// Bearer token for the Ensue API
    pub api_key: String,
    /// Namespace owner; keys live under `@{username}/`
    pub username: String,
    /// API endpoint
    pub api_url: String,
    /// Minimum discovery score for a memory to surface
    pub relevancy_threshold: f64,
    /// Result cap passed to `discover_memories`
    pub discover_limit: usize,
    /// Session retrieval limit for preferences
    pub preferences_limit: usize,
    /// Session retrieval limit for corrections
    pub corrections_limit: usize,
    /// Session retrieval limit for project memories
    pub project_limit: usize,
    /// Final path segment of the project directory
    pub project_name: String,
}

impl MemoryConfig {
    /// Build configuration from the process environment.
    ///
    /// `ENSUE_API_KEY` and `ENSUE_USERNAME` are required; everything else
    /// falls back to a default. An unparseable numeric override is treated
    /// like an absent one.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let api_key = require(&lookup, "ENSUE_API_KEY")?;
        let username = require(&lookup, "ENSUE_USERNAME")?;

        let project_dir = lookup("CLAUDE_PROJECT_DIR").unwrap_or_else(|| {
            std::env::current_dir()
                .map(|d| d.to_string_lossy().into_owned())
                .unwrap_or_else(|_| ".".to_string())
        });

        Ok(Self {
            api_key,
            username,
            api_url: lookup("ENSUE_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            relevancy_threshold: parse_or(
                lookup("ENSUE_RELEVANCY_THRESHOLD"),
                DEFAULT_RELEVANCY_THRESHOLD,
            ),
            discover_limit: parse_or(lookup("ENSUE_DISCOVER_LIMIT"), DEFAULT_DISCOVER_LIMIT),
            preferences_limit: parse_or(
                lookup("ENSUE_PREFERENCES_LIMIT"),
                DEFAULT_PREFERENCES_LIMIT,
            ),
            corrections_limit: parse_or(
                lookup("ENSUE_CORRECTIONS_LIMIT"),
                DEFAULT_CORRECTIONS_LIMIT,
            ),
            project_limit: parse_or(lookup("ENSUE_PROJECT_LIMIT"), DEFAULT_PROJECT_LIMIT),
            project_name: project_name_from(&project_dir),
        })
    }

    /// The current user's namespace prefix, e.g. `@alice/`.
    pub fn user_prefix(&self) -> String {
        format!("@{}/", self.username)
    }

    /// Key prefix for a category.
    pub fn prefix_for(&self, category: Category) -> String {
        let user = self.user_prefix();
        match category {
            Category::Identity => format!("{user}identity/"),
            Category::Preferences => format!("{user}preferences/"),
            Category::Corrections => format!("{user}corrections/"),
            Category::Project => format!("{user}projects/{}/", self.project_name),
        }
    }

    /// Session retrieval limit for a category (identity is unlimited).
    pub fn limit_for(&self, category: Category) -> Option<usize> {
        match category {
            Category::Identity => None,
            Category::Preferences => Some(self.preferences_limit),
            Category::Corrections => Some(self.corrections_limit),
            Category::Project => Some(self.project_limit),
        }
    }

    /// Classify a key by its namespace prefix.
    ///
    /// Returns the category and the key with its prefix stripped. Prefixes
    /// are tried in the fixed category order, so a store that ever violated
    /// prefix disjointness would still classify deterministically. Keys
    /// outside every category yield `None`.
    pub fn classify_key(&self, key_name: &str) -> Option<(Category, String)> {
        for category in Category::ALL {
            if let Some(short_key) = key_name.strip_prefix(&self.prefix_for(category)) {
                return Some((category, short_key.to_string()));
            }
        }
        None
    }
}

fn require(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<String, ConfigError> {
    match lookup(name) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}

fn parse_or<T: FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|value| value.parse().ok()).unwrap_or(default)
}

fn project_name_from(dir: &str) -> String {
    Utf8Path::new(dir)
        .file_name()
        .unwrap_or_default()
        .to_string()
}
