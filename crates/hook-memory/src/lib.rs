//! Memory retrieval core for Claude Code hooks.
//!
//! Provides:
//! - Memory key/value schema and value decoding
//! - Per-invocation configuration
//! - Key catalog filtering and relevance filtering
//! - Pattern detection for save-worthy statements
//! - Context formatting
//! - The remote memory gateway and the two hook pipelines

pub mod catalog;
pub mod config;
pub mod format;
pub mod gateway;
pub mod patterns;
pub mod pipeline;
pub mod relevance;
pub mod schema;

pub use catalog::filter_by_prefix;
pub use config::{ConfigError, MemoryConfig};
pub use format::{MemoryEntry, MemorySections, format_context};
pub use gateway::{GatewayError, MemoryService, RemoteGateway};
pub use patterns::{PatternClassification, RuleSet};
pub use pipeline::{prompt_messages, session_context};
pub use relevance::filter_relevant;
pub use schema::{Category, DiscoveryResult, FetchedMemory, MemoryKey, MemoryValue};
