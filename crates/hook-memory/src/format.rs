//! Context block formatting.

use crate::schema::Category;

/// One memory rendered into the context block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryEntry {
    /// Key with its namespace prefix stripped
    pub short_key: String,
    /// Decoded value text
    pub value: String,
}

impl MemoryEntry {
    pub fn new(short_key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            short_key: short_key.into(),
            value: value.into(),
        }
    }
}

/// Categorized memories awaiting formatting.
///
/// Sections always render in the fixed order of [`Category::ALL`],
/// regardless of insertion order.
#[derive(Debug, Default)]
pub struct MemorySections {
    identity: Vec<MemoryEntry>,
    preferences: Vec<MemoryEntry>,
    corrections: Vec<MemoryEntry>,
    project: Vec<MemoryEntry>,
}

impl MemorySections {
    pub fn push(&mut self, category: Category, entry: MemoryEntry) {
        match category {
            Category::Identity => self.identity.push(entry),
            Category::Preferences => self.preferences.push(entry),
            Category::Corrections => self.corrections.push(entry),
            Category::Project => self.project.push(entry),
        }
    }

    pub fn entries(&self, category: Category) -> &[MemoryEntry] {
        match category {
            Category::Identity => &self.identity,
            Category::Preferences => &self.preferences,
            Category::Corrections => &self.corrections,
            Category::Project => &self.project,
        }
    }

    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|c| self.entries(*c).is_empty())
    }
}

/// Assemble the session context block.
///
/// A header identifies the user and project; each non-empty category
/// follows as a labeled section, one line per memory. Empty categories are
/// omitted entirely.
pub fn format_context(username: &str, project_name: &str, sections: &MemorySections) -> String {
    let mut parts: Vec<String> = vec![
        format!("## Ensue Auto-Memory Context for @{username}"),
        format!("Project: {project_name}"),
        String::new(),
    ];

    for category in Category::ALL {
        let entries = sections.entries(category);
        if entries.is_empty() {
            continue;
        }
        parts.push(section_label(category, project_name));
        parts.extend(
            entries
                .iter()
                .map(|e| format!("- {}: {}", e.short_key, e.value)),
        );
        parts.push(String::new());
    }

    parts.join("\n")
}

fn section_label(category: Category, project_name: &str) -> String {
    match category {
        Category::Identity => "### Identity".to_string(),
        Category::Preferences => "### Preferences".to_string(),
        Category::Corrections => "### Corrections (DO NOT repeat these mistakes)".to_string(),
        Category::Project => format!("### Project Context ({project_name})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_categories_are_omitted() {
        let mut sections = MemorySections::default();
        sections.push(Category::Preferences, MemoryEntry::new("editor", "vim"));

        let block = format_context("alice", "webapp", &sections);
        assert!(block.contains("### Preferences"));
        assert!(block.contains("- editor: vim"));
        assert!(!block.contains("### Identity"));
        assert!(!block.contains("### Corrections"));
        assert!(!block.contains("### Project Context"));
    }

    #[test]
    fn test_fixed_section_order() {
        let mut sections = MemorySections::default();
        // Insert in reverse of the rendered order
        sections.push(Category::Project, MemoryEntry::new("build", "cargo build"));
        sections.push(Category::Corrections, MemoryEntry::new("tests", "no mocking"));
        sections.push(Category::Identity, MemoryEntry::new("name", "Alex"));

        let block = format_context("alice", "webapp", &sections);
        let identity = block.find("### Identity").unwrap();
        let corrections = block.find("### Corrections").unwrap();
        let project = block.find("### Project Context (webapp)").unwrap();
        assert!(identity < corrections);
        assert!(corrections < project);
    }

    #[test]
    fn test_header_names_user_and_project() {
        let sections = MemorySections::default();
        let block = format_context("bob", "cli-tool", &sections);
        assert!(block.starts_with("## Ensue Auto-Memory Context for @bob\nProject: cli-tool\n"));
    }

    #[test]
    fn test_corrections_label_admonition() {
        let mut sections = MemorySections::default();
        sections.push(Category::Corrections, MemoryEntry::new("sql", "no raw SQL"));
        let block = format_context("alice", "webapp", &sections);
        assert!(block.contains("### Corrections (DO NOT repeat these mistakes)"));
    }

    #[test]
    fn test_is_empty() {
        let mut sections = MemorySections::default();
        assert!(sections.is_empty());
        sections.push(Category::Identity, MemoryEntry::new("name", "Alex"));
        assert!(!sections.is_empty());
    }
}
