//! Heuristic detection of save-worthy statements.
//!
//! A small rule engine over the raw utterance: each save category owns an
//! ordered list of case-insensitive patterns, the first hit in a list sets
//! that category's flag, and the lists are evaluated independently. This is
//! a cheap offline filter that produces save *suggestions*, not ground
//! truth; false positives are acceptable.

use regex::Regex;

/// Save-path category a rule list suggests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveCategory {
    Preference,
    Correction,
    Identity,
}

/// Non-exclusive classification of one utterance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatternClassification {
    pub has_preference: bool,
    pub has_correction: bool,
    pub has_identity: bool,
}

/// Ordered pattern lists, one per save category.
#[derive(Debug)]
pub struct RuleSet {
    rules: Vec<(SaveCategory, Vec<Regex>)>,
}

impl RuleSet {
    /// The built-in rule tables.
    pub fn builtin() -> Self {
        let preference = [
            r"\bi\s+(?:always|usually|prefer|like|want|need)\b",
            r"\b(?:don't|do not|never|stop)\s+(?:use|add|include|do)\b",
            r"\bmy\s+(?:preferred|favorite|default)\b",
            r"\b(?:please\s+)?(?:always|never)\b",
        ];
        let correction = [
            r"\bno,?\s+(?:don't|do not|stop|actually)\b",
            r"\bthat's\s+(?:not|wrong)\b",
            r"\bi\s+(?:said|meant|wanted)\b",
            r"\b(?:instead|rather)\b.*\bnot\b",
        ];
        let identity = [
            r"\bmy\s+name\s+is\b",
            r"\bi\s+(?:am|work|live)\b",
            r"\bi'm\s+(?:a|an|the)\s+\w+\b",
        ];

        Self {
            rules: vec![
                (SaveCategory::Preference, compile(&preference)),
                (SaveCategory::Correction, compile(&correction)),
                (SaveCategory::Identity, compile(&identity)),
            ],
        }
    }

    /// Classify an utterance.
    ///
    /// The input is lower-cased once; within each category the first
    /// matching pattern wins and the rest are skipped.
    pub fn detect(&self, text: &str) -> PatternClassification {
        let lowered = text.to_lowercase();
        let mut classification = PatternClassification::default();

        for (category, patterns) in &self.rules {
            if !patterns.iter().any(|p| p.is_match(&lowered)) {
                continue;
            }
            match category {
                SaveCategory::Preference => classification.has_preference = true,
                SaveCategory::Correction => classification.has_correction = true,
                SaveCategory::Identity => classification.has_identity = true,
            }
        }

        classification
    }
}

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().map(|p| Regex::new(p).unwrap()).collect()
}
