//! Keyword matcher. Tests each catalog keyword against the extracted resume text.
//!
//! The default policy is plain case-insensitive substring containment, so short
//! keywords can match inside longer words ("R" inside "regulatory"). The
//! word-boundary policy rejects matches whose neighbouring characters are
//! alphanumeric, while still matching compound terms like "Node.js" or "CI/CD".

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    #[default]
    Substring,
    WordBoundary,
}

impl std::str::FromStr for MatchPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "substring" => Ok(MatchPolicy::Substring),
            "word_boundary" | "word-boundary" => Ok(MatchPolicy::WordBoundary),
            other => Err(format!(
                "unknown keyword match policy '{other}' (expected 'substring' or 'word_boundary')"
            )),
        }
    }
}

/// Found and missing keywords, both in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordMatch {
    pub found: Vec<String>,
    pub missing: Vec<String>,
}

impl KeywordMatch {
    pub fn total(&self) -> usize {
        self.found.len() + self.missing.len()
    }

    /// `found / total`, or 0.0 when the catalog is empty.
    pub fn coverage(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.found.len() as f64 / total as f64
        }
    }
}

/// Splits `keywords` into found/missing against already-lowercased `text`.
pub fn match_keywords(text: &str, keywords: &[&str], policy: MatchPolicy) -> KeywordMatch {
    let mut found = Vec::new();
    let mut missing = Vec::new();

    for keyword in keywords {
        let keyword_lower = keyword.to_lowercase();
        let hit = match policy {
            MatchPolicy::Substring => text.contains(&keyword_lower),
            MatchPolicy::WordBoundary => contains_word(text, &keyword_lower),
        };

        if hit {
            found.push(keyword.to_string());
        } else {
            missing.push(keyword.to_string());
        }
    }

    KeywordMatch { found, missing }
}

fn contains_word(text: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    text.match_indices(needle).any(|(start, _)| {
        let before = text[..start].chars().next_back();
        let after = text[start + needle.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}
