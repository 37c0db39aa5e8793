//! Input parsing and validation for interactive prompts and file checks.

use std::collections::HashSet;

use serde_json::Value;

use justone_engine::cards::WORDS_PER_CARD;
use justone_engine::player::is_single_token;

/// Yes/no parsing for the replay prompt; anything unrecognized is a no.
pub fn parse_yes(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}

/// A problem found in a word-list file, tied to the card it came from.
#[derive(Debug, PartialEq)]
pub struct CardIssue {
    /// 0-based card index in the file
    pub card: usize,
    pub message: String,
}

impl std::fmt::Display for CardIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "card {}: {}", self.card, self.message)
    }
}

/// Checks a parsed word-list document card by card, collecting every
/// problem instead of stopping at the first. Structural failures (not an
/// array, no cards at all) come back as `Err` since nothing per-card can
/// be reported.
pub fn check_word_list(doc: &Value) -> Result<Vec<CardIssue>, String> {
    let Some(cards) = doc.as_array() else {
        return Err("word list must be a JSON array of cards".to_string());
    };
    if cards.is_empty() {
        return Err("word list contains no cards".to_string());
    }

    let mut issues = Vec::new();
    for (i, entry) in cards.iter().enumerate() {
        let Some(words) = entry.get("words").and_then(Value::as_array) else {
            issues.push(CardIssue {
                card: i,
                message: "missing a \"words\" array".to_string(),
            });
            continue;
        };
        if words.len() != WORDS_PER_CARD {
            issues.push(CardIssue {
                card: i,
                message: format!("has {} words, expected {}", words.len(), WORDS_PER_CARD),
            });
        }

        let mut texts = Vec::new();
        for w in words {
            match w.as_str() {
                Some(s) => texts.push(s),
                None => issues.push(CardIssue {
                    card: i,
                    message: format!("{} is not a string", w),
                }),
            }
        }
        for t in &texts {
            if !is_single_token(t) {
                issues.push(CardIssue {
                    card: i,
                    message: format!("\"{}\" is empty or more than one word", t),
                });
            }
        }
        let mut seen = HashSet::new();
        for t in &texts {
            if !seen.insert(t.trim().to_lowercase()) {
                issues.push(CardIssue {
                    card: i,
                    message: format!("\"{}\" appears more than once", t),
                });
            }
        }
    }
    Ok(issues)
}
