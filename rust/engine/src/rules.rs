//! Clue validation, the one nontrivial rule of the game.
//!
//! After every non-active player has submitted a clue, three checks run
//! against the normalized (trimmed, lower-cased) texts:
//!
//! 1. a clue equal to the secret word is void;
//! 2. a text submitted by two or more players is void for everyone, not
//!    just the extras;
//! 3. a text containing a configured forbidden root is void.
//!
//! Survivors keep their submission order. A clue can fail several checks at
//! once; it is excluded exactly once and reported with a single reason.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::player::{normalize, Clue};

/// The same-family heuristic: a clue whose normalized text contains any of
/// these roots as a substring is void. The roots are game content, injected
/// per session rather than baked into the engine.
#[derive(Debug, Clone, Default)]
pub struct FamilyFilter {
    roots: Vec<String>,
}

impl FamilyFilter {
    /// Builds a filter from forbidden roots. Roots are normalized; blank
    /// entries are dropped (an empty root would match every clue).
    pub fn new(roots: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            roots: roots
                .into_iter()
                .map(|r| normalize(&r.into()))
                .filter(|r| !r.is_empty())
                .collect(),
        }
    }

    pub fn matches(&self, normalized_text: &str) -> bool {
        self.roots.iter().any(|root| normalized_text.contains(root.as_str()))
    }
}

/// Why a clue was voided.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    /// The clue is the secret word itself.
    MatchesSecret,
    /// Two or more players submitted the same text; every copy is void.
    Duplicate,
    /// The clue contains a forbidden family root.
    SameFamily,
}

impl Rejection {
    pub fn describe(&self) -> &'static str {
        match self {
            Rejection::MatchesSecret => "it is the secret word",
            Rejection::Duplicate => "two players gave it",
            Rejection::SameFamily => "it shares a root with a forbidden word",
        }
    }
}

/// A voided normalized text and the reason that condemned it.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RejectedClue {
    pub text: String,
    pub reason: Rejection,
}

/// Outcome of validating one round's clues.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ClueReport {
    /// Surviving clues, in submission order.
    pub valid: Vec<Clue>,
    /// Voided texts, deduplicated, in first-submission order.
    pub rejected: Vec<RejectedClue>,
}

impl ClueReport {
    /// An empty valid set aborts the round before any guess happens.
    pub fn all_rejected(&self) -> bool {
        self.valid.is_empty()
    }
}

/// Classifies every submitted clue against the secret word.
///
/// Invalidity and duplication are independent, non-exclusive checks: a clue
/// matching the secret that was also submitted twice is still excluded
/// exactly once, reported with the secret-match reason (secret-match takes
/// precedence over duplicate over same-family).
pub fn validate_clues(secret: &str, clues: &[Clue], family: &FamilyFilter) -> ClueReport {
    let secret = normalize(secret);

    let mut counts: HashMap<String, usize> = HashMap::new();
    for clue in clues {
        *counts.entry(clue.normalized()).or_insert(0) += 1;
    }

    let mut valid = Vec::new();
    let mut rejected: Vec<RejectedClue> = Vec::new();
    for clue in clues {
        let text = clue.normalized();
        let reason = if text == secret {
            Some(Rejection::MatchesSecret)
        } else if counts[&text] > 1 {
            Some(Rejection::Duplicate)
        } else if family.matches(&text) {
            Some(Rejection::SameFamily)
        } else {
            None
        };
        match reason {
            None => valid.push(clue.clone()),
            Some(reason) => {
                if !rejected.iter().any(|r| r.text == text) {
                    rejected.push(RejectedClue { text, reason });
                }
            }
        }
    }

    ClueReport { valid, rejected }
}
