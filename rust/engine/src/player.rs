use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// Index into the session roster. The active player is a derived index on
/// the session, not per-player state.
pub type PlayerId = usize;

/// Lower-cases and trims a word the way every comparison in the game does:
/// clue against clue, clue against secret, guess against secret.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// True when the input is one non-empty token with no internal whitespace.
/// This is the input contract for clues and word selections; violations are
/// re-prompted at the boundary and never reach the validator.
pub fn is_single_token(text: &str) -> bool {
    let trimmed = text.trim();
    !trimmed.is_empty() && !trimmed.contains(char::is_whitespace)
}

/// One submitted clue: who gave it and the spelling they typed (trimmed).
/// The text is guaranteed single-token; comparisons use [`normalize`],
/// records keep the submitted spelling.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Clue {
    pub player: String,
    pub text: String,
}

impl Clue {
    /// Builds a clue, rejecting empty or multi-word text. Callers re-prompt
    /// on rejection instead of giving up.
    pub fn new(player: impl Into<String>, text: impl Into<String>) -> Result<Self, GameError> {
        let text = text.into();
        if !is_single_token(&text) {
            return Err(GameError::NotSingleToken);
        }
        Ok(Self {
            player: player.into(),
            text: text.trim().to_string(),
        })
    }

    /// The comparison form of the clue text.
    pub fn normalized(&self) -> String {
        normalize(&self.text)
    }
}
