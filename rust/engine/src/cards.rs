use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::player::normalize;

/// Number of candidate words printed on every card.
pub const WORDS_PER_CARD: usize = 5;

/// A word card: five candidate words, one of which the active player picks
/// as the secret of a round. Cards are immutable once drawn and move to the
/// discard pile when their round resolves.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// The candidate words, in printed order
    pub words: Vec<String>,
}

impl Card {
    /// Builds a card, enforcing the five-distinct-single-token-words shape.
    pub fn new(words: Vec<String>) -> Result<Self, GameError> {
        let card = Card { words };
        card.check(0)?;
        Ok(card)
    }

    /// The candidate at a 1-based position, the way the card is presented
    /// to the active player.
    pub fn word_at(&self, choice: usize) -> Result<&str, GameError> {
        if choice == 0 || choice > self.words.len() {
            return Err(GameError::InvalidSelection {
                choice,
                max: self.words.len(),
            });
        }
        Ok(&self.words[choice - 1])
    }

    fn check(&self, index: usize) -> Result<(), GameError> {
        if self.words.len() != WORDS_PER_CARD {
            return Err(GameError::MalformedCard {
                index,
                count: self.words.len(),
            });
        }
        if self
            .words
            .iter()
            .any(|w| w.trim().is_empty() || w.trim().contains(char::is_whitespace))
        {
            return Err(GameError::InvalidWord { index });
        }
        for (i, word) in self.words.iter().enumerate() {
            let word = normalize(word);
            if self.words[..i].iter().any(|w| normalize(w) == word) {
                return Err(GameError::RepeatedWord { index });
            }
        }
        Ok(())
    }
}

/// Parses a word-list file (a JSON array of `{"words": [...]}` objects).
/// The whole input is rejected on the first malformed entry; a deck is
/// never partially accepted.
pub fn parse_cards(json: &str) -> Result<Vec<Card>, GameError> {
    let cards: Vec<Card> =
        serde_json::from_str(json).map_err(|e| GameError::UnreadableWordList(e.to_string()))?;
    check_cards(&cards)?;
    Ok(cards)
}

/// Validates an already-built card list the same way [`parse_cards`] does.
pub fn check_cards(cards: &[Card]) -> Result<(), GameError> {
    if cards.is_empty() {
        return Err(GameError::EmptyDeck);
    }
    for (index, card) in cards.iter().enumerate() {
        card.check(index)?;
    }
    Ok(())
}

/// The built-in deck: 13 cards of 5 words, used when no word-list file is
/// configured. The classic game plays exactly 13 cards.
pub fn builtin_deck() -> Vec<Card> {
    const WORDS: [[&str; WORDS_PER_CARD]; 13] = [
        ["Europe", "Circus", "Virus", "Crocodile", "Mustard"],
        ["Apple", "Banana", "Computer", "Chair", "Sun"],
        ["Book", "Mountain", "River", "Castle", "Piano"],
        ["Tiger", "Desert", "Mirror", "Anchor", "Honey"],
        ["Winter", "Guitar", "Rocket", "Island", "Butter"],
        ["Doctor", "Bridge", "Cherry", "Shadow", "Violin"],
        ["Pirate", "Garden", "Marble", "Engine", "Pillow"],
        ["Dragon", "Coffee", "Ladder", "Planet", "Candle"],
        ["Museum", "Pepper", "Wizard", "Tunnel", "Basket"],
        ["Camera", "Forest", "Hammer", "Jungle", "Kitten"],
        ["Lemon", "Magnet", "Needle", "Ocean", "Puzzle"],
        ["Rabbit", "Saddle", "Temple", "Umbrella", "Velvet"],
        ["Wagon", "Yogurt", "Zebra", "Cactus", "Dolphin"],
    ];
    WORDS
        .iter()
        .map(|words| Card {
            words: words.iter().map(|w| w.to_string()).collect(),
        })
        .collect()
}
