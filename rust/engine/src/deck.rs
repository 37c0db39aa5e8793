use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{check_cards, Card};
use crate::errors::GameError;

/// The face-down pile of word cards for a session.
///
/// Draws follow stack discipline: the most recently added card comes off
/// first, and a drawn card never goes back in.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Replaces the deck contents with the given cards, validating their
    /// shape wholesale before accepting any of them.
    pub fn load(cards: Vec<Card>) -> Result<Self, GameError> {
        check_cards(&cards)?;
        Ok(Self { cards })
    }

    /// Removes and returns the top card.
    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::DeckExhausted)
    }

    pub fn size(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Reorders the remaining cards with a seeded ChaCha20 shuffle, so a
    /// session can be reproduced from its seed. Draws stay LIFO over the
    /// shuffled order.
    pub fn shuffle_with_seed(&mut self, seed: u64) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }
}
