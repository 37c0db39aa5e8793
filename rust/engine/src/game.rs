use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::engine::RoundEngine;
use crate::errors::{GameError, SessionError};
use crate::logger::{RecordSink, RoundRecord};
use crate::player::PlayerId;
use crate::prompt::Prompt;
use crate::rules::FamilyFilter;

/// Minimum roster: one guesser plus at least one clue giver.
pub const MIN_PLAYERS: usize = 2;

/// How the guess phase spends the valid clues. Fixed per session; the two
/// behaviors are never mixed within one game.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuessPolicy {
    /// All valid clues shown at once, a single guess; a miss forfeits one
    /// extra card from the top of the deck.
    #[default]
    Single,
    /// Clues revealed one at a time, a guess after each; no extra forfeit.
    Progressive,
}

impl GuessPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            GuessPolicy::Single => "single",
            GuessPolicy::Progressive => "progressive",
        }
    }
}

/// Everything a session needs besides the cards themselves.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Roster in turn order; names must be unique.
    pub players: Vec<String>,
    pub policy: GuessPolicy,
    /// Forbidden same-family roots for the clue validator.
    pub forbidden_roots: Vec<String>,
    /// Shuffle the deck with this seed before play; `None` keeps load order.
    pub shuffle_seed: Option<u64>,
}

impl SessionConfig {
    /// A config with the given roster and every knob at its default:
    /// single-guess policy, no forbidden roots, no shuffle.
    pub fn new(players: Vec<String>) -> Self {
        Self {
            players,
            policy: GuessPolicy::default(),
            forbidden_roots: Vec::new(),
            shuffle_seed: None,
        }
    }
}

/// One play-through of a deck: roster, turn rotation, running score and the
/// two card piles. The session owns all of it; a round borrows what it
/// needs and writes its result back before the next round starts.
#[derive(Debug)]
pub struct Session {
    players: Vec<String>,
    turn_index: PlayerId,
    score: u32,
    deck: Deck,
    discard: Vec<Card>,
    policy: GuessPolicy,
    family: FamilyFilter,
    rounds_played: u32,
}

impl Session {
    /// Validates the roster, loads (and optionally shuffles) the deck and
    /// starts at score 0 with the first player active.
    pub fn new(config: SessionConfig, cards: Vec<Card>) -> Result<Self, GameError> {
        if config.players.len() < MIN_PLAYERS {
            return Err(GameError::TooFewPlayers(config.players.len()));
        }
        for (i, name) in config.players.iter().enumerate() {
            if config.players[..i].contains(name) {
                return Err(GameError::DuplicatePlayer(name.clone()));
            }
        }
        let mut deck = Deck::load(cards)?;
        if let Some(seed) = config.shuffle_seed {
            deck.shuffle_with_seed(seed);
        }
        Ok(Self {
            players: config.players,
            turn_index: 0,
            score: 0,
            deck,
            discard: Vec::new(),
            policy: config.policy,
            family: FamilyFilter::new(config.forbidden_roots),
            rounds_played: 0,
        })
    }

    /// The session loop: plays rounds until the deck runs out, records
    /// every round before the turn rotates, then announces the final score.
    /// An explicit loop, so a long game never grows the call stack.
    pub fn run(
        &mut self,
        prompt: &mut dyn Prompt,
        sink: &mut dyn RecordSink,
    ) -> Result<(), SessionError> {
        prompt.say(&format!(
            "=== NEW GAME: {} cards, {} players ===",
            self.deck.size(),
            self.players.len()
        ))?;
        while !self.deck.is_empty() {
            let outcome = RoundEngine::new(self).run(prompt)?;
            self.rounds_played += 1;
            sink.record(&RoundRecord::new(self.rounds_played, &outcome))?;
            self.advance_turn();
        }
        prompt.say("=== GAME OVER ===")?;
        prompt.say(&format!("Final score: {} cards solved", self.score))?;
        prompt.say(self.score_message())?;
        Ok(())
    }

    pub fn players(&self) -> &[String] {
        &self.players
    }

    pub fn active_player(&self) -> &str {
        &self.players[self.turn_index]
    }

    /// Everyone except the active player, in roster order.
    pub fn clue_givers(&self) -> Vec<String> {
        self.players
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != self.turn_index)
            .map(|(_, name)| name.clone())
            .collect()
    }

    pub fn turn_index(&self) -> PlayerId {
        self.turn_index
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn deck_size(&self) -> usize {
        self.deck.size()
    }

    pub fn discard_size(&self) -> usize {
        self.discard.len()
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn policy(&self) -> GuessPolicy {
        self.policy
    }

    pub fn family(&self) -> &FamilyFilter {
        &self.family
    }

    /// The fixed score verdict, with a fallback for every score the table
    /// does not name.
    pub fn score_message(&self) -> &'static str {
        score_message(self.score)
    }

    pub(crate) fn draw_card(&mut self) -> Result<Card, GameError> {
        self.deck.draw()
    }

    pub(crate) fn award_point(&mut self) {
        self.score += 1;
    }

    pub(crate) fn discard(&mut self, card: Card) {
        self.discard.push(card);
    }

    /// A failed single-guess round costs an extra card; drawing from an
    /// already-empty deck is a no-op, not an error.
    pub(crate) fn forfeit_top_card(&mut self) {
        if let Ok(card) = self.deck.draw() {
            self.discard.push(card);
        }
    }

    pub(crate) fn advance_turn(&mut self) {
        self.turn_index = (self.turn_index + 1) % self.players.len();
    }
}

/// Score → verdict lookup. Explicit entries for 6 through 13, everything
/// else falls back.
pub fn score_message(score: u32) -> &'static str {
    match score {
        13 => "Perfect score!",
        12 => "Incredible!",
        11 => "Great!",
        10 => "Wow!",
        9 => "Not bad!",
        8 => "Average",
        7 => "Could do better",
        6 => "Good start",
        _ => "Try again",
    }
}
