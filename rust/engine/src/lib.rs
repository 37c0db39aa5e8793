//! # justone-engine: Cooperative Word-Game Turn Engine
//!
//! The round engine for a cooperative word-guessing party game: one player
//! picks a secret word from a drawn card, every other player submits a
//! one-word clue, clues that break the rules are voided, and the active
//! player must find the secret from whatever survived.
//!
//! The engine is strictly single-threaded and turn-based. It performs no
//! terminal or file I/O of its own; players are reached through the
//! [`prompt::Prompt`] trait and finished rounds leave through the
//! [`logger::RecordSink`] trait, so the whole game is drivable from tests.
//!
//! ## Core Modules
//!
//! - [`cards`] - Word cards (5 candidates each), word-list parsing and the built-in deck
//! - [`deck`] - LIFO draw pile with optional ChaCha20 seeded shuffling
//! - [`rules`] - Clue validation: secret-match, total duplicate ban, family roots
//! - [`engine`] - Round orchestration: select, collect, validate, resolve
//! - [`game`] - Session state: roster, turn rotation, score, discard pile
//! - [`player`] - Clues, normalization and the single-token input contract
//! - [`logger`] - Round records and the append-only JSONL sink
//! - [`prompt`] - The blocking question/answer seam to the players
//! - [`errors`] - Error types for game operations
//!
//! ## Validating Clues
//!
//! ```rust
//! use justone_engine::player::Clue;
//! use justone_engine::rules::{validate_clues, FamilyFilter};
//!
//! let clues = vec![
//!     Clue::new("Ivan", "reptile").unwrap(),
//!     Clue::new("Karel", "nile").unwrap(),
//!     Clue::new("Hatim", "nile").unwrap(),
//! ];
//!
//! // "nile" was given twice, so it is voided for everyone.
//! let report = validate_clues("Crocodile", &clues, &FamilyFilter::default());
//! assert_eq!(report.valid.len(), 1);
//! assert_eq!(report.valid[0].text, "reptile");
//! ```
//!
//! ## Driving a Session
//!
//! ```rust
//! use justone_engine::cards::Card;
//! use justone_engine::game::{Session, SessionConfig};
//! use justone_engine::logger::MemorySink;
//! use justone_engine::prompt::ScriptedPrompt;
//!
//! let cards = vec![Card::new(vec![
//!     "Europe".into(),
//!     "Circus".into(),
//!     "Virus".into(),
//!     "Crocodile".into(),
//!     "Mustard".into(),
//! ])
//! .unwrap()];
//!
//! let config = SessionConfig::new(vec!["Ana".into(), "Bo".into(), "Cy".into()]);
//! let mut session = Session::new(config, cards).unwrap();
//!
//! // Ana picks word 4, Bo and Cy give clues, Ana guesses right.
//! let mut prompt = ScriptedPrompt::new(["4", "reptile", "swamp", "crocodile"]);
//! let mut sink = MemorySink::default();
//! session.run(&mut prompt, &mut sink).unwrap();
//!
//! assert_eq!(session.score(), 1);
//! assert!(sink.records[0].success);
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod logger;
pub mod player;
pub mod prompt;
pub mod rules;
