use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("word list is not a JSON array of cards: {0}")]
    UnreadableWordList(String),
    #[error("the deck is empty")]
    EmptyDeck,
    #[error("card {index} has {count} words, expected 5")]
    MalformedCard { index: usize, count: usize },
    #[error("card {index} contains an empty or multi-word entry")]
    InvalidWord { index: usize },
    #[error("card {index} repeats a word")]
    RepeatedWord { index: usize },
    #[error("no cards left in the deck")]
    DeckExhausted,
    #[error("choice {choice} is out of range 1..={max}")]
    InvalidSelection { choice: usize, max: usize },
    #[error("a clue must be a single word with no spaces")]
    NotSingleToken,
    #[error("player names must be unique, `{0}` appears twice")]
    DuplicatePlayer(String),
    #[error("a session needs at least 2 players, got {0}")]
    TooFewPlayers(usize),
}

/// Failure of the interactive loop: a rule or deck error, or an I/O error
/// on the prompt or record sink. Rule errors that are recoverable by
/// re-prompting are consumed inside the loop and never surface here.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
