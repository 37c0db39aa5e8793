use justone_engine::cards::Card;
use justone_engine::errors::GameError;
use justone_engine::game::{score_message, Session, SessionConfig};
use justone_engine::logger::MemorySink;
use justone_engine::prompt::ScriptedPrompt;

fn card(words: [&str; 5]) -> Card {
    Card::new(words.iter().map(|w| w.to_string()).collect()).unwrap()
}

fn config(players: &[&str]) -> SessionConfig {
    SessionConfig::new(players.iter().map(|p| p.to_string()).collect())
}

#[test]
fn session_needs_at_least_two_players() {
    let cards = vec![card(["Alpha", "Bravo", "Charlie", "Delta", "Echo"])];
    let err = Session::new(config(&["Solo"]), cards).unwrap_err();
    assert_eq!(err, GameError::TooFewPlayers(1));
}

#[test]
fn session_rejects_duplicate_player_names() {
    let cards = vec![card(["Alpha", "Bravo", "Charlie", "Delta", "Echo"])];
    let err = Session::new(config(&["Ann", "Ben", "Ann"]), cards).unwrap_err();
    assert_eq!(err, GameError::DuplicatePlayer("Ann".to_string()));
}

#[test]
fn session_refuses_an_empty_deck() {
    let err = Session::new(config(&["Ann", "Ben"]), vec![]).unwrap_err();
    assert_eq!(err, GameError::EmptyDeck);
}

#[test]
fn turn_rotates_after_every_round_including_aborts() {
    // Every clue is the secret word, so all three rounds abort; the turn
    // index must still advance once per round.
    let cards = vec![
        card(["Apple", "Banana", "Computer", "Chair", "Sun"]),
        card(["Book", "Mountain", "River", "Castle", "Piano"]),
        card(["Tiger", "Desert", "Mirror", "Anchor", "Honey"]),
    ];
    let mut session = Session::new(config(&["Ann", "Ben"]), cards).unwrap();

    // Cards come off the deck last-in-first-out: Tiger, Book, Apple.
    let mut prompt = ScriptedPrompt::new(["1", "tiger", "1", "book", "1", "apple"]);
    let mut sink = MemorySink::default();
    session.run(&mut prompt, &mut sink).unwrap();

    assert_eq!(session.rounds_played(), 3);
    assert_eq!(session.turn_index(), 1, "3 rounds mod 2 players");
    assert_eq!(session.score(), 0);
    assert_eq!(session.discard_size(), 3);
    assert_eq!(sink.records.len(), 3);
    assert!(sink.records.iter().all(|r| !r.success));
    assert!(sink.records.iter().all(|r| r.guesses.is_empty()));
}

#[test]
fn session_plays_the_whole_deck_and_reports_the_score() {
    let cards = vec![
        card(["Apple", "Banana", "Computer", "Chair", "Sun"]),
        card(["Alpha", "Bravo", "Charlie", "Delta", "Echo"]),
    ];
    let mut session = Session::new(config(&["Ann", "Ben", "Cleo"]), cards).unwrap();

    let mut prompt = ScriptedPrompt::new([
        // Round 1: Ann picks Alpha, Ben and Cleo give clues, Ann solves it.
        "1", "greek", "letters", "alpha",
        // Round 2: Ben picks Banana, Ann and Cleo give clues, Ben solves it.
        "2", "fruit", "yellow", "banana",
    ]);
    let mut sink = MemorySink::default();
    session.run(&mut prompt, &mut sink).unwrap();

    assert_eq!(session.score(), 2);
    assert_eq!(session.deck_size(), 0);
    assert_eq!(session.discard_size(), 2);
    assert_eq!(session.turn_index(), 2);

    assert_eq!(sink.records.len(), 2);
    assert_eq!(sink.records[0].round, 1);
    assert_eq!(sink.records[0].secret_word, "Alpha");
    assert_eq!(sink.records[0].active_player, "Ann");
    assert_eq!(sink.records[1].round, 2);
    assert_eq!(sink.records[1].secret_word, "Banana");
    assert_eq!(sink.records[1].active_player, "Ben");
    assert!(sink.records.iter().all(|r| r.success));

    assert!(
        prompt
            .transcript
            .iter()
            .any(|line| line.contains("Final score: 2")),
        "the session announces the final score"
    );
    assert!(
        prompt.transcript.iter().any(|line| line == "Try again"),
        "score 2 falls back to the default verdict"
    );
}

#[test]
fn score_never_decreases_within_a_session() {
    let cards = vec![
        card(["Apple", "Banana", "Computer", "Chair", "Sun"]),
        card(["Alpha", "Bravo", "Charlie", "Delta", "Echo"]),
    ];
    let mut session = Session::new(config(&["Ann", "Ben"]), cards).unwrap();

    // Round 1 solved, round 2 aborted; the point from round 1 stays.
    let mut prompt = ScriptedPrompt::new(["1", "greek", "alpha", "1", "apple"]);
    let mut sink = MemorySink::default();
    session.run(&mut prompt, &mut sink).unwrap();

    assert_eq!(session.score(), 1);
    assert!(sink.records[0].success);
    assert!(!sink.records[1].success);
}

#[test]
fn score_messages_match_the_table() {
    assert_eq!(score_message(13), "Perfect score!");
    assert_eq!(score_message(12), "Incredible!");
    assert_eq!(score_message(11), "Great!");
    assert_eq!(score_message(10), "Wow!");
    assert_eq!(score_message(9), "Not bad!");
    assert_eq!(score_message(8), "Average");
    assert_eq!(score_message(7), "Could do better");
    assert_eq!(score_message(6), "Good start");
}

#[test]
fn scores_outside_the_table_fall_back() {
    assert_eq!(score_message(0), "Try again");
    assert_eq!(score_message(2), "Try again");
    assert_eq!(score_message(5), "Try again");
    assert_eq!(score_message(14), "Try again");
}
