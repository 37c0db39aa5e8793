use std::fs;

use justone_engine::logger::{RecordSink, RoundLogger, RoundRecord};
use justone_engine::player::Clue;
use justone_engine::rules::{RejectedClue, Rejection};

fn sample_record(round: u32) -> RoundRecord {
    RoundRecord {
        round,
        ts: None,
        active_player: "Ann".to_string(),
        secret_word: "Crocodile".to_string(),
        candidates: ["Europe", "Circus", "Virus", "Crocodile", "Mustard"]
            .iter()
            .map(|w| w.to_string())
            .collect(),
        clues: vec![
            Clue::new("Ben", "reptile").unwrap(),
            Clue::new("Cleo", "nile").unwrap(),
            Clue::new("Dana", "nile").unwrap(),
        ],
        valid_clues: vec!["reptile".to_string()],
        rejected: vec![RejectedClue {
            text: "nile".to_string(),
            reason: Rejection::Duplicate,
        }],
        guesses: vec!["alligator".to_string()],
        success: false,
    }
}

#[test]
fn round_record_serializes_and_deserializes() {
    let rec = sample_record(3);
    let s = serde_json::to_string(&rec).expect("serialize");
    let back: RoundRecord = serde_json::from_str(&s).expect("deserialize");
    assert_eq!(rec, back);
}

#[test]
fn record_captures_submitter_and_rejection_reason() {
    let s = serde_json::to_string(&sample_record(1)).unwrap();
    let v: serde_json::Value = serde_json::from_str(&s).unwrap();
    assert_eq!(v["clues"][0]["player"], "Ben");
    assert_eq!(v["rejected"][0]["reason"], "duplicate");
    assert_eq!(v["success"], false);
}

#[test]
fn logger_writes_one_json_line_per_record_and_injects_a_timestamp() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logs").join("rounds.jsonl");

    let mut logger = RoundLogger::append(&path).expect("missing parents are created");
    logger.record(&sample_record(1)).unwrap();
    logger.record(&sample_record(2)).unwrap();
    drop(logger);

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);

    for (i, line) in lines.iter().enumerate() {
        let rec: RoundRecord = serde_json::from_str(line).expect("each line is a record");
        assert_eq!(rec.round, (i + 1) as u32);
        assert!(rec.ts.is_some(), "the logger stamps records on write");
    }
}

#[test]
fn logger_appends_instead_of_overwriting() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rounds.jsonl");

    let mut first = RoundLogger::append(&path).unwrap();
    first.record(&sample_record(1)).unwrap();
    drop(first);

    let mut second = RoundLogger::append(&path).unwrap();
    second.record(&sample_record(2)).unwrap();
    drop(second);

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 2, "earlier sessions survive reopening");
}

#[test]
fn provided_timestamps_are_preserved() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rounds.jsonl");

    let mut rec = sample_record(1);
    rec.ts = Some("2026-01-01T00:00:00Z".to_string());
    let mut logger = RoundLogger::append(&path).unwrap();
    logger.record(&rec).unwrap();
    drop(logger);

    let text = fs::read_to_string(&path).unwrap();
    let back: RoundRecord = serde_json::from_str(text.lines().next().unwrap()).unwrap();
    assert_eq!(back.ts.as_deref(), Some("2026-01-01T00:00:00Z"));
}
