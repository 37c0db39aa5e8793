use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::RoundOutcome;
use crate::player::Clue;
use crate::rules::RejectedClue;

/// Complete record of one round, serialized as one JSON object per line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based round number within the session
    pub round: u32,
    /// Timestamp (RFC3339), injected by the logger when missing
    #[serde(default)]
    pub ts: Option<String>,
    pub active_player: String,
    pub secret_word: String,
    /// The five candidates the secret was picked from
    pub candidates: Vec<String>,
    /// Every clue as submitted, with its submitter
    pub clues: Vec<Clue>,
    /// Clues that survived validation, in submission order
    pub valid_clues: Vec<String>,
    /// Voided texts and why
    pub rejected: Vec<RejectedClue>,
    /// Guesses in the order they were made; empty for aborted rounds
    pub guesses: Vec<String>,
    /// Whether the secret was found
    pub success: bool,
}

impl RoundRecord {
    pub fn new(round: u32, outcome: &RoundOutcome) -> Self {
        Self {
            round,
            ts: None,
            active_player: outcome.active_player.clone(),
            secret_word: outcome.secret_word.clone(),
            candidates: outcome.candidates.clone(),
            clues: outcome.clues.clone(),
            valid_clues: outcome.report.valid.iter().map(|c| c.text.clone()).collect(),
            rejected: outcome.report.rejected.clone(),
            guesses: outcome.guesses.clone(),
            success: outcome.success,
        }
    }
}

/// Anything that takes finished-round records. Append-only from the
/// engine's point of view: a record is handed over exactly once, after its
/// round reached a terminal state, never for a round in progress.
pub trait RecordSink {
    fn record(&mut self, record: &RoundRecord) -> std::io::Result<()>;
}

/// JSONL file sink. Opens in append mode so earlier sessions are never
/// overwritten, creates missing parent directories, flushes per record.
pub struct RoundLogger {
    writer: BufWriter<File>,
}

impl RoundLogger {
    pub fn append<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: BufWriter::new(f),
        })
    }
}

impl RecordSink for RoundLogger {
    fn record(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }
}

/// In-memory sink for tests and examples.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub records: Vec<RoundRecord>,
}

impl RecordSink for MemorySink {
    fn record(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        self.records.push(record.clone());
        Ok(())
    }
}
