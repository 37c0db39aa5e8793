//! # Play Command
//!
//! Interactive gameplay at the terminal: one session per deck, every
//! player sharing the same keyboard in turn. The engine drives the round
//! flow; this handler only resolves configuration, loads the deck, bridges
//! stdin/stdout onto the engine's prompt seam and appends round records to
//! the log file.

use std::io::{BufRead, Write};

use justone_engine::cards::builtin_deck;
use justone_engine::game::{Session, SessionConfig};
use justone_engine::logger::RoundLogger;
use justone_engine::prompt::Prompt;

use crate::cli::PolicyArg;
use crate::config;
use crate::error::CliError;
use crate::io_utils::{read_stdin_line, read_word_list};
use crate::ui;
use crate::validation::parse_yes;

/// Bridges the engine's prompt seam onto the CLI streams: the question
/// goes out, one trimmed line comes back. EOF surfaces as an error and
/// ends the game.
struct LinePrompt<'a> {
    out: &'a mut dyn Write,
    stdin: &'a mut dyn BufRead,
}

impl Prompt for LinePrompt<'_> {
    fn ask(&mut self, question: &str) -> std::io::Result<String> {
        write!(self.out, "{}", question)?;
        self.out.flush()?;
        read_stdin_line(self.stdin)
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "input closed"))
    }

    fn say(&mut self, line: &str) -> std::io::Result<()> {
        writeln!(self.out, "{}", line)
    }
}

/// Handle the play command: run interactive sessions until the players
/// stop.
///
/// Flags override the configuration file, which overrides the defaults.
/// The deck comes from `--words`, the configured word list, or the
/// built-in cards, in that order; it is shuffled with the (printed) seed
/// so a session can be reproduced.
pub fn handle_play_command(
    words: Option<String>,
    policy: Option<PolicyArg>,
    seed: Option<u64>,
    log: Option<String>,
    replay: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = config::load().map_err(|e| {
        let _ = ui::write_error(err, &format!("Invalid configuration: {}", e));
        CliError::Config(format!("Invalid configuration: {}", e))
    })?;

    let words_path = words.or(cfg.words);
    let cards = match &words_path {
        Some(path) => read_word_list(path)?,
        None => builtin_deck(),
    };
    let policy = policy.map(PolicyArg::as_policy).unwrap_or(cfg.policy);
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let log_path = log.unwrap_or(cfg.log);
    let allow_replay = replay || cfg.allow_replay;

    writeln!(
        out,
        "play: policy={} seed={} cards={} players={}",
        policy.as_str(),
        seed,
        cards.len(),
        cfg.players.len()
    )?;

    let mut logger = RoundLogger::append(&log_path)?;
    let mut prompt = LinePrompt { out, stdin };
    loop {
        let mut session_config = SessionConfig::new(cfg.players.clone());
        session_config.policy = policy;
        session_config.forbidden_roots = cfg.forbidden_roots.clone();
        session_config.shuffle_seed = Some(seed);

        let mut session = Session::new(session_config, cards.clone())
            .map_err(|e| CliError::Engine(e.to_string()))?;
        session.run(&mut prompt, &mut logger)?;

        if !allow_replay {
            break;
        }
        let answer = prompt.ask("Play again? (y/n): ").map_err(CliError::Io)?;
        if !parse_yes(&answer) {
            break;
        }
    }
    Ok(())
}
