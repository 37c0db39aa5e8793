//! stdin and file helpers shared by the CLI commands.

use std::io::BufRead;

use justone_engine::cards::{parse_cards, Card};

use crate::error::CliError;

/// Reads a line of input from a buffered reader, blocking until available.
///
/// Used by interactive commands. The line is trimmed; `None` means EOF or a
/// read error, which ends the interactive session.
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => {
            let trimmed = line.trim();
            Some(trimmed.to_string())
        }
        Err(_) => None, // Read error
    }
}

/// Loads a word-list file and validates it wholesale; a deck is never
/// partially accepted.
pub fn read_word_list(path: &str) -> Result<Vec<Card>, CliError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| CliError::InvalidInput(format!("cannot read {}: {}", path, e)))?;
    parse_cards(&text).map_err(|e| CliError::InvalidInput(format!("{}: {}", path, e)))
}
