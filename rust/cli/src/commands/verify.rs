//! Verify command handler module.
//!
//! Validates a word-list file without playing it: the input must be a JSON
//! array of cards, every card must carry exactly five distinct single-word
//! strings. Problems are collected per card and all reported, instead of
//! stopping at the first one.

use std::io::Write;

use crate::error::CliError;
use crate::ui;
use crate::validation::check_word_list;

/// Handle the verify command - validate word-list integrity.
///
/// # Arguments
///
/// * `input` - Path to the word-list JSON file
/// * `out` - Output stream for the verification summary
/// * `err` - Output stream for per-card problems
///
/// # Returns
///
/// `Ok(())` when every card checks out, otherwise an `Err` that maps to
/// exit code `2`.
pub fn handle_verify_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let text = std::fs::read_to_string(&input)
        .map_err(|e| CliError::InvalidInput(format!("cannot read {}: {}", input, e)))?;

    let doc: serde_json::Value = serde_json::from_str(&text).map_err(|e| {
        let _ = ui::write_error(err, &format!("{}: not valid JSON: {}", input, e));
        CliError::InvalidInput(format!("{}: not valid JSON: {}", input, e))
    })?;

    let issues = check_word_list(&doc).map_err(|msg| {
        let _ = ui::write_error(err, &format!("{}: {}", input, msg));
        CliError::InvalidInput(format!("{}: {}", input, msg))
    })?;

    let cards = doc.as_array().map(|a| a.len()).unwrap_or(0);
    if issues.is_empty() {
        writeln!(out, "OK: {} cards", cards)?;
        return Ok(());
    }

    for issue in &issues {
        ui::write_error(err, &issue.to_string())?;
    }
    writeln!(out, "Checked {} cards: {} problem(s) found", cards, issues.len())?;
    Err(CliError::InvalidInput(format!(
        "{} failed verification",
        input
    )))
}
