//! Stats command handler module.
//!
//! Aggregates a JSONL round log into a short report: rounds played,
//! solved/failed/aborted counts, success rate, clue and guess totals.
//! Lines that fail to parse are reported to stderr and skipped, so one
//! corrupted record never hides the rest of the log.

use std::io::Write;

use justone_engine::logger::RoundRecord;

use crate::error::CliError;
use crate::ui;

/// Handle the stats command - summarize a round log.
///
/// # Arguments
///
/// * `input` - Path to a JSONL round log
/// * `out` - Output stream for the report
/// * `err` - Output stream for warnings about skipped lines
///
/// # Returns
///
/// `Ok(())` when the file could be read; a log with no parseable records
/// still succeeds, with a warning.
pub fn handle_stats_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let text = std::fs::read_to_string(&input)
        .map_err(|e| CliError::InvalidInput(format!("cannot read {}: {}", input, e)))?;

    let mut rounds = 0u64;
    let mut solved = 0u64;
    let mut failed = 0u64;
    let mut aborted = 0u64;
    let mut clues_given = 0u64;
    let mut texts_voided = 0u64;
    let mut guesses_made = 0u64;

    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let rec: RoundRecord = crate::parse_json_or_continue!(line, err, format!("line {}", idx + 1));
        rounds += 1;
        if rec.success {
            solved += 1;
        } else if rec.valid_clues.is_empty() {
            aborted += 1;
        } else {
            failed += 1;
        }
        clues_given += rec.clues.len() as u64;
        texts_voided += rec.rejected.len() as u64;
        guesses_made += rec.guesses.len() as u64;
    }

    if rounds == 0 {
        ui::display_warning(err, "no round records found")?;
        writeln!(out, "Rounds: 0")?;
        return Ok(());
    }

    writeln!(out, "Rounds: {}", rounds)?;
    writeln!(out, "Solved: {}", solved)?;
    writeln!(out, "Failed: {}", failed)?;
    writeln!(out, "Aborted: {}", aborted)?;
    writeln!(
        out,
        "Success rate: {:.1}%",
        100.0 * solved as f64 / rounds as f64
    )?;
    writeln!(out, "Clues submitted: {}", clues_given)?;
    writeln!(out, "Clue texts voided: {}", texts_voided)?;
    writeln!(out, "Guesses made: {}", guesses_made)?;
    Ok(())
}
