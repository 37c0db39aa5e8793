//! Command-line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use justone_engine::game::GuessPolicy;

#[derive(Debug, Parser)]
#[command(name = "justone", version, about = "Cooperative word-guessing party game")]
pub struct JustOneCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play an interactive session at the terminal
    Play {
        /// Word-list file (JSON array of {"words": [...]}); built-in deck when omitted
        #[arg(long)]
        words: Option<String>,
        /// Guess policy for the whole session
        #[arg(long, value_enum)]
        policy: Option<PolicyArg>,
        /// Deck shuffle seed (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// Round log path (JSON lines, appended)
        #[arg(long)]
        log: Option<String>,
        /// Offer a fresh game when the deck runs out
        #[arg(long)]
        replay: bool,
    },
    /// Validate a word-list file without playing it
    Verify {
        /// Path to the word-list JSON file
        #[arg(long)]
        input: String,
    },
    /// Summarize a round log
    Stats {
        /// Path to a JSONL round log
        #[arg(long)]
        input: String,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

/// Guess policy choice for the `play` command.
#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum PolicyArg {
    /// One guess against all valid clues; a miss costs an extra card
    Single,
    /// Clues revealed one at a time, a guess after each
    Progressive,
}

impl PolicyArg {
    pub fn as_policy(self) -> GuessPolicy {
        match self {
            PolicyArg::Single => GuessPolicy::Single,
            PolicyArg::Progressive => GuessPolicy::Progressive,
        }
    }
}
