//! One round of play, front to back.
//!
//! A round walks a fixed sequence of phases: select the secret word,
//! collect one clue per non-active player, validate the clues, then either
//! abort (everything voided) or resolve the guess under the session's
//! policy. Invalid input loops inside its phase with user-facing feedback;
//! it never advances the round or corrupts session state.

use crate::cards::Card;
use crate::errors::SessionError;
use crate::game::{GuessPolicy, Session};
use crate::player::{normalize, Clue};
use crate::prompt::Prompt;
use crate::rules::{validate_clues, ClueReport};

/// Everything one round saw and decided, before it is written to the log.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RoundOutcome {
    pub active_player: String,
    pub secret_word: String,
    /// The five candidates the secret was picked from
    pub candidates: Vec<String>,
    /// Every clue as submitted
    pub clues: Vec<Clue>,
    pub report: ClueReport,
    /// Guesses in the order they were made; empty for aborted rounds
    pub guesses: Vec<String>,
    pub success: bool,
}

impl RoundOutcome {
    /// A round with no surviving clues never reached the guess phase.
    pub fn aborted(&self) -> bool {
        self.report.all_rejected()
    }
}

/// Drives a single round against the session state. Bookkeeping (score,
/// discard pile, forfeits) is applied as phases conclude; the caller
/// rotates the turn afterwards.
pub struct RoundEngine<'a> {
    session: &'a mut Session,
}

impl<'a> RoundEngine<'a> {
    pub fn new(session: &'a mut Session) -> Self {
        Self { session }
    }

    /// Plays one full round and returns its outcome. Callers check deck
    /// emptiness before entering a round; a draw from an exhausted deck
    /// fails here rather than returning a default.
    pub fn run(mut self, prompt: &mut dyn Prompt) -> Result<RoundOutcome, SessionError> {
        let card = self.session.draw_card()?;
        let active = self.session.active_player().to_string();

        prompt.say(&format!("--- {}'s turn ---", active))?;
        let secret = self.select_secret(&card, &active, prompt)?;
        let clues = self.collect_clues(prompt)?;

        let report = validate_clues(&secret, &clues, self.session.family());
        for r in &report.rejected {
            prompt.say(&format!("Clue \"{}\" is void: {}.", r.text, r.reason.describe()))?;
        }

        let (guesses, success) = if report.all_rejected() {
            prompt.say("Every clue was voided! The card is lost.")?;
            (Vec::new(), false)
        } else {
            match self.session.policy() {
                GuessPolicy::Single => self.resolve_single(&secret, &active, &report, prompt)?,
                GuessPolicy::Progressive => {
                    self.resolve_progressive(&secret, &active, &report, prompt)?
                }
            }
        };

        if success {
            self.session.award_point();
            prompt.say(&format!("Correct! Score: {}", self.session.score()))?;
        }

        let candidates = card.words.clone();
        self.session.discard(card);

        Ok(RoundOutcome {
            active_player: active,
            secret_word: secret,
            candidates,
            clues,
            report,
            guesses,
            success,
        })
    }

    /// Re-prompts until the active player picks a candidate index in range.
    fn select_secret(
        &mut self,
        card: &Card,
        active: &str,
        prompt: &mut dyn Prompt,
    ) -> Result<String, SessionError> {
        prompt.say(&format!("Words on the card: {}", card.words.join(", ")))?;
        loop {
            let answer = prompt.ask(&format!(
                "{}, pick a number between 1 and {}: ",
                active,
                card.words.len()
            ))?;
            let choice = match answer.trim().parse::<usize>() {
                Ok(n) => n,
                Err(_) => {
                    prompt.say("Please enter a number.")?;
                    continue;
                }
            };
            match card.word_at(choice) {
                Ok(word) => return Ok(word.to_string()),
                Err(e) => prompt.say(&format!("{}.", e))?,
            }
        }
    }

    /// One clue per non-active player, in roster order. Multi-word input is
    /// rejected at this boundary, before a `Clue` exists.
    fn collect_clues(&mut self, prompt: &mut dyn Prompt) -> Result<Vec<Clue>, SessionError> {
        let mut clues = Vec::new();
        for giver in self.session.clue_givers() {
            loop {
                let answer = prompt.ask(&format!("{}, give a one-word clue: ", giver))?;
                match Clue::new(giver.as_str(), answer) {
                    Ok(clue) => {
                        clues.push(clue);
                        break;
                    }
                    Err(e) => prompt.say(&format!("{}. Try again.", e))?,
                }
            }
        }
        Ok(clues)
    }

    /// All valid clues at once, one guess. A miss reveals the secret and
    /// forfeits one extra card from the top of the deck (no-op when the
    /// deck is already empty).
    fn resolve_single(
        &mut self,
        secret: &str,
        active: &str,
        report: &ClueReport,
        prompt: &mut dyn Prompt,
    ) -> Result<(Vec<String>, bool), SessionError> {
        let texts: Vec<&str> = report.valid.iter().map(|c| c.text.as_str()).collect();
        prompt.say(&format!("Valid clues: {}", texts.join(", ")))?;
        let guess = prompt.ask(&format!("{}, what is the secret word? ", active))?;
        let success = normalize(&guess) == normalize(secret);
        if !success {
            prompt.say(&format!("Wrong. The secret word was: {}", secret))?;
            self.session.forfeit_top_card();
        }
        Ok((vec![guess.trim().to_string()], success))
    }

    /// Clues revealed one at a time in validation order, a guess after
    /// each. Running out of clues reveals the secret; no extra forfeit.
    fn resolve_progressive(
        &mut self,
        secret: &str,
        active: &str,
        report: &ClueReport,
        prompt: &mut dyn Prompt,
    ) -> Result<(Vec<String>, bool), SessionError> {
        let texts: Vec<&str> = report.valid.iter().map(|c| c.text.as_str()).collect();
        let mut guesses = Vec::new();
        for (shown, text) in texts.iter().enumerate() {
            prompt.say(&format!("Clue {}/{}: {}", shown + 1, texts.len(), text))?;
            let guess = prompt.ask(&format!("{}, what is the secret word? ", active))?;
            let success = normalize(&guess) == normalize(secret);
            guesses.push(guess.trim().to_string());
            if success {
                return Ok((guesses, true));
            }
            if shown + 1 < texts.len() {
                prompt.say("Wrong. Here is another clue.")?;
            }
        }
        prompt.say(&format!("Out of clues! The secret word was: {}", secret))?;
        Ok((guesses, false))
    }
}
