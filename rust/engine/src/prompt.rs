//! The engine's only I/O seam.

use std::collections::VecDeque;
use std::io;

/// Blocking question-and-answer channel to the players at the table.
///
/// The engine never touches a terminal directly: the CLI implements this
/// over stdin/stdout, tests script it. `ask` blocks until a line of input
/// is available; there is no timeout, an interactive game waits as long as
/// it takes.
pub trait Prompt {
    /// Ask a question and block until an answer line arrives.
    fn ask(&mut self, question: &str) -> io::Result<String>;

    /// Show a line to the players.
    fn say(&mut self, line: &str) -> io::Result<()>;
}

/// Canned-answer prompt for tests and examples: hands out answers front to
/// back and keeps everything said.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    /// Every line shown through `say`, in order.
    pub transcript: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new(answers: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&mut self, _question: &str) -> io::Result<String> {
        self.answers.pop_front().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "scripted prompt ran out of answers",
            )
        })
    }

    fn say(&mut self, line: &str) -> io::Result<()> {
        self.transcript.push(line.to_string());
        Ok(())
    }
}
