//! Line-oriented terminal front-end for a [`crate::state::session::WizardSession`].

mod frontend;
pub mod prompt;
pub mod style;

use crate::submission::SubmissionRecord;
use std::io::{self, BufRead, Write};

pub use prompt::Prompted;

#[derive(Debug)]
pub enum Outcome {
    Submitted(SubmissionRecord),
    /// The user quit or input ended before a successful submission.
    Abandoned,
}

pub struct TerminalFrontend<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalFrontend<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Next input line without its line terminator, `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
