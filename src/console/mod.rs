//! Line-oriented console frontends.
//!
//! Everything reads from a [`BufRead`] and writes to a [`Write`] so the
//! prompt loops can be driven from tests.

pub mod tictactoe;
pub mod twentyone;

use derive_more::{Display, Error};
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Console I/O error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Console error: {} at {}:{}", message, file, line)]
pub struct ConsoleError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConsoleError {
    /// Creates a new console error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for ConsoleError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

/// Prompting wrapper around an input and an output stream.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wraps the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints a prompt-style message.
    pub fn say(&mut self, message: impl std::fmt::Display) -> Result<(), ConsoleError> {
        writeln!(self.output, "=> {}", message)?;
        Ok(())
    }

    /// Prints text as-is.
    pub fn show(&mut self, text: impl std::fmt::Display) -> Result<(), ConsoleError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// Asks until `parse` accepts the trimmed answer.
    ///
    /// `parse` returns the complaint to print on rejection.
    ///
    /// # Errors
    ///
    /// Fails when input ends before a valid answer arrives.
    #[instrument(skip(self, parse))]
    pub fn ask<T>(
        &mut self,
        question: &str,
        mut parse: impl FnMut(&str) -> Result<T, String>,
    ) -> Result<T, ConsoleError> {
        loop {
            self.say(question)?;
            self.output.flush()?;
            let answer = self.read_line()?;
            match parse(answer.trim()) {
                Ok(value) => return Ok(value),
                Err(complaint) => {
                    debug!(answer = %answer.trim(), "Answer rejected");
                    self.say(complaint)?;
                }
            }
        }
    }

    /// Asks for a non-empty name.
    pub fn ask_name(&mut self, question: &str) -> Result<String, ConsoleError> {
        self.ask(question, |answer| {
            if answer.is_empty() {
                Err("Sorry, must enter a value.".to_string())
            } else {
                Ok(answer.to_string())
            }
        })
    }

    /// Asks a y/n question.
    pub fn ask_yes_no(&mut self, question: &str) -> Result<bool, ConsoleError> {
        self.ask(question, |answer| match answer.to_lowercase().as_str() {
            "y" | "yes" => Ok(true),
            "n" | "no" => Ok(false),
            _ => Err("Sorry, must be y or n.".to_string()),
        })
    }

    /// Returns the output stream.
    pub fn output(&self) -> &W {
        &self.output
    }

    fn read_line(&mut self) -> Result<String, ConsoleError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::new("Input closed"));
        }
        Ok(line)
    }
}
