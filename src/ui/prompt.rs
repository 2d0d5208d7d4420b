//! Interactive console shared by the prompting flows.
//! Generic over the input and output streams.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{Level, render};
use std::fmt;
use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process stdin/stdout.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Console::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print a line on the console output.
    pub fn say<T: fmt::Display>(&mut self, msg: T) -> AppResult<()> {
        writeln!(self.output, "{}", msg)?;
        Ok(())
    }

    /// Print a message at `level` on the console output.
    pub fn notify<T: fmt::Display>(&mut self, level: Level, msg: T) -> AppResult<()> {
        self.say(render(level, msg))
    }

    pub fn info<T: fmt::Display>(&mut self, msg: T) -> AppResult<()> {
        self.say(render(Level::Info, msg))
    }

    pub fn success<T: fmt::Display>(&mut self, msg: T) -> AppResult<()> {
        self.say(render(Level::Success, msg))
    }

    pub fn warning<T: fmt::Display>(&mut self, msg: T) -> AppResult<()> {
        self.say(render(Level::Warning, msg))
    }

    /// Show `prompt` (no newline) and read one line, trimmed.
    /// Returns `AppError::InputClosed` when the input is exhausted.
    pub fn ask(&mut self, prompt: &str) -> AppResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Err(AppError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Ask a yes/no question once. `yes`/`no` are matched case-insensitively;
    /// anything else prints `invalid_msg` and yields `Ok(None)`.
    pub fn ask_yes_no(&mut self, prompt: &str, invalid_msg: &str) -> AppResult<Option<bool>> {
        match self.ask(prompt)?.to_lowercase().as_str() {
            "yes" => Ok(Some(true)),
            "no" => Ok(Some(false)),
            _ => {
                self.warning(invalid_msg)?;
                Ok(None)
            }
        }
    }

    /// Ask a yes/no question until the answer is valid.
    pub fn ask_until_yes_no(&mut self, prompt: &str, invalid_msg: &str) -> AppResult<bool> {
        loop {
            if let Some(answer) = self.ask_yes_no(prompt, invalid_msg)? {
                return Ok(answer);
            }
        }
    }

    /// Prompt for a first and a last name until both are non-empty.
    pub fn collect_name(&mut self) -> AppResult<(String, String)> {
        loop {
            let first = self.ask("Enter student's first name: ")?;
            let last = self.ask("Enter student's last name: ")?;
            if !first.is_empty() && !last.is_empty() {
                return Ok((first, last));
            }
            self.warning("Both first and last names are required. Please try again.")?;
        }
    }
}
