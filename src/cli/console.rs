//! Line-based terminal I/O
//!
//! Every interactive flow talks to a [`Console`] instead of stdin/stdout
//! directly, so the same code runs against the terminal and against an
//! in-memory script in tests.

use std::fmt::Display;
use std::io::{self, BufRead, IsTerminal, StdinLock, Stdout, Write};

use crate::crypto::SecretString;
use crate::error::{InputError, PaysplitError, PaysplitResult};

/// Prompt-and-read wrapper around a reader and a writer
pub struct Console<R, W> {
    reader: R,
    writer: W,
    hide_secrets: bool,
}

/// Console bound to the process's stdin and stdout
pub type StdConsole = Console<StdinLock<'static>, Stdout>;

impl StdConsole {
    /// Console over stdin/stdout
    ///
    /// Passwords are read without echo only when stdin is a terminal;
    /// piped input is read line by line like everything else.
    pub fn stdio() -> Self {
        let stdin = io::stdin();
        let hide_secrets = stdin.is_terminal();
        Self {
            reader: stdin.lock(),
            writer: io::stdout(),
            hide_secrets,
        }
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Console over arbitrary streams, echoing secrets like any other input
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            hide_secrets: false,
        }
    }

    /// Give back the writer, e.g. to inspect captured output
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Print a line
    pub fn say(&mut self, text: impl Display) -> PaysplitResult<()> {
        writeln!(self.writer, "{}", text)?;
        Ok(())
    }

    /// Print text without a trailing newline
    pub fn print(&mut self, text: impl Display) -> PaysplitResult<()> {
        write!(self.writer, "{}", text)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Read one line, without its line terminator
    ///
    /// End of input is reported as [`PaysplitError::InputClosed`].
    pub fn read_line(&mut self) -> PaysplitResult<String> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(PaysplitError::InputClosed);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Show a prompt and read the answer
    pub fn prompt(&mut self, prompt: &str) -> PaysplitResult<String> {
        self.print(prompt)?;
        self.read_line()
    }

    /// Show a prompt and read a password
    pub fn prompt_secret(&mut self, prompt: &str) -> PaysplitResult<SecretString> {
        if !self.hide_secrets {
            return self.prompt(prompt).map(SecretString::from);
        }

        self.writer.flush()?;
        rpassword::prompt_password(prompt)
            .map(SecretString::from)
            .map_err(|e| match e.kind() {
                io::ErrorKind::UnexpectedEof => PaysplitError::InputClosed,
                _ => PaysplitError::Io(format!("Failed to read password: {}", e)),
            })
    }

    /// Prompt until `parse` accepts the answer, printing each rejection
    pub fn prompt_until<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> PaysplitResult<T> {
        loop {
            let line = self.prompt(prompt)?;
            match parse(line.trim()) {
                Ok(value) => return Ok(value),
                Err(e) => self.say(e)?,
            }
        }
    }

    /// Prompt for a number greater than zero
    pub fn prompt_positive_amount(&mut self, prompt: &str) -> PaysplitResult<f64> {
        self.prompt_until(prompt, parse_positive_amount)
    }

    /// Prompt for an integer greater than zero
    pub fn prompt_positive_count(&mut self, prompt: &str) -> PaysplitResult<u32> {
        self.prompt_until(prompt, parse_positive_count)
    }
}

/// Parse a finite number greater than zero
pub fn parse_positive_amount(input: &str) -> Result<f64, InputError> {
    let value: f64 = input.trim().parse().map_err(|_| InputError::NotANumber)?;
    if !value.is_finite() {
        return Err(InputError::NotANumber);
    }
    if value <= 0.0 {
        return Err(InputError::NotPositive);
    }
    Ok(value)
}

/// Parse an integer greater than zero
pub fn parse_positive_count(input: &str) -> Result<u32, InputError> {
    let value: i64 = input.trim().parse().map_err(|_| InputError::NotAnInteger)?;
    if value <= 0 {
        return Err(InputError::NotPositiveInteger);
    }
    u32::try_from(value).map_err(|_| InputError::NotAnInteger)
}
