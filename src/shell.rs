//! Interactive front end: reads start/end lines in pairs and prints the
//! number of days between them.
//!
//! The shell is generic over its streams so the binary can drive it with
//! stdin/stdout and tests can drive it with in-memory buffers.

use std::io::{self, BufRead, Read, Write};

use crate::consts::{BANNER, MAX_LINE_BYTES, PROMPT, RESULT_RULE, RULE};
use crate::{DateRange, Elapsed, ValidationError};

/// What to do after a pair of inputs is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Print the error and end the session
    Exit,
    /// Print the error and wait for the next pair
    #[default]
    Reprompt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Banner, prompts and framed results for a person at a terminal
    #[default]
    Text,
    /// One JSON object per line, no banner or prompts
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellConfig {
    pub on_error: ErrorPolicy,
    pub format: OutputFormat,
    pub banner: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            on_error: ErrorPolicy::default(),
            format: OutputFormat::default(),
            banner: true,
        }
    }
}

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The input stream closed
    EndOfInput,
    /// A pair was rejected under `ErrorPolicy::Exit`
    Rejected(ValidationError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub computed: usize,
    pub rejected: usize,
    pub ended: SessionEnd,
}

#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("could not encode result: {0}")]
    Json(#[from] serde_json::Error),
}

pub struct Shell<R, W> {
    input: R,
    output: W,
    config: ShellConfig,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub const fn new(input: R, output: W, config: ShellConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Runs until the input closes or, under `ErrorPolicy::Exit`, until the
    /// first rejected pair.
    ///
    /// # Errors
    /// Returns `ShellError` when reading or writing the streams fails.
    pub fn run(mut self) -> Result<SessionSummary, ShellError> {
        if self.config.banner && self.config.format == OutputFormat::Text {
            self.print_banner()?;
        }

        let mut computed = 0;
        let mut rejected = 0;

        let ended = loop {
            let Some(start) = self.read_date()? else {
                break SessionEnd::EndOfInput;
            };
            let Some(end) = self.read_date()? else {
                tracing::debug!(start = %start, "input closed before an end date was given");
                break SessionEnd::EndOfInput;
            };

            match DateRange::parse(&start, &end) {
                Ok(range) => {
                    let elapsed = range.elapsed();
                    tracing::debug!(range = %range, days = elapsed.days, "computed elapsed days");
                    self.print_elapsed(&elapsed)?;
                    computed += 1;
                }
                Err(err) => {
                    tracing::info!(error = %err, start = %start, end = %end, "rejected date pair");
                    self.print_error(&err)?;
                    rejected += 1;
                    if self.config.on_error == ErrorPolicy::Exit {
                        break SessionEnd::Rejected(err);
                    }
                }
            }
        };

        tracing::info!(computed, rejected, ?ended, "session ended");
        Ok(SessionSummary {
            computed,
            rejected,
            ended,
        })
    }

    fn print_banner(&mut self) -> io::Result<()> {
        writeln!(self.output, "{RULE}")?;
        for line in BANNER {
            writeln!(self.output, "{line}")?;
        }
        writeln!(self.output, "{RULE}")
    }

    /// Prompts (in text mode) and reads one line without its terminator.
    /// Returns `None` once the input is exhausted.
    ///
    /// Lines are capped at `MAX_LINE_BYTES` and decoded lossily, so oversized
    /// or non-UTF-8 input reaches the validator and is rejected there.
    fn read_date(&mut self) -> io::Result<Option<String>> {
        if self.config.format == OutputFormat::Text {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;
        }

        let mut buf = Vec::new();
        let read = (&mut self.input)
            .take(MAX_LINE_BYTES)
            .read_until(b'\n', &mut buf)?;
        if read == 0 {
            return Ok(None);
        }

        let line = match buf.strip_suffix(b"\n") {
            Some(line) => line,
            None => {
                // Drop the rest of an overlong line so it is not read as the next input
                if read as u64 == MAX_LINE_BYTES {
                    self.input.skip_until(b'\n')?;
                }
                &buf
            }
        };
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        Ok(Some(String::from_utf8_lossy(line).into_owned()))
    }

    fn print_elapsed(&mut self, elapsed: &Elapsed) -> Result<(), ShellError> {
        match self.config.format {
            OutputFormat::Text => {
                writeln!(self.output, "{RESULT_RULE}")?;
                writeln!(self.output, "{} days", elapsed.days)?;
                writeln!(self.output, "{RESULT_RULE}")?;
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.output, elapsed)?;
                writeln!(self.output)?;
            }
        }
        Ok(())
    }

    fn print_error(&mut self, err: &ValidationError) -> Result<(), ShellError> {
        match self.config.format {
            OutputFormat::Text => writeln!(self.output, "{err}")?,
            OutputFormat::Json => {
                serde_json::to_writer(
                    &mut self.output,
                    &serde_json::json!({ "error": err.to_string() }),
                )?;
                writeln!(self.output)?;
            }
        }
        Ok(())
    }
}
