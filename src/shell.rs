// File: src/shell.rs
use crate::commands::Command;
use crate::core::collection::DictCollection;
use crate::error::{CommandError, Result};
use std::io::{self, BufRead, Write};
use tracing::debug;

pub const INVALID_COMMAND: &str = "<INVALID COMMAND>";

/// The read-eval loop. Owns the dictionary collection for the lifetime of the session.
///
/// Each input line is one command: the first token picks the handler, which may consume
/// further tokens of the same line. Anything it leaves behind is discarded.
#[derive(Debug, Default)]
pub struct Shell {
    dicts: DictCollection,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dicts(&self) -> &DictCollection {
        &self.dicts
    }

    pub fn dicts_mut(&mut self) -> &mut DictCollection {
        &mut self.dicts
    }

    /// Processes every line of `input` until end of stream.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        self.run_with_prompt(input, out, || Ok(()))
    }

    /// Like [`Shell::run`], calling `prompt` before each line is read.
    ///
    /// Lines are read as raw bytes; invalid UTF-8 is replaced rather than ending the session.
    pub fn run_with_prompt<R, W, P>(&mut self, mut input: R, out: &mut W, mut prompt: P) -> Result<()>
    where
        R: BufRead,
        W: Write,
        P: FnMut() -> io::Result<()>,
    {
        let mut buf = Vec::new();
        loop {
            prompt()?;
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            self.execute_line(&line, out)?;
        }
        Ok(())
    }

    /// Executes one command line. Handler failures are printed and swallowed; only a
    /// failure to write output is returned.
    pub fn execute_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<()> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(());
        }
        let (keyword, rest) = line
            .split_once(char::is_whitespace)
            .unwrap_or((line, ""));

        match keyword.parse::<Command>() {
            Ok(command) => {
                debug!(command = command.name(), args = rest, "dispatch");
                match command.execute(rest, &mut self.dicts, &mut *out) {
                    Ok(()) => {}
                    Err(CommandError::Output(e)) => return Err(e.into()),
                    Err(e) => {
                        debug!(command = command.name(), error = %e, "command failed");
                        writeln!(out, "<ERROR: {}>", e)?;
                    }
                }
            }
            Err(e) => {
                debug!(error = %e, "rejected");
                writeln!(out, "{}", INVALID_COMMAND)?;
            }
        }
        out.flush()?;
        Ok(())
    }
}
