// File: src/commands/args.rs
use crate::error::{CommandError, CommandResult};
use std::str::SplitWhitespace;

/// The argument tokens following a command keyword on one input line.
///
/// Handlers pull only what they need; whatever is left on the line is dropped by the shell.
pub struct Args<'a> {
    command: &'static str,
    tokens: SplitWhitespace<'a>,
}

impl<'a> Args<'a> {
    pub fn new(command: &'static str, rest: &'a str) -> Self {
        Self {
            command,
            tokens: rest.split_whitespace(),
        }
    }

    /// Next token, or `invalid arguments for <cmd>` if the line is exhausted.
    pub fn required(&mut self) -> CommandResult<&'a str> {
        self.tokens
            .next()
            .ok_or(CommandError::InvalidArguments(self.command))
    }

    /// A signed integer count. Anything that does not parse is an argument error; range
    /// checks are left to the caller.
    pub fn count(&mut self) -> CommandResult<i64> {
        self.required()?
            .parse()
            .map_err(|_| CommandError::InvalidArguments(self.command))
    }

    /// Exactly `n` more tokens, or `invalid count` if the line runs out first.
    pub fn take(&mut self, n: usize) -> CommandResult<Vec<&'a str>> {
        let taken: Vec<&'a str> = self.tokens.by_ref().take(n).collect();
        if taken.len() == n {
            Ok(taken)
        } else {
            Err(CommandError::InvalidCount)
        }
    }

    /// All remaining tokens.
    pub fn rest(&mut self) -> Vec<&'a str> {
        self.tokens.by_ref().collect()
    }
}
