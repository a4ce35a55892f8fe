// File: src/commands/mod.rs
//! The sixteen shell commands. Dispatch is a plain enum: the shell parses the keyword with
//! [`str::parse`] and calls [`Command::execute`] with the rest of the line.
pub mod args;
mod crud;
pub mod help;
mod set_algebra;
mod storage;

use crate::core::collection::DictCollection;
use crate::error::CommandResult;
pub use args::Args;
use std::io::Write;

/// Marker printed for an empty listing.
pub const EMPTY_MARKER: &str = "<EMPTY>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    CreateDict,
    DeleteDict,
    ListDicts,
    AddWord,
    AddTranslation,
    RemoveTranslation,
    DeleteWord,
    FindTranslations,
    ListWords,
    Merge,
    FindCommon,
    Save,
    Load,
    Stat,
    Subtract,
    Symdiff,
}

impl Command {
    /// All commands in help-table order.
    pub const ALL: [Command; 16] = [
        Command::CreateDict,
        Command::DeleteDict,
        Command::ListDicts,
        Command::AddWord,
        Command::AddTranslation,
        Command::RemoveTranslation,
        Command::DeleteWord,
        Command::FindTranslations,
        Command::ListWords,
        Command::Merge,
        Command::FindCommon,
        Command::Save,
        Command::Load,
        Command::Stat,
        Command::Subtract,
        Command::Symdiff,
    ];

    /// The keyword typed by the user.
    pub fn name(self) -> &'static str {
        match self {
            Command::CreateDict => "createdict",
            Command::DeleteDict => "deletedict",
            Command::ListDicts => "listdicts",
            Command::AddWord => "addword",
            Command::AddTranslation => "addtranslation",
            Command::RemoveTranslation => "removetranslation",
            Command::DeleteWord => "deleteword",
            Command::FindTranslations => "findtranslations",
            Command::ListWords => "listwords",
            Command::Merge => "merge",
            Command::FindCommon => "findcommon",
            Command::Save => "save",
            Command::Load => "load",
            Command::Stat => "stat",
            Command::Subtract => "subtract",
            Command::Symdiff => "symdiff",
        }
    }

    /// Runs the command against `dicts`, consuming arguments from `rest` (the remainder
    /// of the input line) and writing any listing to `out`.
    pub fn execute(self, rest: &str, dicts: &mut DictCollection, out: &mut dyn Write) -> CommandResult {
        let mut args = Args::new(self.name(), rest);
        match self {
            Command::CreateDict => crud::create_dict(&mut args, dicts),
            Command::DeleteDict => crud::delete_dict(&mut args, dicts),
            Command::ListDicts => crud::list_dicts(dicts, out),
            Command::AddWord => crud::add_word(&mut args, dicts),
            Command::AddTranslation => crud::add_translation(&mut args, dicts),
            Command::RemoveTranslation => crud::remove_translation(&mut args, dicts),
            Command::DeleteWord => crud::delete_word(&mut args, dicts),
            Command::FindTranslations => crud::find_translations(&mut args, dicts, out),
            Command::ListWords => crud::list_words(&mut args, dicts, out),
            Command::Stat => crud::stat(&mut args, dicts, out),
            Command::Merge => set_algebra::merge(&mut args, dicts),
            Command::Subtract => set_algebra::subtract(&mut args, dicts),
            Command::Symdiff => set_algebra::symdiff(&mut args, dicts),
            Command::FindCommon => set_algebra::find_common(&mut args, dicts, out),
            Command::Save => storage::save(&mut args, dicts),
            Command::Load => storage::load(&mut args, dicts),
        }
    }
}

/// Returned by `str::parse` for a keyword that names no command.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown command: {0}")]
pub struct UnknownCommand(pub String);

impl std::str::FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::ALL
            .into_iter()
            .find(|cmd| cmd.name() == s)
            .ok_or_else(|| UnknownCommand(s.to_string()))
    }
}

/// Writes tokens separated by single spaces and ends the line.
pub(crate) fn write_joined<'a, I>(out: &mut dyn Write, tokens: I) -> std::io::Result<()>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut first = true;
    for token in tokens {
        if !first {
            out.write_all(b" ")?;
        }
        out.write_all(token.as_bytes())?;
        first = false;
    }
    writeln!(out)
}
