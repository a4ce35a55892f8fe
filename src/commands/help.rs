// File: src/commands/help.rs
use super::Command;
use std::io::{self, Write};

const NUMBER_WIDTH: usize = 4;
const USAGE_WIDTH: usize = 42;

impl Command {
    /// Argument synopsis shown in the help table.
    pub fn usage(self) -> &'static str {
        match self {
            Command::CreateDict => "createdict <name>",
            Command::DeleteDict => "deletedict <name>",
            Command::ListDicts => "listdicts",
            Command::AddWord => "addword <dict> <word> <trans...>",
            Command::AddTranslation => "addtranslation <dict> <word> <trans>",
            Command::RemoveTranslation => "removetranslation <dict> <word> <trans>",
            Command::DeleteWord => "deleteword <dict> <word>",
            Command::FindTranslations => "findtranslations <dict> <word>",
            Command::ListWords => "listwords <dict>",
            Command::Merge => "merge <new> <count> <dicts...>",
            Command::FindCommon => "findcommon <dict> <count> <words...>",
            Command::Save => "save <dict> <file>",
            Command::Load => "load <dict> <file>",
            Command::Stat => "stat <dict>",
            Command::Subtract => "subtract <new> <count> <dicts...>",
            Command::Symdiff => "symdiff <new> <count> <dicts...>",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Command::CreateDict => "create a new dictionary",
            Command::DeleteDict => "delete a dictionary",
            Command::ListDicts => "list all dictionaries",
            Command::AddWord => "add word with translations",
            Command::AddTranslation => "add translation to word",
            Command::RemoveTranslation => "remove translation",
            Command::DeleteWord => "delete word",
            Command::FindTranslations => "find word translations",
            Command::ListWords => "list all words in dictionary",
            Command::Merge => "merge dictionaries",
            Command::FindCommon => "find common translations",
            Command::Save => "save dictionary to file",
            Command::Load => "load dictionary from file",
            Command::Stat => "show dictionary statistics",
            Command::Subtract => "dictionary subtraction",
            Command::Symdiff => "symmetric difference",
        }
    }
}

/// Prints the numbered command reference.
pub fn print_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Available commands:")?;
    writeln!(out)?;
    for (i, cmd) in Command::ALL.iter().enumerate() {
        let number = format!("{}.", i + 1);
        writeln!(
            out,
            "{:<nw$}{:<uw$}{}",
            number,
            cmd.usage(),
            cmd.summary(),
            nw = NUMBER_WIDTH,
            uw = USAGE_WIDTH
        )?;
    }
    Ok(())
}
