// File: src/error.rs
//! Error types. The `Display` text of [`CommandError`] is exactly what the shell prints
//! inside `<ERROR: ...>`.

use std::io;
use thiserror::Error;

/// A non-fatal failure reported by a command handler. No handler mutates the collection
/// before returning one of these.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Required tokens are missing or malformed.
    #[error("invalid arguments for {0}")]
    InvalidArguments(&'static str),

    /// The count of a multi-dictionary command is too small or not backed by enough tokens.
    #[error("invalid count")]
    InvalidCount,

    #[error("dictionary already exists")]
    DictionaryExists,

    #[error("dictionary not found")]
    DictionaryNotFound,

    #[error("word already exists")]
    WordExists,

    #[error("no translations provided")]
    NoTranslations,

    /// Either the dictionary or the word is missing.
    #[error("dictionary or word not found")]
    WordNotFound,

    /// Any of dictionary, word or translation is missing.
    #[error("dictionary, word or translation not found")]
    TranslationNotFound,

    /// The dictionary or one of several words is missing.
    #[error("dictionary or word(s) not found")]
    WordsNotFound,

    #[error("dictionary not found or file error")]
    SaveFailed,

    #[error("file not found or invalid format")]
    LoadFailed,

    /// Writing command output failed. The shell treats this as fatal.
    #[error("output error: {0}")]
    Output(#[from] io::Error),
}

/// A fatal error that ends the program.
#[derive(Debug, Error)]
pub enum ShellError {
    /// The startup dictionary file could not be opened or read.
    #[error("file not found or invalid format")]
    Bootstrap(#[source] io::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type CommandResult<T = ()> = std::result::Result<T, CommandError>;

pub type Result<T> = std::result::Result<T, ShellError>;
