// File: src/persistence.rs
//! Plain-text dictionary files: one word per line followed by its translations,
//! all separated by whitespace.
use crate::core::collection::DictCollection;
use crate::core::dictionary::Dictionary;
use crate::core::types::TranslationSet;
use crate::error::{Result, ShellError};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{info, warn};

/// Name of the dictionary created from the file given on the command line.
pub const DEFAULT_DICT_NAME: &str = "default";

/// Reads a dictionary from text. Lines without at least one translation are skipped;
/// when a word is repeated the last line wins.
pub fn decode<R: BufRead>(reader: R) -> io::Result<Dictionary> {
    let mut dict = Dictionary::new();
    for line in reader.lines() {
        let line = line?;
        let mut tokens = line.split_whitespace();
        let Some(word) = tokens.next() else {
            continue;
        };
        let translations: TranslationSet = tokens.map(str::to_string).collect();
        if translations.is_empty() {
            continue;
        }
        dict.remove_word(word);
        dict.insert_word(word.to_string(), translations);
    }
    Ok(dict)
}

/// Writes `word t1 t2 ...` lines in lexicographic word order.
pub fn encode<W: Write>(dict: &Dictionary, writer: &mut W) -> io::Result<()> {
    for (word, translations) in dict {
        write!(writer, "{}", word)?;
        for translation in translations {
            write!(writer, " {}", translation)?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Opens `path` for writing, truncating any previous contents. Symlinks are written
/// through and an existing file keeps its permissions.
pub fn save_to_disk(dict: &Dictionary, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    encode(dict, &mut writer)?;
    writer.flush()?;
    info!(path = %path.display(), words = dict.len(), "dictionary saved");
    Ok(())
}

pub fn load_from_disk(path: &Path) -> io::Result<Dictionary> {
    let file = File::open(path)?;
    let dict = decode(BufReader::new(file))?;
    info!(path = %path.display(), words = dict.len(), "dictionary read");
    Ok(dict)
}

/// Startup load: the file's contents become the `default` dictionary. An unreadable file
/// is fatal, an empty one is silently ignored.
pub fn load_file(path: &Path, dicts: &mut DictCollection) -> Result<()> {
    let dict = load_from_disk(path).map_err(|e| {
        warn!(path = %path.display(), error = %e, "startup dictionary unreadable");
        ShellError::Bootstrap(e)
    })?;
    if dict.is_empty() {
        info!(path = %path.display(), "startup dictionary is empty, nothing loaded");
        return Ok(());
    }
    if dicts.insert_new(DEFAULT_DICT_NAME, dict).is_err() {
        warn!("dictionary '{}' already present, startup file ignored", DEFAULT_DICT_NAME);
    }
    Ok(())
}
