// File: src/commands/crud.rs
//! Single-dictionary commands: create/delete dictionaries, edit words and translations,
//! listings and statistics.
use super::{write_joined, Args, EMPTY_MARKER};
use crate::core::collection::DictCollection;
use crate::core::types::TranslationSet;
use crate::error::{CommandError, CommandResult};
use std::io::Write;
use tracing::info;

pub(super) fn create_dict(args: &mut Args<'_>, dicts: &mut DictCollection) -> CommandResult {
    let name = args.required()?;
    dicts.create(name)?;
    info!(name = %name, "dictionary created");
    Ok(())
}

pub(super) fn delete_dict(args: &mut Args<'_>, dicts: &mut DictCollection) -> CommandResult {
    let name = args.required()?;
    dicts.remove(name)?;
    info!(name = %name, "dictionary deleted");
    Ok(())
}

pub(super) fn list_dicts(dicts: &DictCollection, out: &mut dyn Write) -> CommandResult {
    if dicts.is_empty() {
        writeln!(out, "{}", EMPTY_MARKER)?;
        return Ok(());
    }
    for name in dicts.names() {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}

pub(super) fn add_word(args: &mut Args<'_>, dicts: &mut DictCollection) -> CommandResult {
    let dict_name = args.required()?;
    let word = args.required()?;
    let dict = dicts.get_mut(dict_name)?;
    if dict.contains_word(word) {
        return Err(CommandError::WordExists);
    }
    let translations: TranslationSet = args.rest().into_iter().map(str::to_string).collect();
    if !dict.insert_word(word.to_string(), translations) {
        return Err(CommandError::NoTranslations);
    }
    Ok(())
}

pub(super) fn add_translation(args: &mut Args<'_>, dicts: &mut DictCollection) -> CommandResult {
    let dict_name = args.required()?;
    let word = args.required()?;
    let translation = args.required()?;
    let dict = dicts
        .get_mut(dict_name)
        .map_err(|_| CommandError::WordNotFound)?;
    if !dict.add_translation(word, translation) {
        return Err(CommandError::WordNotFound);
    }
    Ok(())
}

pub(super) fn remove_translation(args: &mut Args<'_>, dicts: &mut DictCollection) -> CommandResult {
    let dict_name = args.required()?;
    let word = args.required()?;
    let translation = args.required()?;
    let dict = dicts
        .get_mut(dict_name)
        .map_err(|_| CommandError::TranslationNotFound)?;
    if !dict.remove_translation(word, translation) {
        return Err(CommandError::TranslationNotFound);
    }
    Ok(())
}

pub(super) fn delete_word(args: &mut Args<'_>, dicts: &mut DictCollection) -> CommandResult {
    let dict_name = args.required()?;
    let word = args.required()?;
    let dict = dicts
        .get_mut(dict_name)
        .map_err(|_| CommandError::WordNotFound)?;
    if !dict.remove_word(word) {
        return Err(CommandError::WordNotFound);
    }
    Ok(())
}

pub(super) fn find_translations(
    args: &mut Args<'_>,
    dicts: &DictCollection,
    out: &mut dyn Write,
) -> CommandResult {
    let dict_name = args.required()?;
    let word = args.required()?;
    let translations = dicts
        .get(dict_name)
        .ok()
        .and_then(|dict| dict.translations(word))
        .ok_or(CommandError::WordNotFound)?;
    write_joined(out, translations)?;
    Ok(())
}

pub(super) fn list_words(args: &mut Args<'_>, dicts: &DictCollection, out: &mut dyn Write) -> CommandResult {
    let dict_name = args.required()?;
    let dict = dicts.get(dict_name)?;
    if dict.is_empty() {
        writeln!(out, "{}", EMPTY_MARKER)?;
        return Ok(());
    }
    for (word, translations) in dict {
        write!(out, "{} ", word)?;
        write_joined(out, translations)?;
    }
    Ok(())
}

pub(super) fn stat(args: &mut Args<'_>, dicts: &DictCollection, out: &mut dyn Write) -> CommandResult {
    let dict_name = args.required()?;
    let stats = dicts.get(dict_name)?.stats();
    writeln!(out, "Words: {}", stats.words)?;
    writeln!(out, "Translations: {}", stats.translations)?;
    writeln!(out, "Average translations per word: {}", format_average(stats.average()))?;
    Ok(())
}

/// Six significant digits with trailing zeros removed: `1.5`, `2`, `0.333333`.
fn format_average(value: f64) -> String {
    // The average reaches 1e6 only with a million translations per word, so the
    // exponent form is never needed.
    if value == 0.0 || !value.is_finite() {
        return "0".to_string();
    }
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (5 - magnitude).max(0) as usize;
    let formatted = format!("{:.*}", decimals, value);
    if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        formatted
    }
}
