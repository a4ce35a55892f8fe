// File: src/commands/set_algebra.rs
//! Commands that combine several dictionaries. Every check runs before the result is
//! stored, so a failing command leaves the collection untouched.
use super::{write_joined, Args, EMPTY_MARKER};
use crate::core::collection::DictCollection;
use crate::core::dictionary::Dictionary;
use crate::core::set_ops;
use crate::error::{CommandError, CommandResult};
use std::io::Write;
use tracing::info;

/// `merge`, `subtract` and `symdiff` need at least two sources.
const MIN_SOURCES: i64 = 2;

/// Reads `<new> <count> <src>...`, computes the result with `combine` and stores it.
fn combine_into_new(
    args: &mut Args<'_>,
    dicts: &mut DictCollection,
    combine: impl FnOnce(&[&Dictionary]) -> Dictionary,
) -> CommandResult {
    let new_name = args.required()?;
    let count = args.count()?;
    if count < MIN_SOURCES {
        return Err(CommandError::InvalidCount);
    }
    let count = usize::try_from(count).map_err(|_| CommandError::InvalidCount)?;
    let source_names = args.take(count)?;

    let sources = dicts.get_all(&source_names)?;
    if dicts.contains(new_name) {
        return Err(CommandError::DictionaryExists);
    }
    let result = combine(&sources);
    let words = result.len();
    dicts.insert_new(new_name, result)?;
    info!(name = %new_name, sources = ?source_names, words = words, "dictionary computed");
    Ok(())
}

pub(super) fn merge(args: &mut Args<'_>, dicts: &mut DictCollection) -> CommandResult {
    combine_into_new(args, dicts, set_ops::merge)
}

pub(super) fn subtract(args: &mut Args<'_>, dicts: &mut DictCollection) -> CommandResult {
    combine_into_new(args, dicts, |sources| match sources.split_first() {
        Some((first, others)) => set_ops::subtract(first, others),
        None => Dictionary::new(),
    })
}

pub(super) fn symdiff(args: &mut Args<'_>, dicts: &mut DictCollection) -> CommandResult {
    combine_into_new(args, dicts, set_ops::symdiff)
}

pub(super) fn find_common(args: &mut Args<'_>, dicts: &DictCollection, out: &mut dyn Write) -> CommandResult {
    let dict_name = args.required()?;
    let count = args.count()?;
    if count < 1 {
        return Err(CommandError::InvalidCount);
    }
    let dict = dicts
        .get(dict_name)
        .map_err(|_| CommandError::WordsNotFound)?;
    let count = usize::try_from(count).map_err(|_| CommandError::InvalidCount)?;
    let words = args.take(count)?;

    let common = set_ops::common_translations(dict, &words).ok_or(CommandError::WordsNotFound)?;
    if common.is_empty() {
        writeln!(out, "{}", EMPTY_MARKER)?;
    } else {
        write_joined(out, &common)?;
    }
    Ok(())
}
