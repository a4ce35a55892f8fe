// File: src/core/set_ops.rs
//! Set algebra over whole dictionaries. All functions are pure: they borrow their sources
//! and build a fresh result, so a caller can validate everything before committing.

use crate::core::dictionary::Dictionary;
use crate::core::types::TranslationSet;
use std::collections::BTreeMap;

/// Union of all sources. A word present in several sources gets the union of their
/// translation sets.
pub fn merge(sources: &[&Dictionary]) -> Dictionary {
    let mut result = Dictionary::new();
    for source in sources {
        for (word, translations) in *source {
            result.merge_word(word, translations);
        }
    }
    result
}

/// Words of the first source that appear in none of the others, with the first source's
/// translations unchanged.
pub fn subtract(first: &Dictionary, others: &[&Dictionary]) -> Dictionary {
    let mut result = Dictionary::new();
    for (word, translations) in first {
        if others.iter().all(|other| !other.contains_word(word)) {
            result.insert_word(word.clone(), translations.clone());
        }
    }
    result
}

/// Words that occur in exactly one source. Listing the same dictionary twice counts as
/// two occurrences.
pub fn symdiff(sources: &[&Dictionary]) -> Dictionary {
    let mut occurrences: BTreeMap<&str, (usize, &TranslationSet)> = BTreeMap::new();
    for source in sources {
        for (word, translations) in *source {
            occurrences
                .entry(word.as_str())
                .and_modify(|(count, _)| *count += 1)
                .or_insert((1, translations));
        }
    }

    let mut result = Dictionary::new();
    for (word, (count, translations)) in occurrences {
        if count == 1 {
            result.insert_word(word.to_string(), translations.clone());
        }
    }
    result
}

/// Intersection of the translation sets of `words`, folded left to right.
/// Returns `None` when `words` is empty or any word is missing from `dict`.
pub fn common_translations<S: AsRef<str>>(dict: &Dictionary, words: &[S]) -> Option<TranslationSet> {
    let (first, rest) = words.split_first()?;
    let mut common = dict.translations(first.as_ref())?.clone();
    for word in rest {
        let current = dict.translations(word.as_ref())?;
        common.retain(|t| current.contains(t));
    }
    Some(common)
}
