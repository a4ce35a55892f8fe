// File: src/core/dictionary.rs
use crate::core::types::{DictStats, TranslationSet, Word};
use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};

/// A single translation dictionary: every word maps to a non-empty set of translations.
///
/// Iteration is in lexicographic word order, which is the output order of every listing
/// and of the text file format. Serializes as a plain map; deserializing drops words whose
/// translation set is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<Word, TranslationSet>",
    into = "BTreeMap<Word, TranslationSet>"
)]
pub struct Dictionary {
    entries: BTreeMap<Word, TranslationSet>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_word(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    pub fn translations(&self, word: &str) -> Option<&TranslationSet> {
        self.entries.get(word)
    }

    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.entries.keys()
    }

    /// Inserts a new word. Returns `false` without touching the dictionary when the word is
    /// already present or the translation set is empty.
    pub fn insert_word(&mut self, word: Word, translations: TranslationSet) -> bool {
        if translations.is_empty() {
            return false;
        }
        match self.entries.entry(word) {
            btree_map::Entry::Occupied(_) => false,
            btree_map::Entry::Vacant(slot) => {
                slot.insert(translations);
                true
            }
        }
    }

    /// Adds one translation to an existing word. Returns `false` if the word is unknown.
    pub fn add_translation(&mut self, word: &str, translation: &str) -> bool {
        match self.entries.get_mut(word) {
            Some(set) => {
                set.insert(translation.to_string());
                true
            }
            None => false,
        }
    }

    /// Removes one translation. A word whose last translation is removed is dropped.
    /// Returns `false` if either the word or the translation is missing.
    pub fn remove_translation(&mut self, word: &str, translation: &str) -> bool {
        let Some(set) = self.entries.get_mut(word) else {
            return false;
        };
        if !set.remove(translation) {
            return false;
        }
        if set.is_empty() {
            self.entries.remove(word);
        }
        true
    }

    pub fn remove_word(&mut self, word: &str) -> bool {
        self.entries.remove(word).is_some()
    }

    /// Unions `translations` into the set for `word`, creating the word if needed.
    pub(crate) fn merge_word<'a, I>(&mut self, word: &str, translations: I)
    where
        I: IntoIterator<Item = &'a String>,
    {
        let mut incoming = translations.into_iter().cloned().peekable();
        if incoming.peek().is_none() {
            return;
        }
        self.entries
            .entry(word.to_string())
            .or_default()
            .extend(incoming);
    }

    pub fn stats(&self) -> DictStats {
        DictStats {
            words: self.entries.len(),
            translations: self.entries.values().map(TranslationSet::len).sum(),
        }
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = (&'a Word, &'a TranslationSet);
    type IntoIter = btree_map::Iter<'a, Word, TranslationSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Builds a dictionary from `(word, translations)` pairs, skipping empty sets.
/// A repeated word keeps the union of its translations.
impl FromIterator<(Word, TranslationSet)> for Dictionary {
    fn from_iter<T: IntoIterator<Item = (Word, TranslationSet)>>(iter: T) -> Self {
        let mut dict = Dictionary::new();
        for (word, translations) in iter {
            dict.merge_word(&word, &translations);
        }
        dict
    }
}

impl From<BTreeMap<Word, TranslationSet>> for Dictionary {
    fn from(entries: BTreeMap<Word, TranslationSet>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<Dictionary> for BTreeMap<Word, TranslationSet> {
    fn from(dict: Dictionary) -> Self {
        dict.entries
    }
}
