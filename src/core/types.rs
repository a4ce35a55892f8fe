// src/core/types.rs
use std::collections::BTreeSet;

/// A headword as typed by the user. Compared by exact byte equality.
pub type Word = String;

/// The translations of one word. Ordered so every listing is deterministic.
pub type TranslationSet = BTreeSet<String>;

/// Aggregate counts reported by the `stat` command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DictStats {
    pub words: usize,
    pub translations: usize,
}

impl DictStats {
    /// Average number of translations per word, or 0 for an empty dictionary.
    pub fn average(&self) -> f64 {
        if self.words == 0 {
            0.0
        } else {
            self.translations as f64 / self.words as f64
        }
    }
}
