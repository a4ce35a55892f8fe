// File: src/core/collection.rs
use crate::core::dictionary::Dictionary;
use crate::error::{CommandError, CommandResult};
use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};

/// Every dictionary the shell knows about, keyed by unique name.
///
/// Lookups return `Result` so handlers can propagate a missing dictionary with `?` and
/// remap it to their own wording where the protocol asks for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DictCollection {
    dicts: BTreeMap<String, Dictionary>,
}

impl DictCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.dicts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dicts.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.dicts.contains_key(name)
    }

    /// Dictionary names in lexicographic order.
    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.dicts.keys()
    }

    pub fn get(&self, name: &str) -> CommandResult<&Dictionary> {
        self.dicts.get(name).ok_or(CommandError::DictionaryNotFound)
    }

    pub fn get_mut(&mut self, name: &str) -> CommandResult<&mut Dictionary> {
        self.dicts.get_mut(name).ok_or(CommandError::DictionaryNotFound)
    }

    /// Resolves several names at once, failing on the first one that is missing.
    pub fn get_all<S: AsRef<str>>(&self, names: &[S]) -> CommandResult<Vec<&Dictionary>> {
        names.iter().map(|name| self.get(name.as_ref())).collect()
    }

    /// Stores `dict` under a name that must not be taken yet.
    pub fn insert_new(&mut self, name: &str, dict: Dictionary) -> CommandResult {
        match self.dicts.entry(name.to_string()) {
            btree_map::Entry::Occupied(_) => Err(CommandError::DictionaryExists),
            btree_map::Entry::Vacant(slot) => {
                slot.insert(dict);
                Ok(())
            }
        }
    }

    pub fn create(&mut self, name: &str) -> CommandResult {
        self.insert_new(name, Dictionary::new())
    }

    pub fn remove(&mut self, name: &str) -> CommandResult<Dictionary> {
        self.dicts.remove(name).ok_or(CommandError::DictionaryNotFound)
    }
}
