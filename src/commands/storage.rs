// File: src/commands/storage.rs
use super::Args;
use crate::core::collection::DictCollection;
use crate::error::{CommandError, CommandResult};
use crate::persistence::{load_from_disk, save_to_disk};
use std::path::Path;
use tracing::warn;

pub(super) fn save(args: &mut Args<'_>, dicts: &DictCollection) -> CommandResult {
    let dict_name = args.required()?;
    let file_name = args.required()?;
    let dict = dicts.get(dict_name).map_err(|_| CommandError::SaveFailed)?;
    save_to_disk(dict, Path::new(file_name)).map_err(|e| {
        warn!(file = file_name, error = %e, "save failed");
        CommandError::SaveFailed
    })
}

pub(super) fn load(args: &mut Args<'_>, dicts: &mut DictCollection) -> CommandResult {
    let dict_name = args.required()?;
    let file_name = args.required()?;
    if dicts.contains(dict_name) {
        return Err(CommandError::DictionaryExists);
    }
    let dict = load_from_disk(Path::new(file_name)).map_err(|e| {
        warn!(file = file_name, error = %e, "load failed");
        CommandError::LoadFailed
    })?;
    if dict.is_empty() {
        return Err(CommandError::LoadFailed);
    }
    dicts.insert_new(dict_name, dict)
}
