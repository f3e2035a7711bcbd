use ax_core::{Ai4xError, ENGINE_SAVE_EXTENSION};
use walkdir::WalkDir;

use crate::{map_save_dir_list, SaveLocation};

/// Lists engine save file names (`<name>.esav`) in the save directory.
///
/// Engine saves are what the game needs to run, so front-end state files play no part
/// here. Entries come back in directory iteration order.
pub fn list_saves(location: &SaveLocation) -> Result<Vec<String>, Ai4xError> {
    let directory = location.directory()?;
    let mut saves = Vec::new();
    for entry in WalkDir::new(&directory).min_depth(1).max_depth(1) {
        let entry = entry.map_err(map_save_dir_list)?;
        let file_name = entry.file_name().to_string_lossy();
        if file_name.ends_with(ENGINE_SAVE_EXTENSION) {
            saves.push(file_name.into_owned());
        }
    }
    log::debug!("found {} saves in {}", saves.len(), directory.display());
    Ok(saves)
}
