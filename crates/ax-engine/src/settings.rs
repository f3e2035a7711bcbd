use std::fs;
use std::path::{Path, PathBuf};

use ax_core::Ai4xError;
use serde::Deserialize;

use crate::{map_engine_settings_invalid, map_engine_settings_read};

/// Where the engine location is read from, relative to the working directory.
pub const DEFAULT_SETTINGS_PATH: &str = ".vscode/settings.json";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEngineSettings {
    publish_output_directory: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSettings {
    /// Directory holding the published engine build.
    pub publish_output_directory: PathBuf,
}

/// Loads the engine settings file. Any failure here is fatal for engine commands.
///
/// The file may carry unrelated keys; only `publishOutputDirectory` is read, with a
/// leading `~` expanded to the user's home directory.
pub fn load_engine_settings(path: &Path) -> Result<EngineSettings, Ai4xError> {
    if !path.exists() {
        return Err(Ai4xError::new(
            "ENGINE_SETTINGS_NOT_FOUND",
            format!("Engine settings file does not exist: {}", path.display()),
        ));
    }

    let raw = fs::read_to_string(path).map_err(map_engine_settings_read)?;
    let settings: RawEngineSettings =
        serde_json::from_str(&raw).map_err(map_engine_settings_invalid)?;

    let publish_output_directory =
        expand_home(&settings.publish_output_directory, dirs::home_dir().as_deref());
    log::debug!(
        "engine publish directory resolved to {}",
        publish_output_directory.display()
    );
    Ok(EngineSettings {
        publish_output_directory,
    })
}

fn expand_home(raw: &str, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return PathBuf::from(raw);
    };
    if raw == "~" {
        return home.to_path_buf();
    }
    match raw
        .strip_prefix("~/")
        .or_else(|| raw.strip_prefix("~\\"))
    {
        Some(rest) => home.join(rest),
        None => PathBuf::from(raw),
    }
}
