use std::fs;

use ax_core::{validate_save_name, Ai4xError, FrontendState, FRONTEND_STATE_SCHEMA};

use crate::{map_state_invalid, map_state_read, map_state_write, SaveLocation};

/// Writes `state` to `<save directory>/<state.savename>`, replacing any previous file.
///
/// Returns `0` on success to line up with the engine's status convention.
pub fn save_frontend_state(
    location: &SaveLocation,
    state: &FrontendState,
) -> Result<i32, Ai4xError> {
    let path = location.path_for(&state.savename)?;
    let payload = serde_json::to_string(state).map_err(map_state_invalid)?;
    fs::write(&path, payload).map_err(map_state_write)?;
    log::info!("saved front-end state to {}", path.display());
    Ok(0)
}

/// Reads the front-end state stored under the exact file name `file_name`.
pub fn load_frontend_state(
    location: &SaveLocation,
    file_name: &str,
) -> Result<FrontendState, Ai4xError> {
    validate_save_name(file_name)?;
    let path = location.directory()?.join(file_name);
    if !path.exists() {
        return Err(Ai4xError::new(
            "STATE_NOT_FOUND",
            format!("Front-end state file does not exist: {}", path.display()),
        ));
    }

    let raw = fs::read_to_string(&path).map_err(map_state_read)?;
    let state: FrontendState = serde_json::from_str(&raw).map_err(map_state_invalid)?;

    if state.schema_version != FRONTEND_STATE_SCHEMA {
        return Err(Ai4xError::new(
            "STATE_SCHEMA",
            format!("Unsupported front-end state schema: {}", state.schema_version),
        ));
    }

    Ok(state)
}
