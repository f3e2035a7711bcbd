use std::fmt::Display;

use ax_core::Ai4xError;

fn map_error(code: &'static str, error: impl Display) -> Ai4xError {
    Ai4xError::new(code, error.to_string())
}

pub fn map_save_dir_cwd(error: std::io::Error) -> Ai4xError {
    map_error("SAVE_DIR_CWD", error)
}

pub fn map_save_dir_create(error: std::io::Error) -> Ai4xError {
    map_error("SAVE_DIR_CREATE", error)
}

pub fn map_save_dir_list(error: walkdir::Error) -> Ai4xError {
    map_error("SAVE_DIR_LIST", error)
}

pub fn map_state_read(error: std::io::Error) -> Ai4xError {
    map_error("STATE_READ", error)
}

pub fn map_state_write(error: std::io::Error) -> Ai4xError {
    map_error("STATE_WRITE", error)
}

pub fn map_state_invalid(error: serde_json::Error) -> Ai4xError {
    map_error("STATE_INVALID", error)
}
