use serde::{Deserialize, Serialize};

/// Extension the engine appends to every save it writes.
pub const ENGINE_SAVE_EXTENSION: &str = ".esav";
/// Conventional extension for front-end state files.
pub const FRONTEND_SAVE_EXTENSION: &str = ".fsav";
pub const FRONTEND_STATE_SCHEMA: &str = "frontend-state.v1";
pub const DEFAULT_SAVE_DIR_NAME: &str = "Saves";

/// Front-end-only metadata stored next to an engine save.
///
/// `savename` is the exact file name used inside the save directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontendState {
    pub schema_version: String,
    pub savename: String,
}

impl FrontendState {
    pub fn new(savename: impl Into<String>) -> Self {
        Self {
            schema_version: FRONTEND_STATE_SCHEMA.to_string(),
            savename: savename.into(),
        }
    }

    /// Builds the state for `save_name` using the `.fsav` file convention.
    pub fn for_save(save_name: &str) -> Self {
        Self::new(format!("{}{}", save_name, FRONTEND_SAVE_EXTENSION))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderKind {
    Explore,
    Expand,
    Build,
    Attack,
    Defend,
}

/// An instruction handed to the engine for resolution at end of turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnOrder {
    pub repeating: bool,
    pub target_id: i32,
    pub kind: OrderKind,
}
