//! Save-directory handling for the ai4x front-end.
//!
//! Everything here goes through one [`SaveLocation`]: the catalog lists engine saves in
//! it and the state store reads and writes front-end records in it.

mod catalog;
mod error_map;
mod location;
mod state_store;

pub use catalog::list_saves;
pub use error_map::{
    map_save_dir_create, map_save_dir_cwd, map_save_dir_list, map_state_invalid, map_state_read,
    map_state_write,
};
pub use location::SaveLocation;
pub use state_store::{load_frontend_state, save_frontend_state};
