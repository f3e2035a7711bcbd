//! Bridge between the front-end and the external ai4x simulation engine.

mod engine;
mod error_map;
mod marshaller;
mod process;
mod settings;

pub use engine::GameEngine;
pub use error_map::{
    map_engine_orders, map_engine_settings_invalid, map_engine_settings_read, map_engine_spawn,
};
pub use marshaller::EngineMarshaller;
pub use process::{ProcessEngine, ENGINE_EXECUTABLE_NAME};
pub use settings::{load_engine_settings, EngineSettings, DEFAULT_SETTINGS_PATH};
