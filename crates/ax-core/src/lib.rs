pub mod error;
pub mod names;
pub mod types;

pub use error::Ai4xError;
pub use names::validate_save_name;
pub use types::*;
