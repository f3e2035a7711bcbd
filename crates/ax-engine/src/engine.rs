use std::path::Path;

use ax_core::{Ai4xError, TurnOrder};

/// The command surface of the simulation engine.
///
/// `save_path` is the absolute save path without the `.esav` extension; the engine adds
/// it. Both operations return the engine status unchanged: `0` is success, anything else
/// is an engine-defined failure code. `Err` means the engine could not be reached.
pub trait GameEngine {
    fn create_new_game(&self, save_path: &Path) -> Result<i32, Ai4xError>;

    fn advance_turn(&self, save_path: &Path, orders: &[TurnOrder]) -> Result<i32, Ai4xError>;
}

impl<E: GameEngine + ?Sized> GameEngine for &E {
    fn create_new_game(&self, save_path: &Path) -> Result<i32, Ai4xError> {
        (**self).create_new_game(save_path)
    }

    fn advance_turn(&self, save_path: &Path, orders: &[TurnOrder]) -> Result<i32, Ai4xError> {
        (**self).advance_turn(save_path, orders)
    }
}
