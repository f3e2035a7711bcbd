use ax_core::{Ai4xError, TurnOrder};
use ax_saves::SaveLocation;

use crate::GameEngine;

/// Turns front-end commands into engine calls on paths inside the save directory.
pub struct EngineMarshaller<'a, E: GameEngine> {
    location: &'a SaveLocation,
    engine: E,
}

impl<'a, E: GameEngine> EngineMarshaller<'a, E> {
    pub fn new(location: &'a SaveLocation, engine: E) -> Self {
        Self { location, engine }
    }

    /// Asks the engine to create `save_name` and returns its status.
    pub fn new_game(&self, save_name: &str) -> Result<i32, Ai4xError> {
        let save_path = self.location.path_for(save_name)?;
        let code = self.engine.create_new_game(&save_path)?;
        log_status("new game", save_name, code);
        Ok(code)
    }

    /// Advances `save_name` by one turn without orders.
    pub fn end_turn(&self, save_name: &str) -> Result<i32, Ai4xError> {
        self.end_turn_with_orders(save_name, &[])
    }

    pub fn end_turn_with_orders(
        &self,
        save_name: &str,
        orders: &[TurnOrder],
    ) -> Result<i32, Ai4xError> {
        let save_path = self.location.path_for(save_name)?;
        let code = self.engine.advance_turn(&save_path, orders)?;
        log_status("end turn", save_name, code);
        Ok(code)
    }
}

fn log_status(operation: &str, save_name: &str, code: i32) {
    if code == 0 {
        log::info!("{} succeeded for save {}", operation, save_name);
    } else {
        log::warn!("{} for save {} returned engine code {}", operation, save_name, code);
    }
}
