use std::path::{Path, PathBuf};
use std::process::Command;

use ax_core::{Ai4xError, TurnOrder};

use crate::{map_engine_orders, map_engine_spawn, EngineSettings, GameEngine};

pub const ENGINE_EXECUTABLE_NAME: &str = "AI4XEngine";

/// Runs the published engine executable once per command.
///
/// `new-game <path>` and `end-turn <path> <orders-json>`; the exit code is the engine
/// status. Calls block until the engine exits and inherit stdout and stderr.
#[derive(Debug, Clone)]
pub struct ProcessEngine {
    executable: PathBuf,
}

impl ProcessEngine {
    pub fn locate(settings: &EngineSettings) -> Result<Self, Ai4xError> {
        let executable = settings.publish_output_directory.join(format!(
            "{}{}",
            ENGINE_EXECUTABLE_NAME,
            std::env::consts::EXE_SUFFIX
        ));
        if !executable.is_file() {
            return Err(Ai4xError::new(
                "ENGINE_NOT_FOUND",
                format!("Engine executable not found: {}", executable.display()),
            ));
        }
        log::debug!("using engine at {}", executable.display());
        Ok(Self { executable })
    }

    fn run(&self, command: &mut Command) -> Result<i32, Ai4xError> {
        let status = command.status().map_err(map_engine_spawn)?;
        status.code().ok_or_else(|| {
            Ai4xError::new(
                "ENGINE_TERMINATED",
                format!("Engine exited without a status code: {}", status),
            )
        })
    }
}

impl GameEngine for ProcessEngine {
    fn create_new_game(&self, save_path: &Path) -> Result<i32, Ai4xError> {
        log::debug!("engine new-game {}", save_path.display());
        self.run(
            Command::new(&self.executable)
                .arg("new-game")
                .arg(save_path),
        )
    }

    fn advance_turn(&self, save_path: &Path, orders: &[TurnOrder]) -> Result<i32, Ai4xError> {
        let orders_json = serde_json::to_string(orders).map_err(map_engine_orders)?;
        log::debug!("engine end-turn {} {}", save_path.display(), orders_json);
        self.run(
            Command::new(&self.executable)
                .arg("end-turn")
                .arg(save_path)
                .arg(orders_json),
        )
    }
}
