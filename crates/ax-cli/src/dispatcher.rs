use ax_core::{validate_save_name, Ai4xError, FrontendState};
use ax_engine::{EngineMarshaller, GameEngine};
use ax_saves::{list_saves, save_frontend_state, SaveLocation};

use crate::{Mode, SaveNameArgs};

/// Runs one command and reports the outcome through `emit`.
///
/// `connect` is only called by commands that need the engine, once the save name has been
/// accepted, so `list` works without an engine install. Engine failure codes are reported,
/// not returned as errors.
pub(crate) fn dispatch<E, F>(
    mode: Mode,
    location: &SaveLocation,
    connect: F,
    emit: &mut dyn FnMut(String),
) -> Result<i32, Ai4xError>
where
    E: GameEngine,
    F: FnOnce() -> Result<E, Ai4xError>,
{
    match mode {
        Mode::New(SaveNameArgs { name: None, .. }) => {
            emit("New Game expects the save name next.".to_string());
        }
        Mode::New(SaveNameArgs { name: Some(name), .. }) => {
            validate_save_name(&name)?;
            let marshaller = EngineMarshaller::new(location, connect()?);
            let code = marshaller.new_game(&name)?;
            if code == 0 {
                save_frontend_state(location, &FrontendState::for_save(&name))?;
                emit(format!("New save with name {} created.", name));
            } else {
                emit(format!("New save creation failed with error code {}.", code));
            }
        }
        Mode::List(_) => {
            let saves = list_saves(location)?;
            if saves.is_empty() {
                emit("No saves found.".to_string());
            }
            for save in saves {
                emit(save);
            }
        }
        Mode::End(SaveNameArgs { name: None, .. }) => {
            emit("End Turn expects the save name next.".to_string());
        }
        Mode::End(SaveNameArgs { name: Some(name), .. }) => {
            validate_save_name(&name)?;
            let marshaller = EngineMarshaller::new(location, connect()?);
            let code = marshaller.end_turn(&name)?;
            if code == 0 {
                emit(format!("Save {} advanced to the next turn.", name));
            } else {
                emit(format!("End Turn failed with error code {}.", code));
            }
        }
    }
    Ok(0)
}
