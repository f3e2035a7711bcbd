use std::ffi::OsString;
use std::path::Path;

use ax_core::Ai4xError;
use ax_engine::{load_engine_settings, ProcessEngine, DEFAULT_SETTINGS_PATH};
use ax_saves::{map_save_dir_cwd, SaveLocation};
use clap::Parser;

mod cli_args;
mod dispatcher;
mod error_map;

pub(crate) use cli_args::{Cli, Mode, SaveNameArgs, USAGE_TEXT};
pub(crate) use dispatcher::dispatch;
pub(crate) use error_map::{emit_error, emit_parse_error};

pub fn run_cli_from_args<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut emit = |line: String| println!("{}", line);
    let working_dir = match std::env::current_dir().map_err(map_save_dir_cwd) {
        Ok(working_dir) => working_dir,
        Err(error) => return emit_error(error, &mut emit),
    };
    run_cli_in(args, &working_dir, &mut emit)
}

pub(crate) fn run_cli_in<I, T>(args: I, working_dir: &Path, emit: &mut dyn FnMut(String)) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(error) => return emit_parse_error(error, emit),
    };
    match run(cli, working_dir, emit) {
        Ok(code) => code,
        Err(error) => emit_error(error, emit),
    }
}

fn run(cli: Cli, working_dir: &Path, emit: &mut dyn FnMut(String)) -> Result<i32, Ai4xError> {
    let Some(mode) = cli.command else {
        emit(USAGE_TEXT.to_string());
        return Ok(0);
    };

    if !mode.ignored_args().is_empty() {
        log::debug!("ignoring trailing arguments: {:?}", mode.ignored_args());
    }

    let mut location = SaveLocation::from_working_dir(working_dir);
    if let Some(save_dir) = cli.save_dir.as_deref() {
        location.set_directory(Some(save_dir))?;
    }
    let settings_path = working_dir.join(
        cli.settings
            .unwrap_or_else(|| DEFAULT_SETTINGS_PATH.into()),
    );

    dispatch(
        mode,
        &location,
        || {
            let settings = load_engine_settings(&settings_path)?;
            ProcessEngine::locate(&settings)
        },
        emit,
    )
}
