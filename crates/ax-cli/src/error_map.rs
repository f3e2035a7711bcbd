use ax_core::Ai4xError;

pub(crate) fn emit_error(error: Ai4xError, emit: &mut dyn FnMut(String)) -> i32 {
    log::debug!("command failed: {}", error);
    emit(format!("ERROR:{}", error));
    1
}

pub(crate) fn emit_parse_error(error: clap::Error, emit: &mut dyn FnMut(String)) -> i32 {
    use clap::error::ErrorKind;

    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            emit(error.to_string().trim_end().to_string());
        }
        _ => {
            log::debug!("argument parsing failed: {}", error);
            emit(crate::USAGE_TEXT.to_string());
        }
    }
    0
}
