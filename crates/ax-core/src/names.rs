use std::sync::OnceLock;

use regex::Regex;

use crate::Ai4xError;

fn separator_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[/\\\x00]").expect("separator pattern should compile"))
}

/// Checks that `name` can be joined onto the save directory as a single file name.
///
/// Empty names, `.` and `..`, and anything containing a path separator are rejected so a
/// save can never resolve outside its directory. Whether a save of that name already
/// exists is not checked here.
pub fn validate_save_name(name: &str) -> Result<(), Ai4xError> {
    if name.trim().is_empty() {
        return Err(Ai4xError::new("SAVE_NAME_INVALID", "Save name must not be empty."));
    }
    if name == "." || name == ".." || separator_pattern().is_match(name) {
        return Err(Ai4xError::new(
            "SAVE_NAME_INVALID",
            format!("Save name must be a plain file name: {}", name),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod names_tests {
    use super::*;

    #[test]
    fn accepts_plain_names() {
        assert!(validate_save_name("alpha").is_ok());
        assert!(validate_save_name("alpha.fsav").is_ok());
        assert!(validate_save_name("my empire 2").is_ok());
    }

    #[test]
    fn rejects_empty_and_blank_names() {
        assert_eq!(
            validate_save_name("").expect_err("empty").code,
            "SAVE_NAME_INVALID"
        );
        assert_eq!(
            validate_save_name("   ").expect_err("blank").code,
            "SAVE_NAME_INVALID"
        );
    }

    #[test]
    fn rejects_names_that_escape_the_directory() {
        for name in [".", "..", "../alpha", "nested/alpha", "nested\\alpha"] {
            let error = validate_save_name(name).expect_err("path-like name should fail");
            assert_eq!(error.code, "SAVE_NAME_INVALID", "name: {}", name);
        }
    }
}
