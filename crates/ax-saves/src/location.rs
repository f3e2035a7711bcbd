use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use ax_core::{validate_save_name, Ai4xError, DEFAULT_SAVE_DIR_NAME};

use crate::map_save_dir_create;

/// The save directory shared by the catalog, the state store and the engine marshaller.
///
/// Starts out as `<working_dir>/Saves`. The directory is only created when something
/// asks for it through [`SaveLocation::directory`] or [`SaveLocation::set_directory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveLocation {
    working_dir: PathBuf,
    current: PathBuf,
}

impl SaveLocation {
    pub fn from_working_dir(working_dir: impl Into<PathBuf>) -> Self {
        let working_dir = working_dir.into();
        let current = working_dir.join(DEFAULT_SAVE_DIR_NAME);
        Self {
            working_dir,
            current,
        }
    }

    pub fn default_directory(&self) -> PathBuf {
        self.working_dir.join(DEFAULT_SAVE_DIR_NAME)
    }

    /// The configured directory, without touching the filesystem.
    pub fn configured(&self) -> &Path {
        &self.current
    }

    /// Returns the configured directory, creating it when absent.
    pub fn directory(&self) -> Result<PathBuf, Ai4xError> {
        ensure_directory(&self.current)?;
        Ok(self.current.clone())
    }

    /// Selects a new save directory, or the default one when `directory` is `None`.
    ///
    /// An existing path is adopted untouched. A missing one is created, which fails when
    /// its parent does not exist; the previous selection is kept in that case.
    pub fn set_directory(&mut self, directory: Option<&Path>) -> Result<(), Ai4xError> {
        let target = match directory {
            None => {
                let default = self.default_directory();
                ensure_directory(&default)?;
                default
            }
            Some(path) => {
                let path = self.anchor(path);
                if !path.exists() {
                    ensure_directory(&path)?;
                }
                path
            }
        };
        log::debug!("save directory set to {}", target.display());
        self.current = target;
        Ok(())
    }

    /// Full path of `name` inside the save directory, creating the directory if needed.
    pub fn path_for(&self, name: &str) -> Result<PathBuf, Ai4xError> {
        validate_save_name(name)?;
        Ok(self.directory()?.join(name))
    }

    fn anchor(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.working_dir.join(path)
        }
    }
}

fn ensure_directory(path: &Path) -> Result<(), Ai4xError> {
    if path.is_dir() {
        return Ok(());
    }
    match fs::create_dir(path) {
        Ok(()) => {
            log::info!("created save directory {}", path.display());
            Ok(())
        }
        Err(error) if error.kind() == ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
        Err(error) if error.kind() == ErrorKind::NotFound => {
            log::error!(
                "Attempted to create save directory where parent directory does not exist: {}",
                path.display()
            );
            Err(Ai4xError::new(
                "SAVE_DIR_PARENT_MISSING",
                format!(
                    "Parent directory does not exist for save directory: {}",
                    path.display()
                ),
            ))
        }
        Err(error) => {
            log::error!(
                "Failed to create save directory {}: {}",
                path.display(),
                error
            );
            Err(map_save_dir_create(error))
        }
    }
}

#[cfg(test)]
mod location_tests {
    use super::*;
    use crate::saves_test_support::*;

    #[test]
    fn default_directory_is_saves_under_working_dir_and_created_lazily() {
        let root = temp_path("location-default");
        fs::create_dir_all(&root).expect("root");
        let location = SaveLocation::from_working_dir(&root);

        assert_eq!(location.configured(), root.join("Saves"));
        assert!(!root.join("Saves").exists());

        let directory = location.directory().expect("directory should be created");
        assert_eq!(directory, root.join("Saves"));
        assert!(directory.is_dir());

        let again = location.directory().expect("existing directory is fine");
        assert_eq!(again, directory);
    }

    #[test]
    fn reset_to_default_is_idempotent() {
        let root = temp_path("location-reset");
        fs::create_dir_all(&root).expect("root");
        let mut location = SaveLocation::from_working_dir(&root);

        location.set_directory(None).expect("first reset");
        let first = location.directory().expect("first directory");
        location.set_directory(None).expect("second reset");
        let second = location.directory().expect("second directory");

        assert_eq!(first, second);
        assert_eq!(first, root.join("Saves"));
        assert!(first.is_dir());
    }

    #[test]
    fn existing_directory_is_adopted_without_creating_anything() {
        let root = temp_path("location-existing");
        let custom = root.join("custom");
        fs::create_dir_all(&custom).expect("custom");
        let mut location = SaveLocation::from_working_dir(&root);

        location.set_directory(Some(custom.as_path())).expect("adopt");
        assert_eq!(location.directory().expect("directory"), custom);
        assert!(!root.join("Saves").exists());
        assert_eq!(
            fs::read_dir(&root).expect("read root").count(),
            1,
            "only the custom directory should exist"
        );
    }

    #[test]
    fn missing_directory_with_existing_parent_is_created() {
        let root = temp_path("location-create");
        fs::create_dir_all(&root).expect("root");
        let mut location = SaveLocation::from_working_dir(&root);

        let target = root.join("fresh");
        location.set_directory(Some(target.as_path())).expect("create");
        assert!(target.is_dir());
        assert_eq!(location.configured(), target);
    }

    #[test]
    fn missing_parent_fails_and_keeps_previous_directory() {
        let root = temp_path("location-no-parent");
        fs::create_dir_all(&root).expect("root");
        let mut location = SaveLocation::from_working_dir(&root);

        let target = root.join("absent").join("deeper");
        let error = location
            .set_directory(Some(target.as_path()))
            .expect_err("missing parent should fail");
        assert_eq!(error.code, "SAVE_DIR_PARENT_MISSING");
        assert!(!target.exists());
        assert_eq!(location.configured(), root.join("Saves"));
    }

    #[test]
    fn directory_fails_when_working_dir_is_gone() {
        let root = temp_path("location-gone");
        let location = SaveLocation::from_working_dir(&root);

        let error = location.directory().expect_err("missing parent should fail");
        assert_eq!(error.code, "SAVE_DIR_PARENT_MISSING");
    }

    #[test]
    fn relative_directories_are_anchored_at_working_dir() {
        let root = temp_path("location-relative");
        fs::create_dir_all(&root).expect("root");
        let mut location = SaveLocation::from_working_dir(&root);

        location
            .set_directory(Some(Path::new("campaign")))
            .expect("relative create");
        assert_eq!(location.configured(), root.join("campaign"));
        assert!(root.join("campaign").is_dir());
    }

    #[test]
    fn file_in_place_of_directory_is_rejected() {
        let root = temp_path("location-file");
        write_file(&root.join("Saves"), "not a directory");
        let location = SaveLocation::from_working_dir(&root);

        let error = location.directory().expect_err("file should not pass as directory");
        assert_eq!(error.code, "SAVE_DIR_CREATE");
    }

    #[test]
    fn path_for_validates_and_joins_names() {
        let root = temp_path("location-path-for");
        fs::create_dir_all(&root).expect("root");
        let location = SaveLocation::from_working_dir(&root);

        let path = location.path_for("alpha").expect("valid name");
        assert_eq!(path, root.join("Saves").join("alpha"));

        let error = location.path_for("").expect_err("empty name");
        assert_eq!(error.code, "SAVE_NAME_INVALID");
    }
}
