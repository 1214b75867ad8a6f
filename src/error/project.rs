use std::path::PathBuf;
use thiserror::Error;

use super::IoError;

/// The directory does not look like a Django project we can deploy.
#[derive(Error, Debug)]
pub enum ProjectError {
    #[error("manage.py not found in {dir}")]
    ManagePyMissing { dir: PathBuf },

    #[error("no DJANGO_SETTINGS_MODULE found in {path}")]
    SettingsModuleNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] IoError),
}

impl ProjectError {
    pub fn manage_py_missing(dir: impl Into<PathBuf>) -> Self {
        Self::ManagePyMissing { dir: dir.into() }
    }

    pub fn settings_module_not_found(path: impl Into<PathBuf>) -> Self {
        Self::SettingsModuleNotFound { path: path.into() }
    }
}
