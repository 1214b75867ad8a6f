//! Django project introspection
//!
//! Recovers the settings module from the `manage.py` that `django-admin
//! startproject` generates, and from it the project name and the settings
//! file a deployment should use.

pub mod config;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::error::{IoError, ProjectError};

use config::*;

static SETTINGS_MODULE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn settings_module_pattern() -> &'static Regex {
    SETTINGS_MODULE_PATTERN.get_or_init(|| {
        // Quotes may differ on each side and the arguments may span lines.
        let pattern = format!(r#"{SETTINGS_ENV_VAR}['"]\s*,\s*['"]([\w.]+)['"]"#);
        Regex::new(&pattern).expect("settings module pattern is valid")
    })
}

/// Extracts the dotted settings module from the contents of a `manage.py`.
pub fn find_settings_module(manage_py: &str) -> Option<&str> {
    settings_module_pattern()
        .captures(manage_py)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Reads `<project_dir>/manage.py` and returns its settings module, e.g. `mysite.settings`.
pub fn settings_module(project_dir: &Path) -> Result<String, ProjectError> {
    let manage_py = project_dir.join(MANAGE_PY);
    if !manage_py.is_file() {
        return Err(ProjectError::manage_py_missing(project_dir));
    }

    let content =
        fs::read_to_string(&manage_py).map_err(|e| IoError::read_error(&manage_py, e))?;

    find_settings_module(&content)
        .map(str::to_string)
        .ok_or_else(|| ProjectError::settings_module_not_found(&manage_py))
}

/// Name of the Django project rooted at `project_dir`.
pub fn project_name(project_dir: &Path) -> Result<String, ProjectError> {
    let module = settings_module(project_dir)?;
    let name = module.split('.').next().unwrap_or_default();
    if name.is_empty() {
        return Err(ProjectError::settings_module_not_found(
            project_dir.join(MANAGE_PY),
        ));
    }
    Ok(name.to_string())
}

/// Guesses the settings file to deploy with.
///
/// Production variants next to the configured module win over the module
/// itself: `settings_prod.py` beside `settings.py`, or `prod.py` inside a
/// `settings/` package.
pub fn guess_settings_path(project_dir: &Path) -> Option<PathBuf> {
    let module = match settings_module(project_dir) {
        Ok(module) => module,
        Err(e) => {
            debug!("Cannot guess settings path: {e}");
            return None;
        }
    };

    let module_path = module_file(project_dir, &module)?;
    settings_candidates(&module_path)
        .into_iter()
        .find(|candidate| candidate.is_file())
}

fn module_file(project_dir: &Path, module: &str) -> Option<PathBuf> {
    let mut parts: Vec<&str> = module.split('.').filter(|p| !p.is_empty()).collect();
    let stem = parts.pop()?;

    let mut path = project_dir.to_path_buf();
    path.extend(parts);
    path.push(stem);
    path.set_extension(PYTHON_EXTENSION);
    Some(path)
}

fn settings_candidates(module_path: &Path) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    let (Some(dir), Some(stem)) = (
        module_path.parent(),
        module_path.file_stem().and_then(|s| s.to_str()),
    ) else {
        return candidates;
    };

    candidates.push(dir.join(format!("{stem}{PROD_SUFFIX}.{PYTHON_EXTENSION}")));
    if dir.file_name().is_some_and(|name| name == SETTINGS_PACKAGE) {
        candidates.push(dir.join(format!("{PROD_MODULE}.{PYTHON_EXTENSION}")));
    }
    candidates.push(module_path.to_path_buf());
    candidates
}
