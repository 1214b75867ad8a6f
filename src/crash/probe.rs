use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

use super::config::NOT_INSTALLED;

/// Finds `name` in the directories listed in `PATH`.
pub fn find_on_path(name: &str) -> Option<PathBuf> {
    let path_var = env::var_os("PATH")?;
    find_in_dirs(name, env::split_paths(&path_var))
}

fn find_in_dirs(name: &str, dirs: impl IntoIterator<Item = PathBuf>) -> Option<PathBuf> {
    dirs.into_iter()
        .flat_map(|dir| executable_names(name).map(move |file| dir.join(file)))
        .find(|candidate| is_executable(candidate))
}

#[cfg(windows)]
fn executable_names(name: &str) -> impl Iterator<Item = String> + '_ {
    ["", ".exe", ".cmd", ".bat"]
        .into_iter()
        .map(move |ext| format!("{name}{ext}"))
}

#[cfg(not(windows))]
fn executable_names(name: &str) -> impl Iterator<Item = String> + '_ {
    std::iter::once(name.to_string())
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Version line reported by the tool `name`, or a placeholder describing why
/// there is none. Never fails.
pub fn probe_tool<S: AsRef<OsStr>>(name: &str, args: &[S]) -> String {
    match find_on_path(name) {
        Some(path) => probe_executable(&path, args),
        None => NOT_INSTALLED.to_string(),
    }
}

pub fn probe_executable<S: AsRef<OsStr>>(path: &Path, args: &[S]) -> String {
    let output = Command::new(path)
        .args(args)
        .stdin(Stdio::null())
        .output();

    match output {
        Ok(output) if output.status.success() => {
            String::from_utf8_lossy(&output.stdout).trim_end().to_string()
        }
        Ok(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            debug!("{} exited with {}", path.display(), output.status);
            format!("Error: {:?}", stderr.trim_end())
        }
        Err(e) => format!("Error: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_probe_tool_not_installed() {
        let version = probe_tool("djdeploy-definitely-not-a-real-tool", &["--version"]);
        assert_eq!(version, NOT_INSTALLED);
    }

    #[test]
    fn test_find_in_dirs_missing() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(
            find_in_dirs("docker", vec![temp_dir.path().to_path_buf()]),
            None
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_find_in_dirs_requires_executable_bit() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let tool = temp_dir.path().join("docker");
        fs::write(&tool, "#!/bin/sh\n").unwrap();
        assert_eq!(find_in_dirs("docker", vec![temp_dir.path().to_path_buf()]), None);

        fs::set_permissions(&tool, fs::Permissions::from_mode(0o755)).unwrap();
        assert_eq!(
            find_in_dirs("docker", vec![temp_dir.path().to_path_buf()]),
            Some(tool)
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_probe_executable_reports_stdout() {
        let version = probe_executable(Path::new("/bin/sh"), &["-c", "echo 'Docker version 24.0.7'"]);
        assert_eq!(version, "Docker version 24.0.7");
    }

    #[cfg(unix)]
    #[test]
    fn test_probe_executable_reports_stderr_on_failure() {
        let version = probe_executable(
            Path::new("/bin/sh"),
            &["-c", "echo 'not logged in' >&2; exit 1"],
        );
        assert_eq!(version, "Error: \"not logged in\"");
    }

    #[test]
    fn test_probe_executable_spawn_failure() {
        let temp_dir = TempDir::new().unwrap();
        let version = probe_executable(&temp_dir.path().join("missing"), &["--version"]);
        assert!(version.starts_with("Error: "));
    }
}
