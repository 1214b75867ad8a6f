use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IoError {
    #[error("failed to read file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to create temporary file: {source}")]
    TempFile { source: std::io::Error },
}

impl IoError {
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteError {
            path: path.into(),
            source,
        }
    }

    pub fn temp_file(source: std::io::Error) -> Self {
        Self::TempFile { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_file_display() {
        let source = std::io::Error::other("disk full");
        let err = IoError::temp_file(source);
        assert_eq!(err.to_string(), "failed to create temporary file: disk full");
    }

    #[test]
    fn test_read_error_display() {
        let source = std::io::Error::from(std::io::ErrorKind::PermissionDenied);
        let err = IoError::read_error("/srv/app/requirements.txt", source);
        assert!(err
            .to_string()
            .starts_with("failed to read file '/srv/app/requirements.txt'"));
    }
}
