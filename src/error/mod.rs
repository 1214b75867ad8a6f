mod io;
mod project;

pub use io::IoError;
pub use project::ProjectError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    Project(#[from] ProjectError),
}

pub type Result<T> = std::result::Result<T, Error>;
