//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Every failure of a rename pass carries its cause and the path it happened on,
//! so callers can report a single diagnostic without string matching.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read folder {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("cannot rename {} -> {}: {source}", from.display(), to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("target already exists: {}", path.display())]
    Collision { path: PathBuf },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },
}

impl Error {
    /// Path the failure is attached to, when there is one.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Error::ReadDir { path, .. }
            | Error::NotADirectory { path }
            | Error::Collision { path } => Some(path),
            Error::Rename { from, .. } => Some(from),
            Error::InvalidArgument { .. } => None,
        }
    }
}
