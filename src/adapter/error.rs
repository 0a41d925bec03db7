//! Errors raised while converting a report.
use crate::cucumber::LoadError;
use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The source report is missing or isn't a cucumber report. Aborts the run.
    #[error("couldn't load report {}: {source}", .path.display())]
    Parse { path: PathBuf, source: LoadError },

    /// The results directory can't be created. Aborts the run.
    #[error("couldn't create results directory {}: {source}", .path.display())]
    OutputDir { path: PathBuf, source: io::Error },

    /// A result or attachment file couldn't be written; only that file is lost.
    #[error("couldn't write {name}: {source}")]
    Write { name: String, source: io::Error },

    /// An embedding isn't valid base64; only that attachment is lost.
    #[error("couldn't decode attachment of step '{step}': {source}")]
    Decode {
        step: String,
        source: base64::DecodeError,
    },
}

impl Error {
    /// Whether the error stops the whole run rather than a single file.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Parse { .. } | Error::OutputDir { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
