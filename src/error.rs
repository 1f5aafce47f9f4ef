//! Error taxonomy for discovery and history queries
//!
//! Walk-time failures (unreadable directories, broken links) are skipped
//! inside the walkers and never surface here. The variants below are the
//! contract violations and backend failures a caller must handle.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the path and history components.
#[derive(Error, Debug)]
pub enum ScoutError {
    /// The queried file path does not live beneath the repository root.
    #[error("path {path:?} is not inside repository root {root:?}")]
    InvalidPath { root: PathBuf, path: PathBuf },

    /// The metadata directory could not be opened as a git store, or its
    /// head reference is missing or corrupt.
    #[error("failed to open git repository at {path:?} (missing or corrupt metadata): {source}")]
    RepositoryOpen {
        path: PathBuf,
        #[source]
        source: git2::Error,
    },

    /// History enumeration failed partway through. Not retried: a corrupt
    /// store cannot be repaired from here.
    #[error("failed to enumerate history of {repo:?}: {source}")]
    History {
        repo: PathBuf,
        #[source]
        source: git2::Error,
    },
}

pub type ScoutResult<T> = Result<T, ScoutError>;
