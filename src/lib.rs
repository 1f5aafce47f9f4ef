//! Reposcout - find Java sources and git repositories, count commit history
//!
//! A fast, local-first discovery tool: walk a directory tree for Java
//! source files by name fragment, locate the git-backed projects that
//! contain them, and count the commits that touched a given file. The
//! filesystem and the git store are only ever read, never written.
//!
//! The convenience functions below run with the default project layout;
//! use [`discovery::FileFinder`], [`discovery::RepositoryLocator`], and
//! [`git::GitHistory`] directly for custom layouts or progress reporting.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod git;
pub mod paths;

pub use error::{ScoutError, ScoutResult};

use std::path::{Path, PathBuf};

/// Find source files beneath `start_dir` whose base name contains
/// `fragment`, in discovery order. Empty when nothing matches.
pub fn find_source_files(fragment: &str, start_dir: &Path) -> Vec<PathBuf> {
    let layout = config::ProjectLayout::default();
    discovery::FileFinder::new(&layout).find(fragment, start_dir)
}

/// Find the roots of git-backed source projects beneath `start_dir`, each
/// reported at most once. Empty when nothing qualifies.
pub fn find_repositories(start_dir: &Path) -> Vec<PathBuf> {
    let config = config::ScoutConfig::default();
    discovery::RepositoryLocator::new(&config).locate(start_dir)
}

/// Count the commits whose change set touches `file`, which must live
/// beneath `repo_root`.
pub fn commit_count_for_file(repo_root: &Path, file: &Path) -> ScoutResult<usize> {
    git::GitHistory::open(repo_root)?.commit_count_for(file)
}

/// Count every commit reachable from the repository's HEAD.
pub fn commit_count_for_repository(repo_root: &Path) -> ScoutResult<usize> {
    git::GitHistory::open(repo_root)?.commit_count()
}
