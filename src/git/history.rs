//! Commit history queries using libgit2
//!
//! Counts commits reachable from HEAD, optionally restricted to those whose
//! change set touches one file, using the git2 crate (Rust bindings to
//! libgit2). The store is opened read-only and nothing is ever written.

use git2::{DiffOptions, Repository, Sort};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ScoutError, ScoutResult};
use crate::paths;

/// Read-only view of one repository's commit history.
///
/// Holds the store handle for its own lifetime only; counts are computed on
/// demand and never cached. Drop the value to release the repository.
pub struct GitHistory {
    root: PathBuf,
    repo: Repository,
}

impl std::fmt::Debug for GitHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHistory")
            .field("root", &self.root)
            .field("repo", &self.repo.path())
            .finish()
    }
}

impl GitHistory {
    /// Open the metadata store at `<root>/.git`.
    ///
    /// Fails with [`ScoutError::RepositoryOpen`] when the directory is
    /// missing or cannot be interpreted as a git store.
    pub fn open(root: &Path) -> ScoutResult<Self> {
        // libgit2 wants forward slashes; normalize before appending the
        // metadata directory name.
        let git_dir = PathBuf::from(format!("{}/.git", paths::to_git_path(root)));
        let repo = Repository::open(&git_dir).map_err(|source| ScoutError::RepositoryOpen {
            path: git_dir.clone(),
            source,
        })?;
        debug!("opened git repository at {:?}", repo.path());
        Ok(Self {
            root: root.to_path_buf(),
            repo,
        })
    }

    /// Number of commits reachable from HEAD.
    pub fn commit_count(&self) -> ScoutResult<usize> {
        let mut count = 0;
        for oid_result in self.head_revwalk()? {
            oid_result.map_err(|source| self.history_err(source))?;
            count += 1;
        }
        Ok(count)
    }

    /// Number of commits whose change set touches `file`.
    ///
    /// `file` must live beneath the root this history was opened on; it is
    /// relativized and separator-normalized before being handed to libgit2.
    /// The revwalk pushes HEAD and follows every parent, so commits
    /// reachable only through merge side-branches are counted too. A file
    /// with no recorded history counts 0.
    pub fn commit_count_for(&self, file: &Path) -> ScoutResult<usize> {
        let rel = paths::relative_to(&self.root, file)?;
        debug!("counting commits touching {:?}", rel);

        let mut count = 0;
        for oid_result in self.head_revwalk()? {
            let oid = oid_result.map_err(|source| self.history_err(source))?;
            let commit = self
                .repo
                .find_commit(oid)
                .map_err(|source| self.history_err(source))?;
            if self.touches_path(&commit, &rel)? {
                count += 1;
            }
        }
        Ok(count)
    }

    /// Whether `commit` changed `rel` relative to its first parent.
    fn touches_path(&self, commit: &git2::Commit, rel: &str) -> ScoutResult<bool> {
        let parent = commit.parent(0).ok();
        let tree = commit.tree().map_err(|source| self.history_err(source))?;
        let parent_tree = parent
            .as_ref()
            .map(|p| p.tree())
            .transpose()
            .map_err(|source| self.history_err(source))?;

        let mut diff_opts = DiffOptions::new();
        diff_opts.pathspec(rel);

        let diff = self
            .repo
            .diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), Some(&mut diff_opts))
            .map_err(|source| self.history_err(source))?;

        Ok(diff.deltas().len() > 0)
    }

    /// Full-ancestry revwalk from HEAD. A missing or corrupt head reference
    /// means the store is unusable, so that failure maps to
    /// [`ScoutError::RepositoryOpen`].
    fn head_revwalk(&self) -> ScoutResult<git2::Revwalk<'_>> {
        let mut revwalk = self
            .repo
            .revwalk()
            .map_err(|source| self.history_err(source))?;
        revwalk
            .set_sorting(Sort::TIME)
            .map_err(|source| self.history_err(source))?;
        revwalk
            .push_head()
            .map_err(|source| ScoutError::RepositoryOpen {
                path: self.root.join(".git"),
                source,
            })?;
        Ok(revwalk)
    }

    fn history_err(&self, source: git2::Error) -> ScoutError {
        ScoutError::History {
            repo: self.root.clone(),
            source,
        }
    }
}
