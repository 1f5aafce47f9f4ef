//! Filesystem discovery
//!
//! One bounded tree walk per query: [`FileFinder`] collects source files by
//! name fragment, [`RepositoryLocator`] collects directories that look like
//! the roots of version-controlled source projects. Both are built on the
//! hook-driven traversal in [`walker`] and never mutate the filesystem.

pub mod finder;
pub mod locator;
pub mod walker;

pub use finder::FileFinder;
pub use locator::{enclosing_repository, RepositoryLocator};
pub use walker::{walk_tree, Flow};
