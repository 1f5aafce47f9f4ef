//! Git history module
//!
//! Read-only commit history queries against a repository's metadata store.
//! The store handle is scoped to a single [`GitHistory`] value; nothing
//! here writes to the repository or caches results between calls.

pub mod history;

pub use history::GitHistory;
