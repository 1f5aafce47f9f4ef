//! Fragment search over source trees.

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::ProjectLayout;
use crate::discovery::walker::{walk_tree, Flow};

/// Collects every source file beneath a directory whose base name contains
/// a caller-supplied fragment.
///
/// The walk is depth-unbounded, follows symlinks, and silently skips
/// entries it cannot read. An empty result is a normal outcome, not an
/// error.
pub struct FileFinder<'a> {
    layout: &'a ProjectLayout,
    progress: Option<Box<dyn FnMut(&Path) + 'a>>,
}

impl<'a> FileFinder<'a> {
    pub fn new(layout: &'a ProjectLayout) -> Self {
        Self {
            layout,
            progress: None,
        }
    }

    /// Register a callback invoked once per visited directory, for progress
    /// rendering during long traversals.
    pub fn with_progress(mut self, tick: impl FnMut(&Path) + 'a) -> Self {
        self.progress = Some(Box::new(tick));
        self
    }

    /// Find source files whose base name contains `fragment`, in discovery
    /// order. `fragment` is matched case-sensitively and should already have
    /// any extension stripped.
    pub fn find(self, fragment: &str, start: &Path) -> Vec<PathBuf> {
        let FileFinder {
            layout,
            mut progress,
        } = self;
        let mut matches = Vec::new();
        walk_tree(
            start,
            |file| {
                if layout.is_source_file(file)
                    && file
                        .file_name()
                        .is_some_and(|name| name.to_string_lossy().contains(fragment))
                {
                    matches.push(file.to_path_buf());
                }
                Flow::Continue
            },
            |dir| {
                if let Some(tick) = progress.as_deref_mut() {
                    tick(dir);
                }
                Flow::Continue
            },
            |path, err| {
                debug!("skipping unreadable entry {:?}: {}", path, err);
                Flow::Continue
            },
        );
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn matches_are_substring_and_suffix_filtered() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/App.java"), "").unwrap();
        fs::write(dir.path().join("src/AppTest.java"), "").unwrap();
        fs::write(dir.path().join("src/App.class"), "").unwrap();
        fs::write(dir.path().join("src/Other.java"), "").unwrap();

        let layout = ProjectLayout::default();
        let found = FileFinder::new(&layout).find("App", dir.path());
        assert_eq!(
            found,
            vec![
                dir.path().join("src/App.java"),
                dir.path().join("src/AppTest.java"),
            ]
        );
    }

    #[test]
    fn match_is_case_sensitive() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("App.java"), "").unwrap();

        let layout = ProjectLayout::default();
        assert!(FileFinder::new(&layout).find("app", dir.path()).is_empty());
    }

    #[test]
    fn empty_tree_yields_empty_vec() {
        let dir = tempfile::tempdir().unwrap();
        let layout = ProjectLayout::default();
        assert!(FileFinder::new(&layout).find("App", dir.path()).is_empty());
    }

    #[test]
    fn progress_ticks_once_per_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a/b")).unwrap();

        let layout = ProjectLayout::default();
        let mut ticks = 0;
        FileFinder::new(&layout)
            .with_progress(|_| ticks += 1)
            .find("x", dir.path());
        // Root, a, and a/b.
        assert_eq!(ticks, 3);
    }
}
