//! Hook-driven directory traversal.
//!
//! A single depth-first walk parameterized by three injectable behaviors:
//! visit-file, enter-directory, and on-error. Each hook returns a [`Flow`]
//! that can cut off the remainder of the current subtree, which is how the
//! callers express "already handled, stop rework here" and "nothing useful
//! below this point".

use std::path::Path;
use walkdir::WalkDir;

/// Flow decision returned by walk hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep walking.
    Continue,
    /// Stop traversing the directory the current entry belongs to. For a
    /// directory entry this prevents descending into it; for a file entry
    /// it skips the file's remaining siblings.
    SkipSubtree,
}

/// Walk the tree rooted at `start` depth-first, following symbolic links.
///
/// `visit_file` runs for every regular file, `enter_dir` for every directory
/// before its contents, `on_error` for entries that cannot be read. Sibling
/// entries are visited in file-name order, so a walk over a fixed tree is
/// deterministic. Unreadable entries never abort the walk; whether their
/// surroundings are skipped is up to `on_error`. Symlink cycles are detected
/// by the underlying iterator and reported through `on_error`.
pub fn walk_tree<F, D, E>(start: &Path, mut visit_file: F, mut enter_dir: D, mut on_error: E)
where
    F: FnMut(&Path) -> Flow,
    D: FnMut(&Path) -> Flow,
    E: FnMut(&Path, &walkdir::Error) -> Flow,
{
    let mut it = WalkDir::new(start)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter();
    loop {
        let entry = match it.next() {
            None => break,
            Some(Ok(entry)) => entry,
            Some(Err(err)) => {
                let path = err.path().unwrap_or(start);
                if on_error(path, &err) == Flow::SkipSubtree {
                    it.skip_current_dir();
                }
                continue;
            }
        };
        let flow = if entry.file_type().is_dir() {
            enter_dir(entry.path())
        } else {
            visit_file(entry.path())
        };
        if flow == Flow::SkipSubtree {
            it.skip_current_dir();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    #[test]
    fn visits_every_file_once() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a/b")).unwrap();
        fs::write(dir.path().join("one.txt"), "").unwrap();
        fs::write(dir.path().join("a/two.txt"), "").unwrap();
        fs::write(dir.path().join("a/b/three.txt"), "").unwrap();

        let mut seen = Vec::new();
        walk_tree(
            dir.path(),
            |file| {
                seen.push(file.to_path_buf());
                Flow::Continue
            },
            |_| Flow::Continue,
            |_, _| Flow::Continue,
        );
        assert_eq!(seen.len(), 3);
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn skip_from_directory_hook_prunes_its_contents() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("skipme")).unwrap();
        fs::write(dir.path().join("skipme/hidden.txt"), "").unwrap();
        fs::write(dir.path().join("kept.txt"), "").unwrap();

        let mut files = Vec::new();
        walk_tree(
            dir.path(),
            |file| {
                files.push(file.to_path_buf());
                Flow::Continue
            },
            |d| {
                if d.file_name().is_some_and(|n| n == "skipme") {
                    Flow::SkipSubtree
                } else {
                    Flow::Continue
                }
            },
            |_, _| Flow::Continue,
        );
        assert_eq!(files, vec![dir.path().join("kept.txt")]);
    }

    #[test]
    fn skip_from_file_hook_drops_later_siblings() {
        let dir = tempfile::tempdir().unwrap();
        // Siblings are walked in name order: marker.stop comes before z.txt.
        fs::write(dir.path().join("marker.stop"), "").unwrap();
        fs::write(dir.path().join("z.txt"), "").unwrap();

        let mut files: Vec<PathBuf> = Vec::new();
        walk_tree(
            dir.path(),
            |file| {
                files.push(file.to_path_buf());
                if file.extension().is_some_and(|e| e == "stop") {
                    Flow::SkipSubtree
                } else {
                    Flow::Continue
                }
            },
            |_| Flow::Continue,
            |_, _| Flow::Continue,
        );
        assert_eq!(files, vec![dir.path().join("marker.stop")]);
    }

    #[cfg(unix)]
    #[test]
    fn follows_symlinked_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("real")).unwrap();
        fs::write(dir.path().join("real/inside.txt"), "").unwrap();
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("link")).unwrap();

        let mut count = 0;
        walk_tree(
            dir.path(),
            |_| {
                count += 1;
                Flow::Continue
            },
            |_| Flow::Continue,
            |_, _| Flow::Continue,
        );
        // inside.txt is reachable both directly and through the link.
        assert_eq!(count, 2);
    }
}
