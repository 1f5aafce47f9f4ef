//! Path canonicalization for the git backend.
//!
//! libgit2 pathspecs use forward slashes regardless of platform, so every
//! path handed to the history layer goes through here first. Both functions
//! are pure string work; no filesystem access.

use std::path::Path;

use crate::error::{ScoutError, ScoutResult};

/// Render `path` with every platform separator replaced by `/`.
pub fn to_git_path(path: &Path) -> String {
    let raw = path.to_string_lossy().into_owned();
    if std::path::MAIN_SEPARATOR == '/' {
        raw
    } else {
        raw.replace(std::path::MAIN_SEPARATOR, "/")
    }
}

/// Strip the `root` prefix (plus its trailing separator) from `path` and
/// return the remainder in forward-slash form.
///
/// Fails with [`ScoutError::InvalidPath`] when `path` is not a true
/// descendant of `root`. Joining the result back onto `root` reconstructs
/// an equivalent path.
pub fn relative_to(root: &Path, path: &Path) -> ScoutResult<String> {
    let invalid = || ScoutError::InvalidPath {
        root: root.to_path_buf(),
        path: path.to_path_buf(),
    };
    let rel = path.strip_prefix(root).map_err(|_| invalid())?;
    if rel.as_os_str().is_empty() {
        // `path` == `root`: the root itself is not a file inside it.
        return Err(invalid());
    }
    Ok(to_git_path(rel))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn relative_to_strips_root_and_one_separator() {
        let root = Path::new("/work/proj");
        let file = Path::new("/work/proj/src/App.java");
        assert_eq!(relative_to(root, file).unwrap(), "src/App.java");
    }

    #[test]
    fn relative_to_round_trips() {
        let root = PathBuf::from("/work/proj");
        let file = root.join("src").join("deep").join("Util.java");
        let rel = relative_to(&root, &file).unwrap();
        assert_eq!(root.join(rel), file);
    }

    #[test]
    fn relative_to_rejects_path_outside_root() {
        let err = relative_to(Path::new("/work/proj"), Path::new("/elsewhere/App.java"))
            .unwrap_err();
        assert!(matches!(err, ScoutError::InvalidPath { .. }));
    }

    #[test]
    fn relative_to_rejects_the_root_itself() {
        let root = Path::new("/work/proj");
        assert!(relative_to(root, root).is_err());
    }

    #[test]
    fn relative_to_rejects_sibling_with_shared_name_prefix() {
        // "/work/proj-old" starts with the string "/work/proj" but is not inside it.
        let err = relative_to(Path::new("/work/proj"), Path::new("/work/proj-old/App.java"))
            .unwrap_err();
        assert!(matches!(err, ScoutError::InvalidPath { .. }));
    }
}
