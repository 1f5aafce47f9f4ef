//! Repository root discovery.
//!
//! A directory qualifies as a repository root when it directly contains an
//! entry whose name starts with the version-control metadata prefix, and
//! somewhere beneath it a `src` directory holds at least one source file.
//! The walk finds source files and climbs from each one, so only source
//! trees that actually contain sources qualify.

use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::ScoutConfig;
use crate::discovery::walker::{walk_tree, Flow};

/// Collects repository roots beneath a starting directory in one tree walk.
pub struct RepositoryLocator<'a> {
    config: &'a ScoutConfig,
    is_repo_root: Box<dyn Fn(&Path) -> bool + 'a>,
    progress: Option<Box<dyn FnMut(&Path) + 'a>>,
}

impl<'a> RepositoryLocator<'a> {
    pub fn new(config: &'a ScoutConfig) -> Self {
        let prefix = config.layout.vcs_prefix.as_str();
        Self {
            config,
            is_repo_root: Box::new(move |dir| has_vcs_metadata(dir, prefix)),
            progress: None,
        }
    }

    /// Replace the structural repository test, e.g. for layouts with a
    /// different metadata convention. The default checks the candidate's
    /// direct children for a name starting with the configured VCS prefix.
    pub fn with_root_predicate(mut self, predicate: impl Fn(&Path) -> bool + 'a) -> Self {
        self.is_repo_root = Box::new(predicate);
        self
    }

    /// Register a callback invoked once per visited directory, for progress
    /// rendering during long traversals.
    pub fn with_progress(mut self, tick: impl FnMut(&Path) + 'a) -> Self {
        self.progress = Some(Box::new(tick));
        self
    }

    /// Locate repository roots under `start`, in discovery order, each at
    /// most once. Unreadable directories are treated as "no match here".
    pub fn locate(self, start: &Path) -> Vec<PathBuf> {
        let RepositoryLocator {
            config,
            is_repo_root,
            mut progress,
        } = self;
        let mut roots: Vec<PathBuf> = Vec::new();
        // Dedup state is scoped to this walk, never shared across calls.
        let mut seen: HashSet<PathBuf> = HashSet::new();
        walk_tree(
            start,
            |file| {
                if config.exclude.is_excluded(file) {
                    // Binary or library file: assume nothing of interest
                    // lives alongside it and prune the subtree.
                    debug!("pruning subtree at excluded file {:?}", file);
                    return Flow::SkipSubtree;
                }
                if !config.layout.is_source_file(file) {
                    return Flow::Continue;
                }
                let Some(candidate) = enclosing_src_parent(file, start, &config.layout.src_dir)
                else {
                    return Flow::Continue;
                };
                if !is_repo_root(&candidate) {
                    return Flow::Continue;
                }
                if seen.insert(candidate.clone()) {
                    debug!("found repository root {:?}", candidate);
                    roots.push(candidate);
                    Flow::Continue
                } else {
                    // Every remaining file here maps to the same root.
                    Flow::SkipSubtree
                }
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
        roots
    }
}

/// Climb from `file` looking for an ancestor directory named exactly like
/// the source-tree marker, without climbing past `walk_root`. Returns the
/// marker's parent, the repository-root candidate.
fn enclosing_src_parent(file: &Path, walk_root: &Path, src_dir: &str) -> Option<PathBuf> {
    let mut dir = file.parent();
    while let Some(d) = dir {
        if d.file_name().is_some_and(|name| name == OsStr::new(src_dir)) {
            return d.parent().map(Path::to_path_buf);
        }
        if d == walk_root {
            return None;
        }
        dir = d.parent();
    }
    None
}

/// Direct-children probe: does `dir` contain an entry whose name starts
/// with the metadata prefix? An unreadable directory is "no".
fn has_vcs_metadata(dir: &Path, prefix: &str) -> bool {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return false;
    };
    entries
        .filter_map(|entry| entry.ok())
        .any(|entry| entry.file_name().to_string_lossy().starts_with(prefix))
}

/// Nearest ancestor of `file` directly containing a version-control
/// metadata entry. Used to default the repository root when a caller
/// supplies only a file path.
pub fn enclosing_repository(file: &Path, vcs_prefix: &str) -> Option<PathBuf> {
    let mut dir = file.parent();
    while let Some(d) = dir {
        if has_vcs_metadata(d, vcs_prefix) {
            return Some(d.to_path_buf());
        }
        dir = d.parent();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn make_project(root: &Path, name: &str) -> PathBuf {
        let proj = root.join(name);
        fs::create_dir_all(proj.join(".git")).unwrap();
        fs::write(proj.join(".git/HEAD"), "ref: refs/heads/main\n").unwrap();
        fs::create_dir_all(proj.join("src")).unwrap();
        fs::write(proj.join("src/App.java"), "class App {}\n").unwrap();
        proj
    }

    #[test]
    fn finds_project_with_metadata_and_sources() {
        let dir = tempfile::tempdir().unwrap();
        let proj = make_project(dir.path(), "proj");

        let config = ScoutConfig::default();
        let roots = RepositoryLocator::new(&config).locate(dir.path());
        assert_eq!(roots, vec![proj]);
    }

    #[test]
    fn root_is_reported_once_for_many_sources() {
        let dir = tempfile::tempdir().unwrap();
        let proj = make_project(dir.path(), "proj");
        fs::write(proj.join("src/Util.java"), "class Util {}\n").unwrap();
        fs::create_dir_all(proj.join("src/net/pkg")).unwrap();
        fs::write(proj.join("src/net/pkg/Deep.java"), "class Deep {}\n").unwrap();

        let config = ScoutConfig::default();
        let roots = RepositoryLocator::new(&config).locate(dir.path());
        assert_eq!(roots, vec![proj]);
    }

    #[test]
    fn source_tree_without_metadata_does_not_qualify() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("plain/src")).unwrap();
        fs::write(dir.path().join("plain/src/App.java"), "").unwrap();

        let config = ScoutConfig::default();
        assert!(RepositoryLocator::new(&config).locate(dir.path()).is_empty());
    }

    #[test]
    fn metadata_without_src_directory_does_not_qualify() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("proj/.git")).unwrap();
        fs::create_dir_all(dir.path().join("proj/code")).unwrap();
        fs::write(dir.path().join("proj/code/App.java"), "").unwrap();

        let config = ScoutConfig::default();
        assert!(RepositoryLocator::new(&config).locate(dir.path()).is_empty());
    }

    #[test]
    fn climb_stops_at_the_walk_root() {
        // The walk starts inside the project's src directory, so the climb
        // never reaches `src` itself's parent from below.
        let dir = tempfile::tempdir().unwrap();
        let proj = make_project(dir.path(), "proj");
        fs::create_dir_all(proj.join("src/inner")).unwrap();
        fs::write(proj.join("src/inner/Deep.java"), "").unwrap();

        let config = ScoutConfig::default();
        let roots = RepositoryLocator::new(&config).locate(&proj.join("src/inner"));
        assert!(roots.is_empty());
    }

    #[test]
    fn excluded_extension_prunes_the_subtree() {
        let dir = tempfile::tempdir().unwrap();
        // "aaa.dll" sorts before "zzz", so the prune fires before the
        // project directory is entered.
        fs::write(dir.path().join("aaa.dll"), "").unwrap();
        make_project(&dir.path().join("zzz"), "proj");

        let config = ScoutConfig::default();
        assert!(RepositoryLocator::new(&config).locate(dir.path()).is_empty());
    }

    #[test]
    fn custom_predicate_replaces_metadata_probe() {
        let dir = tempfile::tempdir().unwrap();
        // Mercurial-style layout: .hg instead of .git.
        let proj = dir.path().join("proj");
        fs::create_dir_all(proj.join(".hg")).unwrap();
        fs::create_dir_all(proj.join("src")).unwrap();
        fs::write(proj.join("src/App.java"), "").unwrap();

        let config = ScoutConfig::default();
        let roots = RepositoryLocator::new(&config)
            .with_root_predicate(|dir| dir.join(".hg").is_dir())
            .locate(dir.path());
        assert_eq!(roots, vec![proj]);
    }

    #[test]
    fn enclosing_repository_climbs_to_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let proj = make_project(dir.path(), "proj");
        let file = proj.join("src/App.java");

        assert_eq!(enclosing_repository(&file, ".git"), Some(proj));
        assert_eq!(
            enclosing_repository(Path::new("/nonexistent/file.java"), ".git"),
            None
        );
    }
}
