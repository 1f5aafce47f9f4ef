//! Project layout configuration
//!
//! Loads optional settings from a `reposcout.toml` file in the search root.
//! Every field has a default, so the file is only needed to override the
//! structural heuristic (what counts as a source file, where a source tree
//! starts, which metadata entry marks version control) or the extension
//! skip list.
//!
//! # Configuration Format
//!
//! ```toml
//! # reposcout.toml
//!
//! [layout]
//! source_extension = ".java"
//! src_dir = "src"
//! vcs_prefix = ".git"
//!
//! [exclude]
//! extensions = [".exe", ".dll", ".so", ".jar"]
//! ```

use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

/// Settings controlling discovery walks.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScoutConfig {
    pub layout: ProjectLayout,
    pub exclude: ExcludeConfig,
}

/// Structural description of a version-controlled source project.
///
/// The repository-root test is parameterized by these fields rather than
/// hard-coded in the walker, so alternative project layouts only need a
/// different `ProjectLayout`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProjectLayout {
    /// Suffix that marks a source file, including the dot.
    pub source_extension: String,
    /// Directory name that marks the top of a source tree.
    pub src_dir: String,
    /// Name prefix of the version-control metadata entry.
    pub vcs_prefix: String,
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self {
            source_extension: ".java".to_string(),
            src_dir: "src".to_string(),
            vcs_prefix: ".git".to_string(),
        }
    }
}

impl ProjectLayout {
    /// Whether `path` names a source file under this layout.
    pub fn is_source_file(&self, path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| name.to_string_lossy().ends_with(&self.source_extension))
    }
}

/// Extensions whose presence marks a subtree as not worth searching for
/// repositories. A heuristic: binaries and libraries rarely sit next to
/// source trees, and skipping their directories outright saves a lot of
/// walking. False negatives are an accepted trade-off.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExcludeConfig {
    pub extensions: Vec<String>,
}

impl Default for ExcludeConfig {
    fn default() -> Self {
        Self {
            extensions: [".exe", ".dll", ".so", ".dylib", ".a", ".jar"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl ExcludeConfig {
    /// Whether `path` names a file on the skip list.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let Some(name) = path.file_name() else {
            return false;
        };
        let name = name.to_string_lossy();
        self.extensions.iter().any(|ext| name.ends_with(ext.as_str()))
    }
}

impl ScoutConfig {
    pub const FILENAME: &'static str = "reposcout.toml";

    /// Load `reposcout.toml` from `dir`, falling back to defaults when the
    /// file is absent or malformed.
    pub fn load(dir: &Path) -> Self {
        let path = dir.join(Self::FILENAME);
        let Ok(raw) = std::fs::read_to_string(&path) else {
            debug!("no {} in {:?}, using defaults", Self::FILENAME, dir);
            return Self::default();
        };
        match toml::from_str(&raw) {
            Ok(config) => {
                debug!("loaded config from {:?}", path);
                config
            }
            Err(err) => {
                warn!("ignoring malformed {:?}: {}", path, err);
                Self::default()
            }
        }
    }
}
