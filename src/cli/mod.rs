//! CLI command definitions and handlers

mod commits;
mod find;
mod repos;
mod wizard;

use anyhow::Result;
use clap::{Parser, Subcommand};
use indicatif::ProgressStyle;
use std::path::PathBuf;

/// Reposcout - find Java sources and git repositories, count commit history
///
/// 100% LOCAL - reads the filesystem and git metadata, never writes either.
#[derive(Parser, Debug)]
#[command(name = "reposcout")]
#[command(
    version,
    about = "Find Java source files and git-backed projects on disk, and report per-file commit history",
    long_about = "Reposcout walks a directory tree to find Java source files by name fragment, \
locates the git-backed projects that contain them, and counts how many commits \
touched a given file.\n\n\
Run without a subcommand for the interactive wizard.",
    after_help = "\
Examples:
  reposcout find App ~/code            Find *.java files whose name contains 'App'
  reposcout repos ~/code               List git-backed Java projects under ~/code
  reposcout commits src/App.java       Count commits touching a file
  reposcout commits --repo ~/code/proj Count the whole repository's history
  reposcout                            Interactive wizard"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find source files whose name contains FRAGMENT
    Find {
        /// Name fragment to match (case-sensitive; a trailing .java is stripped)
        fragment: String,

        /// Directory to search from (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Locate git-backed Java projects under PATH
    Repos {
        /// Directory to search from (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Count commits touching FILE, or a whole repository's history
    #[command(after_help = "\
Examples:
  reposcout commits src/App.java                 Repository discovered from the file's ancestors
  reposcout commits src/App.java --repo ../proj  Explicit repository root
  reposcout commits --repo ../proj               Whole-repository commit count")]
    Commits {
        /// Source file to query (omit to count the whole repository's history)
        file: Option<PathBuf>,

        /// Repository root (default: discovered from FILE's ancestors)
        #[arg(long)]
        repo: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Find {
            fragment,
            path,
            json,
        }) => find::run(&fragment, &path, json),
        Some(Commands::Repos { path, json }) => repos::run(&path, json),
        Some(Commands::Commits { file, repo, json }) => {
            commits::run(file.as_deref(), repo.as_deref(), json)
        }
        None => wizard::run(),
    }
}

/// Create spinner progress style
pub(crate) fn spinner_style() -> ProgressStyle {
    ProgressStyle::default_spinner()
        .template("{spinner:.green} {msg}")
        .unwrap()
}
