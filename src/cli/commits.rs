//! Commits command - count history touching a file or a whole repository

use anyhow::{Context, Result};
use console::style;
use std::path::Path;

use crate::config::ScoutConfig;
use crate::discovery::enclosing_repository;
use crate::git::GitHistory;

pub(super) fn run(file: Option<&Path>, repo: Option<&Path>, json: bool) -> Result<()> {
    match (file, repo) {
        (None, None) => {
            anyhow::bail!("Provide a FILE to query, or --repo for a whole-repository count")
        }
        (None, Some(root)) => {
            let root = root
                .canonicalize()
                .with_context(|| format!("Repository root does not exist: {}", root.display()))?;
            let count = GitHistory::open(&root)?.commit_count()?;
            report_repo_count(&root, count, json)
        }
        (Some(file), repo) => {
            let file = file
                .canonicalize()
                .with_context(|| format!("File does not exist: {}", file.display()))?;
            let root = match repo {
                Some(root) => root.canonicalize().with_context(|| {
                    format!("Repository root does not exist: {}", root.display())
                })?,
                None => {
                    let config = ScoutConfig::load(file.parent().unwrap_or(Path::new(".")));
                    enclosing_repository(&file, &config.layout.vcs_prefix).with_context(|| {
                        format!(
                            "No enclosing git repository found for {} (pass --repo to name one)",
                            file.display()
                        )
                    })?
                }
            };
            let count = GitHistory::open(&root)?.commit_count_for(&file)?;
            report_file_count(&root, &file, count, json)
        }
    }
}

fn report_repo_count(root: &Path, count: usize, json: bool) -> Result<()> {
    if json {
        let out = serde_json::json!({
            "repository": root,
            "commits": count,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }
    println!(
        "{}{} has {} commits",
        style("✓ ").green(),
        root.display(),
        style(count).cyan()
    );
    Ok(())
}

fn report_file_count(root: &Path, file: &Path, count: usize, json: bool) -> Result<()> {
    if json {
        let out = serde_json::json!({
            "repository": root,
            "file": file,
            "commits": count,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }
    println!(
        "{}{} commits touch {}",
        style("✓ ").green(),
        style(count).cyan(),
        file.display()
    );
    Ok(())
}
