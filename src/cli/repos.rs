//! Repos command - locate git-backed source projects

use anyhow::{Context, Result};
use console::style;
use indicatif::ProgressBar;
use std::path::Path;
use std::time::Duration;

use crate::config::ScoutConfig;
use crate::discovery::RepositoryLocator;

pub(super) fn run(path: &Path, json: bool) -> Result<()> {
    let start = path
        .canonicalize()
        .with_context(|| format!("Search root does not exist: {}", path.display()))?;
    let config = ScoutConfig::load(&start);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(super::spinner_style());
    spinner.set_message(format!("Searching for repositories under {}...", start.display()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let roots = RepositoryLocator::new(&config)
        .with_progress(|dir| spinner.set_message(format!("Searching {}...", dir.display())))
        .locate(&start);

    spinner.finish_and_clear();

    if json {
        let out = serde_json::json!({
            "root": start,
            "repositories": roots,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    for (i, root) in roots.iter().enumerate() {
        println!("  {} {}", style(format!("{}.", i + 1)).dim(), root.display());
    }
    match roots.len() {
        0 => println!(
            "{}No git-backed projects under {}",
            style("✗ ").red(),
            start.display()
        ),
        1 => println!("{}Found 1 repository", style("✓ ").green()),
        n => println!(
            "{}Found {} repositories",
            style("✓ ").green(),
            style(n).cyan()
        ),
    }
    Ok(())
}
