//! Find command - locate source files by name fragment

use anyhow::{Context, Result};
use console::style;
use indicatif::ProgressBar;
use std::path::Path;
use std::time::Duration;

use crate::config::ScoutConfig;
use crate::discovery::FileFinder;

pub(super) fn run(fragment: &str, path: &Path, json: bool) -> Result<()> {
    let start = path
        .canonicalize()
        .with_context(|| format!("Search root does not exist: {}", path.display()))?;
    let config = ScoutConfig::load(&start);
    let fragment = fragment
        .strip_suffix(config.layout.source_extension.as_str())
        .unwrap_or(fragment);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(super::spinner_style());
    spinner.set_message(format!("Searching for '{}' under {}...", fragment, start.display()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let matches = FileFinder::new(&config.layout)
        .with_progress(|dir| spinner.set_message(format!("Searching {}...", dir.display())))
        .find(fragment, &start);

    spinner.finish_and_clear();

    if json {
        let out = serde_json::json!({
            "fragment": fragment,
            "root": start,
            "matches": matches,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    for (i, found) in matches.iter().enumerate() {
        println!("  {} {}", style(format!("{}.", i + 1)).dim(), found.display());
    }
    match matches.len() {
        0 => println!(
            "{}No files matching '{}' under {}",
            style("✗ ").red(),
            fragment,
            start.display()
        ),
        1 => println!("{}Found 1 matching file", style("✓ ").green()),
        n => println!(
            "{}Found {} matching files",
            style("✓ ").green(),
            style(n).cyan()
        ),
    }
    Ok(())
}
