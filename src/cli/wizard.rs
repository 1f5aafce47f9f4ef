//! Interactive wizard - prompt-driven discovery and history queries
//!
//! The flow mirrors the subcommands: pick an operation, pick a starting
//! directory from a ladder of ancestors, resolve ambiguous candidate lists
//! by number. Free-text file input falls back to fragment search when the
//! typed path does not exist.

use anyhow::Result;
use console::{style, Term};
use indicatif::ProgressBar;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::ScoutConfig;
use crate::discovery::{FileFinder, RepositoryLocator};
use crate::git::GitHistory;

enum MenuChoice {
    FindFile,
    FindRepos,
    FileCommits,
    RepoCommits,
    Quit,
}

pub(super) fn run() -> Result<()> {
    let term = Term::stdout();
    term.write_line(&format!("{}", style("Reposcout").bold()))?;
    term.write_line("Find Java source files and git repositories, count commit history.")?;
    loop {
        match prompt_menu(&term)? {
            MenuChoice::FindFile => find_file_flow(&term)?,
            MenuChoice::FindRepos => {
                find_repos_flow(&term)?;
            }
            MenuChoice::FileCommits => file_commits_flow(&term)?,
            MenuChoice::RepoCommits => repo_commits_flow(&term)?,
            MenuChoice::Quit => return Ok(()),
        }
        term.write_line("")?;
    }
}

fn prompt_menu(term: &Term) -> Result<MenuChoice> {
    term.write_line("")?;
    term.write_line("Please select an option:")?;
    term.write_line("  1 - Find a Java source file by name")?;
    term.write_line("  2 - Find git repositories")?;
    term.write_line("  3 - Count commits made to a source file")?;
    term.write_line("  4 - Count commits in a repository")?;
    term.write_line("  q - Quit")?;
    loop {
        let input = term.read_line()?;
        match input.trim() {
            "1" => return Ok(MenuChoice::FindFile),
            "2" => return Ok(MenuChoice::FindRepos),
            "3" => return Ok(MenuChoice::FileCommits),
            "4" => return Ok(MenuChoice::RepoCommits),
            // Empty input covers EOF on a closed stdin.
            "" | "q" | "Q" => return Ok(MenuChoice::Quit),
            _ => term.write_line("Please select an option between 1 and 4, or q to quit.")?,
        }
    }
}

/// Resolve a candidate list to a single choice.
///
/// Zero candidates reports not-found and returns None; exactly one is taken
/// as-is; more than one shows the first nine and asks for a 1-based pick.
fn select(term: &Term, what: &str, candidates: &[PathBuf]) -> Result<Option<PathBuf>> {
    match candidates {
        [] => {
            term.write_line(&format!(
                "{}No {} found. Check your capitalization and spelling, then try again.",
                style("✗ ").red(),
                what
            ))?;
            Ok(None)
        }
        [only] => {
            term.write_line(&format!("Found: {}", style(only.display()).cyan()))?;
            Ok(Some(only.clone()))
        }
        _ => {
            let shown = candidates.len().min(9);
            term.write_line(&format!("Pick a {} by number:", what))?;
            for (i, candidate) in candidates[..shown].iter().enumerate() {
                term.write_line(&format!(
                    "  {} : {}",
                    style(i + 1).bold(),
                    candidate.display()
                ))?;
            }
            if candidates.len() > shown {
                term.write_line(&format!(
                    "  … and {} more (narrow your search to see them)",
                    candidates.len() - shown
                ))?;
            }
            let index = read_index(term, shown)?;
            Ok(Some(candidates[index - 1].clone()))
        }
    }
}

/// Read a 1-based index up to `max`, reprompting until valid.
fn read_index(term: &Term, max: usize) -> Result<usize> {
    loop {
        let input = term.read_line()?;
        match input.trim().parse::<usize>() {
            Ok(n) if (1..=max).contains(&n) => return Ok(n),
            _ => term.write_line(&format!("Please enter a number between 1 and {}.", max))?,
        }
    }
}

/// Offer the working directory and up to four progressively wider
/// ancestors as starting points.
fn prompt_start_dir(term: &Term) -> Result<PathBuf> {
    let options = start_dir_options();
    term.write_line("")?;
    term.write_line("From where should I start looking?")?;
    for (i, option) in options.iter().enumerate() {
        term.write_line(&format!("  {} : {}", style(i + 1).bold(), option.display()))?;
    }
    let index = read_index(term, options.len())?;
    Ok(options[index - 1].clone())
}

fn start_dir_options() -> Vec<PathBuf> {
    let Ok(cwd) = std::env::current_dir() else {
        return vec![PathBuf::from(".")];
    };
    let mut options = vec![cwd.clone()];
    let mut dir = cwd;
    while options.len() < 5 {
        // Hop two levels at a time so five options span a wide range.
        let next = match dir.parent() {
            None => break,
            Some(parent) => match parent.parent() {
                None => parent.to_path_buf(),
                Some(grand) => grand.to_path_buf(),
            },
        };
        if next == dir {
            break;
        }
        options.push(next.clone());
        dir = next;
    }
    options
}

fn find_file_flow(term: &Term) -> Result<()> {
    if let Some(file) = prompt_source_file(term, None)? {
        term.write_line(&format!(
            "{}Selected {}",
            style("✓ ").green(),
            file.display()
        ))?;
    }
    Ok(())
}

fn find_repos_flow(term: &Term) -> Result<Option<PathBuf>> {
    let start = prompt_start_dir(term)?;
    let config = ScoutConfig::load(&start);
    let roots = locate_repos(&config, &start);
    let selected = select(term, "repository", &roots)?;
    if selected.is_none() {
        term.write_line(
            "Tip: a repository is a directory with a .git entry and a src folder \
             holding at least one .java file somewhere beneath it.",
        )?;
    }
    Ok(selected)
}

fn file_commits_flow(term: &Term) -> Result<()> {
    let Some(root) = find_repos_flow(term)? else {
        return Ok(());
    };
    let Some(file) = prompt_source_file(term, Some(&root))? else {
        return Ok(());
    };
    let count = GitHistory::open(&root)?.commit_count_for(&file)?;
    term.write_line(&format!(
        "{}{} commits touch {}",
        style("✓ ").green(),
        style(count).cyan(),
        file.display()
    ))?;
    Ok(())
}

fn repo_commits_flow(term: &Term) -> Result<()> {
    let Some(root) = find_repos_flow(term)? else {
        return Ok(());
    };
    let count = GitHistory::open(&root)?.commit_count()?;
    term.write_line(&format!(
        "{}{} has {} commits",
        style("✓ ").green(),
        root.display(),
        style(count).cyan()
    ))?;
    Ok(())
}

/// Ask for a source file by name or path. An existing source-file path is
/// taken directly; anything else is reduced to a name fragment and searched
/// for, under `within` when given, otherwise under a prompted start
/// directory.
fn prompt_source_file(term: &Term, within: Option<&Path>) -> Result<Option<PathBuf>> {
    term.write_line("")?;
    term.write_line("Enter the name or path of a .java file:")?;
    let input = term.read_line()?;
    let trimmed = input.trim().trim_matches('"').to_string();

    let config = ScoutConfig::load(within.unwrap_or(Path::new(".")));
    let typed = PathBuf::from(&trimmed);
    if config.layout.is_source_file(&typed) && typed.is_file() {
        return Ok(Some(typed));
    }

    let fragment = fragment_of(&trimmed);
    if fragment.is_empty() {
        term.write_line("That doesn't look like a file name. Please try again.")?;
        return Ok(None);
    }
    term.write_line(&format!(
        "No source file at '{}'; searching for names containing '{}' instead.",
        trimmed, fragment
    ))?;

    let start = match within {
        Some(root) => root.to_path_buf(),
        None => prompt_start_dir(term)?,
    };
    let matches = search_files(&config, &fragment, &start);
    select(term, "file", &matches)
}

/// Reduce free-text input to a bare name fragment: drop any directory
/// prefix and a trailing extension.
fn fragment_of(input: &str) -> String {
    let name = Path::new(input)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    match name.rfind('.') {
        Some(i) if i > 0 => name[..i].to_string(),
        _ => name,
    }
}

fn search_files(config: &ScoutConfig, fragment: &str, start: &Path) -> Vec<PathBuf> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(super::spinner_style());
    spinner.set_message(format!(
        "Searching for '{}' under {}... this may take a minute",
        fragment,
        start.display()
    ));
    spinner.enable_steady_tick(Duration::from_millis(100));
    let matches = FileFinder::new(&config.layout)
        .with_progress(|dir| spinner.set_message(format!("Searching {}...", dir.display())))
        .find(fragment, start);
    spinner.finish_and_clear();
    matches
}

fn locate_repos(config: &ScoutConfig, start: &Path) -> Vec<PathBuf> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(super::spinner_style());
    spinner.set_message(format!(
        "Searching for repositories under {}... this may take a minute",
        start.display()
    ));
    spinner.enable_steady_tick(Duration::from_millis(100));
    let roots = RepositoryLocator::new(config)
        .with_progress(|dir| spinner.set_message(format!("Searching {}...", dir.display())))
        .locate(start);
    spinner.finish_and_clear();
    roots
}
