//! Command-line interface module for desktop-cleaner.
//!
//! This module handles:
//! - Argument parsing
//! - Desktop resolution and fallback warnings
//! - Organization orchestration and console progress
//! - Mapping fatal errors to the process exit status
//! - Shell completion scripts

use crate::desktop::{DesktopResolver, ResolveError};
use crate::file_category::CategoryTable;
use crate::file_organizer::{OrganizeError, OrganizeEvent, OrganizeReport, Organizer};
use crate::output::OutputFormatter;
use clap::{ArgAction, CommandFactory, Parser, ValueHint};
use clap_complete::Shell;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Sweep loose files on your desktop into category folders.
///
/// With no arguments, cleans ~/Desktop (falling back to the home directory)
/// on Linux and macOS, or ~\Desktop (falling back to ~\OneDrive\Desktop) on
/// Windows.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "desktop-cleaner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Clean this directory instead of the desktop
    #[arg(short = 't', long = "target", value_hint = ValueHint::DirPath)]
    pub target: Option<PathBuf>,

    /// Show what would be moved without touching any file
    #[arg(short = 'n', long = "dry-run", action = ArgAction::SetTrue)]
    pub dry_run: bool,

    /// Log every classification decision to stderr
    #[arg(short = 'v', long = "verbose", action = ArgAction::SetTrue)]
    pub verbose: bool,

    /// Print a completion script for SHELL and exit
    #[arg(long = "completions", value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

/// Writes the completion script for `shell` to `out`.
pub fn write_completions(shell: Shell, out: &mut dyn Write) {
    let mut command = Cli::command();
    clap_complete::generate(shell, &mut command, "desktop-cleaner", out);
}

/// Progress of one run, in the order it happens.
#[derive(Debug)]
pub enum RunEvent<'a> {
    /// A fallback directory was chosen.
    Warning(&'a str),
    /// The directory about to be organized.
    Started { path: &'a Path, dry_run: bool },
    Organize(OrganizeEvent<'a>),
    Finished(&'a OrganizeReport),
}

/// Errors that end a run with a non-zero exit status.
#[derive(Debug, Error)]
pub enum CleanerError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Organize(#[from] OrganizeError),
}

/// Runs a cleanup on the host desktop with the standard category table.
///
/// # Examples
///
/// ```no_run
/// use desktop_cleaner::cli::{run, Cli};
///
/// let cli = Cli { dry_run: true, ..Cli::default() };
/// match run(&cli) {
///     Ok(report) => println!("{}", report.summary()),
///     Err(e) => eprintln!("Error: {}", e),
/// }
/// ```
pub fn run(cli: &Cli) -> Result<OrganizeReport, CleanerError> {
    let resolver = DesktopResolver::from_env().with_target(cli.target.clone());
    run_with(&resolver, &CategoryTable::default(), cli.dry_run)
}

/// Resolves the directory, organizes it and prints progress along the way.
///
/// Resolution failures and an unreadable directory are fatal. Per-file
/// failures are printed as they occur and collected in the returned report.
pub fn run_with(
    resolver: &DesktopResolver,
    table: &CategoryTable,
    dry_run: bool,
) -> Result<OrganizeReport, CleanerError> {
    run_observed(resolver, table, dry_run, |event| {
        OutputFormatter::run_event(&event)
    })
}

/// Same as [`run_with`], but hands every event to `on_event` instead of
/// printing it.
pub fn run_observed<F>(
    resolver: &DesktopResolver,
    table: &CategoryTable,
    dry_run: bool,
    mut on_event: F,
) -> Result<OrganizeReport, CleanerError>
where
    F: FnMut(RunEvent<'_>),
{
    let resolution = resolver.resolve()?;

    for warning in &resolution.warnings {
        debug!("{}", warning);
        on_event(RunEvent::Warning(warning));
    }

    on_event(RunEvent::Started {
        path: &resolution.path,
        dry_run,
    });

    let report = Organizer::new(&resolution.path, table)
        .dry_run(dry_run)
        .organize(|event| on_event(RunEvent::Organize(event)))?;

    on_event(RunEvent::Finished(&report));
    Ok(report)
}

/// Exit status for a finished run: 0 on completion, even with per-file
/// failures or nothing moved, 1 on a fatal error.
pub fn exit_status<T>(result: &Result<T, CleanerError>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}
