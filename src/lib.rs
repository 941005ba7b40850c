//! desktop-cleaner - sweep loose desktop files into category folders
//!
//! This library finds the platform's desktop directory, classifies each file
//! directly inside it by extension against an ordered category table, and
//! moves matched files into per-category subfolders.

pub mod cli;
pub mod desktop;
pub mod file_category;
pub mod file_organizer;
pub mod logging;
pub mod output;

pub use cli::{Cli, CleanerError, RunEvent, exit_status, run, run_observed, run_with};
pub use desktop::{DesktopResolver, Platform, Resolution, ResolveError};
pub use file_category::{Category, CategoryTable};
pub use file_organizer::{FileOrganizer, OrganizeError, OrganizeReport, Organizer};
