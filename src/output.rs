//! Console output formatting.
//!
//! All user-facing lines go through [`OutputFormatter`] so the symbols and
//! colors stay consistent. Diagnostics go through `tracing` instead.

use crate::cli::RunEvent;
use crate::file_organizer::{Move, OrganizeError, OrganizeEvent, OrganizeReport};
use colored::*;

/// Prints progress, warnings and the closing summary.
pub struct OutputFormatter;

impl OutputFormatter {
    /// Prints a success message in green with a checkmark.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use desktop_cleaner::output::OutputFormatter;
    /// OutputFormatter::success("4 files moved.");
    /// ```
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Prints an error message to stderr in red with an X mark.
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Prints a warning message in yellow with a warning symbol.
    pub fn warning(message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    /// Prints an info message in cyan.
    pub fn info(message: &str) {
        println!("{}", message.cyan());
    }

    /// Prints a regular message without styling.
    pub fn plain(message: &str) {
        println!("{}", message);
    }

    /// Prints a dry-run notice message.
    pub fn dry_run_notice(message: &str) {
        println!("{}", format!("[DRY RUN] {}", message).yellow());
    }

    /// Prints the line for one run event.
    pub fn run_event(event: &RunEvent<'_>) {
        match event {
            RunEvent::Warning(message) => Self::warning(message),
            RunEvent::Started {
                path,
                dry_run: true,
            } => Self::dry_run_notice(&format!("Analyzing contents of {}", path.display())),
            RunEvent::Started { path, .. } => {
                Self::info(&format!("Organizing contents of {}", path.display()))
            }
            RunEvent::Organize(event) => Self::event(event),
            RunEvent::Finished(report) => Self::summary(report),
        }
    }

    /// Prints the line for one organizer event.
    pub fn event(event: &OrganizeEvent<'_>) {
        match event {
            OrganizeEvent::Moved(m) => Self::plain(&moved_line(m)),
            OrganizeEvent::WouldMove(m) => Self::dry_run_notice(&would_move_line(m)),
            OrganizeEvent::Failed(err) => Self::error(&failure_line(err)),
        }
    }

    /// Prints the closing summary. Zero moves is neutral, not a failure.
    pub fn summary(report: &OrganizeReport) {
        let summary = report.summary();
        if report.moved_count() == 0 {
            Self::info(&summary);
        } else {
            Self::success(&summary);
        }

        if report.has_failures() {
            let count = report.failures.len();
            Self::warning(&format!(
                "{} {} could not be organized. See the errors above.",
                count,
                if count == 1 { "file" } else { "files" }
            ));
        }
    }
}

/// `Moved <name> to <path>`
pub fn moved_line(m: &Move) -> String {
    format!("Moved {} to {}", m.name, m.new_path.display())
}

pub fn would_move_line(m: &Move) -> String {
    format!("Would move {} to {}", m.name, m.new_path.display())
}

pub fn failure_line(err: &OrganizeError) -> String {
    err.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample_move() -> Move {
        Move {
            name: "report.pdf".to_string(),
            original_path: PathBuf::from("/desk/report.pdf"),
            new_path: PathBuf::from("/desk/PDFS/report.pdf"),
            category: "PDFS".to_string(),
        }
    }

    #[test]
    fn test_moved_line() {
        assert_eq!(
            moved_line(&sample_move()),
            format!("Moved report.pdf to {}", PathBuf::from("/desk/PDFS/report.pdf").display())
        );
    }

    #[test]
    fn test_would_move_line() {
        assert!(would_move_line(&sample_move()).starts_with("Would move report.pdf to "));
    }

    #[test]
    fn test_failure_line_names_both_paths() {
        let err = OrganizeError::DestinationCollision {
            source_path: PathBuf::from("/desk/report.pdf"),
            destination: PathBuf::from("/desk/PDFS/report.pdf"),
        };
        let line = failure_line(&err);
        assert!(line.contains("report.pdf"));
        assert!(line.contains("already exists"));
    }
}
