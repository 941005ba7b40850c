/// Moving desktop files into their category folders.
///
/// [`FileOrganizer`] performs a single move. [`Organizer`] walks the direct
/// children of the desktop once, classifies each regular file against a
/// [`CategoryTable`] and moves it, reporting every outcome as it happens.
/// Per-file failures never stop the walk.
use crate::file_category::CategoryTable;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// A single file that was (or in a dry run, would be) moved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    /// The file name, unchanged by the move.
    pub name: String,
    /// Where the file was before the run.
    pub original_path: PathBuf,
    /// Where the file is after the move.
    pub new_path: PathBuf,
    /// The category folder the file went into.
    pub category: String,
}

/// Errors that can occur while organizing the desktop.
///
/// Everything except [`OrganizeError::InvalidBasePath`] is scoped to one file
/// and recovered by moving on to the next entry.
#[derive(Debug, Error)]
pub enum OrganizeError {
    /// Failed to create a category directory.
    #[error("Failed to create directory {}: {source}", .path.display())]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The category folder failed to be created earlier in this run.
    #[error("Skipped {}: category folder {category} is unavailable", .file.display())]
    CategoryUnavailable { file: PathBuf, category: String },

    /// A file with the same name already sits in the category folder.
    #[error("Refusing to move {} to {}: destination already exists", .source_path.display(), .destination.display())]
    DestinationCollision {
        source_path: PathBuf,
        destination: PathBuf,
    },

    /// The rename itself failed (permissions, cross-device, vanished file).
    #[error("Failed to move {} to {}: {source}", .source_path.display(), .destination.display())]
    FileMoveFailure {
        source_path: PathBuf,
        destination: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A directory entry could not be read during enumeration.
    #[error("Failed to read an entry of {}: {source}", .dir.display())]
    EntryUnreadable {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The base directory path is invalid or can't be listed.
    #[error("Invalid base path {}: {source}", .path.display())]
    InvalidBasePath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for file organization operations.
pub type OrganizeResult<T> = Result<T, OrganizeError>;

/// Moves one file into a category folder.
pub struct FileOrganizer;

impl FileOrganizer {
    /// Moves a file into its category directory within the base path.
    ///
    /// If the category directory doesn't exist, it is created. A file that
    /// already exists at the destination is never overwritten: the move fails
    /// with [`OrganizeError::DestinationCollision`] and both files stay put.
    ///
    /// # Arguments
    ///
    /// * `base_path` - The desktop directory holding the category folders
    /// * `file_path` - The full path to the file to be moved
    /// * `category_dir_name` - The folder name for this file's category
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use desktop_cleaner::file_organizer::FileOrganizer;
    /// use std::path::Path;
    ///
    /// let result = FileOrganizer::move_to_category(
    ///     Path::new("/home/me/Desktop"),
    ///     Path::new("/home/me/Desktop/report.pdf"),
    ///     "PDFS",
    /// );
    ///
    /// match result {
    ///     Ok(m) => println!("Moved {} to {}", m.name, m.new_path.display()),
    ///     Err(e) => eprintln!("{}", e),
    /// }
    /// ```
    pub fn move_to_category(
        base_path: &Path,
        file_path: &Path,
        category_dir_name: &str,
    ) -> OrganizeResult<Move> {
        let category_path = Self::ensure_category_dir(base_path, category_dir_name)?;
        let destination_path = Self::destination_for(file_path, &category_path)?;

        if destination_path.symlink_metadata().is_ok() {
            return Err(OrganizeError::DestinationCollision {
                source_path: file_path.to_path_buf(),
                destination: destination_path,
            });
        }

        fs::rename(file_path, &destination_path).map_err(|e| {
            OrganizeError::FileMoveFailure {
                source_path: file_path.to_path_buf(),
                destination: destination_path.clone(),
                source: e,
            }
        })?;

        Ok(Move {
            name: file_name_of(file_path),
            original_path: file_path.to_path_buf(),
            new_path: destination_path,
            category: category_dir_name.to_string(),
        })
    }

    /// Computes the move without touching the filesystem.
    ///
    /// Collisions and category paths occupied by something other than a
    /// folder are still detected, so a dry run reports what a real run
    /// would refuse.
    pub fn plan_move(
        base_path: &Path,
        file_path: &Path,
        category_dir_name: &str,
    ) -> OrganizeResult<Move> {
        let category_path = base_path.join(category_dir_name);

        if category_path.symlink_metadata().is_ok() && !category_path.is_dir() {
            return Err(OrganizeError::DirectoryCreationFailed {
                path: category_path,
                source: std::io::Error::new(
                    std::io::ErrorKind::AlreadyExists,
                    "path exists and is not a directory",
                ),
            });
        }

        let destination_path = Self::destination_for(file_path, &category_path)?;

        if destination_path.symlink_metadata().is_ok() {
            return Err(OrganizeError::DestinationCollision {
                source_path: file_path.to_path_buf(),
                destination: destination_path,
            });
        }

        Ok(Move {
            name: file_name_of(file_path),
            original_path: file_path.to_path_buf(),
            new_path: destination_path,
            category: category_dir_name.to_string(),
        })
    }

    /// Creates the category directory if needed. An existing one is reused.
    fn ensure_category_dir(base_path: &Path, category_dir_name: &str) -> OrganizeResult<PathBuf> {
        let category_path = base_path.join(category_dir_name);

        if category_path.is_dir() {
            return Ok(category_path);
        }

        match fs::create_dir(&category_path) {
            Ok(()) => {
                debug!(path = %category_path.display(), "created category folder");
                Ok(category_path)
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists && category_path.is_dir() => {
                Ok(category_path)
            }
            Err(e) => Err(OrganizeError::DirectoryCreationFailed {
                path: category_path,
                source: e,
            }),
        }
    }

    fn destination_for(file_path: &Path, category_path: &Path) -> OrganizeResult<PathBuf> {
        let file_name = file_path
            .file_name()
            .ok_or_else(|| OrganizeError::FileMoveFailure {
                source_path: file_path.to_path_buf(),
                destination: category_path.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "file has no name component",
                ),
            })?;

        Ok(category_path.join(file_name))
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Something that happened to one desktop entry during a run.
#[derive(Debug)]
pub enum OrganizeEvent<'a> {
    /// The file was moved into its category folder.
    Moved(&'a Move),
    /// Dry run only: the file would be moved.
    WouldMove(&'a Move),
    /// The entry could not be organized; the run continues.
    Failed(&'a OrganizeError),
}

/// Totals for one run.
#[derive(Debug, Default)]
pub struct OrganizeReport {
    /// Files moved, or planned in a dry run, in processing order.
    pub moved: Vec<Move>,
    /// Per-file failures in processing order.
    pub failures: Vec<OrganizeError>,
    /// Regular files whose extension matched no category.
    pub unmatched: usize,
    /// Whether this report describes a dry run.
    pub dry_run: bool,
}

impl OrganizeReport {
    pub fn moved_count(&self) -> usize {
        self.moved.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// The closing line printed after a run.
    ///
    /// # Examples
    ///
    /// ```
    /// use desktop_cleaner::file_organizer::OrganizeReport;
    ///
    /// assert_eq!(OrganizeReport::default().summary(), "No files were moved.");
    /// ```
    pub fn summary(&self) -> String {
        let count = self.moved_count();
        let noun = if count == 1 { "file" } else { "files" };

        match (self.dry_run, count) {
            (false, 0) => "No files were moved.".to_string(),
            (true, 0) => "No files would be moved.".to_string(),
            (false, n) => format!("{} {} moved.", n, noun),
            (true, n) => format!("{} {} would be moved.", n, noun),
        }
    }
}

/// Sorts the direct children of one directory into category folders.
pub struct Organizer<'a> {
    base_path: &'a Path,
    table: &'a CategoryTable,
    dry_run: bool,
}

impl<'a> Organizer<'a> {
    pub fn new(base_path: &'a Path, table: &'a CategoryTable) -> Self {
        Self {
            base_path,
            table,
            dry_run: false,
        }
    }

    /// Plans moves without creating folders or moving files.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Processes every direct child of the base directory once.
    ///
    /// The callback sees each move or failure as soon as it happens. Only a
    /// failure to list the base directory is returned as an error; everything
    /// else ends up in the report.
    pub fn organize<F>(&self, mut on_event: F) -> OrganizeResult<OrganizeReport>
    where
        F: FnMut(OrganizeEvent<'_>),
    {
        let mut report = OrganizeReport {
            dry_run: self.dry_run,
            ..OrganizeReport::default()
        };
        let files = self.collect_files(&mut report, &mut on_event)?;

        // Categories whose folder could not be created this run.
        let mut unavailable: HashSet<String> = HashSet::new();

        for file_path in files {
            let Some(category) = self.table.categorize(&file_path) else {
                debug!(file = %file_path.display(), "no category matches, leaving in place");
                report.unmatched += 1;
                continue;
            };
            let category = category.name();
            debug!(file = %file_path.display(), category, "classified");

            let result = if unavailable.contains(category) {
                Err(OrganizeError::CategoryUnavailable {
                    file: file_path.clone(),
                    category: category.to_string(),
                })
            } else if self.dry_run {
                FileOrganizer::plan_move(self.base_path, &file_path, category)
            } else {
                FileOrganizer::move_to_category(self.base_path, &file_path, category)
            };

            match result {
                Ok(planned) => {
                    report.moved.push(planned);
                    if let Some(last) = report.moved.last() {
                        if self.dry_run {
                            on_event(OrganizeEvent::WouldMove(last));
                        } else {
                            on_event(OrganizeEvent::Moved(last));
                        }
                    }
                }
                Err(err) => {
                    if matches!(err, OrganizeError::DirectoryCreationFailed { .. }) {
                        unavailable.insert(category.to_string());
                    }
                    debug!(error = %err, "could not organize file");
                    on_event(OrganizeEvent::Failed(&err));
                    report.failures.push(err);
                }
            }
        }

        Ok(report)
    }

    /// Lists the regular files directly inside the base directory, by name.
    ///
    /// Directories, symlinks and special files are left out. Entries that
    /// can't be read are reported and skipped.
    fn collect_files<F>(
        &self,
        report: &mut OrganizeReport,
        on_event: &mut F,
    ) -> OrganizeResult<Vec<PathBuf>>
    where
        F: FnMut(OrganizeEvent<'_>),
    {
        let entries =
            fs::read_dir(self.base_path).map_err(|e| OrganizeError::InvalidBasePath {
                path: self.base_path.to_path_buf(),
                source: e,
            })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let err = OrganizeError::EntryUnreadable {
                        dir: self.base_path.to_path_buf(),
                        source: e,
                    };
                    on_event(OrganizeEvent::Failed(&err));
                    report.failures.push(err);
                    continue;
                }
            };

            // file_type() does not follow symlinks.
            if let Ok(file_type) = entry.file_type()
                && file_type.is_file()
            {
                files.push(entry.path());
            }
        }

        files.sort();
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_move_to_category_creates_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();

        let file_path = base_path.join("notes.txt");
        fs::write(&file_path, "test content").expect("Failed to write test file");

        let moved = FileOrganizer::move_to_category(base_path, &file_path, "NOTES")
            .expect("Failed to move file");

        let category_dir = base_path.join("NOTES");
        assert!(category_dir.is_dir());
        assert!(!file_path.exists());
        assert_eq!(moved.new_path, category_dir.join("notes.txt"));
        assert_eq!(moved.name, "notes.txt");
        assert!(moved.new_path.exists());
    }

    #[test]
    fn test_move_to_category_uses_existing_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();

        let category_dir = base_path.join("PICS");
        fs::create_dir(&category_dir).expect("Failed to create category directory");
        fs::write(category_dir.join("old.png"), "old").expect("Failed to write file");

        let file_path = base_path.join("img.png");
        fs::write(&file_path, "test content").expect("Failed to write test file");

        FileOrganizer::move_to_category(base_path, &file_path, "PICS")
            .expect("Failed to move file");

        assert!(!file_path.exists());
        assert!(category_dir.join("img.png").exists());
        assert!(category_dir.join("old.png").exists());
    }

    #[test]
    fn test_move_refuses_to_overwrite() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();

        let category_dir = base_path.join("PDFS");
        fs::create_dir(&category_dir).expect("Failed to create category directory");
        fs::write(category_dir.join("report.pdf"), "existing").expect("Failed to write file");

        let file_path = base_path.join("report.pdf");
        fs::write(&file_path, "incoming").expect("Failed to write test file");

        let result = FileOrganizer::move_to_category(base_path, &file_path, "PDFS");
        assert!(matches!(
            result,
            Err(OrganizeError::DestinationCollision { .. })
        ));

        assert!(file_path.exists());
        let kept = fs::read_to_string(category_dir.join("report.pdf")).expect("Failed to read");
        assert_eq!(kept, "existing");
    }

    #[test]
    fn test_category_path_occupied_by_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();

        fs::write(base_path.join("CODE"), "in the way").expect("Failed to write file");
        let file_path = base_path.join("tool.py");
        fs::write(&file_path, "print()").expect("Failed to write test file");

        let result = FileOrganizer::move_to_category(base_path, &file_path, "CODE");
        assert!(matches!(
            result,
            Err(OrganizeError::DirectoryCreationFailed { .. })
        ));
        assert!(file_path.exists());
    }

    #[test]
    fn test_move_vanished_file_fails() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();
        let file_path = base_path.join("gone.txt");

        let result = FileOrganizer::move_to_category(base_path, &file_path, "NOTES");
        assert!(matches!(result, Err(OrganizeError::FileMoveFailure { .. })));
    }

    #[test]
    fn test_plan_move_touches_nothing() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();
        let file_path = base_path.join("song.mp3");
        fs::write(&file_path, "la").expect("Failed to write test file");

        let planned =
            FileOrganizer::plan_move(base_path, &file_path, "MUSIC").expect("Failed to plan");

        assert_eq!(planned.new_path, base_path.join("MUSIC").join("song.mp3"));
        assert!(file_path.exists());
        assert!(!base_path.join("MUSIC").exists());
    }

    #[test]
    fn test_plan_move_detects_blocked_category_path() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();
        fs::write(base_path.join("CODE"), "in the way").expect("Failed to write file");
        let file_path = base_path.join("a.py");
        fs::write(&file_path, "print()").expect("Failed to write test file");

        let result = FileOrganizer::plan_move(base_path, &file_path, "CODE");
        assert!(matches!(
            result,
            Err(OrganizeError::DirectoryCreationFailed { .. })
        ));
        assert!(file_path.exists());
    }

    #[test]
    fn test_organize_reports_events_in_name_order() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();
        for name in ["b.py", "a.txt", "c.unknown"] {
            fs::write(base_path.join(name), name).expect("Failed to write test file");
        }

        let table = CategoryTable::default();
        let mut seen = Vec::new();
        let report = Organizer::new(base_path, &table)
            .organize(|event| {
                if let OrganizeEvent::Moved(m) = event {
                    seen.push(m.name.clone());
                }
            })
            .expect("Failed to organize");

        assert_eq!(seen, vec!["a.txt".to_string(), "b.py".to_string()]);
        assert_eq!(report.moved_count(), 2);
        assert_eq!(report.unmatched, 1);
        assert!(!report.has_failures());
    }

    #[test]
    fn test_organize_invalid_base_path() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let missing = temp_dir.path().join("missing");
        let table = CategoryTable::default();

        let result = Organizer::new(&missing, &table).organize(|_| {});
        assert!(matches!(result, Err(OrganizeError::InvalidBasePath { .. })));
    }

    #[test]
    fn test_failed_category_is_skipped_for_later_files() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();

        fs::write(base_path.join("CODE"), "blocks the folder").expect("Failed to write file");
        for name in ["a.py", "b.rs", "c.txt"] {
            fs::write(base_path.join(name), name).expect("Failed to write test file");
        }

        let table = CategoryTable::default();
        let report = Organizer::new(base_path, &table)
            .organize(|_| {})
            .expect("Failed to organize");

        assert_eq!(report.moved_count(), 1);
        assert_eq!(report.failures.len(), 2);
        assert!(matches!(
            report.failures[0],
            OrganizeError::DirectoryCreationFailed { .. }
        ));
        assert!(matches!(
            report.failures[1],
            OrganizeError::CategoryUnavailable { .. }
        ));
        assert!(base_path.join("a.py").exists());
        assert!(base_path.join("b.rs").exists());
        assert!(base_path.join("NOTES").join("c.txt").exists());
    }

    #[test]
    fn test_summary_wording() {
        let mut report = OrganizeReport::default();
        assert_eq!(report.summary(), "No files were moved.");

        report.moved.push(Move {
            name: "a.txt".to_string(),
            original_path: PathBuf::from("a.txt"),
            new_path: PathBuf::from("NOTES/a.txt"),
            category: "NOTES".to_string(),
        });
        assert_eq!(report.summary(), "1 file moved.");

        report.moved.push(report.moved[0].clone());
        assert_eq!(report.summary(), "2 files moved.");

        report.dry_run = true;
        assert_eq!(report.summary(), "2 files would be moved.");

        report.moved.clear();
        assert_eq!(report.summary(), "No files would be moved.");
    }
}
