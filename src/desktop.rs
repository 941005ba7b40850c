//! Desktop directory discovery.
//!
//! Picks the directory to clean for the host platform. Each platform has an
//! ordered list of candidates; the first one that exists as a directory wins,
//! and settling on anything but the first produces a fallback warning.
//!
//! | Platform | Primary          | Fallback                  |
//! |----------|------------------|---------------------------|
//! | POSIX    | `~/Desktop`      | `~`                       |
//! | Windows  | `~\Desktop`      | `~\OneDrive\Desktop`      |
//!
//! The resolver never prints. Warnings are returned in the [`Resolution`] so
//! the caller decides how to show them.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// The operating system family, as far as desktop discovery cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    /// Linux, macOS and the other Unix-like systems.
    Posix,
    Windows,
    /// Anything else, carrying the OS name for the error message.
    Unsupported(String),
}

impl Platform {
    /// Detects the platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else if cfg!(unix) {
            Platform::Posix
        } else {
            Platform::Unsupported(std::env::consts::OS.to_string())
        }
    }
}

/// Errors that stop the run before any file is touched.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("unsupported platform '{os}': pass --target <DIR> to choose a directory")]
    UnsupportedPlatform { os: String },

    #[error("could not determine the home directory")]
    HomeNotFound,

    #[error("no usable desktop directory found (tried {})", display_paths(.candidates))]
    NoUsableDirectory { candidates: Vec<PathBuf> },

    #[error("target directory {} does not exist or is not a directory", .path.display())]
    TargetNotFound { path: PathBuf },
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// The outcome of a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The directory to organize.
    pub path: PathBuf,
    /// Fallback notices, at most one per run.
    pub warnings: Vec<String>,
}

impl Resolution {
    pub fn used_fallback(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Resolves the desktop directory from injected platform and home state.
#[derive(Debug, Clone)]
pub struct DesktopResolver {
    platform: Platform,
    home: Option<PathBuf>,
    target: Option<PathBuf>,
}

impl DesktopResolver {
    /// Creates a resolver for an explicit platform and home directory.
    pub fn new(platform: Platform, home: Option<PathBuf>) -> Self {
        Self {
            platform,
            home,
            target: None,
        }
    }

    /// Creates a resolver for the running host.
    pub fn from_env() -> Self {
        Self::new(Platform::current(), dirs::home_dir())
    }

    /// Overrides discovery with an explicit directory.
    pub fn with_target(mut self, target: Option<PathBuf>) -> Self {
        self.target = target;
        self
    }

    /// Returns the candidate directories in the order they are tried.
    pub fn candidates(&self) -> Result<Vec<PathBuf>, ResolveError> {
        if let Platform::Unsupported(os) = &self.platform {
            return Err(ResolveError::UnsupportedPlatform { os: os.clone() });
        }

        let home = self.home.as_deref().ok_or(ResolveError::HomeNotFound)?;

        match self.platform {
            Platform::Windows => Ok(vec![
                home.join("Desktop"),
                home.join("OneDrive").join("Desktop"),
            ]),
            _ => Ok(vec![home.join("Desktop"), home.to_path_buf()]),
        }
    }

    /// Produces the directory to organize, or fails if none is usable.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use desktop_cleaner::desktop::DesktopResolver;
    ///
    /// let resolution = DesktopResolver::from_env().resolve()?;
    /// for warning in &resolution.warnings {
    ///     eprintln!("{}", warning);
    /// }
    /// println!("Cleaning {}", resolution.path.display());
    /// # Ok::<(), desktop_cleaner::desktop::ResolveError>(())
    /// ```
    pub fn resolve(&self) -> Result<Resolution, ResolveError> {
        if let Some(target) = &self.target {
            if !target.is_dir() {
                return Err(ResolveError::TargetNotFound {
                    path: target.clone(),
                });
            }
            debug!(path = %target.display(), "using explicit target directory");
            return Ok(Resolution {
                path: target.clone(),
                warnings: Vec::new(),
            });
        }

        let candidates = self.candidates()?;

        for (index, candidate) in candidates.iter().enumerate() {
            if !candidate.is_dir() {
                debug!(path = %candidate.display(), "desktop candidate missing");
                continue;
            }

            let mut warnings = Vec::new();
            if index > 0 {
                warnings.push(self.fallback_message(&candidates[0], candidate));
            }

            debug!(path = %candidate.display(), "resolved desktop directory");
            return Ok(Resolution {
                path: candidate.clone(),
                warnings,
            });
        }

        Err(ResolveError::NoUsableDirectory { candidates })
    }

    fn fallback_message(&self, primary: &Path, chosen: &Path) -> String {
        match self.platform {
            Platform::Windows => format!(
                "Local Desktop not found at {}, using OneDrive Desktop directory {}.",
                primary.display(),
                chosen.display()
            ),
            _ => format!(
                "Desktop directory not found at {}, using home directory {}.",
                primary.display(),
                chosen.display()
            ),
        }
    }
}
