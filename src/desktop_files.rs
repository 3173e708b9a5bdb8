use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::environment::SystemEnvironment;
use crate::filesystem;

const DESKTOP_EXTENSION: &str = ".desktop";

/// Finds `.desktop` files under a set of application directories.
#[derive(Debug, Clone, Default)]
pub struct DesktopFileSearch {
    directories: Vec<PathBuf>,
    report_bad_paths: bool,
}

/// Outcome of [`DesktopFileSearch::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DesktopFiles {
    pub file_names: Vec<PathBuf>,
    /// User-supplied directories that could not be opened.
    pub bad_paths: Vec<PathBuf>,
}

impl DesktopFileSearch {
    /// Search exactly `directories`, reporting the ones that cannot be read.
    pub fn new(directories: Vec<PathBuf>) -> Self {
        Self {
            directories,
            report_bad_paths: true,
        }
    }

    /// Search the environment's application directories. Missing ones are
    /// normal (not every data dir has `applications/`) and are not reported.
    pub fn from_environment(environment: &SystemEnvironment) -> Self {
        Self {
            directories: environment.application_directories(),
            report_bad_paths: false,
        }
    }

    /// `directories` when non-empty, the environment's defaults otherwise.
    pub fn with_default_fallback(directories: Vec<PathBuf>, environment: &SystemEnvironment) -> Self {
        if directories.is_empty() {
            Self::from_environment(environment)
        } else {
            Self::new(directories)
        }
    }

    pub fn directories(&self) -> &[PathBuf] {
        &self.directories
    }

    /// Walk every directory (once, even if listed twice) recursively.
    /// Results are sorted within each directory.
    pub fn resolve(&self) -> DesktopFiles {
        let mut result = DesktopFiles::default();
        let mut seen: Vec<&Path> = Vec::new();

        for directory in &self.directories {
            // Path equality ignores a trailing slash.
            if seen.contains(&directory.as_path()) {
                continue;
            }
            seen.push(directory.as_path());

            let mut found = Vec::new();
            if collect_desktop_files(directory, &mut found, &mut HashSet::new()).is_err() {
                if self.report_bad_paths {
                    tracing::warn!(path = %directory.display(), "cannot open application directory");
                    result.bad_paths.push(directory.clone());
                }
                continue;
            }
            found.sort();
            tracing::debug!(path = %directory.display(), count = found.len(), "scanned application directory");
            result.file_names.extend(found);
        }
        result
    }
}

fn collect_desktop_files(
    directory: &Path,
    found: &mut Vec<PathBuf>,
    visited: &mut HashSet<PathBuf>,
) -> std::io::Result<()> {
    // Symlinked directories can form cycles.
    let canonical = std::fs::canonicalize(directory)?;
    if !visited.insert(canonical) {
        return Ok(());
    }

    for entry in filesystem::list_directory(directory)? {
        let path = directory.join(&entry.name);
        if entry.is_directory {
            // An unreadable nested directory does not spoil its parent.
            if let Err(err) = collect_desktop_files(&path, found, visited) {
                tracing::debug!(path = %path.display(), error = %err, "skipping nested directory");
            }
        } else if entry.name.ends_with(DESKTOP_EXTENSION) {
            found.push(path);
        }
    }
    Ok(())
}
