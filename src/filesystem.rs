use std::io;
use std::path::Path;

/// One immediate child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub is_directory: bool,
}

/// Whether a regular file exists at `path`.
///
/// Permission errors and dangling symlinks count as "does not exist".
pub fn file_exists(path: &Path) -> bool {
    path.is_file()
}

pub fn directory_exists(path: &Path) -> bool {
    path.is_dir()
}

/// Read a text file as lines. Invalid UTF-8 is replaced rather than rejected,
/// since `.desktop` and `index.theme` files in the wild are not always clean.
pub fn read_lines(path: &Path) -> io::Result<Vec<String>> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes)
        .lines()
        .map(str::to_owned)
        .collect())
}

/// List the immediate children of `path` in the order the filesystem yields
/// them. `read_dir` never yields `.` or `..`.
pub fn list_directory(path: &Path) -> io::Result<Vec<DirectoryEntry>> {
    let mut entries = Vec::new();
    for entry in std::fs::read_dir(path)? {
        let Ok(entry) = entry else {
            continue;
        };
        let name = entry.file_name().to_string_lossy().into_owned();
        // Follow symlinks: themes are often linked into ~/.icons.
        let is_directory = entry.path().is_dir();
        entries.push(DirectoryEntry { name, is_directory });
    }
    Ok(entries)
}

/// Append `suffix` unless `name` already ends with it.
pub fn terminate_with(name: &str, suffix: &str) -> String {
    if name.ends_with(suffix) {
        name.to_owned()
    } else {
        format!("{name}{suffix}")
    }
}
