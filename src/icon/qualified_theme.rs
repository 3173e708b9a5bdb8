use std::path::{Path, PathBuf};

use crate::environment::SystemEnvironment;
use crate::filesystem;
use crate::xdg::IconTheme;

const INDEX_FILE: &str = "index.theme";

/// A requested theme name together with the directories themes live in.
///
/// Nothing is cached: every lookup walks the search paths again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedIconTheme {
    theme_name: String,
    search_paths: Vec<PathBuf>,
}

impl QualifiedIconTheme {
    /// `search_paths` must already be restricted to directories that exist.
    pub fn new(search_paths: Vec<PathBuf>, theme_name: impl Into<String>) -> Self {
        Self {
            theme_name: theme_name.into(),
            search_paths,
        }
    }

    /// Use the environment's icon directories that are present on disk.
    pub fn from_environment(environment: &SystemEnvironment, theme_name: impl Into<String>) -> Self {
        let search_paths = environment
            .icon_theme_directories()
            .into_iter()
            .filter(|dir| filesystem::directory_exists(dir))
            .collect();
        Self::new(search_paths, theme_name)
    }

    pub fn theme_name(&self) -> &str {
        &self.theme_name
    }

    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Find the theme whose display or directory name is `name`.
    ///
    /// Search paths are tried in order, and within each the subdirectories
    /// in listing order; the first match wins. A subdirectory without a
    /// readable `index.theme` is not a theme. Returns the empty placeholder
    /// theme when nothing matches.
    pub fn icon_theme_from_name(&self, name: &str) -> IconTheme {
        for base in &self.search_paths {
            if let Some(theme) = find_in(base, name) {
                tracing::debug!(
                    theme = name,
                    path = %base.join(theme.internal_name()).display(),
                    "located icon theme"
                );
                return theme;
            }
        }
        tracing::debug!(theme = name, "icon theme not found");
        IconTheme::default()
    }

    /// The requested theme followed by its direct parents.
    ///
    /// Only one level of inheritance is followed: grandparents are not
    /// looked up.
    pub fn theme_with_parent(&self) -> Vec<IconTheme> {
        let theme = self.icon_theme_from_name(&self.theme_name);
        let parents: Vec<IconTheme> = theme
            .parents()
            .iter()
            .map(|parent| self.icon_theme_from_name(parent))
            .collect();

        let mut chain = Vec::with_capacity(parents.len() + 1);
        chain.push(theme);
        chain.extend(parents);
        chain
    }
}

fn find_in(base: &Path, name: &str) -> Option<IconTheme> {
    let entries = filesystem::list_directory(base).ok()?;
    entries
        .into_iter()
        .filter(|entry| entry.is_directory)
        .find_map(|entry| {
            let index = base.join(&entry.name).join(INDEX_FILE);
            let lines = filesystem::read_lines(&index).ok()?;
            let theme = IconTheme::parse(lines).with_internal_name(entry.name);
            theme.is_named(name).then_some(theme)
        })
}
