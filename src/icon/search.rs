use std::path::{Path, PathBuf};

use crate::filesystem;
use crate::icon::{IconResolver, QualifiedIconTheme};
use crate::xdg::icon_subdirectory::UNREACHABLE_DISTANCE;
use crate::xdg::{IconSubdirectory, IconTheme};

/// File extensions tried for every candidate, in preference order.
pub const REGISTERED_EXTENSIONS: [&str; 3] = [".png", ".svg", ".xpm"];

/// XDG icon lookup for one required size over one theme chain.
///
/// Holds its own copy of the theme chain and search paths, so it is a plain
/// value that can be queried from any thread.
#[derive(Debug, Clone)]
pub struct IconSearch {
    required_size: u32,
    search_paths: Vec<PathBuf>,
    themes: Vec<IconTheme>,
}

impl IconSearch {
    pub fn new(required_size: u32, qualified_theme: &QualifiedIconTheme) -> Self {
        Self {
            required_size,
            search_paths: qualified_theme.search_paths().to_vec(),
            themes: qualified_theme.theme_with_parent(),
        }
    }

    pub fn required_size(&self) -> u32 {
        self.required_size
    }

    pub fn themes(&self) -> &[IconTheme] {
        &self.themes
    }

    fn name_in_theme(&self, name: &str) -> Option<PathBuf> {
        let locations = self.search_locations(name);
        self.lookup_by_size(&locations)
    }

    /// Every existing `<search path>/<theme>/<subdirectory>/<name><ext>`, in
    /// theme, subdirectory, search path, extension order.
    fn search_locations(&self, name: &str) -> Vec<IconSubdirectory> {
        let mut locations = Vec::new();
        for theme in &self.themes {
            for subdir in theme.directories() {
                for search_path in &self.search_paths {
                    let directory = search_path.join(theme.internal_name()).join(subdir.name());
                    for extension in REGISTERED_EXTENSIONS {
                        let candidate = directory.join(filesystem::terminate_with(name, extension));
                        if filesystem::file_exists(&candidate) {
                            locations.push(subdir.with_location(candidate));
                        }
                    }
                }
            }
        }
        locations
    }

    /// The first exact size match, else the closest size. Ties go to the
    /// earlier candidate; subdirectories that can never match are skipped.
    fn lookup_by_size(&self, locations: &[IconSubdirectory]) -> Option<PathBuf> {
        let size = self.required_size;
        let best = locations
            .iter()
            .find(|subdir| subdir.matches(size))
            .or_else(|| {
                locations
                    .iter()
                    .filter(|subdir| subdir.distance(size) != UNREACHABLE_DISTANCE)
                    .min_by_key(|subdir| subdir.distance(size))
            })?;
        best.location().map(Path::to_path_buf)
    }

    /// `<search path>/<name><ext>`, ignoring themes altogether.
    fn fallback_name(&self, name: &str) -> Option<PathBuf> {
        self.search_paths.iter().find_map(|search_path| {
            REGISTERED_EXTENSIONS
                .iter()
                .map(|extension| search_path.join(filesystem::terminate_with(name, extension)))
                .find(|candidate| filesystem::file_exists(candidate))
        })
    }
}

impl IconResolver for IconSearch {
    /// Resolve an icon name to a file path, or return it unchanged.
    ///
    /// Absolute names are already paths and are returned as given.
    fn resolved_name(&self, name: &str) -> String {
        if name.is_empty() || Path::new(name).is_absolute() {
            return name.to_owned();
        }

        let resolved = self
            .name_in_theme(name)
            .or_else(|| self.fallback_name(name));

        match resolved {
            Some(path) => {
                tracing::debug!(icon = name, path = %path.display(), "resolved icon");
                path.to_string_lossy().into_owned()
            }
            None => {
                tracing::debug!(icon = name, "icon not found, keeping name");
                name.to_owned()
            }
        }
    }
}
