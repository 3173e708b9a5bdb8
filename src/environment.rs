use std::path::{Path, PathBuf};

const DEFAULT_XDG_DATA_DIRS: &str = "/usr/local/share:/usr/share";
const PIXMAPS_DIRECTORY: &str = "/usr/share/pixmaps";

/// The XDG-related view of the process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemEnvironment {
    home: Option<PathBuf>,
    xdg_data_home: PathBuf,
    xdg_data_dirs: Vec<PathBuf>,
    language: String,
}

impl SystemEnvironment {
    /// Read the real process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let home = var("HOME").map(PathBuf::from);
        let xdg_data_home = var("XDG_DATA_HOME").map_or_else(
            || {
                home.as_deref()
                    .map(|h| h.join(".local/share"))
                    .unwrap_or_else(|| PathBuf::from(".local/share"))
            },
            PathBuf::from,
        );
        let xdg_data_dirs = var("XDG_DATA_DIRS")
            .unwrap_or_else(|| DEFAULT_XDG_DATA_DIRS.to_owned())
            .split(':')
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .collect();
        let language = ["LANGUAGE", "LC_ALL", "LANG"]
            .into_iter()
            .filter_map(var)
            .map(|raw| language_code(&raw))
            .find(|code| !code.is_empty())
            .unwrap_or_default();

        Self {
            home,
            xdg_data_home,
            xdg_data_dirs,
            language,
        }
    }

    pub fn home(&self) -> Option<&Path> {
        self.home.as_deref()
    }

    pub fn xdg_data_home(&self) -> &Path {
        &self.xdg_data_home
    }

    pub fn xdg_data_directories(&self) -> &[PathBuf] {
        &self.xdg_data_dirs
    }

    /// Two-letter (or longer) language code, e.g. `en` for `en_IN.UTF-8`;
    /// empty when no locale variable is set.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Where `.desktop` files live: `$XDG_DATA_HOME/applications`, then
    /// `applications` under every data directory.
    pub fn application_directories(&self) -> Vec<PathBuf> {
        std::iter::once(self.xdg_data_home.join("applications"))
            .chain(self.xdg_data_dirs.iter().map(|dir| dir.join("applications")))
            .collect()
    }

    /// Candidate icon theme roots, most specific first.
    pub fn icon_theme_directories(&self) -> Vec<PathBuf> {
        let mut directories = Vec::new();
        if let Some(home) = &self.home {
            directories.push(home.join(".icons"));
        }
        directories.extend(self.xdg_data_dirs.iter().map(|dir| dir.join("icons")));
        directories.push(PathBuf::from(PIXMAPS_DIRECTORY));
        directories
    }
}

/// Strip encoding and territory from a locale: `en_IN.UTF-8` → `en`.
fn language_code(raw: &str) -> String {
    let without_encoding = raw.split('.').next().unwrap_or_default();
    without_encoding
        .split('_')
        .next()
        .unwrap_or_default()
        .to_owned()
}
