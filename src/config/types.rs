use std::path::PathBuf;

use serde::Deserialize;

use crate::stats::SummaryType;
use crate::subcategory::Subcategory;

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Contents of `config.toml`. Every field is optional; command-line flags
/// override whatever is set here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub output_file: Option<PathBuf>,
    pub input_directories: Vec<PathBuf>,
    pub category_file: Option<PathBuf>,
    pub summary: Option<SummaryType>,
    pub language: Option<String>,
    pub icons: IconConfig,
    pub categories: Vec<CategoryConfig>,
}

// ---------------------------------------------------------------------------
// Icons
// ---------------------------------------------------------------------------

pub const DEFAULT_ICON_THEME: &str = "hicolor";
pub const DEFAULT_ICON_SIZE: u32 = 48;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    /// Resolve icon names to files through the XDG icon theme search.
    pub enabled: bool,
    pub theme: String,
    pub size: u32,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            theme: DEFAULT_ICON_THEME.to_owned(),
            size: DEFAULT_ICON_SIZE,
        }
    }
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// A `[[categories]]` table: the TOML spelling of a category file line.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryConfig {
    pub name: String,
    pub icon: String,
    pub classifications: Vec<String>,
}

impl CategoryConfig {
    /// Same acceptance rules as a category file line: name, icon, and at
    /// least one non-empty classification are required.
    pub fn to_subcategory(&self) -> Option<Subcategory> {
        let classifications: Vec<String> = self
            .classifications
            .iter()
            .filter(|c| !c.is_empty())
            .cloned()
            .collect();
        if self.name.is_empty() || self.icon.is_empty() || classifications.is_empty() {
            return None;
        }
        Some(Subcategory::new(&self.name, &self.icon, classifications))
    }
}
