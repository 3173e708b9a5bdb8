use crate::xdg::entry::Entry;
use crate::xdg::icon_subdirectory::IconSubdirectory;

const THEME_SECTION: &str = "Icon Theme";
const HICOLOR: &str = "hicolor";

/// One parsed `index.theme`.
///
/// The default value is the placeholder used when a theme cannot be found:
/// no name and no directories, with `Hicolor` as its only parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconTheme {
    name: String,
    internal_name: String,
    parents: Vec<String>,
    directories: Vec<IconSubdirectory>,
}

impl Default for IconTheme {
    fn default() -> Self {
        Self::parse(std::iter::empty::<&str>())
    }
}

impl IconTheme {
    pub fn parse<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entry = Entry::parse(lines);

        let name = entry.under(THEME_SECTION, "Name").to_owned();
        let mut parents = split_list(entry.under(THEME_SECTION, "Inherits"));
        // Every chain ends at hicolor, including the placeholder's.
        if parents.is_empty() && !name.eq_ignore_ascii_case(HICOLOR) {
            parents.push("Hicolor".to_owned());
        }

        let directories = split_list(entry.under(THEME_SECTION, "Directories"))
            .into_iter()
            .map(|dir| {
                IconSubdirectory::new(dir.as_str(), entry.under(&dir, "Size"))
                    .with_type(entry.under(&dir, "Type"))
                    .with_max_size(entry.under(&dir, "MaxSize"))
                    .with_min_size(entry.under(&dir, "MinSize"))
                    .with_threshold(entry.under(&dir, "Threshold"))
            })
            .collect();

        Self {
            name,
            internal_name: String::new(),
            parents,
            directories,
        }
    }

    /// Record the directory name the theme was found under.
    pub fn with_internal_name(mut self, internal_name: impl Into<String>) -> Self {
        self.internal_name = internal_name.into();
        self
    }

    /// Case-sensitive match against the display name or the directory name.
    pub fn is_named(&self, candidate: &str) -> bool {
        self.name == candidate || self.internal_name == candidate
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn internal_name(&self) -> &str {
        &self.internal_name
    }

    pub fn parents(&self) -> &[String] {
        &self.parents
    }

    pub fn directories(&self) -> &[IconSubdirectory] {
        &self.directories
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}
