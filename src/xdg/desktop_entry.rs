use std::cmp::Ordering;

use crate::xdg::entry::Entry;

const DESKTOP_SECTION: &str = "Desktop Entry";

/// The fields of a `.desktop` file the menu needs.
///
/// Two entries are equal when they share a name and a command; ordering is
/// by name, then command.
#[derive(Debug, Clone)]
pub struct DesktopEntry {
    name: String,
    icon: String,
    executable: String,
    comment: String,
    categories: Vec<String>,
    display: bool,
}

impl DesktopEntry {
    /// Parse `[Desktop Entry]`. With a non-empty `language`, localized
    /// `Name[xx]`/`Comment[xx]` values win over the plain keys.
    pub fn parse<I, S>(lines: I, language: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entry = Entry::parse(lines).with_language(language);
        let field = |key: &str| entry.under(DESKTOP_SECTION, key).to_owned();

        let mut categories: Vec<String> = entry
            .under(DESKTOP_SECTION, "Categories")
            .split(';')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_owned)
            .collect();
        categories.sort();

        let no_display = entry.under(DESKTOP_SECTION, "NoDisplay");

        Self {
            name: field("Name"),
            icon: field("Icon"),
            executable: field("Exec"),
            comment: field("Comment"),
            categories,
            display: !matches!(no_display, "true" | "1"),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn executable(&self) -> &str {
        &self.executable
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Sorted, without empty entries.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// False when the file asks to be hidden with `NoDisplay`.
    pub fn display(&self) -> bool {
        self.display
    }

    /// A usable launcher needs a name, an icon, and a command.
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty() && !self.icon.is_empty() && !self.executable.is_empty()
    }

    pub fn is_a(&self, classification: &str) -> bool {
        self.categories.iter().any(|c| c == classification)
    }

    pub fn is_any_of<S: AsRef<str>>(&self, classifications: &[S]) -> bool {
        classifications.iter().any(|c| self.is_a(c.as_ref()))
    }
}

impl PartialEq for DesktopEntry {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.executable == other.executable
    }
}

impl Eq for DesktopEntry {}

impl PartialOrd for DesktopEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DesktopEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.executable.cmp(&other.executable))
    }
}
