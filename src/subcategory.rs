use crate::xdg::DesktopEntry;

/// One submenu: its label, its icon, the `Categories` values that land in
/// it, and the entries collected so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subcategory {
    display_name: String,
    icon_name: String,
    classification_names: Vec<String>,
    entries: Vec<DesktopEntry>,
}

impl Subcategory {
    pub fn new(
        display_name: impl Into<String>,
        icon_name: impl Into<String>,
        classification_names: Vec<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            icon_name: icon_name.into(),
            classification_names,
            entries: Vec::new(),
        }
    }

    /// Parse a `Display:icon:Class[:Class...]` line.
    ///
    /// Returns `None` for comments, lines with fewer than three fields, an
    /// empty display or icon name, or no non-empty classification.
    pub fn from_line(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.starts_with('#') {
            return None;
        }
        let mut tokens = line.split(':');
        let display_name = tokens.next().filter(|t| !t.is_empty())?;
        let icon_name = tokens.next().filter(|t| !t.is_empty())?;
        let classification_names: Vec<String> = tokens
            .filter(|t| !t.is_empty())
            .map(str::to_owned)
            .collect();
        if classification_names.is_empty() {
            return None;
        }
        Some(Self::new(display_name, icon_name, classification_names))
    }

    /// The built-in menu layout, in display order.
    pub fn defaults() -> Vec<Self> {
        [
            ("Settings", "preferences-desktop", "Settings"),
            ("Accessories", "applications-accessories", "Utility"),
            ("Development", "applications-development", "Development"),
            ("Education", "applications-education", "Education"),
            ("Games", "applications-games", "Game"),
            ("Graphics", "applications-graphics", "Graphics"),
            ("Internet", "applications-internet", "Network"),
            ("Multimedia", "applications-multimedia", "AudioVideo"),
            ("Office", "applications-office", "Office"),
            ("Science", "applications-science", "Science"),
            ("System", "applications-system", "System"),
        ]
        .into_iter()
        .map(|(display, icon, class)| Self::new(display, icon, vec![class.to_owned()]))
        .collect()
    }

    /// The bucket for entries no other subcategory claims.
    pub fn others() -> Self {
        Self::new("Others", "applications-other", Vec::new())
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn icon_name(&self) -> &str {
        &self.icon_name
    }

    pub fn classification_names(&self) -> &[String] {
        &self.classification_names
    }

    pub fn desktop_entries(&self) -> &[DesktopEntry] {
        &self.entries
    }

    pub fn has_entries(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn add_desktop_entry(&mut self, entry: DesktopEntry) {
        self.entries.push(entry);
    }

    /// Sort by name and drop entries repeated with the same name and command.
    pub fn sort_desktop_entries(&mut self) {
        self.entries.sort();
        self.entries.dedup();
    }
}
