use std::path::Path;

use crate::filesystem;
use crate::icon::{IconResolver, MirrorResolver};
use crate::representation::Representation;
use crate::stats::Stats;
use crate::subcategory::Subcategory;
use crate::xdg::DesktopEntry;

/// The menu under construction: subcategories, the entries sorted into
/// them, and what happened to every file along the way.
pub struct Menu {
    subcategories: Vec<Subcategory>,
    unclassified: Subcategory,
    icon_resolver: Box<dyn IconResolver>,
    language: String,
    summary: Stats,
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}

impl Menu {
    /// A menu with the built-in subcategories that leaves icon names as-is.
    pub fn new() -> Self {
        Self {
            subcategories: Subcategory::defaults(),
            unclassified: Subcategory::others(),
            icon_resolver: Box::new(MirrorResolver),
            language: String::new(),
            summary: Stats::default(),
        }
    }

    pub fn register_icon_resolver(&mut self, resolver: Box<dyn IconResolver>) {
        self.icon_resolver = resolver;
    }

    /// Read localized names and comments for `language` (e.g. `sr`).
    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    /// Replace the built-in subcategories with `Display:icon:Class...`
    /// lines. Malformed lines are skipped.
    pub fn load_custom_categories<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.subcategories = lines
            .into_iter()
            .filter_map(|line| Subcategory::from_line(line.as_ref()))
            .collect();
    }

    /// Replace the built-in subcategories with ready-made ones.
    pub fn set_subcategories(&mut self, subcategories: Vec<Subcategory>) {
        self.subcategories = subcategories;
    }

    /// Read and classify every file, then append the unclassified bucket as
    /// the last subcategory.
    pub fn populate<P: AsRef<Path>>(&mut self, files: &[P]) {
        for file in files {
            self.add_desktop_file(file.as_ref());
        }
        self.subcategories
            .push(std::mem::replace(&mut self.unclassified, Subcategory::others()));
    }

    fn add_desktop_file(&mut self, path: &Path) {
        let file_name = path.display().to_string();
        let lines = match filesystem::read_lines(path) {
            Ok(lines) => lines,
            Err(err) => {
                tracing::debug!(file = %file_name, error = %err, "unreadable desktop file");
                self.summary.add_unparsed_file(file_name);
                return;
            }
        };

        let entry = DesktopEntry::parse(lines, &self.language);
        if !entry.display() {
            self.summary.add_suppressed_file(file_name);
            return;
        }
        if !entry.is_valid() {
            self.summary.add_unparsed_file(file_name);
            return;
        }

        if self.classify(&entry) {
            self.summary.add_classified_file(file_name);
        } else {
            self.summary
                .add_unhandled_classifications(entry.categories().iter().cloned());
            self.summary.add_unclassified_file(file_name);
            self.unclassified.add_desktop_entry(entry);
        }
    }

    /// Add `entry` to every subcategory it belongs to.
    fn classify(&mut self, entry: &DesktopEntry) -> bool {
        let mut classified = false;
        for subcategory in &mut self.subcategories {
            if entry.is_any_of(subcategory.classification_names()) {
                subcategory.add_desktop_entry(entry.clone());
                classified = true;
            }
        }
        classified
    }

    pub fn sort(&mut self) {
        for subcategory in &mut self.subcategories {
            subcategory.sort_desktop_entries();
        }
    }

    pub fn subcategories(&self) -> &[Subcategory] {
        &self.subcategories
    }

    pub fn summary(&self) -> &Stats {
        &self.summary
    }

    /// Flatten the menu for rendering, resolving icons on the way. Empty
    /// subcategories are left out.
    pub fn representations(&self) -> Vec<Representation> {
        let mut representations = vec![Representation::MenuStart];

        for subcategory in self.subcategories.iter().filter(|s| s.has_entries()) {
            representations.push(Representation::SubcategoryStart {
                name: subcategory.display_name().to_owned(),
                icon: self.icon_resolver.resolved_name(subcategory.icon_name()),
            });
            representations.extend(subcategory.desktop_entries().iter().map(|entry| {
                Representation::Program {
                    name: entry.name().to_owned(),
                    icon: self.icon_resolver.resolved_name(entry.icon()),
                    executable: entry.executable().to_owned(),
                    comment: entry.comment().to_owned(),
                }
            }));
            representations.push(Representation::SubcategoryEnd {
                name: subcategory.display_name().to_owned(),
            });
        }

        representations.push(Representation::MenuEnd);
        representations
    }
}
