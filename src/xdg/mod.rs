// freedesktop.org file formats: the shared INI-style entry parser and the
// `.desktop` and `index.theme` views built on it.

pub mod desktop_entry;
pub mod entry;
pub mod icon_subdirectory;
pub mod icon_theme;

pub use desktop_entry::DesktopEntry;
pub use entry::{Entry, EntryLine};
pub use icon_subdirectory::{IconSubdirectory, Sizing, SizingType};
pub use icon_theme::IconTheme;
