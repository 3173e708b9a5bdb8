// Icon name resolution: the identity resolver used when icons are not
// requested, and the XDG icon theme search.

mod qualified_theme;
mod search;

pub use qualified_theme::QualifiedIconTheme;
pub use search::{IconSearch, REGISTERED_EXTENSIONS};

/// Turns an icon name from a `.desktop` file into what the menu should show.
///
/// Resolution never fails: an unresolvable name comes back unchanged.
pub trait IconResolver {
    fn resolved_name(&self, name: &str) -> String;
}

/// Leaves icon names untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct MirrorResolver;

impl IconResolver for MirrorResolver {
    fn resolved_name(&self, name: &str) -> String {
        name.to_owned()
    }
}
