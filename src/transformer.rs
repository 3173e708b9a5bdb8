use std::borrow::Cow;

use quick_xml::escape::escape;

use crate::representation::Representation;

/// Renders menu nodes in some window manager's menu syntax.
pub trait Transformer {
    fn transform(&self, representation: &Representation) -> String;
}

/// JWM `<JWM>`/`<Menu>`/`<Program>` markup, suitable for an `<Include>` in
/// `~/.jwmrc`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Jwm;

impl Transformer for Jwm {
    fn transform(&self, representation: &Representation) -> String {
        match representation {
            Representation::MenuStart => {
                format!("<JWM>\n    <!--{}-->", comment_safe(&representation.name()))
            }
            Representation::MenuEnd => {
                format!("    <!--{}-->\n</JWM>", comment_safe(&representation.name()))
            }
            Representation::SubcategoryStart { name, icon } => format!(
                "    <Menu label=\"{}\" icon=\"{}\">",
                escape(name.as_str()),
                escape(icon.as_str())
            ),
            Representation::SubcategoryEnd { .. } => format!(
                "        <!--{}-->\n    </Menu>",
                comment_safe(&representation.name())
            ),
            Representation::Program {
                name,
                icon,
                executable,
                ..
            } => format!(
                "        <Program label=\"{}\" icon=\"{}\">{}</Program>",
                escape(name.as_str()),
                escape(icon.as_str()),
                escape(strip_field_codes(executable).as_str())
            ),
        }
    }
}

/// Field codes from the desktop entry `Exec` key. The menu runs the command
/// without arguments, so they are dropped.
const FIELD_CODES: [&str; 13] = [
    "%f", "%F", "%u", "%U", "%d", "%D", "%n", "%N", "%i", "%c", "%k", "%v", "%m",
];

/// `mousepad %F` → `mousepad`.
pub fn strip_field_codes(executable: &str) -> String {
    executable
        .split_whitespace()
        .filter(|token| !FIELD_CODES.contains(token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// XML comments may not contain `--`.
fn comment_safe(text: &str) -> Cow<'_, str> {
    if text.contains("--") {
        Cow::Owned(text.replace("--", "- -"))
    } else {
        Cow::Borrowed(text)
    }
}
