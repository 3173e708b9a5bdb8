use std::collections::HashMap;

/// A single classified line of a `.desktop` or `index.theme` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryLine {
    /// `[Section Name]`
    Declaration(String),
    /// `key=value`, both sides trimmed.
    Assignment { key: String, value: String },
    /// Comments, blank lines, and anything unparseable.
    Ignored,
}

impl EntryLine {
    pub fn parse(raw: &str) -> Self {
        let line = raw.trim();
        if line.starts_with('#') {
            return EntryLine::Ignored;
        }
        if let Some(inner) = line.strip_prefix('[')
            && let Some(inner) = inner.strip_suffix(']')
        {
            return EntryLine::Declaration(inner.to_owned());
        }
        if let Some((key, value)) = line.split_once('=') {
            return EntryLine::Assignment {
                key: key.trim().to_owned(),
                value: value.trim().to_owned(),
            };
        }
        EntryLine::Ignored
    }

    pub fn is_declaration(&self) -> bool {
        matches!(self, EntryLine::Declaration(_))
    }

    pub fn is_assignment(&self) -> bool {
        matches!(self, EntryLine::Assignment { .. })
    }

    /// The section name, or `""` when this is not a declaration.
    pub fn declaration(&self) -> &str {
        match self {
            EntryLine::Declaration(name) => name,
            _ => "",
        }
    }

    pub fn key(&self) -> &str {
        match self {
            EntryLine::Assignment { key, .. } => key,
            _ => "",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            EntryLine::Assignment { value, .. } => value,
            _ => "",
        }
    }
}

/// Sectioned key/value view over the lines of an XDG entry file.
///
/// Keys that appear before any declaration live in the `""` section. A
/// section declared more than once accumulates its keys; a repeated key keeps
/// the last value seen.
#[derive(Debug, Clone, Default)]
pub struct Entry {
    sections: HashMap<String, HashMap<String, String>>,
    language: Option<String>,
}

impl Entry {
    pub fn parse<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut sections: HashMap<String, HashMap<String, String>> = HashMap::new();
        let mut current = String::new();

        for raw in lines {
            match EntryLine::parse(raw.as_ref()) {
                EntryLine::Declaration(name) => {
                    sections.entry(name.clone()).or_default();
                    current = name;
                }
                EntryLine::Assignment { key, value } => {
                    sections
                        .entry(current.clone())
                        .or_default()
                        .insert(key, value);
                }
                EntryLine::Ignored => {}
            }
        }

        Self {
            sections,
            language: None,
        }
    }

    /// Prefer `key[language]` over `key` in [`Entry::under`]. An empty
    /// language disables the lookup.
    pub fn with_language(mut self, language: &str) -> Self {
        self.language = (!language.is_empty()).then(|| language.to_owned());
        self
    }

    /// Value of `key` in `section`, language-qualified when available, or
    /// `""` when absent.
    pub fn under(&self, section: &str, key: &str) -> &str {
        let Some(values) = self.sections.get(section) else {
            return "";
        };
        if let Some(language) = &self.language
            && let Some(value) = values.get(&format!("{key}[{language}]"))
        {
            return value;
        }
        values.get(key).map_or("", String::as_str)
    }
}
