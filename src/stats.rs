use std::collections::BTreeSet;

use clap::ValueEnum;
use serde::Deserialize;

/// How much of the run summary to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SummaryType {
    /// Counts only.
    Short,
    /// Counts and unparsed files.
    #[default]
    Normal,
    /// Everything, including unhandled categories.
    Long,
}

/// What happened to every `.desktop` file seen during a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    classified: Vec<String>,
    unclassified: Vec<String>,
    suppressed: Vec<String>,
    unparsed: Vec<String>,
    unhandled_classifications: BTreeSet<String>,
}

impl Stats {
    pub fn add_classified_file(&mut self, name: impl Into<String>) {
        self.classified.push(name.into());
    }

    pub fn add_unclassified_file(&mut self, name: impl Into<String>) {
        self.unclassified.push(name.into());
    }

    pub fn add_suppressed_file(&mut self, name: impl Into<String>) {
        self.suppressed.push(name.into());
    }

    pub fn add_unparsed_file(&mut self, name: impl Into<String>) {
        self.unparsed.push(name.into());
    }

    pub fn add_unhandled_classifications<I, S>(&mut self, classifications: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.unhandled_classifications
            .extend(classifications.into_iter().map(Into::into));
    }

    pub fn total_files(&self) -> usize {
        self.total_parsed_files() + self.suppressed.len() + self.unparsed.len()
    }

    pub fn total_parsed_files(&self) -> usize {
        self.classified.len() + self.unclassified.len()
    }

    pub fn total_unclassified_files(&self) -> usize {
        self.unclassified.len()
    }

    pub fn total_suppressed_files(&self) -> usize {
        self.suppressed.len()
    }

    pub fn total_unparsed_files(&self) -> usize {
        self.unparsed.len()
    }

    pub fn unparsed_files(&self) -> &[String] {
        &self.unparsed
    }

    pub fn suppressed_files(&self) -> &[String] {
        &self.suppressed
    }

    pub fn unclassified_files(&self) -> &[String] {
        &self.unclassified
    }

    /// Sorted and without repeats.
    pub fn unhandled_classifications(&self) -> Vec<&str> {
        self.unhandled_classifications
            .iter()
            .map(String::as_str)
            .collect()
    }

    pub fn details(&self, summary: SummaryType) -> String {
        let mut out = format!(
            "Total desktop files: {}\n\
             Parsed desktop files: {}\n\
             Unparsed desktop files: {}\n\
             Suppressed desktop files (NoDisplay): {}\n\
             Unclassified desktop files: {}\n",
            self.total_files(),
            self.total_parsed_files(),
            self.total_unparsed_files(),
            self.total_suppressed_files(),
            self.total_unclassified_files(),
        );

        if summary == SummaryType::Short {
            return out;
        }
        push_list(&mut out, "unparsed files", &self.unparsed);

        if summary == SummaryType::Long {
            push_list(&mut out, "suppressed files", &self.suppressed);
            push_list(&mut out, "unclassified files", &self.unclassified);
            push_list(
                &mut out,
                "unhandled classifications",
                &self.unhandled_classifications(),
            );
        }
        out
    }
}

fn push_list<S: AsRef<str>>(out: &mut String, label: &str, items: &[S]) {
    if items.is_empty() {
        return;
    }
    let joined: Vec<&str> = items.iter().map(|item| item.as_ref()).collect();
    out.push_str(&format!("List of {label}: {}\n", joined.join(", ")));
}
