use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

use crate::cli::Cli;
use crate::config::types::AppConfig;
use crate::desktop_files::DesktopFileSearch;
use crate::environment::SystemEnvironment;
use crate::filesystem;
use crate::icon::{IconSearch, QualifiedIconTheme};
use crate::menu::Menu;
use crate::stats::{Stats, SummaryType};
use crate::subcategory::Subcategory;
use crate::transformer::{Jwm, Transformer};

const DEFAULT_OUTPUT_FILE_NAME: &str = ".jwmrc-amm";

#[derive(Debug, Error)]
pub enum RunError {
    #[error("HOME is not set; pass --output-file")]
    HomeNotSet,
    #[error("Couldn't open category file: {}", path.display())]
    BadCategoryFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Couldn't open output file: {}", path.display())]
    BadOutputFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("No valid desktop files were found in any search directories.")]
    NoValidDesktopFiles,
}

/// Where the custom submenu layout comes from, if anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategorySource {
    Builtin,
    File(PathBuf),
    Inline(Vec<Subcategory>),
}

/// Everything a run needs, after command line, config file, and defaults
/// have been merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub output_file: PathBuf,
    pub input_directories: Vec<PathBuf>,
    pub categories: CategorySource,
    pub summary: SummaryType,
    pub language: String,
    /// Theme to resolve icons with; `None` leaves icon names as-is.
    pub icon_theme: Option<String>,
    pub icon_size: u32,
}

impl Settings {
    /// Command line beats config file beats defaults.
    pub fn resolve(
        cli: &Cli,
        config: &AppConfig,
        environment: &SystemEnvironment,
    ) -> Result<Self, RunError> {
        let output_file = match cli.output_file.as_ref().or(config.output_file.as_ref()) {
            Some(path) => path.clone(),
            None => environment
                .home()
                .ok_or(RunError::HomeNotSet)?
                .join(DEFAULT_OUTPUT_FILE_NAME),
        };

        let input_directories = if cli.input_directories.is_empty() {
            config.input_directories.clone()
        } else {
            cli.input_directories.clone()
        };

        let category_file = cli.category_file.as_ref().or(config.category_file.as_ref());
        let categories = if let Some(path) = category_file {
            CategorySource::File(path.clone())
        } else if config.categories.is_empty() {
            CategorySource::Builtin
        } else {
            CategorySource::Inline(
                config
                    .categories
                    .iter()
                    .filter_map(|category| category.to_subcategory())
                    .collect(),
            )
        };

        let icon_theme = cli
            .iconize
            .clone()
            .or_else(|| config.icons.enabled.then(|| config.icons.theme.clone()));

        Ok(Self {
            output_file,
            input_directories,
            categories,
            summary: cli.summary.or(config.summary).unwrap_or_default(),
            language: cli
                .language
                .clone()
                .or_else(|| config.language.clone())
                .unwrap_or_else(|| environment.language().to_owned()),
            icon_theme,
            icon_size: cli.icon_size.unwrap_or(config.icons.size),
        })
    }
}

/// Build the menu and write it to the output file. Returns what happened to
/// every desktop file seen.
pub fn run(settings: &Settings, environment: &SystemEnvironment) -> Result<Stats> {
    let mut menu = Menu::new();
    menu.set_language(settings.language.as_str());
    read_categories(&mut menu, &settings.categories)?;

    let search =
        DesktopFileSearch::with_default_fallback(settings.input_directories.clone(), environment);
    let desktop_files = search.resolve();
    if !desktop_files.bad_paths.is_empty() {
        let bad_paths: Vec<String> = desktop_files
            .bad_paths
            .iter()
            .map(|path| path.display().to_string())
            .collect();
        eprintln!("These paths couldn't be opened: {}", bad_paths.join(", "));
        eprintln!("Proceeding...");
    }
    tracing::info!(count = desktop_files.file_names.len(), "found desktop files");

    menu.populate(&desktop_files.file_names);
    if menu.summary().total_parsed_files() == 0 {
        return Err(RunError::NoValidDesktopFiles.into());
    }
    menu.sort();

    if let Some(theme) = &settings.icon_theme {
        tracing::info!(theme = %theme, size = settings.icon_size, "resolving icons");
        let qualified_theme = QualifiedIconTheme::from_environment(environment, theme.as_str());
        menu.register_icon_resolver(Box::new(IconSearch::new(
            settings.icon_size,
            &qualified_theme,
        )));
    }

    write_menu(&menu, &settings.output_file)?;
    tracing::info!(path = %settings.output_file.display(), "menu written");

    Ok(menu.summary().clone())
}

fn read_categories(menu: &mut Menu, source: &CategorySource) -> Result<()> {
    match source {
        CategorySource::Builtin => {}
        CategorySource::File(path) => {
            let lines = filesystem::read_lines(path).map_err(|source| RunError::BadCategoryFile {
                path: path.clone(),
                source,
            })?;
            menu.load_custom_categories(lines);
        }
        CategorySource::Inline(subcategories) => menu.set_subcategories(subcategories.clone()),
    }
    Ok(())
}

fn write_menu(menu: &Menu, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| RunError::BadOutputFile {
        path: path.to_path_buf(),
        source,
    })?;
    render(menu, &mut BufWriter::new(file)).with_context(|| format!("writing {}", path.display()))
}

fn render(menu: &Menu, out: &mut impl Write) -> std::io::Result<()> {
    let jwm = Jwm;
    writeln!(out, "{}", autogenerated_header())?;
    for representation in menu.representations() {
        writeln!(out, "{}", jwm.transform(&representation))?;
    }
    out.flush()
}

/// `<!-- Autogenerated by amm 0.1.0 (Sat Oct 18 10:00:00 2026) -->`
pub fn autogenerated_header() -> String {
    format!(
        "<!-- Autogenerated by amm {} ({}) -->",
        env!("CARGO_PKG_VERSION"),
        chrono::Local::now().format("%c")
    )
}
