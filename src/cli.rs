use std::path::PathBuf;

use clap::Parser;

use crate::config::types::DEFAULT_ICON_THEME;
use crate::stats::SummaryType;

#[derive(Debug, Parser)]
#[command(
    name = "amm",
    version,
    about = "Creates JWM's menu from (freedesktop) desktop files",
    after_help = "Include the generated file in the rootmenu section of your ~/.jwmrc"
)]
pub struct Cli {
    /// Output file [default: ~/.jwmrc-amm].
    #[arg(short, long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Directories to scan for '.desktop' files, separated by colons
    /// [default: applications directories under $XDG_DATA_HOME and
    /// $XDG_DATA_DIRS].
    #[arg(
        short,
        long = "input-directory",
        visible_alias = "input-directories",
        value_name = "DIRECTORIES",
        value_delimiter = ':'
    )]
    pub input_directories: Vec<PathBuf>,

    /// File with one `Display:icon:Category[:Category...]` line per submenu.
    #[arg(short, long, value_name = "FILE")]
    pub category_file: Option<PathBuf>,

    /// How much to report once the menu is written.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub summary: Option<SummaryType>,

    /// Language for localized names, e.g. `sr` [default: from $LANG].
    #[arg(long, value_name = "LANG")]
    pub language: Option<String>,

    /// Resolve icon names to files using an icon theme.
    #[arg(
        long,
        value_name = "THEME",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = DEFAULT_ICON_THEME
    )]
    pub iconize: Option<String>,

    /// Preferred icon size in pixels when iconizing [default: 48].
    #[arg(long, value_name = "SIZE")]
    pub icon_size: Option<u32>,

    /// Path to config file.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr.
    #[arg(long)]
    pub debug: bool,
}
