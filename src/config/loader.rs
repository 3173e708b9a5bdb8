use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::types::AppConfig;

/// Discover and load the app config.
///
/// Priority:
/// 1. `--config` flag (explicit path)
/// 2. `$AMM_CONFIG` environment variable
/// 3. `$XDG_CONFIG_HOME/amm/config.toml`
/// 4. `~/.config/amm/config.toml`
///
/// With no config file anywhere, the defaults are used. Paths inside the
/// file may start with `~/`.
pub fn load_config(explicit_path: Option<&Path>) -> Result<AppConfig> {
    let path = match explicit_path {
        Some(path) => Some(path.to_path_buf()),
        None => find_global_config(),
    };

    let Some(path) = path else {
        return Ok(AppConfig::default());
    };

    tracing::debug!(path = %path.display(), "loading config");
    let contents =
        std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
    let mut config: AppConfig = toml::from_str(&contents)
        .with_context(|| format!("parsing TOML from {}", path.display()))?;
    expand_paths(&mut config);
    Ok(config)
}

fn expand_paths(config: &mut AppConfig) {
    if let Some(output) = &config.output_file {
        config.output_file = Some(expand_tilde(output));
    }
    if let Some(category_file) = &config.category_file {
        config.category_file = Some(expand_tilde(category_file));
    }
    for dir in &mut config.input_directories {
        *dir = expand_tilde(dir);
    }
}

fn find_global_config() -> Option<PathBuf> {
    // $AMM_CONFIG
    if let Ok(path) = std::env::var("AMM_CONFIG") {
        let p = PathBuf::from(&path);
        if p.is_file() {
            return Some(p);
        }
    }

    // $XDG_CONFIG_HOME/amm/config.toml
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        let p = PathBuf::from(xdg).join("amm/config.toml");
        if p.is_file() {
            return Some(p);
        }
    }

    // ~/.config/amm/config.toml
    if let Some(home) = home_dir() {
        let p = home.join(".config/amm/config.toml");
        if p.is_file() {
            return Some(p);
        }
    }

    None
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

pub(crate) fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}
