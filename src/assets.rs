//! Installed editor asset discovery
//!
//! The editor widget ships its modes and themes as individual files
//! (`mode-python.js`, `theme-monokai.js`, ...). Scanning that directory once
//! at startup gives the lists of mode and theme names a field may use.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static MODE_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^mode-(?P<name>\w+)\.\w+$").unwrap());
static THEME_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^theme-(?P<name>\w+)\.\w+$").unwrap());

/// Mode names, theme names and everything else, each sorted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetCatalog {
    pub modes: Vec<String>,
    pub themes: Vec<String>,
    pub other_files: Vec<String>,
}

impl AssetCatalog {
    pub fn has_mode(&self, name: &str) -> bool {
        self.modes.iter().any(|m| m.eq_ignore_ascii_case(name))
    }

    pub fn has_theme(&self, name: &str) -> bool {
        self.themes.iter().any(|t| t.eq_ignore_ascii_case(name))
    }
}

/// Errors from reading the asset directory
#[derive(Debug)]
pub enum AssetError {
    /// The directory is missing or unreadable
    Unavailable {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetError::Unavailable { path, source } => write!(
                f,
                "Cannot read editor assets at {} ({}). Is the editor asset package installed?",
                path.display(),
                source
            ),
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetError::Unavailable { source, .. } => Some(source),
        }
    }
}

/// Mode name from a `mode-<name>.<ext>` file name
pub fn parse_mode_file(file_name: &str) -> Option<&str> {
    MODE_FILE
        .captures(file_name)
        .and_then(|caps| caps.name("name"))
        .map(|m| m.as_str())
}

/// Theme name from a `theme-<name>.<ext>` file name
pub fn parse_theme_file(file_name: &str) -> Option<&str> {
    THEME_FILE
        .captures(file_name)
        .and_then(|caps| caps.name("name"))
        .map(|m| m.as_str())
}

/// Partition file names into modes, themes and other files
pub fn classify<I, S>(file_names: I) -> AssetCatalog
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut catalog = AssetCatalog::default();

    for name in file_names {
        let name = name.as_ref();
        if let Some(mode) = parse_mode_file(name) {
            catalog.modes.push(mode.to_string());
        } else if let Some(theme) = parse_theme_file(name) {
            catalog.themes.push(theme.to_string());
        } else {
            catalog.other_files.push(name.to_string());
        }
    }

    catalog.modes.sort();
    catalog.themes.sort();
    catalog.other_files.sort();
    catalog
}

/// Read and classify the regular files in `dir`
pub fn scan_asset_dir(dir: &Path) -> Result<AssetCatalog, AssetError> {
    let unavailable = |source: std::io::Error| AssetError::Unavailable {
        path: dir.to_path_buf(),
        source,
    };

    let names: Vec<String> = std::fs::read_dir(dir)
        .map_err(unavailable)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .collect();

    let catalog = classify(&names);
    tracing::info!(
        "Found {} modes and {} themes in {}",
        catalog.modes.len(),
        catalog.themes.len(),
        dir.display()
    );
    Ok(catalog)
}
