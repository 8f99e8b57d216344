//! Locates and parses the TOML configuration file.

use super::file::ConfigFile;
use crate::core::error::{AppError, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub(crate) const CONFIG_FILE_NAME: &str = "mailvet.toml";

/// Candidate locations searched when no explicit path is given, in order.
pub(crate) fn default_search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Ok(home) = std::env::var("HOME") {
        paths.push(
            PathBuf::from(home)
                .join(".config")
                .join("mailvet")
                .join(CONFIG_FILE_NAME),
        );
    }
    paths
}

/// Parses configuration file contents.
pub(crate) fn parse_config_str(raw: &str) -> Result<ConfigFile> {
    Ok(toml::from_str(raw)?)
}

/// Reads and parses the file at `path`.
pub(crate) fn read_config_file(path: &Path) -> Result<ConfigFile> {
    tracing::debug!(target: "config", "Reading configuration from {}", path.display());
    let raw = fs::read_to_string(path).map_err(|e| {
        AppError::Config(format!(
            "Failed to read config file '{}': {}",
            path.display(),
            e
        ))
    })?;
    parse_config_str(&raw).map_err(|e| {
        AppError::Config(format!("Invalid config file '{}': {}", path.display(), e))
    })
}

/// Loads the configuration file.
///
/// An explicit path must exist. Without one, the default search paths are
/// tried and the first existing file wins; finding none is not an error.
pub(crate) fn load_config_file(explicit: Option<&Path>) -> Result<Option<(ConfigFile, PathBuf)>> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(AppError::Config(format!(
                "Config file '{}' does not exist",
                path.display()
            )));
        }
        let file = read_config_file(path)?;
        return Ok(Some((file, path.to_path_buf())));
    }

    for candidate in default_search_paths() {
        if candidate.is_file() {
            let file = read_config_file(&candidate)?;
            tracing::info!(target: "config", "Loaded configuration from {}", candidate.display());
            return Ok(Some((file, candidate)));
        }
    }

    tracing::debug!(target: "config", "No configuration file found, using defaults.");
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_explicit_path_is_an_error() {
        let path = std::env::temp_dir().join("mailvet-definitely-missing-config.toml");
        let err = load_config_file(Some(&path)).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn reads_explicit_file() {
        let path = std::env::temp_dir().join(format!(
            "mailvet-loading-test-{}.toml",
            std::process::id()
        ));
        fs::write(&path, "[validation]\nmax_concurrency = 4\n").unwrap();

        let (file, loaded_from) = load_config_file(Some(&path)).unwrap().unwrap();
        assert_eq!(file.validation.max_concurrency, Some(4));
        assert_eq!(loaded_from, path);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = parse_config_str("[dns\nbroken").unwrap_err();
        assert!(matches!(err, AppError::TomlParse(_)));
    }

    #[test]
    fn malformed_file_on_disk_is_a_config_error() {
        let path = std::env::temp_dir().join(format!(
            "mailvet-malformed-test-{}.toml",
            std::process::id()
        ));
        fs::write(&path, "[dns\nbroken").unwrap();

        let err = read_config_file(&path).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().contains("Invalid config file"));

        fs::remove_file(&path).ok();
    }
}
