// Evlist Settings Module
// Optional TOML file supplying default output options and scan locations

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::config::ScanPaths;
use crate::render::OutputFormat;

/// User settings, loaded from `~/.config/evlist/settings.toml` by default.
///
/// Every value is optional; command line flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    format: Option<OutputFormat>,
    use_regex: Option<bool>,
    paths: PathSettings,
    source_path: Option<PathBuf>,
}

/// Errors that can occur when loading settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings file")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("Invalid setting value: {0}")]
    InvalidValue(String),
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct SettingsToml {
    #[serde(default)]
    output: Option<OutputSettings>,

    #[serde(default)]
    paths: Option<PathSettings>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct OutputSettings {
    #[serde(default)]
    format: Option<String>,

    #[serde(default)]
    use_regex: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct PathSettings {
    input_dir: Option<PathBuf>,
    by_id_dir: Option<PathBuf>,
    by_path_dir: Option<PathBuf>,
    sysfs_dir: Option<PathBuf>,
    name_attribute: Option<PathBuf>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(&path)?;
        let mut settings = Self::from_toml(&content)?;
        settings.source_path = Some(path.as_ref().to_path_buf());
        Ok(settings)
    }

    /// Load settings from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        let parsed: SettingsToml =
            toml::from_str(content).map_err(|e| SettingsError::TomlParse(e.to_string()))?;

        let mut settings = Self::new();

        if let Some(output) = parsed.output {
            if let Some(format) = output.format {
                let format = format.parse::<OutputFormat>().map_err(|_| {
                    SettingsError::InvalidValue(format!("unknown output format '{}'", format))
                })?;
                settings.format = Some(format);
            }
            settings.use_regex = output.use_regex;
        }

        if let Some(paths) = parsed.paths {
            settings.paths = paths;
        }

        Ok(settings)
    }

    /// Get the default settings path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("evlist").join("settings.toml"))
    }

    /// Load from the default location, or defaults if there is no file
    pub fn load_default() -> Result<Self, SettingsError> {
        if let Some(path) = Self::default_path() {
            if path.exists() {
                log::debug!("Loading settings from {}", path.display());
                return Self::from_file(path);
            }
        }
        Ok(Self::new())
    }

    /// Output format from the file, if set
    pub fn format(&self) -> Option<OutputFormat> {
        self.format
    }

    /// Regex mode from the file, if set
    pub fn use_regex(&self) -> Option<bool> {
        self.use_regex
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Scan locations, starting from the system defaults.
    ///
    /// Overriding only `input_dir` also moves the alias directories, which
    /// live inside it unless set explicitly.
    pub fn scan_paths(&self) -> ScanPaths {
        let mut paths = ScanPaths::default();
        let overrides = &self.paths;

        if let Some(input_dir) = &overrides.input_dir {
            paths = paths.with_input_dir(input_dir);
        }
        if let Some(dir) = &overrides.by_id_dir {
            paths.by_id_dir = dir.clone();
        }
        if let Some(dir) = &overrides.by_path_dir {
            paths.by_path_dir = dir.clone();
        }
        if let Some(dir) = &overrides.sysfs_dir {
            paths.sysfs_dir = dir.clone();
        }
        if let Some(attribute) = &overrides.name_attribute {
            paths.name_attribute = attribute.clone();
        }
        paths
    }
}

/// Commented template for a new settings file
pub fn default_settings_content() -> &'static str {
    r#"# evlist settings
# Place this file at: ~/.config/evlist/settings.toml
# Command line options override everything here.

[output]
# "table" or "csv"
format = "table"
# Treat --filter values as regular expressions
use_regex = false

[paths]
# input_dir = "/dev/input"
# by_id_dir = "/dev/input/by-id"
# by_path_dir = "/dev/input/by-path"
# sysfs_dir = "/sys/class/input"
# name_attribute = "device/name"
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::new();
        assert_eq!(settings.format(), None);
        assert_eq!(settings.use_regex(), None);
        assert_eq!(settings.scan_paths(), ScanPaths::default());
    }

    #[test]
    fn test_settings_from_toml() {
        let toml = r#"
[output]
format = "CSV"
use_regex = true
"#;

        let settings = Settings::from_toml(toml).unwrap();
        assert_eq!(settings.format(), Some(OutputFormat::Csv));
        assert_eq!(settings.use_regex(), Some(true));
    }

    #[test]
    fn test_settings_paths() {
        let toml = r#"
[paths]
input_dir = "/tmp/input"
sysfs_dir = "/tmp/sys"
by_path_dir = "/tmp/elsewhere"
"#;

        let paths = Settings::from_toml(toml).unwrap().scan_paths();
        assert_eq!(paths.input_dir, PathBuf::from("/tmp/input"));
        assert_eq!(paths.by_id_dir, PathBuf::from("/tmp/input/by-id"));
        assert_eq!(paths.by_path_dir, PathBuf::from("/tmp/elsewhere"));
        assert_eq!(paths.sysfs_dir, PathBuf::from("/tmp/sys"));
        assert_eq!(paths.name_attribute, PathBuf::from("device/name"));
    }

    #[test]
    fn test_settings_invalid_format() {
        let err = Settings::from_toml("[output]\nformat = \"json\"\n").unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue(_)));
    }

    #[test]
    fn test_settings_unknown_key() {
        let err = Settings::from_toml("[output]\ncolour = true\n").unwrap_err();
        assert!(matches!(err, SettingsError::TomlParse(_)));
    }

    #[test]
    fn test_default_content_parses() {
        let settings = Settings::from_toml(default_settings_content()).unwrap();
        assert_eq!(settings.format(), Some(OutputFormat::Table));
        assert_eq!(settings.use_regex(), Some(false));
        assert_eq!(settings.scan_paths(), ScanPaths::default());
    }

    #[test]
    fn test_settings_from_file_records_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[output]\nformat = \"csv\"\n").unwrap();

        let settings = Settings::from_file(&path).unwrap();
        assert_eq!(settings.format(), Some(OutputFormat::Csv));
        assert_eq!(settings.source_path(), Some(path.as_path()));
        assert_eq!(Settings::from_toml("").unwrap().source_path(), None);
    }

    #[test]
    fn test_settings_from_missing_file() {
        let err = Settings::from_file("/nonexistent/evlist/settings.toml").unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }
}
