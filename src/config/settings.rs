//! Application settings file.
//!
//! Defaults for the command-line flags can be kept in a JSON file, by
//! default `settings.json` in the XDG config directory. Flags given on the
//! command line always win.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default values for the scan flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Target address.
    pub default_target: String,
    /// Port range string, `N` or `N-M`.
    pub default_ports: String,
    /// Per-probe timeout in seconds.
    pub default_timeout_secs: u64,
    /// Probes per batch.
    pub default_batch_size: usize,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            default_target: "scanme.nmap.org".to_string(),
            default_ports: "0-1023".to_string(),
            default_timeout_secs: 75,
            default_batch_size: 2000,
        }
    }
}

impl AppSettings {
    /// Path of the settings file in the XDG config directory
    /// (`~/.config/port-scanner/settings.json` on Linux).
    pub fn default_path() -> ConfigResult<PathBuf> {
        let project = ProjectDirs::from("com", "port-scanner", "port-scanner")
            .ok_or(ConfigError::DirectoryNotFound)?;
        Ok(project.config_dir().join("settings.json"))
    }

    /// Load settings from the default location, falling back to the
    /// built-in defaults when there is no settings file.
    pub fn load() -> ConfigResult<Self> {
        let file = match Self::default_path() {
            Ok(file) => file,
            Err(ConfigError::DirectoryNotFound) => return Ok(Self::default()),
            Err(e) => return Err(e),
        };

        if !file.exists() {
            debug!(path = %file.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }

        Self::load_from(&file)
    }

    /// Load settings from a specific file. The file must exist.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let settings =
            serde_json::from_str(&content).map_err(|e| ConfigError::InvalidFormat(e.to_string()))?;
        debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.default_target, "scanme.nmap.org");
        assert_eq!(settings.default_ports, "0-1023");
        assert_eq!(settings.default_timeout_secs, 75);
        assert_eq!(settings.default_batch_size, 2000);
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"default_target": "127.0.0.1", "default_batch_size": 64}}"#).unwrap();

        let settings = AppSettings::load_from(file.path()).unwrap();
        assert_eq!(settings.default_target, "127.0.0.1");
        assert_eq!(settings.default_batch_size, 64);
        assert_eq!(settings.default_timeout_secs, 75);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppSettings::load_from(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadFailed { .. }));
    }

    #[test]
    fn test_load_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = AppSettings::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFormat(_)));
    }

    #[test]
    fn test_settings_serialization() {
        let settings = AppSettings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let parsed: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, settings);
    }
}
