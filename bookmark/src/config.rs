// src/config.rs
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument, trace};

/// Defaults applied on top of the command line, read from `-c FILE`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    /// Always treat bookmark values as paths
    #[serde(default)]
    pub expand_paths: bool,
}

/// Load settings from `path`.
///
/// A missing or broken file yields defaults.
#[instrument(level = "debug")]
pub fn load_settings(path: &Path) -> Settings {
    trace!("Loading config from: {:?}", path);

    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            debug!("Cannot read config {}: {}", path.display(), e);
            return Settings::default();
        }
    };
    let settings = toml::from_str::<Settings>(&text).unwrap_or_else(|e| {
        debug!("Ignoring malformed config {}: {}", path.display(), e);
        Settings::default()
    });

    trace!("Settings loaded: {:?}", settings);
    settings
}

pub fn generate_default_config() -> String {
    toml::to_string_pretty(&Settings::default())
        .unwrap_or_else(|_| "# Error generating default configuration".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::init_test_env;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn create_temp_config_file(content: &str) -> (TempDir, PathBuf) {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, content).unwrap();
        (temp_dir, config_path)
    }

    #[test]
    fn given_missing_config_when_load_then_defaults() {
        init_test_env();
        let settings = load_settings(Path::new("/no/such/config.toml"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn given_config_file_when_load_then_values_are_used() {
        init_test_env();
        let (_dir, path) = create_temp_config_file("expand_paths = true\n");
        assert!(load_settings(&path).expand_paths);
    }

    #[test]
    fn given_unknown_keys_when_load_then_they_are_ignored() {
        init_test_env();
        let (_dir, path) = create_temp_config_file("bookmark_file = \"/etc/bookmarks\"\n");
        assert_eq!(load_settings(&path), Settings::default());
    }

    #[test]
    fn given_malformed_config_when_load_then_defaults() {
        init_test_env();
        let (_dir, path) = create_temp_config_file("expand_paths = \"not a bool\"");
        assert_eq!(load_settings(&path), Settings::default());
    }

    #[test]
    fn given_generated_config_when_parsed_then_round_trips() {
        let text = generate_default_config();
        assert!(text.contains("expand_paths = false"));
        let parsed: Settings = toml::from_str(&text).unwrap();
        assert_eq!(parsed, Settings::default());
    }
}
