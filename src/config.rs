use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_SEPARATOR: &str = "────────";

/// Which brand palette to draw with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the terminal's background
    #[default]
    Auto,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PostletteConfig {
    pub theme: ThemeMode,
    /// Text inserted by the separator action
    pub separator: String,
    pub log_file: Option<PathBuf>,
}

impl Default for PostletteConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Auto,
            separator: DEFAULT_SEPARATOR.to_string(),
            log_file: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config format in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl PostletteConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `explicit` if given, else the first config file found, else defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit.map(Path::to_path_buf).or_else(find_config_file) {
            Some(path) => {
                log::info!("Using config file {}", path.display());
                Self::from_file(&path)
            }
            None => Ok(Self::default()),
        }
    }
}

pub fn get_config_dir() -> PathBuf {
    let config_home = dirs::config_dir().unwrap_or_else(|| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".config")
    });
    config_home.join("postlette")
}

pub fn find_config_file() -> Option<PathBuf> {
    let mut paths = vec![get_config_dir().join("config.toml")];
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".postlette").join("config.toml"));
    }

    paths.into_iter().find(|p| p.exists())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = PostletteConfig::default();
        assert_eq!(config.theme, ThemeMode::Auto);
        assert_eq!(config.separator, DEFAULT_SEPARATOR);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "theme = \"dark\"\n").unwrap();

        let config = PostletteConfig::from_file(&path).unwrap();
        assert_eq!(config.theme, ThemeMode::Dark);
        assert_eq!(config.separator, DEFAULT_SEPARATOR);
    }

    #[test]
    fn test_full_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "theme = \"light\"\nseparator = \"· · ·\"\nlog_file = \"/tmp/postlette.log\"\n",
        )
        .unwrap();

        let config = PostletteConfig::load(Some(&path)).unwrap();
        assert_eq!(config.theme, ThemeMode::Light);
        assert_eq!(config.separator, "· · ·");
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/postlette.log")));
    }

    #[test]
    fn test_invalid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "theme = \"sepia\"\n").unwrap();
        assert!(matches!(
            PostletteConfig::from_file(&path),
            Err(ConfigError::Parse { .. })
        ));

        fs::write(&path, "colour = 3\n").unwrap();
        assert!(matches!(
            PostletteConfig::from_file(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = PostletteConfig::load(Some(Path::new("/nonexistent/postlette.toml")))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_config_dir_name() {
        assert!(get_config_dir().ends_with("postlette"));
    }
}
