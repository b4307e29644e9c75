use serde::{Serialize, de::DeserializeOwned};
use std::{
    env::current_dir,
    fmt::Display,
    fs,
    path::{Path, PathBuf},
};

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
    Json,
}

impl ConfigFormat {
    /// Pick the format from the file extension, falling back to JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::Yaml,
            Some("toml") => Self::Toml,
            _ => Self::Json,
        }
    }

    fn parse<T: DeserializeOwned>(self, contents: &str) -> Result<T, String> {
        match self {
            Self::Yaml => serde_yaml::from_str(contents).map_err(|e| e.to_string()),
            Self::Toml => toml::from_str(contents).map_err(|e| e.to_string()),
            Self::Json => serde_json::from_str(contents).map_err(|e| e.to_string()),
        }
    }

    fn render<T: Serialize>(self, val: &T) -> Result<String, String> {
        match self {
            Self::Yaml => serde_yaml::to_string(val).map_err(|e| e.to_string()),
            Self::Toml => toml::to_string_pretty(val).map_err(|e| e.to_string()),
            Self::Json => serde_json::to_string_pretty(val).map_err(|e| e.to_string()),
        }
    }
}

impl Display for ConfigFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yaml => write!(f, "YAML"),
            Self::Toml => write!(f, "TOML"),
            Self::Json => write!(f, "JSON"),
        }
    }
}

/// A serde type stored in a file whose extension decides its format.
///
/// Relative paths are resolved against the current directory.
pub trait ConfigFile: Serialize + DeserializeOwned {
    fn default_path() -> Result<PathBuf, ConfigError>;

    fn read() -> Result<Self, ConfigError> {
        let path = Self::default_path()?;
        Self::read_from(path)
    }

    fn read_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file_path = current_dir()?.join(path.as_ref());

        if !file_path.is_file() {
            return Err(ConfigError::NotFound(file_path));
        }

        let contents = fs::read_to_string(&file_path)?;
        let format = ConfigFormat::from_path(&file_path);

        format
            .parse(&contents)
            .map_err(|message| ConfigError::Parse {
                path: file_path,
                format,
                message,
            })
    }

    fn write(&self) -> Result<(), ConfigError> {
        let path = Self::default_path()?;
        self.write_to(path)
    }

    fn write_to(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let file_path = current_dir()?.join(path.as_ref());

        if let Some(parent) = file_path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let format = ConfigFormat::from_path(&file_path);
        let contents = format
            .render(self)
            .map_err(|message| ConfigError::Serialize { format, message })?;

        fs::write(&file_path, contents)?;
        Ok(())
    }

    /// Check if the file returned by `default_path` exists
    fn exist() -> bool {
        let Ok(path) = Self::default_path() else {
            return false;
        };
        path.exists()
    }
}
