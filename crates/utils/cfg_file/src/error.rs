use std::{io, path::PathBuf};

use thiserror::Error;

use crate::config::ConfigFormat;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse {format} config {}: {message}", .path.display())]
    Parse {
        path: PathBuf,
        format: ConfigFormat,
        message: String,
    },

    #[error("Failed to serialize {format} config: {message}")]
    Serialize {
        format: ConfigFormat,
        message: String,
    },
}
