use std::path::PathBuf;
use thiserror::Error;

pub use crate::palace::PalaceError;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid pair file: {0}")]
    Toml(#[from] toml::de::Error),
}
