//! Loading a pair of profiles from TOML.
//!
//! ```toml
//! [a]
//! tier = "exact"
//! dominant_element = "fire"
//!
//! [a.points.sun]
//! sign = "leo"
//! degree = 130.5
//!
//! [b]
//! tier = "date_only"
//! dominant_element = "water"
//! ```

use crate::chart::ChartProfile;
use crate::error::ConfigError;
use crate::palace::PalaceSynastry;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct ProfilePair {
    pub a: ChartProfile,
    pub b: ChartProfile,
    #[serde(default)]
    pub palace: Option<PalaceSynastry>,
}

pub fn from_toml_str(text: &str) -> Result<ProfilePair, ConfigError> {
    Ok(toml::from_str(text)?)
}

pub fn load_pair_file(path: impl AsRef<Path>) -> Result<ProfilePair, ConfigError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    from_toml_str(&text)
}
