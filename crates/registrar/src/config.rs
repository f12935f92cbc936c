//! Registrar configuration.
//!
//! ```toml
//! [[reserved]]
//! class = "Array"
//! name = "__owners__"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::reserved::ReservedEntry;

/// Errors raised while loading configuration files.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("failed to read {}: {source}", .path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("invalid config: {0}")]
	Parse(#[from] toml::de::Error),
}

/// Settings fixed when a [`Registrar`](crate::Registrar) is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistrarConfig {
	/// Reserved pairs added on top of the built-in set.
	pub reserved: Vec<ReservedEntry>,
}

impl RegistrarConfig {
	pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(text)?)
	}

	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		let text = read_to_string(path)?;
		Self::from_toml_str(&text)
	}
}

/// Reads a file, tagging IO failures with the path.
pub fn read_to_string(path: &Path) -> Result<String, ConfigError> {
	std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
		path: path.to_path_buf(),
		source,
	})
}
