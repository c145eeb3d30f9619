//! Editor configuration file.
//!
//! Every field has a default, so a missing file and an empty file behave the
//! same. Unknown keys are rejected to catch typos early.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use solder_registry::DuplicatePolicy;
use tracing::debug;

/// File name looked up under the platform config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Errors reading or parsing the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("failed to read {path}: {source}")]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("invalid config {path}: {source}")]
	Parse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
	pub hotkeys: HotkeyConfig,
	pub ratsnest: RatsnestConfig,
	pub log: LogConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HotkeyConfig {
	pub duplicate_actions: DuplicateActions,
}

/// What startup registration does with a duplicate action declaration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateActions {
	Panic,
	Ignore,
	/// Panic in debug builds, ignore in release builds.
	#[default]
	Build,
}

impl DuplicateActions {
	pub fn policy(self) -> DuplicatePolicy {
		match self {
			DuplicateActions::Panic => DuplicatePolicy::Panic,
			DuplicateActions::Ignore => DuplicatePolicy::Ignore,
			DuplicateActions::Build => DuplicatePolicy::for_build(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RatsnestConfig {
	/// Delay before a deferred ratsnest refresh, in milliseconds.
	pub debounce_ms: u64,
	/// An eager refresh slower than this switches to deferred refreshes.
	pub slow_threshold_ms: u64,
}

impl Default for RatsnestConfig {
	fn default() -> Self {
		Self {
			debounce_ms: 20,
			slow_threshold_ms: 25,
		}
	}
}

impl RatsnestConfig {
	pub fn debounce(&self) -> Duration {
		Duration::from_millis(self.debounce_ms)
	}

	pub fn slow_threshold(&self) -> Duration {
		Duration::from_millis(self.slow_threshold_ms)
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
	/// `tracing` filter directive used when `RUST_LOG` is unset.
	pub filter: Option<String>,
}

impl EditorConfig {
	pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
		toml::from_str(content)
	}

	/// Loads `path`; a missing file yields the defaults.
	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		let content = match std::fs::read_to_string(path) {
			Ok(content) => content,
			Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
				debug!(path = %path.display(), "No config file; using defaults");
				return Ok(Self::default());
			}
			Err(source) => {
				return Err(ConfigError::Read {
					path: path.to_path_buf(),
					source,
				});
			}
		};
		let config = Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
			path: path.to_path_buf(),
			source,
		})?;
		debug!(path = %path.display(), "Loaded config");
		Ok(config)
	}

	/// Loads the explicit path if given, else the default location.
	pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
		match path.map(Path::to_path_buf).or_else(default_config_path) {
			Some(path) => Self::load(&path),
			None => Ok(Self::default()),
		}
	}
}

/// `<config dir>/solder/config.toml`, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
	dirs::config_dir().map(|dir| dir.join("solder").join(CONFIG_FILE))
}
