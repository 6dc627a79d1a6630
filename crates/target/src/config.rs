//! Command target configuration.
//!
//! Loaded from TOML. Every field is optional; defaults describe the standard
//! routing behavior.
//!
//! ```toml
//! clear_selection_after_navigation = true
//! dismiss_completion_in_bulk = true
//! completion_keys = ["enter", "tab", "up", "down", "pageup", "pagedown"]
//! ```

use relay_primitives::{Key, KeyCode};
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading a [`TargetConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("unknown key name in completion_keys: {0:?}")]
	UnknownKey(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

const DEFAULT_COMPLETION_KEYS: [KeyCode; 6] = [
	KeyCode::Enter,
	KeyCode::Tab,
	KeyCode::Up,
	KeyCode::Down,
	KeyCode::PageUp,
	KeyCode::PageDown,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetConfig {
	/// Collapse any selection left behind by a go-to-definition, so the engine
	/// does not read it as a visual selection.
	pub clear_selection_after_navigation: bool,
	/// Close a completion popup opened by a replayed edit during bulk operations.
	pub dismiss_completion_in_bulk: bool,
	/// Keys left to an active completion popup while the engine is inserting.
	pub completion_keys: Vec<KeyCode>,
}

impl Default for TargetConfig {
	fn default() -> Self {
		Self {
			clear_selection_after_navigation: true,
			dismiss_completion_in_bulk: true,
			completion_keys: DEFAULT_COMPLETION_KEYS.to_vec(),
		}
	}
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
	clear_selection_after_navigation: bool,
	dismiss_completion_in_bulk: bool,
	completion_keys: Option<Vec<String>>,
}

impl Default for RawConfig {
	fn default() -> Self {
		let defaults = TargetConfig::default();
		Self {
			clear_selection_after_navigation: defaults.clear_selection_after_navigation,
			dismiss_completion_in_bulk: defaults.dismiss_completion_in_bulk,
			completion_keys: None,
		}
	}
}

impl TargetConfig {
	/// Parses a configuration document.
	pub fn from_toml(src: &str) -> Result<Self> {
		let raw: RawConfig = toml::from_str(src)?;
		let completion_keys = match raw.completion_keys {
			None => DEFAULT_COMPLETION_KEYS.to_vec(),
			Some(names) => names
				.into_iter()
				.map(|name| Key::from_name(&name).map(|key| key.code).ok_or(ConfigError::UnknownKey(name)))
				.collect::<Result<_>>()?,
		};
		Ok(Self {
			clear_selection_after_navigation: raw.clear_selection_after_navigation,
			dismiss_completion_in_bulk: raw.dismiss_completion_in_bulk,
			completion_keys,
		})
	}

	/// Returns true if an active completion popup should receive `key`.
	///
	/// Ctrl/Alt chords are never popup keys.
	pub fn is_completion_key(&self, key: &Key) -> bool {
		!key.modifiers.ctrl && !key.modifiers.alt && self.completion_keys.contains(&key.code)
	}
}
