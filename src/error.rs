//! Registry-level error types shared across descriptors, editors, themes, and settings.

// self
use crate::_prelude::*;

/// Registry-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical registry error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Identifier failed validation.
	#[error(transparent)]
	Identifier(#[from] crate::method::IdentifierError),
	/// Descriptor builder rejected its inputs.
	#[error(transparent)]
	Descriptor(#[from] crate::method::DescriptorError),
	/// Config editor refused a write.
	#[error(transparent)]
	Editor(#[from] crate::method::EditorError),
	/// Theme could not be resolved or parsed.
	#[error(transparent)]
	Theme(#[from] crate::method::ThemeError),
	/// Shared settings object failed to load or persist.
	#[error("{0}")]
	Settings(
		#[from]
		#[source]
		SettingsError,
	),
}

/// Failures raised by [`crate::settings::InstanceSettings`].
#[derive(Debug, ThisError)]
pub enum SettingsError {
	/// Settings key is not part of the closed key set.
	#[error("Unknown settings key `{key}`.")]
	UnknownKey {
		/// Key that failed to parse.
		key: String,
	},
	/// Settings payload is not valid JSON for the settings map.
	#[error("Settings payload is malformed at `{path}`.")]
	Parse {
		/// JSON path where parsing failed.
		path: String,
		/// Structured parsing failure.
		#[source]
		source: serde_json::Error,
	},
	/// Settings map could not be serialized.
	#[error("Settings could not be serialized.")]
	Serialize(#[source] serde_json::Error),
}
impl From<serde_path_to_error::Error<serde_json::Error>> for SettingsError {
	fn from(e: serde_path_to_error::Error<serde_json::Error>) -> Self {
		let path = e.path().to_string();

		Self::Parse { path, source: e.into_inner() }
	}
}
