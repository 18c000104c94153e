//! Shared instance settings object that config editors write back into.

// self
use crate::{
	_prelude::*,
	error::SettingsError,
	method::{AuthMethodDescriptor, ConfigKey, ConfigUpdater},
};

type SettingsMap = Arc<RwLock<BTreeMap<ConfigKey, String>>>;

/// Thread-safe `ConfigKey -> value` map shared by every clone.
#[derive(Clone, Debug, Default)]
pub struct InstanceSettings(SettingsMap);
impl InstanceSettings {
	/// Loads settings from a JSON object of `KEY: "value"` pairs.
	pub fn from_json(payload: &str) -> Result<Self> {
		let mut de = serde_json::Deserializer::from_str(payload);
		let raw: BTreeMap<String, String> =
			serde_path_to_error::deserialize(&mut de).map_err(SettingsError::from)?;

		de.end().map_err(|source| SettingsError::Parse { path: String::new(), source })?;

		let map = raw
			.into_iter()
			.map(|(key, value)| Ok((key.parse::<ConfigKey>()?, value)))
			.collect::<Result<BTreeMap<_, _>, SettingsError>>()?;

		Ok(Self(Arc::new(RwLock::new(map))))
	}

	/// Serializes the current values as a JSON object.
	pub fn to_json(&self) -> Result<String> {
		let snapshot = self.snapshot();
		let view = snapshot
			.iter()
			.map(|(key, value)| (key.as_str(), value.as_str()))
			.collect::<BTreeMap<_, _>>();

		Ok(serde_json::to_string(&view).map_err(SettingsError::Serialize)?)
	}

	/// Returns an updater that writes into this object.
	pub fn updater(&self) -> ConfigUpdater {
		let map = self.0.clone();

		ConfigUpdater::new(move |key, value| {
			map.write().insert(key, value);
		})
	}

	/// Returns the value stored for `key`.
	pub fn get(&self, key: ConfigKey) -> Option<String> {
		self.0.read().get(&key).cloned()
	}

	/// Returns true when `key` holds `"1"` or `"true"`.
	pub fn is_enabled(&self, key: ConfigKey) -> bool {
		self.0
			.read()
			.get(&key)
			.is_some_and(|value| value == "1" || value.eq_ignore_ascii_case("true"))
	}

	/// Returns true when the method is editable and its toggle key is enabled.
	///
	/// License-gated methods are never enabled, whatever the stored values say.
	pub fn is_method_enabled(&self, method: &AuthMethodDescriptor) -> bool {
		method.config.editor().is_some_and(|editor| self.is_enabled(editor.kind.toggle_key()))
	}

	/// Copies the current values.
	pub fn snapshot(&self) -> BTreeMap<ConfigKey, String> {
		self.0.read().clone()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::error::Error;

	#[test]
	fn updater_writes_through_to_clones() {
		let settings = InstanceSettings::default();
		let observer = settings.clone();

		settings.updater().call(ConfigKey::IsGithubEnabled, "1");

		assert!(observer.is_enabled(ConfigKey::IsGithubEnabled));
		assert!(!observer.is_enabled(ConfigKey::IsGitlabEnabled));
	}

	#[test]
	fn json_round_trip_preserves_values() {
		let settings = InstanceSettings::from_json(
			r#"{"ENABLE_EMAIL_PASSWORD":"1","OIDC_CLIENT_ID":"client-7"}"#,
		)
		.expect("Settings fixture should parse.");

		assert_eq!(settings.get(ConfigKey::OidcClientId).as_deref(), Some("client-7"));

		let json = settings.to_json().expect("Settings should serialize.");

		assert_eq!(json, r#"{"ENABLE_EMAIL_PASSWORD":"1","OIDC_CLIENT_ID":"client-7"}"#);
	}

	#[test]
	fn from_json_reports_unknown_keys_and_paths() {
		let err = InstanceSettings::from_json(r#"{"IS_FOO_ENABLED":"1"}"#)
			.expect_err("Unknown keys must be rejected.");

		assert!(matches!(err, Error::Settings(SettingsError::UnknownKey { ref key }) if key == "IS_FOO_ENABLED"));

		let err = InstanceSettings::from_json(r#"{"IS_SAML_ENABLED":1}"#)
			.expect_err("Non-string values must be rejected.");

		assert!(matches!(err, Error::Settings(SettingsError::Parse { ref path, .. }) if path == "IS_SAML_ENABLED"));
	}

	#[test]
	fn from_json_rejects_trailing_data() {
		let err = InstanceSettings::from_json(
			r#"{"ENABLE_SIGNUP":"1"} {"IS_SAML_ENABLED":"1"} garbage"#,
		)
		.expect_err("Payloads with trailing data must be rejected.");

		assert!(matches!(err, Error::Settings(SettingsError::Parse { ref path, .. }) if path.is_empty()));
		assert!(
			InstanceSettings::from_json("{\"ENABLE_SIGNUP\":\"1\"}\n").is_ok(),
			"Trailing whitespace is not data."
		);
	}
}
