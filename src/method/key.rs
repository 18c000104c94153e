//! Strongly typed method identifiers and the closed set of settings keys editors write.

// std
use std::{
	borrow::{Borrow, Cow},
	ops::Deref,
};
// self
use crate::{_prelude::*, error::SettingsError};

const IDENTIFIER_MAX_LEN: usize = 128;

/// Error returned when identifier validation fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum IdentifierError {
	/// The identifier was empty.
	#[error("Method identifier cannot be empty.")]
	Empty,
	/// The identifier contains whitespace characters.
	#[error("Method identifier contains whitespace.")]
	ContainsWhitespace,
	/// The identifier exceeded the allowed character count.
	#[error("Method identifier exceeds {max} characters.")]
	TooLong {
		/// Maximum permitted character count.
		max: usize,
	},
}

/// Stable identifier of an authentication method, unique within one registry snapshot.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MethodKey(Cow<'static, str>);
impl MethodKey {
	/// Creates a new identifier after validation.
	pub fn new(value: impl AsRef<str>) -> Result<Self, IdentifierError> {
		let view = value.as_ref();

		validate_view(view)?;

		Ok(Self(Cow::Owned(view.to_owned())))
	}

	/// Wraps a built-in key; table tests guarantee these pass [`MethodKey::new`] validation.
	pub(crate) const fn from_static(value: &'static str) -> Self {
		Self(Cow::Borrowed(value))
	}
}
impl Deref for MethodKey {
	type Target = str;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl AsRef<str> for MethodKey {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
impl Borrow<str> for MethodKey {
	fn borrow(&self) -> &str {
		&self.0
	}
}
impl From<MethodKey> for String {
	fn from(value: MethodKey) -> Self {
		value.0.into_owned()
	}
}
impl TryFrom<String> for MethodKey {
	type Error = IdentifierError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		validate_view(&value)?;

		Ok(Self(Cow::Owned(value)))
	}
}
impl Debug for MethodKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "Method({})", self.0)
	}
}
impl Display for MethodKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}
impl FromStr for MethodKey {
	type Err = IdentifierError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}

fn validate_view(view: &str) -> Result<(), IdentifierError> {
	if view.is_empty() {
		return Err(IdentifierError::Empty);
	}
	if view.chars().any(char::is_whitespace) {
		return Err(IdentifierError::ContainsWhitespace);
	}
	if view.chars().count() > IDENTIFIER_MAX_LEN {
		return Err(IdentifierError::TooLong { max: IDENTIFIER_MAX_LEN });
	}

	Ok(())
}

/// Instance settings keys written by method config editors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigKey {
	/// Allows new users to sign up.
	EnableSignup,
	/// Toggles sign-in with emailed unique codes.
	EnableMagicLinkLogin,
	/// Toggles email + password sign-in.
	EnableEmailPassword,
	/// Toggles Google OAuth.
	IsGoogleEnabled,
	/// Toggles GitHub OAuth.
	IsGithubEnabled,
	/// Toggles GitLab OAuth.
	IsGitlabEnabled,
	/// Toggles OpenID Connect.
	IsOidcEnabled,
	/// Toggles SAML.
	IsSamlEnabled,
	/// OIDC client identifier.
	OidcClientId,
	/// OIDC client secret.
	OidcClientSecret,
	/// OIDC authorization endpoint.
	OidcUrlAuthorization,
	/// OIDC token endpoint.
	OidcUrlToken,
	/// OIDC userinfo endpoint.
	OidcUrlUserinfo,
	/// OIDC end-session endpoint.
	OidcUrlEndsession,
	/// Label shown on the OIDC sign-in button.
	OidcProviderName,
}
impl ConfigKey {
	/// Every key, in declaration order.
	pub const ALL: [ConfigKey; 15] = [
		ConfigKey::EnableSignup,
		ConfigKey::EnableMagicLinkLogin,
		ConfigKey::EnableEmailPassword,
		ConfigKey::IsGoogleEnabled,
		ConfigKey::IsGithubEnabled,
		ConfigKey::IsGitlabEnabled,
		ConfigKey::IsOidcEnabled,
		ConfigKey::IsSamlEnabled,
		ConfigKey::OidcClientId,
		ConfigKey::OidcClientSecret,
		ConfigKey::OidcUrlAuthorization,
		ConfigKey::OidcUrlToken,
		ConfigKey::OidcUrlUserinfo,
		ConfigKey::OidcUrlEndsession,
		ConfigKey::OidcProviderName,
	];

	/// Returns the settings key as stored by the instance.
	pub const fn as_str(self) -> &'static str {
		match self {
			ConfigKey::EnableSignup => "ENABLE_SIGNUP",
			ConfigKey::EnableMagicLinkLogin => "ENABLE_MAGIC_LINK_LOGIN",
			ConfigKey::EnableEmailPassword => "ENABLE_EMAIL_PASSWORD",
			ConfigKey::IsGoogleEnabled => "IS_GOOGLE_ENABLED",
			ConfigKey::IsGithubEnabled => "IS_GITHUB_ENABLED",
			ConfigKey::IsGitlabEnabled => "IS_GITLAB_ENABLED",
			ConfigKey::IsOidcEnabled => "IS_OIDC_ENABLED",
			ConfigKey::IsSamlEnabled => "IS_SAML_ENABLED",
			ConfigKey::OidcClientId => "OIDC_CLIENT_ID",
			ConfigKey::OidcClientSecret => "OIDC_CLIENT_SECRET",
			ConfigKey::OidcUrlAuthorization => "OIDC_URL_AUTHORIZATION",
			ConfigKey::OidcUrlToken => "OIDC_URL_TOKEN",
			ConfigKey::OidcUrlUserinfo => "OIDC_URL_USERINFO",
			ConfigKey::OidcUrlEndsession => "OIDC_URL_ENDSESSION",
			ConfigKey::OidcProviderName => "OIDC_PROVIDER_NAME",
		}
	}
}
impl Display for ConfigKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for ConfigKey {
	type Err = SettingsError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		ConfigKey::ALL
			.into_iter()
			.find(|key| key.as_str() == s)
			.ok_or_else(|| SettingsError::UnknownKey { key: s.to_owned() })
	}
}

#[cfg(test)]
mod tests {
	// std
	use std::collections::HashMap;
	// self
	use super::*;

	#[test]
	fn method_keys_validate() {
		assert!(MethodKey::new(" oidc").is_err(), "Leading whitespace must be rejected.");
		assert_eq!(MethodKey::new(""), Err(IdentifierError::Empty));
		assert_eq!(
			MethodKey::new("a".repeat(IDENTIFIER_MAX_LEN + 1)),
			Err(IdentifierError::TooLong { max: IDENTIFIER_MAX_LEN })
		);

		let key = MethodKey::new("oidc-inofficial").expect("Method key fixture should be valid.");

		assert_eq!(key.as_ref(), "oidc-inofficial");
		assert_eq!(key, MethodKey::from_static("oidc-inofficial"));
	}

	#[test]
	fn length_limit_counts_characters() {
		assert!(
			MethodKey::new("é".repeat(IDENTIFIER_MAX_LEN)).is_ok(),
			"Multibyte keys at the limit must be accepted."
		);
		assert_eq!(
			MethodKey::new("é".repeat(IDENTIFIER_MAX_LEN + 1)),
			Err(IdentifierError::TooLong { max: IDENTIFIER_MAX_LEN })
		);
	}

	#[test]
	fn serde_enforces_validation() {
		let key: MethodKey =
			serde_json::from_str("\"saml\"").expect("Method key should deserialize successfully.");

		assert_eq!(&*key, "saml");
		assert!(serde_json::from_str::<MethodKey>("\"with space\"").is_err());
	}

	#[test]
	fn borrow_supports_fast_lookup() {
		let map: HashMap<MethodKey, u8> =
			HashMap::from_iter([(MethodKey::from_static("github"), 3_u8)]);

		assert_eq!(map.get("github"), Some(&3));
	}

	#[test]
	fn config_keys_match_serde_names() {
		for key in ConfigKey::ALL {
			let json = serde_json::to_string(&key).expect("Config key should serialize.");

			assert_eq!(json, format!("\"{}\"", key.as_str()));
			assert_eq!(key.as_str().parse::<ConfigKey>().ok(), Some(key));
		}

		assert!("IS_FOO_ENABLED".parse::<ConfigKey>().is_err());
	}
}
