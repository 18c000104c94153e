//! Config units attached to method descriptors.
//!
//! A method either carries an interactive editor wired to the caller's [`ConfigUpdater`] or the
//! upgrade prompt shown for license-gated methods. Availability is derived from this variant, so a
//! gated method can never expose an editor.

// self
use crate::{_prelude::*, method::ConfigKey};

type UpdateFn = dyn Fn(ConfigKey, String) + Send + Sync;

/// Caller-supplied write-back callback invoked by config editors.
///
/// Clones share the same callback; equality is callback identity, which is what presenters watch
/// to decide whether a re-render is needed.
#[derive(Clone)]
pub struct ConfigUpdater(Arc<UpdateFn>);
impl ConfigUpdater {
	/// Wraps a callback.
	pub fn new<F>(f: F) -> Self
	where
		F: 'static + Fn(ConfigKey, String) + Send + Sync,
	{
		Self(Arc::new(f))
	}

	/// Callback that discards every write.
	pub fn noop() -> Self {
		Self::new(|_, _| {})
	}

	/// Invokes the callback. The result is never inspected.
	pub fn call(&self, key: ConfigKey, value: impl Into<String>) {
		(self.0)(key, value.into());
	}
}
impl PartialEq for ConfigUpdater {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.0, &other.0)
	}
}
impl Eq for ConfigUpdater {}
impl Debug for ConfigUpdater {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("ConfigUpdater(..)")
	}
}

/// Configuration editors known to the settings screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorKind {
	/// Emailed unique sign-in codes.
	UniqueCodes,
	/// Email + password sign-in.
	Passwords,
	/// Google OAuth.
	Google,
	/// GitHub OAuth.
	Github,
	/// GitLab OAuth.
	Gitlab,
	/// Self-hosted OpenID Connect.
	OpenIdConnect,
}
impl EditorKind {
	/// Settings key toggled when the method is switched on or off.
	pub const fn toggle_key(self) -> ConfigKey {
		match self {
			EditorKind::UniqueCodes => ConfigKey::EnableMagicLinkLogin,
			EditorKind::Passwords => ConfigKey::EnableEmailPassword,
			EditorKind::Google => ConfigKey::IsGoogleEnabled,
			EditorKind::Github => ConfigKey::IsGithubEnabled,
			EditorKind::Gitlab => ConfigKey::IsGitlabEnabled,
			EditorKind::OpenIdConnect => ConfigKey::IsOidcEnabled,
		}
	}

	/// Every settings key the editor may write, toggle first.
	pub const fn fields(self) -> &'static [ConfigKey] {
		match self {
			EditorKind::UniqueCodes => &[ConfigKey::EnableMagicLinkLogin],
			EditorKind::Passwords => &[ConfigKey::EnableEmailPassword],
			EditorKind::Google => &[ConfigKey::IsGoogleEnabled],
			EditorKind::Github => &[ConfigKey::IsGithubEnabled],
			EditorKind::Gitlab => &[ConfigKey::IsGitlabEnabled],
			EditorKind::OpenIdConnect => &[
				ConfigKey::IsOidcEnabled,
				ConfigKey::OidcClientId,
				ConfigKey::OidcClientSecret,
				ConfigKey::OidcUrlAuthorization,
				ConfigKey::OidcUrlToken,
				ConfigKey::OidcUrlUserinfo,
				ConfigKey::OidcUrlEndsession,
				ConfigKey::OidcProviderName,
			],
		}
	}

	/// Returns true if the editor owns `key`.
	pub fn owns(self, key: ConfigKey) -> bool {
		self.fields().contains(&key)
	}
}

/// Errors raised when an editor refuses a write.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum EditorError {
	/// Editors are disabled, e.g. while a save is in flight.
	#[error("The {editor:?} editor is disabled.")]
	Disabled {
		/// Editor that refused the write.
		editor: EditorKind,
	},
	/// The key belongs to a different method.
	#[error("The {editor:?} editor does not own `{key}`.")]
	ForeignKey {
		/// Editor that refused the write.
		editor: EditorKind,
		/// Rejected key.
		key: ConfigKey,
	},
}

/// Interactive editor bound to the caller's update callback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigEditor {
	/// Which editor renders the fields.
	pub kind: EditorKind,
	/// Mirrors the registry's `disabled` input.
	pub disabled: bool,
	/// Callback the editor writes through.
	pub updater: ConfigUpdater,
}
impl ConfigEditor {
	/// Creates an editor for `kind`.
	pub fn new(kind: EditorKind, disabled: bool, updater: ConfigUpdater) -> Self {
		Self { kind, disabled, updater }
	}

	/// Forwards an edited value to the update callback.
	pub fn update(&self, key: ConfigKey, value: impl Into<String>) -> Result<(), EditorError> {
		if self.disabled {
			return Err(EditorError::Disabled { editor: self.kind });
		}
		if !self.kind.owns(key) {
			return Err(EditorError::ForeignKey { editor: self.kind, key });
		}

		self.updater.call(key, value);

		Ok(())
	}

	/// Writes `"1"` or `"0"` to the editor's toggle key.
	pub fn set_enabled(&self, enabled: bool) -> Result<(), EditorError> {
		self.update(self.kind.toggle_key(), if enabled { "1" } else { "0" })
	}
}

/// Renderable settings unit of a method.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MethodConfig {
	/// Inline editor for an available method.
	Editor(ConfigEditor),
	/// Upgrade prompt replacing the editor of a license-gated method.
	UpgradePrompt,
}
impl MethodConfig {
	/// Returns true for the upgrade prompt.
	pub fn is_upgrade_prompt(&self) -> bool {
		matches!(self, MethodConfig::UpgradePrompt)
	}

	/// Returns the editor, if the method is editable.
	pub fn editor(&self) -> Option<&ConfigEditor> {
		match self {
			MethodConfig::Editor(editor) => Some(editor),
			MethodConfig::UpgradePrompt => None,
		}
	}
}
impl Serialize for MethodConfig {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		#[derive(Serialize)]
		#[serde(tag = "kind", rename_all = "snake_case")]
		enum View {
			Editor { editor: EditorKind, disabled: bool },
			UpgradePrompt,
		}

		let view = match self {
			MethodConfig::Editor(editor) =>
				View::Editor { editor: editor.kind, disabled: editor.disabled },
			MethodConfig::UpgradePrompt => View::UpgradePrompt,
		};

		view.serialize(serializer)
	}
}
