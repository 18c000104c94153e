//! Declarative method tables folded by the registry.

// self
use crate::{
	method::{
		self, AuthMethodDescriptor, ConfigEditor, EditorKind, IconRef, IconSet, MethodConfig,
		MethodKey,
	},
	registry::RegistryContext,
};

/// How a table entry is offered to administrators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Availability {
	/// Fully available, edited inline by the given editor.
	Editable(EditorKind),
	/// Listed for visibility only; shows the upgrade prompt.
	LicenseGated,
}
impl Availability {
	/// Produces the config unit for this availability under `ctx`.
	pub fn config(self, ctx: &RegistryContext) -> MethodConfig {
		match self {
			Availability::Editable(kind) =>
				MethodConfig::Editor(ConfigEditor::new(kind, ctx.disabled, ctx.updater.clone())),
			Availability::LicenseGated => MethodConfig::UpgradePrompt,
		}
	}
}

/// One row of a method table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MethodEntry {
	/// Stable method key.
	pub key: &'static str,
	/// Human-readable label.
	pub name: &'static str,
	/// One-line description.
	pub description: &'static str,
	/// Light/dark icon variants, looked up by key through [`method::icon_for`].
	pub icons: IconSet,
	/// Editable or license-gated.
	pub availability: Availability,
}
impl MethodEntry {
	/// Renders the row into a descriptor for the provided context.
	///
	/// The icon is resolved by key, so rows outside the built-in tables get the fallback icon.
	pub fn describe(&self, ctx: &RegistryContext) -> AuthMethodDescriptor {
		AuthMethodDescriptor {
			key: MethodKey::from_static(self.key),
			name: self.name.to_owned(),
			description: self.description.to_owned(),
			icon: method::icon_for(self.key, ctx.theme),
			config: self.availability.config(ctx),
		}
	}
}

const OIDC_ICONS: IconSet = IconSet::single(IconRef::new("/logos/oidc-logo.svg", "OIDC Logo"));
const OIDC_DESCRIPTION: &str = "Authenticate your users via the OpenID Connect protocol.";

/// Standard methods every instance offers, most common first.
pub static BASE_METHODS: [MethodEntry; 5] = [
	MethodEntry {
		key: "unique-codes",
		name: "Unique codes",
		description: "Log in or sign up using codes sent via email. You need to have set up SMTP to use this method.",
		icons: IconSet::single(IconRef::new("lucide:mails", "Mails")),
		availability: Availability::Editable(EditorKind::UniqueCodes),
	},
	MethodEntry {
		key: "passwords-login",
		name: "Passwords",
		description: "Allow members to create accounts with passwords and use them with their email addresses to sign in.",
		icons: IconSet::single(IconRef::new("lucide:key-round", "Key")),
		availability: Availability::Editable(EditorKind::Passwords),
	},
	MethodEntry {
		key: "google",
		name: "Google",
		description: "Allow members to log in or sign up with their Google accounts.",
		icons: IconSet::single(IconRef::new("/logos/google-logo.svg", "Google Logo")),
		availability: Availability::Editable(EditorKind::Google),
	},
	MethodEntry {
		key: "github",
		name: "GitHub",
		description: "Allow members to log in or sign up with their GitHub accounts.",
		icons: IconSet::themed(
			IconRef::new("/logos/github-light-mode.svg", "GitHub Logo"),
			IconRef::new("/logos/github-dark-mode.svg", "GitHub Logo"),
		),
		availability: Availability::Editable(EditorKind::Github),
	},
	MethodEntry {
		key: "gitlab",
		name: "GitLab",
		description: "Allow members to log in or sign up with their GitLab accounts.",
		icons: IconSet::single(IconRef::new("/logos/gitlab-logo.svg", "GitLab Logo")),
		availability: Availability::Editable(EditorKind::Gitlab),
	},
];

/// Extension methods appended after the base methods, in display order.
///
/// `oidc-inofficial` is a separate, ungated implementation rather than a tier of the official
/// OIDC method; keep it outside the licensing wall.
pub static EXTENSION_METHODS: [MethodEntry; 3] = [
	MethodEntry {
		key: "oidc-inofficial",
		name: "OpenID Connect (Inofficial)",
		description: OIDC_DESCRIPTION,
		icons: OIDC_ICONS,
		availability: Availability::Editable(EditorKind::OpenIdConnect),
	},
	MethodEntry {
		key: "oidc",
		name: "OIDC (Official)",
		description: OIDC_DESCRIPTION,
		icons: OIDC_ICONS,
		availability: Availability::LicenseGated,
	},
	MethodEntry {
		key: "saml",
		name: "SAML (Official)",
		description: "Authenticate your users via the Security Assertion Markup Language protocol.",
		icons: IconSet::single(IconRef::new("/logos/saml-logo.svg", "SAML Logo")),
		availability: Availability::LicenseGated,
	},
];

/// Looks up a built-in entry by key.
pub fn find_entry(key: &str) -> Option<&'static MethodEntry> {
	BASE_METHODS.iter().chain(EXTENSION_METHODS.iter()).find(|entry| entry.key == key)
}
