// std
use std::{collections::HashSet, sync::Arc};
// self
use authn_registry::{
	method::{
		AuthMethodDescriptor, ConfigEditor, ConfigUpdater, EditorKind, IconRef, MethodConfig,
		MethodKey, Theme,
	},
	registry::{MethodRegistry, RegistryContext, build_methods},
};

const EXTENSION_KEYS: [&str; 3] = ["oidc-inofficial", "oidc", "saml"];
const THEMES: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::Undetermined];

fn custom_method(key: &str) -> color_eyre::Result<AuthMethodDescriptor> {
	let descriptor = AuthMethodDescriptor::builder(MethodKey::new(key)?)
		.name("Custom")
		.description("Custom sign-in method.")
		.icon(IconRef::new("custom.svg", "Custom"))
		.config(MethodConfig::Editor(ConfigEditor::new(
			EditorKind::Passwords,
			false,
			ConfigUpdater::noop(),
		)))
		.build()?;

	Ok(descriptor)
}

fn registry_with(base: Vec<AuthMethodDescriptor>) -> MethodRegistry {
	MethodRegistry::with_base(Arc::new(move |_: &RegistryContext| base.clone()))
}

fn keys(methods: &[AuthMethodDescriptor]) -> Vec<String> {
	methods.iter().map(|m| m.key.to_string()).collect()
}

fn inputs() -> impl Iterator<Item = (bool, Theme)> {
	[true, false].into_iter().flat_map(|disabled| THEMES.map(|theme| (disabled, theme)))
}

#[test]
fn extension_methods_close_every_list() {
	for (disabled, theme) in inputs() {
		let methods = build_methods(disabled, ConfigUpdater::noop(), theme);
		let tail = methods[methods.len() - 3..].iter().map(|m| &*m.key).collect::<Vec<_>>();

		assert_eq!(tail, EXTENSION_KEYS, "disabled={disabled} theme={theme}");
	}
}

#[test]
fn only_official_methods_are_unavailable() {
	for (disabled, theme) in inputs() {
		for method in build_methods(disabled, ConfigUpdater::noop(), theme) {
			let gated = matches!(&*method.key, "oidc" | "saml");

			assert_eq!(method.unavailable(), gated, "{}", method.key);

			if method.unavailable() {
				assert_eq!(method.config, MethodConfig::UpgradePrompt);
			} else {
				assert!(method.config.editor().is_some());
			}
		}
	}
}

#[test]
fn keys_are_pairwise_distinct() {
	for (disabled, theme) in inputs() {
		let methods = build_methods(disabled, ConfigUpdater::noop(), theme);
		let keys = methods.iter().map(|m| m.key.clone()).collect::<HashSet<_>>();

		assert_eq!(keys.len(), methods.len());
	}
}

#[test]
fn empty_base_still_yields_extension_methods() {
	let registry = registry_with(Vec::new());

	for (disabled, theme) in inputs() {
		let methods =
			registry.build(&RegistryContext::new(disabled, ConfigUpdater::noop(), theme));

		assert_eq!(methods.iter().map(|m| &*m.key).collect::<Vec<_>>(), EXTENSION_KEYS);
	}
}

#[test]
fn undetermined_theme_resolves_every_icon() {
	for method in build_methods(false, ConfigUpdater::noop(), Theme::Undetermined) {
		assert!(!method.icon.asset.is_empty(), "{} has no icon", method.key);
	}
}

#[test]
fn disabled_dark_scenario() -> color_eyre::Result<()> {
	let base = vec![custom_method("ldap")?, custom_method("kerberos")?];
	let base_count = base.len();
	let methods = registry_with(base).build(&RegistryContext::new(
		true,
		ConfigUpdater::noop(),
		Theme::Dark,
	));

	assert_eq!(methods.len(), base_count + 3);
	assert_eq!(&*methods[base_count].key, "oidc-inofficial");
	assert!(!methods[base_count].unavailable());
	assert_eq!(&*methods[base_count + 1].key, "oidc");
	assert!(methods[base_count + 1].unavailable());

	Ok(())
}

#[test]
fn ordering_is_stable_across_calls() {
	for (disabled, theme) in inputs() {
		let first = keys(&build_methods(disabled, ConfigUpdater::noop(), theme));
		let second = keys(&build_methods(disabled, ConfigUpdater::noop(), theme));

		assert_eq!(first, second);
	}
}
