//! Method registry that folds base and extension tables into one ordered descriptor list.
//!
//! `table` holds the declarative rows (key, labels, icons, availability) for the built-in
//! methods. `base` defines [`BaseMethodProvider`], the hook that supplies the methods listed
//! ahead of the extension table. Building is pure: no I/O, no shared state, and the update
//! callback is threaded into editors without ever being invoked.

pub mod base;
pub mod table;

pub use base::*;
pub use table::*;

// std
use std::collections::HashSet;
// self
use crate::{
	_prelude::*,
	method::{AuthMethodDescriptor, ConfigUpdater, Theme},
	obs::{self, RenderEvent, RenderSpan, RenderStage},
};

/// Inputs shared by every descriptor in one build.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistryContext {
	/// Disables every interactive editor, e.g. while a save is in flight.
	pub disabled: bool,
	/// Write-back callback threaded into editors.
	pub updater: ConfigUpdater,
	/// Active theme used for icon selection.
	pub theme: Theme,
}
impl RegistryContext {
	/// Creates a context from the three registry inputs.
	pub fn new(disabled: bool, updater: ConfigUpdater, theme: Theme) -> Self {
		Self { disabled, updater, theme }
	}
}

/// Assembles descriptor lists from a base provider and an extension table.
#[derive(Clone)]
pub struct MethodRegistry {
	/// Provider of the methods listed first.
	pub base: Arc<dyn BaseMethodProvider>,
	/// Rows appended after the base methods, in order.
	pub extensions: &'static [MethodEntry],
}
impl MethodRegistry {
	/// Creates a registry over a custom base provider and the built-in extension table.
	pub fn with_base(base: Arc<dyn BaseMethodProvider>) -> Self {
		Self { base, extensions: &EXTENSION_METHODS }
	}

	/// Builds the ordered descriptor list for `ctx`.
	///
	/// Base methods come first, then every extension row. A base method whose key is already
	/// taken (by an extension row or an earlier base method) is skipped, so keys stay unique and
	/// the extension rows always close the list.
	pub fn build(&self, ctx: &RegistryContext) -> Vec<AuthMethodDescriptor> {
		let _guard = RenderSpan::new(RenderStage::Registry, ctx.theme).entered();
		let extensions =
			self.extensions.iter().map(|entry| entry.describe(ctx)).collect::<Vec<_>>();
		let mut seen = extensions.iter().map(|method| method.key.clone()).collect::<HashSet<_>>();
		let mut methods = Vec::with_capacity(extensions.len());

		for method in self.base.base_methods(ctx) {
			if seen.insert(method.key.clone()) {
				methods.push(method);
			} else {
				obs::record(RenderStage::Registry, RenderEvent::DuplicateSkipped, &method.key);
			}
		}

		methods.extend(extensions);
		obs::record(RenderStage::Registry, RenderEvent::Built, ctx.theme.as_str());

		methods
	}
}
impl Default for MethodRegistry {
	fn default() -> Self {
		Self::with_base(Arc::new(DefaultBaseMethods))
	}
}
impl Debug for MethodRegistry {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("MethodRegistry")
			.field("extensions", &self.extensions.iter().map(|entry| entry.key).collect::<Vec<_>>())
			.finish()
	}
}

/// Builds the default registry's descriptor list.
pub fn build_methods(
	disabled: bool,
	updater: ConfigUpdater,
	theme: Theme,
) -> Vec<AuthMethodDescriptor> {
	MethodRegistry::default().build(&RegistryContext::new(disabled, updater, theme))
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{
		_preludet::{StubBaseMethods, stub_descriptor},
		method::MethodConfig,
	};

	#[test]
	fn default_build_lists_base_then_extensions() {
		let keys = build_methods(false, ConfigUpdater::noop(), Theme::Light)
			.into_iter()
			.map(|method| method.key.to_string())
			.collect::<Vec<_>>();

		assert_eq!(keys, [
			"unique-codes",
			"passwords-login",
			"google",
			"github",
			"gitlab",
			"oidc-inofficial",
			"oidc",
			"saml"
		]);
	}

	#[test]
	fn colliding_base_keys_are_skipped() {
		let base = StubBaseMethods::new([
			stub_descriptor("ldap"),
			stub_descriptor("saml"),
			stub_descriptor("ldap"),
		]);
		let registry = MethodRegistry::with_base(Arc::new(base));
		let methods =
			registry.build(&RegistryContext::new(false, ConfigUpdater::noop(), Theme::Dark));
		let keys = methods.iter().map(|method| &*method.key).collect::<Vec<_>>();

		assert_eq!(keys, ["ldap", "oidc-inofficial", "oidc", "saml"]);
		assert_eq!(methods[3].config, MethodConfig::UpgradePrompt);
	}

	#[test]
	fn editors_carry_disabled_flag_and_updater() {
		let updater = ConfigUpdater::noop();
		let methods = build_methods(true, updater.clone(), Theme::Undetermined);

		for editor in methods.iter().filter_map(|method| method.config.editor()) {
			assert!(editor.disabled);
			assert_eq!(editor.updater, updater);
		}
	}
}
