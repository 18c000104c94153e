//! Typed registry of administrative sign-in methods: license-gated variants, theme-aware icons,
//! and write-back config editors for settings screens.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod error;
pub mod method;
pub mod obs;
pub mod presenter;
pub mod registry;
pub mod settings;
#[cfg(any(test, feature = "test"))]
pub mod _preludet {
	//! Convenience re-exports and test doubles; enabled via `cfg(test)` or the `test` crate
	//! feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		method::{
			AuthMethodDescriptor, ConfigEditor, ConfigKey, ConfigUpdater, EditorKind, IconRef,
			MethodConfig, MethodKey, Theme, ThemeError,
		},
		presenter::ThemeResolver,
		registry::{BaseMethodProvider, RegistryContext},
	};

	/// Base provider returning a fixed list regardless of the context.
	#[derive(Clone, Debug, Default)]
	pub struct StubBaseMethods(pub Vec<AuthMethodDescriptor>);
	impl StubBaseMethods {
		/// Wraps the provided descriptors.
		pub fn new(methods: impl IntoIterator<Item = AuthMethodDescriptor>) -> Self {
			Self(methods.into_iter().collect())
		}
	}
	impl BaseMethodProvider for StubBaseMethods {
		fn base_methods(&self, _: &RegistryContext) -> Vec<AuthMethodDescriptor> {
			self.0.clone()
		}
	}

	/// Theme resolver that always fails, as if detection were unavailable.
	#[derive(Debug, Default)]
	pub struct FailingThemeResolver;
	impl ThemeResolver for FailingThemeResolver {
		fn resolve(&self) -> Result<Theme, ThemeError> {
			Err(ThemeError::Unavailable)
		}
	}

	/// Builds an available descriptor whose editor writes nowhere.
	pub fn stub_descriptor(key: &str) -> AuthMethodDescriptor {
		AuthMethodDescriptor::builder(
			MethodKey::new(key).expect("Stub method keys should pass validation."),
		)
		.name(key)
		.description("Stub method used in tests.")
		.icon(IconRef::new("stub.svg", "Stub"))
		.config(MethodConfig::Editor(ConfigEditor::new(
			EditorKind::Passwords,
			false,
			ConfigUpdater::noop(),
		)))
		.build()
		.expect("Stub descriptor should build successfully.")
	}

	/// Returns an updater that records every write, plus the shared log.
	pub fn recording_updater() -> (ConfigUpdater, Arc<Mutex<Vec<(ConfigKey, String)>>>) {
		let writes = Arc::new(Mutex::new(Vec::new()));
		let sink = writes.clone();
		let updater = ConfigUpdater::new(move |key, value| sink.lock().push((key, value)));

		(updater, writes)
	}
}

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		str::FromStr,
		sync::Arc,
	};

	pub use parking_lot::{Mutex, RwLock};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;

	pub use crate::error::Result;
}

#[cfg(test)] use color_eyre as _;
