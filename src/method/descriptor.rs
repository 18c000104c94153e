//! Authentication method descriptors consumed by presenters.

/// Builder API for assembling method descriptors.
pub mod builder;

pub use builder::*;

// self
use crate::{
	_prelude::*,
	method::{IconRef, MethodConfig, MethodKey},
};

/// Immutable description of one selectable authentication method.
///
/// Descriptors are rebuilt on every render pass and never mutated in place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AuthMethodDescriptor {
	/// Identifier, unique within one registry snapshot.
	pub key: MethodKey,
	/// Human-readable label.
	pub name: String,
	/// One-line explanation shown to the administrator.
	pub description: String,
	/// Theme-resolved icon.
	pub icon: IconRef,
	/// Editor or upgrade prompt.
	pub config: MethodConfig,
}
impl AuthMethodDescriptor {
	/// Creates a new builder for the provided identifier.
	pub fn builder(key: MethodKey) -> AuthMethodDescriptorBuilder {
		AuthMethodDescriptorBuilder::new(key)
	}

	/// True when the method is listed behind a licensing wall.
	pub fn unavailable(&self) -> bool {
		self.config.is_upgrade_prompt()
	}
}
