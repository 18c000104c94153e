//! Base-method provider hook that supplies the standard (non-extension) methods.

// self
use crate::{
	_prelude::*,
	method::AuthMethodDescriptor,
	registry::{BASE_METHODS, RegistryContext},
};

/// Supplies the methods listed ahead of the extension table.
///
/// The registry treats the result as an opaque prefix: it neither reorders nor edits it, apart
/// from dropping entries whose key an extension method already claims.
pub trait BaseMethodProvider: Send + Sync {
	/// Produces the base methods for the provided context.
	fn base_methods(&self, ctx: &RegistryContext) -> Vec<AuthMethodDescriptor>;
}
impl<F> BaseMethodProvider for F
where
	F: Fn(&RegistryContext) -> Vec<AuthMethodDescriptor> + Send + Sync,
{
	fn base_methods(&self, ctx: &RegistryContext) -> Vec<AuthMethodDescriptor> {
		self(ctx)
	}
}

/// Built-in provider listing unique codes, passwords, Google, GitHub, and GitLab.
#[derive(Debug, Default)]
pub struct DefaultBaseMethods;
impl Display for DefaultBaseMethods {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("default-base-methods")
	}
}
impl BaseMethodProvider for DefaultBaseMethods {
	fn base_methods(&self, ctx: &RegistryContext) -> Vec<AuthMethodDescriptor> {
		BASE_METHODS.iter().map(|entry| entry.describe(ctx)).collect()
	}
}
