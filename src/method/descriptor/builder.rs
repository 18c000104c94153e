// self
use crate::{
	_prelude::*,
	method::{AuthMethodDescriptor, IconRef, MethodConfig, MethodKey},
};

/// Errors raised while constructing descriptors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum DescriptorError {
	/// Every method needs a visible label.
	#[error("Method `{key}` is missing a name.")]
	MissingName {
		/// Offending method.
		key: String,
	},
	/// Every method needs a one-line description.
	#[error("Method `{key}` is missing a description.")]
	MissingDescription {
		/// Offending method.
		key: String,
	},
	/// Icon must be resolved before building.
	#[error("Method `{key}` is missing an icon.")]
	MissingIcon {
		/// Offending method.
		key: String,
	},
	/// Either an editor or the upgrade prompt is required.
	#[error("Method `{key}` is missing a config unit.")]
	MissingConfig {
		/// Offending method.
		key: String,
	},
}

/// Builder for [`AuthMethodDescriptor`] values.
#[derive(Debug)]
pub struct AuthMethodDescriptorBuilder {
	/// Identifier for the descriptor being constructed.
	pub key: MethodKey,
	/// Human-readable label.
	pub name: Option<String>,
	/// One-line description.
	pub description: Option<String>,
	/// Theme-resolved icon.
	pub icon: Option<IconRef>,
	/// Editor or upgrade prompt.
	pub config: Option<MethodConfig>,
}
impl AuthMethodDescriptorBuilder {
	/// Creates a new builder seeded with the provided identifier.
	pub fn new(key: MethodKey) -> Self {
		Self { key, name: None, description: None, icon: None, config: None }
	}

	/// Sets the label.
	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());

		self
	}

	/// Sets the description.
	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());

		self
	}

	/// Sets the icon.
	pub fn icon(mut self, icon: IconRef) -> Self {
		self.icon = Some(icon);

		self
	}

	/// Sets the config unit.
	pub fn config(mut self, config: MethodConfig) -> Self {
		self.config = Some(config);

		self
	}

	/// Marks the method as license-gated, replacing any editor with the upgrade prompt.
	pub fn unavailable(self) -> Self {
		self.config(MethodConfig::UpgradePrompt)
	}

	/// Consumes the builder and validates the resulting descriptor.
	pub fn build(self) -> Result<AuthMethodDescriptor, DescriptorError> {
		let key = self.key;
		let name = self
			.name
			.filter(|name| !name.trim().is_empty())
			.ok_or_else(|| DescriptorError::MissingName { key: key.to_string() })?;
		let description = self
			.description
			.filter(|description| !description.trim().is_empty())
			.ok_or_else(|| DescriptorError::MissingDescription { key: key.to_string() })?;
		let icon = self.icon.ok_or_else(|| DescriptorError::MissingIcon { key: key.to_string() })?;
		let config =
			self.config.ok_or_else(|| DescriptorError::MissingConfig { key: key.to_string() })?;

		Ok(AuthMethodDescriptor { key, name, description, icon, config })
	}
}
