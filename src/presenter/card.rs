//! Card view model handed to the rendering layer.

// self
use crate::{
	_prelude::*,
	method::{AuthMethodDescriptor, IconRef, MethodConfig, MethodKey},
};

/// Everything a card renderer needs for one method.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MethodCard {
	/// Method key, usable as a stable render key.
	pub key: MethodKey,
	/// Label.
	pub name: String,
	/// One-line description.
	pub description: String,
	/// Theme-resolved icon.
	pub icon: IconRef,
	/// Editor or upgrade prompt.
	pub config: MethodConfig,
	/// Caller's disabled flag.
	pub disabled: bool,
	/// License-gated placeholder.
	pub unavailable: bool,
}
impl MethodCard {
	/// Maps a descriptor into a card, forwarding the caller's `disabled` flag.
	pub fn new(descriptor: AuthMethodDescriptor, disabled: bool) -> Self {
		let unavailable = descriptor.unavailable();
		let AuthMethodDescriptor { key, name, description, icon, config } = descriptor;

		Self { key, name, description, icon, config, disabled, unavailable }
	}
}

/// Rendering layer the presenter delegates to.
pub trait CardRenderer {
	/// Called once before the cards of a render pass.
	fn begin_pass(&mut self, _len: usize) {}

	/// Renders one card.
	fn render_card(&mut self, card: &MethodCard);
}
/// Collects the latest pass, replacing the previous one.
impl CardRenderer for Vec<MethodCard> {
	fn begin_pass(&mut self, len: usize) {
		self.clear();
		self.reserve(len);
	}

	fn render_card(&mut self, card: &MethodCard) {
		self.push(card.clone());
	}
}
