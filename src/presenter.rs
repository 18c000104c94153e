//! Presenter that turns registry output into rendered method cards.
//!
//! The presenter resolves the theme, builds the descriptor list once per pass, and hands every
//! card to a [`CardRenderer`]. Re-renders are driven by explicit notifications: prop setters and
//! [`MethodListPresenter::theme_changed`] run a pass only when a watched input actually changed.

pub mod card;
pub mod theme;

pub use card::*;
pub use theme::*;

// self
use crate::{
	_prelude::*,
	method::{ConfigUpdater, Theme},
	obs::{self, RenderEvent, RenderSpan, RenderStage},
	registry::{MethodRegistry, RegistryContext},
};

/// Stateful wrapper that renders the method list whenever its inputs change.
pub struct MethodListPresenter<R>
where
	R: CardRenderer,
{
	registry: MethodRegistry,
	resolver: Arc<dyn ThemeResolver>,
	renderer: R,
	disabled: bool,
	updater: ConfigUpdater,
	rendered: Option<RegistryContext>,
}
impl<R> MethodListPresenter<R>
where
	R: CardRenderer,
{
	/// Creates a presenter over the default registry. Nothing renders until the first pass.
	pub fn new(
		resolver: Arc<dyn ThemeResolver>,
		renderer: R,
		disabled: bool,
		updater: ConfigUpdater,
	) -> Self {
		Self {
			registry: MethodRegistry::default(),
			resolver,
			renderer,
			disabled,
			updater,
			rendered: None,
		}
	}

	/// Replaces the registry used for subsequent passes.
	pub fn with_registry(mut self, registry: MethodRegistry) -> Self {
		self.registry = registry;
		self.rendered = None;

		self
	}

	/// Current `disabled` prop.
	pub fn disabled(&self) -> bool {
		self.disabled
	}

	/// Renderer receiving the cards.
	pub fn renderer(&self) -> &R {
		&self.renderer
	}

	/// Consumes the presenter and returns its renderer.
	pub fn into_renderer(self) -> R {
		self.renderer
	}

	/// Resolves the theme, degrading to [`Theme::Undetermined`] when resolution fails.
	pub fn resolve_theme(&self) -> Theme {
		match self.resolver.resolve() {
			Ok(theme) => theme,
			Err(e) => {
				obs::record(RenderStage::Presenter, RenderEvent::ThemeFallback, &e.to_string());

				Theme::Undetermined
			},
		}
	}

	/// Builds the cards for the current inputs without rendering them.
	pub fn cards(&self) -> Vec<MethodCard> {
		self.cards_for(&self.context())
	}

	/// Runs a render pass unconditionally and returns the number of cards rendered.
	pub fn render(&mut self) -> usize {
		let ctx = self.context();

		self.render_with(ctx)
	}

	/// Runs a render pass if any watched input changed since the last one.
	pub fn refresh(&mut self) -> bool {
		let ctx = self.context();

		if self.rendered.as_ref() == Some(&ctx) {
			obs::record(RenderStage::Presenter, RenderEvent::Unchanged, ctx.theme.as_str());

			return false;
		}

		self.render_with(ctx);

		true
	}

	/// Updates the `disabled` prop and re-renders if it changed the output.
	pub fn set_disabled(&mut self, disabled: bool) -> bool {
		self.disabled = disabled;

		self.refresh()
	}

	/// Updates the `updater` prop and re-renders if its identity changed.
	pub fn set_updater(&mut self, updater: ConfigUpdater) -> bool {
		self.updater = updater;

		self.refresh()
	}

	/// Notification hook for theme changes.
	pub fn theme_changed(&mut self) -> bool {
		self.refresh()
	}

	fn context(&self) -> RegistryContext {
		RegistryContext::new(self.disabled, self.updater.clone(), self.resolve_theme())
	}

	fn cards_for(&self, ctx: &RegistryContext) -> Vec<MethodCard> {
		self.registry
			.build(ctx)
			.into_iter()
			.map(|descriptor| MethodCard::new(descriptor, ctx.disabled))
			.collect()
	}

	fn render_with(&mut self, ctx: RegistryContext) -> usize {
		let _guard = RenderSpan::new(RenderStage::Presenter, ctx.theme).entered();
		let cards = self.cards_for(&ctx);

		self.renderer.begin_pass(cards.len());

		for card in &cards {
			self.renderer.render_card(card);
		}

		obs::record(RenderStage::Presenter, RenderEvent::Rendered, ctx.theme.as_str());

		self.rendered = Some(ctx);

		cards.len()
	}
}
impl<R> MethodListPresenter<R>
where
	R: 'static + CardRenderer + Send,
{
	/// Shares the presenter and re-renders it on every change of `handle`.
	///
	/// The subscription holds a weak reference. Once the returned presenter is dropped, the next
	/// theme change finds it gone and removes the listener; unsubscribe with the returned id to
	/// release it earlier. Do not change the theme while holding the presenter lock.
	pub fn attach(mut self, handle: &ThemeHandle) -> (Arc<Mutex<Self>>, SubscriptionId) {
		self.resolver = Arc::new(handle.clone());

		let shared = Arc::new(Mutex::new(self));
		let weak = Arc::downgrade(&shared);
		let id = handle.subscribe_while(move |_| {
			let Some(presenter) = weak.upgrade() else {
				return false;
			};

			presenter.lock().theme_changed();

			true
		});

		(shared, id)
	}
}
impl<R> Debug for MethodListPresenter<R>
where
	R: CardRenderer,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("MethodListPresenter")
			.field("registry", &self.registry)
			.field("disabled", &self.disabled)
			.field("rendered", &self.rendered.as_ref().map(|ctx| ctx.theme))
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{
		_preludet::{FailingThemeResolver, StubBaseMethods, stub_descriptor},
		registry::MethodRegistry,
	};

	fn presenter(theme: Theme) -> MethodListPresenter<Vec<MethodCard>> {
		MethodListPresenter::new(Arc::new(theme), Vec::new(), false, ConfigUpdater::noop())
	}

	#[test]
	fn render_forwards_flags() {
		let mut presenter = presenter(Theme::Dark);

		assert_eq!(presenter.render(), 8);

		let cards = presenter.renderer();

		assert!(cards.iter().all(|card| !card.disabled));
		assert_eq!(
			cards.iter().filter(|card| card.unavailable).map(|card| &*card.key).collect::<Vec<_>>(),
			["oidc", "saml"]
		);
		assert_eq!(cards[3].icon.asset, "/logos/github-dark-mode.svg");
	}

	#[test]
	fn refresh_skips_unchanged_inputs() {
		let mut presenter = presenter(Theme::Light);

		assert!(presenter.refresh());
		assert!(!presenter.theme_changed());
		assert!(!presenter.set_disabled(false));
		assert!(presenter.set_disabled(true));
		assert!(presenter.renderer().iter().all(|card| card.disabled));
		assert!(presenter.set_updater(ConfigUpdater::noop()));
	}

	#[test]
	fn failed_theme_resolution_still_renders_everything() {
		let mut presenter = MethodListPresenter::new(
			Arc::new(FailingThemeResolver),
			Vec::<MethodCard>::new(),
			false,
			ConfigUpdater::noop(),
		);

		assert_eq!(presenter.resolve_theme(), Theme::Undetermined);
		assert_eq!(presenter.render(), 8);
		assert_eq!(presenter.renderer()[3].icon.asset, "/logos/github-light-mode.svg");
	}

	#[test]
	fn custom_registry_renders_its_base_methods() {
		let registry =
			MethodRegistry::with_base(Arc::new(StubBaseMethods::new([stub_descriptor("ldap")])));
		let mut presenter = presenter(Theme::Light).with_registry(registry);

		assert!(!presenter.disabled());
		assert_eq!(presenter.render(), 4);

		let cards = presenter.into_renderer();

		assert_eq!(&*cards[0].key, "ldap");
		assert!(!cards[0].unavailable);
	}
}
