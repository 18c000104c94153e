//! Theme resolution hooks and an observable theme cell.

// self
use crate::{
	_prelude::*,
	method::{Theme, ThemeError},
};

/// Resolves the theme the settings screen is currently shown in.
pub trait ThemeResolver: Send + Sync {
	/// Returns the active theme; failures make presenters fall back to the default icon variant.
	fn resolve(&self) -> Result<Theme, ThemeError>;
}
impl ThemeResolver for Theme {
	fn resolve(&self) -> Result<Theme, ThemeError> {
		Ok(*self)
	}
}

/// Handle returned by [`ThemeHandle::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Arc<dyn Fn(Theme) -> bool + Send + Sync>;

#[derive(Default)]
struct Listeners {
	next: u64,
	entries: Vec<(SubscriptionId, Listener)>,
}

#[derive(Default)]
struct ThemeShared {
	current: RwLock<Theme>,
	listeners: Mutex<Listeners>,
}

/// Shared, observable theme cell fed by the host's theme detection.
///
/// Clones observe the same theme. Listeners run on the thread that changed the theme, after
/// every internal lock has been released, so they may call back into the handle.
#[derive(Clone, Default)]
pub struct ThemeHandle(Arc<ThemeShared>);
impl ThemeHandle {
	/// Creates a handle seeded with `theme`.
	pub fn new(theme: Theme) -> Self {
		let handle = Self::default();

		*handle.0.current.write() = theme;

		handle
	}

	/// Returns the current theme.
	pub fn current(&self) -> Theme {
		*self.0.current.read()
	}

	/// Replaces the theme and notifies listeners if it changed.
	pub fn set(&self, theme: Theme) -> bool {
		{
			let mut current = self.0.current.write();

			if *current == theme {
				return false;
			}

			*current = theme;
		}

		let listeners = self.0.listeners.lock().entries.clone();
		let expired = listeners
			.into_iter()
			.filter_map(|(id, listener)| (!listener(theme)).then_some(id))
			.collect::<Vec<_>>();

		if !expired.is_empty() {
			self.0.listeners.lock().entries.retain(|(id, _)| !expired.contains(id));
		}

		true
	}

	/// Applies a resolved theme name; unknown or missing names become [`Theme::Undetermined`].
	pub fn set_resolved(&self, name: Option<&str>) -> bool {
		self.set(Theme::from_resolved(name))
	}

	/// Applies a theme name, rejecting names outside the supported set.
	pub fn set_named(&self, name: &str) -> Result<bool> {
		let theme = name.parse::<Theme>()?;

		Ok(self.set(theme))
	}

	/// Registers a listener invoked with the new theme after every change.
	pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
	where
		F: 'static + Fn(Theme) + Send + Sync,
	{
		self.subscribe_while(move |theme| {
			listener(theme);

			true
		})
	}

	/// Registers a listener that stays subscribed only while it returns true.
	///
	/// A listener returning false is removed once the notification pass finishes.
	pub fn subscribe_while<F>(&self, listener: F) -> SubscriptionId
	where
		F: 'static + Fn(Theme) -> bool + Send + Sync,
	{
		let mut listeners = self.0.listeners.lock();
		let id = SubscriptionId(listeners.next);

		listeners.next += 1;
		listeners.entries.push((id, Arc::new(listener)));

		id
	}

	/// Removes a listener; returns false if it was already gone.
	pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
		let mut listeners = self.0.listeners.lock();
		let before = listeners.entries.len();

		listeners.entries.retain(|(entry, _)| *entry != id);

		listeners.entries.len() != before
	}

	/// Number of registered listeners.
	pub fn listener_count(&self) -> usize {
		self.0.listeners.lock().entries.len()
	}
}
impl ThemeResolver for ThemeHandle {
	fn resolve(&self) -> Result<Theme, ThemeError> {
		Ok(self.current())
	}
}
impl Debug for ThemeHandle {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ThemeHandle")
			.field("current", &self.current())
			.field("listeners", &self.listener_count())
			.finish()
	}
}
