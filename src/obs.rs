//! Optional observability helpers for registry builds and presenter passes.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `authn_registry.render` with the `stage` and
//!   `theme` fields, plus events for skipped duplicates and theme fallbacks.
//! - Enable `metrics` to increment the `authn_registry_event_total` counter for every recorded
//!   event, labeled by `stage` + `event`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Pipeline stages observed by the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RenderStage {
	/// Descriptor assembly in the registry.
	Registry,
	/// Card mapping in the presenter.
	Presenter,
}
impl RenderStage {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RenderStage::Registry => "registry",
			RenderStage::Presenter => "presenter",
		}
	}
}
impl Display for RenderStage {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Event labels recorded per stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RenderEvent {
	/// A descriptor list was produced.
	Built,
	/// A render pass delivered cards to the renderer.
	Rendered,
	/// A watched input changed without affecting the output, so no pass ran.
	Unchanged,
	/// A descriptor was dropped because its key was already present.
	DuplicateSkipped,
	/// Theme resolution failed and the default icon variant was used.
	ThemeFallback,
}
impl RenderEvent {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RenderEvent::Built => "built",
			RenderEvent::Rendered => "rendered",
			RenderEvent::Unchanged => "unchanged",
			RenderEvent::DuplicateSkipped => "duplicate_skipped",
			RenderEvent::ThemeFallback => "theme_fallback",
		}
	}
}
impl Display for RenderEvent {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Records an event through every enabled backend.
pub fn record(stage: RenderStage, event: RenderEvent, detail: &str) {
	record_render_event(stage, event);
	log_render_event(stage, event, detail);
}
