// self
use crate::{
	_prelude::*,
	method::Theme,
	obs::{RenderEvent, RenderStage},
};

/// A span builder used by registry builds and presenter passes.
#[derive(Clone, Debug)]
pub struct RenderSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl RenderSpan {
	/// Creates a new span tagged with the provided stage + theme.
	pub fn new(stage: RenderStage, theme: Theme) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::debug_span!(
				"authn_registry.render",
				stage = stage.as_str(),
				theme = theme.as_str()
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (stage, theme);

			Self {}
		}
	}

	/// Enters the span for the duration of the returned guard.
	pub fn entered(self) -> RenderSpanGuard {
		#[cfg(feature = "tracing")]
		{
			RenderSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			RenderSpanGuard {}
		}
	}
}

/// RAII guard returned by [`RenderSpan::entered`].
pub struct RenderSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for RenderSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("RenderSpanGuard(..)")
	}
}

/// Emits a log event for the provided stage + event (when tracing is enabled).
///
/// Skipped duplicates and theme fallbacks are warnings; everything else is debug output.
pub fn log_render_event(stage: RenderStage, event: RenderEvent, detail: &str) {
	#[cfg(feature = "tracing")]
	{
		match event {
			RenderEvent::DuplicateSkipped | RenderEvent::ThemeFallback => tracing::warn!(
				stage = stage.as_str(),
				event = event.as_str(),
				detail,
				"render input degraded"
			),
			_ => tracing::debug!(stage = stage.as_str(), event = event.as_str(), detail),
		}
	}

	#[cfg(not(feature = "tracing"))]
	{
		let _ = (stage, event, detail);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn render_span_guard_exists_with_or_without_tracing() {
		let guard = RenderSpan::new(RenderStage::Presenter, Theme::Dark).entered();

		assert_eq!(format!("{guard:?}"), "RenderSpanGuard(..)");
	}

	#[test]
	fn log_render_event_accepts_every_event() {
		for event in [
			RenderEvent::Built,
			RenderEvent::Rendered,
			RenderEvent::Unchanged,
			RenderEvent::DuplicateSkipped,
			RenderEvent::ThemeFallback,
		] {
			log_render_event(RenderStage::Registry, event, "test");
		}
	}
}
