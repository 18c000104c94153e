// self
use crate::obs::{RenderEvent, RenderStage};

/// Records a render event via the global metrics recorder (when enabled).
pub fn record_render_event(stage: RenderStage, event: RenderEvent) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"authn_registry_event_total",
			"stage" => stage.as_str(),
			"event" => event.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (stage, event);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn record_render_event_noop_without_metrics() {
		record_render_event(RenderStage::Registry, RenderEvent::DuplicateSkipped);
	}
}
