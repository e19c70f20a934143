//! Analytics event seam.
//!
//! The menu only names events; delivery belongs to the sink.

/// Event emitted when the "Playground" entry is opened.
pub const PLAYGROUND_VISIT_EVENT: &str =
    "openedx.paragon.docs.menu.playground.visit_playground.clicked";

/// Fire-and-forget receiver for tracking events.
pub trait AnalyticsSink {
    /// Record a single event. Must not block.
    fn track(&self, event: &str);
}

/// Sink that records events in the log.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingAnalytics;

impl AnalyticsSink for TracingAnalytics {
    fn track(&self, event: &str) {
        tracing::info!(event, "Analytics event");
    }
}

/// Sink that discards events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopAnalytics;

impl AnalyticsSink for NoopAnalytics {
    fn track(&self, _event: &str) {}
}
