//! A `tracing` subscriber for tests that runs a hook on every event.

use tracing::{span, Event, Metadata, Subscriber};

/// Enables everything and calls `on_event` for each event. Spans are ignored.
pub(crate) struct EventHook<F> {
    on_event: F,
}

impl<F> EventHook<F>
where
    F: Fn(&Event<'_>) + Send + Sync + 'static,
{
    pub fn new(on_event: F) -> Self {
        Self { on_event }
    }

    /// Runs `f` with this subscriber as the thread's default.
    pub fn with<R>(self, f: impl FnOnce() -> R) -> R {
        tracing::subscriber::with_default(self, f)
    }
}

impl<F> Subscriber for EventHook<F>
where
    F: Fn(&Event<'_>) + Send + Sync + 'static,
{
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _: &span::Attributes<'_>) -> span::Id {
        span::Id::from_u64(1)
    }

    fn record(&self, _: &span::Id, _: &span::Record<'_>) {}

    fn record_follows_from(&self, _: &span::Id, _: &span::Id) {}

    fn event(&self, event: &Event<'_>) {
        (self.on_event)(event);
    }

    fn enter(&self, _: &span::Id) {}

    fn exit(&self, _: &span::Id) {}
}
