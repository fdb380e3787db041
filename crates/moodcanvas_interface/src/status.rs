//! Progress observer.

use moodcanvas_core::StatusEvent;

/// Receives progress notifications.
///
/// Called synchronously from the generating task, so implementations should
/// return quickly. Any closure `Fn(&StatusEvent)` is a sink.
///
/// # Examples
///
/// ```
/// use moodcanvas_core::StatusEvent;
/// use moodcanvas_interface::StatusSink;
/// use std::sync::Mutex;
///
/// let seen = Mutex::new(Vec::new());
/// let sink = |event: &StatusEvent| seen.lock().unwrap().push(event.clone());
/// sink.on_status(&StatusEvent::running("Trying model x"));
/// assert_eq!(seen.lock().unwrap().len(), 1);
/// ```
pub trait StatusSink: Send + Sync {
    /// Handles one event.
    fn on_status(&self, event: &StatusEvent);
}

impl<F> StatusSink for F
where
    F: Fn(&StatusEvent) + Send + Sync,
{
    fn on_status(&self, event: &StatusEvent) {
        self(event)
    }
}
