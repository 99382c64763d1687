use super::event::Event;
use std::sync::Arc;
use std::sync::Mutex;

/// Where a round sends its events. Publishing is fire-and-forget:
/// it never blocks the round and never fails it.
pub trait Sink: Send + Sync {
    fn publish(&self, event: Event);
}

/// Drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Sink for Silent {
    fn publish(&self, _: Event) {}
}

/// In-memory audit log. Clones share the same log, so keep one
/// and hand another to the round.
#[derive(Debug, Default, Clone)]
pub struct Recorder(Arc<Mutex<Vec<Event>>>);

impl Recorder {
    pub fn events(&self) -> Vec<Event> {
        self.0.lock().unwrap_or_else(|p| p.into_inner()).clone()
    }
    pub fn len(&self) -> usize {
        self.0.lock().unwrap_or_else(|p| p.into_inner()).len()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// one JSON object per line
    pub fn json(&self) -> serde_json::Result<String> {
        self.events()
            .iter()
            .map(serde_json::to_string)
            .collect::<serde_json::Result<Vec<String>>>()
            .map(|lines| lines.join("\n"))
    }
}

impl Sink for Recorder {
    fn publish(&self, event: Event) {
        self.0.lock().unwrap_or_else(|p| p.into_inner()).push(event);
    }
}

/// Lossy fan-out to spectators. Slow receivers lag, they never block.
impl Sink for tokio::sync::broadcast::Sender<Event> {
    fn publish(&self, event: Event) {
        if self.send(event).is_err() {
            log::trace!("no spectators subscribed");
        }
    }
}

impl<S> Sink for Arc<S>
where
    S: Sink + ?Sized,
{
    fn publish(&self, event: Event) {
        self.as_ref().publish(event)
    }
}
