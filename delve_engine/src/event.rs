//! Game events and the observers that receive them.

use std::fmt::Display;
use std::sync::Mutex;

use log::warn;
use uuid::Uuid;

/// Something that happened in the world and is worth telling observers about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Ambient narrative produced by the background event generator.
    Random { description: String },
}
impl GameEvent {
    pub fn description(&self) -> &str {
        match self {
            GameEvent::Random { description } => description,
        }
    }
}
impl Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Identifies one observer registration with the world.
pub type ObserverId = Uuid;

/// Anything that wants to hear about [`GameEvent`]s.
///
/// Broadcasts come from the event generator thread, hence the `Send + Sync` bound.
pub trait Observer: Send + Sync {
    fn on_notify(&self, event: &GameEvent);
}

/// Lets mutable game state (e.g. a shared player) be registered as an observer.
impl<T: Observer + Send> Observer for Mutex<T> {
    fn on_notify(&self, event: &GameEvent) {
        match self.lock() {
            Ok(inner) => inner.on_notify(event),
            Err(e) => warn!("skipping notification of poisoned observer: {e}"),
        }
    }
}
