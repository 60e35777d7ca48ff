//! The world registry.
//!
//! [`World`] holds every room in the session and the list of observers interested in game
//! events. It is constructed once at startup and shared (as `Arc<World>`) between the game
//! loop and the background event generator, so both collections sit behind locks.

use std::sync::{Arc, Mutex, MutexGuard, RwLock, Weak};

use log::{info, warn};
use rand::Rng;
use rand::prelude::IndexedRandom;

use crate::event::{GameEvent, Observer, ObserverId};
use crate::idgen::new_id;
use crate::room::Room;

/// A single observer registration. The world never owns its observers.
struct Registration {
    id: ObserverId,
    observer: Weak<dyn Observer>,
}

/// Shared holder of all rooms and observers for a session.
#[derive(Default)]
pub struct World {
    rooms: RwLock<Vec<Arc<Room>>>,
    observers: Mutex<Vec<Registration>>,
}
impl World {
    pub fn new() -> World {
        World::default()
    }

    /// Register an observer. Returns the id needed to remove it later.
    ///
    /// Only a weak reference is kept: once the caller drops the observer it
    /// silently stops receiving events.
    pub fn add_observer<O: Observer + 'static>(&self, observer: &Arc<O>) -> ObserverId {
        let id = new_id();
        let observer: Arc<dyn Observer> = observer.clone();
        self.observers_lock().push(Registration {
            id,
            observer: Arc::downgrade(&observer),
        });
        info!("observer {id} registered");
        id
    }

    /// Remove a registration by id. Returns `false` if no such registration exists.
    pub fn remove_observer(&self, id: ObserverId) -> bool {
        let mut observers = self.observers_lock();
        let before = observers.len();
        observers.retain(|reg| reg.id != id);
        let removed = observers.len() < before;
        if removed {
            info!("observer {id} removed");
        }
        removed
    }

    pub fn observer_count(&self) -> usize {
        self.observers_lock().len()
    }

    /// Deliver `event` to every live observer, in registration order.
    ///
    /// The registration list is copied before delivery, so observers may register or
    /// unregister from inside `on_notify`; such changes take effect on the next broadcast.
    /// Returns the number of observers notified.
    pub fn notify_observers(&self, event: &GameEvent) -> usize {
        let recipients: Vec<Arc<dyn Observer>> = {
            let mut observers = self.observers_lock();
            observers.retain(|reg| reg.observer.strong_count() > 0);
            observers.iter().filter_map(|reg| reg.observer.upgrade()).collect()
        };
        for observer in &recipients {
            observer.on_notify(event);
        }
        info!("broadcast \"{event}\" to {} observer(s)", recipients.len());
        recipients.len()
    }

    /// Append a room. Rooms are never removed during a session.
    pub fn add_room(&self, room: Room) -> Arc<Room> {
        let room = Arc::new(room);
        info!("room '{}' ({}) added to world", room.symbol, room.id);
        self.rooms_write().push(Arc::clone(&room));
        room
    }

    /// Snapshot of all rooms in the order they were added.
    pub fn rooms(&self) -> Vec<Arc<Room>> {
        self.rooms_read().clone()
    }

    pub fn room_count(&self) -> usize {
        self.rooms_read().len()
    }

    /// Pick a room uniformly at random, or `None` if there are none.
    pub fn random_room<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Arc<Room>> {
        self.rooms_read().choose(rng).cloned()
    }

    // A panic while holding one of these locks can't leave the lists half-modified, so
    // poisoning is logged and the data used as-is.
    fn observers_lock(&self) -> MutexGuard<'_, Vec<Registration>> {
        self.observers.lock().unwrap_or_else(|poisoned| {
            warn!("observer list lock was poisoned; recovering");
            poisoned.into_inner()
        })
    }

    fn rooms_read(&self) -> std::sync::RwLockReadGuard<'_, Vec<Arc<Room>>> {
        self.rooms.read().unwrap_or_else(|poisoned| {
            warn!("room list lock was poisoned; recovering");
            poisoned.into_inner()
        })
    }

    fn rooms_write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<Arc<Room>>> {
        self.rooms.write().unwrap_or_else(|poisoned| {
            warn!("room list lock was poisoned; recovering");
            poisoned.into_inner()
        })
    }
}
