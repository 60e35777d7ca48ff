//! Background event generator.
//!
//! A worker thread wakes every `interval`, rolls a die and, on a hit, broadcasts a random
//! narrative event through the [`World`]. The thread waits on a channel rather than sleeping,
//! so it can be stopped at any time: [`EventGenerator::shutdown`] (or dropping the handle)
//! wakes it and ends the loop.

use std::sync::Arc;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::{Context, Result};
use gametools::Spinner;
use log::{debug, info, warn};
use rand::Rng;

use crate::config::{DEFAULT_EVENT_DESCRIPTION, EventConfig};
use crate::event::GameEvent;
use crate::spinners::SpinnerExt;
use crate::world::World;

/// The per-tick decision: whether an event fires and what it says.
pub struct EventRoll {
    one_in: u32,
    descriptions: Option<Spinner<String>>,
}
impl EventRoll {
    pub fn new(config: &EventConfig) -> EventRoll {
        EventRoll {
            one_in: config.one_in.max(1),
            descriptions: Spinner::from_lines(&config.descriptions),
        }
    }

    /// Roll once. Fires when a uniform draw in `1..=one_in` comes up 1.
    pub fn roll<R: Rng>(&self, rng: &mut R) -> Option<GameEvent> {
        let draw = rng.random_range(1..=self.one_in);
        debug!("event roll: {draw} (fires on 1 of {})", self.one_in);
        (draw == 1).then(|| GameEvent::Random {
            description: self
                .descriptions
                .as_ref()
                .and_then(Spinner::spin)
                .unwrap_or_else(|| DEFAULT_EVENT_DESCRIPTION.to_string()),
        })
    }
}

/// Handle to the running generator thread.
pub struct EventGenerator {
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}
impl EventGenerator {
    /// Start the generator thread.
    ///
    /// # Errors
    /// - if the OS refuses to spawn the thread
    pub fn spawn(world: Arc<World>, config: &EventConfig) -> Result<EventGenerator> {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let interval = config.interval();
        let config = config.clone();
        let handle = thread::Builder::new()
            .name("event-generator".into())
            .spawn(move || {
                let roller = EventRoll::new(&config);
                let mut rng = rand::rng();
                run_ticks(&world, &roller, &mut rng, interval, || {
                    match stop_rx.recv_timeout(interval) {
                        Err(RecvTimeoutError::Timeout) => true,
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => false,
                    }
                });
            })
            .context("while spawning event generator thread")?;
        info!("event generator started (every {interval:?})");
        Ok(EventGenerator {
            stop: Some(stop_tx),
            handle: Some(handle),
        })
    }

    /// Stop the generator and wait for its thread to finish.
    pub fn shutdown(mut self) {
        self.stop_and_join();
    }

    fn stop_and_join(&mut self) {
        if let Some(stop) = self.stop.take() {
            // the receiver is already gone if the thread exited on its own
            let _ = stop.send(());
        }
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("event generator thread panicked");
            } else {
                info!("event generator stopped");
            }
        }
    }
}
impl Drop for EventGenerator {
    fn drop(&mut self) {
        self.stop_and_join();
    }
}

/// Tick loop shared by the thread and tests. `wait` blocks for one interval and returns
/// `false` when the loop should end. Returns the number of events broadcast.
fn run_ticks<R, W>(world: &World, roller: &EventRoll, rng: &mut R, interval: Duration, mut wait: W) -> usize
where
    R: Rng,
    W: FnMut() -> bool,
{
    let mut fired = 0;
    while wait() {
        if let Some(event) = roller.roll(rng) {
            fired += 1;
            world.notify_observers(&event);
        }
    }
    debug!("event loop (interval {interval:?}) exiting after {fired} event(s)");
    fired
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Observer;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::sync::Mutex;
    use std::time::Instant;

    struct Tally(Mutex<Vec<String>>);
    impl Observer for Tally {
        fn on_notify(&self, event: &GameEvent) {
            self.0.lock().unwrap().push(event.description().to_string());
        }
    }

    fn config(one_in: u32, descriptions: &[&str]) -> EventConfig {
        EventConfig {
            interval_secs: 1,
            one_in,
            descriptions: descriptions.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    #[test]
    fn certain_roll_always_fires() {
        let roller = EventRoll::new(&config(1, &["bats scatter"]));
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..10 {
            let event = roller.roll(&mut rng).unwrap();
            assert_eq!(event.description(), "bats scatter");
        }
    }

    #[test]
    fn missing_descriptions_use_default_text() {
        let roller = EventRoll::new(&config(1, &[]));
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(roller.roll(&mut rng).unwrap().description(), DEFAULT_EVENT_DESCRIPTION);
    }

    #[test]
    fn one_in_ten_fires_roughly_a_tenth_of_the_time() {
        let roller = EventRoll::new(&EventConfig::default());
        let mut rng = StdRng::seed_from_u64(42);
        let hits = (0..10_000).filter(|_| roller.roll(&mut rng).is_some()).count();
        assert!((700..1300).contains(&hits), "hits = {hits}");
    }

    #[test]
    fn tick_loop_broadcasts_each_hit() {
        let world = World::new();
        let tally = Arc::new(Tally(Mutex::new(Vec::new())));
        world.add_observer(&tally);
        let roller = EventRoll::new(&config(1, &["a bell rings"]));
        let mut rng = StdRng::seed_from_u64(9);

        let mut ticks = 0;
        let fired = run_ticks(&world, &roller, &mut rng, Duration::ZERO, || {
            ticks += 1;
            ticks <= 4
        });
        assert_eq!(fired, 4);
        assert_eq!(tally.0.lock().unwrap().len(), 4);
    }

    #[test]
    fn running_generator_broadcasts_after_an_interval() {
        let world = Arc::new(World::new());
        let tally = Arc::new(Tally(Mutex::new(Vec::new())));
        world.add_observer(&tally);
        let generator = EventGenerator::spawn(Arc::clone(&world), &config(1, &["the floor trembles"])).unwrap();

        thread::sleep(Duration::from_millis(1500));
        generator.shutdown();

        let heard = tally.0.lock().unwrap();
        assert!(!heard.is_empty());
        assert!(heard.iter().all(|line| line == "the floor trembles"));
    }

    #[test]
    fn zero_interval_does_not_spin() {
        let world = Arc::new(World::new());
        let tally = Arc::new(Tally(Mutex::new(Vec::new())));
        world.add_observer(&tally);
        let mut busy = config(1, &["tick"]);
        busy.interval_secs = 0;
        let generator = EventGenerator::spawn(Arc::clone(&world), &busy).unwrap();

        thread::sleep(Duration::from_millis(300));
        generator.shutdown();
        assert!(tally.0.lock().unwrap().is_empty());
    }

    #[test]
    fn shutdown_interrupts_the_wait() {
        let world = Arc::new(World::new());
        let mut slow = config(1, &["never seen"]);
        slow.interval_secs = 3600;
        let generator = EventGenerator::spawn(world, &slow).unwrap();

        let started = Instant::now();
        generator.shutdown();
        assert!(started.elapsed() < Duration::from_secs(60));
    }

    #[test]
    fn dropping_the_handle_stops_the_thread() {
        let world = Arc::new(World::new());
        let mut slow = config(1, &["never seen"]);
        slow.interval_secs = 3600;
        let started = Instant::now();
        drop(EventGenerator::spawn(world, &slow).unwrap());
        assert!(started.elapsed() < Duration::from_secs(60));
    }
}
