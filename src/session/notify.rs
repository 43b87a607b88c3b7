//! Audio change notification
//!
//! Observers are kept in an explicit list and called synchronously, in
//! registration order, by `notify_all`. A failing observer is logged and
//! the rest are still called.

use std::fmt;

use log::warn;

use crate::engine::Audio;
use crate::error::Result;

/// Handle returned by `subscribe`, used to unsubscribe later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Delivered to observers after a new asset became active
#[derive(Debug, Clone, Copy)]
pub struct AudioChanged<'a> {
    /// Number of successful loads so far, starting at 1
    pub generation: u64,
    /// The asset that is now active, with its settings already reset
    pub audio: &'a dyn Audio,
}

/// Callback for audio changes
pub type AudioChangeCallback = Box<dyn FnMut(&AudioChanged<'_>) -> Result<()>>;

/// Ordered list of audio change observers
#[derive(Default)]
pub struct AudioChangeNotifier {
    observers: Vec<(SubscriptionId, AudioChangeCallback)>,
    next_id: u64,
}

impl AudioChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer. It runs after every observer registered before it.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&AudioChanged<'_>) -> Result<()> + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(callback)));
        id
    }

    /// Remove an observer. Returns false if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Call every observer in order.
    ///
    /// Returns the number of observers that reported an error.
    pub fn notify_all(&mut self, event: &AudioChanged<'_>) -> usize {
        let mut failed = 0;
        for (id, observer) in self.observers.iter_mut() {
            if let Err(e) = observer(event) {
                failed += 1;
                warn!(
                    "Audio change observer {} failed (generation {}): {}",
                    id, event.generation, e
                );
            }
        }
        failed
    }
}

impl fmt::Debug for AudioChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AudioChangeNotifier")
            .field("observers", &self.observers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
