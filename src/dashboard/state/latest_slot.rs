use super::ViewState;
use std::sync::{Mutex, MutexGuard};

/// Proof that a request was started against a [`LatestSlot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    key: String,
}

impl Ticket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

struct SlotInner<T> {
    generation: u64,
    key: Option<String>,
    state: ViewState<T>,
}

/// LatestSlot holds the view state of a selection whose responses may
/// arrive out of order, such as control analysis.
///
/// Every `begin` takes a new, strictly increasing generation and moves the
/// slot to `Loading`. `settle` applies an outcome only when its ticket still
/// carries the latest generation, so a slow response for an earlier
/// selection can never overwrite a later one.
pub struct LatestSlot<T> {
    inner: Mutex<SlotInner<T>>,
}

impl<T> LatestSlot<T> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(SlotInner {
                generation: 0,
                key: None,
                state: ViewState::Idle,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SlotInner<T>> {
        // A panic while holding the lock leaves plain data behind; keep using it.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Starts a request for `key` and makes it the one the slot displays.
    pub fn begin(&self, key: impl Into<String>) -> Ticket {
        let mut inner = self.lock();
        inner.generation += 1;
        let key = key.into();
        inner.key = Some(key.clone());
        inner.state = ViewState::Loading;
        Ticket {
            generation: inner.generation,
            key,
        }
    }

    /// Applies `outcome` if `ticket` is still current.
    ///
    /// Returns false when the outcome was discarded as stale.
    pub fn settle(&self, ticket: &Ticket, outcome: ViewState<T>) -> bool {
        let mut inner = self.lock();
        if inner.generation != ticket.generation {
            return false;
        }
        inner.state = outcome;
        true
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        self.lock().generation == ticket.generation
    }

    /// Key of the most recent selection, if any.
    pub fn current_key(&self) -> Option<String> {
        self.lock().key.clone()
    }

    pub fn generation(&self) -> u64 {
        self.lock().generation
    }
}

impl<T: Clone> LatestSlot<T> {
    pub fn snapshot(&self) -> ViewState<T> {
        self.lock().state.clone()
    }
}

impl<T> Default for LatestSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}
