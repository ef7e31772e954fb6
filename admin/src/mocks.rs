//! Mock implementations for testing.

use crate::types::Event;
use std::sync::{Arc, Mutex};

/// A [crate::Reporter] that records every event behind a shared handle.
///
/// Clones share the same log, so a test can keep one clone and hand the other to an
/// [crate::Admin].
#[derive(Clone, Default)]
pub struct Reporter {
    events: Arc<Mutex<Vec<Event>>>,
}

impl Reporter {
    /// Returns a copy of every event recorded so far.
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    /// Removes and returns every event recorded so far.
    pub fn drain(&self) -> Vec<Event> {
        std::mem::take(&mut *self.events.lock().unwrap())
    }
}

impl crate::Reporter for Reporter {
    type Activity = Event;

    fn report(&mut self, activity: Self::Activity) {
        self.events.lock().unwrap().push(activity);
    }
}
