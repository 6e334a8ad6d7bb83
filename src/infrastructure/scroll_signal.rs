use log::trace;
use tokio::sync::broadcast;

use crate::{ScrollEvent, ScrollSignal};

const SCROLL_CHANNEL_CAPACITY: usize = 64;

/// An in-process scroll signal backed by a broadcast channel.
pub struct BroadcastScrollSignal {
    sender: broadcast::Sender<ScrollEvent>,
}

impl BroadcastScrollSignal {
    /// Creates a new `BroadcastScrollSignal` instance.
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(SCROLL_CHANNEL_CAPACITY);

        Self { sender }
    }

    /// Notifies all subscribers that the page scrolled to `offset`.
    pub fn emit(&self, offset: f64) {
        // Nobody listening is not an error.
        let receivers = self.sender.send(ScrollEvent { offset }).unwrap_or(0);
        trace!("Scroll to {offset} delivered to {receivers} subscriber(s)");
    }

    /// The number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for BroadcastScrollSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollSignal for BroadcastScrollSignal {
    fn subscribe(&self) -> broadcast::Receiver<ScrollEvent> {
        self.sender.subscribe()
    }
}
