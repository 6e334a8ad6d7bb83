use tokio::sync::broadcast;

use crate::ScrollEvent;

/// A trait for subscribing to the page scroll notifications.
pub trait ScrollSignal: Sync + Send {
    /// Subscribes to the scroll events emitted from now on.
    ///
    /// The subscription is released when the receiver is dropped.
    fn subscribe(&self) -> broadcast::Receiver<ScrollEvent>;
}
