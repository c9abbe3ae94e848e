//! In-process overlay publisher backed by a `tokio::sync::broadcast` channel.
//!
//! Every subscriber (a websocket bridge, a logger, a test) independently
//! receives each [`OverlayUpdate`]. Publishing never blocks: when the buffer
//! is full the oldest undelivered updates are dropped and slow receivers
//! observe `RecvError::Lagged`.

use async_trait::async_trait;
use mockable::Clock;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, info};

use crate::overlay::domain::{OverlayPatch, OverlayUpdate};
use crate::overlay::ports::publisher::{OverlayPublishResult, OverlayPublisher};

/// Fan-out publisher for overlay updates.
pub struct BroadcastOverlayPublisher<C>
where
    C: Clock + Send + Sync,
{
    sender: broadcast::Sender<OverlayUpdate>,
    clock: Arc<C>,
}

impl<C> BroadcastOverlayPublisher<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a publisher buffering up to `capacity` updates per receiver.
    ///
    /// A zero capacity is raised to one.
    #[must_use]
    pub fn new(capacity: usize, clock: Arc<C>) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender, clock }
    }

    /// Subscribes to every update published from now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<OverlayUpdate> {
        self.sender.subscribe()
    }

    /// Returns the number of live subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl<C> Clone for BroadcastOverlayPublisher<C>
where
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            clock: Arc::clone(&self.clock),
        }
    }
}

#[async_trait]
impl<C> OverlayPublisher for BroadcastOverlayPublisher<C>
where
    C: Clock + Send + Sync,
{
    async fn publish_overlay(&self, patch: &OverlayPatch) -> OverlayPublishResult<()> {
        let update = OverlayUpdate::new(patch.clone(), &*self.clock);
        let update_id = update.id;
        match self.sender.send(update) {
            Ok(receivers) => {
                info!(%update_id, receivers, keys = ?patch.keys(), "overlay update broadcast");
            }
            Err(_) => {
                // Zero receivers; the overlay is not listening yet.
                debug!(%update_id, "overlay update dropped without subscribers");
            }
        }
        Ok(())
    }
}
