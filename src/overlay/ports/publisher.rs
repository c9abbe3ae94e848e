//! Overlay publishing port.
//!
//! The publisher delivers patches to the overlay controller. Delivery
//! guarantees belong to the adapter; callers only wait for the call to return.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::overlay::domain::OverlayPatch;

/// Result type for overlay publishing.
pub type OverlayPublishResult<T> = Result<T, OverlayPublishError>;

/// Port for forwarding patches to the overlay controller.
#[async_trait]
pub trait OverlayPublisher: Send + Sync {
    /// Publishes one patch.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayPublishError`] when the patch could not be handed to
    /// the transport.
    async fn publish_overlay(&self, patch: &OverlayPatch) -> OverlayPublishResult<()>;
}

/// Errors returned by overlay publisher adapters.
#[derive(Debug, Clone, Error)]
pub enum OverlayPublishError {
    /// The transport is not accepting updates.
    #[error("overlay transport unavailable: {0}")]
    Unavailable(String),

    /// Generic transport failure.
    #[error("overlay transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl OverlayPublishError {
    /// Wraps a transport error from the publisher adapter.
    #[must_use]
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
