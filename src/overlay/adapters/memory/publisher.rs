//! Recording overlay publisher for tests and dry runs.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::overlay::domain::OverlayPatch;
use crate::overlay::ports::publisher::{
    OverlayPublishError, OverlayPublishResult, OverlayPublisher,
};

/// Publisher that keeps every patch it receives.
///
/// A failure can be injected to simulate an unavailable transport; while set,
/// publish calls fail and nothing is recorded.
#[derive(Debug, Clone, Default)]
pub struct RecordingOverlayPublisher {
    state: Arc<RwLock<RecordingState>>,
}

#[derive(Debug, Default)]
struct RecordingState {
    published: Vec<OverlayPatch>,
    failure: Option<String>,
}

fn lock_error(err: impl std::fmt::Display) -> OverlayPublishError {
    OverlayPublishError::transport(std::io::Error::other(err.to_string()))
}

impl RecordingOverlayPublisher {
    /// Creates an empty publisher.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every recorded patch in publish order.
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn published(&self) -> OverlayPublishResult<Vec<OverlayPatch>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.published.clone())
    }

    /// Makes subsequent publish calls fail with `reason`.
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn fail_with(&self, reason: impl Into<String>) -> OverlayPublishResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.failure = Some(reason.into());
        Ok(())
    }

    /// Clears an injected failure.
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn recover(&self) -> OverlayPublishResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.failure = None;
        Ok(())
    }
}

#[async_trait]
impl OverlayPublisher for RecordingOverlayPublisher {
    async fn publish_overlay(&self, patch: &OverlayPatch) -> OverlayPublishResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if let Some(reason) = &state.failure {
            return Err(OverlayPublishError::Unavailable(reason.clone()));
        }
        state.published.push(patch.clone());
        Ok(())
    }
}
