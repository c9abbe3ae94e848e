//! Shared world state for overlay command BDD scenarios.

use std::sync::Arc;

use marquee::{
    config::OverlayConfig,
    overlay::{
        adapters::memory::{InMemoryOverlayCommandRegistry, RecordingOverlayPublisher},
        domain::{CommandCaller, OverlayPatch, OverlayResponse},
        services::{OverlayCommandDispatcher, OverlayCommandError, OverlayCommandGroup},
    },
};
use rstest::fixture;

/// Dispatcher type used by the BDD world.
pub type TestDispatcher =
    OverlayCommandDispatcher<InMemoryOverlayCommandRegistry, RecordingOverlayPublisher>;

/// Scenario world for overlay command behaviour tests.
pub struct OverlayWorld {
    pub config: OverlayConfig,
    pub publisher: RecordingOverlayPublisher,
    pub caller: Option<CommandCaller>,
    pub last_result: Option<Result<OverlayResponse, OverlayCommandError>>,
}

impl OverlayWorld {
    /// Creates a world with default configuration and no caller.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: OverlayConfig::default(),
            publisher: RecordingOverlayPublisher::new(),
            caller: None,
            last_result: None,
        }
    }

    /// Builds a dispatcher from the current configuration.
    pub fn dispatcher(&self) -> Result<TestDispatcher, eyre::Report> {
        let group = OverlayCommandGroup::new(Arc::new(self.publisher.clone()), &self.config)?;
        let registry = Arc::new(InMemoryOverlayCommandRegistry::new(
            &self.config.moderator_role,
        ));
        Ok(OverlayCommandDispatcher::new(registry, group))
    }

    /// Returns the scenario caller.
    pub fn caller(&self) -> Result<CommandCaller, eyre::Report> {
        self.caller
            .clone()
            .ok_or_else(|| eyre::eyre!("missing caller in scenario world"))
    }

    /// Returns the patches recorded so far.
    pub fn published(&self) -> Result<Vec<OverlayPatch>, eyre::Report> {
        Ok(self.publisher.published()?)
    }
}

impl Default for OverlayWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> OverlayWorld {
    OverlayWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
