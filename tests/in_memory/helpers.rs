//! Shared test helpers for in-memory overlay integration tests.

use std::sync::Arc;

use marquee::{
    config::OverlayConfig,
    overlay::{
        adapters::memory::{InMemoryOverlayCommandRegistry, RecordingOverlayPublisher},
        domain::{CommandCaller, CommandInteraction, SlashCommandInvocation},
        ports::OverlayPublisher,
        services::{OverlayCommandDispatcher, OverlayCommandGroup},
    },
};
use rstest::fixture;
use std::io;
use tokio::runtime::Runtime;

/// Dispatcher over the in-memory registry.
pub type Dispatcher<P> = OverlayCommandDispatcher<InMemoryOverlayCommandRegistry, P>;

/// Provides a tokio runtime for async operations in tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
#[fixture]
pub fn runtime() -> io::Result<Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(4)
        .enable_all()
        .build()
}

/// Provides a fresh recording publisher for each test.
#[fixture]
pub fn publisher() -> RecordingOverlayPublisher {
    RecordingOverlayPublisher::new()
}

/// Provides a caller allowed to use the overlay commands.
#[fixture]
pub fn moderator() -> CommandCaller {
    CommandCaller::new("100", "stage-mod")
        .with_role("Mod")
        .in_guild("guild-1")
}

/// Wires a dispatcher around `publisher` with the given configuration.
///
/// # Panics
///
/// Panics when the acknowledgment templates do not compile.
pub fn dispatcher_with<P>(publisher: P, config: &OverlayConfig) -> Dispatcher<P>
where
    P: OverlayPublisher,
{
    let group = OverlayCommandGroup::new(Arc::new(publisher), config)
        .expect("acknowledgement templates should compile");
    let registry = Arc::new(InMemoryOverlayCommandRegistry::new(&config.moderator_role));
    OverlayCommandDispatcher::new(registry, group)
}

/// Builds an interaction from command text.
///
/// # Panics
///
/// Panics when `input` is not a well-formed slash command.
pub fn interaction(caller: &CommandCaller, input: &str) -> CommandInteraction {
    let invocation = SlashCommandInvocation::parse(input).expect("test input should parse");
    CommandInteraction::new(caller.clone(), invocation)
}
