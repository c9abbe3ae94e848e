//! In-memory adapters for tests and local runs.

mod publisher;
mod registry;

pub use publisher::RecordingOverlayPublisher;
pub use registry::{InMemoryOverlayCommandRegistry, overlay_command_group};
