//! Port trait definitions for the overlay subsystem.
//!
//! Ports define the abstract interfaces the command group requires from
//! infrastructure: somewhere to publish patches and somewhere to read
//! command definitions from.

pub mod publisher;
pub mod registry;

pub use publisher::{OverlayPublishError, OverlayPublishResult, OverlayPublisher};
pub use registry::{CommandRegistryError, CommandRegistryResult, OverlayCommandRegistry};
