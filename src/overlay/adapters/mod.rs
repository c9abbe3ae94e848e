//! Adapters for the overlay ports.
//!
//! # Available Adapters
//!
//! - [`memory::InMemoryOverlayCommandRegistry`]: built-in command definitions
//! - [`memory::RecordingOverlayPublisher`]: records patches for inspection
//! - [`broadcast::BroadcastOverlayPublisher`]: fans updates out to in-process
//!   subscribers

pub mod broadcast;
pub mod memory;

pub use broadcast::BroadcastOverlayPublisher;
