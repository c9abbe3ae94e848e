//! Marquee: remote control for a live stream overlay.
//!
//! This crate provides the `overlay` slash-command group that lets
//! moderators update text, media, the timer and visibility of a stream
//! overlay by publishing small key-value patches to an overlay controller.
//!
//! # Architecture
//!
//! Marquee follows hexagonal architecture principles:
//!
//! - **Domain**: Pure types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for publishing and command lookup
//! - **Adapters**: Concrete implementations of ports (in-memory, broadcast)
//!
//! # Modules
//!
//! - [`config`]: Runtime configuration and acknowledgment templates
//! - [`overlay`]: The command group, its dispatcher and adapters

pub mod config;
pub mod overlay;
