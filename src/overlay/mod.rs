//! Remote control of a live stream overlay through slash commands.
//!
//! Moderators use the `overlay` command group to change overlay fields. Each
//! command publishes one small patch to the overlay controller and answers
//! with an ephemeral acknowledgment.
//!
//! # Architecture
//!
//! - **Domain**: field enumerations, patches, interactions and command
//!   definitions ([`domain::OverlayPatch`], [`domain::OverlayCommand`])
//! - **Ports**: [`ports::OverlayPublisher`] and
//!   [`ports::OverlayCommandRegistry`]
//! - **Adapters**: in-memory registry, recording publisher and the
//!   [`adapters::BroadcastOverlayPublisher`]
//! - **Services**: command handlers, the dispatcher and the registration
//!   manifest
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use marquee::config::OverlayConfig;
//! use marquee::overlay::adapters::memory::{
//!     InMemoryOverlayCommandRegistry, RecordingOverlayPublisher,
//! };
//! use marquee::overlay::domain::{
//!     CommandCaller, CommandInteraction, OverlayValue, SlashCommandInvocation,
//! };
//! use marquee::overlay::services::{OverlayCommandDispatcher, OverlayCommandGroup};
//!
//! let runtime = tokio::runtime::Builder::new_current_thread()
//!     .build()
//!     .expect("runtime");
//! runtime.block_on(async {
//!     let config = OverlayConfig::default();
//!     let publisher = Arc::new(RecordingOverlayPublisher::new());
//!     let group = OverlayCommandGroup::new(Arc::clone(&publisher), &config)
//!         .expect("default templates compile");
//!     let registry = Arc::new(InMemoryOverlayCommandRegistry::new(&config.moderator_role));
//!     let dispatcher = OverlayCommandDispatcher::new(registry, group);
//!
//!     let caller = CommandCaller::new("42", "river").with_role("Mod").in_guild("1");
//!     let invocation = SlashCommandInvocation::parse(r#"/overlay set_text field=title text="Live now""#)
//!         .expect("valid command");
//!     let reply = dispatcher
//!         .dispatch(&CommandInteraction::new(caller, invocation))
//!         .await
//!         .expect("moderators may update the overlay");
//!
//!     assert_eq!(reply.content(), Some("Overlay text update sent!"));
//!     let published = publisher.published().expect("recorded patches");
//!     assert_eq!(
//!         published.first().and_then(|patch| patch.get("title")),
//!         Some(&OverlayValue::Text("Live now".to_owned()))
//!     );
//! });
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
