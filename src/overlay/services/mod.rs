//! Application services for the overlay command group.
//!
//! [`OverlayCommandGroup`] holds one handler per command and talks to the
//! publisher port. [`OverlayCommandDispatcher`] plays the host framework:
//! it checks the caller and the arguments before any handler runs.

mod acknowledgement;
mod dispatch;
mod error;
mod group;
mod manifest;

pub use dispatch::OverlayCommandDispatcher;
pub use error::{OverlayCommandError, OverlayCommandResult};
pub use group::{DISPLAY_KEY, OverlayCommandGroup, TIMER_KEY};
pub use manifest::{
    ApplicationCommand, ApplicationCommandChoice, ApplicationCommandOption,
    CHAT_INPUT_COMMAND_TYPE, SUBCOMMAND_OPTION_TYPE, application_command_manifest,
};
