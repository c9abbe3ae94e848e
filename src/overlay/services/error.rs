//! Service-level errors for overlay command handling.

use thiserror::Error;

use crate::overlay::domain::{MediaField, OverlayConfigurationError, SlashCommandError};
use crate::overlay::ports::{CommandRegistryError, OverlayPublishError};

/// Errors returned while dispatching or handling an overlay command.
#[derive(Debug, Error)]
pub enum OverlayCommandError {
    /// Parsing, lookup or parameter validation failed.
    #[error(transparent)]
    Command(#[from] SlashCommandError),

    /// The command registry failed.
    #[error(transparent)]
    Registry(#[from] CommandRegistryError),

    /// The overlay publisher failed.
    #[error(transparent)]
    Publish(#[from] OverlayPublishError),

    /// A pasted overlay configuration was rejected.
    #[error(transparent)]
    Configuration(#[from] OverlayConfigurationError),

    /// The command was invoked outside a guild.
    #[error("command '/{command}' can only be used in a server")]
    GuildOnly {
        /// Qualified command name.
        command: String,
    },

    /// The caller lacks the required role.
    #[error("insufficient permission: the '{role}' role is required to use '/{command}'")]
    MissingRole {
        /// Qualified command name.
        command: String,
        /// Required role name.
        role: String,
    },

    /// `set_media` received neither a URL nor an attachment.
    #[error("set_media for '{field}' needs a media_url or a media attachment")]
    MissingMediaSource {
        /// Target field.
        field: MediaField,
    },

    /// A modal submission does not belong to this command group.
    #[error("unknown modal '{0}'")]
    UnknownModal(String),

    /// A modal submission lacks an expected input.
    #[error("modal '{modal}' is missing input '{input}'")]
    MissingModalInput {
        /// Modal identifier.
        modal: String,
        /// Missing input identifier.
        input: String,
    },

    /// An acknowledgment template failed to compile or render.
    #[error("acknowledgement template for '{command}' is invalid: {reason}")]
    TemplateRender {
        /// Command the template belongs to.
        command: String,
        /// Template engine message.
        reason: String,
    },
}

/// Result type for overlay command services.
pub type OverlayCommandResult<T> = Result<T, OverlayCommandError>;

impl OverlayCommandError {
    /// Returns `true` when the caller was refused before any handler ran.
    #[must_use]
    pub const fn is_authorization(&self) -> bool {
        matches!(self, Self::MissingRole { .. } | Self::GuildOnly { .. })
    }

    /// Returns the text the host reports back to the caller.
    ///
    /// Caller mistakes are explained; infrastructure failures get a generic
    /// message so transport details stay in the logs.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingRole { .. }
            | Self::GuildOnly { .. }
            | Self::Command(_)
            | Self::Configuration(_)
            | Self::MissingMediaSource { .. } => self.to_string(),
            Self::Registry(_)
            | Self::Publish(_)
            | Self::UnknownModal(_)
            | Self::MissingModalInput { .. }
            | Self::TemplateRender { .. } => {
                "Something went wrong while updating the overlay.".to_owned()
            }
        }
    }
}
