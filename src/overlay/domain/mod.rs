//! Domain types for the overlay command group.
//!
//! This module contains pure domain types with no infrastructure dependencies.
//! Values are constructed per invocation and discarded once the reply is sent.

mod command;
mod error;
mod fields;
mod interaction;
mod patch;
mod response;
mod slash_command;

pub use command::{MissingMediaPolicy, OVERLAY_GROUP, OverlayCommand};
pub use error::{OverlayConfigurationError, ParseFieldError};
pub use fields::{MediaField, OverlayField, Switch, TextField};
pub use interaction::{Attachment, CommandCaller, CommandInteraction, ModalSubmission};
pub use patch::{OverlayPatch, OverlayUpdate, OverlayValue};
pub use response::{
    CONFIGURATION_INPUT_ID, CONFIGURATION_MODAL_ID, ConfigurationModal, OverlayResponse,
    TextInput, TextInputStyle,
};
pub use slash_command::{
    CommandGroupDefinition, CommandParameterSpec, CommandParameterType, SlashCommandError,
    SlashCommandInvocation, SubcommandDefinition,
};
