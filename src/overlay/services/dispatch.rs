//! Interaction dispatch: the host-framework side of the command group.
//!
//! The dispatcher resolves the command group and refuses callers outside a
//! guild or without the required role before the subcommand is looked up, so
//! a refused caller learns nothing about which subcommands exist. Parameters
//! are then validated against the declared choice lists and only then is a
//! typed command handed to [`OverlayCommandGroup`]. Handlers never see
//! unauthorised or out-of-set input.

use std::sync::Arc;
use tracing::{debug, warn};

use super::{OverlayCommandError, OverlayCommandGroup, OverlayCommandResult};
use crate::overlay::domain::{
    CONFIGURATION_INPUT_ID, CONFIGURATION_MODAL_ID, CommandCaller, CommandGroupDefinition,
    CommandInteraction, ModalSubmission, OVERLAY_GROUP, OverlayCommand, OverlayPatch,
    OverlayResponse, SlashCommandError,
};
use crate::overlay::ports::{OverlayCommandRegistry, OverlayPublisher};

/// Routes interactions to the overlay command group.
pub struct OverlayCommandDispatcher<R, P>
where
    R: OverlayCommandRegistry,
    P: OverlayPublisher,
{
    registry: Arc<R>,
    group: OverlayCommandGroup<P>,
}

impl<R, P> Clone for OverlayCommandDispatcher<R, P>
where
    R: OverlayCommandRegistry,
    P: OverlayPublisher,
{
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
            group: self.group.clone(),
        }
    }
}

impl<R, P> OverlayCommandDispatcher<R, P>
where
    R: OverlayCommandRegistry,
    P: OverlayPublisher,
{
    /// Creates a dispatcher.
    #[must_use]
    pub const fn new(registry: Arc<R>, group: OverlayCommandGroup<P>) -> Self {
        Self { registry, group }
    }

    /// Returns the command group handlers.
    #[must_use]
    pub const fn group(&self) -> &OverlayCommandGroup<P> {
        &self.group
    }

    /// Dispatches a slash-command interaction.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayCommandError`] when the command is unknown, the caller
    /// is refused, a parameter is invalid, or the handler fails.
    pub async fn dispatch(
        &self,
        interaction: &CommandInteraction,
    ) -> OverlayCommandResult<OverlayResponse> {
        let invocation = &interaction.invocation;
        let qualified = invocation.qualified_name();
        let definition = self.find_group(invocation.command())?;
        authorize(&definition, &interaction.caller, &qualified)?;

        let subcommand = definition.find_subcommand(invocation.subcommand()).ok_or_else(|| {
            SlashCommandError::UnknownSubcommand {
                command: definition.name.clone(),
                subcommand: invocation.subcommand().to_owned(),
            }
        })?;

        let parameters = subcommand.validate_parameters(
            &definition.name,
            invocation.parameters(),
            &interaction.attachments,
        )?;
        let command = OverlayCommand::from_parameters(
            &subcommand.name,
            &parameters,
            &interaction.attachments,
        )?;

        debug!(
            command = %qualified,
            user_id = %interaction.caller.user_id,
            "dispatching overlay command"
        );
        self.group.execute(command).await
    }

    /// Handles a configuration modal submission.
    ///
    /// The submission goes through the same guild and role checks as the
    /// command that opened the modal.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayCommandError`] when the modal is unknown, the caller
    /// is refused, the pasted JSON is invalid, or publishing fails.
    pub async fn submit_modal(
        &self,
        submission: &ModalSubmission,
    ) -> OverlayCommandResult<OverlayResponse> {
        if submission.custom_id != CONFIGURATION_MODAL_ID {
            return Err(OverlayCommandError::UnknownModal(
                submission.custom_id.clone(),
            ));
        }

        let definition = self.find_group(OVERLAY_GROUP)?;
        authorize(
            &definition,
            &submission.caller,
            &format!("{OVERLAY_GROUP} configure"),
        )?;

        let raw = submission.values.get(CONFIGURATION_INPUT_ID).ok_or_else(|| {
            OverlayCommandError::MissingModalInput {
                modal: CONFIGURATION_MODAL_ID.to_owned(),
                input: CONFIGURATION_INPUT_ID.to_owned(),
            }
        })?;
        let patch = OverlayPatch::from_json_str(raw)?;

        debug!(
            user_id = %submission.caller.user_id,
            keys = ?patch.keys(),
            "applying overlay configuration"
        );
        self.group.submit_configuration(patch).await
    }

    fn find_group(&self, name: &str) -> OverlayCommandResult<CommandGroupDefinition> {
        let definition = self
            .registry
            .find_group(name)?
            .ok_or_else(|| SlashCommandError::UnknownCommand(name.to_owned()))?;
        if definition.name != OVERLAY_GROUP {
            return Err(SlashCommandError::UnknownCommand(definition.name).into());
        }
        Ok(definition)
    }
}

fn authorize(
    definition: &CommandGroupDefinition,
    caller: &CommandCaller,
    command: &str,
) -> OverlayCommandResult<()> {
    if definition.guild_only && caller.guild_id.is_none() {
        warn!(
            command,
            user_id = %caller.user_id,
            "overlay command refused outside a guild"
        );
        return Err(OverlayCommandError::GuildOnly {
            command: command.to_owned(),
        });
    }

    if let Some(role) = definition
        .required_role
        .as_ref()
        .filter(|role| !caller.has_role(role))
    {
        warn!(
            command,
            user_id = %caller.user_id,
            display_name = %caller.display_name,
            required_role = %role,
            "overlay command refused: missing role"
        );
        return Err(OverlayCommandError::MissingRole {
            command: command.to_owned(),
            role: role.clone(),
        });
    }

    Ok(())
}
