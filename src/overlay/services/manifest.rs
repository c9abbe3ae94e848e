//! Application-command registration payloads.
//!
//! Converts registered command groups into the JSON shape a chat platform
//! expects when commands are synchronised: one top-level command per group
//! with each subcommand as a nested option.

use serde::{Deserialize, Serialize};

use crate::overlay::domain::{
    CommandGroupDefinition, CommandParameterSpec, CommandParameterType, OVERLAY_GROUP,
    SubcommandDefinition,
};
use crate::overlay::ports::{CommandRegistryResult, OverlayCommandRegistry};

/// Option type code for a chat-input command.
pub const CHAT_INPUT_COMMAND_TYPE: u8 = 1;

/// Option type code for a subcommand.
pub const SUBCOMMAND_OPTION_TYPE: u8 = 1;

/// A top-level application command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationCommand {
    /// Command name.
    pub name: String,
    /// Help text.
    pub description: String,
    /// Command type code.
    #[serde(rename = "type")]
    pub kind: u8,
    /// Whether the command may be used in direct messages.
    pub dm_permission: bool,
    /// Subcommand options.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ApplicationCommandOption>,
}

/// A subcommand or parameter option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationCommandOption {
    /// Option name.
    pub name: String,
    /// Help text.
    pub description: String,
    /// Option type code.
    #[serde(rename = "type")]
    pub kind: u8,
    /// Whether a parameter is required; absent for subcommands.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// Closed choice list for select parameters.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<ApplicationCommandChoice>,
    /// Nested parameters of a subcommand.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ApplicationCommandOption>,
}

/// One entry of a choice list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationCommandChoice {
    /// Display name.
    pub name: String,
    /// Submitted value.
    pub value: String,
}

impl From<&CommandGroupDefinition> for ApplicationCommand {
    fn from(group: &CommandGroupDefinition) -> Self {
        Self {
            name: group.name.clone(),
            description: group.description.clone(),
            kind: CHAT_INPUT_COMMAND_TYPE,
            dm_permission: !group.guild_only,
            options: group.subcommands.iter().map(Into::into).collect(),
        }
    }
}

impl From<&SubcommandDefinition> for ApplicationCommandOption {
    fn from(subcommand: &SubcommandDefinition) -> Self {
        Self {
            name: subcommand.name.clone(),
            description: subcommand.description.clone(),
            kind: SUBCOMMAND_OPTION_TYPE,
            required: None,
            choices: Vec::new(),
            options: subcommand.parameters.iter().map(Into::into).collect(),
        }
    }
}

impl From<&CommandParameterSpec> for ApplicationCommandOption {
    fn from(parameter: &CommandParameterSpec) -> Self {
        let choices = if parameter.parameter_type == CommandParameterType::Select {
            parameter
                .options
                .iter()
                .map(|option| ApplicationCommandChoice {
                    name: option.clone(),
                    value: option.clone(),
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            name: parameter.name.clone(),
            description: parameter.description.clone(),
            kind: parameter.parameter_type.option_type_code(),
            required: Some(parameter.required),
            choices,
            options: Vec::new(),
        }
    }
}

/// Builds the registration payload for the groups in `registry` that the
/// dispatcher can run.
///
/// Groups other than `overlay` are left out so a platform never registers a
/// command that would always be refused.
///
/// # Errors
///
/// Returns [`CommandRegistryError`](crate::overlay::ports::CommandRegistryError)
/// when the registry cannot list its groups.
pub fn application_command_manifest(
    registry: &impl OverlayCommandRegistry,
) -> CommandRegistryResult<Vec<ApplicationCommand>> {
    Ok(registry
        .list_groups()?
        .iter()
        .filter(|group| group.name == OVERLAY_GROUP)
        .map(ApplicationCommand::from)
        .collect())
}
