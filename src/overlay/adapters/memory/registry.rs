//! In-memory command registry adapter.

use std::collections::HashMap;

use crate::config::DEFAULT_MODERATOR_ROLE;
use crate::overlay::domain::{
    CommandGroupDefinition, CommandParameterSpec, CommandParameterType, MediaField,
    OVERLAY_GROUP, OverlayField, SubcommandDefinition, Switch, TextField,
};
use crate::overlay::ports::registry::{
    CommandRegistryError, CommandRegistryResult, OverlayCommandRegistry,
};

/// In-memory registry for command group definitions.
#[derive(Debug, Clone)]
pub struct InMemoryOverlayCommandRegistry {
    groups: HashMap<String, CommandGroupDefinition>,
}

impl InMemoryOverlayCommandRegistry {
    /// Creates a registry holding the `overlay` group, guarded by
    /// `moderator_role`.
    #[must_use]
    pub fn new(moderator_role: &str) -> Self {
        let group = overlay_command_group(moderator_role);
        debug_assert!(
            group.validate_schema().is_ok(),
            "built-in overlay command definitions must remain valid",
        );
        Self {
            groups: HashMap::from([(group.name.clone(), group)]),
        }
    }

    /// Creates a registry from supplied group definitions.
    ///
    /// # Errors
    ///
    /// Returns [`CommandRegistryError::InvalidDefinition`] when a schema is
    /// invalid, a group other than `overlay` is supplied, or a group name is
    /// used twice.
    pub fn with_groups(
        definitions: impl IntoIterator<Item = CommandGroupDefinition>,
    ) -> CommandRegistryResult<Self> {
        let mut groups = HashMap::new();
        for mut definition in definitions {
            definition.name = definition.name.to_ascii_lowercase();
            if definition.name != OVERLAY_GROUP {
                return Err(CommandRegistryError::InvalidDefinition(format!(
                    "command group '{}' has no handlers",
                    definition.name
                )));
            }
            definition
                .validate_schema()
                .map_err(|error| CommandRegistryError::InvalidDefinition(error.to_string()))?;

            if groups
                .insert(definition.name.clone(), definition)
                .is_some()
            {
                return Err(CommandRegistryError::InvalidDefinition(
                    "duplicate command group definition".to_owned(),
                ));
            }
        }
        Ok(Self { groups })
    }
}

impl Default for InMemoryOverlayCommandRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_MODERATOR_ROLE)
    }
}

impl OverlayCommandRegistry for InMemoryOverlayCommandRegistry {
    fn find_group(&self, name: &str) -> CommandRegistryResult<Option<CommandGroupDefinition>> {
        Ok(self.groups.get(&name.to_ascii_lowercase()).cloned())
    }

    fn list_groups(&self) -> CommandRegistryResult<Vec<CommandGroupDefinition>> {
        let mut groups: Vec<_> = self.groups.values().cloned().collect();
        groups.sort_by(|left, right| left.name.cmp(&right.name));
        Ok(groups)
    }
}

/// Builds the `overlay` command group definition.
#[must_use]
pub fn overlay_command_group(moderator_role: &str) -> CommandGroupDefinition {
    CommandGroupDefinition::new(OVERLAY_GROUP, "Remotely update the stream overlay")
        .guild_only()
        .with_required_role(moderator_role)
        .with_subcommand(
            SubcommandDefinition::new("set_text", "Set overlay text field to specified value")
                .with_parameter(
                    CommandParameterSpec::new(
                        "field",
                        "Overlay field to set",
                        CommandParameterType::Select,
                        true,
                    )
                    .with_options(TextField::ALL.map(TextField::as_str)),
                )
                .with_parameter(CommandParameterSpec::new(
                    "text",
                    "Text to set field to",
                    CommandParameterType::String,
                    true,
                )),
        )
        .with_subcommand(
            SubcommandDefinition::new("set_media", "Set overlay image field to provided image")
                .with_parameter(
                    CommandParameterSpec::new(
                        "field",
                        "Overlay field to set",
                        CommandParameterType::Select,
                        true,
                    )
                    .with_options(MediaField::ALL.map(MediaField::as_str)),
                )
                .with_parameter(CommandParameterSpec::new(
                    "media_url",
                    "URL of image to send to frontend",
                    CommandParameterType::String,
                    false,
                ))
                .with_parameter(CommandParameterSpec::new(
                    "media",
                    "Attachment image to send to frontend",
                    CommandParameterType::Attachment,
                    false,
                )),
        )
        .with_subcommand(
            SubcommandDefinition::new("clear_field", "Clear value of field off overlay")
                .with_parameter(
                    CommandParameterSpec::new(
                        "field",
                        "Overlay field to set",
                        CommandParameterType::Select,
                        true,
                    )
                    .with_options(OverlayField::ALL.map(OverlayField::as_str)),
                ),
        )
        .with_subcommand(
            SubcommandDefinition::new("timer", "Start timer on overlay for specified seconds")
                .with_parameter(CommandParameterSpec::new(
                    "duration",
                    "Duration in seconds of timer",
                    CommandParameterType::Integer,
                    true,
                )),
        )
        .with_subcommand(
            SubcommandDefinition::new("toggle", "Toggle overlay to be on or off").with_parameter(
                CommandParameterSpec::new("switch", "On/Off", CommandParameterType::Select, true)
                    .with_options(Switch::ALL.map(Switch::as_str)),
            ),
        )
        .with_subcommand(SubcommandDefinition::new(
            "configure",
            "Paste JSON configuration for overlay directly into modal",
        ))
}
