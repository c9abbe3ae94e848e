//! Inbound interactions delivered by the chat platform.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::SlashCommandInvocation;

/// The user who triggered an interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandCaller {
    /// Platform user identifier.
    pub user_id: String,
    /// Name shown in logs.
    pub display_name: String,
    /// Names of the roles the user holds in the guild.
    #[serde(default)]
    pub roles: BTreeSet<String>,
    /// Guild the interaction came from; `None` for direct messages.
    #[serde(default)]
    pub guild_id: Option<String>,
}

impl CommandCaller {
    /// Creates a caller with no roles outside any guild.
    #[must_use]
    pub fn new(user_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            display_name: display_name.into(),
            roles: BTreeSet::new(),
            guild_id: None,
        }
    }

    /// Adds a role name.
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.roles.insert(role.into());
        self
    }

    /// Sets the guild the interaction came from.
    #[must_use]
    pub fn in_guild(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = Some(guild_id.into());
        self
    }

    /// Returns whether the caller holds the named role.
    ///
    /// Role names are compared exactly.
    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }
}

/// A file uploaded alongside a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Platform attachment identifier.
    pub id: String,
    /// Original file name.
    pub filename: String,
    /// Public URL of the uploaded file.
    pub url: String,
    /// MIME type reported by the platform.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

impl Attachment {
    /// Creates an attachment.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        filename: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            filename: filename.into(),
            url: url.into(),
            content_type: None,
        }
    }

    /// Sets the MIME type.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// A slash-command interaction awaiting dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInteraction {
    /// Who invoked the command.
    pub caller: CommandCaller,
    /// Parsed command text.
    pub invocation: SlashCommandInvocation,
    /// Uploaded files, keyed by attachment id.
    pub attachments: BTreeMap<String, Attachment>,
}

impl CommandInteraction {
    /// Creates an interaction without attachments.
    #[must_use]
    pub const fn new(caller: CommandCaller, invocation: SlashCommandInvocation) -> Self {
        Self {
            caller,
            invocation,
            attachments: BTreeMap::new(),
        }
    }

    /// Resolves an attachment parameter value.
    #[must_use]
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.insert(attachment.id.clone(), attachment);
        self
    }
}

/// Values submitted from a modal form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalSubmission {
    /// Who submitted the form.
    pub caller: CommandCaller,
    /// Identifier of the modal that was submitted.
    pub custom_id: String,
    /// Submitted text, keyed by input identifier.
    pub values: BTreeMap<String, String>,
}

impl ModalSubmission {
    /// Creates a submission with no values.
    #[must_use]
    pub fn new(caller: CommandCaller, custom_id: impl Into<String>) -> Self {
        Self {
            caller,
            custom_id: custom_id.into(),
            values: BTreeMap::new(),
        }
    }

    /// Adds a submitted input value.
    #[must_use]
    pub fn with_value(mut self, input_id: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(input_id.into(), value.into());
        self
    }
}
