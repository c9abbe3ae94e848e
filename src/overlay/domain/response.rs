//! Replies sent back to the invoking caller.

use serde::{Deserialize, Serialize};

/// Custom identifier of the overlay configuration modal.
pub const CONFIGURATION_MODAL_ID: &str = "overlay_configuration";

/// Custom identifier of the JSON input inside the configuration modal.
pub const CONFIGURATION_INPUT_ID: &str = "configuration";

/// Reply produced for exactly one interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OverlayResponse {
    /// A text message.
    Message {
        /// Message text.
        content: String,
        /// Whether only the invoking caller can see the message.
        ephemeral: bool,
    },
    /// A modal form opened for the caller.
    Modal(ConfigurationModal),
}

impl OverlayResponse {
    /// Creates a message visible only to the invoking caller.
    #[must_use]
    pub fn ephemeral(content: impl Into<String>) -> Self {
        Self::Message {
            content: content.into(),
            ephemeral: true,
        }
    }

    /// Returns the message text, if this reply is a message.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::Message { content, .. } => Some(content),
            Self::Modal(_) => None,
        }
    }

    /// Returns `true` for messages hidden from everyone but the caller.
    #[must_use]
    pub const fn is_ephemeral(&self) -> bool {
        matches!(
            self,
            Self::Message {
                ephemeral: true,
                ..
            }
        )
    }
}

/// Style of a modal text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextInputStyle {
    /// Single-line input.
    Short,
    /// Multi-line input.
    Paragraph,
}

/// A text input inside a modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextInput {
    /// Identifier returned with the submitted value.
    pub custom_id: String,
    /// Label shown above the input.
    pub label: String,
    /// Input style.
    pub style: TextInputStyle,
    /// Placeholder shown while the input is empty.
    pub placeholder: String,
    /// Whether the form can be submitted with the input left empty.
    pub required: bool,
}

/// Form for pasting a raw JSON overlay configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationModal {
    /// Identifier returned with the submission.
    pub custom_id: String,
    /// Title shown at the top of the form.
    pub title: String,
    /// Form inputs.
    pub inputs: Vec<TextInput>,
}

impl ConfigurationModal {
    /// Builds the overlay configuration form.
    #[must_use]
    pub fn new() -> Self {
        Self {
            custom_id: CONFIGURATION_MODAL_ID.to_owned(),
            title: "Overlay Configuration".to_owned(),
            inputs: vec![TextInput {
                custom_id: CONFIGURATION_INPUT_ID.to_owned(),
                label: "Overlay JSON".to_owned(),
                style: TextInputStyle::Paragraph,
                placeholder: r#"{"title": "Live now", "display": true}"#.to_owned(),
                required: true,
            }],
        }
    }
}

impl Default for ConfigurationModal {
    fn default() -> Self {
        Self::new()
    }
}
