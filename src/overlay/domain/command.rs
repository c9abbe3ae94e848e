//! Typed overlay commands produced after parameter validation.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::{Attachment, MediaField, OverlayField, SlashCommandError, Switch, TextField};

/// Name of the overlay command group.
pub const OVERLAY_GROUP: &str = "overlay";

/// A validated overlay command, ready for its handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayCommand {
    /// Set a text field.
    SetText {
        /// Target field.
        field: TextField,
        /// New text.
        text: String,
    },
    /// Set a media field from a URL or an uploaded attachment.
    SetMedia {
        /// Target field.
        field: MediaField,
        /// Explicit media URL.
        media_url: Option<String>,
        /// Uploaded media; its URL wins over `media_url`.
        media: Option<Attachment>,
    },
    /// Clear any field.
    ClearField {
        /// Target field.
        field: OverlayField,
    },
    /// Start the overlay timer.
    Timer {
        /// Duration in seconds; any integer is accepted.
        duration: i64,
    },
    /// Show or hide the overlay.
    Toggle {
        /// Requested state.
        switch: Switch,
    },
    /// Open the configuration modal.
    Configure,
}

impl OverlayCommand {
    /// Returns the subcommand name this command is registered under.
    #[must_use]
    pub const fn subcommand(&self) -> &'static str {
        match self {
            Self::SetText { .. } => "set_text",
            Self::SetMedia { .. } => "set_media",
            Self::ClearField { .. } => "clear_field",
            Self::Timer { .. } => "timer",
            Self::Toggle { .. } => "toggle",
            Self::Configure => "configure",
        }
    }

    /// Builds a typed command from validated parameters.
    ///
    /// `parameters` is the output of
    /// [`SubcommandDefinition::validate_parameters`](super::SubcommandDefinition::validate_parameters):
    /// every declared parameter is present, optional ones as `null`.
    ///
    /// # Errors
    ///
    /// Returns [`SlashCommandError`] when the subcommand is unknown or a value
    /// does not fit the typed command.
    pub fn from_parameters(
        subcommand: &str,
        parameters: &BTreeMap<String, Value>,
        attachments: &BTreeMap<String, Attachment>,
    ) -> Result<Self, SlashCommandError> {
        let reader = ParameterReader {
            command: format!("{OVERLAY_GROUP} {subcommand}"),
            parameters,
        };

        match subcommand {
            "set_text" => Ok(Self::SetText {
                field: reader.choice("field", |raw| TextField::try_from(raw))?,
                text: reader.required_string("text")?.to_owned(),
            }),
            "set_media" => {
                let media = reader
                    .optional_string("media")?
                    .map(|id| {
                        attachments.get(id).cloned().ok_or_else(|| {
                            reader.invalid("media", format!("no attachment with id '{id}'"))
                        })
                    })
                    .transpose()?;
                Ok(Self::SetMedia {
                    field: reader.choice("field", |raw| MediaField::try_from(raw))?,
                    media_url: reader.optional_string("media_url")?.map(str::to_owned),
                    media,
                })
            }
            "clear_field" => Ok(Self::ClearField {
                field: reader.choice("field", |raw| OverlayField::try_from(raw))?,
            }),
            "timer" => Ok(Self::Timer {
                duration: reader.required_integer("duration")?,
            }),
            "toggle" => Ok(Self::Toggle {
                switch: reader.choice("switch", |raw| Switch::try_from(raw))?,
            }),
            "configure" => Ok(Self::Configure),
            _ => Err(SlashCommandError::UnknownSubcommand {
                command: OVERLAY_GROUP.to_owned(),
                subcommand: subcommand.to_owned(),
            }),
        }
    }
}

/// What `set_media` publishes when neither a URL nor an attachment is given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingMediaPolicy {
    /// Publish `null` for the field, clearing it.
    #[default]
    PublishNull,
    /// Refuse the invocation without publishing.
    Reject,
}

impl MissingMediaPolicy {
    /// Returns the configuration representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PublishNull => "publish_null",
            Self::Reject => "reject",
        }
    }
}

impl TryFrom<&str> for MissingMediaPolicy {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "publish_null" => Ok(Self::PublishNull),
            "reject" => Ok(Self::Reject),
            _ => Err(value.to_owned()),
        }
    }
}

struct ParameterReader<'a> {
    command: String,
    parameters: &'a BTreeMap<String, Value>,
}

impl ParameterReader<'_> {
    fn invalid(&self, parameter: &str, reason: impl Into<String>) -> SlashCommandError {
        SlashCommandError::InvalidParameterValue {
            command: self.command.clone(),
            parameter: parameter.to_owned(),
            reason: reason.into(),
        }
    }

    fn missing(&self, parameter: &str) -> SlashCommandError {
        SlashCommandError::MissingRequiredParameter {
            command: self.command.clone(),
            parameter: parameter.to_owned(),
        }
    }

    fn optional_string(&self, parameter: &str) -> Result<Option<&str>, SlashCommandError> {
        match self.parameters.get(parameter) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(text)) => Ok(Some(text)),
            Some(_) => Err(self.invalid(parameter, "expected a string")),
        }
    }

    fn required_string(&self, parameter: &str) -> Result<&str, SlashCommandError> {
        self.optional_string(parameter)?
            .ok_or_else(|| self.missing(parameter))
    }

    fn required_integer(&self, parameter: &str) -> Result<i64, SlashCommandError> {
        match self.parameters.get(parameter) {
            None | Some(Value::Null) => Err(self.missing(parameter)),
            Some(value) => value
                .as_i64()
                .ok_or_else(|| self.invalid(parameter, "expected an integer")),
        }
    }

    fn choice<T, E>(
        &self,
        parameter: &str,
        parse: impl Fn(&str) -> Result<T, E>,
    ) -> Result<T, SlashCommandError>
    where
        E: std::fmt::Display,
    {
        let raw = self.required_string(parameter)?;
        parse(raw).map_err(|error| self.invalid(parameter, error.to_string()))
    }
}
