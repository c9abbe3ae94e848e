//! Command group definitions and parameter validation.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::collections::{BTreeMap, HashSet};

use super::SlashCommandError;
use crate::overlay::domain::Attachment;

/// Parameter type for slash-command validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandParameterType {
    /// Free-form string value.
    String,
    /// Signed 64-bit integer value.
    Integer,
    /// Boolean value (`true` or `false`).
    Boolean,
    /// String restricted to a closed set of options.
    Select,
    /// Reference to an uploaded attachment.
    Attachment,
}

impl CommandParameterType {
    /// Returns the application-command option type code used at registration.
    #[must_use]
    pub const fn option_type_code(self) -> u8 {
        match self {
            Self::String | Self::Select => 3,
            Self::Integer => 4,
            Self::Boolean => 5,
            Self::Attachment => 11,
        }
    }
}

/// Parameter specification for a subcommand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandParameterSpec {
    /// Parameter name.
    pub name: String,
    /// Help text shown by the platform.
    pub description: String,
    /// Parameter type.
    pub parameter_type: CommandParameterType,
    /// Whether the parameter is required.
    pub required: bool,
    /// Allowed options for `select` parameters.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl CommandParameterSpec {
    /// Creates a parameter specification.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameter_type: CommandParameterType,
        required: bool,
    ) -> Self {
        Self {
            name: name.into().to_ascii_lowercase(),
            description: description.into(),
            parameter_type,
            required,
            options: Vec::new(),
        }
    }

    /// Adds allowed options for `select` parameters.
    #[must_use]
    pub fn with_options(mut self, options: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }
}

/// A subcommand of a command group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubcommandDefinition {
    /// Subcommand name.
    pub name: String,
    /// Help text shown by the platform.
    pub description: String,
    /// Parameter definitions.
    #[serde(default)]
    pub parameters: Vec<CommandParameterSpec>,
}

impl SubcommandDefinition {
    /// Creates a subcommand definition.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_lowercase(),
            description: description.into(),
            parameters: Vec::new(),
        }
    }

    /// Adds a parameter specification.
    #[must_use]
    pub fn with_parameter(mut self, parameter: CommandParameterSpec) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Checks that the parameter schema is well formed.
    ///
    /// # Errors
    ///
    /// Returns [`SlashCommandError::InvalidParameterDefinition`] for duplicate
    /// parameters or `select` parameters without options.
    pub fn validate_schema(&self, command: &str) -> Result<(), SlashCommandError> {
        let qualified = format!("{command} {}", self.name);
        let mut names = HashSet::new();
        for parameter in &self.parameters {
            if !names.insert(parameter.name.as_str()) {
                return Err(SlashCommandError::InvalidParameterDefinition {
                    command: qualified,
                    parameter: parameter.name.clone(),
                    reason: "duplicate parameter definition".to_owned(),
                });
            }
            if matches!(parameter.parameter_type, CommandParameterType::Select)
                && parameter.options.is_empty()
            {
                return Err(SlashCommandError::InvalidParameterDefinition {
                    command: qualified,
                    parameter: parameter.name.clone(),
                    reason: "select parameters must provide options".to_owned(),
                });
            }
        }
        Ok(())
    }

    /// Validates and converts raw invocation parameters.
    ///
    /// Optional parameters that were not supplied map to `null`. Attachment
    /// parameters must reference an entry of `attachments` and keep the
    /// attachment id as their value.
    ///
    /// # Errors
    ///
    /// Returns [`SlashCommandError`] when parameters are missing, unknown, or
    /// invalid for the declared schema.
    pub fn validate_parameters(
        &self,
        command: &str,
        provided: &BTreeMap<String, String>,
        attachments: &BTreeMap<String, Attachment>,
    ) -> Result<BTreeMap<String, Value>, SlashCommandError> {
        self.validate_schema(command)?;
        let qualified = format!("{command} {}", self.name);

        for key in provided.keys() {
            if !self
                .parameters
                .iter()
                .any(|parameter| parameter.name == *key)
            {
                return Err(SlashCommandError::UnknownParameter {
                    command: qualified,
                    parameter: key.clone(),
                });
            }
        }

        let mut typed = BTreeMap::new();
        for parameter in &self.parameters {
            match provided.get(&parameter.name) {
                Some(raw) => {
                    let value = parse_parameter_value(&qualified, parameter, raw, attachments)?;
                    typed.insert(parameter.name.clone(), value);
                }
                None if parameter.required => {
                    return Err(SlashCommandError::MissingRequiredParameter {
                        command: qualified,
                        parameter: parameter.name.clone(),
                    });
                }
                None => {
                    typed.insert(parameter.name.clone(), Value::Null);
                }
            }
        }

        Ok(typed)
    }
}

/// A namespaced group of subcommands, registered as one platform command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandGroupDefinition {
    /// Group name without the leading slash.
    pub name: String,
    /// Help text shown by the platform.
    pub description: String,
    /// Whether the group can only be used inside a guild.
    pub guild_only: bool,
    /// Role every caller must hold, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_role: Option<String>,
    /// Subcommand definitions.
    #[serde(default)]
    pub subcommands: Vec<SubcommandDefinition>,
}

impl CommandGroupDefinition {
    /// Creates a group usable anywhere by anyone.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_lowercase(),
            description: description.into(),
            guild_only: false,
            required_role: None,
            subcommands: Vec::new(),
        }
    }

    /// Restricts the group to guild channels.
    #[must_use]
    pub const fn guild_only(mut self) -> Self {
        self.guild_only = true;
        self
    }

    /// Requires callers to hold the named role.
    #[must_use]
    pub fn with_required_role(mut self, role: impl Into<String>) -> Self {
        self.required_role = Some(role.into());
        self
    }

    /// Adds a subcommand.
    #[must_use]
    pub fn with_subcommand(mut self, subcommand: SubcommandDefinition) -> Self {
        self.subcommands.push(subcommand);
        self
    }

    /// Finds a subcommand by name.
    #[must_use]
    pub fn find_subcommand(&self, name: &str) -> Option<&SubcommandDefinition> {
        let normalized = name.to_ascii_lowercase();
        self.subcommands
            .iter()
            .find(|subcommand| subcommand.name == normalized)
    }

    /// Checks the whole group schema.
    ///
    /// # Errors
    ///
    /// Returns [`SlashCommandError`] for duplicate subcommands or any invalid
    /// parameter definition.
    pub fn validate_schema(&self) -> Result<(), SlashCommandError> {
        let mut names = HashSet::new();
        for subcommand in &self.subcommands {
            if !names.insert(subcommand.name.as_str()) {
                return Err(SlashCommandError::Registry(format!(
                    "duplicate subcommand '{}' in group '{}'",
                    subcommand.name, self.name
                )));
            }
            subcommand.validate_schema(&self.name)?;
        }
        Ok(())
    }
}

fn parse_parameter_value(
    command: &str,
    parameter: &CommandParameterSpec,
    raw: &str,
    attachments: &BTreeMap<String, Attachment>,
) -> Result<Value, SlashCommandError> {
    let invalid = |reason: String| SlashCommandError::InvalidParameterValue {
        command: command.to_owned(),
        parameter: parameter.name.clone(),
        reason,
    };

    match parameter.parameter_type {
        CommandParameterType::String => Ok(Value::String(raw.to_owned())),
        CommandParameterType::Integer => raw
            .trim()
            .parse::<i64>()
            .map(|number| Value::Number(Number::from(number)))
            .map_err(|_| invalid("expected an integer".to_owned())),
        CommandParameterType::Boolean => match raw.to_ascii_lowercase().as_str() {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            _ => Err(invalid("expected true or false".to_owned())),
        },
        CommandParameterType::Select => {
            if parameter.options.iter().any(|option| option == raw) {
                Ok(Value::String(raw.to_owned()))
            } else {
                Err(invalid(format!(
                    "expected one of [{}]",
                    parameter.options.join(", ")
                )))
            }
        }
        CommandParameterType::Attachment => {
            if attachments.contains_key(raw) {
                Ok(Value::String(raw.to_owned()))
            } else {
                Err(invalid(format!("no attachment with id '{raw}'")))
            }
        }
    }
}
