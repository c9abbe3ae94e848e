//! Error types for slash-command parsing and validation.

use thiserror::Error;

/// Errors for slash-command parsing, lookup, and parameter validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SlashCommandError {
    /// Input was empty.
    #[error("slash command input cannot be empty")]
    EmptyInput,

    /// Input does not start with `/`.
    #[error("slash commands must start with '/'")]
    MissingLeadingSlash,

    /// Command or subcommand name is invalid.
    #[error("invalid command name '{0}'")]
    InvalidCommandName(String),

    /// The group was invoked without a subcommand.
    #[error("command '/{0}' requires a subcommand")]
    MissingSubcommand(String),

    /// A parameter token does not match `key=value`.
    #[error("invalid parameter token '{token}': expected key=value")]
    InvalidParameterToken {
        /// The malformed token text.
        token: String,
    },

    /// A quoted string was not terminated.
    #[error("unterminated quoted value in slash command")]
    UnterminatedQuotedValue,

    /// Duplicate parameter key.
    #[error("duplicate parameter '{0}'")]
    DuplicateParameter(String),

    /// Command group is not registered.
    #[error("command '/{0}' was not found")]
    UnknownCommand(String),

    /// Subcommand is not part of the group.
    #[error("command '/{command}' has no subcommand '{subcommand}'")]
    UnknownSubcommand {
        /// Group name.
        command: String,
        /// Requested subcommand.
        subcommand: String,
    },

    /// Parameter does not exist on the subcommand definition.
    #[error("unknown parameter '{parameter}' for command '/{command}'")]
    UnknownParameter {
        /// Qualified command name.
        command: String,
        /// Unknown parameter name.
        parameter: String,
    },

    /// Required parameter missing.
    #[error("missing required parameter '{parameter}' for command '/{command}'")]
    MissingRequiredParameter {
        /// Qualified command name.
        command: String,
        /// Missing parameter name.
        parameter: String,
    },

    /// Parameter value is invalid.
    #[error("invalid value for parameter '{parameter}' in command '/{command}': {reason}")]
    InvalidParameterValue {
        /// Qualified command name.
        command: String,
        /// Parameter name.
        parameter: String,
        /// Validation reason.
        reason: String,
    },

    /// Parameter schema is invalid.
    #[error("invalid parameter definition for '{parameter}' in command '/{command}': {reason}")]
    InvalidParameterDefinition {
        /// Qualified command name.
        command: String,
        /// Parameter name.
        parameter: String,
        /// Validation reason.
        reason: String,
    },

    /// Registry operation failed.
    #[error("slash-command registry error: {0}")]
    Registry(String),
}
