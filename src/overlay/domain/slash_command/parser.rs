//! Slash-command parser.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::SlashCommandError;

/// A parsed slash-command invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlashCommandInvocation {
    command: String,
    subcommand: String,
    parameters: BTreeMap<String, String>,
}

impl SlashCommandInvocation {
    /// Builds an invocation from already-split parts.
    ///
    /// Names are lower-cased the same way [`Self::parse`] does.
    #[must_use]
    pub fn new(
        command: impl Into<String>,
        subcommand: impl Into<String>,
        parameters: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>,
    ) -> Self {
        Self {
            command: command.into().to_ascii_lowercase(),
            subcommand: subcommand.into().to_ascii_lowercase(),
            parameters: parameters
                .into_iter()
                .map(|(key, value)| (key.into().to_ascii_lowercase(), value.into()))
                .collect(),
        }
    }

    /// Parses `/<command> <subcommand> key=value key2="quoted value"` input.
    ///
    /// # Errors
    ///
    /// Returns [`SlashCommandError`] when the input is empty or malformed.
    pub fn parse(raw_input: &str) -> Result<Self, SlashCommandError> {
        let trimmed = raw_input.trim();
        if trimmed.is_empty() {
            return Err(SlashCommandError::EmptyInput);
        }

        let tokens = tokenize(trimmed)?;
        let mut remaining = tokens.iter();
        let command_token = remaining.next().ok_or(SlashCommandError::EmptyInput)?;
        let command = parse_command_token(command_token)?;
        let subcommand_token = remaining
            .next()
            .ok_or_else(|| SlashCommandError::MissingSubcommand(command.clone()))?;
        let subcommand = parse_subcommand_token(&command, subcommand_token)?;

        let mut parameters = BTreeMap::new();
        for token in remaining {
            let (key, value) =
                token
                    .split_once('=')
                    .ok_or_else(|| SlashCommandError::InvalidParameterToken {
                        token: token.to_owned(),
                    })?;

            if key.is_empty() || !is_valid_identifier(key) {
                return Err(SlashCommandError::InvalidParameterToken {
                    token: token.to_owned(),
                });
            }

            let normalized_key = key.to_ascii_lowercase();
            if parameters
                .insert(normalized_key.clone(), value.to_owned())
                .is_some()
            {
                return Err(SlashCommandError::DuplicateParameter(normalized_key));
            }
        }

        Ok(Self {
            command,
            subcommand,
            parameters,
        })
    }

    /// Returns the group name without the leading slash.
    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Returns the subcommand name.
    #[must_use]
    pub fn subcommand(&self) -> &str {
        &self.subcommand
    }

    /// Returns `<command> <subcommand>`, as used in diagnostics.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        format!("{} {}", self.command, self.subcommand)
    }

    /// Returns parsed parameter values as raw strings.
    #[must_use]
    pub const fn parameters(&self) -> &BTreeMap<String, String> {
        &self.parameters
    }
}

fn parse_command_token(token: &str) -> Result<String, SlashCommandError> {
    let command = token
        .strip_prefix('/')
        .ok_or(SlashCommandError::MissingLeadingSlash)?;
    if command.is_empty() || !is_valid_identifier(command) {
        return Err(SlashCommandError::InvalidCommandName(command.to_owned()));
    }
    Ok(command.to_ascii_lowercase())
}

fn parse_subcommand_token(command: &str, token: &str) -> Result<String, SlashCommandError> {
    if token.contains('=') {
        return Err(SlashCommandError::MissingSubcommand(command.to_owned()));
    }
    if !is_valid_identifier(token) {
        return Err(SlashCommandError::InvalidCommandName(token.to_owned()));
    }
    Ok(token.to_ascii_lowercase())
}

fn tokenize(input: &str) -> Result<Vec<String>, SlashCommandError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes: Option<char> = None;
    let mut escaped = false;
    let mut started = false;

    for character in input.chars() {
        if let Some(quote_char) = in_quotes {
            if escaped {
                current.push(character);
                escaped = false;
                continue;
            }

            match character {
                '\\' => escaped = true,
                _ if character == quote_char => in_quotes = None,
                _ => current.push(character),
            }
            continue;
        }

        match character {
            '"' | '\'' => {
                in_quotes = Some(character);
                started = true;
            }
            _ if character.is_whitespace() => {
                if started {
                    tokens.push(std::mem::take(&mut current));
                    started = false;
                }
            }
            '\\' => {
                current.push(character);
                return Err(SlashCommandError::InvalidParameterToken {
                    token: current.clone(),
                });
            }
            _ => {
                current.push(character);
                started = true;
            }
        }
    }

    if in_quotes.is_some() || escaped {
        return Err(SlashCommandError::UnterminatedQuotedValue);
    }
    // A quoted empty string is still a token.
    if started {
        tokens.push(current);
    }

    Ok(tokens)
}

fn is_valid_identifier(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|character| character.is_ascii_alphanumeric() || matches!(character, '-' | '_'))
}
