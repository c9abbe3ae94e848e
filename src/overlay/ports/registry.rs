//! Command registry port.
//!
//! The registry provides command group definitions to the dispatcher and to
//! the registration manifest.

use thiserror::Error;

use crate::overlay::domain::CommandGroupDefinition;

/// Result type for command registry operations.
pub type CommandRegistryResult<T> = Result<T, CommandRegistryError>;

/// Port for loading command group definitions.
pub trait OverlayCommandRegistry: Send + Sync {
    /// Finds a group by name (without leading slash).
    ///
    /// # Errors
    ///
    /// Returns [`CommandRegistryError`] when registry access fails.
    fn find_group(&self, name: &str) -> CommandRegistryResult<Option<CommandGroupDefinition>>;

    /// Lists all registered groups, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns [`CommandRegistryError`] when registry access fails.
    fn list_groups(&self) -> CommandRegistryResult<Vec<CommandGroupDefinition>>;
}

/// Errors for command registry operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandRegistryError {
    /// The registry contains invalid definitions.
    #[error("invalid command definition: {0}")]
    InvalidDefinition(String),

    /// General storage or adapter failure.
    #[error("command registry unavailable: {0}")]
    Unavailable(String),
}
