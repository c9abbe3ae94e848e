//! Slash command domain model.

mod definition;
mod error;
mod parser;

pub use definition::{
    CommandGroupDefinition, CommandParameterSpec, CommandParameterType, SubcommandDefinition,
};
pub use error::SlashCommandError;
pub use parser::SlashCommandInvocation;
