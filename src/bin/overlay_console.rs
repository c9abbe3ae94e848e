//! Drives the overlay command group from a terminal.
//!
//! Usage:
//!
//! ```text
//! overlay_console
//! /overlay set_text field=title text="Grand Finals"
//! /overlay toggle switch=on
//! :configure {"title": "Finals", "display": true}
//! ```
//!
//! Each line is dispatched as if a chat user had invoked the command. Lines
//! starting with `:configure` submit the configuration modal. Replies and the
//! updates broadcast to the overlay are written through `tracing`; set
//! `RUST_LOG` to adjust verbosity.
//!
//! The console caller sits in a guild and holds the roles listed in
//! `OVERLAY_CONSOLE_ROLES` (comma separated), defaulting to the configured
//! moderator role.

use std::sync::Arc;

use marquee::{
    config::OverlayConfig,
    overlay::{
        adapters::{BroadcastOverlayPublisher, memory::InMemoryOverlayCommandRegistry},
        domain::{
            CONFIGURATION_INPUT_ID, CONFIGURATION_MODAL_ID, CommandCaller, CommandInteraction,
            ModalSubmission, OverlayResponse, OverlayUpdate, SlashCommandError,
            SlashCommandInvocation,
        },
        services::{OverlayCommandDispatcher, OverlayCommandGroup, OverlayCommandResult},
    },
};
use mockable::DefaultClock;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

type ConsoleDispatcher = OverlayCommandDispatcher<
    InMemoryOverlayCommandRegistry,
    BroadcastOverlayPublisher<DefaultClock>,
>;

const ROLES_VAR: &str = "OVERLAY_CONSOLE_ROLES";
const CONFIGURE_PREFIX: &str = ":configure";

/// Errors that stop the console.
#[derive(Debug, Error)]
enum ConsoleError {
    #[error("failed to load configuration: {0}")]
    Config(#[from] marquee::config::ConfigError),
    #[error("failed to build the command group: {0}")]
    Setup(#[from] marquee::overlay::services::OverlayCommandError),
    #[error("failed to read stdin: {0}")]
    Input(#[source] std::io::Error),
}

/// One line of console input.
#[derive(Debug, PartialEq, Eq)]
enum ConsoleInput {
    Blank,
    Command(SlashCommandInvocation),
    Configuration(String),
}

fn parse_line(line: &str) -> Result<ConsoleInput, SlashCommandError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(ConsoleInput::Blank);
    }
    if let Some(raw) = trimmed.strip_prefix(CONFIGURE_PREFIX) {
        return Ok(ConsoleInput::Configuration(raw.trim().to_owned()));
    }
    SlashCommandInvocation::parse(trimmed).map(ConsoleInput::Command)
}

/// Settings for one console session.
#[derive(Debug)]
struct ConsoleSettings {
    config: OverlayConfig,
    roles: Option<String>,
}

impl ConsoleSettings {
    /// Reads the overlay configuration and the console roles through `lookup`.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConsoleError> {
        let config = OverlayConfig::from_lookup(&lookup)?;
        let roles = lookup(ROLES_VAR);
        Ok(Self { config, roles })
    }

    fn caller(&self) -> CommandCaller {
        console_caller(&self.config.moderator_role, self.roles.as_deref())
    }
}

fn console_caller(moderator_role: &str, roles: Option<&str>) -> CommandCaller {
    let base = CommandCaller::new("console", "console").in_guild("console");
    let listed: Vec<String> = roles
        .unwrap_or(moderator_role)
        .split(',')
        .map(str::trim)
        .filter(|role| !role.is_empty())
        .map(str::to_owned)
        .collect();
    listed
        .into_iter()
        .fold(base, |caller, role| caller.with_role(role))
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let env_file = dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "marquee=debug,overlay_console=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    debug!(env_file = ?env_file, "environment loaded");
    run().await.map_err(Into::into)
}

async fn run() -> Result<(), ConsoleError> {
    let settings = ConsoleSettings::from_lookup(|key| std::env::var(key).ok())?;
    let caller = settings.caller();
    let config = settings.config;
    info!(
        moderator_role = %config.moderator_role,
        missing_media = config.missing_media.as_str(),
        broadcast_capacity = config.broadcast_capacity,
        "loaded overlay configuration"
    );

    let publisher =
        BroadcastOverlayPublisher::new(config.broadcast_capacity, Arc::new(DefaultClock));
    let overlay = tokio::spawn(log_updates(publisher.subscribe()));

    let group = OverlayCommandGroup::new(Arc::new(publisher), &config)?;
    let registry = Arc::new(InMemoryOverlayCommandRegistry::new(&config.moderator_role));
    let dispatcher = OverlayCommandDispatcher::new(registry, group);
    info!(roles = ?caller.roles, "console ready; enter /overlay commands");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.map_err(ConsoleError::Input)? {
        handle_line(&dispatcher, &caller, &line).await;
    }

    // Dropping the dispatcher closes the channel and ends the logger.
    drop(dispatcher);
    if let Err(error) = overlay.await {
        warn!(%error, "overlay logger stopped abnormally");
    }
    Ok(())
}

async fn handle_line(dispatcher: &ConsoleDispatcher, caller: &CommandCaller, line: &str) {
    let outcome = match parse_line(line) {
        Ok(ConsoleInput::Blank) => return,
        Ok(ConsoleInput::Command(invocation)) => {
            let interaction = CommandInteraction::new(caller.clone(), invocation);
            dispatcher.dispatch(&interaction).await
        }
        Ok(ConsoleInput::Configuration(raw)) => {
            let submission = ModalSubmission::new(caller.clone(), CONFIGURATION_MODAL_ID)
                .with_value(CONFIGURATION_INPUT_ID, raw);
            dispatcher.submit_modal(&submission).await
        }
        Err(error) => Err(error.into()),
    };
    report(outcome);
}

fn report(outcome: OverlayCommandResult<OverlayResponse>) {
    match outcome {
        Ok(OverlayResponse::Message { content, ephemeral }) => {
            info!(ephemeral, "{content}");
        }
        Ok(OverlayResponse::Modal(modal)) => {
            info!(
                title = %modal.title,
                "modal opened; submit it with `{CONFIGURE_PREFIX} <json>`"
            );
        }
        Err(error) => {
            warn!(%error, "{}", error.user_message());
        }
    }
}

async fn log_updates(mut updates: broadcast::Receiver<OverlayUpdate>) {
    loop {
        match updates.recv().await {
            Ok(update) => match serde_json::to_string(&update.patch) {
                Ok(payload) => info!(update_id = %update.id, %payload, "overlay update"),
                Err(error) => warn!(%error, "failed to encode overlay update"),
            },
            Err(RecvError::Lagged(skipped)) => {
                warn!(skipped, "overlay logger fell behind");
            }
            Err(RecvError::Closed) => break,
        }
    }
}

#[cfg(test)]
#[path = "overlay_console/tests.rs"]
mod tests;
