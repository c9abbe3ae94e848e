//! The overlay command group handlers.

use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, info};

use super::acknowledgement::{AcknowledgementKind, Acknowledgements};
use super::{OverlayCommandError, OverlayCommandResult};
use crate::config::OverlayConfig;
use crate::overlay::domain::{
    Attachment, ConfigurationModal, MediaField, MissingMediaPolicy, OverlayCommand, OverlayField,
    OverlayPatch, OverlayResponse, OverlayValue, Switch, TextField,
};
use crate::overlay::ports::OverlayPublisher;

/// Patch key used by the `timer` command.
pub const TIMER_KEY: &str = "timer";

/// Patch key used by the `toggle` command.
pub const DISPLAY_KEY: &str = "display";

/// Handlers for the `overlay` command group.
///
/// Each handler publishes exactly one patch (none for `configure`) and returns
/// exactly one reply. Callers are expected to have been authorised already.
pub struct OverlayCommandGroup<P>
where
    P: OverlayPublisher,
{
    publisher: Arc<P>,
    acknowledgements: Arc<Acknowledgements>,
    missing_media: MissingMediaPolicy,
}

impl<P> Clone for OverlayCommandGroup<P>
where
    P: OverlayPublisher,
{
    fn clone(&self) -> Self {
        Self {
            publisher: Arc::clone(&self.publisher),
            acknowledgements: Arc::clone(&self.acknowledgements),
            missing_media: self.missing_media,
        }
    }
}

impl<P> OverlayCommandGroup<P>
where
    P: OverlayPublisher,
{
    /// Creates the command group.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayCommandError::TemplateRender`] when an acknowledgment
    /// template does not compile.
    pub fn new(publisher: Arc<P>, config: &OverlayConfig) -> OverlayCommandResult<Self> {
        Ok(Self {
            publisher,
            acknowledgements: Arc::new(Acknowledgements::new(config.acknowledgements.clone())?),
            missing_media: config.missing_media,
        })
    }

    /// Sets a text field.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayCommandError::Publish`] when publishing fails.
    pub async fn set_text(
        &self,
        field: TextField,
        text: impl Into<String>,
    ) -> OverlayCommandResult<OverlayResponse> {
        let value: String = text.into();
        let mut context = Map::new();
        context.insert("field".to_owned(), Value::String(field.as_str().to_owned()));
        context.insert("text".to_owned(), Value::String(value.clone()));
        let reply = self
            .acknowledgements
            .render(AcknowledgementKind::SetText, &context)?;

        self.publish("set_text", OverlayPatch::single(field.as_str(), value))
            .await?;
        Ok(OverlayResponse::ephemeral(reply))
    }

    /// Sets a media field.
    ///
    /// An attachment's URL takes precedence over `media_url`. When neither is
    /// given the configured [`MissingMediaPolicy`] decides between publishing
    /// `null` and refusing the invocation.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayCommandError::MissingMediaSource`] under
    /// [`MissingMediaPolicy::Reject`], or [`OverlayCommandError::Publish`]
    /// when publishing fails.
    pub async fn set_media(
        &self,
        field: MediaField,
        media_url: Option<String>,
        media: Option<Attachment>,
    ) -> OverlayCommandResult<OverlayResponse> {
        let resolved = media.map(|attachment| attachment.url).or(media_url);
        if resolved.is_none() && self.missing_media == MissingMediaPolicy::Reject {
            return Err(OverlayCommandError::MissingMediaSource { field });
        }

        let mut context = Map::new();
        context.insert("field".to_owned(), Value::String(field.as_str().to_owned()));
        context.insert(
            "media_url".to_owned(),
            resolved.clone().map_or(Value::Null, Value::String),
        );
        let reply = self
            .acknowledgements
            .render(AcknowledgementKind::SetMedia, &context)?;

        self.publish(
            "set_media",
            OverlayPatch::single(field.as_str(), OverlayValue::from(resolved)),
        )
        .await?;
        Ok(OverlayResponse::ephemeral(reply))
    }

    /// Clears any field by publishing `null` for it.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayCommandError::Publish`] when publishing fails.
    pub async fn clear_field(&self, field: OverlayField) -> OverlayCommandResult<OverlayResponse> {
        let mut context = Map::new();
        context.insert("field".to_owned(), Value::String(field.as_str().to_owned()));
        let reply = self
            .acknowledgements
            .render(AcknowledgementKind::ClearField, &context)?;

        self.publish(
            "clear_field",
            OverlayPatch::single(field.as_str(), OverlayValue::Null),
        )
        .await?;
        Ok(OverlayResponse::ephemeral(reply))
    }

    /// Starts the overlay timer for `duration` seconds.
    ///
    /// No range check is applied; zero and negative values are forwarded.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayCommandError::Publish`] when publishing fails.
    pub async fn timer(&self, duration: i64) -> OverlayCommandResult<OverlayResponse> {
        let mut context = Map::new();
        context.insert("duration".to_owned(), Value::from(duration));
        let reply = self
            .acknowledgements
            .render(AcknowledgementKind::Timer, &context)?;

        self.publish("timer", OverlayPatch::single(TIMER_KEY, duration))
            .await?;
        Ok(OverlayResponse::ephemeral(reply))
    }

    /// Shows or hides the overlay.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayCommandError::Publish`] when publishing fails.
    pub async fn toggle_overlay(&self, switch: Switch) -> OverlayCommandResult<OverlayResponse> {
        let mut context = Map::new();
        context.insert(
            "switch".to_owned(),
            Value::String(switch.as_str().to_owned()),
        );
        let reply = self
            .acknowledgements
            .render(AcknowledgementKind::Toggle, &context)?;

        self.publish("toggle", OverlayPatch::single(DISPLAY_KEY, switch.is_on()))
            .await?;
        Ok(OverlayResponse::ephemeral(reply))
    }

    /// Opens the configuration modal. Nothing is published.
    #[must_use]
    pub fn configure(&self) -> OverlayResponse {
        debug!("opening overlay configuration modal");
        OverlayResponse::Modal(ConfigurationModal::new())
    }

    /// Publishes a full configuration submitted through the modal.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayCommandError::Publish`] when publishing fails.
    pub async fn submit_configuration(
        &self,
        patch: OverlayPatch,
    ) -> OverlayCommandResult<OverlayResponse> {
        let mut context = Map::new();
        context.insert("keys".to_owned(), Value::from(patch.keys()));
        let reply = self
            .acknowledgements
            .render(AcknowledgementKind::Configuration, &context)?;

        self.publish("configure", patch).await?;
        Ok(OverlayResponse::ephemeral(reply))
    }

    /// Routes a typed command to its handler.
    ///
    /// # Errors
    ///
    /// Returns the handler's error.
    pub async fn execute(&self, command: OverlayCommand) -> OverlayCommandResult<OverlayResponse> {
        match command {
            OverlayCommand::SetText { field, text } => self.set_text(field, text).await,
            OverlayCommand::SetMedia {
                field,
                media_url,
                media,
            } => self.set_media(field, media_url, media).await,
            OverlayCommand::ClearField { field } => self.clear_field(field).await,
            OverlayCommand::Timer { duration } => self.timer(duration).await,
            OverlayCommand::Toggle { switch } => self.toggle_overlay(switch).await,
            OverlayCommand::Configure => Ok(self.configure()),
        }
    }

    async fn publish(&self, command: &str, patch: OverlayPatch) -> OverlayCommandResult<()> {
        self.publisher.publish_overlay(&patch).await?;
        info!(command, keys = ?patch.keys(), "overlay update sent");
        Ok(())
    }
}
