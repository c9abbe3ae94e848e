//! Acknowledgment rendering.

use minijinja::Environment;
use serde_json::{Map, Value};

use super::{OverlayCommandError, OverlayCommandResult};
use crate::config::AcknowledgementTemplates;

/// Which reply template to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AcknowledgementKind {
    SetText,
    SetMedia,
    ClearField,
    Timer,
    Toggle,
    Configuration,
}

impl AcknowledgementKind {
    const ALL: [Self; 6] = [
        Self::SetText,
        Self::SetMedia,
        Self::ClearField,
        Self::Timer,
        Self::Toggle,
        Self::Configuration,
    ];

    const fn command(self) -> &'static str {
        match self {
            Self::SetText => "set_text",
            Self::SetMedia => "set_media",
            Self::ClearField => "clear_field",
            Self::Timer => "timer",
            Self::Toggle => "toggle",
            Self::Configuration => "configure",
        }
    }
}

/// Reply templates, syntax-checked once at construction.
#[derive(Debug, Clone)]
pub(crate) struct Acknowledgements {
    templates: AcknowledgementTemplates,
}

impl Acknowledgements {
    pub(crate) fn new(templates: AcknowledgementTemplates) -> OverlayCommandResult<Self> {
        let acknowledgements = Self { templates };
        acknowledgements.check_syntax()?;
        Ok(acknowledgements)
    }

    fn check_syntax(&self) -> OverlayCommandResult<()> {
        let environment = Environment::new();
        for kind in AcknowledgementKind::ALL {
            environment
                .template_from_str(self.source(kind))
                .map_err(|error| OverlayCommandError::TemplateRender {
                    command: kind.command().to_owned(),
                    reason: error.to_string(),
                })?;
        }
        Ok(())
    }

    fn source(&self, kind: AcknowledgementKind) -> &str {
        match kind {
            AcknowledgementKind::SetText => self.templates.set_text.as_str(),
            AcknowledgementKind::SetMedia => self.templates.set_media.as_str(),
            AcknowledgementKind::ClearField => self.templates.clear_field.as_str(),
            AcknowledgementKind::Timer => self.templates.timer.as_str(),
            AcknowledgementKind::Toggle => self.templates.toggle.as_str(),
            AcknowledgementKind::Configuration => self.templates.configuration.as_str(),
        }
    }

    pub(crate) fn render(
        &self,
        kind: AcknowledgementKind,
        context: &Map<String, Value>,
    ) -> OverlayCommandResult<String> {
        let mut full_context = context.clone();
        full_context.insert(
            "command".to_owned(),
            Value::String(kind.command().to_owned()),
        );
        Environment::new()
            .render_str(self.source(kind), full_context)
            .map_err(|error| OverlayCommandError::TemplateRender {
                command: kind.command().to_owned(),
                reason: error.to_string(),
            })
    }
}
