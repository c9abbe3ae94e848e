//! Runtime configuration for the overlay command group.
//!
//! Configuration is read from an optional JSON file and then overridden by
//! environment variables:
//!
//! | Env Var                      | Default        |
//! |------------------------------|----------------|
//! | `OVERLAY_CONFIG`             | unset (no file)|
//! | `OVERLAY_MODERATOR_ROLE`     | `Mod`          |
//! | `OVERLAY_MISSING_MEDIA`      | `publish_null` |
//! | `OVERLAY_BROADCAST_CAPACITY` | `64`           |
//!
//! Acknowledgment templates can only be set from the file.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::overlay::domain::MissingMediaPolicy;

/// Role required to use the overlay commands unless configured otherwise.
pub const DEFAULT_MODERATOR_ROLE: &str = "Mod";

/// Broadcast buffer size unless configured otherwise.
pub const DEFAULT_BROADCAST_CAPACITY: usize = 64;

const CONFIG_PATH_VAR: &str = "OVERLAY_CONFIG";
const MODERATOR_ROLE_VAR: &str = "OVERLAY_MODERATOR_ROLE";
const MISSING_MEDIA_VAR: &str = "OVERLAY_MISSING_MEDIA";
const BROADCAST_CAPACITY_VAR: &str = "OVERLAY_BROADCAST_CAPACITY";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration file '{path}': {source}")]
    Read {
        /// File that failed to load.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON for [`OverlayConfig`].
    #[error("failed to parse configuration file '{path}': {reason}")]
    Parse {
        /// File that failed to parse.
        path: String,
        /// Parser message.
        reason: String,
    },

    /// A setting holds an unusable value.
    #[error("invalid value for '{key}': {reason}")]
    InvalidValue {
        /// Setting name.
        key: String,
        /// Why the value was refused.
        reason: String,
    },
}

/// Acknowledgment texts, rendered with `minijinja`.
///
/// Templates can reference the invocation's parameters, such as
/// `{{ field }}`, `{{ switch }}` or `{{ duration }}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcknowledgementTemplates {
    /// Reply to `set_text`.
    pub set_text: String,
    /// Reply to `set_media`.
    pub set_media: String,
    /// Reply to `clear_field`.
    pub clear_field: String,
    /// Reply to `timer`.
    pub timer: String,
    /// Reply to `toggle`.
    pub toggle: String,
    /// Reply to a configuration modal submission.
    pub configuration: String,
}

impl Default for AcknowledgementTemplates {
    fn default() -> Self {
        Self {
            set_text: "Overlay text update sent!".to_owned(),
            set_media: "Overlay image update sent!".to_owned(),
            clear_field: "Overlay clear update sent!".to_owned(),
            timer: "Overlay update sent!".to_owned(),
            toggle: "Overlay toggled {{ switch }}!".to_owned(),
            configuration: "Overlay configuration update sent!".to_owned(),
        }
    }
}

/// Overlay command configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Role name callers must hold.
    pub moderator_role: String,
    /// What `set_media` does without a URL or attachment.
    pub missing_media: MissingMediaPolicy,
    /// Buffer size of the in-process broadcast channel.
    pub broadcast_capacity: usize,
    /// Reply texts.
    pub acknowledgements: AcknowledgementTemplates,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            moderator_role: DEFAULT_MODERATOR_ROLE.to_owned(),
            missing_media: MissingMediaPolicy::default(),
            broadcast_capacity: DEFAULT_BROADCAST_CAPACITY,
            acknowledgements: AcknowledgementTemplates::default(),
        }
    }
}

impl OverlayConfig {
    /// Loads configuration from the process environment.
    ///
    /// When `OVERLAY_CONFIG` names a file it is loaded first; the remaining
    /// variables then override individual settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be loaded or a variable
    /// holds an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration using `lookup` in place of the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be loaded or a variable
    /// holds an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base = match lookup(CONFIG_PATH_VAR) {
            Some(path) if !path.trim().is_empty() => Self::open(Utf8Path::new(path.trim()))?,
            _ => Self::default(),
        };
        base.with_overrides(lookup)
    }

    /// Opens a JSON configuration file by path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read or parsed.
    pub fn open(path: &Utf8Path) -> Result<Self, ConfigError> {
        let read_error = |source| ConfigError::Read {
            path: path.to_string(),
            source,
        };
        let parent = match path.parent() {
            Some(parent) if !parent.as_str().is_empty() => parent,
            _ => Utf8Path::new("."),
        };
        let file_name = path.file_name().ok_or_else(|| ConfigError::InvalidValue {
            key: CONFIG_PATH_VAR.to_owned(),
            reason: format!("'{path}' does not name a file"),
        })?;
        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
        Self::load(&dir, Utf8Path::new(file_name))
    }

    /// Loads a JSON configuration file relative to `dir`.
    ///
    /// Missing settings take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read, parsed, or holds
    /// invalid values.
    pub fn load(dir: &Dir, path: &Utf8Path) -> Result<Self, ConfigError> {
        let contents = dir.read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        let config: Self = serde_json::from_str(&contents).map_err(|error| ConfigError::Parse {
            path: path.to_string(),
            reason: error.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Applies variable overrides on top of this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when an override is invalid.
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(role) = lookup(MODERATOR_ROLE_VAR) {
            self.moderator_role = role.trim().to_owned();
        }
        if let Some(policy) = lookup(MISSING_MEDIA_VAR) {
            self.missing_media =
                MissingMediaPolicy::try_from(policy.as_str()).map_err(|value| {
                    ConfigError::InvalidValue {
                        key: MISSING_MEDIA_VAR.to_owned(),
                        reason: format!("expected publish_null or reject, got '{value}'"),
                    }
                })?;
        }
        if let Some(capacity) = lookup(BROADCAST_CAPACITY_VAR) {
            self.broadcast_capacity =
                capacity
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue {
                        key: BROADCAST_CAPACITY_VAR.to_owned(),
                        reason: format!("expected a positive integer, got '{capacity}'"),
                    })?;
        }
        self.validate()?;
        Ok(self)
    }

    /// Checks settings that have no valid default fallback.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a blank role or a zero
    /// broadcast capacity.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.moderator_role.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "moderator_role".to_owned(),
                reason: "role name must not be blank".to_owned(),
            });
        }
        if self.broadcast_capacity == 0 {
            return Err(ConfigError::InvalidValue {
                key: "broadcast_capacity".to_owned(),
                reason: "capacity must be at least 1".to_owned(),
            });
        }
        Ok(())
    }
}
