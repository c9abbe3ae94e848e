//! Partial overlay updates and their broadcast envelope.

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use uuid::Uuid;

use super::OverlayConfigurationError;

/// Value carried by a single patch entry.
///
/// `Null` explicitly clears the field on the receiving overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OverlayValue {
    /// Clears the field.
    Null,
    /// Boolean flag, such as `display`.
    Boolean(bool),
    /// Integer value, such as a timer duration in seconds.
    Integer(i64),
    /// Text or URL value.
    Text(String),
}

impl OverlayValue {
    /// Returns the JSON form of the value.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Boolean(flag) => Value::Bool(*flag),
            Self::Integer(number) => Value::from(*number),
            Self::Text(text) => Value::String(text.clone()),
        }
    }

    /// Returns `true` when the value clears its field.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<String> for OverlayValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for OverlayValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<i64> for OverlayValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for OverlayValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<Option<String>> for OverlayValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Null, Self::Text)
    }
}

/// A partial overlay update: only the keys present are changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OverlayPatch(BTreeMap<String, OverlayValue>);

impl OverlayPatch {
    /// Creates an empty patch.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Creates a patch holding one entry.
    #[must_use]
    pub fn single(key: impl Into<String>, value: impl Into<OverlayValue>) -> Self {
        Self::new().with_value(key, value)
    }

    /// Adds or replaces an entry.
    #[must_use]
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<OverlayValue>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&OverlayValue> {
        self.0.get(key)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OverlayValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Returns the keys touched by this patch.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }

    /// Returns the patch as a flat JSON object.
    #[must_use]
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.0
                .iter()
                .map(|(key, value)| (key.clone(), value.to_json()))
                .collect::<Map<String, Value>>(),
        )
    }

    /// Parses a full overlay configuration pasted as JSON.
    ///
    /// The input must be a non-empty JSON object whose values are strings,
    /// integers, booleans or `null`.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayConfigurationError`] when the text is not JSON, is not
    /// an object, is empty, or holds an unsupported value.
    pub fn from_json_str(raw: &str) -> Result<Self, OverlayConfigurationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(OverlayConfigurationError::Empty);
        }

        let parsed: Value = serde_json::from_str(trimmed)
            .map_err(|error| OverlayConfigurationError::InvalidJson(error.to_string()))?;
        let Value::Object(entries) = parsed else {
            return Err(OverlayConfigurationError::NotAnObject);
        };
        if entries.is_empty() {
            return Err(OverlayConfigurationError::Empty);
        }

        entries
            .into_iter()
            .try_fold(Self::new(), |patch, (key, value)| {
                if key.trim().is_empty() {
                    return Err(OverlayConfigurationError::EmptyKey);
                }
                let converted = convert_json_value(&key, value)?;
                Ok(patch.with_value(key, converted))
            })
    }
}

fn convert_json_value(key: &str, value: Value) -> Result<OverlayValue, OverlayConfigurationError> {
    match value {
        Value::Null => Ok(OverlayValue::Null),
        Value::Bool(flag) => Ok(OverlayValue::Boolean(flag)),
        Value::String(text) => Ok(OverlayValue::Text(text)),
        Value::Number(number) => {
            number
                .as_i64()
                .map(OverlayValue::Integer)
                .ok_or_else(|| OverlayConfigurationError::UnsupportedValue {
                    key: key.to_owned(),
                    reason: "numbers must be integers".to_owned(),
                })
        }
        Value::Array(_) | Value::Object(_) => Err(OverlayConfigurationError::UnsupportedValue {
            key: key.to_owned(),
            reason: "expected a string, integer, boolean or null".to_owned(),
        }),
    }
}

/// A patch stamped for delivery to overlay subscribers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayUpdate {
    /// Unique update identifier.
    pub id: Uuid,
    /// When the update was issued.
    pub issued_at: DateTime<Utc>,
    /// The patch to apply.
    pub patch: OverlayPatch,
}

impl OverlayUpdate {
    /// Stamps a patch with a fresh identifier and the current time.
    #[must_use]
    pub fn new(patch: OverlayPatch, clock: &impl Clock) -> Self {
        Self {
            id: Uuid::new_v4(),
            issued_at: clock.utc(),
            patch,
        }
    }
}
