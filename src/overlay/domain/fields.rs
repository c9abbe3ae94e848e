//! Closed sets of overlay field identifiers.
//!
//! Each enumeration backs the choice list of one command parameter, so a
//! value outside the set is rejected before any handler runs.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ParseFieldError;

/// Overlay fields that accept free-form text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextField {
    /// Main overlay title.
    Title,
    /// Left-hand header text.
    HeaderLeft,
    /// Right-hand header text.
    HeaderRight,
    /// Ticker text scrolling along the overlay.
    ScrollingText,
    /// First side banner line.
    SideBannerTextOne,
    /// Second side banner line.
    SideBannerTextTwo,
    /// Third side banner line.
    SideBannerTextThree,
}

impl TextField {
    /// Every text field, in choice-list order.
    pub const ALL: [Self; 7] = [
        Self::Title,
        Self::HeaderLeft,
        Self::HeaderRight,
        Self::ScrollingText,
        Self::SideBannerTextOne,
        Self::SideBannerTextTwo,
        Self::SideBannerTextThree,
    ];

    /// Returns the identifier used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::HeaderLeft => "headerLeft",
            Self::HeaderRight => "headerRight",
            Self::ScrollingText => "scrollingText",
            Self::SideBannerTextOne => "sideBannerTextOne",
            Self::SideBannerTextTwo => "sideBannerTextTwo",
            Self::SideBannerTextThree => "sideBannerTextThree",
        }
    }
}

impl fmt::Display for TextField {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TextField {
    type Error = ParseFieldError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == trimmed)
            .ok_or_else(|| ParseFieldError::new("text field", value))
    }
}

/// Overlay fields that hold a media URL (image or video).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MediaField {
    /// Main overlay title, rendered as an image.
    Title,
    /// Icon shown in the header.
    HeaderIcon,
    /// Icon shown in the side banner.
    SideBannerIcon,
    /// Looping background video.
    BackgroundVideo,
    /// Video played before the overlay appears.
    PreRollVideo,
}

impl MediaField {
    /// Every media field, in choice-list order.
    pub const ALL: [Self; 5] = [
        Self::Title,
        Self::HeaderIcon,
        Self::SideBannerIcon,
        Self::BackgroundVideo,
        Self::PreRollVideo,
    ];

    /// Returns the identifier used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::HeaderIcon => "headerIcon",
            Self::SideBannerIcon => "sideBannerIcon",
            Self::BackgroundVideo => "backgroundVideo",
            Self::PreRollVideo => "preRollVideo",
        }
    }
}

impl fmt::Display for MediaField {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for MediaField {
    type Error = ParseFieldError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == trimmed)
            .ok_or_else(|| ParseFieldError::new("media field", value))
    }
}

/// Every clearable overlay field: text fields, media fields and the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OverlayField {
    /// Main overlay title.
    Title,
    /// Countdown timer.
    Timer,
    /// Left-hand header text.
    HeaderLeft,
    /// Right-hand header text.
    HeaderRight,
    /// Ticker text scrolling along the overlay.
    ScrollingText,
    /// First side banner line.
    SideBannerTextOne,
    /// Second side banner line.
    SideBannerTextTwo,
    /// Third side banner line.
    SideBannerTextThree,
    /// Icon shown in the header.
    HeaderIcon,
    /// Icon shown in the side banner.
    SideBannerIcon,
    /// Looping background video.
    BackgroundVideo,
    /// Video played before the overlay appears.
    PreRollVideo,
}

impl OverlayField {
    /// Every overlay field, in choice-list order.
    pub const ALL: [Self; 12] = [
        Self::Title,
        Self::Timer,
        Self::HeaderLeft,
        Self::HeaderRight,
        Self::ScrollingText,
        Self::SideBannerTextOne,
        Self::SideBannerTextTwo,
        Self::SideBannerTextThree,
        Self::HeaderIcon,
        Self::SideBannerIcon,
        Self::BackgroundVideo,
        Self::PreRollVideo,
    ];

    /// Returns the identifier used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Timer => "timer",
            Self::HeaderLeft => "headerLeft",
            Self::HeaderRight => "headerRight",
            Self::ScrollingText => "scrollingText",
            Self::SideBannerTextOne => "sideBannerTextOne",
            Self::SideBannerTextTwo => "sideBannerTextTwo",
            Self::SideBannerTextThree => "sideBannerTextThree",
            Self::HeaderIcon => "headerIcon",
            Self::SideBannerIcon => "sideBannerIcon",
            Self::BackgroundVideo => "backgroundVideo",
            Self::PreRollVideo => "preRollVideo",
        }
    }
}

impl fmt::Display for OverlayField {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for OverlayField {
    type Error = ParseFieldError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == trimmed)
            .ok_or_else(|| ParseFieldError::new("overlay field", value))
    }
}

impl From<TextField> for OverlayField {
    fn from(field: TextField) -> Self {
        match field {
            TextField::Title => Self::Title,
            TextField::HeaderLeft => Self::HeaderLeft,
            TextField::HeaderRight => Self::HeaderRight,
            TextField::ScrollingText => Self::ScrollingText,
            TextField::SideBannerTextOne => Self::SideBannerTextOne,
            TextField::SideBannerTextTwo => Self::SideBannerTextTwo,
            TextField::SideBannerTextThree => Self::SideBannerTextThree,
        }
    }
}

impl From<MediaField> for OverlayField {
    fn from(field: MediaField) -> Self {
        match field {
            MediaField::Title => Self::Title,
            MediaField::HeaderIcon => Self::HeaderIcon,
            MediaField::SideBannerIcon => Self::SideBannerIcon,
            MediaField::BackgroundVideo => Self::BackgroundVideo,
            MediaField::PreRollVideo => Self::PreRollVideo,
        }
    }
}

/// Two-valued display toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Switch {
    /// Show the overlay.
    On,
    /// Hide the overlay.
    Off,
}

impl Switch {
    /// Both switch states, in choice-list order.
    pub const ALL: [Self; 2] = [Self::On, Self::Off];

    /// Returns the identifier used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
        }
    }

    /// Returns whether the overlay should be displayed.
    #[must_use]
    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

impl fmt::Display for Switch {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Switch {
    type Error = ParseFieldError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "on" => Ok(Self::On),
            "off" => Ok(Self::Off),
            _ => Err(ParseFieldError::new("switch state", value)),
        }
    }
}
