//! Closed enumerations used by tracking pixels and media files.
//!
//! Values outside the VAST 2.0 sets are carried through untouched as
//! `Other`, so documents from newer producers still decode.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Tracking event names
/// VAST Version 2 Final, pages 13 and 14.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TrackingEvent {
    /// Creative (companion or non-linear) is displayed
    CreativeView,
    /// Linear creative starts playing
    Start,
    /// Linear creative reaches 50% of its duration
    Midpoint,
    /// Linear creative reaches 25% of its duration
    FirstQuartile,
    /// Linear creative reaches 75% of its duration
    ThirdQuartile,
    /// Linear creative plays to the end
    Complete,
    Mute,
    Unmute,
    Pause,
    Rewind,
    Resume,
    Fullscreen,
    /// Non-linear creative is expanded
    Expand,
    /// Non-linear creative is collapsed
    Collapse,
    /// Viewer accepts an invitation to interact with a non-linear creative
    AcceptInvitation,
    /// Viewer closes a non-linear creative
    Close,
    /// Any other value, including the empty string.
    Other(String),
}

impl TrackingEvent {
    pub const ALL: [TrackingEvent; 16] = [
        TrackingEvent::CreativeView,
        TrackingEvent::Start,
        TrackingEvent::Midpoint,
        TrackingEvent::FirstQuartile,
        TrackingEvent::ThirdQuartile,
        TrackingEvent::Complete,
        TrackingEvent::Mute,
        TrackingEvent::Unmute,
        TrackingEvent::Pause,
        TrackingEvent::Rewind,
        TrackingEvent::Resume,
        TrackingEvent::Fullscreen,
        TrackingEvent::Expand,
        TrackingEvent::Collapse,
        TrackingEvent::AcceptInvitation,
        TrackingEvent::Close,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            TrackingEvent::CreativeView => "creativeView",
            TrackingEvent::Start => "start",
            TrackingEvent::Midpoint => "midpoint",
            TrackingEvent::FirstQuartile => "firstQuartile",
            TrackingEvent::ThirdQuartile => "thirdQuartile",
            TrackingEvent::Complete => "complete",
            TrackingEvent::Mute => "mute",
            TrackingEvent::Unmute => "unmute",
            TrackingEvent::Pause => "pause",
            TrackingEvent::Rewind => "rewind",
            TrackingEvent::Resume => "resume",
            TrackingEvent::Fullscreen => "fullscreen",
            TrackingEvent::Expand => "expand",
            TrackingEvent::Collapse => "collapse",
            TrackingEvent::AcceptInvitation => "acceptInvitation",
            TrackingEvent::Close => "close",
            TrackingEvent::Other(value) => value,
        }
    }

    /// Whether this is one of the sixteen VAST 2.0 events
    pub fn is_known(&self) -> bool {
        !matches!(self, TrackingEvent::Other(_))
    }
}

impl Default for TrackingEvent {
    fn default() -> Self {
        TrackingEvent::Other(String::new())
    }
}

impl From<&str> for TrackingEvent {
    fn from(value: &str) -> Self {
        match value {
            "creativeView" => TrackingEvent::CreativeView,
            "start" => TrackingEvent::Start,
            "midpoint" => TrackingEvent::Midpoint,
            "firstQuartile" => TrackingEvent::FirstQuartile,
            "thirdQuartile" => TrackingEvent::ThirdQuartile,
            "complete" => TrackingEvent::Complete,
            "mute" => TrackingEvent::Mute,
            "unmute" => TrackingEvent::Unmute,
            "pause" => TrackingEvent::Pause,
            "rewind" => TrackingEvent::Rewind,
            "resume" => TrackingEvent::Resume,
            "fullscreen" => TrackingEvent::Fullscreen,
            "expand" => TrackingEvent::Expand,
            "collapse" => TrackingEvent::Collapse,
            "acceptInvitation" => TrackingEvent::AcceptInvitation,
            "close" => TrackingEvent::Close,
            other => TrackingEvent::Other(other.to_string()),
        }
    }
}

impl From<String> for TrackingEvent {
    fn from(value: String) -> Self {
        match TrackingEvent::from(value.as_str()) {
            TrackingEvent::Other(_) => TrackingEvent::Other(value),
            known => known,
        }
    }
}

impl From<TrackingEvent> for String {
    fn from(event: TrackingEvent) -> Self {
        match event {
            TrackingEvent::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for TrackingEvent {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TrackingEvent::from(s))
    }
}

impl fmt::Display for TrackingEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Media file delivery method
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Delivery {
    Streaming,
    Progressive,
    /// Any other value, including the empty string.
    Other(String),
}

impl Delivery {
    pub const ALL: [Delivery; 2] = [Delivery::Streaming, Delivery::Progressive];

    pub fn as_str(&self) -> &str {
        match self {
            Delivery::Streaming => "streaming",
            Delivery::Progressive => "progressive",
            Delivery::Other(value) => value,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Delivery::Other(_))
    }
}

impl Default for Delivery {
    fn default() -> Self {
        Delivery::Other(String::new())
    }
}

impl From<&str> for Delivery {
    fn from(value: &str) -> Self {
        match value {
            "streaming" => Delivery::Streaming,
            "progressive" => Delivery::Progressive,
            other => Delivery::Other(other.to_string()),
        }
    }
}

impl From<String> for Delivery {
    fn from(value: String) -> Self {
        match value.as_str() {
            "streaming" => Delivery::Streaming,
            "progressive" => Delivery::Progressive,
            _ => Delivery::Other(value),
        }
    }
}

impl From<Delivery> for String {
    fn from(delivery: Delivery) -> Self {
        match delivery {
            Delivery::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for Delivery {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Delivery::from(s))
    }
}

impl fmt::Display for Delivery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
