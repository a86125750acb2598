//! VAST 2.0 document model.
//!
//! Each type is a plain value and carries its own XML field table as an
//! [`XmlNode`] impl placed right after the definition. Field declaration
//! order is the emission order required by the VAST 2.0 schema.

use std::io::Write;

use quick_xml::events::BytesStart;
use serde::{Deserialize, Serialize};

use crate::codec::{convert, Attributes, Decoder, Encoder, Presence, XmlNode};
use crate::enums::{Delivery, TrackingEvent};
use crate::error::Result;

/// Represents a VAST document (Video Ad Serving Template)
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Clone)]
pub struct Vast {
    /// The VAST version, emitted even when empty
    pub version: String,

    /// The Ad elements within the VAST document
    pub ads: Vec<Ad>,
}

impl Vast {
    pub fn new(version: impl Into<String>) -> Self {
        Vast {
            version: version.into(),
            ads: Vec::new(),
        }
    }
}

impl XmlNode for Vast {
    const TAG: &'static str = "VAST";

    fn encode_attributes(&self, attributes: &mut Attributes) {
        attributes.push("version", &self.version, Presence::Always);
    }

    fn encode_body<W: Write>(&self, encoder: &mut Encoder<W>) -> Result<()> {
        encoder.nodes(&self.ads)
    }

    fn decode_attribute(&mut self, name: &[u8], value: &str) -> Result<()> {
        if name == b"version" {
            self.version = value.to_string();
        }
        Ok(())
    }

    fn decode_child(&mut self, decoder: &mut Decoder<'_>, child: &BytesStart<'_>) -> Result<bool> {
        match child.local_name().as_ref() {
            b"Ad" => self.ads.push(decoder.node(child)?),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

/// Represents an Ad within a VAST document.
///
/// VAST expects exactly one of `inline` and `wrapper`. The model accepts
/// any combination; `Ad::kind` checks it on request.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Clone)]
pub struct Ad {
    /// The ad ID, emitted even when empty
    pub id: String,

    /// The in-line ad details
    pub inline: Option<InLine>,

    /// The wrapper ad details
    pub wrapper: Option<Wrapper>,
}

impl XmlNode for Ad {
    const TAG: &'static str = "Ad";

    fn encode_attributes(&self, attributes: &mut Attributes) {
        attributes.push("id", &self.id, Presence::Always);
    }

    fn encode_body<W: Write>(&self, encoder: &mut Encoder<W>) -> Result<()> {
        encoder.optional(self.inline.as_ref())?;
        encoder.optional(self.wrapper.as_ref())
    }

    fn decode_attribute(&mut self, name: &[u8], value: &str) -> Result<()> {
        if name == b"id" {
            self.id = value.to_string();
        }
        Ok(())
    }

    fn decode_child(&mut self, decoder: &mut Decoder<'_>, child: &BytesStart<'_>) -> Result<bool> {
        match child.local_name().as_ref() {
            b"InLine" => self.inline = Some(decoder.node(child)?),
            b"Wrapper" => self.wrapper = Some(decoder.node(child)?),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

/// Represents an InLine ad, which contains all the media files and tracking information
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Clone)]
pub struct InLine {
    /// The ad title, emitted even when empty
    pub ad_title: String,
    /// A longer description of the ad
    pub description: String,
    /// The survey URL
    pub survey: String,
    /// The error tracking URL
    pub error: String,
    /// The ad server that returned the ad
    pub ad_system: AdSystem,
    /// Impression tracking URLs, in document order
    pub impressions: Vec<Impression>,
    /// The creatives of this ad
    pub creatives: Creatives,
    /// Custom extensions, if any
    pub extensions: Option<Extensions>,
}

impl XmlNode for InLine {
    const TAG: &'static str = "InLine";

    fn encode_body<W: Write>(&self, encoder: &mut Encoder<W>) -> Result<()> {
        encoder.element("AdTitle", &self.ad_title, Presence::Always)?;
        encoder.element("Description", &self.description, Presence::OmitEmpty)?;
        encoder.element("Survey", &self.survey, Presence::OmitEmpty)?;
        encoder.element("Error", &self.error, Presence::OmitEmpty)?;
        encoder.node(&self.ad_system)?;
        encoder.nodes(&self.impressions)?;
        encoder.node(&self.creatives)?;
        encoder.optional(self.extensions.as_ref())
    }

    fn decode_child(&mut self, decoder: &mut Decoder<'_>, child: &BytesStart<'_>) -> Result<bool> {
        match child.local_name().as_ref() {
            b"AdTitle" => self.ad_title = decoder.text(child)?,
            b"Description" => self.description = decoder.text(child)?,
            b"Survey" => self.survey = decoder.text(child)?,
            b"Error" => self.error = decoder.text(child)?,
            b"AdSystem" => self.ad_system = decoder.node(child)?,
            b"Impression" => self.impressions.push(decoder.node(child)?),
            b"Creatives" => self.creatives = decoder.node(child)?,
            b"Extensions" => self.extensions = Some(decoder.node(child)?),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

/// Represents a Wrapper ad, which references another VAST document
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Clone)]
pub struct Wrapper {
    /// The URL of the next VAST document
    pub vast_ad_tag_uri: String,
    /// The error tracking URL
    pub error: String,
    /// The ad server that returned the wrapper
    pub ad_system: AdSystem,
    /// Impression tracking URLs fired in addition to the wrapped ad
    pub impressions: Vec<Impression>,
    /// Tracking-only creatives of the wrapper
    pub creatives: Creatives,
    /// Custom extensions, if any
    pub extensions: Option<Extensions>,
}

impl XmlNode for Wrapper {
    const TAG: &'static str = "Wrapper";

    fn encode_body<W: Write>(&self, encoder: &mut Encoder<W>) -> Result<()> {
        encoder.element("VASTAdTagURI", &self.vast_ad_tag_uri, Presence::Always)?;
        encoder.element("Error", &self.error, Presence::OmitEmpty)?;
        encoder.node(&self.ad_system)?;
        encoder.nodes(&self.impressions)?;
        encoder.node(&self.creatives)?;
        encoder.optional(self.extensions.as_ref())
    }

    fn decode_child(&mut self, decoder: &mut Decoder<'_>, child: &BytesStart<'_>) -> Result<bool> {
        match child.local_name().as_ref() {
            b"VASTAdTagURI" => self.vast_ad_tag_uri = decoder.text(child)?,
            b"Error" => self.error = decoder.text(child)?,
            b"AdSystem" => self.ad_system = decoder.node(child)?,
            b"Impression" => self.impressions.push(decoder.node(child)?),
            b"Creatives" => self.creatives = decoder.node(child)?,
            b"Extensions" => self.extensions = Some(decoder.node(child)?),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

/// Represents the ad system information
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Clone)]
pub struct AdSystem {
    /// The ad system version
    pub version: String,
    /// The ad system name, carried as element text
    pub name: String,
}

impl AdSystem {
    pub fn new(name: impl Into<String>) -> Self {
        AdSystem {
            version: String::new(),
            name: name.into(),
        }
    }
}

impl XmlNode for AdSystem {
    const TAG: &'static str = "AdSystem";

    fn encode_attributes(&self, attributes: &mut Attributes) {
        attributes.push("version", &self.version, Presence::OmitEmpty);
    }

    fn encode_body<W: Write>(&self, encoder: &mut Encoder<W>) -> Result<()> {
        encoder.text(&self.name)
    }

    fn decode_attribute(&mut self, name: &[u8], value: &str) -> Result<()> {
        if name == b"version" {
            self.version = value.to_string();
        }
        Ok(())
    }

    fn decode_text(&mut self, text: String) {
        self.name = text;
    }
}

/// Represents an impression tracking URL
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Clone)]
pub struct Impression {
    /// Optional impression identifier
    pub id: String,
    /// The tracking URL
    pub url: String,
}

impl Impression {
    pub fn new(url: impl Into<String>) -> Self {
        Impression {
            id: String::new(),
            url: url.into(),
        }
    }
}

impl XmlNode for Impression {
    const TAG: &'static str = "Impression";

    fn encode_attributes(&self, attributes: &mut Attributes) {
        attributes.push("id", &self.id, Presence::OmitEmpty);
    }

    fn encode_body<W: Write>(&self, encoder: &mut Encoder<W>) -> Result<()> {
        encoder.text(&self.url)
    }

    fn decode_attribute(&mut self, name: &[u8], value: &str) -> Result<()> {
        if name == b"id" {
            self.id = value.to_string();
        }
        Ok(())
    }

    fn decode_text(&mut self, text: String) {
        self.url = text;
    }
}

#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Clone)]
pub struct Creatives {
    pub creatives: Vec<Creative>,
}

impl XmlNode for Creatives {
    const TAG: &'static str = "Creatives";

    fn encode_body<W: Write>(&self, encoder: &mut Encoder<W>) -> Result<()> {
        encoder.nodes(&self.creatives)
    }

    fn decode_child(&mut self, decoder: &mut Decoder<'_>, child: &BytesStart<'_>) -> Result<bool> {
        match child.local_name().as_ref() {
            b"Creative" => self.creatives.push(decoder.node(child)?),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

/// Represents a creative element.
///
/// At most one of `linear`, `companion_ads` and `non_linear_ads` is expected.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Clone)]
pub struct Creative {
    /// The creative ID
    pub id: String,
    /// The creative sequence number, 0 when absent
    pub sequence: i64,
    /// The `AdID` attribute
    pub ad_id: String,
    /// Linear creative
    pub linear: Option<Linear>,
    /// Companion creatives
    pub companion_ads: Option<CompanionAds>,
    /// Non-linear creatives
    pub non_linear_ads: Option<NonLinearAds>,
}

impl XmlNode for Creative {
    const TAG: &'static str = "Creative";

    fn encode_attributes(&self, attributes: &mut Attributes) {
        attributes.push("id", &self.id, Presence::OmitEmpty);
        attributes.push("sequence", &self.sequence, Presence::OmitEmpty);
        attributes.push("AdID", &self.ad_id, Presence::OmitEmpty);
    }

    fn encode_body<W: Write>(&self, encoder: &mut Encoder<W>) -> Result<()> {
        encoder.optional(self.linear.as_ref())?;
        encoder.optional(self.companion_ads.as_ref())?;
        encoder.optional(self.non_linear_ads.as_ref())
    }

    fn decode_attribute(&mut self, name: &[u8], value: &str) -> Result<()> {
        match name {
            b"id" => self.id = value.to_string(),
            b"sequence" => self.sequence = convert(Self::TAG, "sequence", value)?,
            b"AdID" => self.ad_id = value.to_string(),
            _ => (),
        }
        Ok(())
    }

    fn decode_child(&mut self, decoder: &mut Decoder<'_>, child: &BytesStart<'_>) -> Result<bool> {
        match child.local_name().as_ref() {
            b"Linear" => self.linear = Some(decoder.node(child)?),
            b"CompanionAds" => self.companion_ads = Some(decoder.node(child)?),
            b"NonLinearAds" => self.non_linear_ads = Some(decoder.node(child)?),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

/// Represents a linear ad
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Clone)]
pub struct Linear {
    /// The duration of the ad, `HH:MM:SS`
    pub duration: String,
    /// Data passed to the ad unit
    pub ad_parameters: String,
    /// Tracking events for the linear creative
    pub tracking_events: Option<TrackingEvents>,
    /// Click-through and click tracking URLs
    pub video_clicks: Option<VideoClicks>,
    /// The media renditions, emitted even when empty
    pub media_files: MediaFiles,
}

impl XmlNode for Linear {
    const TAG: &'static str = "Linear";

    fn encode_body<W: Write>(&self, encoder: &mut Encoder<W>) -> Result<()> {
        encoder.element("Duration", &self.duration, Presence::Always)?;
        encoder.element("AdParameters", &self.ad_parameters, Presence::OmitEmpty)?;
        encoder.optional(self.tracking_events.as_ref())?;
        encoder.optional(self.video_clicks.as_ref())?;
        encoder.node(&self.media_files)
    }

    fn decode_child(&mut self, decoder: &mut Decoder<'_>, child: &BytesStart<'_>) -> Result<bool> {
        match child.local_name().as_ref() {
            b"Duration" => self.duration = decoder.text(child)?,
            b"AdParameters" => self.ad_parameters = decoder.text(child)?,
            b"TrackingEvents" => self.tracking_events = Some(decoder.node(child)?),
            b"VideoClicks" => self.video_clicks = Some(decoder.node(child)?),
            b"MediaFiles" => self.media_files = decoder.node(child)?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}

#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Clone)]
pub struct TrackingEvents {
    pub tracking: Vec<Tracking>,
}

impl XmlNode for TrackingEvents {
    const TAG: &'static str = "TrackingEvents";

    fn encode_body<W: Write>(&self, encoder: &mut Encoder<W>) -> Result<()> {
        encoder.nodes(&self.tracking)
    }

    fn decode_child(&mut self, decoder: &mut Decoder<'_>, child: &BytesStart<'_>) -> Result<bool> {
        match child.local_name().as_ref() {
            b"Tracking" => self.tracking.push(decoder.node(child)?),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

/// Represents a tracking pixel fired on a player event
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Clone)]
pub struct Tracking {
    /// The event that fires this tracking URL
    pub event: TrackingEvent,
    /// The tracking URL
    pub url: String,
}

impl Tracking {
    pub fn new(event: TrackingEvent, url: impl Into<String>) -> Self {
        Tracking {
            event,
            url: url.into(),
        }
    }
}

impl XmlNode for Tracking {
    const TAG: &'static str = "Tracking";

    fn encode_attributes(&self, attributes: &mut Attributes) {
        attributes.push("event", &self.event, Presence::Always);
    }

    fn encode_body<W: Write>(&self, encoder: &mut Encoder<W>) -> Result<()> {
        encoder.text(&self.url)
    }

    fn decode_attribute(&mut self, name: &[u8], value: &str) -> Result<()> {
        if name == b"event" {
            self.event = convert(Self::TAG, "event", value)?;
        }
        Ok(())
    }

    fn decode_text(&mut self, text: String) {
        self.url = text;
    }
}

/// Represents video click-through and click-tracking URLs
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Clone)]
pub struct VideoClicks {
    /// The landing page URL
    pub click_through: String,
    /// The click tracking URL
    pub click_tracking: String,
    /// A custom click URL
    pub custom_click: Option<CustomClick>,
}

impl XmlNode for VideoClicks {
    const TAG: &'static str = "VideoClicks";

    fn encode_body<W: Write>(&self, encoder: &mut Encoder<W>) -> Result<()> {
        encoder.element("ClickThrough", &self.click_through, Presence::OmitEmpty)?;
        encoder.element("ClickTracking", &self.click_tracking, Presence::OmitEmpty)?;
        encoder.optional(self.custom_click.as_ref())
    }

    fn decode_child(&mut self, decoder: &mut Decoder<'_>, child: &BytesStart<'_>) -> Result<bool> {
        match child.local_name().as_ref() {
            b"ClickThrough" => self.click_through = decoder.text(child)?,
            b"ClickTracking" => self.click_tracking = decoder.text(child)?,
            b"CustomClick" => self.custom_click = Some(decoder.node(child)?),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Clone)]
pub struct CustomClick {
    /// The custom click identifier
    pub id: String,
    /// The custom click URL
    pub url: String,
}

impl CustomClick {
    pub fn new(url: impl Into<String>) -> Self {
        CustomClick {
            id: String::new(),
            url: url.into(),
        }
    }
}

impl XmlNode for CustomClick {
    const TAG: &'static str = "CustomClick";

    fn encode_attributes(&self, attributes: &mut Attributes) {
        attributes.push("id", &self.id, Presence::OmitEmpty);
    }

    fn encode_body<W: Write>(&self, encoder: &mut Encoder<W>) -> Result<()> {
        encoder.text(&self.url)
    }

    fn decode_attribute(&mut self, name: &[u8], value: &str) -> Result<()> {
        if name == b"id" {
            self.id = value.to_string();
        }
        Ok(())
    }

    fn decode_text(&mut self, text: String) {
        self.url = text;
    }
}

#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Clone)]
pub struct MediaFiles {
    pub media_files: Vec<MediaFile>,
}

impl XmlNode for MediaFiles {
    const TAG: &'static str = "MediaFiles";

    fn encode_body<W: Write>(&self, encoder: &mut Encoder<W>) -> Result<()> {
        encoder.nodes(&self.media_files)
    }

    fn decode_child(&mut self, decoder: &mut Decoder<'_>, child: &BytesStart<'_>) -> Result<bool> {
        match child.local_name().as_ref() {
            b"MediaFile" => self.media_files.push(decoder.node(child)?),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

/// Represents a media file
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Clone)]
pub struct MediaFile {
    /// The media file ID
    pub id: String,
    /// Delivery method, emitted even when empty
    pub delivery: Delivery,
    /// The MIME type, the `type` attribute
    pub mime_type: String,
    /// The bitrate in Kbps, 0 when absent
    pub bitrate: i64,
    /// Width in pixels
    pub width: i64,
    /// Height in pixels
    pub height: i64,
    /// Whether the media may be scaled
    pub scalable: bool,
    /// Whether scaling must keep the aspect ratio
    pub maintain_aspect_ratio: bool,
    /// The API framework needed to run the file, e.g. `VPAID`
    pub api_framework: String,
    /// The media file URL
    pub url: String,
}

impl XmlNode for MediaFile {
    const TAG: &'static str = "MediaFile";

    fn encode_attributes(&self, attributes: &mut Attributes) {
        attributes.push("id", &self.id, Presence::OmitEmpty);
        attributes.push("delivery", &self.delivery, Presence::Always);
        attributes.push("type", &self.mime_type, Presence::Always);
        attributes.push("bitrate", &self.bitrate, Presence::OmitEmpty);
        attributes.push("width", &self.width, Presence::Always);
        attributes.push("height", &self.height, Presence::Always);
        attributes.push("scalable", &self.scalable, Presence::OmitEmpty);
        attributes.push("maintainAspectRatio", &self.maintain_aspect_ratio, Presence::OmitEmpty);
        attributes.push("apiFramework", &self.api_framework, Presence::OmitEmpty);
    }

    fn encode_body<W: Write>(&self, encoder: &mut Encoder<W>) -> Result<()> {
        encoder.text(&self.url)
    }

    fn decode_attribute(&mut self, name: &[u8], value: &str) -> Result<()> {
        match name {
            b"id" => self.id = value.to_string(),
            b"delivery" => self.delivery = convert(Self::TAG, "delivery", value)?,
            b"type" => self.mime_type = value.to_string(),
            b"bitrate" => self.bitrate = convert(Self::TAG, "bitrate", value)?,
            b"width" => self.width = convert(Self::TAG, "width", value)?,
            b"height" => self.height = convert(Self::TAG, "height", value)?,
            b"scalable" => self.scalable = convert(Self::TAG, "scalable", value)?,
            b"maintainAspectRatio" => {
                self.maintain_aspect_ratio = convert(Self::TAG, "maintainAspectRatio", value)?
            }
            b"apiFramework" => self.api_framework = value.to_string(),
            _ => (),
        }
        Ok(())
    }

    fn decode_text(&mut self, text: String) {
        self.url = text;
    }
}

#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Clone)]
pub struct CompanionAds {
    pub companions: Vec<Companion>,
}

impl XmlNode for CompanionAds {
    const TAG: &'static str = "CompanionAds";

    fn encode_body<W: Write>(&self, encoder: &mut Encoder<W>) -> Result<()> {
        encoder.nodes(&self.companions)
    }

    fn decode_child(&mut self, decoder: &mut Decoder<'_>, child: &BytesStart<'_>) -> Result<bool> {
        match child.local_name().as_ref() {
            b"Companion" => self.companions.push(decoder.node(child)?),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

/// Represents a companion banner ad
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Clone)]
pub struct Companion {
    /// The companion ID
    pub id: String,
    /// Width in pixels
    pub width: i64,
    /// Height in pixels
    pub height: i64,
    /// Expanded width in pixels, 0 when absent
    pub expanded_width: i64,
    /// Expanded height in pixels, 0 when absent
    pub expanded_height: i64,
    /// The API framework needed to run the resource
    pub api_framework: String,
    /// URL of an iframe resource
    pub iframe_resource: String,
    /// HTML snippet, escaped on output
    pub html_resource: String,
    /// The landing page URL
    pub companion_click_through: String,
    /// Alternative text for the companion
    pub alt_text: String,
    /// Data passed to the companion
    pub ad_parameters: String,
    /// A static image or script resource
    pub static_resource: Option<StaticResource>,
    /// Tracking events for the companion
    pub tracking_events: Option<TrackingEvents>,
}

impl XmlNode for Companion {
    const TAG: &'static str = "Companion";

    fn encode_attributes(&self, attributes: &mut Attributes) {
        attributes.push("id", &self.id, Presence::OmitEmpty);
        attributes.push("width", &self.width, Presence::Always);
        attributes.push("height", &self.height, Presence::Always);
        attributes.push("expandedWidth", &self.expanded_width, Presence::OmitEmpty);
        attributes.push("expandedHeight", &self.expanded_height, Presence::OmitEmpty);
        attributes.push("apiFramework", &self.api_framework, Presence::OmitEmpty);
    }

    fn encode_body<W: Write>(&self, encoder: &mut Encoder<W>) -> Result<()> {
        encoder.element("IFrameResource", &self.iframe_resource, Presence::OmitEmpty)?;
        encoder.element("HTMLResource", &self.html_resource, Presence::OmitEmpty)?;
        encoder.element(
            "CompanionClickThrough",
            &self.companion_click_through,
            Presence::OmitEmpty,
        )?;
        encoder.element("AltText", &self.alt_text, Presence::OmitEmpty)?;
        encoder.element("AdParameters", &self.ad_parameters, Presence::OmitEmpty)?;
        encoder.optional(self.static_resource.as_ref())?;
        encoder.optional(self.tracking_events.as_ref())
    }

    fn decode_attribute(&mut self, name: &[u8], value: &str) -> Result<()> {
        match name {
            b"id" => self.id = value.to_string(),
            b"width" => self.width = convert(Self::TAG, "width", value)?,
            b"height" => self.height = convert(Self::TAG, "height", value)?,
            b"expandedWidth" => self.expanded_width = convert(Self::TAG, "expandedWidth", value)?,
            b"expandedHeight" => {
                self.expanded_height = convert(Self::TAG, "expandedHeight", value)?
            }
            b"apiFramework" => self.api_framework = value.to_string(),
            _ => (),
        }
        Ok(())
    }

    fn decode_child(&mut self, decoder: &mut Decoder<'_>, child: &BytesStart<'_>) -> Result<bool> {
        match child.local_name().as_ref() {
            b"IFrameResource" => self.iframe_resource = decoder.text(child)?,
            b"HTMLResource" => self.html_resource = decoder.text(child)?,
            b"CompanionClickThrough" => self.companion_click_through = decoder.text(child)?,
            b"AltText" => self.alt_text = decoder.text(child)?,
            b"AdParameters" => self.ad_parameters = decoder.text(child)?,
            b"StaticResource" => self.static_resource = Some(decoder.node(child)?),
            b"TrackingEvents" => self.tracking_events = Some(decoder.node(child)?),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Clone)]
pub struct NonLinearAds {
    /// The non-linear creatives
    pub non_linears: Vec<NonLinear>,
    /// Tracking events shared by the non-linear creatives
    pub tracking_events: Option<TrackingEvents>,
}

impl XmlNode for NonLinearAds {
    const TAG: &'static str = "NonLinearAds";

    fn encode_body<W: Write>(&self, encoder: &mut Encoder<W>) -> Result<()> {
        encoder.nodes(&self.non_linears)?;
        encoder.optional(self.tracking_events.as_ref())
    }

    fn decode_child(&mut self, decoder: &mut Decoder<'_>, child: &BytesStart<'_>) -> Result<bool> {
        match child.local_name().as_ref() {
            b"NonLinear" => self.non_linears.push(decoder.node(child)?),
            b"TrackingEvents" => self.tracking_events = Some(decoder.node(child)?),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

/// Represents a non-linear overlay ad
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Clone)]
pub struct NonLinear {
    /// The non-linear ID
    pub id: String,
    /// Width in pixels
    pub width: i64,
    /// Height in pixels
    pub height: i64,
    /// Expanded width in pixels, 0 when absent
    pub expanded_width: i64,
    /// Expanded height in pixels, 0 when absent
    pub expanded_height: i64,
    /// Whether the creative may be scaled
    pub scalable: bool,
    /// Whether scaling must keep the aspect ratio
    pub maintain_aspect_ratio: bool,
    /// The API framework needed to run the resource
    pub api_framework: String,
    /// URL of an iframe resource
    pub iframe_resource: String,
    /// HTML snippet, escaped on output
    pub html_resource: String,
    /// Data passed to the creative
    pub ad_parameters: String,
    /// The landing page URL
    pub non_linear_click_through: String,
    /// A static image or script resource
    pub static_resource: Option<StaticResource>,
    /// Tracking events for the creative
    pub tracking_events: Option<TrackingEvents>,
}

impl XmlNode for NonLinear {
    const TAG: &'static str = "NonLinear";

    fn encode_attributes(&self, attributes: &mut Attributes) {
        attributes.push("id", &self.id, Presence::OmitEmpty);
        attributes.push("width", &self.width, Presence::Always);
        attributes.push("height", &self.height, Presence::Always);
        attributes.push("expandedWidth", &self.expanded_width, Presence::OmitEmpty);
        attributes.push("expandedHeight", &self.expanded_height, Presence::OmitEmpty);
        attributes.push("scalable", &self.scalable, Presence::OmitEmpty);
        attributes.push("maintainAspectRatio", &self.maintain_aspect_ratio, Presence::OmitEmpty);
        attributes.push("apiFramework", &self.api_framework, Presence::OmitEmpty);
    }

    fn encode_body<W: Write>(&self, encoder: &mut Encoder<W>) -> Result<()> {
        encoder.element("IFrameResource", &self.iframe_resource, Presence::OmitEmpty)?;
        encoder.element("HTMLResource", &self.html_resource, Presence::OmitEmpty)?;
        encoder.element("AdParameters", &self.ad_parameters, Presence::OmitEmpty)?;
        encoder.element(
            "NonLinearClickThrough",
            &self.non_linear_click_through,
            Presence::OmitEmpty,
        )?;
        encoder.optional(self.static_resource.as_ref())?;
        encoder.optional(self.tracking_events.as_ref())
    }

    fn decode_attribute(&mut self, name: &[u8], value: &str) -> Result<()> {
        match name {
            b"id" => self.id = value.to_string(),
            b"width" => self.width = convert(Self::TAG, "width", value)?,
            b"height" => self.height = convert(Self::TAG, "height", value)?,
            b"expandedWidth" => self.expanded_width = convert(Self::TAG, "expandedWidth", value)?,
            b"expandedHeight" => {
                self.expanded_height = convert(Self::TAG, "expandedHeight", value)?
            }
            b"scalable" => self.scalable = convert(Self::TAG, "scalable", value)?,
            b"maintainAspectRatio" => {
                self.maintain_aspect_ratio = convert(Self::TAG, "maintainAspectRatio", value)?
            }
            b"apiFramework" => self.api_framework = value.to_string(),
            _ => (),
        }
        Ok(())
    }

    fn decode_child(&mut self, decoder: &mut Decoder<'_>, child: &BytesStart<'_>) -> Result<bool> {
        match child.local_name().as_ref() {
            b"IFrameResource" => self.iframe_resource = decoder.text(child)?,
            b"HTMLResource" => self.html_resource = decoder.text(child)?,
            b"AdParameters" => self.ad_parameters = decoder.text(child)?,
            b"NonLinearClickThrough" => self.non_linear_click_through = decoder.text(child)?,
            b"StaticResource" => self.static_resource = Some(decoder.node(child)?),
            b"TrackingEvents" => self.tracking_events = Some(decoder.node(child)?),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

/// Represents a static creative asset
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Clone)]
pub struct StaticResource {
    /// MIME type of the asset, e.g. `image/png`
    pub creative_type: String,
    /// The resource URL
    pub url: String,
}

impl StaticResource {
    pub fn new(creative_type: impl Into<String>, url: impl Into<String>) -> Self {
        StaticResource {
            creative_type: creative_type.into(),
            url: url.into(),
        }
    }
}

impl XmlNode for StaticResource {
    const TAG: &'static str = "StaticResource";

    fn encode_attributes(&self, attributes: &mut Attributes) {
        attributes.push("creativeType", &self.creative_type, Presence::Always);
    }

    fn encode_body<W: Write>(&self, encoder: &mut Encoder<W>) -> Result<()> {
        encoder.text(&self.url)
    }

    fn decode_attribute(&mut self, name: &[u8], value: &str) -> Result<()> {
        if name == b"creativeType" {
            self.creative_type = value.to_string();
        }
        Ok(())
    }

    fn decode_text(&mut self, text: String) {
        self.url = text;
    }
}

#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Clone)]
pub struct Extensions {
    pub extensions: Vec<Extension>,
}

impl XmlNode for Extensions {
    const TAG: &'static str = "Extensions";

    fn encode_body<W: Write>(&self, encoder: &mut Encoder<W>) -> Result<()> {
        encoder.nodes(&self.extensions)
    }

    fn decode_child(&mut self, decoder: &mut Decoder<'_>, child: &BytesStart<'_>) -> Result<bool> {
        match child.local_name().as_ref() {
            b"Extension" => self.extensions.push(decoder.node(child)?),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

/// Represents a vendor extension.
///
/// `data` holds the inner markup verbatim; it is never parsed or escaped.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Clone)]
pub struct Extension {
    /// The extension type
    pub r#type: String,
    /// The inner markup, kept and written verbatim
    pub data: String,
}

impl Extension {
    pub fn new(r#type: impl Into<String>, data: impl Into<String>) -> Self {
        Extension {
            r#type: r#type.into(),
            data: data.into(),
        }
    }
}

impl XmlNode for Extension {
    const TAG: &'static str = "Extension";

    fn encode_attributes(&self, attributes: &mut Attributes) {
        attributes.push("type", &self.r#type, Presence::OmitEmpty);
    }

    fn encode_body<W: Write>(&self, encoder: &mut Encoder<W>) -> Result<()> {
        encoder.raw(&self.data)
    }

    fn decode_attribute(&mut self, name: &[u8], value: &str) -> Result<()> {
        if name == b"type" {
            self.r#type = value.to_string();
        }
        Ok(())
    }

    fn decode_body(&mut self, decoder: &mut Decoder<'_>, start: &BytesStart<'_>) -> Result<()> {
        self.data = decoder.raw(start)?;
        Ok(())
    }
}
