//! Generic tree-walking XML encoder and decoder.
//!
//! Every entity of the document model implements [`XmlNode`], which acts as
//! its field table: the element tag, which fields are attributes, which are
//! child elements, and whether a zero value is omitted or still emitted.
//! The [`Encoder`] and [`Decoder`] walk those tables over quick-xml events.

use std::borrow::Cow;
use std::io::Write;

use log::debug;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::enums::{Delivery, TrackingEvent};
use crate::error::{Result, VastError};
use crate::options::DecodeOptions;

/// How a field is treated when it holds its zero value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Emitted even when empty, e.g. `width="0"` or `<AdTitle></AdTitle>`
    Always,
    /// Skipped entirely when empty
    OmitEmpty,
}

/// A value that can be stored in an attribute or in element text
pub trait Scalar: Sized {
    /// Human readable target type, used in conversion errors
    const EXPECTED: &'static str;

    fn is_zero(&self) -> bool;

    fn render(&self) -> Cow<'_, str>;

    /// Returns `None` when `raw` is not a valid representation.
    fn parse_scalar(raw: &str) -> Option<Self>;
}

impl Scalar for String {
    const EXPECTED: &'static str = "string";

    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn render(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }

    fn parse_scalar(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }
}

impl Scalar for i64 {
    const EXPECTED: &'static str = "integer";

    fn is_zero(&self) -> bool {
        *self == 0
    }

    fn render(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn parse_scalar(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Some(0);
        }
        raw.parse().ok()
    }
}

impl Scalar for bool {
    const EXPECTED: &'static str = "boolean";

    fn is_zero(&self) -> bool {
        !*self
    }

    fn render(&self) -> Cow<'_, str> {
        Cow::Borrowed(if *self { "true" } else { "false" })
    }

    fn parse_scalar(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
            "0" | "f" | "F" | "false" | "FALSE" | "False" | "" => Some(false),
            _ => None,
        }
    }
}

impl Scalar for TrackingEvent {
    const EXPECTED: &'static str = "tracking event";

    fn is_zero(&self) -> bool {
        self.as_str().is_empty()
    }

    fn render(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }

    fn parse_scalar(raw: &str) -> Option<Self> {
        Some(TrackingEvent::from(raw))
    }
}

impl Scalar for Delivery {
    const EXPECTED: &'static str = "delivery mode";

    fn is_zero(&self) -> bool {
        self.as_str().is_empty()
    }

    fn render(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }

    fn parse_scalar(raw: &str) -> Option<Self> {
        Some(Delivery::from(raw))
    }
}

/// Convert a decoded attribute or text value to its field type
pub fn convert<S: Scalar>(element: &'static str, field: &'static str, raw: &str) -> Result<S> {
    S::parse_scalar(raw).ok_or_else(|| VastError::TypeConversionError {
        element,
        field,
        value: raw.to_string(),
        expected: S::EXPECTED,
    })
}

/// Field table of one XML element.
///
/// Encoding calls `encode_attributes` then `encode_body`, in declaration
/// order. Decoding feeds every attribute to `decode_attribute`, every child
/// element to `decode_child` and the collected character data to
/// `decode_text`.
pub trait XmlNode: Default {
    const TAG: &'static str;

    fn encode_attributes(&self, _attributes: &mut Attributes) {}

    fn encode_body<W: Write>(&self, encoder: &mut Encoder<W>) -> Result<()>;

    fn decode_attribute(&mut self, _name: &[u8], _value: &str) -> Result<()> {
        Ok(())
    }

    /// Returns `false` for elements this node does not model; the decoder skips them.
    fn decode_child(&mut self, _decoder: &mut Decoder<'_>, _child: &BytesStart<'_>) -> Result<bool> {
        Ok(false)
    }

    fn decode_text(&mut self, _text: String) {}

    fn decode_body(&mut self, decoder: &mut Decoder<'_>, start: &BytesStart<'_>) -> Result<()> {
        decoder.body(self, start)
    }
}

/// Attribute list of the element being encoded
pub struct Attributes {
    start: BytesStart<'static>,
}

impl Attributes {
    pub fn push<S: Scalar>(&mut self, name: &str, value: &S, presence: Presence) {
        if presence == Presence::OmitEmpty && value.is_zero() {
            return;
        }
        let rendered = value.render();
        self.start.push_attribute((name, rendered.as_ref()));
    }
}

/// Writes nodes as XML into any `Write` sink
pub struct Encoder<W: Write> {
    writer: Writer<W>,
}

impl<W: Write> Encoder<W> {
    pub fn new(inner: W) -> Self {
        Encoder { writer: Writer::new(inner) }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    /// `<?xml version="1.0" encoding="UTF-8"?>` followed by a newline
    pub fn declaration(&mut self) -> Result<()> {
        self.writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        self.writer.write_event(Event::Text(BytesText::from_escaped("\n")))?;
        Ok(())
    }

    pub fn node<N: XmlNode>(&mut self, node: &N) -> Result<()> {
        let mut attributes = Attributes {
            start: BytesStart::new(N::TAG),
        };
        node.encode_attributes(&mut attributes);
        self.writer.write_event(Event::Start(attributes.start))?;
        node.encode_body(self)?;
        self.writer.write_event(Event::End(BytesEnd::new(N::TAG)))?;
        Ok(())
    }

    pub fn nodes<N: XmlNode>(&mut self, nodes: &[N]) -> Result<()> {
        for node in nodes {
            self.node(node)?;
        }
        Ok(())
    }

    pub fn optional<N: XmlNode>(&mut self, node: Option<&N>) -> Result<()> {
        match node {
            Some(node) => self.node(node),
            None => Ok(()),
        }
    }

    /// A child element whose whole content is one scalar
    pub fn element<S: Scalar>(&mut self, tag: &str, value: &S, presence: Presence) -> Result<()> {
        if presence == Presence::OmitEmpty && value.is_zero() {
            return Ok(());
        }
        self.writer.write_event(Event::Start(BytesStart::new(tag)))?;
        self.text(&value.render())?;
        self.writer.write_event(Event::End(BytesEnd::new(tag)))?;
        Ok(())
    }

    /// Escaped character data
    pub fn text(&mut self, value: &str) -> Result<()> {
        if value.is_empty() {
            return Ok(());
        }
        self.writer
            .write_event(Event::Text(BytesText::from_escaped(partial_escape(value))))?;
        Ok(())
    }

    /// Markup written verbatim, neither escaped nor checked
    pub fn raw(&mut self, markup: &str) -> Result<()> {
        if markup.is_empty() {
            return Ok(());
        }
        self.writer.write_event(Event::Text(BytesText::from_escaped(markup)))?;
        Ok(())
    }
}

/// Reads nodes from a borrowed XML document
pub struct Decoder<'i> {
    reader: Reader<&'i [u8]>,
    trim_text: bool,
}

impl<'i> Decoder<'i> {
    pub fn new(xml: &'i str, options: &DecodeOptions) -> Self {
        let mut reader = Reader::from_str(xml);
        reader.expand_empty_elements(true);
        reader.check_end_names(true);
        Decoder {
            reader,
            trim_text: options.trim_text,
        }
    }

    /// Decode the document element, which must be `N::TAG`
    pub fn root<N: XmlNode>(&mut self) -> Result<N> {
        loop {
            match self.reader.read_event()? {
                Event::Start(start) => {
                    if start.local_name().as_ref() != N::TAG.as_bytes() {
                        return Err(VastError::UnexpectedRoot {
                            expected: N::TAG,
                            found: tag_name(&start),
                        });
                    }
                    let node = self.node(&start)?;
                    self.finish()?;
                    return Ok(node);
                }
                Event::Eof => return Err(VastError::MissingRoot(N::TAG)),
                _ => (),
            }
        }
    }

    /// Decode the element opened by `start`, consuming through its end tag
    pub fn node<N: XmlNode>(&mut self, start: &BytesStart<'_>) -> Result<N> {
        let mut node = N::default();
        for attribute in start.attributes() {
            let attribute = attribute?;
            let value = attribute.unescape_value()?;
            node.decode_attribute(attribute.key.local_name().as_ref(), &value)?;
        }
        node.decode_body(self, start)?;
        Ok(node)
    }

    /// Walk the children of `start`, dispatching them to `node`
    pub fn body<N: XmlNode>(&mut self, node: &mut N, start: &BytesStart<'_>) -> Result<()> {
        let mut text = String::new();
        loop {
            match self.reader.read_event()? {
                Event::Start(child) => {
                    if !node.decode_child(self, &child)? {
                        debug!("Skipping unknown element <{}> in <{}>", tag_name(&child), N::TAG);
                        self.skip(&child)?;
                    }
                }
                Event::Text(e) => text.push_str(&e.unescape()?),
                Event::CData(e) => text.push_str(std::str::from_utf8(&e)?),
                Event::End(_) => break,
                Event::Eof => return Err(VastError::UnexpectedEof(tag_name(start))),
                _ => (),
            }
        }
        node.decode_text(self.finish_text(text));
        Ok(())
    }

    /// Character data of a scalar child element; nested markup is skipped
    pub fn text(&mut self, start: &BytesStart<'_>) -> Result<String> {
        let mut text = String::new();
        loop {
            match self.reader.read_event()? {
                Event::Start(child) => self.skip(&child)?,
                Event::Text(e) => text.push_str(&e.unescape()?),
                Event::CData(e) => text.push_str(std::str::from_utf8(&e)?),
                Event::End(_) => break,
                Event::Eof => return Err(VastError::UnexpectedEof(tag_name(start))),
                _ => (),
            }
        }
        Ok(self.finish_text(text))
    }

    /// Raw inner markup of `start`, exactly as it appears in the input
    pub fn raw(&mut self, start: &BytesStart<'_>) -> Result<String> {
        match self.reader.read_text(start.name()) {
            Ok(markup) => Ok(markup.into_owned()),
            Err(quick_xml::Error::UnexpectedEof(_)) => Err(VastError::UnexpectedEof(tag_name(start))),
            Err(e) => Err(e.into()),
        }
    }

    pub fn skip(&mut self, start: &BytesStart<'_>) -> Result<()> {
        match self.reader.read_to_end(start.name()) {
            Ok(_) => Ok(()),
            Err(quick_xml::Error::UnexpectedEof(_)) => Err(VastError::UnexpectedEof(tag_name(start))),
            Err(e) => Err(e.into()),
        }
    }

    // Trailing content after the root must still be well-formed.
    fn finish(&mut self) -> Result<()> {
        loop {
            if let Event::Eof = self.reader.read_event()? {
                return Ok(());
            }
        }
    }

    fn finish_text(&self, text: String) -> String {
        if self.trim_text {
            text.trim().to_string()
        } else {
            text
        }
    }
}

fn tag_name(start: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(start.name().as_ref()).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_treat_blank_as_zero() {
        assert_eq!(i64::parse_scalar(""), Some(0));
        assert_eq!(i64::parse_scalar(" 300 "), Some(300));
        assert_eq!(i64::parse_scalar("wide"), None);
        assert_eq!(i64::parse_scalar("-1"), Some(-1));
        assert_eq!(i64::parse_scalar("+7"), Some(7));
        assert_eq!(i64::parse_scalar("1.5"), None);
    }

    #[test]
    fn booleans_accept_words_and_digits() {
        assert_eq!(bool::parse_scalar("true"), Some(true));
        assert_eq!(bool::parse_scalar("1"), Some(true));
        assert_eq!(bool::parse_scalar(" false"), Some(false));
        assert_eq!(bool::parse_scalar(""), Some(false));
        assert_eq!(bool::parse_scalar("True"), Some(true));
        assert_eq!(bool::parse_scalar("F"), Some(false));
        assert_eq!(bool::parse_scalar("yes"), None);
    }

    #[test]
    fn conversion_error_names_the_field() {
        let err = convert::<i64>("MediaFile", "width", "wide").unwrap_err();
        match err {
            VastError::TypeConversionError {
                element,
                field,
                value,
                expected,
            } => {
                assert_eq!(element, "MediaFile");
                assert_eq!(field, "width");
                assert_eq!(value, "wide");
                assert_eq!(expected, "integer");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn zero_values_are_detected() {
        assert!(String::new().is_zero());
        assert!(0i64.is_zero());
        assert!(false.is_zero());
        assert!(TrackingEvent::default().is_zero());
        assert!(!Delivery::Streaming.is_zero());
    }
}
