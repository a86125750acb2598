//! Decoding of XML text into document model values.

use log::trace;

use crate::codec::{Decoder, XmlNode};
use crate::error::Result;
use crate::models::Vast;
use crate::options::DecodeOptions;

/// Parse a VAST XML string into a Vast struct
pub fn parse_vast(xml: &str) -> Result<Vast> {
    from_str(xml)
}

/// Decode a document whose root element is `N::TAG`
pub fn from_str<N: XmlNode>(xml: &str) -> Result<N> {
    from_str_with(xml, &DecodeOptions::default())
}

pub fn from_str_with<N: XmlNode>(xml: &str, options: &DecodeOptions) -> Result<N> {
    let mut decoder = Decoder::new(xml, options);
    let node = decoder.root::<N>()?;
    trace!("Decoded <{}> document ({} bytes)", N::TAG, xml.len());
    Ok(node)
}

/// Decode raw bytes, which must be UTF-8
pub fn from_slice<N: XmlNode>(bytes: &[u8]) -> Result<N> {
    from_slice_with(bytes, &DecodeOptions::default())
}

pub fn from_slice_with<N: XmlNode>(bytes: &[u8], options: &DecodeOptions) -> Result<N> {
    let xml = std::str::from_utf8(strip_bom(bytes))?;
    from_str_with(xml, options)
}

fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes)
}
