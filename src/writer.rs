//! Encoding of document model values to XML text.

use std::io::Write;

use log::trace;

use crate::codec::{Encoder, XmlNode};
use crate::error::Result;
use crate::options::EncodeOptions;

/// Encode a node (usually a [`crate::models::Vast`]) as a compact XML string
pub fn to_string<N: XmlNode>(node: &N) -> Result<String> {
    to_string_with(node, &EncodeOptions::default())
}

pub fn to_string_with<N: XmlNode>(node: &N, options: &EncodeOptions) -> Result<String> {
    let bytes = to_writer(Vec::new(), node, options)?;
    // Every byte written comes from a &str, so this cannot fail for valid models.
    Ok(String::from_utf8(bytes).map_err(|e| e.utf8_error())?)
}

/// Encode a node into `sink`, returning the sink once the document is written
pub fn to_writer<W: Write, N: XmlNode>(sink: W, node: &N, options: &EncodeOptions) -> Result<W> {
    let mut encoder = Encoder::new(sink);
    if options.declaration {
        encoder.declaration()?;
    }
    encoder.node(node)?;
    trace!("Encoded <{}> document", N::TAG);
    Ok(encoder.into_inner())
}
