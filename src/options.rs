use serde::{Deserialize, Serialize};

/// Settings for [`crate::parser::from_str_with`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeOptions {
    /// Strip leading and trailing whitespace from character data.
    ///
    /// Hand-written VAST usually pads CDATA URLs with newlines and
    /// indentation. Off by default so that decoding is the exact inverse of
    /// encoding.
    pub trim_text: bool,
}

impl DecodeOptions {
    /// Options with `trim_text` enabled
    pub fn trimmed() -> Self {
        DecodeOptions { trim_text: true }
    }
}

/// Settings for [`crate::writer::to_string_with`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeOptions {
    /// Prefix the output with `<?xml version="1.0" encoding="UTF-8"?>` and a newline
    pub declaration: bool,
}
