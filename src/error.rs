use quick_xml::events::attributes::AttrError;
use thiserror::Error;

/// Errors that can occur when encoding or decoding VAST XML
#[derive(Error, Debug)]
pub enum VastError {
    #[error("Failed to parse XML: {0}")]
    XmlParseError(#[from] quick_xml::Error),

    #[error("Malformed attribute: {0}")]
    AttributeError(#[from] AttrError),

    #[error("Invalid UTF-8 in document: {0}")]
    EncodingError(#[from] std::str::Utf8Error),

    #[error("Unexpected end of document inside <{0}>")]
    UnexpectedEof(String),

    #[error("Document has no <{0}> root element")]
    MissingRoot(&'static str),

    #[error("Expected <{expected}> root element, found <{found}>")]
    UnexpectedRoot { expected: &'static str, found: String },

    #[error("Cannot convert {value:?} in <{element}> {field} to {expected}")]
    TypeConversionError {
        element: &'static str,
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("Unsupported structure: {0}")]
    UnsupportedStructure(String),

    #[error("URL error: {0}")]
    UrlError(#[from] url::ParseError),
}

/// Coarse classification of a [`VastError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or non-well-formed input
    Parse,
    /// A value could not be converted to its declared field type
    TypeConversion,
    /// Rejected by an opt-in structural check
    UnsupportedStructure,
    /// The wrapper tag URI is not a valid URL
    Url,
}

impl VastError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            VastError::XmlParseError(_)
            | VastError::AttributeError(_)
            | VastError::EncodingError(_)
            | VastError::UnexpectedEof(_)
            | VastError::MissingRoot(_)
            | VastError::UnexpectedRoot { .. } => ErrorKind::Parse,
            VastError::TypeConversionError { .. } => ErrorKind::TypeConversion,
            VastError::UnsupportedStructure(_) => ErrorKind::UnsupportedStructure,
            VastError::UrlError(_) => ErrorKind::Url,
        }
    }
}

pub type Result<T> = std::result::Result<T, VastError>;
