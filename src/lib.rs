//! Typed VAST 2.0 document model with exact XML encoding and decoding.
//!
//! ```
//! use vast2::models::{Ad, Vast};
//!
//! let mut vast = Vast::new("2.0");
//! vast.ads.push(Ad { id: "1".to_string(), ..Default::default() });
//! let xml = vast2::to_string(&vast).unwrap();
//! assert_eq!(xml, r#"<VAST version="2.0"><Ad id="1"></Ad></VAST>"#);
//! assert_eq!(vast2::from_str::<Vast>(&xml).unwrap(), vast);
//! ```

pub mod codec;
pub mod enums;
pub mod error;
pub mod models;
pub mod options;
pub mod parser;
pub mod validate;
pub mod writer;

pub use enums::{Delivery, TrackingEvent};
pub use error::{ErrorKind, Result, VastError};
pub use options::{DecodeOptions, EncodeOptions};
pub use parser::{from_slice, from_slice_with, from_str, from_str_with, parse_vast};
pub use writer::{to_string, to_string_with, to_writer};
