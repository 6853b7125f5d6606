//! transcoder: charset alias resolution and decoding to UTF-8
//!
//! Mail and HTTP headers label text with hundreds of historical, vendor-specific
//! and plain wrong charset names. This crate maps those names onto the canonical
//! spelling a codec understands and decodes the bytes into a `String`.
//!
//! ```
//! assert_eq!(transcoder::resolve_alias("latin1"), "ISO-8859-1");
//! assert_eq!(transcoder::decode(&[0x63, 0x61, 0x66, 0xE9], "l1").unwrap(), "café");
//! assert!(transcoder::is_utf8_alias("UTF-8"));
//! ```

pub mod alias;
pub mod codec;
pub mod config;
pub mod error;
pub mod transcoder;
pub mod utils;

// Re-export common types
pub use codec::{CharsetCodec, CodecError, TextCodec};
pub use config::{CodecConfig, TranscoderConfig};
pub use error::{Result, TranscodeError};
pub use transcoder::{decode, is_utf8_alias, resolve_alias, Transcoder};
