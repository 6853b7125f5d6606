//! Text codec abstraction
//!
//! The transcoder does not implement any charset itself. It hands bytes and a
//! canonical charset name to a [`TextCodec`] and translates the outcome.

mod charset_codec;

pub use charset_codec::CharsetCodec;

use thiserror::Error;

/// Failure reported by a codec
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The charset name is not one this codec can decode
    #[error("unknown or unsupported charset label \"{0}\"")]
    UnknownCharset(String),

    /// The bytes are not valid in the charset
    #[error("{message}")]
    Malformed { charset: String, message: String },
}

/// Common trait for all codec implementations
pub trait TextCodec {
    fn name(&self) -> &str;

    /// Decode `bytes`, labelled as `charset`, into UTF-8 text
    fn decode(&self, bytes: &[u8], charset: &str) -> Result<String, CodecError>;

    /// Whether `charset` names something this codec can decode
    fn supports(&self, charset: &str) -> bool;
}
