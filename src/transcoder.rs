//! Transcoder - resolves declared charsets and decodes through a codec

use crate::alias;
use crate::codec::{CharsetCodec, CodecError, TextCodec};
use crate::config::TranscoderConfig;
use crate::error::{Result, TranscodeError};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Shared transcoder used by the crate-level functions
static DEFAULT_TRANSCODER: Lazy<Transcoder> = Lazy::new(Transcoder::new);

/// Decodes bytes labelled with a loosely-specified charset name into UTF-8.
///
/// Resolution goes through the extra aliases given at construction, then the
/// static alias table, and finally passes the name through unchanged. The
/// static table itself is never modified.
///
/// # Thread Safety
///
/// A `Transcoder` is immutable after construction and is `Sync` whenever its
/// codec is, so one instance can serve any number of threads.
#[derive(Debug, Clone)]
pub struct Transcoder<C = CharsetCodec> {
    codec: C,
    /// Lowercase alias -> canonical name, consulted before the static table
    extra_aliases: HashMap<String, String>,
}

impl Transcoder<CharsetCodec> {
    /// Create a transcoder with the default codec and no extra aliases
    pub fn new() -> Self {
        Self::with_codec(CharsetCodec::new())
    }

    /// Create a transcoder from configuration
    pub fn from_config(config: &TranscoderConfig) -> Self {
        let codec = CharsetCodec::new().with_lossy(config.codec.lossy);
        Self::with_codec(codec).with_aliases(config.aliases.clone())
    }
}

impl Default for Transcoder<CharsetCodec> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: TextCodec> Transcoder<C> {
    /// Create a transcoder around any codec
    pub fn with_codec(codec: C) -> Self {
        Self {
            codec,
            extra_aliases: HashMap::new(),
        }
    }

    /// Add extra aliases; keys are matched case-insensitively
    pub fn with_aliases<I, K, V>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (alias, canonical) in aliases {
            self.extra_aliases
                .insert(alias.as_ref().to_lowercase(), canonical.into());
        }
        self
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Resolve `name` to the charset name handed to the codec.
    ///
    /// Unknown names are returned unchanged.
    pub fn resolve_alias<'a>(&'a self, name: &'a str) -> &'a str {
        if !self.extra_aliases.is_empty() {
            if let Some(canonical) = self.extra_aliases.get(&name.to_lowercase()) {
                return canonical;
            }
        }
        alias::resolve_alias(name)
    }

    /// Decode `text` declared as `charset` into UTF-8.
    ///
    /// Fails with [`TranscodeError::UnsupportedEncoding`] when the codec does
    /// not know the resolved charset and with [`TranscodeError::MalformedInput`]
    /// when the bytes are invalid in it. There is no partial result and no
    /// fallback charset.
    pub fn decode(&self, text: &[u8], charset: &str) -> Result<String> {
        let effective = self.resolve_alias(charset);
        if effective != charset {
            log::debug!("Charset '{}' resolved to '{}'", charset, effective);
        }

        log::debug!(
            "Decoding {} bytes as '{}' with {} codec",
            text.len(),
            effective,
            self.codec.name()
        );

        self.codec
            .decode(text, effective)
            .map_err(|e| match e {
                CodecError::UnknownCharset(_) => {
                    TranscodeError::unsupported(charset, effective, e.to_string())
                }
                CodecError::Malformed { message, .. } => {
                    TranscodeError::malformed(charset, effective, message)
                }
            })
    }

    /// Whether `charset`, after resolution, is decodable by the codec
    pub fn supports(&self, charset: &str) -> bool {
        self.codec.supports(self.resolve_alias(charset))
    }
}

/// Resolve `name` through the static alias table
pub fn resolve_alias(name: &str) -> &str {
    alias::resolve_alias(name)
}

/// Decode `text` declared as `charset` with the default transcoder
pub fn decode(text: &[u8], charset: &str) -> Result<String> {
    DEFAULT_TRANSCODER.decode(text, charset)
}

/// Exact, case-sensitive check for the four common UTF-8 spellings
pub fn is_utf8_alias(name: &str) -> bool {
    alias::is_utf8_alias(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Codec that only knows one label and records nothing
    struct OnlyAscii;

    impl TextCodec for OnlyAscii {
        fn name(&self) -> &str {
            "only-ascii"
        }

        fn decode(&self, bytes: &[u8], charset: &str) -> std::result::Result<String, CodecError> {
            if charset != "us-ascii" {
                return Err(CodecError::UnknownCharset(charset.to_string()));
            }
            if !bytes.is_ascii() {
                return Err(CodecError::Malformed {
                    charset: charset.to_string(),
                    message: "non-ASCII byte".to_string(),
                });
            }
            Ok(String::from_utf8_lossy(bytes).into_owned())
        }

        fn supports(&self, charset: &str) -> bool {
            charset == "us-ascii"
        }
    }

    #[test]
    fn test_decode_latin1() {
        assert_eq!(decode(&[0x63, 0x61, 0x66, 0xE9], "ISO-8859-1").unwrap(), "café");
        assert_eq!(decode(&[0x63, 0x61, 0x66, 0xE9], "latin1").unwrap(), "café");
    }

    #[test]
    fn test_decode_shift_jis_via_lowercase_alias() {
        let bytes = [0x93, 0xFA, 0x96, 0x7B, 0x8C, 0xEA];
        assert_eq!(resolve_alias("shift_jis"), "Shift_JIS");
        assert_eq!(decode(&bytes, "shift_jis").unwrap(), "日本語");
        assert_eq!(decode(&bytes, "x-sjis").unwrap(), "日本語");
    }

    #[test]
    fn test_decode_more_charsets() {
        let koi8 = [0xF0, 0xD2, 0xC9, 0xD7, 0xC5, 0xD4];
        assert_eq!(decode(&koi8, "KOI8-R").unwrap(), "Привет");
        let greek = [0xC5, 0xEB, 0xEB, 0xDC, 0xE4, 0xE1];
        assert_eq!(decode(&greek, "greek8").unwrap(), "Ελλάδα");
        assert_eq!(decode(b"Hi Mom -+Jjo--!", "unicode-1-1-utf-7").unwrap(), "Hi Mom -\u{263A}-!");
        assert_eq!(decode(&[0x00, 0x41], "csUnicode").unwrap(), "A");
    }

    #[test]
    fn test_decode_bogus_charset() {
        let err = decode(b"anything", "totally-bogus-charset").unwrap_err();
        match &err {
            TranscodeError::UnsupportedEncoding { charset, alias, message } => {
                assert_eq!(charset, "totally-bogus-charset");
                assert_eq!(*alias, None);
                assert!(message.contains("totally-bogus-charset"));
            }
            other => panic!("expected unsupported encoding, got {:?}", other),
        }
        assert_eq!(err.resolved_charset(), Some("totally-bogus-charset"));
        assert!(err.is_unsupported_encoding());
    }

    #[test]
    fn test_decode_alias_found_but_unsupported() {
        // Resolves through the table, but the codec has no UTF-32
        let err = decode(b"abcd", "x-iso-10646-ucs-4-le").unwrap_err();
        assert_eq!(err.charset(), Some("x-iso-10646-ucs-4-le"));
        assert_eq!(err.resolved_charset(), Some("UTF-32LE"));
        assert!(err.to_string().contains("(alias found: \"UTF-32LE\")"));
    }

    #[test]
    fn test_decode_malformed() {
        let err = decode(&[0xFF, 0xFE, 0xFD], "utf8").unwrap_err();
        assert!(matches!(err, TranscodeError::MalformedInput { .. }));
        assert_eq!(err.resolved_charset(), Some("UTF-8"));
        assert!(err.is_unsupported_encoding());
    }

    #[test]
    fn test_extra_aliases_take_precedence() {
        let transcoder = Transcoder::new()
            .with_aliases([("X-Unknown-8bit", "windows-1252"), ("latin1", "UTF-8")]);
        assert_eq!(transcoder.resolve_alias("x-unknown-8bit"), "windows-1252");
        assert_eq!(transcoder.resolve_alias("LATIN1"), "UTF-8");
        assert_eq!(transcoder.resolve_alias("l1"), "ISO-8859-1");
        assert_eq!(transcoder.decode(&[0x80], "x-unknown-8bit").unwrap(), "€");
        assert!(transcoder.supports("X-UNKNOWN-8BIT"));
    }

    #[test]
    fn test_from_config() {
        let mut config = TranscoderConfig::default();
        config.codec.lossy = true;
        config.aliases.insert("funky".to_string(), "utf-8".to_string());
        let transcoder = Transcoder::from_config(&config);
        assert!(transcoder.codec().is_lossy());
        assert_eq!(transcoder.decode(&[0x61, 0xFF], "FUNKY").unwrap(), "a\u{FFFD}");
    }

    #[test]
    fn test_default_codec_name() {
        assert_eq!(Transcoder::new().codec().name(), "charset");
    }

    #[test]
    fn test_custom_codec() {
        let transcoder = Transcoder::with_codec(OnlyAscii);
        assert_eq!(transcoder.codec().name(), "only-ascii");
        assert_eq!(transcoder.decode(b"hello", "ANSI_X3.4-1968").unwrap(), "hello");
        assert!(transcoder.supports("646"));
        assert!(!transcoder.supports("latin1"));

        let err = transcoder.decode(&[0xE9], "ascii").unwrap_err();
        assert!(matches!(err, TranscodeError::MalformedInput { .. }));
        assert!(err.to_string().contains("(alias found: \"us-ascii\")"));

        let err = transcoder.decode(b"x", "latin1").unwrap_err();
        assert!(matches!(err, TranscodeError::UnsupportedEncoding { .. }));
    }

    #[test]
    fn test_is_utf8_alias() {
        assert!(is_utf8_alias("utf-8"));
        assert!(is_utf8_alias("UTF-8"));
        assert!(!is_utf8_alias("utf_8"));
    }
}
