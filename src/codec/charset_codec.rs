//! Codec backed by the `charset` crate
//!
//! `charset` covers every encoding in the WHATWG Encoding Standard (through
//! `encoding_rs`) plus UTF-7, which still shows up in old mail. On top of it:
//!
//! - `ISO-8859-1` is decoded as real Latin-1 and `us-ascii` rejects high bytes,
//!   where the Encoding Standard would treat both as windows-1252.
//! - A few legacy spellings the Encoding Standard does not list are mapped onto
//!   labels it does (`windows-936`, `x-obsoleted-*`).
//! - The DOS code pages `IBM850`..`IBM864` go through `codepage-strings`.
//!
//! Labels that the Encoding Standard maps to its *replacement* encoding
//! (`ISO-2022-KR`, `ISO-2022-CN`, `HZ-GB-2312`) are treated as unsupported.

use charset::Charset;
use codepage_strings::Coding;
use encoding_rs::{DecoderResult, Encoding};
use std::borrow::Cow;

use super::{CodecError, TextCodec};

/// Spellings of Latin-1 decoded byte-for-byte
const LATIN1_LABELS: &[&str] = &[
    "iso-8859-1",
    "iso_8859-1",
    "iso8859-1",
    "iso88591",
    "latin1",
    "l1",
    "csisolatin1",
    "ibm819",
    "cp819",
    "iso-ir-100",
];

/// Spellings of US-ASCII, strict 7-bit
const ASCII_LABELS: &[&str] = &["us-ascii", "ascii", "ansi_x3.4-1968", "646", "csascii"];

/// Legacy label -> Encoding Standard label
const LABEL_FIXUPS: &[(&str, &str)] = &[
    ("windows-936", "gbk"),
    ("x-obsoleted-shift_jis", "shift_jis"),
    ("x-obsoleted-iso-2022-jp", "iso-2022-jp"),
    ("x-obsoleted-euc-jp", "euc-jp"),
];

/// DOS code pages: label -> (name, code page). `IBM864i` only differs in
/// presentation order, the byte mapping is the one of 864.
const OEM_CODE_PAGES: &[(&str, &str, u16)] = &[
    ("ibm850", "IBM850", 850),
    ("ibm852", "IBM852", 852),
    ("ibm855", "IBM855", 855),
    ("ibm857", "IBM857", 857),
    ("ibm862", "IBM862", 862),
    ("ibm864", "IBM864", 864),
    ("ibm864i", "IBM864", 864),
];

/// How one label gets decoded
#[derive(Debug, Clone)]
enum Backend {
    Latin1,
    Ascii,
    Charset(Charset),
    Oem { name: &'static str, coding: Coding },
}

impl Backend {
    fn for_label(label: &str) -> Option<Self> {
        let normalized = label.trim().to_ascii_lowercase();

        if LATIN1_LABELS.contains(&normalized.as_str()) {
            return Some(Backend::Latin1);
        }
        if ASCII_LABELS.contains(&normalized.as_str()) {
            return Some(Backend::Ascii);
        }
        if let Some(&(_, name, code_page)) =
            OEM_CODE_PAGES.iter().find(|(l, _, _)| *l == normalized)
        {
            return match Coding::new(code_page) {
                Ok(coding) => Some(Backend::Oem { name, coding }),
                Err(e) => {
                    log::debug!("Code page {} unavailable: {}", code_page, e);
                    None
                }
            };
        }

        Charset::for_label_no_replacement(encoding_label(&normalized).as_bytes())
            .map(Backend::Charset)
    }

    fn name(&self) -> &'static str {
        match self {
            Backend::Latin1 => "ISO-8859-1",
            Backend::Ascii => "US-ASCII",
            Backend::Charset(charset) => charset.name(),
            Backend::Oem { name, .. } => *name,
        }
    }

    /// Decoded text (malformed sequences replaced) and whether any were found
    fn decode<'a>(&self, bytes: &'a [u8]) -> (Cow<'a, str>, bool) {
        match self {
            Backend::Latin1 => (encoding_rs::mem::decode_latin1(bytes), false),
            Backend::Ascii => {
                let valid = Encoding::ascii_valid_up_to(bytes) == bytes.len();
                (charset::decode_ascii(bytes), !valid)
            }
            // The declared label wins over any BOM in the data
            Backend::Charset(charset) => charset.decode_without_bom_handling(bytes),
            Backend::Oem { coding, .. } => match coding.decode(bytes) {
                Ok(text) => (text, false),
                Err(_) => (coding.decode_lossy(bytes), true),
            },
        }
    }

    fn malformed_offset(&self, label: &str, bytes: &[u8]) -> Option<usize> {
        match self {
            Backend::Ascii => Some(Encoding::ascii_valid_up_to(bytes)),
            Backend::Charset(_) => {
                malformed_offset(encoding_label(&label.trim().to_ascii_lowercase()), bytes)
            }
            Backend::Latin1 | Backend::Oem { .. } => None,
        }
    }
}

/// Apply [`LABEL_FIXUPS`] to a lowercase label
fn encoding_label(normalized: &str) -> &str {
    LABEL_FIXUPS
        .iter()
        .find(|(legacy, _)| *legacy == normalized)
        .map(|(_, label)| *label)
        .unwrap_or(normalized)
}

/// Default [`TextCodec`]
#[derive(Debug, Clone, Copy, Default)]
pub struct CharsetCodec {
    lossy: bool,
}

impl CharsetCodec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace malformed sequences with U+FFFD instead of failing
    pub fn with_lossy(mut self, lossy: bool) -> Self {
        self.lossy = lossy;
        self
    }

    pub fn is_lossy(&self) -> bool {
        self.lossy
    }
}

/// Byte offset of the first malformed sequence, for Encoding Standard labels.
///
/// `None` for UTF-7 (not an `encoding_rs` encoding) or when no error is found.
fn malformed_offset(label: &str, bytes: &[u8]) -> Option<usize> {
    let encoding = Encoding::for_label_no_replacement(label.as_bytes())?;
    let mut decoder = encoding.new_decoder_without_bom_handling();
    let capacity = decoder.max_utf8_buffer_length_without_replacement(bytes.len())?;
    let mut scratch = String::with_capacity(capacity);
    let (result, read) = decoder.decode_to_string_without_replacement(bytes, &mut scratch, true);
    match result {
        DecoderResult::Malformed(bad, extra) => Some(read - bad as usize - extra as usize),
        DecoderResult::InputEmpty | DecoderResult::OutputFull => None,
    }
}

impl TextCodec for CharsetCodec {
    fn name(&self) -> &str {
        "charset"
    }

    fn decode(&self, bytes: &[u8], label: &str) -> Result<String, CodecError> {
        let backend =
            Backend::for_label(label).ok_or_else(|| CodecError::UnknownCharset(label.to_string()))?;

        let (text, had_errors) = backend.decode(bytes);

        if had_errors {
            if !self.lossy {
                log::debug!("{} decoding failed for {} bytes", backend.name(), bytes.len());
                let message = match backend.malformed_offset(label, bytes) {
                    Some(offset) => format!(
                        "input is not valid {} (malformed sequence at byte {})",
                        backend.name(),
                        offset
                    ),
                    None => format!("input is not valid {}", backend.name()),
                };
                return Err(CodecError::Malformed {
                    charset: backend.name().to_string(),
                    message,
                });
            }
            log::warn!(
                "{} decoding replaced malformed sequences in {} bytes",
                backend.name(),
                bytes.len()
            );
        }

        log::debug!("Decoded {} bytes as {} (label '{}')", bytes.len(), backend.name(), label);

        Ok(text.into_owned())
    }

    fn supports(&self, label: &str) -> bool {
        Backend::for_label(label).is_some()
    }
}
