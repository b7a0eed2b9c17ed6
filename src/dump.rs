//! Memory-dump text layout for differential comparison against hardware.
//!
//! The encoder renders a finished coefficient vector the way a dmem dump of
//! the accelerator prints it; the decoder turns a raw hardware dump (with
//! per-word integrity bytes) into the same flat byte stream, so the two
//! sides diff byte-for-byte.

use std::fmt::Write;

use thiserror::Error;

/// Bytes per dump line: four 32-bit words.
const LINE_BYTES: usize = 16;

/// Words per raw-dump group.
const GROUP_WORDS: usize = 8;

/// One integrity byte plus four data bytes per word.
const GROUP_BYTES: usize = GROUP_WORDS * 5;

/// Errors from parsing a raw hardware dump.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DumpError {
    /// The hex string had an odd number of digits.
    #[error("dump hex string has an odd number of digits ({0})")]
    OddHexLength(usize),
    /// A character was not a hex digit.
    #[error("invalid hex digit {digit:?} at position {position}")]
    InvalidHexDigit {
        /// The offending character.
        digit: char,
        /// Its byte position in the input.
        position: usize,
    },
    /// The dump did not contain a whole number of word groups.
    #[error("dump length {len} bytes is not a multiple of the {GROUP_BYTES}-byte word group")]
    TruncatedGroup {
        /// Decoded dump length in bytes.
        len: usize,
    },
}

/// Renders `words` in the dmem dump layout.
///
/// One line per 16 bytes: a 4-digit hex byte offset, then four 32-bit words,
/// each printed as its bytes in little-endian order (least-significant byte
/// first).
pub fn format_dmem(words: &[u32]) -> String {
    let mut bytes = Vec::with_capacity(words.len() * 4);
    for word in words {
        bytes.extend_from_slice(&word.to_le_bytes());
    }
    format_dmem_bytes(&bytes)
}

/// Renders an already-flat little-endian byte stream in the dmem dump
/// layout.
///
/// A tail shorter than a full line or word is emitted as-is, not padded.
pub fn format_dmem_bytes(bytes: &[u8]) -> String {
    let mut text = String::new();
    for (index, line) in bytes.chunks(LINE_BYTES).enumerate() {
        let _ = write!(text, "{:04x}", index * LINE_BYTES);
        for word in line.chunks(4) {
            text.push(' ');
            for byte in word {
                let _ = write!(text, "{byte:02x}");
            }
        }
        text.push('\n');
    }
    text
}

/// Parses a raw hardware dmem dump into the flat data byte stream.
///
/// The dump is hex text (whitespace ignored) in groups of 40 bytes: 8 words,
/// each one integrity-status byte (discarded) followed by 4 data bytes. The
/// data bytes are returned in little-endian memory order, so the result
/// compares directly against the stream behind [`format_dmem`].
///
/// # Errors
///
/// [`DumpError`] on malformed hex or a dump that is not a whole number of
/// word groups.
pub fn parse_dmem_dump(dump: &str) -> Result<Vec<u8>, DumpError> {
    let raw = decode_hex(dump)?;
    if raw.len() % GROUP_BYTES != 0 {
        return Err(DumpError::TruncatedGroup { len: raw.len() });
    }

    let mut bytes = Vec::with_capacity(raw.len() / GROUP_BYTES * GROUP_WORDS * 4);
    for group in raw.chunks_exact(GROUP_BYTES) {
        for word in group.chunks_exact(5) {
            // word[0] is the integrity status byte
            bytes.extend_from_slice(&word[1..]);
        }
    }
    Ok(bytes)
}

fn decode_hex(text: &str) -> Result<Vec<u8>, DumpError> {
    let mut nibbles = Vec::with_capacity(text.len());
    for (position, digit) in text.char_indices() {
        if digit.is_ascii_whitespace() {
            continue;
        }
        let nibble = digit
            .to_digit(16)
            .ok_or(DumpError::InvalidHexDigit { digit, position })?;
        nibbles.push(nibble as u8);
    }
    if nibbles.len() % 2 != 0 {
        return Err(DumpError::OddHexLength(nibbles.len()));
    }
    Ok(nibbles
        .chunks_exact(2)
        .map(|pair| (pair[0] << 4) | pair[1])
        .collect())
}
