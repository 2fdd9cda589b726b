//! Reading export files into text.
//!
//! Exports are normally UTF-8, but older Android builds write ISO-8859-1.
//! [`decode_export`] tries UTF-8 first and falls back to ISO-8859-1, which
//! cannot fail because every byte maps to the code point of the same value.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::error::Result;

const UTF8_BOM: char = '\u{FEFF}';

/// Decodes raw export bytes into text.
///
/// A leading byte-order mark is removed so the first header line still
/// matches.
///
/// # Example
///
/// ```rust
/// use chatlens::decode::decode_export;
///
/// assert_eq!(decode_export("héllo".as_bytes()), "héllo");
/// // 0xE9 alone is not UTF-8; ISO-8859-1 reads it as 'é'
/// assert_eq!(decode_export(&[0x68, 0xE9]), "hé");
/// ```
pub fn decode_export(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.strip_prefix(UTF8_BOM).unwrap_or(text).to_string(),
        Err(err) => {
            warn!(
                valid_up_to = err.valid_up_to(),
                "export is not valid UTF-8, decoding as ISO-8859-1"
            );
            bytes.iter().map(|&b| char::from(b)).collect()
        }
    }
}

/// Reads an export file and decodes it with [`decode_export`].
pub fn read_export(path: impl AsRef<Path>) -> Result<String> {
    let bytes = fs::read(path)?;
    Ok(decode_export(&bytes))
}
