//! Emoji detection.
//!
//! An emoji here is any single non-ASCII character carrying the Unicode
//! `Emoji` property. Multi-character sequences (skin tones, ZWJ families,
//! flags) are counted per component; joiners and variation selectors are
//! not emojis and are skipped.

use regex::Regex;

use crate::error::Result;

/// Non-ASCII emoji characters. ASCII digits, `#` and `*` have the `Emoji`
/// property too but only render as emoji inside keycap sequences.
const EMOJI_PATTERN: &str = r"[\p{Emoji}--[\x00-\x7F]]";

/// Classifies and extracts emoji characters.
#[derive(Debug, Clone)]
pub struct EmojiTable {
    regex: Regex,
}

impl EmojiTable {
    pub fn new() -> Result<Self> {
        Ok(Self {
            regex: Regex::new(EMOJI_PATTERN)?,
        })
    }

    /// Returns `true` if `c` is an emoji character.
    pub fn is_emoji(&self, c: char) -> bool {
        let mut buf = [0u8; 4];
        self.regex.is_match(c.encode_utf8(&mut buf))
    }

    /// Returns the emoji characters of `text` in order of appearance.
    ///
    /// ```rust
    /// use chatlens::features::EmojiTable;
    ///
    /// let table = EmojiTable::new()?;
    /// assert_eq!(table.extract("🎉 party 🎉🔥"), vec!['🎉', '🎉', '🔥']);
    /// assert!(table.extract("plain text 123").is_empty());
    /// # Ok::<(), chatlens::ChatlensError>(())
    /// ```
    pub fn extract(&self, text: &str) -> Vec<char> {
        self.regex
            .find_iter(text)
            .filter_map(|m| m.as_str().chars().next())
            .collect()
    }
}
