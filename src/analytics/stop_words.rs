//! Caller-supplied stop word sets.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Result;

/// Words excluded from word frequencies.
///
/// Entries are stored lowercased and trimmed; lookups are exact against
/// lowercased tokens.
///
/// # Example
///
/// ```rust
/// use chatlens::analytics::StopWords;
///
/// let stop: StopWords = ["The", "and", "lol"].into_iter().collect();
/// assert!(stop.contains("the"));
/// assert!(!stop.contains("rust"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads one word per line. Blank lines and `#` comments are skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut words = HashSet::new();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            words.insert(word.to_lowercase());
        }
        Ok(Self { words })
    }

    /// Reads a stop word file with [`from_reader`](Self::from_reader).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for StopWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }
}

impl<S: AsRef<str>> Extend<S> for StopWords {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.words.extend(
            iter.into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_from_iter_lowercases() {
        let stop: StopWords = ["The", " AND ", ""].into_iter().collect();
        assert_eq!(stop.len(), 2);
        assert!(stop.contains("the"));
        assert!(stop.contains("and"));
        assert!(!stop.contains("The"));
    }

    #[test]
    fn test_from_reader_skips_comments() {
        let input = "# chat fillers\nlol\n\n  omg  \n#ignored\nOK\n";
        let stop = StopWords::from_reader(Cursor::new(input)).unwrap();
        assert_eq!(stop.len(), 3);
        assert!(stop.contains("lol"));
        assert!(stop.contains("omg"));
        assert!(stop.contains("ok"));
        assert!(!stop.contains("#ignored"));
    }

    #[test]
    fn test_extend() {
        let mut stop = StopWords::new();
        assert!(stop.is_empty());
        stop.extend(["a", "b"]);
        assert_eq!(stop.len(), 2);
    }

    #[test]
    fn test_from_missing_file() {
        assert!(StopWords::from_file("/no/such/stopwords.txt").unwrap_err().is_io());
    }
}
