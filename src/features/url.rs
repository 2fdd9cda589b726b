//! URL detection in message bodies.
//!
//! Recognizes scheme URLs (`https://...`, `ftp://...`), `www.` hosts and
//! bare domains ending in a known top-level domain (`example.com/path`).
//! Bare domains are checked against a fixed list of common country-code and
//! generic TLDs, not the full IANA registry, so rarer TLDs are only found
//! with a scheme or a `www.` prefix.
//! Matches never overlap. Trailing sentence punctuation is not part of the
//! URL, and a domain directly after `@` is an e-mail address, not a link.

use regex::Regex;

use crate::error::Result;

/// Top-level domains accepted for bare (scheme-less) domains.
const BARE_TLDS: &[&str] = &[
    "com", "org", "net", "edu", "gov", "mil", "int", "info", "biz", "io", "co", "ai", "app",
    "dev", "me", "xyz", "tv", "ly", "gl", "gg", "online", "site", "store", "shop", "blog",
    "news", "page", "link", "live", "club", "tech", "cloud", "uk", "us", "ca", "de", "fr", "es",
    "it", "nl", "ru", "br", "au", "jp", "cn", "kr", "in", "ch", "se", "no", "pl", "be", "at",
    "dk", "fi", "ie", "nz", "za", "mx", "ar", "tr", "pk", "ng", "ke", "sg", "hk", "tw", "id",
    "ph", "vn", "th", "ae", "sa", "eg", "il", "gr", "pt", "cz", "hu", "ro", "ua", "kz",
    "academy", "agency", "art", "bio", "cafe", "city", "codes", "design", "digital", "email",
    "eu", "events", "finance", "fm", "games", "guru", "health", "host", "media", "museum",
    "network", "ninja", "photo", "photos", "pro", "rocks", "social", "software", "space",
    "studio", "team", "today", "tools", "travel", "video", "website", "wiki", "work", "world",
    "zone",
];

const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', '\'', '"', ')', ']'];

/// Finds URLs in free text.
#[derive(Debug, Clone)]
pub struct UrlFinder {
    regex: Regex,
}

impl UrlFinder {
    /// Compiles the URL pattern.
    pub fn new() -> Result<Self> {
        let pattern = format!(
            r#"(?i)\b(?:https?|ftp)://[^\s<>"]+|\bwww\.[^\s<>"]+|\b(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+(?:{})\b(?:[/?#][^\s<>"]*)?"#,
            BARE_TLDS.join("|")
        );
        Ok(Self {
            regex: Regex::new(&pattern)?,
        })
    }

    /// Returns every URL in `text`, in order, duplicates included.
    ///
    /// ```rust
    /// use chatlens::features::UrlFinder;
    ///
    /// let finder = UrlFinder::new()?;
    /// assert_eq!(
    ///     finder.find_urls("see https://example.com/a, and www.rust-lang.org."),
    ///     vec!["https://example.com/a", "www.rust-lang.org"]
    /// );
    /// # Ok::<(), chatlens::ChatlensError>(())
    /// ```
    pub fn find_urls<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.regex
            .find_iter(text)
            .filter(|m| !text[..m.start()].ends_with('@'))
            .map(|m| trim_url(m.as_str()))
            .filter(|url| !url.is_empty())
            .collect()
    }

    /// Number of URLs in `text`.
    pub fn count(&self, text: &str) -> usize {
        self.find_urls(text).len()
    }
}

/// Strips trailing punctuation, keeping a closing paren that has a partner.
fn trim_url(url: &str) -> &str {
    let mut end = url.len();
    while let Some(c) = url[..end].chars().next_back() {
        if !TRAILING_PUNCTUATION.contains(&c) {
            break;
        }
        if c == ')' && url[..end].contains('(') {
            break;
        }
        end -= c.len_utf8();
    }
    &url[..end]
}
