use super::ValidationError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A Notion block/page id, stored in its non-hyphenated lowercase form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NotionId(String);

impl NotionId {
    /// Returns the canonical non-hyphenated id.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the hyphenated UUID form used by the Notion private API.
    pub fn to_hyphenated(&self) -> String {
        match Uuid::parse_str(&self.0) {
            Ok(uuid) => uuid.as_hyphenated().to_string(),
            Err(_) => self.0.clone(),
        }
    }

    fn from_hex(hex: &str) -> Result<Self, ValidationError> {
        if hex.len() == 32 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
            Ok(NotionId(hex.to_lowercase()))
        } else {
            Err(ValidationError::InvalidId(format!(
                "Invalid Notion ID format: {}",
                hex
            )))
        }
    }

    /// Parses a page id out of a dashed/undashed id, a page slug such as
    /// `My-Post-0123…`, or a full Notion URL.
    ///
    /// Dashes are dropped and the trailing 32 characters are taken as the id,
    /// so slugs resolve to the id they end with.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let cleaned = input.trim().trim_end_matches('/');
        if cleaned.is_empty() {
            return Err(ValidationError::EmptyField("page id"));
        }

        if let Ok(uuid) = Uuid::parse_str(cleaned) {
            return Ok(NotionId(uuid.as_simple().to_string()));
        }

        if cleaned.starts_with("http://") || cleaned.starts_with("https://") {
            if let Some(id) = Self::extract_from_url(cleaned) {
                return Self::from_hex(&id);
            }
        }

        let undashed: String = cleaned.chars().filter(|c| *c != '-').collect();
        Self::from_hex(trailing_chars(&undashed, 32))
    }

    fn extract_from_url(url: &str) -> Option<String> {
        lazy_static::lazy_static! {
            static ref ID_REGEX: Regex = Regex::new(
                r"(?:[/-])([a-fA-F0-9]{32}|[a-fA-F0-9]{8}-[a-fA-F0-9]{4}-[a-fA-F0-9]{4}-[a-fA-F0-9]{4}-[a-fA-F0-9]{12})(?:[/?#]|$)"
            ).expect("Failed to compile Notion ID regex - this is a bug in the code");
        }

        ID_REGEX
            .captures(url)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str().replace('-', ""))
    }
}

/// Normalises any page reference into the hyphenated id form.
pub fn parse_page_id(input: &str) -> Result<String, ValidationError> {
    NotionId::parse(input).map(|id| id.to_hyphenated())
}

fn trailing_chars(s: &str, count: usize) -> &str {
    let total = s.chars().count();
    if total <= count {
        return s;
    }
    match s.char_indices().nth(total - count) {
        Some((idx, _)) => &s[idx..],
        None => s,
    }
}

impl fmt::Display for NotionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for NotionId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for NotionId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NotionId::parse(&s).map_err(serde::de::Error::custom)
    }
}
