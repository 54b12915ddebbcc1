//! Notion's "decorated string" wire encoding.
//!
//! The private API stores every collection cell as an array of runs:
//!
//! ```text
//! [["Hello "], ["world", [["b"], ["a", "https://example.com"]]], ["‣", [["d", {...}]]]]
//! ```
//!
//! Each run is `[text]` or `[text, marks]`, and each mark is `[tag]`,
//! `[tag, payload]` or `[tag, payload, extra...]`. The types here keep that
//! shape losslessly so values can be read, inspected and written back.

use chrono::NaiveDate;
use serde::de::{self, Deserializer};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// The annotation kind of a mark.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MarkTag {
    Bold,
    Italic,
    Strikethrough,
    Code,
    Underline,
    Link,
    Highlight,
    Equation,
    Comment,
    Date,
    User,
    Page,
    /// A tag this crate has no name for; preserved verbatim.
    Other(String),
}

impl MarkTag {
    pub fn as_str(&self) -> &str {
        match self {
            MarkTag::Bold => "b",
            MarkTag::Italic => "i",
            MarkTag::Strikethrough => "s",
            MarkTag::Code => "c",
            MarkTag::Underline => "_",
            MarkTag::Link => "a",
            MarkTag::Highlight => "h",
            MarkTag::Equation => "e",
            MarkTag::Comment => "m",
            MarkTag::Date => "d",
            MarkTag::User => "u",
            MarkTag::Page => "p",
            MarkTag::Other(tag) => tag,
        }
    }
}

impl From<&str> for MarkTag {
    fn from(tag: &str) -> Self {
        match tag {
            "b" => MarkTag::Bold,
            "i" => MarkTag::Italic,
            "s" => MarkTag::Strikethrough,
            "c" => MarkTag::Code,
            "_" => MarkTag::Underline,
            "a" => MarkTag::Link,
            "h" => MarkTag::Highlight,
            "e" => MarkTag::Equation,
            "m" => MarkTag::Comment,
            "d" => MarkTag::Date,
            "u" => MarkTag::User,
            "p" => MarkTag::Page,
            other => MarkTag::Other(other.to_string()),
        }
    }
}

impl fmt::Display for MarkTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The value following a mark's tag.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkPayload {
    /// URL, user id, page id, highlight color, equation source...
    Text(String),
    /// A structured record, e.g. a date range.
    Object(Map<String, Value>),
    Other(Value),
}

impl From<Value> for MarkPayload {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => MarkPayload::Text(s),
            Value::Object(map) => MarkPayload::Object(map),
            other => MarkPayload::Other(other),
        }
    }
}

impl From<MarkPayload> for Value {
    fn from(payload: MarkPayload) -> Self {
        match payload {
            MarkPayload::Text(s) => Value::String(s),
            MarkPayload::Object(map) => Value::Object(map),
            MarkPayload::Other(v) => v,
        }
    }
}

/// A structured date payload carried by a `d` mark.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateMention {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
}

impl DateMention {
    /// The start day as a calendar date, when it is a valid `YYYY-MM-DD`.
    pub fn start(&self) -> Option<NaiveDate> {
        parse_day(self.start_date.as_deref()?)
    }

    pub fn end(&self) -> Option<NaiveDate> {
        parse_day(self.end_date.as_deref()?)
    }
}

fn parse_day(day: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

/// One annotation on a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Mark {
    pub tag: MarkTag,
    pub payload: Option<MarkPayload>,
    /// Elements after the payload, e.g. the space id of a page mention.
    pub extra: Vec<Value>,
}

impl Mark {
    pub fn new(tag: impl Into<MarkTag>) -> Self {
        Self {
            tag: tag.into(),
            payload: None,
            extra: Vec::new(),
        }
    }

    pub fn with_payload(mut self, payload: impl Into<Value>) -> Self {
        self.payload = Some(MarkPayload::from(payload.into()));
        self
    }

    /// The payload when it is a plain string.
    pub fn payload_text(&self) -> Option<&str> {
        match &self.payload {
            Some(MarkPayload::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// The date record of a `d` mark whose payload is structured.
    ///
    /// A `d` mark with a string payload is an unparsed date and yields `None`.
    pub fn date(&self) -> Option<DateMention> {
        match (&self.tag, &self.payload) {
            (MarkTag::Date, Some(MarkPayload::Object(map))) => {
                serde_json::from_value(Value::Object(map.clone())).ok()
            }
            _ => None,
        }
    }
}

impl From<&str> for Mark {
    fn from(tag: &str) -> Self {
        Mark::new(tag)
    }
}

impl Serialize for Mark {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 1 + usize::from(self.payload.is_some()) + self.extra.len();
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(self.tag.as_str())?;
        if let Some(payload) = &self.payload {
            seq.serialize_element(&Value::from(payload.clone()))?;
        }
        for extra in &self.extra {
            seq.serialize_element(extra)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Mark {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut parts = Vec::<Value>::deserialize(deserializer)?.into_iter();
        let tag = match parts.next() {
            Some(Value::String(tag)) => MarkTag::from(tag.as_str()),
            Some(other) => {
                return Err(de::Error::custom(format!(
                    "mark tag must be a string, got {}",
                    other
                )))
            }
            None => return Err(de::Error::custom("mark must carry a tag")),
        };
        let payload = parts.next().map(MarkPayload::from);
        Ok(Mark {
            tag,
            payload,
            extra: parts.collect(),
        })
    }
}

/// A contiguous span of text with its marks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Run {
    pub text: String,
    pub marks: Vec<Mark>,
}

impl Run {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marks: Vec::new(),
        }
    }

    pub fn marked(text: impl Into<String>, marks: Vec<Mark>) -> Self {
        Self {
            text: text.into(),
            marks,
        }
    }

    pub fn has_marks(&self) -> bool {
        !self.marks.is_empty()
    }

    pub fn first_mark(&self) -> Option<&Mark> {
        self.marks.first()
    }
}

impl Serialize for Run {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.marks.is_empty() { 1 } else { 2 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.text)?;
        if !self.marks.is_empty() {
            seq.serialize_element(&self.marks)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Run {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut parts = Vec::<Value>::deserialize(deserializer)?.into_iter();
        let text = match parts.next() {
            Some(Value::String(text)) => text,
            Some(other) => {
                return Err(de::Error::custom(format!(
                    "run text must be a string, got {}",
                    other
                )))
            }
            None => return Err(de::Error::custom("run must carry text")),
        };
        let marks = match parts.next() {
            Some(Value::Null) | None => Vec::new(),
            Some(marks) => serde_json::from_value(marks).map_err(de::Error::custom)?,
        };
        Ok(Run { text, marks })
    }
}

/// A complete cell value: the ordered runs of one column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawDecoratedValue(pub Vec<Run>);

impl RawDecoratedValue {
    pub fn runs(&self) -> &[Run] {
        &self.0
    }

    pub fn first_run(&self) -> Option<&Run> {
        self.0.first()
    }

    /// Text of the first run, the whole value of single-valued columns.
    pub fn first_text(&self) -> Option<&str> {
        self.first_run().map(|run| run.text.as_str())
    }

    /// All run texts joined, marks ignored.
    pub fn plain_text(&self) -> String {
        self.0.iter().map(|run| run.text.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Run>> for RawDecoratedValue {
    fn from(runs: Vec<Run>) -> Self {
        Self(runs)
    }
}

impl FromIterator<Run> for RawDecoratedValue {
    fn from_iter<I: IntoIterator<Item = Run>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reads_wire_runs() {
        let raw: RawDecoratedValue = serde_json::from_value(json!([
            ["Hello "],
            ["world", [["b"], ["a", "https://example.com"]]]
        ]))
        .unwrap();

        assert_eq!(raw.runs().len(), 2);
        assert_eq!(raw.plain_text(), "Hello world");
        let link = &raw.runs()[1].marks[1];
        assert_eq!(link.tag, MarkTag::Link);
        assert_eq!(link.payload_text(), Some("https://example.com"));
    }

    #[test]
    fn test_page_mention_keeps_extra_elements() {
        let mark: Mark = serde_json::from_value(json!(["p", "page-id", "space-id"])).unwrap();
        assert_eq!(mark.tag, MarkTag::Page);
        assert_eq!(mark.payload_text(), Some("page-id"));
        assert_eq!(mark.extra, vec![json!("space-id")]);
        assert_eq!(
            serde_json::to_value(&mark).unwrap(),
            json!(["p", "page-id", "space-id"])
        );
    }

    #[test]
    fn test_unknown_tag_preserved() {
        let mark: Mark = serde_json::from_value(json!(["zz", 3])).unwrap();
        assert_eq!(mark.tag, MarkTag::Other("zz".to_string()));
        assert_eq!(mark.payload, Some(MarkPayload::Other(json!(3))));
    }

    #[test]
    fn test_date_payload() {
        let mark: Mark = serde_json::from_value(json!([
            "d",
            {"type": "daterange", "start_date": "2022-06-01", "end_date": "2022-06-03"}
        ]))
        .unwrap();
        let date = mark.date().unwrap();
        assert_eq!(date.start_date.as_deref(), Some("2022-06-01"));
        assert_eq!(date.start(), NaiveDate::from_ymd_opt(2022, 6, 1));
        assert_eq!(date.end(), NaiveDate::from_ymd_opt(2022, 6, 3));

        let unparsed = Mark::new("d").with_payload("June 1");
        assert_eq!(unparsed.date(), None);
    }

    #[test]
    fn test_malformed_runs_rejected() {
        assert!(serde_json::from_value::<Run>(json!([])).is_err());
        assert!(serde_json::from_value::<Run>(json!([12])).is_err());
        assert!(serde_json::from_value::<Mark>(json!([])).is_err());
    }
}
