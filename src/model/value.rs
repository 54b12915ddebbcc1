use crate::constants::UNSUPPORTED_SENTINEL;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A file attachment read from a `file` column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRef {
    pub name: String,
    /// Proxied asset URL, ready to embed.
    pub url: String,
    /// Path exactly as stored in the column.
    pub raw_url: String,
}

/// The typed result of decoding one column value.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedValue {
    Text(String),
    Checkbox(bool),
    /// May be `NaN` when the stored text is not numeric.
    Number(f64),
    List(Vec<String>),
    Files(Vec<FileRef>),
    /// The column type is not understood; serialises as `"Not supported"`.
    Unsupported,
}

impl DecodedValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            DecodedValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DecodedValue::Checkbox(checked) => Some(*checked),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            DecodedValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            DecodedValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_files(&self) -> Option<&[FileRef]> {
        match self {
            DecodedValue::Files(files) => Some(files),
            _ => None,
        }
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, DecodedValue::Unsupported)
    }
}

impl Serialize for DecodedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DecodedValue::Text(text) => serializer.serialize_str(text),
            DecodedValue::Checkbox(checked) => serializer.serialize_bool(*checked),
            DecodedValue::Number(n) => serializer.serialize_f64(*n),
            DecodedValue::List(items) => items.serialize(serializer),
            DecodedValue::Files(files) => files.serialize(serializer),
            DecodedValue::Unsupported => serializer.serialize_str(UNSUPPORTED_SENTINEL),
        }
    }
}

impl fmt::Display for DecodedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodedValue::Text(text) => f.write_str(text),
            DecodedValue::Checkbox(checked) => write!(f, "{}", checked),
            DecodedValue::Number(n) => write!(f, "{}", n),
            DecodedValue::List(items) => f.write_str(&items.join(", ")),
            DecodedValue::Files(files) => {
                let names: Vec<&str> = files.iter().map(|file| file.name.as_str()).collect();
                f.write_str(&names.join(", "))
            }
            DecodedValue::Unsupported => f.write_str(UNSUPPORTED_SENTINEL),
        }
    }
}
