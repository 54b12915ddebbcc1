//! Collection records as the private API returns them.

use super::{DecodedValue, RawDecoratedValue};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One column of a collection schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaColumn {
    pub name: String,
    /// Kept as text so unknown column types degrade per cell.
    #[serde(rename = "type")]
    pub column_type: String,
}

/// Column key → column definition, in schema order.
pub type CollectionSchema = IndexMap<String, SchemaColumn>;

/// A row block of a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowBlock {
    pub id: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub properties: Option<IndexMap<String, RawDecoratedValue>>,
    /// Milliseconds since the Unix epoch.
    #[serde(default)]
    pub created_time: Option<i64>,
}

/// A row with every known column decoded, keyed by column display name.
///
/// Serialises flat: `{"id": …, "<column>": …, "created_time": …}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedRow {
    pub id: String,
    #[serde(flatten)]
    pub values: IndexMap<String, DecodedValue>,
    pub created_time: Option<i64>,
}

impl DecodedRow {
    pub fn get(&self, column_name: &str) -> Option<&DecodedValue> {
        self.values.get(column_name)
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.created_time?)
    }
}

/// A `notion_user` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotionUserRecord {
    pub id: String,
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub family_name: Option<String>,
    #[serde(default)]
    pub profile_photo: Option<String>,
}

/// Display data for a person column entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub profile_photo: Option<String>,
}

impl From<NotionUserRecord> for UserProfile {
    fn from(record: NotionUserRecord) -> Self {
        let first_name = record.given_name.unwrap_or_default();
        let last_name = record.family_name.unwrap_or_default();
        let full_name = format!("{} {}", first_name, last_name);
        Self {
            id: record.id,
            first_name,
            last_name,
            full_name,
            profile_photo: record.profile_photo,
        }
    }
}
