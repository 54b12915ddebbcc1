use crate::types::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared type of a collection column; drives how its raw value is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    Text,
    Title,
    Select,
    MultiSelect,
    Person,
    Checkbox,
    Date,
    Number,
    Email,
    PhoneNumber,
    Url,
    Relation,
    File,
}

impl ColumnType {
    pub const ALL: [ColumnType; 13] = [
        ColumnType::Text,
        ColumnType::Title,
        ColumnType::Select,
        ColumnType::MultiSelect,
        ColumnType::Person,
        ColumnType::Checkbox,
        ColumnType::Date,
        ColumnType::Number,
        ColumnType::Email,
        ColumnType::PhoneNumber,
        ColumnType::Url,
        ColumnType::Relation,
        ColumnType::File,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Text => "text",
            ColumnType::Title => "title",
            ColumnType::Select => "select",
            ColumnType::MultiSelect => "multi_select",
            ColumnType::Person => "person",
            ColumnType::Checkbox => "checkbox",
            ColumnType::Date => "date",
            ColumnType::Number => "number",
            ColumnType::Email => "email",
            ColumnType::PhoneNumber => "phone_number",
            ColumnType::Url => "url",
            ColumnType::Relation => "relation",
            ColumnType::File => "file",
        }
    }
}

impl std::str::FromStr for ColumnType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColumnType::ALL
            .into_iter()
            .find(|column| column.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownColumnType(s.to_string()))
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
