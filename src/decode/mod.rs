// src/decode/mod.rs
//! Property decoding: Notion decorated strings → typed values.
//!
//! Each column type has exactly one reading rule. Decoding never fails:
//! absent or malformed data decodes to an empty value, non-numeric numbers
//! decode to `NaN`, and an unknown column type name decodes to
//! [`DecodedValue::Unsupported`] after a diagnostic.

mod files;
pub mod rows;

pub use files::{asset_url, encode_uri_component};
pub use rows::{decode_row, decode_rows, pending_user_ids, select_collection_rows};

use crate::constants::{CHECKBOX_CHECKED_TEXT, MULTI_SELECT_SEPARATOR, RELATION_MARKER};
use crate::model::{ColumnType, DecodedValue, FileRef, RawDecoratedValue, Run};
use crate::types::parse_numeric_text;

/// Decodes one column value given its declared type.
///
/// `owner_id` is the id of the row block the value belongs to; only `file`
/// columns use it, to address the asset proxy.
pub fn decode_property(
    raw: &RawDecoratedValue,
    column_type: ColumnType,
    owner_id: &str,
) -> DecodedValue {
    use ColumnType::*;

    log::trace!("Decoding {} value of {} run(s)", column_type, raw.runs().len());

    match column_type {
        Text | Title => DecodedValue::Text(raw.plain_text()),
        Checkbox => DecodedValue::Checkbox(raw.first_text() == Some(CHECKBOX_CHECKED_TEXT)),
        Date => DecodedValue::Text(decode_date(raw)),
        Select | Email | PhoneNumber | Url => {
            DecodedValue::Text(raw.first_text().unwrap_or_default().to_string())
        }
        MultiSelect => DecodedValue::List(decode_multi_select(raw)),
        Number => DecodedValue::Number(decode_number(raw)),
        Person => DecodedValue::List(payload_texts(raw.runs().iter().filter(|r| r.has_marks()))),
        Relation => DecodedValue::List(payload_texts(
            raw.runs().iter().filter(|r| r.text == RELATION_MARKER),
        )),
        File => DecodedValue::Files(decode_files(raw, owner_id)),
    }
}

/// Decodes a value whose column type is only known by name.
///
/// Unknown names are reported and yield [`DecodedValue::Unsupported`].
pub fn decode_by_name(raw: &RawDecoratedValue, column_type: &str, owner_id: &str) -> DecodedValue {
    match column_type.parse::<ColumnType>() {
        Ok(column_type) => decode_property(raw, column_type, owner_id),
        Err(e) => {
            log::warn!(
                "{} (owner {}, value {})",
                e,
                owner_id,
                serde_json::to_string(raw).unwrap_or_default()
            );
            DecodedValue::Unsupported
        }
    }
}

fn decode_date(raw: &RawDecoratedValue) -> String {
    raw.first_run()
        .and_then(Run::first_mark)
        .and_then(|mark| mark.date())
        .and_then(|date| date.start_date)
        .unwrap_or_default()
}

fn decode_multi_select(raw: &RawDecoratedValue) -> Vec<String> {
    match raw.first_text() {
        Some(text) => text
            .split(MULTI_SELECT_SEPARATOR)
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    }
}

fn decode_number(raw: &RawDecoratedValue) -> f64 {
    raw.first_text()
        .and_then(parse_numeric_text)
        .unwrap_or(f64::NAN)
}

/// String payload of each run's first mark; runs without one are skipped.
fn payload_texts<'a>(runs: impl Iterator<Item = &'a Run>) -> Vec<String> {
    runs.filter_map(|run| run.first_mark()?.payload_text().map(str::to_string))
        .collect()
}

fn decode_files(raw: &RawDecoratedValue, owner_id: &str) -> Vec<FileRef> {
    raw.runs()
        .iter()
        .filter(|run| run.has_marks())
        .filter_map(|run| {
            let raw_url = run.first_mark()?.payload_text()?;
            match asset_url(raw_url, owner_id) {
                Ok(url) => Some(FileRef {
                    name: run.text.clone(),
                    url: url.to_string(),
                    raw_url: raw_url.to_string(),
                }),
                Err(e) => {
                    log::warn!("Skipping attachment '{}': {}", raw_url, e);
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Mark;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawDecoratedValue {
        serde_json::from_value(value).expect("fixture should be a valid decorated value")
    }

    #[test]
    fn test_title_concatenates_runs() {
        let value = raw(json!([["Crossing "], ["the", [["b"]]], [" ridge"]]));
        assert_eq!(
            decode_property(&value, ColumnType::Title, "row"),
            DecodedValue::Text("Crossing the ridge".into())
        );
        assert_eq!(
            decode_property(&RawDecoratedValue::default(), ColumnType::Text, "row"),
            DecodedValue::Text(String::new())
        );
    }

    #[test]
    fn test_checkbox_is_exact_yes() {
        for (text, expected) in [("Yes", true), ("yes", false), ("true", false), ("", false)] {
            let value = RawDecoratedValue::from(vec![Run::plain(text)]);
            assert_eq!(
                decode_property(&value, ColumnType::Checkbox, "row"),
                DecodedValue::Checkbox(expected),
                "checkbox text {:?}",
                text
            );
        }
        assert_eq!(
            decode_property(&RawDecoratedValue::default(), ColumnType::Checkbox, "row"),
            DecodedValue::Checkbox(false)
        );
    }

    #[test]
    fn test_date_requires_structured_payload() {
        let value = raw(json!([["‣", [["d", {"type": "date", "start_date": "2023-04-09"}]]]]));
        assert_eq!(
            decode_property(&value, ColumnType::Date, "row"),
            DecodedValue::Text("2023-04-09".into())
        );

        let unparsed = raw(json!([["‣", [["d", "2023-04-09"]]]]));
        assert_eq!(
            decode_property(&unparsed, ColumnType::Date, "row"),
            DecodedValue::Text(String::new())
        );

        let wrong_tag = raw(json!([["‣", [["u", {"start_date": "2023-04-09"}]]]]));
        assert_eq!(
            decode_property(&wrong_tag, ColumnType::Date, "row"),
            DecodedValue::Text(String::new())
        );
    }

    #[test]
    fn test_multi_select_split_keeps_everything() {
        let value = RawDecoratedValue::from(vec![Run::plain("Alpine, Coastal,Alpine")]);
        assert_eq!(
            decode_property(&value, ColumnType::MultiSelect, "row"),
            DecodedValue::List(vec!["Alpine".into(), " Coastal".into(), "Alpine".into()])
        );
    }

    #[test]
    fn test_number_parsing() {
        let value = RawDecoratedValue::from(vec![Run::plain("42")]);
        assert_eq!(decode_property(&value, ColumnType::Number, "row").as_number(), Some(42.0));

        let value = RawDecoratedValue::from(vec![Run::plain("abc")]);
        assert!(decode_property(&value, ColumnType::Number, "row")
            .as_number()
            .unwrap()
            .is_nan());
    }

    #[test]
    fn test_person_takes_user_ids() {
        let value = raw(json!([
            ["‣", [["u", "user-1"]]],
            [", "],
            ["‣", [["u", "user-2"]]]
        ]));
        assert_eq!(
            decode_property(&value, ColumnType::Person, "row"),
            DecodedValue::List(vec!["user-1".into(), "user-2".into()])
        );
    }

    #[test]
    fn test_relation_filters_on_marker() {
        let value = RawDecoratedValue::from(vec![
            Run::marked(RELATION_MARKER, vec![Mark::new("p").with_payload("page-a")]),
            Run::marked("*", vec![Mark::new("p").with_payload("page-b")]),
        ]);
        assert_eq!(
            decode_property(&value, ColumnType::Relation, "row"),
            DecodedValue::List(vec!["page-a".into()])
        );
    }

    #[test]
    fn test_unknown_type_name_is_unsupported() {
        let value = RawDecoratedValue::from(vec![Run::plain("x")]);
        assert!(decode_by_name(&value, "formula", "row").is_unsupported());
        assert_eq!(
            decode_by_name(&value, "select", "row"),
            DecodedValue::Text("x".into())
        );
    }
}
