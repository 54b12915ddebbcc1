//! Collection-level decoding: whole rows against a schema.

use super::decode_by_name;
use crate::model::{
    CollectionSchema, ColumnType, DecodedRow, DecodedValue, RowBlock,
};
use indexmap::{IndexMap, IndexSet};
use rayon::prelude::*;

/// Keeps the row blocks that belong to `collection_id` and carry properties.
pub fn select_collection_rows<'a>(
    blocks: impl IntoIterator<Item = &'a RowBlock>,
    collection_id: &str,
) -> Vec<&'a RowBlock> {
    blocks
        .into_iter()
        .filter(|block| {
            block.properties.is_some() && block.parent_id.as_deref() == Some(collection_id)
        })
        .collect()
}

/// Decodes every schema column present on `row`, keyed by column name.
///
/// Columns missing from the row are left out rather than decoded as empty.
pub fn decode_row(row: &RowBlock, schema: &CollectionSchema) -> DecodedRow {
    let mut values = IndexMap::new();

    if let Some(properties) = &row.properties {
        for (key, column) in schema {
            if let Some(raw) = properties.get(key) {
                let decoded = decode_by_name(raw, &column.column_type, &row.id);
                values.insert(column.name.clone(), decoded);
            }
        }
    }

    DecodedRow {
        id: row.id.clone(),
        values,
        created_time: row.created_time,
    }
}

/// Decodes rows in parallel; output order matches input order.
pub fn decode_rows(rows: &[&RowBlock], schema: &CollectionSchema) -> Vec<DecodedRow> {
    let decoded: Vec<DecodedRow> = rows.par_iter().map(|row| decode_row(row, schema)).collect();
    log::debug!(
        "Decoded {} row(s) across {} column(s)",
        decoded.len(),
        schema.len()
    );
    decoded
}

/// User ids referenced by person columns, first-seen order, without repeats.
///
/// These are what a caller has to resolve into profiles before display.
pub fn pending_user_ids(rows: &[DecodedRow], schema: &CollectionSchema) -> Vec<String> {
    let person_columns: Vec<&str> = schema
        .values()
        .filter(|column| column.column_type == ColumnType::Person.as_str())
        .map(|column| column.name.as_str())
        .collect();

    let mut ids = IndexSet::new();
    for row in rows {
        for name in &person_columns {
            if let Some(DecodedValue::List(users)) = row.get(name) {
                ids.extend(users.iter().cloned());
            }
        }
    }
    ids.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RawDecoratedValue, Run, SchemaColumn};

    fn schema() -> CollectionSchema {
        let mut schema = CollectionSchema::new();
        schema.insert(
            "title".into(),
            SchemaColumn {
                name: "Name".into(),
                column_type: "title".into(),
            },
        );
        schema.insert(
            "Xk=a".into(),
            SchemaColumn {
                name: "Distance".into(),
                column_type: "number".into(),
            },
        );
        schema
    }

    fn row(id: &str, parent: &str, title: &str) -> RowBlock {
        let mut properties = IndexMap::new();
        properties.insert(
            "title".to_string(),
            RawDecoratedValue::from(vec![Run::plain(title)]),
        );
        RowBlock {
            id: id.into(),
            parent_id: Some(parent.into()),
            properties: Some(properties),
            created_time: Some(0),
        }
    }

    #[test]
    fn test_select_rows_by_parent() {
        let mut orphan = row("c", "coll", "no props");
        orphan.properties = None;
        let blocks = vec![row("a", "coll", "A"), row("b", "other", "B"), orphan];

        let selected = select_collection_rows(&blocks, "coll");
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].id, "a");
    }

    #[test]
    fn test_missing_columns_are_left_out() {
        let decoded = decode_row(&row("a", "coll", "Summit"), &schema());
        assert_eq!(decoded.get("Name"), Some(&DecodedValue::Text("Summit".into())));
        assert_eq!(decoded.get("Distance"), None);
    }
}
