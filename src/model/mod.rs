mod column;
pub mod decorated;
pub mod rows;
mod value;

pub use column::ColumnType;
pub use decorated::{DateMention, Mark, MarkPayload, MarkTag, RawDecoratedValue, Run};
pub use rows::{
    CollectionSchema, DecodedRow, NotionUserRecord, RowBlock, SchemaColumn, UserProfile,
};
pub use value::{DecodedValue, FileRef};
