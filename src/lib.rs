// src/lib.rs
//! notion-blog library: decodes Notion collection properties and generates
//! deterministic tag colors for a Notion-backed blog.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling**: `AppError`, `ColorError`, `ValidationError`
//! - **Wire model**: `RawDecoratedValue`, `Run`, `Mark`, `ColumnType`, `DecodedValue`
//! - **Decoding**: `decode_property`, `decode_by_name`, row helpers
//! - **Colors**: `colorize`, `ColorOptions`, `ColorProfile`, tag helpers
//! - **Ids**: `NotionId`, `parse_page_id`

pub mod color;
pub mod config;
pub mod constants;
pub mod decode;
pub mod error;
pub mod model;
pub mod types;

// --- Error Handling ---
pub use crate::error::{AppError, ColorError};
pub use crate::types::ValidationError;

// --- Domain Model ---
pub use crate::model::{
    CollectionSchema, ColumnType, DateMention, DecodedRow, DecodedValue, FileRef, Mark,
    MarkPayload, MarkTag, NotionUserRecord, RawDecoratedValue, RowBlock, Run, SchemaColumn,
    UserProfile,
};

// --- Decoding ---
pub use crate::decode::{
    asset_url, decode_by_name, decode_property, decode_row, decode_rows, pending_user_ids,
    select_collection_rows,
};

// --- Colors ---
pub use crate::color::{
    colorize, hsl_components, string_hash, tag_classes, tag_colors, ColorKey, ColorOptions,
    ColorProfile, ColorSpace, Generator, HslComponents, ProfileChoice, TagColors,
};

// --- Domain Types ---
pub use crate::types::{parse_numeric_text, parse_page_id, NotionId};
