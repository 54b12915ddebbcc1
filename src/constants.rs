// src/constants.rs
//! Domain constants that define how Notion's wire encoding is read and how
//! tag colors are generated.
//!
//! Reading these constants should tell you which literals the decoder keys
//! on and which knobs the colorizer starts from.

// ---------------------------------------------------------------------------
// Notion decorated-string encoding
// ---------------------------------------------------------------------------

/// Text a checkbox run carries when the box is ticked.
pub const CHECKBOX_CHECKED_TEXT: &str = "Yes";

/// Text of a run that references another page (U+2023 TRIANGULAR BULLET).
pub const RELATION_MARKER: &str = "\u{2023}";

/// Separator Notion uses to join multi-select options into one run.
pub const MULTI_SELECT_SEPARATOR: char = ',';

/// Value reported for a column type the decoder does not understand.
pub const UNSUPPORTED_SENTINEL: &str = "Not supported";

// ---------------------------------------------------------------------------
// File attachments
// ---------------------------------------------------------------------------

/// Origin that serves proxied Notion assets.
pub const NOTION_ORIGIN: &str = "https://www.notion.so";

/// Path prefix of Notion's image/asset proxy.
pub const IMAGE_PROXY_PREFIX: &str = "/image";

/// Record table that owns file attachments.
pub const ASSET_OWNER_TABLE: &str = "block";

/// Cache-version token the asset proxy expects.
pub const ASSET_CACHE_VERSION: &str = "v2";

// ---------------------------------------------------------------------------
// Colorizer
// ---------------------------------------------------------------------------

/// Default prime for the prime-walk hue step.
///
/// 223/359 ≈ 0.62, close to the golden-ratio conjugate, so consecutive keys
/// land far apart on the hue wheel.
pub const DEFAULT_PRIME_WALK_HUE_DISTANCE: f64 = 223.0;

/// Cycle lengths of the prime-walk generator (hue, saturation, lightness).
pub const PRIME_WALK_HUE_CYCLE: f64 = 359.0;
pub const PRIME_WALK_SATURATION_CYCLE: f64 = 101.0;
pub const PRIME_WALK_LIGHTNESS_CYCLE: f64 = 103.0;

/// Multipliers of the prime-walk saturation and lightness steps.
pub const PRIME_WALK_SATURATION_STEP: f64 = 13.0;
pub const PRIME_WALK_LIGHTNESS_STEP: f64 = 19.0;

/// Bases of the Halton sequence for hue, saturation, lightness.
pub const HALTON_BASES: [f64; 3] = [3.0, 5.0, 7.0];

/// Reserved registry name of a caller-supplied profile.
pub const USER_PROFILE_NAME: &str = "user";

/// Profile used when a caller names none.
pub const DEFAULT_PROFILE_NAME: &str = "default";

/// Profiles of a tag chip: text color and background color.
pub const TAG_FOREGROUND_PROFILE: &str = "dark";
pub const TAG_BACKGROUND_PROFILE: &str = "pastel";
