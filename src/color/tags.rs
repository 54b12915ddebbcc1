//! Tag chip styling.

use super::{colorize, ColorKey, ColorOptions};
use crate::constants::{TAG_BACKGROUND_PROFILE, TAG_FOREGROUND_PROFILE};
use crate::error::ColorError;
use serde::Serialize;

/// Text and background color of a tag chip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagColors {
    pub foreground: String,
    pub background: String,
}

/// Colors a tag with a dark foreground over a pastel background of the
/// same hue family; both derive from the same key so they always pair.
pub fn tag_colors(tag: impl Into<ColorKey>) -> Result<TagColors, ColorError> {
    let key = tag.into();
    let base = ColorOptions::default();
    Ok(TagColors {
        foreground: colorize(
            key.clone(),
            &base.clone().with_profile(TAG_FOREGROUND_PROFILE),
        )?,
        background: colorize(key, &base.with_profile(TAG_BACKGROUND_PROFILE))?,
    })
}

/// Tailwind classes for the trip-type tags the blog styles by hand.
pub fn tag_classes(tag: &str) -> &'static str {
    match tag {
        "Day Hike" => "bg-red-200 text-red-700",
        "Overnight" => "bg-violet-200 text-violet-700",
        "Alpine" => "bg-blue-200 text-blue-700",
        "Coastal" => "bg-green-200 text-green-700",
        "Multi-Day" => "bg-orange-200 text-orange-700",
        _ => "bg-neutral-200 text-neutral-700",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_pair_is_stable_and_distinct() {
        let first = tag_colors("Alpine").unwrap();
        let second = tag_colors("Alpine").unwrap();
        assert_eq!(first, second);
        assert_ne!(first.foreground, first.background);
    }

    #[test]
    fn test_known_tag_classes() {
        assert_eq!(tag_classes("Coastal"), "bg-green-200 text-green-700");
        assert_eq!(tag_classes("coastal"), "bg-neutral-200 text-neutral-700");
    }
}
