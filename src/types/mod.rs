use thiserror::Error;

mod ids;
mod numeric;

pub use ids::*;
pub use numeric::*;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid Notion ID format: {0}")]
    InvalidId(String),

    #[error("Unknown column type: {0}")]
    UnknownColumnType(String),

    #[error("Unknown color space: {0}")]
    UnknownColorSpace(String),

    #[error("Unknown generator: {0}")]
    UnknownGenerator(String),

    #[error("Color profile bound {field} = {value} is outside 0..=100")]
    ProfileBoundOutOfRange { field: &'static str, value: f64 },

    #[error("Color profile {axis} range is inverted: min {min} > max {max}")]
    ProfileRangeInverted {
        axis: &'static str,
        min: f64,
        max: f64,
    },

    #[error("Malformed color profile '{input}': {reason}")]
    MalformedProfile { input: String, reason: String },

    #[error("Empty required field: {0}")]
    EmptyField(&'static str),
}
