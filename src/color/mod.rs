// src/color/mod.rs
//! Deterministic colors for arbitrary keys.
//!
//! A key is reduced to a numeric seed, the seed drives a quasi-random
//! generator for hue, saturation and lightness, and the result is fitted
//! into a color profile and rendered in the profile's color space. The same
//! key and options always produce the same color.

mod generator;
pub mod hsluv;
mod profile;
mod tags;

pub use generator::{
    halton, prime_walk, radical_inverse, string_hash, ColorKey, Generator, RawComponents,
};
pub use profile::{builtin_profile_names, ColorProfile, ColorSpace, ProfileTable};
pub use tags::{tag_classes, tag_colors, TagColors};

use crate::constants::{DEFAULT_PRIME_WALK_HUE_DISTANCE, DEFAULT_PROFILE_NAME, USER_PROFILE_NAME};
use crate::error::ColorError;
use serde::{Deserialize, Serialize};

/// Which profile a call uses: a registered name, or a custom profile that
/// is visible as `"user"` for that call only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProfileChoice {
    Named(String),
    Custom(ColorProfile),
}

impl Default for ProfileChoice {
    fn default() -> Self {
        ProfileChoice::Named(DEFAULT_PROFILE_NAME.to_string())
    }
}

impl From<&str> for ProfileChoice {
    fn from(name: &str) -> Self {
        ProfileChoice::Named(name.to_string())
    }
}

impl From<ColorProfile> for ProfileChoice {
    fn from(profile: ColorProfile) -> Self {
        ProfileChoice::Custom(profile)
    }
}

/// Options of a colorize call. Every field has a default, so partial
/// JSON such as `{"colorProfile": "dark"}` deserialises.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorOptions {
    pub color_profile: ProfileChoice,
    /// Added to the hue, in degrees.
    pub hue_center: f64,
    /// Multiplies the centred hue.
    pub hue_scale: f64,
    pub generator: Generator,
    pub prime_walk_hue_distance: f64,
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            color_profile: ProfileChoice::default(),
            hue_center: 0.0,
            hue_scale: 1.0,
            generator: Generator::Halton,
            prime_walk_hue_distance: DEFAULT_PRIME_WALK_HUE_DISTANCE,
        }
    }
}

impl ColorOptions {
    pub fn with_profile(mut self, profile: impl Into<ProfileChoice>) -> Self {
        self.color_profile = profile.into();
        self
    }

    pub fn with_generator(mut self, generator: Generator) -> Self {
        self.generator = generator;
        self
    }

    pub fn with_hue(mut self, center: f64, scale: f64) -> Self {
        self.hue_center = center;
        self.hue_scale = scale;
        self
    }

    pub fn with_prime_walk_hue_distance(mut self, distance: f64) -> Self {
        self.prime_walk_hue_distance = distance;
        self
    }

    /// Resolves the profile this call renders with.
    pub fn profile(&self) -> Result<ColorProfile, ColorError> {
        match &self.color_profile {
            ProfileChoice::Named(name) => ProfileTable::builtin().resolve(name),
            ProfileChoice::Custom(profile) => {
                ProfileTable::with_user(profile).resolve(USER_PROFILE_NAME)
            }
        }
    }
}

/// Hue in degrees `[0,360)`, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HslComponents {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl HslComponents {
    /// Renders in `space`: a CSS `hsl()` string or a `#rrggbb` hex string.
    pub fn render(&self, space: ColorSpace) -> String {
        match space {
            ColorSpace::Hsl => format!("hsl({},{}%,{}%)", self.h, self.s, self.l),
            ColorSpace::Husl => hsluv::hsluv_to_hex(self.h, self.s, self.l),
            ColorSpace::Huslp => hsluv::hpluv_to_hex(self.h, self.s, self.l),
        }
    }
}

/// Computes the fitted components of `key` together with the profile used.
pub fn hsl_components(
    key: impl Into<ColorKey>,
    options: &ColorOptions,
) -> Result<(HslComponents, ColorProfile), ColorError> {
    let profile = options.profile()?;
    let seed = key.into().seed();

    let raw = match options.generator {
        Generator::Halton => halton(seed),
        Generator::PrimeWalk => prime_walk(seed, options.prime_walk_hue_distance),
    };

    let components = fit(raw, &profile, options);
    log::trace!(
        "seed {} via {} → h={} s={} l={}",
        seed,
        options.generator,
        components.h,
        components.s,
        components.l
    );
    Ok((components, profile))
}

/// Returns the color of `key`.
///
/// # Errors
///
/// [`ColorError::UnknownProfile`] when the options name a profile that is
/// not registered.
pub fn colorize(key: impl Into<ColorKey>, options: &ColorOptions) -> Result<String, ColorError> {
    let (components, profile) = hsl_components(key, options)?;
    Ok(components.render(profile.space()))
}

fn fit(raw: RawComponents, profile: &ColorProfile, options: &ColorOptions) -> HslComponents {
    let mut hue = raw.hue;
    if hue >= 180.0 {
        hue -= 360.0;
    }

    let mut h = ((hue % 360.0) * options.hue_scale + options.hue_center) % 360.0;
    if h < 0.0 {
        h += 360.0;
    }
    if !(0.0..360.0).contains(&h) {
        // -0.0, rounding up to 360, or a non-finite hue option.
        h = if h.is_finite() { h.rem_euclid(360.0) % 360.0 } else { 0.0 };
    }
    h += 0.0;

    let (s_min, s_max) = profile.saturation();
    let (l_min, l_max) = profile.lightness();
    let mut s = (raw.saturation % 100.0) / 100.0 * (s_max - s_min) + s_min;
    let mut l = (raw.lightness % 100.0) / 100.0 * (l_max - l_min) + l_min;
    if s < 0.0 {
        s += 100.0;
    }
    if l < 0.0 {
        l += 100.0;
    }

    HslComponents { h, s, l }
}
