//! Color profiles: a target color space plus saturation/lightness bounds.

use crate::constants::USER_PROFILE_NAME;
use crate::error::ColorError;
use crate::types::ValidationError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Color space a profile renders in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSpace {
    /// CSS `hsl(...)` output.
    Hsl,
    /// HSLuv, rendered as hex.
    Husl,
    /// HPLuv (pastel-safe HSLuv), rendered as hex.
    Huslp,
}

impl ColorSpace {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorSpace::Hsl => "hsl",
            ColorSpace::Husl => "husl",
            ColorSpace::Huslp => "huslp",
        }
    }
}

impl std::str::FromStr for ColorSpace {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hsl" => Ok(ColorSpace::Hsl),
            "husl" => Ok(ColorSpace::Husl),
            "huslp" => Ok(ColorSpace::Huslp),
            _ => Err(ValidationError::UnknownColorSpace(s.to_string())),
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wire shape of a profile: `[space, sMin, sMax, lMin, lMax]`.
type ProfileTuple = (ColorSpace, f64, f64, f64, f64);

/// Saturation and lightness bounds, both within `0..=100` and never inverted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProfileTuple", into = "ProfileTuple")]
pub struct ColorProfile {
    space: ColorSpace,
    saturation_min: f64,
    saturation_max: f64,
    lightness_min: f64,
    lightness_max: f64,
}

impl ColorProfile {
    pub fn new(
        space: ColorSpace,
        saturation: (f64, f64),
        lightness: (f64, f64),
    ) -> Result<Self, ValidationError> {
        check_range("saturation", ["saturationMin", "saturationMax"], saturation)?;
        check_range("lightness", ["lightnessMin", "lightnessMax"], lightness)?;
        Ok(Self::unchecked(space, saturation, lightness))
    }

    fn unchecked(space: ColorSpace, saturation: (f64, f64), lightness: (f64, f64)) -> Self {
        Self {
            space,
            saturation_min: saturation.0,
            saturation_max: saturation.1,
            lightness_min: lightness.0,
            lightness_max: lightness.1,
        }
    }

    pub fn space(&self) -> ColorSpace {
        self.space
    }

    pub fn saturation(&self) -> (f64, f64) {
        (self.saturation_min, self.saturation_max)
    }

    pub fn lightness(&self) -> (f64, f64) {
        (self.lightness_min, self.lightness_max)
    }
}

fn check_range(
    axis: &'static str,
    fields: [&'static str; 2],
    (min, max): (f64, f64),
) -> Result<(), ValidationError> {
    for (field, value) in fields.into_iter().zip([min, max]) {
        if !(0.0..=100.0).contains(&value) {
            return Err(ValidationError::ProfileBoundOutOfRange { field, value });
        }
    }
    if min > max {
        return Err(ValidationError::ProfileRangeInverted { axis, min, max });
    }
    Ok(())
}

impl TryFrom<ProfileTuple> for ColorProfile {
    type Error = ValidationError;

    fn try_from((space, s_min, s_max, l_min, l_max): ProfileTuple) -> Result<Self, Self::Error> {
        ColorProfile::new(space, (s_min, s_max), (l_min, l_max))
    }
}

impl From<ColorProfile> for ProfileTuple {
    fn from(p: ColorProfile) -> Self {
        (
            p.space,
            p.saturation_min,
            p.saturation_max,
            p.lightness_min,
            p.lightness_max,
        )
    }
}

/// Parses `space,sMin,sMax,lMin,lMax`, e.g. `hsl,40,60,30,50`.
impl std::str::FromStr for ColorProfile {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = |reason: &str| ValidationError::MalformedProfile {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let [space, bounds @ ..] = parts.as_slice() else {
            return Err(malformed("empty profile"));
        };
        if bounds.len() != 4 {
            return Err(malformed("expected a color space and four bounds"));
        }

        let space: ColorSpace = space.parse()?;
        let mut numbers = [0.0_f64; 4];
        for (slot, text) in numbers.iter_mut().zip(bounds) {
            *slot = text
                .parse()
                .map_err(|_| malformed(&format!("'{}' is not a number", text)))?;
        }
        ColorProfile::new(space, (numbers[0], numbers[1]), (numbers[2], numbers[3]))
    }
}

lazy_static::lazy_static! {
    /// Built-in profiles, by name.
    static ref BUILTIN_PROFILES: IndexMap<&'static str, ColorProfile> = {
        use ColorSpace::*;
        let mut profiles = IndexMap::new();
        profiles.insert("hsldefault", ColorProfile::unchecked(Hsl, (65.0, 95.0), (45.0, 75.0)));
        profiles.insert("superwide", ColorProfile::unchecked(Hsl, (30.0, 100.0), (20.0, 90.0)));
        profiles.insert("saturated", ColorProfile::unchecked(Hsl, (100.0, 100.0), (40.0, 70.0)));
        profiles.insert("greyscale", ColorProfile::unchecked(Hsl, (0.0, 0.0), (15.0, 85.0)));
        profiles.insert("default", ColorProfile::unchecked(Husl, (90.0, 100.0), (50.0, 85.0)));
        profiles.insert("dark", ColorProfile::unchecked(Husl, (80.0, 100.0), (30.0, 60.0)));
        profiles.insert("light", ColorProfile::unchecked(Husl, (70.0, 100.0), (60.0, 90.0)));
        profiles.insert("pastel", ColorProfile::unchecked(Huslp, (60.0, 100.0), (60.0, 90.0)));
        profiles.insert("wide", ColorProfile::unchecked(Husl, (50.0, 100.0), (30.0, 85.0)));
        profiles
    };
}

/// Names of the built-in profiles, in registry order.
pub fn builtin_profile_names() -> impl Iterator<Item = &'static str> {
    BUILTIN_PROFILES.keys().copied()
}

/// Profile lookup for a single colorize call.
///
/// Built-ins are shared and immutable; a caller's custom profile is only
/// visible through this value, under the reserved `"user"` name.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileTable<'a> {
    user: Option<&'a ColorProfile>,
}

impl<'a> ProfileTable<'a> {
    pub fn builtin() -> Self {
        Self { user: None }
    }

    pub fn with_user(profile: &'a ColorProfile) -> Self {
        Self {
            user: Some(profile),
        }
    }

    pub fn resolve(&self, name: &str) -> Result<ColorProfile, ColorError> {
        if name == USER_PROFILE_NAME {
            return self
                .user
                .copied()
                .ok_or_else(|| ColorError::UnknownProfile(name.to_string()));
        }
        BUILTIN_PROFILES
            .get(name)
            .copied()
            .ok_or_else(|| ColorError::UnknownProfile(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_resolve() {
        let table = ProfileTable::builtin();
        let pastel = table.resolve("pastel").unwrap();
        assert_eq!(pastel.space(), ColorSpace::Huslp);
        assert_eq!(pastel.saturation(), (60.0, 100.0));
        assert_eq!(pastel.lightness(), (60.0, 90.0));
        assert_eq!(builtin_profile_names().count(), 9);
    }

    #[test]
    fn test_user_profile_is_call_local() {
        let custom: ColorProfile = "hsl,10,20,30,40".parse().unwrap();
        assert_eq!(ProfileTable::with_user(&custom).resolve("user").unwrap(), custom);
        assert_eq!(
            ProfileTable::builtin().resolve("user"),
            Err(ColorError::UnknownProfile("user".to_string()))
        );
    }

    #[test]
    fn test_unknown_profile() {
        assert_eq!(
            ProfileTable::builtin().resolve("neon"),
            Err(ColorError::UnknownProfile("neon".to_string()))
        );
    }

    #[test]
    fn test_profile_validation() {
        assert!(matches!(
            ColorProfile::new(ColorSpace::Hsl, (50.0, 40.0), (0.0, 10.0)),
            Err(ValidationError::ProfileRangeInverted { axis: "saturation", .. })
        ));
        assert!(matches!(
            ColorProfile::new(ColorSpace::Hsl, (0.0, 40.0), (0.0, 110.0)),
            Err(ValidationError::ProfileBoundOutOfRange { field: "lightnessMax", .. })
        ));
        assert!("hsl,1,2,3".parse::<ColorProfile>().is_err());
        assert!("rgb,1,2,3,4".parse::<ColorProfile>().is_err());
    }

    #[test]
    fn test_profile_json_shape() {
        let profile: ColorProfile = serde_json::from_str(r#"["huslp", 60, 100, 60, 90]"#).unwrap();
        assert_eq!(profile, ProfileTable::builtin().resolve("pastel").unwrap());
        assert!(serde_json::from_str::<ColorProfile>(r#"["hsl", 90, 10, 0, 0]"#).is_err());
    }
}
