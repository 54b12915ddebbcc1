//! Seed derivation and the two quasi-random component generators.

use crate::constants::{
    HALTON_BASES, PRIME_WALK_HUE_CYCLE, PRIME_WALK_LIGHTNESS_CYCLE, PRIME_WALK_LIGHTNESS_STEP,
    PRIME_WALK_SATURATION_CYCLE, PRIME_WALK_SATURATION_STEP,
};
use crate::types::{parse_numeric_text, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Anything that can be colorized: tag text or a number.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorKey {
    Text(String),
    Number(f64),
}

impl From<&str> for ColorKey {
    fn from(text: &str) -> Self {
        ColorKey::Text(text.to_string())
    }
}

impl From<String> for ColorKey {
    fn from(text: String) -> Self {
        ColorKey::Text(text)
    }
}

impl From<&String> for ColorKey {
    fn from(text: &String) -> Self {
        ColorKey::Text(text.clone())
    }
}

impl From<f64> for ColorKey {
    fn from(n: f64) -> Self {
        ColorKey::Number(n)
    }
}

impl From<i64> for ColorKey {
    fn from(n: i64) -> Self {
        ColorKey::Number(n as f64)
    }
}

impl From<i32> for ColorKey {
    fn from(n: i32) -> Self {
        ColorKey::Number(f64::from(n))
    }
}

impl From<u32> for ColorKey {
    fn from(n: u32) -> Self {
        ColorKey::Number(f64::from(n))
    }
}

impl ColorKey {
    /// The numeric seed of this key.
    ///
    /// Numeric-looking text is read as a number, other text is hashed.
    /// Non-finite values collapse to 0 so every key has a usable seed.
    pub fn seed(&self) -> f64 {
        let seed = match self {
            ColorKey::Number(n) => *n,
            ColorKey::Text(text) => match parse_numeric_text(text) {
                Some(n) => n,
                None => f64::from(string_hash(text)),
            },
        };
        if seed.is_finite() {
            seed
        } else {
            0.0
        }
    }
}

/// `h = 31*h + unit` over UTF-16 code units in wrapping 32-bit signed arithmetic.
///
/// Identical to `java.lang.String#hashCode`; existing tag colors depend on
/// the exact overflow behaviour.
pub fn string_hash(text: &str) -> i32 {
    text.encode_utf16().fold(0_i32, |hash, unit| {
        hash.wrapping_mul(31).wrapping_add(i32::from(unit))
    })
}

/// Source of the three raw components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Generator {
    /// Halton low-discrepancy sequence in bases 3, 5, 7.
    #[default]
    Halton,
    /// Modular walks over the primes 359, 101 and 103.
    PrimeWalk,
}

impl Generator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Generator::Halton => "halton",
            Generator::PrimeWalk => "primeWalk",
        }
    }
}

impl std::str::FromStr for Generator {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "halton" => Ok(Generator::Halton),
            "primeWalk" | "prime-walk" | "prime_walk" => Ok(Generator::PrimeWalk),
            _ => Err(ValidationError::UnknownGenerator(s.to_string())),
        }
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw hue in `[0,360)` (prime walk: `(-360,360)` before centering) plus
/// saturation and lightness inputs in `[0,100)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawComponents {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

/// Radical inverse of `index` in `base`: the `index`-th Halton value, in `[0,1)`.
pub fn radical_inverse(index: f64, base: f64) -> f64 {
    let mut result = 0.0;
    let mut fraction = 1.0 / base;
    let mut i = index;
    while i > 0.0 {
        result += fraction * (i % base);
        i = (i / base).floor();
        fraction /= base;
    }
    result
}

pub fn halton(seed: f64) -> RawComponents {
    let index = if seed < 0.0 { to_uint32(seed) } else { seed };
    let [h, s, l] = HALTON_BASES.map(|base| radical_inverse(index, base));
    RawComponents {
        hue: h * 360.0,
        saturation: s * 100.0,
        lightness: l * 100.0,
    }
}

/// Prime-walk components.
///
/// Hue keeps the sign of the seed, so negative seeds walk the wheel
/// backwards; saturation and lightness residues are taken non-negative so
/// they stay inside the profile bounds.
pub fn prime_walk(seed: f64, hue_distance: f64) -> RawComponents {
    RawComponents {
        hue: ((seed * hue_distance) % PRIME_WALK_HUE_CYCLE) * (360.0 / PRIME_WALK_HUE_CYCLE),
        saturation: (seed * PRIME_WALK_SATURATION_STEP).rem_euclid(PRIME_WALK_SATURATION_CYCLE)
            * (100.0 / PRIME_WALK_SATURATION_CYCLE),
        lightness: (seed * PRIME_WALK_LIGHTNESS_STEP).rem_euclid(PRIME_WALK_LIGHTNESS_CYCLE)
            * (100.0 / PRIME_WALK_LIGHTNESS_CYCLE),
    }
}

/// ECMAScript `ToUint32`: truncate, then wrap modulo 2^32.
fn to_uint32(n: f64) -> f64 {
    const TWO_POW_32: f64 = 4_294_967_296.0;
    n.trunc().rem_euclid(TWO_POW_32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_hash_matches_java() {
        assert_eq!(string_hash(""), 0);
        assert_eq!(string_hash("a"), 97);
        assert_eq!(string_hash("hello"), 99_162_322);
        assert_eq!(string_hash("Aa"), string_hash("BB"));
        assert_eq!(string_hash("polygenelubricants"), i32::MIN);
    }

    #[test]
    fn test_hash_uses_utf16_units() {
        // U+1F600 is the surrogate pair D83D DE00.
        let expected = 0xD83D_i32.wrapping_mul(31).wrapping_add(0xDE00);
        assert_eq!(string_hash("\u{1F600}"), expected);
    }

    #[test]
    fn test_seed_from_key() {
        assert_eq!(ColorKey::from("42").seed(), 42.0);
        assert_eq!(ColorKey::from("").seed(), 0.0);
        assert_eq!(ColorKey::from("a").seed(), 97.0);
        assert_eq!(ColorKey::from(7).seed(), 7.0);
        assert_eq!(ColorKey::from("Infinity").seed(), 0.0);
        assert_eq!(ColorKey::from(f64::NAN).seed(), 0.0);
    }

    #[test]
    fn test_radical_inverse() {
        assert_eq!(radical_inverse(0.0, 3.0), 0.0);
        assert!((radical_inverse(1.0, 3.0) - 1.0 / 3.0).abs() < 1e-12);
        assert!((radical_inverse(2.0, 3.0) - 2.0 / 3.0).abs() < 1e-12);
        assert!((radical_inverse(3.0, 3.0) - 1.0 / 9.0).abs() < 1e-12);
        assert!((radical_inverse(4.0, 2.0) - 0.125).abs() < 1e-12);
    }

    #[test]
    fn test_halton_reinterprets_negative_seeds() {
        assert_eq!(halton(-1.0), halton(4_294_967_295.0));
        let first = halton(1.0);
        assert!((first.hue - 120.0).abs() < 1e-9);
        assert!((first.saturation - 20.0).abs() < 1e-9);
        assert!((first.lightness - 100.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_prime_walk_components() {
        let c = prime_walk(1.0, 223.0);
        assert!((c.hue - 223.0 * 360.0 / 359.0).abs() < 1e-9);
        assert!((c.saturation - 13.0 * 100.0 / 101.0).abs() < 1e-9);
        assert!((c.lightness - 19.0 * 100.0 / 103.0).abs() < 1e-9);

        let negative = prime_walk(-1.0, 223.0);
        assert!(negative.hue < 0.0);
        assert!(negative.saturation >= 0.0 && negative.lightness >= 0.0);
    }
}
