//! HSLuv and HPLuv to sRGB conversion.
//!
//! Both spaces are cylindrical re-mappings of CIELUV: HSLuv stretches chroma
//! to the sRGB gamut boundary for each hue, HPLuv uses the largest chroma
//! that is in gamut for every hue at a given lightness (pastels only).
//! Constants follow the reference implementation at hsluv.org.

use std::f64::consts::PI;

const M: [[f64; 3]; 3] = [
    [3.240969941904521, -1.537383177570093, -0.498610760293],
    [-0.96924363628087, 1.87596750150772, 0.041555057407175],
    [0.055630079696993, -0.20397695888897, 1.056971514242878],
];

const REF_Y: f64 = 1.0;
const REF_U: f64 = 0.19783000664283;
const REF_V: f64 = 0.46831999493879;

const KAPPA: f64 = 903.2962962;
const EPSILON: f64 = 0.0088564516;

#[derive(Debug, Clone, Copy)]
struct Line {
    slope: f64,
    intercept: f64,
}

/// The six gamut-boundary lines in the chroma plane at lightness `l`.
fn bounds(l: f64) -> [Line; 6] {
    let sub1 = (l + 16.0).powi(3) / 1_560_896.0;
    let sub2 = if sub1 > EPSILON { sub1 } else { l / KAPPA };

    let mut lines = [Line {
        slope: 0.0,
        intercept: 0.0,
    }; 6];
    for (c, [m1, m2, m3]) in M.iter().copied().enumerate() {
        for t in 0..2 {
            let t = f64::from(t);
            let top1 = (284_517.0 * m1 - 94_839.0 * m3) * sub2;
            let top2 = (838_422.0 * m3 + 769_860.0 * m2 + 731_718.0 * m1) * l * sub2
                - 769_860.0 * t * l;
            let bottom = (632_260.0 * m3 - 126_452.0 * m2) * sub2 + 126_452.0 * t;
            lines[c * 2 + t as usize] = Line {
                slope: top1 / bottom,
                intercept: top2 / bottom,
            };
        }
    }
    lines
}

fn max_safe_chroma_for_l(l: f64) -> f64 {
    bounds(l)
        .iter()
        .map(|line| line.intercept.abs() / (line.slope.powi(2) + 1.0).sqrt())
        .fold(f64::MAX, f64::min)
}

fn max_chroma_for_lh(l: f64, h: f64) -> f64 {
    let hrad = h / 360.0 * PI * 2.0;
    bounds(l)
        .iter()
        .map(|line| line.intercept / (hrad.sin() - line.slope * hrad.cos()))
        .filter(|length| *length >= 0.0)
        .fold(f64::MAX, f64::min)
}

fn from_linear(c: f64) -> f64 {
    if c <= 0.0031308 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

fn xyz_to_rgb([x, y, z]: [f64; 3]) -> [f64; 3] {
    M.map(|[m1, m2, m3]| from_linear(m1 * x + m2 * y + m3 * z))
}

fn l_to_y(l: f64) -> f64 {
    if l <= 8.0 {
        REF_Y * l / KAPPA
    } else {
        REF_Y * ((l + 16.0) / 116.0).powi(3)
    }
}

fn luv_to_xyz([l, u, v]: [f64; 3]) -> [f64; 3] {
    if l == 0.0 {
        return [0.0, 0.0, 0.0];
    }
    let var_u = u / (13.0 * l) + REF_U;
    let var_v = v / (13.0 * l) + REF_V;
    let y = l_to_y(l);
    let x = 0.0 - (9.0 * y * var_u) / ((var_u - 4.0) * var_v - var_u * var_v);
    let z = (9.0 * y - 15.0 * var_v * y - var_v * x) / (3.0 * var_v);
    [x, y, z]
}

fn lch_to_luv([l, c, h]: [f64; 3]) -> [f64; 3] {
    let hrad = h / 180.0 * PI;
    [l, hrad.cos() * c, hrad.sin() * c]
}

/// Chroma scaled from percent of `max_chroma`; extreme lightness is achromatic.
fn to_lch(h: f64, s: f64, l: f64, max_chroma: impl FnOnce() -> f64) -> [f64; 3] {
    if l > 99.999_999_9 {
        return [100.0, 0.0, h];
    }
    if l < 0.000_000_01 {
        return [0.0, 0.0, h];
    }
    [l, max_chroma() / 100.0 * s, h]
}

fn lch_to_rgb(lch: [f64; 3]) -> [f64; 3] {
    xyz_to_rgb(luv_to_xyz(lch_to_luv(lch)))
}

/// Formats channels in `[0,1]` as lowercase `#rrggbb`.
fn rgb_to_hex(rgb: [f64; 3]) -> String {
    let mut hex = String::with_capacity(7);
    hex.push('#');
    for channel in rgb {
        // Half-up rounding, clamped to the byte range.
        let byte = (channel * 255.0 + 0.5).floor().clamp(0.0, 255.0) as u8;
        hex.push_str(&format!("{:02x}", byte));
    }
    hex
}

/// HSLuv (hue degrees, saturation and lightness in percent) → sRGB in `[0,1]`.
pub fn hsluv_to_rgb(h: f64, s: f64, l: f64) -> [f64; 3] {
    lch_to_rgb(to_lch(h, s, l, || max_chroma_for_lh(l, h)))
}

/// HPLuv (hue degrees, saturation and lightness in percent) → sRGB in `[0,1]`.
pub fn hpluv_to_rgb(h: f64, s: f64, l: f64) -> [f64; 3] {
    lch_to_rgb(to_lch(h, s, l, || max_safe_chroma_for_l(l)))
}

pub fn hsluv_to_hex(h: f64, s: f64, l: f64) -> String {
    rgb_to_hex(hsluv_to_rgb(h, s, l))
}

pub fn hpluv_to_hex(h: f64, s: f64, l: f64) -> String {
    rgb_to_hex(hpluv_to_rgb(h, s, l))
}
