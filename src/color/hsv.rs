//! RGB <-> HSV conversion
//!
//! Hue is kept in tenths of a degree (`0..3600`), fine enough that
//! RGB -> HSV -> RGB gives every channel back within one step. Saturation
//! and value use the full 8-bit range.

use super::Rgb;

/// Hue steps in a full turn of the color wheel
pub const HUE_STEPS: u16 = 3600;
/// Hue steps per degree
pub const HUE_STEPS_PER_DEGREE: u16 = 10;

/// HSV color, hue in tenths of a degree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hsv {
    /// Hue, `0..3600` tenths of a degree
    pub hue: u16,
    /// Saturation, 0-255
    pub sat: u8,
    /// Value, 0-255
    pub val: u8,
}

impl Hsv {
    pub const fn new(hue: u16, sat: u8, val: u8) -> Self {
        Self { hue, sat, val }
    }

    /// Color with the hue given in whole degrees
    pub const fn from_degrees(degrees: u16, sat: u8, val: u8) -> Self {
        Self::new((degrees % 360) * HUE_STEPS_PER_DEGREE, sat, val)
    }

    /// Hue rounded to whole degrees
    pub const fn degrees(self) -> u16 {
        ((self.hue % HUE_STEPS + HUE_STEPS_PER_DEGREE / 2) / HUE_STEPS_PER_DEGREE) % 360
    }

    /// Same hue and saturation with a different value
    #[must_use]
    pub const fn with_val(self, val: u8) -> Self {
        Self {
            hue: self.hue,
            sat: self.sat,
            val,
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn unit_to_u8(value: f32) -> u8 {
    libm::roundf(value.clamp(0.0, 1.0) * 255.0) as u8
}

/// Convert RGB to HSV.
///
/// Black and grey colors have no defined hue, they map to hue 0 and
/// saturation 0.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn rgb2hsv(rgb: Rgb) -> Hsv {
    let max = rgb.r.max(rgb.g).max(rgb.b);
    let min = rgb.r.min(rgb.g).min(rgb.b);

    if max == 0 || max == min {
        return Hsv::new(0, 0, max);
    }

    let r = f32::from(rgb.r) / 255.0;
    let g = f32::from(rgb.g) / 255.0;
    let b = f32::from(rgb.b) / 255.0;
    let max_f = f32::from(max) / 255.0;
    let chroma = f32::from(max - min) / 255.0;

    let mut hue = if max == rgb.r {
        60.0 * ((g - b) / chroma)
    } else if max == rgb.g {
        60.0 * ((b - r) / chroma) + 120.0
    } else {
        60.0 * ((r - g) / chroma) + 240.0
    };
    if hue < 0.0 {
        hue += 360.0;
    }

    Hsv {
        hue: (libm::roundf(hue * f32::from(HUE_STEPS_PER_DEGREE)) as u16) % HUE_STEPS,
        sat: unit_to_u8(chroma / max_f),
        val: max,
    }
}

/// Convert HSV to RGB using the six-sector decomposition of the hue wheel.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn hsv2rgb(hsv: Hsv) -> Rgb {
    let h = f32::from(hsv.hue % HUE_STEPS) / f32::from(60 * HUE_STEPS_PER_DEGREE);
    let s = f32::from(hsv.sat) / 255.0;
    let v = f32::from(hsv.val) / 255.0;

    let sector = h as u8;
    let f = h - f32::from(sector);
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match sector {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb {
        r: unit_to_u8(r),
        g: unit_to_u8(g),
        b: unit_to_u8(b),
    }
}
