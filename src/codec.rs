//! Packed 24-bit color codec
//!
//! Bus telegrams carry a color as one integer: bits 23..16 hold the first
//! component, 15..8 the second and 7..0 the third. Bits above 23 are
//! ignored. For HSV payloads the hue travels as a byte spanning 0..=359
//! degrees and is rescaled to and from tenths of a degree. Decoding and
//! re-encoding a wire value gives it back unchanged; the other direction
//! moves the hue by at most half a wire step.

use crate::color::{HUE_STEPS_PER_DEGREE, Hsv, Rgb};

/// Internal hue of the top wire value, 359 degrees
const MAX_HUE: u32 = 359 * HUE_STEPS_PER_DEGREE as u32;

#[inline]
#[allow(clippy::cast_possible_truncation)]
const fn unpack(raw: u32) -> (u8, u8, u8) {
    (
        ((raw >> 16) & 0xFF) as u8,
        ((raw >> 8) & 0xFF) as u8,
        (raw & 0xFF) as u8,
    )
}

#[inline]
const fn pack(first: u8, second: u8, third: u8) -> u32 {
    (first as u32) << 16 | (second as u32) << 8 | third as u32
}

/// Rescale a wire hue byte to tenths of a degree
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn hue_from_wire(hue: u8) -> u16 {
    ((hue as u32 * MAX_HUE + 127) / 255) as u16
}

/// Rescale a hue in tenths of a degree to a wire byte
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn hue_to_wire(hue: u16) -> u8 {
    let hue = if hue as u32 > MAX_HUE {
        MAX_HUE
    } else {
        hue as u32
    };
    ((hue * 255 + MAX_HUE / 2) / MAX_HUE) as u8
}

/// Decode an RGB color from a packed `0xRRGGBB` value
pub const fn rgb_from_packed(raw: u32) -> Rgb {
    let (r, g, b) = unpack(raw);
    Rgb { r, g, b }
}

/// Encode an RGB color as `0xRRGGBB`
pub const fn rgb_to_packed(rgb: Rgb) -> u32 {
    pack(rgb.r, rgb.g, rgb.b)
}

/// Decode an HSV color from a packed `0xHHSSVV` value
pub const fn hsv_from_packed(raw: u32) -> Hsv {
    let (hue, sat, val) = unpack(raw);
    Hsv {
        hue: hue_from_wire(hue),
        sat,
        val,
    }
}

/// Encode an HSV color as `0xHHSSVV`
pub const fn hsv_to_packed(hsv: Hsv) -> u32 {
    pack(hue_to_wire(hsv.hue), hsv.sat, hsv.val)
}
