//! White channel extraction for RGBW fixtures
//!
//! The white LED is modelled by the RGB color it produces at full power
//! (its "RGB equivalent"). The white share of a color is the largest
//! amount of that equivalent which fits under every RGB channel.

use super::Rgb;

/// Color with a dedicated white channel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rgbw {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub w: u8,
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_u8(value: f32) -> u8 {
    libm::roundf(value.clamp(0.0, 255.0)) as u8
}

/// Split a color into RGB and white shares.
///
/// After the white share is subtracted, the four channels are rescaled so
/// their maximum matches the maximum of the input color. A zero component
/// in `white_equivalent` does not limit the white share. Pure white as the
/// equivalent gives plain min-channel extraction.
pub fn rgb_to_rgbw(rgb: Rgb, white_equivalent: Rgb) -> Rgbw {
    let white = [
        (rgb.r, white_equivalent.r),
        (rgb.g, white_equivalent.g),
        (rgb.b, white_equivalent.b),
    ]
    .iter()
    .filter(|(_, equivalent)| *equivalent > 0)
    .map(|(channel, equivalent)| f32::from(*channel) * 255.0 / f32::from(*equivalent))
    .fold(f32::INFINITY, f32::min);

    if !white.is_finite() {
        return Rgbw {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
            w: 0,
        };
    }

    let remove = |channel: u8, equivalent: u8| {
        channel.saturating_sub(round_u8(white * f32::from(equivalent) / 255.0))
    };
    let extracted = Rgbw {
        r: remove(rgb.r, white_equivalent.r),
        g: remove(rgb.g, white_equivalent.g),
        b: remove(rgb.b, white_equivalent.b),
        w: round_u8(white),
    };

    let max_in = rgb.r.max(rgb.g).max(rgb.b);
    let max_out = extracted.r.max(extracted.g).max(extracted.b).max(extracted.w);
    let factor = if max_out > 0 {
        f32::from(max_in) / f32::from(max_out)
    } else {
        0.0
    };

    Rgbw {
        r: round_u8(f32::from(extracted.r) * factor),
        g: round_u8(f32::from(extracted.g) * factor),
        b: round_u8(f32::from(extracted.b) * factor),
        w: round_u8(f32::from(extracted.w) * factor),
    }
}
