use super::Rgb;

/// Warmest supported white point in Kelvin
pub const MIN_TEMPERATURE: u16 = 2700;
/// Coldest supported white point in Kelvin
pub const MAX_TEMPERATURE: u16 = 6500;

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scale_channel(value: f32, brightness: u8) -> u8 {
    let scaled = value * f32::from(brightness) / 255.0;
    libm::roundf(scaled.clamp(0.0, 255.0)) as u8
}

/// Convert a Kelvin temperature to an RGB color scaled by `brightness`
///
/// Approximates black-body radiation. The temperature is clamped to
/// 500K..=40000K and evaluated in whole 100K steps.
pub fn kelvin_to_rgb(kelvin: u16, brightness: u8) -> Rgb {
    let temp = f32::from(kelvin.clamp(500, 40_000) / 100);

    let red = if temp <= 66.0 {
        255.0
    } else {
        329.698_73 * libm::powf(temp - 60.0, -0.133_204_76)
    };

    let green = if temp < 66.0 {
        99.470_8 * libm::logf(temp) - 161.119_57
    } else {
        288.122_17 * libm::powf(temp - 60.0, -0.075_514_85)
    };

    let blue = if temp <= 19.0 {
        0.0
    } else if temp <= 66.0 {
        138.517_73 * libm::logf(temp - 10.0) - 305.044_8
    } else {
        255.0
    };

    Rgb {
        r: scale_channel(red, brightness),
        g: scale_channel(green, brightness),
        b: scale_channel(blue, brightness),
    }
}
