mod hsv;
mod kelvin;
mod white;

use smart_leds::RGB8;

pub use hsv::{HUE_STEPS, HUE_STEPS_PER_DEGREE, Hsv, hsv2rgb, rgb2hsv};
pub use kelvin::{MAX_TEMPERATURE, MIN_TEMPERATURE, kelvin_to_rgb};
pub use white::{Rgbw, rgb_to_rgbw};

pub type Rgb = RGB8;
