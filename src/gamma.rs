//! Duty curves for PWM outputs
//!
//! LEDs look much brighter at low duty than a linear ramp suggests. The
//! logarithmic table compensates so that equal brightness steps look like
//! equal steps to the eye.

/// Top of the 10-bit PWM duty range
pub const MAX_DUTY: u16 = 1023;

/// Logarithmic dimming curve, 8-bit brightness to 10-bit duty
#[rustfmt::skip]
pub const LOG_DUTY_LUT: [u16; 256] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15,
    16, 17, 18, 19, 20, 21, 22, 24, 25, 26, 27, 28, 29, 30, 31, 32,
    34, 35, 36, 37, 38, 39, 41, 42, 43, 44, 45, 47, 48, 49, 51, 52,
    53, 54, 56, 57, 59, 60, 61, 63, 64, 66, 67, 69, 70, 72, 73, 75,
    76, 78, 79, 81, 83, 84, 86, 88, 89, 91, 93, 95, 96, 98, 100, 102,
    104, 106, 108, 109, 111, 113, 115, 117, 120, 122, 124, 126, 128, 130, 132, 135,
    137, 139, 142, 144, 146, 149, 151, 154, 156, 159, 161, 164, 166, 169, 172, 174,
    177, 180, 183, 185, 188, 191, 194, 197, 200, 203, 206, 209, 212, 215, 219, 222,
    225, 228, 232, 235, 238, 242, 245, 249, 252, 256, 260, 263, 267, 271, 275, 278,
    282, 286, 290, 294, 298, 302, 306, 310, 315, 319, 323, 327, 332, 336, 341, 345,
    350, 354, 359, 364, 368, 373, 378, 383, 388, 392, 397, 403, 408, 413, 418, 423,
    428, 434, 439, 445, 450, 456, 461, 467, 472, 478, 484, 490, 496, 502, 508, 514,
    520, 526, 532, 538, 545, 551, 557, 564, 570, 577, 584, 590, 597, 604, 611, 618,
    625, 632, 639, 646, 653, 660, 668, 675, 683, 690, 698, 705, 713, 721, 729, 736,
    744, 752, 760, 769, 777, 785, 793, 802, 810, 819, 827, 836, 845, 853, 862, 871,
    880, 889, 898, 907, 917, 926, 935, 945, 954, 964, 973, 983, 993, 1003, 1013, 1023,
];

/// Map 8-bit brightness to duty through the logarithmic curve
#[inline]
pub const fn log_duty(brightness: u8) -> u16 {
    LOG_DUTY_LUT[brightness as usize]
}

/// Map 8-bit brightness linearly into the duty range
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn linear_duty(brightness: u8) -> u16 {
    (brightness as u32 * MAX_DUTY as u32 / 255) as u16
}

/// How color channels are scaled into the duty range
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DutyCurve {
    /// Direct proportional scaling
    #[default]
    Linear,
    /// Through [`LOG_DUTY_LUT`]
    Logarithmic,
}

impl DutyCurve {
    #[inline]
    pub const fn apply(self, value: u8) -> u16 {
        match self {
            Self::Linear => linear_duty(value),
            Self::Logarithmic => log_duty(value),
        }
    }
}
