//! Photometric and ramp state of a lamp

use crate::color::Hsv;
use crate::command::RelativeCommand;
use crate::topology::LightMode;

/// Lowest brightness restored on switch-on and reached by ramping down
pub const MIN_BRIGHTNESS: u8 = 12;
/// Full brightness
pub const MAX_BRIGHTNESS: u8 = 255;
/// Color temperature used when none is configured
pub const DEFAULT_TEMPERATURE: u16 = 3500;
/// Color temperature change per ramp or fade step, in Kelvin
pub const TEMPERATURE_STEP: u16 = 20;

/// Requested and actual photometric values
///
/// Brightness is `None` until the first brightness command arrives; the
/// engine treats an unknown actual brightness as 0.
#[derive(Debug, Clone)]
pub(crate) struct PhotometricState {
    pub(crate) setpoint_brightness: Option<u8>,
    pub(crate) act_brightness: Option<u8>,
    pub(crate) setpoint_temperature: u16,
    pub(crate) act_temperature: u16,
    pub(crate) setpoint_hsv: Hsv,
    pub(crate) act_hsv: Hsv,
    pub(crate) mode: LightMode,
    /// Last non-zero brightness, restored on switch-on
    pub(crate) saved_brightness: u8,
    /// Color at the last switch-off
    pub(crate) saved_hsv: Hsv,
}

impl PhotometricState {
    pub(crate) const fn new(temperature: u16, mode: LightMode) -> Self {
        Self {
            setpoint_brightness: None,
            act_brightness: None,
            setpoint_temperature: temperature,
            act_temperature: temperature,
            setpoint_hsv: Hsv::new(0, 0, 0),
            act_hsv: Hsv::new(0, 0, 0),
            mode,
            saved_brightness: 0,
            saved_hsv: Hsv::new(0, 0, 0),
        }
    }

    /// Actual values handed to the duty mapper
    pub(crate) fn actual(&self) -> Photometry {
        Photometry {
            brightness: self.act_brightness.unwrap_or(0),
            temperature: self.act_temperature,
            hsv: self.act_hsv,
            mode: self.mode,
        }
    }
}

/// Relative command bookkeeping
#[derive(Debug, Clone, Default)]
pub(crate) struct RampState {
    pub(crate) dim: RelativeCommand,
    pub(crate) temperature: RelativeCommand,
    /// Ticks since the last ramp step
    pub(crate) count: u32,
}

impl RampState {
    /// Drop any ramp in progress
    pub(crate) fn clear(&mut self) {
        self.dim = RelativeCommand::Unset;
        self.temperature = RelativeCommand::Unset;
    }
}

/// Snapshot of the actual light output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Photometry {
    pub brightness: u8,
    pub temperature: u16,
    pub hsv: Hsv,
    pub mode: LightMode,
}
