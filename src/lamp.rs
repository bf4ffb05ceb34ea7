//! Lamp instance
//!
//! A [`Lamp`] owns the photometric state of one fixture, the sink its
//! channels are written to and the observer that hears about changes.
//! Commands are in `interpreter`, the per-tick state machine in `fade`.

use crate::OutputSink;
use crate::color::{Hsv, MAX_TEMPERATURE, MIN_TEMPERATURE, Rgb, hsv2rgb};
use crate::command::RelativeCommand;
use crate::duty::DutyFrame;
use crate::gamma::DutyCurve;
use crate::observer::{LightEvent, LightObserver};
use crate::state::{
    DEFAULT_TEMPERATURE, MAX_BRIGHTNESS, PhotometricState, Photometry, RampState,
};
use crate::topology::{LightMode, Topology};

/// Ticks per ramp step unless configured otherwise
pub const DEFAULT_DIMM_SPEED: u16 = 6;

/// Configuration for a lamp
#[derive(Debug, Clone)]
pub struct LampConfig {
    /// Brightness restored on switch-on; below the minimum brightness the
    /// last used brightness is restored instead
    pub default_brightness: u8,
    /// Color temperature applied on switch-on, 0 keeps the current one
    pub default_temperature: u16,
    /// Color restored on switch-on; a value below the minimum brightness
    /// restores the last used color instead
    pub default_hsv: Hsv,
    /// Ticks between two ramp steps of a relative command
    pub dimm_speed: u16,
    /// Duty curve for RGB and RGBW color channels
    pub color_curve: DutyCurve,
}

impl Default for LampConfig {
    fn default() -> Self {
        Self {
            default_brightness: MAX_BRIGHTNESS,
            default_temperature: DEFAULT_TEMPERATURE,
            default_hsv: Hsv::new(0, 0, 0),
            dimm_speed: DEFAULT_DIMM_SPEED,
            color_curve: DutyCurve::Linear,
        }
    }
}

impl LampConfig {
    #[must_use]
    pub fn with_default_brightness(mut self, brightness: u8) -> Self {
        self.default_brightness = brightness;
        self
    }

    /// Set the switch-on color temperature.
    ///
    /// Accepts 0 or a value inside the supported range, anything else is
    /// ignored.
    #[must_use]
    pub fn with_default_temperature(mut self, temperature: u16) -> Self {
        if temperature == 0 || (MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&temperature) {
            self.default_temperature = temperature;
        }
        self
    }

    #[must_use]
    pub fn with_default_hsv(mut self, hsv: Hsv) -> Self {
        self.default_hsv = hsv;
        self
    }

    #[must_use]
    pub fn with_dimm_speed(mut self, dimm_speed: u16) -> Self {
        self.dimm_speed = dimm_speed;
        self
    }

    #[must_use]
    pub fn with_color_curve(mut self, curve: DutyCurve) -> Self {
        self.color_curve = curve;
        self
    }
}

/// Photometric control core of one fixture
pub struct Lamp<S: OutputSink, O: LightObserver> {
    // External dependencies and configuration
    pub(crate) topology: Topology,
    pub(crate) config: LampConfig,
    pub(crate) sink: S,
    pub(crate) observer: O,

    // Internal state
    pub(crate) state: PhotometricState,
    pub(crate) ramp: RampState,
    pub(crate) frame: DutyFrame,
}

impl<S: OutputSink, O: LightObserver> Lamp<S, O> {
    /// Create a lamp for `topology`, writing to `sink`
    ///
    /// Nothing is written until the first change reaches the outputs.
    pub fn new(topology: Topology, sink: S, observer: O, config: &LampConfig) -> Self {
        let temperature = if config.default_temperature == 0 {
            DEFAULT_TEMPERATURE
        } else {
            config.default_temperature
        };
        Self {
            topology,
            config: config.clone(),
            sink,
            observer,
            state: PhotometricState::new(temperature, topology.initial_mode()),
            ramp: RampState::default(),
            frame: DutyFrame::new(),
        }
    }

    pub const fn topology(&self) -> Topology {
        self.topology
    }

    pub const fn config(&self) -> &LampConfig {
        &self.config
    }

    /// Whether the lamp is logically on
    pub fn switch_state(&self) -> bool {
        self.state.setpoint_brightness.is_some_and(|value| value > 0)
    }

    /// Actual brightness, 0 before the first brightness command
    pub fn brightness(&self) -> u8 {
        self.state.act_brightness.unwrap_or(0)
    }

    /// Brightness setpoint, `None` before the first brightness command
    pub const fn target_brightness(&self) -> Option<u8> {
        self.state.setpoint_brightness
    }

    /// Actual color temperature in Kelvin
    pub const fn temperature(&self) -> u16 {
        self.state.act_temperature
    }

    pub const fn target_temperature(&self) -> u16 {
        self.state.setpoint_temperature
    }

    /// Color setpoint
    pub const fn hsv(&self) -> Hsv {
        self.state.setpoint_hsv
    }

    /// Color setpoint as RGB
    pub fn rgb(&self) -> Rgb {
        hsv2rgb(self.state.setpoint_hsv)
    }

    /// Color currently on the outputs
    pub const fn actual_hsv(&self) -> Hsv {
        self.state.act_hsv
    }

    pub const fn light_mode(&self) -> LightMode {
        self.state.mode
    }

    pub const fn relative_dim(&self) -> RelativeCommand {
        self.ramp.dim
    }

    pub const fn relative_temperature(&self) -> RelativeCommand {
        self.ramp.temperature
    }

    /// Actual values of every photometric axis
    pub fn photometry(&self) -> Photometry {
        self.state.actual()
    }

    /// Outputs written at the last change
    pub fn duty_frame(&self) -> &DutyFrame {
        &self.frame
    }

    pub const fn sink(&self) -> &S {
        &self.sink
    }

    pub const fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub const fn observer(&self) -> &O {
        &self.observer
    }

    pub const fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    #[inline]
    pub(crate) fn notify(&mut self, event: LightEvent) {
        self.observer.notify(event);
    }
}
