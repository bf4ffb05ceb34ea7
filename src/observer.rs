//! Change notifications
//!
//! Observers are called synchronously, on the calling thread, from inside
//! the command or tick that caused the change.

use crate::color::{Hsv, Rgb};

/// A change reported by the lamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightEvent {
    /// Output crossed between off and on
    Switched(bool),
    /// Brightness setpoint (0-255)
    Brightness(u8),
    /// Color temperature setpoint in Kelvin
    Temperature(u16),
    /// Color setpoint as RGB
    Rgb(Rgb),
    /// Color setpoint as HSV
    Hsv(Hsv),
}

/// Receiver of lamp change notifications
pub trait LightObserver {
    fn notify(&mut self, event: LightEvent);
}

/// No observer
impl LightObserver for () {
    fn notify(&mut self, _event: LightEvent) {}
}

pub type SwitchHandler = fn(bool);
pub type BrightnessHandler = fn(u8);
pub type TemperatureHandler = fn(u16);
pub type RgbHandler = fn(Rgb);
pub type HsvHandler = fn(Hsv);

/// One optional handler per event kind
#[derive(Debug, Clone, Copy, Default)]
pub struct Callbacks {
    switch: Option<SwitchHandler>,
    brightness: Option<BrightnessHandler>,
    temperature: Option<TemperatureHandler>,
    rgb: Option<RgbHandler>,
    hsv: Option<HsvHandler>,
}

impl Callbacks {
    pub const fn new() -> Self {
        Self {
            switch: None,
            brightness: None,
            temperature: None,
            rgb: None,
            hsv: None,
        }
    }

    #[must_use]
    pub const fn on_switch(mut self, handler: SwitchHandler) -> Self {
        self.switch = Some(handler);
        self
    }

    #[must_use]
    pub const fn on_brightness(mut self, handler: BrightnessHandler) -> Self {
        self.brightness = Some(handler);
        self
    }

    #[must_use]
    pub const fn on_temperature(mut self, handler: TemperatureHandler) -> Self {
        self.temperature = Some(handler);
        self
    }

    #[must_use]
    pub const fn on_rgb(mut self, handler: RgbHandler) -> Self {
        self.rgb = Some(handler);
        self
    }

    #[must_use]
    pub const fn on_hsv(mut self, handler: HsvHandler) -> Self {
        self.hsv = Some(handler);
        self
    }
}

impl LightObserver for Callbacks {
    fn notify(&mut self, event: LightEvent) {
        match event {
            LightEvent::Switched(on) => {
                if let Some(handler) = self.switch {
                    handler(on);
                }
            }
            LightEvent::Brightness(value) => {
                if let Some(handler) = self.brightness {
                    handler(value);
                }
            }
            LightEvent::Temperature(kelvin) => {
                if let Some(handler) = self.temperature {
                    handler(kelvin);
                }
            }
            LightEvent::Rgb(rgb) => {
                if let Some(handler) = self.rgb {
                    handler(rgb);
                }
            }
            LightEvent::Hsv(hsv) => {
                if let Some(handler) = self.hsv {
                    handler(hsv);
                }
            }
        }
    }
}
