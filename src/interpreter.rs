//! Command interpreter
//!
//! Validates absolute and relative commands and turns them into setpoint
//! changes. Nothing here touches the actual values or the outputs, with
//! one exception: hue and saturation jump straight to a new color while
//! the light is dark.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputSink;
use crate::color::{HUE_STEPS, Hsv, MAX_TEMPERATURE, MIN_TEMPERATURE, Rgb, hsv2rgb, rgb2hsv};
use crate::command::{LightCommand, RelativeCommand};
use crate::lamp::Lamp;
use crate::observer::{LightEvent, LightObserver};
use crate::state::{MAX_BRIGHTNESS, MIN_BRIGHTNESS};
use crate::topology::{LightMode, Topology};

/// Color used on switch-on when neither a default nor a saved color is bright enough
const FALLBACK_HSV: Hsv = Hsv::from_degrees(50, 255, 255);

impl<S: OutputSink, O: LightObserver> Lamp<S, O> {
    /// Run a queued command
    pub fn apply(&mut self, command: LightCommand) {
        match command {
            LightCommand::Switch(on) => self.switch(on),
            LightCommand::SetBrightness(value) => self.set_brightness(value),
            LightCommand::SetTemperature(kelvin) => self.set_temperature(kelvin),
            LightCommand::SetRgb(rgb) => self.set_rgb(rgb),
            LightCommand::SetHsv(hsv) => self.set_hsv(hsv),
            LightCommand::RelativeDim(code) => self.set_relative_dim(code),
            LightCommand::RelativeTemperature(code) => self.set_relative_temperature(code),
        }
    }

    /// Switch the light on or off.
    ///
    /// Switching on restores the configured default, then the last used
    /// value, then full brightness. This also applies while the light is
    /// already on, so an on command undoes manual dimming. Switching off
    /// remembers the current setpoint for the next switch-on.
    pub fn switch(&mut self, on: bool) {
        match self.topology {
            Topology::Switchable => self.set_brightness(i32::from(on)),
            Topology::Dimmable | Topology::TunableWhite(_) => {
                if on {
                    self.switch_on_white();
                } else {
                    self.switch_off();
                }
            }
            Topology::Rgb | Topology::Rgbw { .. } | Topology::RgbTunableWhite(_) => {
                if on {
                    self.switch_on_color();
                } else {
                    if self.switch_state() {
                        self.state.saved_hsv = self.state.setpoint_hsv;
                    }
                    self.switch_off();
                }
            }
        }
    }

    fn switch_on_white(&mut self) {
        let brightness = if self.config.default_brightness >= MIN_BRIGHTNESS {
            self.config.default_brightness
        } else if self.state.saved_brightness >= MIN_BRIGHTNESS {
            self.state.saved_brightness
        } else {
            MAX_BRIGHTNESS
        };
        self.set_brightness(i32::from(brightness));

        if matches!(self.topology, Topology::TunableWhite(_)) && self.config.default_temperature > 0 {
            self.set_temperature(self.config.default_temperature);
        }
    }

    fn switch_on_color(&mut self) {
        let hsv = if self.config.default_hsv.val >= MIN_BRIGHTNESS {
            self.config.default_hsv
        } else if self.state.saved_hsv.val >= MIN_BRIGHTNESS {
            self.state.saved_hsv
        } else {
            FALLBACK_HSV
        };
        self.set_hsv(hsv);
    }

    fn switch_off(&mut self) {
        if let Some(brightness) = self.state.setpoint_brightness.filter(|value| *value > 0) {
            self.state.saved_brightness = brightness;
        }
        self.set_brightness(0);
    }

    /// Set the brightness setpoint and remember it for the next switch-on
    pub fn set_brightness(&mut self, value: i32) {
        self.update_brightness(value, true);
    }

    /// Set the brightness setpoint without remembering it
    pub fn set_brightness_transient(&mut self, value: i32) {
        self.update_brightness(value, false);
    }

    /// Values outside 0-255 keep the old setpoint, but observers still
    /// hear about it.
    fn update_brightness(&mut self, value: i32, save: bool) {
        if self.state.setpoint_brightness.map(i32::from) == Some(value) {
            return;
        }

        match u8::try_from(value) {
            Ok(brightness) => {
                self.state.setpoint_brightness = Some(brightness);
                if brightness > 0 && save {
                    self.state.saved_brightness = brightness;
                }
                if self.topology.is_color() {
                    self.state.setpoint_hsv.val = brightness;
                }
            }
            Err(_) => {
                #[cfg(feature = "esp32-log")]
                println!("[Lamp.set_brightness] rejected brightness {}", value);
            }
        }

        self.ramp.clear();
        let brightness = self.state.setpoint_brightness.unwrap_or(0);
        self.notify(LightEvent::Brightness(brightness));
    }

    /// Set the color temperature setpoint in Kelvin.
    ///
    /// Ignored by fixtures without white tuning. The first call after
    /// color mode switches the lamp to temperature mode and jumps the
    /// actual temperature to the setpoint.
    pub fn set_temperature(&mut self, kelvin: u16) {
        if !self.topology.supports_temperature() {
            return;
        }

        if (MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&kelvin) {
            self.state.setpoint_temperature = kelvin;
        } else {
            #[cfg(feature = "esp32-log")]
            println!("[Lamp.set_temperature] rejected temperature {}", kelvin);
        }

        let temperature = self.state.setpoint_temperature;
        self.notify(LightEvent::Temperature(temperature));
        self.ramp.clear();

        if self.state.mode != LightMode::Cct {
            #[cfg(feature = "esp32-log")]
            println!("[Lamp.set_temperature] switching to temperature mode");
            self.state.act_temperature = temperature;
            self.state.mode = LightMode::Cct;
        }
    }

    /// Set the color from RGB.
    ///
    /// Black keeps the current hue and saturation and only drops the value.
    pub fn set_rgb(&mut self, rgb: Rgb) {
        let hsv = if rgb.r == 0 && rgb.g == 0 && rgb.b == 0 {
            self.state.act_hsv.with_val(0)
        } else {
            rgb2hsv(rgb)
        };
        self.set_hsv(hsv);
    }

    /// Set the color setpoint and switch to color mode.
    ///
    /// The value becomes the brightness setpoint.
    pub fn set_hsv(&mut self, hsv: Hsv) {
        let hsv = Hsv {
            hue: hsv.hue % HUE_STEPS,
            ..hsv
        };
        self.state.setpoint_hsv = hsv;
        if self.state.act_hsv.val == 0 {
            self.state.act_hsv.hue = hsv.hue;
            self.state.act_hsv.sat = hsv.sat;
        }

        self.notify(LightEvent::Hsv(hsv));
        self.notify(LightEvent::Rgb(hsv2rgb(hsv)));
        self.ramp.clear();

        #[cfg(feature = "esp32-log")]
        if self.state.mode != LightMode::Rgb {
            println!("[Lamp.set_hsv] switching to color mode");
        }
        self.state.mode = LightMode::Rgb;
        self.set_brightness(i32::from(hsv.val));
    }

    /// Start or stop a brightness ramp from a bus step code
    pub fn set_relative_dim(&mut self, code: i32) {
        self.ramp.dim = RelativeCommand::from_code(code);
        #[cfg(feature = "esp32-log")]
        println!("[Lamp.set_relative_dim] {:?}", self.ramp.dim);
    }

    /// Start or stop a color temperature ramp from a bus step code.
    ///
    /// Ignored by fixtures without white tuning.
    pub fn set_relative_temperature(&mut self, code: i32) {
        if !self.topology.supports_temperature() {
            return;
        }
        self.ramp.temperature = RelativeCommand::from_code(code);
        #[cfg(feature = "esp32-log")]
        println!("[Lamp.set_relative_temperature] {:?}", self.ramp.temperature);
    }
}
