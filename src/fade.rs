//! Fade engine
//!
//! One call to [`Lamp::tick`] advances the lamp by one step:
//!
//! 1. Every `dimm_speed` ticks an active relative command moves the
//!    brightness or temperature setpoint one ramp step.
//! 2. Every tick each actual value moves one step towards its setpoint:
//!    one unit of brightness or saturation, one degree of hue, 20 K.
//! 3. If anything moved, the outputs are recomputed and written, and an
//!    on/off change is reported.
//!
//! Nothing is written when nothing moved, so repeated ticks at rest never
//! touch the hardware.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputSink;
use crate::color::{HUE_STEPS, HUE_STEPS_PER_DEGREE, MAX_TEMPERATURE, MIN_TEMPERATURE};
use crate::command::RelativeCommand;
use crate::duty::map_duty;
use crate::lamp::Lamp;
use crate::observer::{LightEvent, LightObserver};
use crate::state::{MAX_BRIGHTNESS, MIN_BRIGHTNESS, TEMPERATURE_STEP};
use crate::topology::LightMode;

/// Temperature ramp reports only land on multiples of this
const TEMPERATURE_REPORT_STEP: u16 = 300;

/// Move `current` one unit towards `target`
#[inline]
const fn step_toward(current: u8, target: u8) -> u8 {
    if target > current {
        current + 1
    } else if target < current {
        current - 1
    } else {
        current
    }
}

/// Move `current` one degree towards `target` along the shorter arc,
/// stopping exactly on the target
#[inline]
const fn step_hue(current: u16, target: u16) -> u16 {
    let forward = (target + HUE_STEPS - current) % HUE_STEPS;
    if forward <= HUE_STEPS / 2 {
        let step = if forward < HUE_STEPS_PER_DEGREE {
            forward
        } else {
            HUE_STEPS_PER_DEGREE
        };
        (current + step) % HUE_STEPS
    } else {
        let backward = HUE_STEPS - forward;
        let step = if backward < HUE_STEPS_PER_DEGREE {
            backward
        } else {
            HUE_STEPS_PER_DEGREE
        };
        (current + HUE_STEPS - step) % HUE_STEPS
    }
}

/// Move `current` one temperature step towards `target` without overshooting
#[inline]
const fn step_temperature(current: u16, target: u16) -> u16 {
    if target > current {
        let next = current.saturating_add(TEMPERATURE_STEP);
        if next > target { target } else { next }
    } else {
        let next = current.saturating_sub(TEMPERATURE_STEP);
        if next < target { target } else { next }
    }
}

/// Whether a ramped brightness is worth reporting.
///
/// Reports land on 5% marks of the brightness percentage, so a full ramp
/// sends about twenty updates instead of one per step.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn is_report_point(brightness: u8) -> bool {
    let half_percent = (f32::from(brightness) / 2.55 * 2.0 + 0.7) as u32;
    half_percent % 10 == 0
}

impl<S: OutputSink, O: LightObserver> Lamp<S, O> {
    /// Advance the lamp by one tick
    pub fn tick(&mut self) {
        let old_brightness = self.state.act_brightness;

        self.ramp_step();
        if !self.converge() {
            return;
        }

        self.write_outputs();

        let was_on = old_brightness.map(|value| value > 0);
        let is_on = self.state.act_brightness.map(|value| value > 0);
        if is_on != was_on {
            if let Some(on) = is_on {
                self.notify(LightEvent::Switched(on));
            }
        }
    }

    /// Apply relative commands, once every `dimm_speed` ticks
    fn ramp_step(&mut self) {
        self.ramp.count = self.ramp.count.saturating_add(1);
        if self.ramp.count < u32::from(self.config.dimm_speed) {
            return;
        }
        self.ramp.count = 0;

        self.ramp_brightness();
        self.ramp_temperature();
    }

    fn ramp_brightness(&mut self) {
        let actual = self.state.act_brightness.unwrap_or(0);
        let next = match self.ramp.dim {
            RelativeCommand::Up if actual < MAX_BRIGHTNESS => actual + 1,
            RelativeCommand::Down if actual > MIN_BRIGHTNESS => actual - 1,
            RelativeCommand::Stop => {
                let brightness = self.state.setpoint_brightness.unwrap_or(0);
                self.state.saved_brightness = brightness;
                self.ramp.dim = RelativeCommand::Unset;
                #[cfg(feature = "esp32-log")]
                println!("[Lamp.ramp_brightness] stopped at {}", brightness);
                self.notify(LightEvent::Brightness(brightness));
                return;
            }
            _ => return,
        };

        self.state.setpoint_brightness = Some(next);
        if self.topology.is_color() {
            self.state.setpoint_hsv.val = next;
        }
        if is_report_point(next) {
            self.notify(LightEvent::Brightness(next));
        }
    }

    fn ramp_temperature(&mut self) {
        let actual = self.state.act_temperature;
        let next = match self.ramp.temperature {
            RelativeCommand::Up if actual < MAX_TEMPERATURE => {
                actual.saturating_add(TEMPERATURE_STEP).min(MAX_TEMPERATURE)
            }
            RelativeCommand::Down if actual > MIN_TEMPERATURE => {
                actual.saturating_sub(TEMPERATURE_STEP).max(MIN_TEMPERATURE)
            }
            RelativeCommand::Stop => {
                let temperature = self.state.setpoint_temperature;
                self.ramp.temperature = RelativeCommand::Unset;
                #[cfg(feature = "esp32-log")]
                println!("[Lamp.ramp_temperature] stopped at {}", temperature);
                self.notify(LightEvent::Temperature(temperature));
                return;
            }
            _ => return,
        };

        self.state.setpoint_temperature = next;
        if next % TEMPERATURE_REPORT_STEP == 0 {
            self.notify(LightEvent::Temperature(next));
        }
    }

    /// Move every actual value one step towards its setpoint.
    ///
    /// Returns whether anything changed.
    fn converge(&mut self) -> bool {
        let state = &mut self.state;
        let mut changed = false;

        if let Some(target) = state.setpoint_brightness {
            if state.act_brightness != Some(target) {
                let current = state.act_brightness.unwrap_or(0);
                state.act_brightness = Some(step_toward(current, target));
                changed = true;
            }
        }

        if state.act_temperature != state.setpoint_temperature {
            state.act_temperature =
                step_temperature(state.act_temperature, state.setpoint_temperature);
            changed = true;
        }

        if state.act_hsv.hue != state.setpoint_hsv.hue {
            state.act_hsv.hue = step_hue(state.act_hsv.hue, state.setpoint_hsv.hue);
            changed = true;
        }

        if state.act_hsv.sat != state.setpoint_hsv.sat {
            state.act_hsv.sat = step_toward(state.act_hsv.sat, state.setpoint_hsv.sat);
            changed = true;
        }

        // Only one model drives the output, the color engine goes dark
        // while temperature mode is active.
        let value_target = match state.mode {
            LightMode::Rgb => state.setpoint_brightness.unwrap_or(0),
            LightMode::Cct => 0,
        };
        if state.act_hsv.val != value_target {
            state.act_hsv.val = step_toward(state.act_hsv.val, value_target);
            changed = true;
        }

        changed
    }

    /// Recompute and write all channel outputs
    #[allow(clippy::cast_possible_truncation)]
    fn write_outputs(&mut self) {
        let frame = map_duty(self.topology, self.config.color_curve, &self.state.actual());
        for (channel, output) in frame.iter().enumerate() {
            output.write_to(&mut self.sink, channel as u8);
        }
        self.frame = frame;
    }
}
