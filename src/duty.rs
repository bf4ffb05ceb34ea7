//! Duty mapping
//!
//! Turns the actual photometric state into one output value per logical
//! channel of the fixture. Mapping is pure; writing the result to the
//! hardware happens through [`OutputSink`].

use heapless::Vec;

use crate::OutputSink;
use crate::color::{MAX_TEMPERATURE, MIN_TEMPERATURE, hsv2rgb, kelvin_to_rgb, rgb_to_rgbw};
use crate::gamma::{DutyCurve, MAX_DUTY, log_duty};
use crate::state::Photometry;
use crate::topology::{CctWiring, LightMode, MAX_CHANNELS, Topology};

/// Width of the supported color temperature window in Kelvin
const TEMPERATURE_SPAN: f32 = (MAX_TEMPERATURE - MIN_TEMPERATURE) as f32;

/// Value written to one logical channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelOutput {
    /// Plain on/off output
    Digital(bool),
    /// PWM duty, `0..=MAX_DUTY`
    Duty(u16),
    /// PWM duty starting `phase` ticks into the period
    Phased { duty: u16, phase: u16 },
}

impl ChannelOutput {
    /// Write this value to `channel` of `sink`
    pub fn write_to<S: OutputSink>(self, sink: &mut S, channel: u8) {
        match self {
            Self::Digital(on) => sink.write_digital(channel, on),
            Self::Duty(duty) => sink.write_duty(channel, duty),
            Self::Phased { duty, phase } => sink.write_phased_duty(channel, duty, phase),
        }
    }

    /// Duty equivalent of the output
    pub const fn duty(self) -> u16 {
        match self {
            Self::Digital(true) => MAX_DUTY,
            Self::Digital(false) => 0,
            Self::Duty(duty) | Self::Phased { duty, .. } => duty,
        }
    }
}

/// Outputs for every channel of a fixture, in logical channel order
pub type DutyFrame = Vec<ChannelOutput, MAX_CHANNELS>;

/// Share of `budget` for the cold and warm white channels.
///
/// Both channels run at full budget around the middle of the range and
/// hand over linearly towards the ends.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn white_mix(temperature: u16, budget: u8) -> (u8, u8) {
    let temperature = temperature.clamp(MIN_TEMPERATURE, MAX_TEMPERATURE);
    let share = |distance: u16| {
        let weight = f32::from(distance.saturating_mul(2)).min(TEMPERATURE_SPAN) / TEMPERATURE_SPAN;
        libm::roundf(weight * f32::from(budget)) as u8
    };
    (
        share(temperature - MIN_TEMPERATURE),
        share(MAX_TEMPERATURE - temperature),
    )
}

/// Outputs for a pair of white channels driven with `budget` brightness
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn white_outputs(wiring: CctWiring, temperature: u16, budget: u8) -> [ChannelOutput; 2] {
    let temperature = temperature.clamp(MIN_TEMPERATURE, MAX_TEMPERATURE);
    match wiring {
        CctWiring::Normal => {
            let (cold, warm) = white_mix(temperature, budget);
            [
                ChannelOutput::Duty(log_duty(cold)),
                ChannelOutput::Duty(log_duty(warm)),
            ]
        }
        CctWiring::Bipolar => {
            // Both tones share one period, so together they may use at most
            // the full duty range. The second starts where the first ends.
            let total = libm::roundf(f32::from(budget) * f32::from(MAX_DUTY) / 255.0);
            let cold = libm::roundf(
                f32::from(temperature - MIN_TEMPERATURE) * total / TEMPERATURE_SPAN,
            ) as u16;
            let warm = (total as u16).saturating_sub(cold);
            [
                ChannelOutput::Phased {
                    duty: cold,
                    phase: 0,
                },
                ChannelOutput::Phased {
                    duty: warm,
                    phase: cold,
                },
            ]
        }
        CctWiring::TemperatureChannel => {
            if budget == 0 {
                return [ChannelOutput::Duty(0), ChannelOutput::Duty(0)];
            }
            let (_, bias) = white_mix(temperature, u8::MAX);
            [
                ChannelOutput::Duty(log_duty(bias)),
                ChannelOutput::Duty(log_duty(budget)),
            ]
        }
    }
}

/// Compute the outputs of `topology` for the actual light state.
///
/// `curve` applies to the RGB and RGBW color channels. Dimmer and white
/// channels always follow the logarithmic curve.
pub fn map_duty(topology: Topology, curve: DutyCurve, actual: &Photometry) -> DutyFrame {
    match topology {
        Topology::Switchable => [ChannelOutput::Digital(actual.brightness > 0)]
            .into_iter()
            .collect(),
        Topology::Dimmable => [ChannelOutput::Duty(log_duty(actual.brightness))]
            .into_iter()
            .collect(),
        Topology::TunableWhite(wiring) => {
            white_outputs(wiring, actual.temperature, actual.brightness)
                .into_iter()
                .collect()
        }
        Topology::Rgb => {
            let rgb = hsv2rgb(actual.hsv);
            [rgb.r, rgb.g, rgb.b]
                .into_iter()
                .map(|value| ChannelOutput::Duty(curve.apply(value)))
                .collect()
        }
        Topology::Rgbw { white_equivalent } => {
            let rgb = match actual.mode {
                LightMode::Rgb => hsv2rgb(actual.hsv),
                LightMode::Cct => kelvin_to_rgb(actual.temperature, actual.brightness),
            };
            let rgbw = rgb_to_rgbw(rgb, white_equivalent);
            [rgbw.r, rgbw.g, rgbw.b, rgbw.w]
                .into_iter()
                .map(|value| ChannelOutput::Duty(curve.apply(value)))
                .collect()
        }
        Topology::RgbTunableWhite(wiring) => {
            let rgb = hsv2rgb(actual.hsv);
            let budget = actual.brightness.saturating_sub(actual.hsv.val);
            [rgb.r, rgb.g, rgb.b]
                .into_iter()
                .map(|value| ChannelOutput::Duty(curve.apply(value)))
                .chain(white_outputs(wiring, actual.temperature, budget))
                .collect()
        }
    }
}
