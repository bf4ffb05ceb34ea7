#![no_std]

//! Photometric control core for PWM lamp drivers
//!
//! - `color` - RGB/HSV, Kelvin and RGBW conversions
//! - `gamma` - duty curves
//! - `codec` - packed 24-bit color values used on the bus
//! - `topology` - supported fixture channel layouts
//! - `lamp`, `interpreter`, `fade` - the lamp, its commands and its tick
//! - `duty` - per-topology output mapping
//! - `command`, `scheduler` - queued commands and tick pacing
//! - `allocator` - hardware channel slots
//!
//! The lamp is generic over [`OutputSink`], so the same logic runs on any
//! PWM hardware.

pub mod allocator;
pub mod codec;
pub mod color;
pub mod command;
pub mod duty;
mod fade;
pub mod gamma;
mod interpreter;
pub mod lamp;
pub mod observer;
pub mod scheduler;
pub mod state;
pub mod topology;

pub use allocator::{AllocationError, ChannelAllocator, ChannelSet};
pub use command::{
    CommandQueue, CommandReceiver, CommandSender, LightCommand, RelativeCommand, TrySendError,
};
pub use duty::{ChannelOutput, DutyFrame, map_duty};
pub use gamma::{DutyCurve, LOG_DUTY_LUT, MAX_DUTY};
pub use lamp::{Lamp, LampConfig};
pub use observer::{Callbacks, LightEvent, LightObserver};
pub use scheduler::{TickResult, TickScheduler};
pub use state::Photometry;
pub use topology::{CctWiring, LightMode, Topology};

pub use color::{Hsv, Rgb, Rgbw};
pub use embassy_time::{Duration, Instant};

/// Abstract PWM output
///
/// Implement this trait to support different hardware platforms.
/// Channels are logical indices in the order defined by the topology.
pub trait OutputSink {
    /// Set the duty (`0..=MAX_DUTY`) of a PWM channel
    fn write_duty(&mut self, channel: u8, duty: u16);

    /// Set a plain on/off channel
    fn write_digital(&mut self, channel: u8, on: bool);

    /// Set a duty that starts `phase` ticks into the PWM period.
    ///
    /// Hardware without phase control may ignore the phase.
    fn write_phased_duty(&mut self, channel: u8, duty: u16, phase: u16) {
        let _ = phase;
        self.write_duty(channel, duty);
    }
}
