//! Tick pacing
//!
//! The fade engine has no notion of time: every call to [`Lamp::tick`] is
//! one step. [`TickScheduler`] pairs a lamp with its command queue and
//! tells the caller when the next tick is due. The caller does the
//! waiting, with whatever timer the platform has.

use embassy_time::{Duration, Instant};

use crate::OutputSink;
use crate::command::CommandReceiver;
use crate::lamp::Lamp;
use crate::observer::LightObserver;

/// Default tick period. A full 0-255 fade takes about 1.3 s at this rate.
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(5);

/// Result of a tick
#[derive(Debug, Clone, Copy)]
pub struct TickResult {
    /// The deadline for the next tick.
    pub next_deadline: Instant,
    /// How long to wait until the next tick (zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Drives a lamp at a fixed tick period
///
/// ```ignore
/// let queue = CommandQueue::<8>::new();
/// let lamp = Lamp::new(Topology::Dimmable, sink, (), &LampConfig::default());
/// let mut scheduler = TickScheduler::new(lamp, queue.receiver());
///
/// loop {
///     let result = scheduler.tick(Instant::from_millis(now_ms()));
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct TickScheduler<'a, S: OutputSink, O: LightObserver, const SIZE: usize> {
    lamp: Lamp<S, O>,
    commands: CommandReceiver<'a, SIZE>,
    next_tick: Instant,
    period: Duration,
}

impl<'a, S: OutputSink, O: LightObserver, const SIZE: usize> TickScheduler<'a, S, O, SIZE> {
    /// Create a scheduler ticking every [`DEFAULT_TICK_PERIOD`]
    pub fn new(lamp: Lamp<S, O>, commands: CommandReceiver<'a, SIZE>) -> Self {
        Self::with_period(lamp, commands, DEFAULT_TICK_PERIOD)
    }

    pub fn with_period(
        lamp: Lamp<S, O>,
        commands: CommandReceiver<'a, SIZE>,
        period: Duration,
    ) -> Self {
        Self {
            lamp,
            commands,
            next_tick: Instant::from_millis(0),
            period,
        }
    }

    /// Apply queued commands, run one fade tick and schedule the next one.
    ///
    /// When more than two periods late the schedule restarts from `now`
    /// instead of catching up with a burst of ticks.
    pub fn tick(&mut self, now: Instant) -> TickResult {
        let max_drift = self.period.as_millis() * 2;
        if now.as_millis() > self.next_tick.as_millis() + max_drift {
            self.next_tick = now;
        }

        while let Some(command) = self.commands.try_receive() {
            self.lamp.apply(command);
        }
        self.lamp.tick();

        self.next_tick += self.period;

        let sleep_duration = if self.next_tick > now {
            self.next_tick - now
        } else {
            Duration::from_millis(0)
        };

        TickResult {
            next_deadline: self.next_tick,
            sleep_duration,
        }
    }

    /// Duration of one ramp step of a relative command
    pub fn ramp_step_duration(&self) -> Duration {
        self.period * u32::from(self.lamp.config().dimm_speed.max(1))
    }

    pub const fn lamp(&self) -> &Lamp<S, O> {
        &self.lamp
    }

    pub const fn lamp_mut(&mut self) -> &mut Lamp<S, O> {
        &mut self.lamp
    }
}
