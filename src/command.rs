//! Lamp commands and the queue that carries them
//!
//! Commands usually come from a bus task or an interrupt while the fade
//! engine runs elsewhere. [`CommandQueue`] is a bounded queue built on
//! `critical-section` and `heapless::Deque`, so producers never touch the
//! lamp directly; the owner drains the queue once per tick.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::color::{Hsv, Rgb};

/// Bus code: stop ramping
pub const DIMM_STOP: i32 = 0;
/// Bus code: start ramping down
pub const DIMM_DOWN: i32 = 1;
/// Bus code: stop ramping (alternative encoding)
pub const DIMM_STOP2: i32 = 8;
/// Bus code: start ramping up
pub const DIMM_UP: i32 = 9;

/// State of a relative (ramp) command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RelativeCommand {
    Up,
    Down,
    Stop,
    /// No ramp in progress
    #[default]
    Unset,
}

impl RelativeCommand {
    /// Decode a bus step code.
    ///
    /// Codes at or above [`DIMM_UP`] ramp up, codes in
    /// `DIMM_DOWN..DIMM_STOP2` ramp down, anything else stops.
    pub const fn from_code(code: i32) -> Self {
        if code >= DIMM_UP {
            Self::Up
        } else if code >= DIMM_DOWN && code < DIMM_STOP2 {
            Self::Down
        } else {
            Self::Stop
        }
    }
}

/// Commands accepted by a lamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightCommand {
    /// Switch on (restoring a brightness) or off
    Switch(bool),
    /// Absolute brightness, valid range 0-255
    SetBrightness(i32),
    /// Absolute color temperature in Kelvin
    SetTemperature(u16),
    SetRgb(Rgb),
    SetHsv(Hsv),
    /// Relative dimming, raw bus step code
    RelativeDim(i32),
    /// Relative color temperature, raw bus step code
    RelativeTemperature(i32),
}

/// Error returned when trying to send to a full queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError(pub LightCommand);

/// Bounded, interrupt-safe command queue
pub struct CommandQueue<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<LightCommand, SIZE>>>,
}

impl<const SIZE: usize> CommandQueue<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for this queue.
    pub const fn sender(&self) -> CommandSender<'_, SIZE> {
        CommandSender { queue: self }
    }

    /// Get a receiver handle for this queue.
    pub const fn receiver(&self) -> CommandReceiver<'_, SIZE> {
        CommandReceiver { queue: self }
    }

    /// Enqueue a command.
    ///
    /// Returns `Err(TrySendError(command))` if the queue is full.
    pub fn try_send(&self, command: LightCommand) -> Result<(), TrySendError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(command).map_err(TrySendError)
        })
    }

    /// Take the oldest queued command, if any.
    pub fn try_receive(&self) -> Option<LightCommand> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }
}

impl<const SIZE: usize> Default for CommandQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer side of a [`CommandQueue`]
#[derive(Clone, Copy)]
pub struct CommandSender<'a, const SIZE: usize> {
    queue: &'a CommandQueue<SIZE>,
}

impl<const SIZE: usize> CommandSender<'_, SIZE> {
    pub fn try_send(&self, command: LightCommand) -> Result<(), TrySendError> {
        self.queue.try_send(command)
    }
}

/// Consumer side of a [`CommandQueue`]
#[derive(Clone, Copy)]
pub struct CommandReceiver<'a, const SIZE: usize> {
    queue: &'a CommandQueue<SIZE>,
}

impl<const SIZE: usize> CommandReceiver<'_, SIZE> {
    pub fn try_receive(&self) -> Option<LightCommand> {
        self.queue.try_receive()
    }
}
