//! Hardware channel allocation
//!
//! PWM peripherals expose a fixed number of channel slots. Each lamp takes
//! a contiguous block of them when it is set up. The allocator is an owned
//! value, so separate peripherals (or tests) never share a counter.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::topology::{MAX_CHANNELS, Topology};

/// Not enough free hardware channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationError {
    pub requested: u8,
    pub available: u8,
}

/// Contiguous block of hardware channel slots owned by one lamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelSet {
    first: u8,
    count: u8,
}

impl ChannelSet {
    /// Number of channels in the set
    pub const fn len(self) -> u8 {
        self.count
    }

    pub const fn is_empty(self) -> bool {
        self.count == 0
    }

    /// Hardware slot backing a logical channel index
    pub const fn physical(self, logical: u8) -> Option<u8> {
        if logical < self.count {
            Some(self.first + logical)
        } else {
            None
        }
    }

    /// Iterate the hardware slots in logical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        self.first..self.first + self.count
    }
}

/// Hands out hardware channel slots in order
#[derive(Debug, Clone)]
pub struct ChannelAllocator {
    next: u8,
    capacity: u8,
}

impl ChannelAllocator {
    /// Allocator for a peripheral with `capacity` channel slots
    pub const fn new(capacity: u8) -> Self {
        Self { next: 0, capacity }
    }

    /// Slots not handed out yet
    pub const fn available(&self) -> u8 {
        self.capacity - self.next
    }

    /// Take `count` consecutive slots
    pub fn allocate(&mut self, count: u8) -> Result<ChannelSet, AllocationError> {
        let available = self.available();
        if count > available {
            #[cfg(feature = "esp32-log")]
            println!(
                "[ChannelAllocator.allocate] {} channels requested, {} free",
                count, available
            );
            return Err(AllocationError {
                requested: count,
                available,
            });
        }

        let set = ChannelSet {
            first: self.next,
            count,
        };
        self.next += count;
        Ok(set)
    }

    /// Take as many slots as the topology drives
    pub fn allocate_for(&mut self, topology: Topology) -> Result<ChannelSet, AllocationError> {
        debug_assert!(topology.channel_count() as usize <= MAX_CHANNELS);
        self.allocate(topology.channel_count())
    }
}
