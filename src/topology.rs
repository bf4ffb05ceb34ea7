//! Fixture topologies
//!
//! A topology fixes how many output channels a lamp drives and which
//! photometric values are meaningful for it. It is chosen once when the
//! lamp is created.

use crate::color::Rgb;

/// Largest channel count of any topology
pub const MAX_CHANNELS: usize = 5;

/// How the two white channels of a tunable white fixture are wired
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CctWiring {
    /// Independent cold and warm white channels
    #[default]
    Normal,
    /// Two-wire strip with reversed polarity per white tone, driven
    /// through an H-bridge
    Bipolar,
    /// One brightness channel and one color temperature channel
    TemperatureChannel,
}

/// Which model currently drives the shared light output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightMode {
    /// Color temperature model
    Cct,
    /// HSV color model
    Rgb,
}

/// Fixture topology, one variant per supported channel layout
///
/// Logical channel order:
/// - `Switchable`, `Dimmable`: `[out]`
/// - `TunableWhite`: `[cold, warm]` (or `[temperature, brightness]`)
/// - `Rgb`: `[r, g, b]`
/// - `Rgbw`: `[r, g, b, w]`
/// - `RgbTunableWhite`: `[r, g, b, cold, warm]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    Switchable,
    Dimmable,
    TunableWhite(CctWiring),
    Rgb,
    Rgbw {
        /// RGB color the white LED produces at full power
        white_equivalent: Rgb,
    },
    RgbTunableWhite(CctWiring),
}

impl Topology {
    /// Number of logical output channels
    pub const fn channel_count(self) -> u8 {
        match self {
            Self::Switchable | Self::Dimmable => 1,
            Self::TunableWhite(_) => 2,
            Self::Rgb => 3,
            Self::Rgbw { .. } => 4,
            Self::RgbTunableWhite(_) => 5,
        }
    }

    /// Whether color temperature commands apply
    pub const fn supports_temperature(self) -> bool {
        matches!(
            self,
            Self::TunableWhite(_) | Self::Rgbw { .. } | Self::RgbTunableWhite(_)
        )
    }

    /// Whether the fixture has RGB channels
    pub const fn is_color(self) -> bool {
        matches!(
            self,
            Self::Rgb | Self::Rgbw { .. } | Self::RgbTunableWhite(_)
        )
    }

    /// Light mode the fixture starts in
    pub const fn initial_mode(self) -> LightMode {
        if self.is_color() {
            LightMode::Rgb
        } else {
            LightMode::Cct
        }
    }
}
