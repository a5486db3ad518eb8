//! Pollutant kinds measured by the network.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::breakpoints::{
    Breakpoint, CO_BREAKPOINTS, NO2_BREAKPOINTS, PM10_BREAKPOINTS, PM25_BREAKPOINTS,
};
use crate::error::UnknownPollutant;

/// Pollutant enum covers every substance with a breakpoint table.
///
/// The declaration order is the evaluation order used throughout the
/// library: `pm25`, `pm10`, `co`, `no2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Pollutant {
    Pm25,
    Pm10,
    Co,
    No2,
}

impl Pollutant {
    /// Every pollutant, in evaluation order.
    pub const ALL: [Pollutant; 4] = [
        Pollutant::Pm25,
        Pollutant::Pm10,
        Pollutant::Co,
        Pollutant::No2,
    ];

    /// Wire key used by devices and the REST/WebSocket payloads.
    pub const fn key(self) -> &'static str {
        match self {
            Pollutant::Pm25 => "pm25",
            Pollutant::Pm10 => "pm10",
            Pollutant::Co => "co",
            Pollutant::No2 => "no2",
        }
    }

    /// Concentration unit the breakpoint table is expressed in.
    pub const fn unit(self) -> &'static str {
        match self {
            Pollutant::Pm25 | Pollutant::Pm10 => "µg/m³",
            Pollutant::Co => "ppm",
            Pollutant::No2 => "ppb",
        }
    }

    /// Human readable name for labels and legends.
    pub const fn display_name(self) -> &'static str {
        match self {
            Pollutant::Pm25 => "PM2.5",
            Pollutant::Pm10 => "PM10",
            Pollutant::Co => "CO",
            Pollutant::No2 => "NO₂",
        }
    }

    /// The ordered breakpoint table for this pollutant.
    pub fn breakpoints(self) -> &'static [Breakpoint] {
        match self {
            Pollutant::Pm25 => &PM25_BREAKPOINTS,
            Pollutant::Pm10 => &PM10_BREAKPOINTS,
            Pollutant::Co => &CO_BREAKPOINTS,
            Pollutant::No2 => &NO2_BREAKPOINTS,
        }
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Pollutant {
    type Err = UnknownPollutant;

    /// Parses a wire key, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pollutant::ALL
            .into_iter()
            .find(|p| p.key().eq_ignore_ascii_case(s))
            .ok_or(UnknownPollutant)
    }
}

/// A pollutant value paired with its unit for display, e.g. `12.3 µg/m³`.
///
/// Absent values render as `N/A`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub pollutant: Pollutant,
    pub value: Option<f32>,
}

impl Measurement {
    pub fn new(pollutant: Pollutant, value: Option<f32>) -> Self {
        Self { pollutant, value }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(value) => write!(f, "{:.1} {}", value, self.pollutant.unit()),
            None => f.write_str("N/A"),
        }
    }
}
