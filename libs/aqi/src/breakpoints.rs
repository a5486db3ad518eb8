//! Breakpoint tables and AQI categories.
//!
//! The concentration ranges are the EPA breakpoints used by the dashboard,
//! see the technical assistance document for the reporting of daily AQI at
//! document.airnow.gov.
//!
//! Ranges within a table are ordered and non-overlapping. Published
//! concentration bounds leave a gap of one reporting digit between bands
//! (e.g. PM2.5 `12.0` and `12.1`); the calculator saturates values in a gap.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Category enum provides the EPA AQI levels, ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Category {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Good,
        Category::Moderate,
        Category::UnhealthyForSensitiveGroups,
        Category::Unhealthy,
        Category::VeryUnhealthy,
        Category::Hazardous,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Category::Good => "Good",
            Category::Moderate => "Moderate",
            Category::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            Category::Unhealthy => "Unhealthy",
            Category::VeryUnhealthy => "Very Unhealthy",
            Category::Hazardous => "Hazardous",
        }
    }

    /// Hex color from the EPA AQI color scale.
    pub const fn color(self) -> &'static str {
        match self {
            Category::Good => "#00e400",
            Category::Moderate => "#ffff00",
            Category::UnhealthyForSensitiveGroups => "#ff7e00",
            Category::Unhealthy => "#ff0000",
            Category::VeryUnhealthy => "#8f3f97",
            Category::Hazardous => "#7e0023",
        }
    }

    /// The label lower-cased with whitespace replaced by hyphens.
    pub const fn slug(self) -> &'static str {
        match self {
            Category::Good => "good",
            Category::Moderate => "moderate",
            Category::UnhealthyForSensitiveGroups => "unhealthy-for-sensitive-groups",
            Category::Unhealthy => "unhealthy",
            Category::VeryUnhealthy => "very-unhealthy",
            Category::Hazardous => "hazardous",
        }
    }

    /// Provides a Category variant based on the specified AQI value.
    /// Uses the ranges provided by the EPA for mapping AQI to a level.
    ///
    /// # Arguments
    ///
    /// * `aqi` - The calculated AQI
    ///
    /// # Examples
    ///
    /// ```
    /// use airmap_aqi::Category;
    ///
    /// assert_eq!(Category::from_index(42), Category::Good);
    /// assert_eq!(Category::from_index(151), Category::Unhealthy);
    /// assert_eq!(Category::from_index(999), Category::Hazardous);
    /// ```
    pub const fn from_index(aqi: u16) -> Category {
        match aqi {
            0..=50 => Category::Good,
            51..=100 => Category::Moderate,
            101..=150 => Category::UnhealthyForSensitiveGroups,
            151..=200 => Category::Unhealthy,
            201..=300 => Category::VeryUnhealthy,
            _ => Category::Hazardous,
        }
    }

    /// Health recommendation shown next to the index.
    pub const fn health_message(self) -> &'static str {
        match self {
            Category::Good => {
                "Air quality is satisfactory, and air pollution poses little or no risk."
            }
            Category::Moderate => {
                "Air quality is acceptable. However, there may be a risk for some people, \
                 particularly those who are unusually sensitive to air pollution."
            }
            Category::UnhealthyForSensitiveGroups => {
                "Members of sensitive groups may experience health effects. \
                 The general public is less likely to be affected."
            }
            Category::Unhealthy => {
                "Some members of the general public may experience health effects; \
                 members of sensitive groups may experience more serious health effects."
            }
            Category::VeryUnhealthy => {
                "Health alert: The risk of health effects is increased for everyone."
            }
            Category::Hazardous => {
                "Health warning of emergency conditions: everyone is more likely to be affected."
            }
        }
    }
}

/// One row of a pollutant's breakpoint table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    pub concentration_min: f32,
    pub concentration_max: f32,
    pub index_min: u16,
    pub index_max: u16,
    pub category: Category,
}

impl Breakpoint {
    const fn new(
        concentration_min: f32,
        concentration_max: f32,
        index_min: u16,
        index_max: u16,
        category: Category,
    ) -> Self {
        Self {
            concentration_min,
            concentration_max,
            index_min,
            index_max,
            category,
        }
    }

    pub const fn label(&self) -> &'static str {
        self.category.label()
    }

    pub const fn color(&self) -> &'static str {
        self.category.color()
    }

    /// Inclusive on both ends.
    pub fn contains(&self, concentration: f32) -> bool {
        concentration >= self.concentration_min && concentration <= self.concentration_max
    }

    /// Linear interpolation formula transcribed from EPA documentation
    /// AQI = ((AQIhigh - AQIlow) / (Chigh - Clow)) * (Cactual - Clow) + AQIlow
    pub fn interpolate(&self, concentration: f32) -> u16 {
        let aqi = ((self.index_max - self.index_min) as f32
            / (self.concentration_max - self.concentration_min))
            * (concentration - self.concentration_min)
            + self.index_min as f32;
        libm::roundf(aqi) as u16
    }
}

use Category::*;

// PM2.5, µg/m³
pub(crate) static PM25_BREAKPOINTS: [Breakpoint; 6] = [
    Breakpoint::new(0.0, 12.0, 0, 50, Good),
    Breakpoint::new(12.1, 35.4, 51, 100, Moderate),
    Breakpoint::new(35.5, 55.4, 101, 150, UnhealthyForSensitiveGroups),
    Breakpoint::new(55.5, 150.4, 151, 200, Unhealthy),
    Breakpoint::new(150.5, 250.4, 201, 300, VeryUnhealthy),
    Breakpoint::new(250.5, 500.0, 301, 500, Hazardous),
];

// PM10, µg/m³
pub(crate) static PM10_BREAKPOINTS: [Breakpoint; 6] = [
    Breakpoint::new(0.0, 54.0, 0, 50, Good),
    Breakpoint::new(55.0, 154.0, 51, 100, Moderate),
    Breakpoint::new(155.0, 254.0, 101, 150, UnhealthyForSensitiveGroups),
    Breakpoint::new(255.0, 354.0, 151, 200, Unhealthy),
    Breakpoint::new(355.0, 424.0, 201, 300, VeryUnhealthy),
    Breakpoint::new(425.0, 604.0, 301, 500, Hazardous),
];

// CO, ppm
pub(crate) static CO_BREAKPOINTS: [Breakpoint; 6] = [
    Breakpoint::new(0.0, 4.4, 0, 50, Good),
    Breakpoint::new(4.5, 9.4, 51, 100, Moderate),
    Breakpoint::new(9.5, 12.4, 101, 150, UnhealthyForSensitiveGroups),
    Breakpoint::new(12.5, 15.4, 151, 200, Unhealthy),
    Breakpoint::new(15.5, 30.4, 201, 300, VeryUnhealthy),
    Breakpoint::new(30.5, 50.0, 301, 500, Hazardous),
];

// NO2, ppb
pub(crate) static NO2_BREAKPOINTS: [Breakpoint; 6] = [
    Breakpoint::new(0.0, 53.0, 0, 50, Good),
    Breakpoint::new(54.0, 100.0, 51, 100, Moderate),
    Breakpoint::new(101.0, 360.0, 101, 150, UnhealthyForSensitiveGroups),
    Breakpoint::new(361.0, 649.0, 151, 200, Unhealthy),
    Breakpoint::new(650.0, 1249.0, 201, 300, VeryUnhealthy),
    Breakpoint::new(1250.0, 2049.0, 301, 500, Hazardous),
];
