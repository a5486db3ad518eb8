//! AQI calculation for single pollutants and whole readings.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::breakpoints::Category;
use crate::pollutant::Pollutant;

/// Swatch used by dashboards when a value cannot be classified.
pub const UNKNOWN_COLOR: &str = "#999999";

/// Classification of a concentration, or of a whole reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct AqiResult {
    pub index: u16,
    pub label: &'static str,
    pub color: &'static str,
    pub category: Category,
}

impl AqiResult {
    /// Returned for any concentration above the highest breakpoint.
    pub const CEILING: AqiResult = AqiResult::new(500, Category::Hazardous);

    pub const fn new(index: u16, category: Category) -> Self {
        Self {
            index,
            label: category.label(),
            color: category.color(),
            category,
        }
    }
}

/// Concentrations from one observation. Any subset may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Readings {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub pm25: Option<f32>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub pm10: Option<f32>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub co: Option<f32>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub no2: Option<f32>,
}

impl Readings {
    pub const fn new() -> Self {
        Self {
            pm25: None,
            pm10: None,
            co: None,
            no2: None,
        }
    }

    pub fn pm25(mut self, value: f32) -> Self {
        self.pm25 = Some(value);
        self
    }

    pub fn pm10(mut self, value: f32) -> Self {
        self.pm10 = Some(value);
        self
    }

    pub fn co(mut self, value: f32) -> Self {
        self.co = Some(value);
        self
    }

    pub fn no2(mut self, value: f32) -> Self {
        self.no2 = Some(value);
        self
    }

    pub fn with(mut self, pollutant: Pollutant, value: f32) -> Self {
        *self.slot(pollutant) = Some(value);
        self
    }

    pub fn get(&self, pollutant: Pollutant) -> Option<f32> {
        match pollutant {
            Pollutant::Pm25 => self.pm25,
            Pollutant::Pm10 => self.pm10,
            Pollutant::Co => self.co,
            Pollutant::No2 => self.no2,
        }
    }

    /// Present values in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = (Pollutant, f32)> + '_ {
        Pollutant::ALL
            .into_iter()
            .filter_map(move |p| self.get(p).map(|value| (p, value)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    fn slot(&mut self, pollutant: Pollutant) -> &mut Option<f32> {
        match pollutant {
            Pollutant::Pm25 => &mut self.pm25,
            Pollutant::Pm10 => &mut self.pm10,
            Pollutant::Co => &mut self.co,
            Pollutant::No2 => &mut self.no2,
        }
    }
}

/// Calculate the AQI for a single pollutant concentration.
///
/// # Arguments
///
/// * `pollutant` - Which breakpoint table to use
/// * `concentration` - The measured value, in the pollutant's unit
///
/// # Returns
///
/// The interpolated index with its category, or `None` when the value can
/// not be classified (negative or NaN). Any non-negative value no breakpoint
/// contains saturates to [`AqiResult::CEILING`]: values above the table, and
/// values between two published bands such as PM2.5 `12.05`.
///
/// # Examples
///
/// ```
/// use airmap_aqi::{compute_for_pollutant, Category, Pollutant};
///
/// let result = compute_for_pollutant(Pollutant::Pm25, 12.0).unwrap();
/// assert_eq!(result.index, 50);
/// assert_eq!(result.category, Category::Good);
///
/// let result = compute_for_pollutant(Pollutant::Pm25, 600.0).unwrap();
/// assert_eq!(result.index, 500);
/// assert_eq!(result.category.slug(), "hazardous");
/// ```
pub fn compute_for_pollutant(pollutant: Pollutant, concentration: f32) -> Option<AqiResult> {
    let table = pollutant.breakpoints();

    // Also rejects NaN
    if !(concentration >= table[0].concentration_min) {
        return None;
    }

    // Above the table, or between two published bands
    let result = table
        .iter()
        .find(|bp| bp.contains(concentration))
        .map_or(AqiResult::CEILING, |bp| {
            AqiResult::new(bp.interpolate(concentration), bp.category)
        });
    Some(result)
}

/// Same as [`compute_for_pollutant`] for callers holding a raw wire key.
/// Unknown keys such as `"ozone"` give `None`.
pub fn compute_for_key(key: &str, concentration: f32) -> Option<AqiResult> {
    let pollutant: Pollutant = key.parse().ok()?;
    compute_for_pollutant(pollutant, concentration)
}

/// Overall AQI for a reading: the worst of the per-pollutant results.
///
/// Pollutants are visited in `pm25, pm10, co, no2` order and only a strictly
/// higher index replaces the current worst, so ties keep the first one.
/// Returns `None` when no present value can be classified.
pub fn compute_overall(readings: &Readings) -> Option<AqiResult> {
    readings
        .iter()
        .filter_map(|(pollutant, concentration)| compute_for_pollutant(pollutant, concentration))
        .fold(None, |worst, current| match worst {
            Some(worst) if current.index <= worst.index => Some(worst),
            _ => Some(current),
        })
}

/// Color swatch for a pollutant value, or [`UNKNOWN_COLOR`].
pub fn pollutant_color(key: &str, concentration: f32) -> &'static str {
    compute_for_key(key, concentration).map_or(UNKNOWN_COLOR, |result| result.color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    fn index(pollutant: Pollutant, concentration: f32) -> u16 {
        compute_for_pollutant(pollutant, concentration).unwrap().index
    }

    #[test]
    fn test_pm25() {
        assert_eq!(index(Pollutant::Pm25, 0.0), 0);
        assert_eq!(index(Pollutant::Pm25, 4.5), 19);
        assert_eq!(index(Pollutant::Pm25, 6.0), 25);
        assert_eq!(index(Pollutant::Pm25, 12.0), 50);
        assert_eq!(index(Pollutant::Pm25, 12.1), 51);
        assert_eq!(index(Pollutant::Pm25, 35.4), 100);
        assert_eq!(index(Pollutant::Pm25, 35.5), 101);
        assert_eq!(index(Pollutant::Pm25, 45.0), 124);
        assert_eq!(index(Pollutant::Pm25, 55.4), 150);
        assert_eq!(index(Pollutant::Pm25, 55.5), 151);
        assert_eq!(index(Pollutant::Pm25, 90.0), 169);
        assert_eq!(index(Pollutant::Pm25, 150.4), 200);
        assert_eq!(index(Pollutant::Pm25, 150.5), 201);
        assert_eq!(index(Pollutant::Pm25, 200.0), 250);
        assert_eq!(index(Pollutant::Pm25, 250.4), 300);
        assert_eq!(index(Pollutant::Pm25, 250.5), 301);
        assert_eq!(index(Pollutant::Pm25, 500.0), 500);
    }

    #[test]
    fn test_pm10() {
        assert_eq!(index(Pollutant::Pm10, 0.0), 0);
        assert_eq!(index(Pollutant::Pm10, 27.0), 25);
        assert_eq!(index(Pollutant::Pm10, 54.0), 50);
        assert_eq!(index(Pollutant::Pm10, 55.0), 51);
        assert_eq!(index(Pollutant::Pm10, 154.0), 100);
        assert_eq!(index(Pollutant::Pm10, 155.0), 101);
        assert_eq!(index(Pollutant::Pm10, 254.0), 150);
        assert_eq!(index(Pollutant::Pm10, 300.0), 173);
        assert_eq!(index(Pollutant::Pm10, 604.0), 500);
    }

    #[test]
    fn test_co_and_no2() {
        assert_eq!(index(Pollutant::Co, 2.2), 25);
        assert_eq!(index(Pollutant::Co, 4.4), 50);
        assert_eq!(index(Pollutant::Co, 4.5), 51);
        assert_eq!(index(Pollutant::Co, 9.5), 101);
        assert_eq!(index(Pollutant::Co, 50.0), 500);
        assert_eq!(index(Pollutant::No2, 53.0), 50);
        assert_eq!(index(Pollutant::No2, 54.0), 51);
        assert_eq!(index(Pollutant::No2, 360.0), 150);
        assert_eq!(index(Pollutant::No2, 361.0), 151);
        assert_eq!(index(Pollutant::No2, 2049.0), 500);
    }

    #[test]
    fn test_labels() {
        let good = compute_for_pollutant(Pollutant::Pm25, 12.0).unwrap();
        assert_eq!(good.label, "Good");
        assert_eq!(good.color, "#00e400");
        assert_eq!(good.category.slug(), "good");

        let unhealthy = compute_for_pollutant(Pollutant::Pm25, 55.5).unwrap();
        assert_eq!(unhealthy.index, 151);
        assert_eq!(unhealthy.label, "Unhealthy");
        assert_eq!(unhealthy.category.slug(), "unhealthy");

        let sensitive = compute_for_pollutant(Pollutant::Pm10, 200.0).unwrap();
        assert_eq!(sensitive.category.slug(), "unhealthy-for-sensitive-groups");
    }

    #[test]
    fn test_saturation() {
        assert_eq!(compute_for_pollutant(Pollutant::Pm25, 600.0), Some(AqiResult::CEILING));
        assert_eq!(compute_for_pollutant(Pollutant::Pm10, 605.0), Some(AqiResult::CEILING));
        assert_eq!(compute_for_pollutant(Pollutant::Co, 51.0), Some(AqiResult::CEILING));
        assert_eq!(compute_for_pollutant(Pollutant::No2, 1.0e6), Some(AqiResult::CEILING));
        assert_eq!(compute_for_pollutant(Pollutant::No2, f32::INFINITY), Some(AqiResult::CEILING));
        assert_eq!(AqiResult::CEILING.label, "Hazardous");
        assert_eq!(AqiResult::CEILING.color, "#7e0023");
    }

    #[test]
    fn test_unclassifiable() {
        assert_eq!(compute_for_pollutant(Pollutant::Pm25, -0.1), None);
        assert_eq!(compute_for_pollutant(Pollutant::Co, f32::NAN), None);
        assert_eq!(compute_for_pollutant(Pollutant::No2, f32::NEG_INFINITY), None);
        assert_eq!(compute_for_key("ozone", 10.0), None);
    }

    #[test]
    fn test_gap_between_bands_saturates() {
        let gap = compute_for_pollutant(Pollutant::Pm25, 12.05).unwrap();
        assert_eq!(gap, AqiResult::CEILING);
        assert_eq!(gap.label, "Hazardous");
        assert_eq!(gap.color, "#7e0023");
        assert_eq!(gap.category.slug(), "hazardous");

        assert_eq!(compute_for_pollutant(Pollutant::Co, 4.45), Some(AqiResult::CEILING));
        assert_eq!(compute_for_pollutant(Pollutant::Pm10, 54.5), Some(AqiResult::CEILING));
        assert_eq!(compute_for_pollutant(Pollutant::No2, 649.5), Some(AqiResult::CEILING));
    }

    #[test]
    fn test_breakpoint_bounds() {
        for pollutant in Pollutant::ALL {
            for bp in pollutant.breakpoints() {
                let low = compute_for_pollutant(pollutant, bp.concentration_min).unwrap();
                let high = compute_for_pollutant(pollutant, bp.concentration_max).unwrap();
                assert_eq!(low.index, bp.index_min, "{pollutant} at {}", bp.concentration_min);
                assert_eq!(high.index, bp.index_max, "{pollutant} at {}", bp.concentration_max);
                assert_eq!(low.category, bp.category);
                assert_eq!(high.category, bp.category);
            }
        }
    }

    #[test]
    fn test_monotonic() {
        for pollutant in Pollutant::ALL {
            let top = pollutant.breakpoints()[5].concentration_max;
            let steps = 5000;
            let mut last = 0;
            for i in 0..=steps {
                let concentration = top * i as f32 / steps as f32;
                // Gaps between bands saturate, only sweep covered values
                let covered = pollutant.breakpoints().iter().any(|bp| bp.contains(concentration));
                if !covered {
                    continue;
                }
                let current = index(pollutant, concentration);
                assert!(current >= last, "{pollutant} dropped at {concentration}");
                last = current;
            }
        }
    }

    #[test]
    fn test_compute_for_key() {
        assert_eq!(compute_for_key("pm25", 12.0).map(|r| r.index), Some(50));
        assert_eq!(compute_for_key("PM25", 12.0).map(|r| r.index), Some(50));
        assert_eq!(compute_for_key("pm2.5", 12.0), None);
    }

    #[test]
    fn test_overall_takes_worst() {
        let readings = Readings::new().pm25(35.0).pm10(60.0).co(0.5).no2(15.0);
        let overall = compute_overall(&readings).unwrap();
        let pm25 = compute_for_pollutant(Pollutant::Pm25, 35.0).unwrap();
        let pm10 = compute_for_pollutant(Pollutant::Pm10, 60.0).unwrap();

        assert_eq!(overall.index, pm25.index.max(pm10.index));
        assert_eq!(overall, pm25);
        assert_eq!(overall.category, Category::Moderate);
    }

    #[test]
    fn test_overall_single_and_missing() {
        let overall = compute_overall(&Readings::new().pm25(10.0)).unwrap();
        assert_eq!(overall.label, "Good");

        assert_eq!(compute_overall(&Readings::new()), None);
        assert_eq!(compute_overall(&Readings::new().pm10(-3.0)), None);
        assert_eq!(compute_overall(&Readings::new().pm10(-3.0).co(0.0)).map(|r| r.index), Some(0));
    }

    #[test]
    fn test_overall_tie_keeps_first() {
        // Both land exactly on index 50, pm25 is visited first
        let readings = Readings::new().no2(53.0).pm25(12.0);
        let overall = compute_overall(&readings).unwrap();
        assert_eq!(overall.index, 50);
        assert_eq!(overall, compute_for_pollutant(Pollutant::Pm25, 12.0).unwrap());
    }

    #[test]
    fn test_readings_iter_order() {
        let readings = Readings::new()
            .with(Pollutant::No2, 4.0)
            .with(Pollutant::Pm25, 1.0)
            .with(Pollutant::Co, 3.0);
        let seen: Vec<_> = readings.iter().collect();
        assert_eq!(
            seen,
            [(Pollutant::Pm25, 1.0), (Pollutant::Co, 3.0), (Pollutant::No2, 4.0)]
        );
        assert!(!readings.is_empty());
        assert!(Readings::default().is_empty());
    }

    #[test]
    fn test_pollutant_color() {
        assert_eq!(pollutant_color("pm25", 10.0), "#00e400");
        assert_eq!(pollutant_color("pm25", 60.0), "#ff0000");
        assert_eq!(pollutant_color("ozone", 60.0), UNKNOWN_COLOR);
        assert_eq!(pollutant_color("co", -1.0), UNKNOWN_COLOR);
    }

    #[test]
    fn test_repeatable() {
        let readings = Readings::new().pm25(87.3).pm10(412.0).co(7.7).no2(90.0);
        let first = compute_overall(&readings);
        for _ in 0..100 {
            assert_eq!(compute_overall(&readings), first);
        }
    }
}
