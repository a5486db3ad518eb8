//! Threshold alerting.
//!
//! Alerts are decided from the raw concentrations against configured
//! thresholds, independently of the computed index. The index for the
//! reading is only carried along for context.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::calculator::Readings;
use crate::error::ThresholdError;
use crate::pollutant::Pollutant;

/// Alert escalation tier, from the ratio of value to threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    Moderate,
    Severe,
    Critical,
}

/// A pollutant that exceeded its threshold in one reading.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Alert {
    pub pollutant: Pollutant,
    pub threshold: f32,
    pub current_value: f32,
    pub aqi: Option<u16>,
    pub severity: Severity,
}

/// Per-pollutant alert trigger values. Pollutants without a threshold are
/// never alerted on.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AlertThresholds {
    #[cfg_attr(feature = "serde", serde(default))]
    pub pm25: Option<f32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub pm10: Option<f32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub co: Option<f32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub no2: Option<f32>,
}

impl AlertThresholds {
    /// Thresholds used when nothing else is configured.
    pub const DEFAULT: AlertThresholds = AlertThresholds {
        pm25: Some(55.0),
        pm10: Some(155.0),
        co: Some(9.5),
        no2: Some(54.0),
    };

    /// No thresholds at all; nothing alerts.
    pub const NONE: AlertThresholds = AlertThresholds {
        pm25: None,
        pm10: None,
        co: None,
        no2: None,
    };

    pub fn get(&self, pollutant: Pollutant) -> Option<f32> {
        match pollutant {
            Pollutant::Pm25 => self.pm25,
            Pollutant::Pm10 => self.pm10,
            Pollutant::Co => self.co,
            Pollutant::No2 => self.no2,
        }
    }

    pub fn set(&mut self, pollutant: Pollutant, threshold: Option<f32>) {
        match pollutant {
            Pollutant::Pm25 => self.pm25 = threshold,
            Pollutant::Pm10 => self.pm10 = threshold,
            Pollutant::Co => self.co = threshold,
            Pollutant::No2 => self.no2 = threshold,
        }
    }

    /// Checks every configured threshold is a finite, positive number.
    ///
    /// [`evaluate`] does not validate its input, so configuration should be
    /// checked once when it is loaded.
    pub fn validate(&self) -> Result<(), ThresholdError> {
        for pollutant in Pollutant::ALL {
            let Some(value) = self.get(pollutant) else {
                continue;
            };
            if !value.is_finite() {
                return Err(ThresholdError::NotFinite { pollutant });
            }
            if value <= 0.0 {
                return Err(ThresholdError::NonPositive { pollutant, value });
            }
        }
        Ok(())
    }

    /// Loads thresholds from `ALERT_THRESHOLD_PM25`, `ALERT_THRESHOLD_PM10`,
    /// `ALERT_THRESHOLD_CO` and `ALERT_THRESHOLD_NO2`.
    ///
    /// Unset or unparseable variables keep the default for that pollutant.
    #[cfg(feature = "std")]
    pub fn from_env() -> Result<Self, ThresholdError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    #[cfg(feature = "std")]
    fn from_lookup<F>(lookup: F) -> Result<Self, ThresholdError>
    where
        F: Fn(&str) -> Option<std::string::String>,
    {
        let mut thresholds = Self::DEFAULT;
        for pollutant in Pollutant::ALL {
            let name = std::format!("ALERT_THRESHOLD_{}", pollutant.key().to_ascii_uppercase());
            if let Some(value) = lookup(&name).and_then(|raw| raw.trim().parse::<f32>().ok()) {
                thresholds.set(pollutant, Some(value));
            }
        }
        thresholds.validate()?;
        Ok(thresholds)
    }
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Classify how far a value exceeds its threshold.
///
/// # Arguments
///
/// * `value` - The measured concentration
/// * `threshold` - The configured trigger value, must be positive
///
/// # Returns
///
/// `Critical` at three times the threshold or more, `Severe` at two times or
/// more, `Moderate` otherwise.
///
/// # Examples
///
/// ```
/// use airmap_aqi::{classify_severity, Severity};
///
/// assert_eq!(classify_severity(165.0, 55.0), Severity::Critical);
/// assert_eq!(classify_severity(110.0, 55.0), Severity::Severe);
/// assert_eq!(classify_severity(56.0, 55.0), Severity::Moderate);
/// ```
pub fn classify_severity(value: f32, threshold: f32) -> Severity {
    let ratio = value / threshold;

    if ratio >= 3.0 {
        Severity::Critical
    } else if ratio >= 2.0 {
        Severity::Severe
    } else {
        Severity::Moderate
    }
}

/// Decide which pollutants of a reading exceed their thresholds.
///
/// Pollutants are checked in `pm25, pm10, co, no2` order. A pollutant alerts
/// when its value is present and positive, a threshold is configured for it,
/// and the value is strictly above the threshold. `aqi` is copied unchanged
/// into every alert.
///
/// # Examples
///
/// ```
/// use airmap_aqi::{evaluate, AlertThresholds, Pollutant, Readings, Severity};
///
/// let readings = Readings::new().pm25(165.0);
/// let alerts: Vec<_> = evaluate(&readings, &AlertThresholds::DEFAULT, Some(215)).collect();
///
/// assert_eq!(alerts.len(), 1);
/// assert_eq!(alerts[0].pollutant, Pollutant::Pm25);
/// assert_eq!(alerts[0].severity, Severity::Critical);
/// assert_eq!(alerts[0].aqi, Some(215));
/// ```
pub fn evaluate<'a>(
    readings: &'a Readings,
    thresholds: &'a AlertThresholds,
    aqi: Option<u16>,
) -> impl Iterator<Item = Alert> + 'a {
    readings.iter().filter_map(move |(pollutant, value)| {
        let threshold = thresholds.get(pollutant)?;
        (value > 0.0 && value > threshold).then(|| Alert {
            pollutant,
            threshold,
            current_value: value,
            aqi,
            severity: classify_severity(value, threshold),
        })
    })
}
