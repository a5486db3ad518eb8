//! AQI library
//!
//! This library converts raw pollutant concentrations into EPA style Air
//! Quality Index values and categories, and decides which readings exceed the
//! configured alert thresholds. Everything here is a pure function over
//! static breakpoint tables, so it can run on a sensor node, in an ingestion
//! service or behind a dashboard with identical results.
//!
//! It supports both std and no_std environments, but is best used on systems
//! with hardware floating point support.
//!
//! ```
//! use airmap_aqi::{compute_overall, evaluate, AlertThresholds, Readings, Severity};
//!
//! let readings = Readings::new().pm25(165.0).pm10(60.0);
//! let overall = compute_overall(&readings).unwrap();
//! assert_eq!(overall.label, "Very Unhealthy");
//!
//! let mut alerts = evaluate(&readings, &AlertThresholds::DEFAULT, Some(overall.index));
//! assert_eq!(alerts.next().map(|a| a.severity), Some(Severity::Critical));
//! assert!(alerts.next().is_none());
//! ```

#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod alerts;
pub mod breakpoints;
pub mod calculator;
pub mod error;
pub mod pollutant;

pub use alerts::{classify_severity, evaluate, Alert, AlertThresholds, Severity};
pub use breakpoints::{Breakpoint, Category};
pub use calculator::{
    compute_for_key, compute_for_pollutant, compute_overall, pollutant_color, AqiResult,
    Readings, UNKNOWN_COLOR,
};
pub use error::{ThresholdError, UnknownPollutant};
pub use pollutant::{Measurement, Pollutant};
