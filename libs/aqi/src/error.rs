//! Errors raised at the boundaries of the library.
//!
//! The calculator and evaluator themselves never fail; these types only
//! appear when parsing pollutant keys or validating threshold configuration.

use thiserror::Error;

use crate::pollutant::Pollutant;

/// A pollutant key that is not one of `pm25`, `pm10`, `co` or `no2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown pollutant key, expected one of pm25, pm10, co, no2")]
pub struct UnknownPollutant;

/// Rejected alert threshold configuration.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ThresholdError {
    #[error("threshold for {pollutant} is not a finite number")]
    NotFinite { pollutant: Pollutant },
    #[error("threshold for {pollutant} must be positive, got {value}")]
    NonPositive { pollutant: Pollutant, value: f32 },
}
