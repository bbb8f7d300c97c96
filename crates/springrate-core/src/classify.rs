//! Suitability Classification
//!
//! Maps a ride frequency or damping target onto the class of vehicle it suits.
//! Each classifier is an ordered table of `(upper_bound, class)` rows; the
//! first row with `value <= upper_bound` wins, and anything past the last row
//! (including NaN) falls into the final class.
//!
//! Also holds the bump:rebound ratio selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SetupError;

// =============================================================================
// Natural frequency
// =============================================================================

/// Upper bound (Hz) of the passenger car band
pub const FREQ_PASSENGER_MAX: f64 = 1.0;
/// Upper bound (Hz) of the sports car band
pub const FREQ_SPORTS_MAX: f64 = 1.5;
/// Upper bound (Hz) of the non-aero race car band
pub const FREQ_NON_AERO_MAX: f64 = 2.5;
/// Upper bound (Hz) of the moderate downforce band
pub const FREQ_MODERATE_DOWNFORCE_MAX: f64 = 3.5;

const _: () = assert!(FREQ_PASSENGER_MAX < FREQ_SPORTS_MAX);
const _: () = assert!(FREQ_SPORTS_MAX < FREQ_NON_AERO_MAX);
const _: () = assert!(FREQ_NON_AERO_MAX < FREQ_MODERATE_DOWNFORCE_MAX);

/// Vehicle class suited to a ride natural frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RideFrequencyClass {
    /// Up to 1.0 Hz
    PassengerCar,
    /// Up to 1.5 Hz
    SportsCar,
    /// Up to 2.5 Hz
    NonAeroRaceCar,
    /// Up to 3.5 Hz
    ModerateDownforceRaceCar,
    /// Above 3.5 Hz
    HighDownforceRaceCar,
}

const FREQUENCY_BANDS: [(f64, RideFrequencyClass); 4] = [
    (FREQ_PASSENGER_MAX, RideFrequencyClass::PassengerCar),
    (FREQ_SPORTS_MAX, RideFrequencyClass::SportsCar),
    (FREQ_NON_AERO_MAX, RideFrequencyClass::NonAeroRaceCar),
    (
        FREQ_MODERATE_DOWNFORCE_MAX,
        RideFrequencyClass::ModerateDownforceRaceCar,
    ),
];

impl RideFrequencyClass {
    /// Classify a natural frequency in Hz
    pub fn from_frequency(frequency_hz: f64) -> Self {
        first_band(
            &FREQUENCY_BANDS,
            frequency_hz,
            RideFrequencyClass::HighDownforceRaceCar,
        )
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            RideFrequencyClass::PassengerCar => "passenger car",
            RideFrequencyClass::SportsCar => "sports car",
            RideFrequencyClass::NonAeroRaceCar => "non-aero race car",
            RideFrequencyClass::ModerateDownforceRaceCar => "race car with moderate downforce",
            RideFrequencyClass::HighDownforceRaceCar => "race car with high downforce",
        }
    }
}

impl fmt::Display for RideFrequencyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Damping target
// =============================================================================

/// Upper bound (% of critical) of the passenger car band
pub const DAMP_PASSENGER_MAX: f64 = 30.0;
/// Upper bound (% of critical) of the performance/track car band
pub const DAMP_PERFORMANCE_MAX: f64 = 50.0;

const _: () = assert!(DAMP_PASSENGER_MAX < DAMP_PERFORMANCE_MAX);

/// Vehicle class suited to a damping target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DampingTargetClass {
    /// Up to 30% of critical
    PassengerCar,
    /// Up to 50% of critical
    PerformanceCar,
    /// Above 50% of critical
    RaceCar,
}

const DAMPING_BANDS: [(f64, DampingTargetClass); 2] = [
    (DAMP_PASSENGER_MAX, DampingTargetClass::PassengerCar),
    (DAMP_PERFORMANCE_MAX, DampingTargetClass::PerformanceCar),
];

impl DampingTargetClass {
    /// Classify a damping target given as a percentage of critical
    pub fn from_percent(damp_target_percent: f64) -> Self {
        first_band(&DAMPING_BANDS, damp_target_percent, DampingTargetClass::RaceCar)
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            DampingTargetClass::PassengerCar => "a passenger car",
            DampingTargetClass::PerformanceCar => "a performance/track car",
            DampingTargetClass::RaceCar => "a dedicated race car",
        }
    }
}

impl fmt::Display for DampingTargetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// First-match-wins scan of an ordered band table
fn first_band<T: Copy>(bands: &[(f64, T)], value: f64, otherwise: T) -> T {
    bands
        .iter()
        .find(|(upper, _)| value <= *upper)
        .map(|&(_, class)| class)
        .unwrap_or(otherwise)
}

// =============================================================================
// Bump:rebound ratio
// =============================================================================

/// Ratio of rebound to bump damping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BumpReboundRatio {
    /// Rebound is twice bump
    #[serde(rename = "2:1")]
    TwoToOne,
    /// Rebound is three times bump
    #[default]
    #[serde(rename = "3:1")]
    ThreeToOne,
}

impl BumpReboundRatio {
    /// Multiplier applied to bump damping to obtain rebound damping
    pub fn rebound_multiplier(&self) -> f64 {
        match self {
            BumpReboundRatio::TwoToOne => 2.0,
            BumpReboundRatio::ThreeToOne => 3.0,
        }
    }

    /// Human-readable description of the ratio
    pub fn label(&self) -> &'static str {
        match self {
            BumpReboundRatio::TwoToOne => "Comfort-oriented Ratio",
            BumpReboundRatio::ThreeToOne => "Recommended Ratio for Most Cars",
        }
    }
}

impl fmt::Display for BumpReboundRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BumpReboundRatio::TwoToOne => write!(f, "2:1"),
            BumpReboundRatio::ThreeToOne => write!(f, "3:1"),
        }
    }
}

impl FromStr for BumpReboundRatio {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "2:1" => Ok(BumpReboundRatio::TwoToOne),
            "3:1" => Ok(BumpReboundRatio::ThreeToOne),
            other => Err(SetupError::UnknownRatio(other.to_string())),
        }
    }
}
