//! Setup Calculation
//!
//! Runs the rate, damping and classification functions over a full vehicle.
//! Inputs are passed by value and every call returns a fresh [`TuningReport`];
//! nothing is cached between calls.

mod file;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::classify::{BumpReboundRatio, DampingTargetClass, RideFrequencyClass};
use crate::damping::{bump_damping, fast_damping, rebound_damping};
use crate::error::SetupError;
use crate::rates::{corner_sprung_mass, spring_rate, wheel_rate};

/// Vehicle parameters driving a setup calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleInputs {
    /// Total sprung mass (kg)
    pub sprung_weight: f64,
    /// Share of sprung mass on the front axle (0-100)
    pub front_weight_dist_percent: f64,
    /// Target ride natural frequency (Hz)
    pub natural_frequency_hz: f64,
    /// Front wheel to damper motion ratio
    pub front_motion_ratio: f64,
    /// Rear wheel to damper motion ratio
    pub rear_motion_ratio: f64,
    /// Target bump damping as a percentage of critical (20-70)
    pub damp_target_percent: f64,
    /// Rebound to bump damping ratio
    pub bump_rebound_ratio: BumpReboundRatio,
}

impl Default for VehicleInputs {
    fn default() -> Self {
        Self {
            sprung_weight: 1000.0,
            front_weight_dist_percent: 50.0,
            natural_frequency_hz: 2.5,
            front_motion_ratio: 0.5,
            rear_motion_ratio: 0.5,
            damp_target_percent: 50.0,
            bump_rebound_ratio: BumpReboundRatio::ThreeToOne,
        }
    }
}

impl VehicleInputs {
    /// Share of sprung mass on the rear axle, always `100 - front`
    pub fn rear_weight_dist_percent(&self) -> f64 {
        100.0 - self.front_weight_dist_percent
    }

    /// Weight distribution percentage for an axle
    pub fn weight_dist_percent(&self, axle: Axle) -> f64 {
        match axle {
            Axle::Front => self.front_weight_dist_percent,
            Axle::Rear => self.rear_weight_dist_percent(),
        }
    }

    /// Motion ratio for an axle
    pub fn motion_ratio(&self, axle: Axle) -> f64 {
        match axle {
            Axle::Front => self.front_motion_ratio,
            Axle::Rear => self.rear_motion_ratio,
        }
    }

    /// Check that every input, and the derived rear distribution, is non-negative
    ///
    /// The calculation functions never call this; it is applied when loading
    /// setup files and is available to callers collecting raw input.
    pub fn validate(&self) -> Result<(), SetupError> {
        let fields = [
            ("sprung_weight", self.sprung_weight),
            ("front_weight_dist_percent", self.front_weight_dist_percent),
            ("rear_weight_dist_percent", self.rear_weight_dist_percent()),
            ("natural_frequency_hz", self.natural_frequency_hz),
            ("front_motion_ratio", self.front_motion_ratio),
            ("rear_motion_ratio", self.rear_motion_ratio),
            ("damp_target_percent", self.damp_target_percent),
        ];

        for (field, value) in fields {
            // Negated so NaN is rejected as well
            if !(value >= 0.0) {
                return Err(SetupError::NegativeValue { field, value });
            }
        }

        Ok(())
    }
}

/// Vehicle axle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axle {
    /// Front axle
    Front,
    /// Rear axle
    Rear,
}

impl fmt::Display for Axle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axle::Front => write!(f, "front"),
            Axle::Rear => write!(f, "rear"),
        }
    }
}

/// Spring and damper recommendation for one corner of an axle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CornerResult {
    /// Sprung mass on this corner (kg)
    pub corner_sprung_mass: f64,
    /// Spring rate (N/m)
    pub spring_rate: f64,
    /// Rate at the wheel (N/m)
    pub wheel_rate: f64,
    /// Low-speed bump coefficient (N·s/m)
    pub slow_bump_damping: f64,
    /// Low-speed rebound coefficient (N·s/m)
    pub slow_rebound_damping: f64,
    /// High-speed bump coefficient (N·s/m)
    pub fast_bump_damping: f64,
    /// High-speed rebound coefficient (N·s/m)
    pub fast_rebound_damping: f64,
}

/// Complete setup recommendation for a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TuningReport {
    /// Result for each front corner
    pub front: CornerResult,
    /// Result for each rear corner
    pub rear: CornerResult,
    /// Derived rear axle share of sprung mass (0-100)
    pub rear_weight_dist_percent: f64,
    /// Vehicle class suited to the ride frequency
    pub frequency_class: RideFrequencyClass,
    /// Vehicle class suited to the damping target
    pub damping_class: DampingTargetClass,
    /// Ratio used for the rebound coefficients
    pub bump_rebound_ratio: BumpReboundRatio,
}

impl TuningReport {
    /// Result for one axle's corners
    pub fn corner(&self, axle: Axle) -> &CornerResult {
        match axle {
            Axle::Front => &self.front,
            Axle::Rear => &self.rear,
        }
    }

    /// Label of the ride frequency class
    pub fn frequency_label(&self) -> &'static str {
        self.frequency_class.label()
    }

    /// Label of the damping target class
    pub fn damping_label(&self) -> &'static str {
        self.damping_class.label()
    }

    /// Description of the bump:rebound ratio
    pub fn ratio_label(&self) -> &'static str {
        self.bump_rebound_ratio.label()
    }

    /// Multiplier from bump to rebound damping
    pub fn rebound_multiplier(&self) -> f64 {
        self.bump_rebound_ratio.rebound_multiplier()
    }
}

/// Size the springs and dampers for one corner of `axle`
///
/// Fails with [`SetupError::InvalidMotionRatio`] when the square of the axle's
/// motion ratio is zero or not a normal float.
pub fn calculate_corner(inputs: VehicleInputs, axle: Axle) -> Result<CornerResult, SetupError> {
    let motion_ratio = inputs.motion_ratio(axle);
    let mass = corner_sprung_mass(inputs.sprung_weight, inputs.weight_dist_percent(axle));
    let spring = spring_rate(inputs.natural_frequency_hz, mass);
    let wheel = wheel_rate(spring, motion_ratio);

    let slow_bump = bump_damping(mass, wheel, motion_ratio, inputs.damp_target_percent)
        .map_err(|e| match e {
            SetupError::InvalidMotionRatio { motion_ratio, .. } => {
                SetupError::InvalidMotionRatio {
                    axle: Some(axle),
                    motion_ratio,
                }
            }
            other => other,
        })?;
    let slow_rebound = rebound_damping(slow_bump, inputs.bump_rebound_ratio);

    let result = CornerResult {
        corner_sprung_mass: mass,
        spring_rate: spring,
        wheel_rate: wheel,
        slow_bump_damping: slow_bump,
        slow_rebound_damping: slow_rebound,
        fast_bump_damping: fast_damping(slow_bump),
        fast_rebound_damping: fast_damping(slow_rebound),
    };

    tracing::debug!(
        "{} corner: mass={:.2}kg spring={:.2}N/m wheel={:.2}N/m bump={:.2}Ns/m rebound={:.2}Ns/m",
        axle,
        result.corner_sprung_mass,
        result.spring_rate,
        result.wheel_rate,
        result.slow_bump_damping,
        result.slow_rebound_damping
    );

    Ok(result)
}

/// Size both axles and classify the targets
///
/// Either both corners succeed or the first error is returned; no partial
/// report is produced.
pub fn calculate_setup(inputs: VehicleInputs) -> Result<TuningReport, SetupError> {
    let front = calculate_corner(inputs, Axle::Front)?;
    let rear = calculate_corner(inputs, Axle::Rear)?;

    let report = TuningReport {
        front,
        rear,
        rear_weight_dist_percent: inputs.rear_weight_dist_percent(),
        frequency_class: RideFrequencyClass::from_frequency(inputs.natural_frequency_hz),
        damping_class: DampingTargetClass::from_percent(inputs.damp_target_percent),
        bump_rebound_ratio: inputs.bump_rebound_ratio,
    };

    tracing::debug!(
        "Setup calculated: frequency suits {}, damping suits {}, ratio {}",
        report.frequency_class,
        report.damping_class,
        report.bump_rebound_ratio
    );

    Ok(report)
}
