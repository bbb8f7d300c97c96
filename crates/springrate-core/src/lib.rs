//! # SpringRate Core Library
//!
//! Core functionality for the SpringRate suspension setup calculator.

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//!
//! This library provides:
//! - Spring rate sizing from a target ride natural frequency
//! - Wheel rate conversion through the suspension motion ratio
//! - Bump/rebound damping from a percentage of critical damping
//! - Suitability classification of frequency and damping targets
//! - JSON setup files for vehicle presets
//!
//! All calculations are pure functions in fixed units (kg, Hz, N/m, N·s/m).
//!
//! ## Example
//!
//! ```rust
//! use springrate_core::setup::{calculate_setup, VehicleInputs};
//!
//! let inputs = VehicleInputs {
//!     sprung_weight: 1200.0,
//!     front_weight_dist_percent: 55.0,
//!     ..Default::default()
//! };
//!
//! let report = calculate_setup(inputs)?;
//! println!("Front spring rate: {} N/m", report.front.spring_rate as i64);
//! println!("This natural frequency is suitable for a {}", report.frequency_label());
//! # Ok::<(), springrate_core::SetupError>(())
//! ```

pub mod classify;
pub mod damping;
pub mod error;
pub mod rates;
pub mod setup;

pub use error::SetupError;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::classify::{BumpReboundRatio, DampingTargetClass, RideFrequencyClass};
    pub use crate::error::SetupError;
    pub use crate::setup::{
        calculate_corner, calculate_setup, Axle, CornerResult, TuningReport, VehicleInputs,
    };
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
