//! Error types for setup calculation

use thiserror::Error;

use crate::setup::Axle;

/// Errors that can occur while sizing springs and dampers
#[derive(Error, Debug)]
pub enum SetupError {
    /// Motion ratio whose square is not a normal float (zero, subnormal, NaN or infinite)
    #[error("Invalid motion ratio {motion_ratio}{}: damping cannot be referred to the damper", axle_suffix(.axle))]
    InvalidMotionRatio {
        /// Axle the ratio belongs to, when known
        axle: Option<Axle>,
        /// Rejected ratio
        motion_ratio: f64,
    },

    /// Input that must not be negative (or NaN)
    #[error("Negative value for '{field}': {value}")]
    NegativeValue {
        /// Input field name
        field: &'static str,
        /// Rejected value
        value: f64,
    },

    /// Unrecognised ratio text
    #[error("Unknown bump:rebound ratio: '{0}' (expected \"2:1\" or \"3:1\")")]
    UnknownRatio(String),

    /// Setup file could not be read or written
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Setup file is not valid JSON for the inputs
    #[error("Setup file parse error: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn axle_suffix(axle: &Option<Axle>) -> String {
    match axle {
        Some(axle) => format!(" on {} axle", axle),
        None => String::new(),
    }
}
