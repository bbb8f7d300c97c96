//! Damper Sizing Functions
//!
//! Derives coilover damping coefficients (N·s/m) from a fraction of critical
//! damping for a single-degree-of-freedom corner model.
//!
//! - Critical damping at the wheel: `Cc = 2·√(M·WR)`
//! - Referred to the damper axis: `Cc / mr²`
//! - Bump coefficient: `(target% / 100) · Cc_damper`
//! - Rebound is a multiple of bump, fast is half of slow

use crate::classify::BumpReboundRatio;
use crate::error::SetupError;

/// Fast (high-speed) coefficients are the slow ones divided by this
pub const FAST_DAMPING_DIVISOR: f64 = 2.0;

/// Critical damping coefficient at the wheel for a corner of `corner_mass`
/// sitting on `wheel_rate`
pub fn critical_damping_at_wheel(corner_mass: f64, wheel_rate: f64) -> f64 {
    2.0 * (corner_mass * wheel_rate).sqrt()
}

/// Critical damping coefficient referred back to the damper axis
///
/// Fails with [`SetupError::InvalidMotionRatio`] when the squared motion ratio
/// is zero, subnormal, infinite or NaN.
pub fn critical_damping_at_damper(
    corner_mass: f64,
    wheel_rate: f64,
    motion_ratio: f64,
) -> Result<f64, SetupError> {
    let mr_sq = motion_ratio.powi(2);
    if !mr_sq.is_normal() {
        tracing::warn!("Rejecting motion ratio {motion_ratio} for damper sizing");
        return Err(SetupError::InvalidMotionRatio {
            axle: None,
            motion_ratio,
        });
    }

    Ok(critical_damping_at_wheel(corner_mass, wheel_rate) / mr_sq)
}

/// Slow bump damping coefficient for a corner
///
/// # Arguments
/// * `corner_mass` - Corner sprung mass (kg)
/// * `wheel_rate` - Wheel rate (N/m)
/// * `motion_ratio` - Wheel to damper motion ratio, its square must be a normal float
/// * `damp_target_percent` - Target percentage of critical damping (typically 20-70)
///
/// # Returns
/// Damper-side coefficient (N·s/m). Zero mass or zero wheel rate gives zero.
pub fn bump_damping(
    corner_mass: f64,
    wheel_rate: f64,
    motion_ratio: f64,
    damp_target_percent: f64,
) -> Result<f64, SetupError> {
    let critical = critical_damping_at_damper(corner_mass, wheel_rate, motion_ratio)?;
    Ok((damp_target_percent / 100.0) * critical)
}

/// Rebound coefficient paired with a bump coefficient
pub fn rebound_damping(bump: f64, ratio: BumpReboundRatio) -> f64 {
    bump * ratio.rebound_multiplier()
}

/// High-speed coefficient derived from a low-speed one
pub fn fast_damping(slow: f64) -> f64 {
    slow / FAST_DAMPING_DIVISOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_critical_damping_default_corner() {
        let wheel_rate = crate::rates::wheel_rate(crate::rates::spring_rate(2.5, 125.0), 0.5);

        let at_wheel = critical_damping_at_wheel(125.0, wheel_rate);
        assert!((at_wheel - 1963.50).abs() < 0.01);

        let at_damper = critical_damping_at_damper(125.0, wheel_rate, 0.5).unwrap();
        assert!((at_damper - 7853.98).abs() < 0.01);
    }

    #[test]
    fn test_bump_damping_zero_motion_ratio() {
        let result = bump_damping(125.0, 7710.0, 0.0, 50.0);
        assert!(matches!(
            result,
            Err(SetupError::InvalidMotionRatio { axle: None, .. })
        ));
    }

    #[test]
    fn test_bump_damping_vanishing_ratio_rejected() {
        assert!(bump_damping(125.0, 0.0, 1e-170, 50.0).is_err());
        assert!(bump_damping(125.0, 7710.0, f64::NAN, 50.0).is_err());
    }

    #[test]
    fn test_bump_damping_zero_mass_is_zero() {
        assert_eq!(bump_damping(0.0, 7710.0, 0.5, 50.0).unwrap(), 0.0);
        assert_eq!(bump_damping(125.0, 0.0, 0.5, 50.0).unwrap(), 0.0);
    }

    #[test]
    fn test_rebound_multipliers() {
        assert_eq!(rebound_damping(1000.0, BumpReboundRatio::TwoToOne), 2000.0);
        assert_eq!(rebound_damping(1000.0, BumpReboundRatio::ThreeToOne), 3000.0);
    }

    #[test]
    fn test_fast_damping_is_half() {
        assert_eq!(fast_damping(3927.0), 1963.5);
    }
}
