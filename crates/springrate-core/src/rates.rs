//! Spring and Wheel Rate Functions
//!
//! Closed-form sizing for a single corner:
//! - Corner sprung mass from total sprung weight and axle distribution
//! - Spring rate from a target ride natural frequency: `K = 4π²f²M`
//! - Wheel rate from spring rate and motion ratio: `WR = K·mr²`
//!
//! Units are fixed: kg, Hz and N/m.

use std::f64::consts::PI;

/// Sprung mass carried by one wheel of an axle
///
/// # Arguments
/// * `sprung_weight` - Total sprung mass of the vehicle (kg)
/// * `weight_dist_percent` - Share of the sprung mass on this axle (0-100)
///
/// # Returns
/// Mass on one corner (kg); the axle load is split evenly left/right
pub fn corner_sprung_mass(sprung_weight: f64, weight_dist_percent: f64) -> f64 {
    sprung_weight * (weight_dist_percent / 100.0) / 2.0
}

/// Spring rate required for a corner to ride at `frequency_hz`
///
/// # Arguments
/// * `frequency_hz` - Target natural frequency (Hz), expected > 0
/// * `corner_mass` - Corner sprung mass (kg), expected >= 0
///
/// # Returns
/// Spring rate (N/m). Zero mass gives a zero rate.
pub fn spring_rate(frequency_hz: f64, corner_mass: f64) -> f64 {
    4.0 * PI.powi(2) * frequency_hz.powi(2) * corner_mass
}

/// Rate seen at the wheel for a spring acting through `motion_ratio`
pub fn wheel_rate(spring_rate: f64, motion_ratio: f64) -> f64 {
    spring_rate * motion_ratio.powi(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_sprung_mass_even_split() {
        assert_eq!(corner_sprung_mass(1000.0, 50.0), 125.0);
        assert_eq!(corner_sprung_mass(1000.0, 100.0), 500.0);
        assert_eq!(corner_sprung_mass(1000.0, 0.0), 0.0);
    }

    #[test]
    fn test_spring_rate_default_corner() {
        let rate = spring_rate(2.5, 125.0);
        assert!((rate - 30842.51).abs() < 0.01);
    }

    #[test]
    fn test_spring_rate_zero_mass() {
        assert_eq!(spring_rate(2.5, 0.0), 0.0);
    }

    #[test]
    fn test_wheel_rate_default_corner() {
        let rate = wheel_rate(spring_rate(2.5, 125.0), 0.5);
        assert!((rate - 7710.63).abs() < 0.01);
    }

    #[test]
    fn test_wheel_rate_unit_ratio_is_identity() {
        assert_eq!(wheel_rate(12345.0, 1.0), 12345.0);
    }
}
