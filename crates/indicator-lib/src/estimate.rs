//! Forward voltage estimation from LED wavelength.
//!
//! Quadratic fit over a vendor catalog of discrete visible and IR LEDs.
//! Only meaningful roughly between 400 nm and the near infrared; no bounds
//! are enforced.

/// Quadratic coefficient (V/m²).
pub const VF_A: f64 = 6.24e12;
/// Linear coefficient (V/m).
pub const VF_B: f64 = -12.04e6;
/// Constant term (V).
pub const VF_C: f64 = 7.22;

/// Estimated forward voltage in volts for a wavelength in meters.
pub fn estimate_forward_voltage(wavelength: f64) -> f64 {
    VF_A * (wavelength * wavelength) + VF_B * wavelength + VF_C
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn green_matches_polynomial() {
        let f = 530e-9;
        assert_eq!(
            estimate_forward_voltage(f),
            6.24e12 * (f * f) - 12.04e6 * f + 7.22
        );
    }

    #[test]
    fn visible_range_is_plausible() {
        // Red LEDs sit near 2V, blue near 3V.
        let red = estimate_forward_voltage(650e-9);
        let blue = estimate_forward_voltage(470e-9);
        assert!((1.9..2.2).contains(&red), "red: {red}");
        assert!((2.8..3.1).contains(&blue), "blue: {blue}");
    }

    #[test]
    fn shorter_wavelength_needs_more_voltage() {
        assert!(estimate_forward_voltage(400e-9) > estimate_forward_voltage(650e-9));
    }

    #[test]
    fn zero_wavelength_is_constant_term() {
        assert_eq!(estimate_forward_voltage(0.0), VF_C);
    }

    #[test]
    fn defined_outside_fit_range() {
        assert!(estimate_forward_voltage(1.0).is_finite());
        assert!(estimate_forward_voltage(-1e-6).is_finite());
    }
}
