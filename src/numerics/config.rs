// src/numerics/config.rs
// Tolerance settings for approximate float comparison.

use tracing::debug;

use super::error::MathError;

/// Configuration for approximate comparison of `f64` values.
///
/// Two values are considered equal when their difference is within
/// `absolute`, or within `relative` times the larger magnitude of the two.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToleranceConfig {
    /// Largest absolute difference treated as equal
    pub absolute: f64,
    /// Largest difference relative to the larger operand treated as equal
    pub relative: f64,
}

impl Default for ToleranceConfig {
    fn default() -> Self {
        Self {
            absolute: 1e-12,
            relative: 1e-9,
        }
    }
}

impl ToleranceConfig {
    /// Create a configuration, rejecting negative or NaN tolerances.
    pub fn new(absolute: f64, relative: f64) -> Result<Self, MathError> {
        for (name, value) in [("absolute", absolute), ("relative", relative)] {
            if value.is_nan() || value < 0.0 {
                debug!(name, value, "rejecting tolerance config");
                return Err(MathError::InvalidTolerance { name, value });
            }
        }
        Ok(Self { absolute, relative })
    }

    /// Bit-for-bit comparison (apart from signed zeros).
    pub fn exact() -> Self {
        Self {
            absolute: 0.0,
            relative: 0.0,
        }
    }

    /// Tolerances suited to results that went through several square roots
    /// or reciprocals.
    pub fn loose() -> Self {
        Self {
            absolute: 1e-6,
            relative: 1e-6,
        }
    }

    /// Compare two scalars under this configuration.
    ///
    /// Delegates to [`approx::relative_eq!`] with `absolute` as the epsilon
    /// and `relative` as the max relative difference. Infinities compare
    /// equal only to themselves and NaN never compares equal.
    pub fn approx_eq(&self, a: f64, b: f64) -> bool {
        approx::relative_eq!(a, b, epsilon = self.absolute, max_relative = self.relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tolerance_defaults() {
        let config = ToleranceConfig::default();
        assert_eq!(config.absolute, 1e-12);
        assert_eq!(config.relative, 1e-9);
    }

    #[test]
    fn test_tolerance_rejects_invalid_values() {
        assert!(ToleranceConfig::new(1e-3, 0.0).is_ok());
        assert!(matches!(
            ToleranceConfig::new(-1.0, 0.0),
            Err(MathError::InvalidTolerance { name: "absolute", .. })
        ));
        assert!(matches!(
            ToleranceConfig::new(0.0, f64::NAN),
            Err(MathError::InvalidTolerance { name: "relative", .. })
        ));
    }

    #[test]
    fn test_approx_eq_absolute_and_relative() {
        let config = ToleranceConfig::default();
        assert!(config.approx_eq(0.1 + 0.2, 0.3));
        assert!(config.approx_eq(1e9, 1e9 + 0.5));
        assert!(!config.approx_eq(1.0, 1.001));

        let exact = ToleranceConfig::exact();
        assert!(exact.approx_eq(-0.0, 0.0));
        assert!(!exact.approx_eq(0.1 + 0.2, 0.3));
    }

    #[test]
    fn test_approx_eq_boundaries() {
        let config = ToleranceConfig::new(0.5, 0.0).unwrap();
        assert!(config.approx_eq(1.0, 1.5));
        assert!(!config.approx_eq(1.0, 1.5000001));

        let relative = ToleranceConfig::new(0.0, 0.1).unwrap();
        assert!(relative.approx_eq(100.0, 110.0));
        assert!(!relative.approx_eq(100.0, 112.0));
    }

    #[test]
    fn test_approx_eq_non_finite() {
        let config = ToleranceConfig::loose();
        assert!(config.approx_eq(f64::INFINITY, f64::INFINITY));
        assert!(!config.approx_eq(f64::INFINITY, f64::NEG_INFINITY));
        assert!(!config.approx_eq(f64::NAN, f64::NAN));
        assert!(!config.approx_eq(f64::MAX, f64::INFINITY));
    }
}
