// src/numerics/error.rs
// Error type shared by the checked vector operations and the tolerance config.

/// Errors produced by the fallible numerics operations.
///
/// The unchecked operations never return this type; they either panic on a
/// dimension mismatch or let IEEE-754 produce infinities and NaNs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MathError {
    #[error("{operation}: dimension mismatch, expected {expected} components, found {found}")]
    DimensionMismatch {
        operation: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Invalid tolerance: {name} must be a non-negative number, got {value}")]
    InvalidTolerance { name: &'static str, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_display() {
        let err = MathError::DimensionMismatch {
            operation: "Vector::add",
            expected: 3,
            found: 2,
        };
        assert_eq!(
            err.to_string(),
            "Vector::add: dimension mismatch, expected 3 components, found 2"
        );
    }

    #[test]
    fn test_invalid_tolerance_display() {
        let err = MathError::InvalidTolerance {
            name: "absolute",
            value: -1.0,
        };
        assert!(err.to_string().contains("absolute must be a non-negative number"));
    }
}
