//! Error taxonomy for prime-field arithmetic.

use thiserror::Error;

/// Failures raised by checked field operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FieldError {
    /// The two operands live in fields with different moduli.
    #[error("these elements belong to different fields (modulus {left} vs {right})")]
    MismatchedField {
        /// Modulus of the left-hand operand.
        left: u64,
        /// Modulus of the right-hand operand.
        right: u64,
    },
    /// Attempted to divide by, or invert, the zero element.
    #[error("division by zero in field of modulus {modulus}")]
    DivisionByZero {
        /// Modulus of the field in which the inversion was attempted.
        modulus: u64,
    },
    /// The modulus is smaller than 2 or not prime.
    #[error("invalid modulus {modulus}: must be a prime >= 2")]
    InvalidModulus {
        /// The rejected modulus.
        modulus: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_message_names_both_fields() {
        let err = FieldError::MismatchedField { left: 7, right: 11 };
        let msg = err.to_string();
        assert!(msg.contains("different fields"));
        assert!(msg.contains('7') && msg.contains("11"));
    }

    #[test]
    fn test_division_by_zero_message() {
        let err = FieldError::DivisionByZero { modulus: 13 };
        assert_eq!(err.to_string(), "division by zero in field of modulus 13");
    }
}
