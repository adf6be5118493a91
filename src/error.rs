//! Error types for the payroll services.
//!
//! Declined operations (duplicate username, login mismatch, a write
//! that matched no row) are not errors: they are signaled with a
//! `false` or `None` result. The variants here cover the two cases
//! that must reach the caller as typed failures: rejected input and
//! faults in the storage layer.

use thiserror::Error;

/// The error type shared by the calculation engine, the storage
/// contracts and the service facades.
#[derive(Debug, Error)]
pub enum PayrollError {
    /// A caller-supplied compensation amount was rejected.
    #[error("Invalid compensation input '{field}': {message}")]
    InvalidCompensation {
        /// The rejected field (e.g. `base_salary`).
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// The derived gross pay came out negative. Unreachable when the
    /// individual inputs pass validation; kept as a defensive check.
    #[error("Calculated gross pay is negative: {gross_pay}")]
    NegativeGrossPay {
        /// The offending derived value.
        gross_pay: f64,
    },

    /// The underlying store failed or was unavailable. The core
    /// performs no retry; retries are the caller's responsibility.
    #[error("Storage error: {message}")]
    Storage {
        /// A description of the fault.
        message: String,
    },
}

/// A type alias for Results that return [`PayrollError`].
pub type PayrollResult<T> = Result<T, PayrollError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_compensation_displays_field_and_message() {
        let error = PayrollError::InvalidCompensation {
            field: "base_salary".to_string(),
            message: "must be non-negative, got -100".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid compensation input 'base_salary': must be non-negative, got -100"
        );
    }

    #[test]
    fn test_negative_gross_pay_displays_value() {
        let error = PayrollError::NegativeGrossPay { gross_pay: -50.0 };
        assert_eq!(error.to_string(), "Calculated gross pay is negative: -50");
    }

    #[test]
    fn test_storage_error_displays_message() {
        let error = PayrollError::Storage {
            message: "connection lost".to_string(),
        };
        assert_eq!(error.to_string(), "Storage error: connection lost");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PayrollError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn rejects() -> PayrollResult<()> {
            Err(PayrollError::NegativeGrossPay { gross_pay: -1.0 })
        }

        fn propagates() -> PayrollResult<()> {
            rejects()?;
            Ok(())
        }

        assert!(propagates().is_err());
    }
}
