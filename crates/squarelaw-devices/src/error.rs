//! Error types for squarelaw-devices.

use thiserror::Error;

/// Errors raised while evaluating the device models.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// An input is NaN, infinite or outside its physical range.
    #[error("invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// A quantity used as a divisor is zero.
    #[error("division by zero: {0} must be non-zero")]
    DivisionByZero(&'static str),
}

/// Result type for device model evaluation.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether this error reports a non-physical input value.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Error::InvalidParameter { .. })
    }
}

/// Reject NaN and infinities.
pub(crate) fn require_finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::InvalidParameter {
            name,
            value,
            reason: "must be finite",
        })
    }
}

/// Reject negative and non-finite values. Zero is accepted.
pub(crate) fn require_non_negative(name: &'static str, value: f64) -> Result<f64> {
    require_finite(name, value)?;
    if value < 0.0 {
        return Err(Error::InvalidParameter {
            name,
            value,
            reason: "must not be negative",
        });
    }
    Ok(value)
}

/// Accept only a finite, non-negative, non-zero divisor.
///
/// Negative values are reported as invalid before zero is reported as a
/// division by zero.
pub(crate) fn require_divisor(name: &'static str, value: f64) -> Result<f64> {
    require_non_negative(name, value)?;
    if value == 0.0 {
        return Err(Error::DivisionByZero(name));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_check() {
        assert_eq!(require_finite("x", -2.5), Ok(-2.5));
        assert!(require_finite("x", f64::NAN).unwrap_err().is_invalid_parameter());
        assert!(
            require_finite("x", f64::INFINITY)
                .unwrap_err()
                .is_invalid_parameter()
        );
    }

    #[test]
    fn test_non_negative_accepts_zero() {
        assert_eq!(require_non_negative("x", 0.0), Ok(0.0));
        let err = require_non_negative("mobility", -1.0).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidParameter {
                name: "mobility",
                value: -1.0,
                reason: "must not be negative",
            }
        );
    }

    #[test]
    fn test_divisor_zero_vs_negative() {
        assert_eq!(
            require_divisor("oxide_thickness", 0.0),
            Err(Error::DivisionByZero("oxide_thickness"))
        );
        assert!(
            require_divisor("oxide_thickness", -5e-9)
                .unwrap_err()
                .is_invalid_parameter()
        );
        assert_eq!(require_divisor("oxide_thickness", 5e-9), Ok(5e-9));
    }

    #[test]
    fn test_messages() {
        let err = Error::DivisionByZero("channel_length");
        assert_eq!(
            err.to_string(),
            "division by zero: channel_length must be non-zero"
        );
        let err = Error::InvalidParameter {
            name: "doping",
            value: 0.0,
            reason: "must be positive",
        };
        assert_eq!(
            err.to_string(),
            "invalid parameter doping = 0: must be positive"
        );
    }
}
