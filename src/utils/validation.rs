use crate::{Error, Result};

/// Require a finite, strictly positive parameter.
///
/// # Example
/// ```
/// use beat_eval::utils::check_positive;
///
/// assert!(check_positive("sigma", 0.04).is_ok());
/// assert!(check_positive("sigma", 0.0).is_err());
/// assert!(check_positive("sigma", f64::NAN).is_err());
/// ```
pub fn check_positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidParameter {
            name,
            value: value.to_string(),
            reason: "must be finite and greater than zero",
        })
    }
}

/// Require a finite, non-negative parameter.
pub fn check_non_negative(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidParameter {
            name,
            value: value.to_string(),
            reason: "must be finite and non-negative",
        })
    }
}

/// Require an integer parameter of at least `min`.
pub fn check_at_least(name: &'static str, value: usize, min: usize) -> Result<()> {
    if value >= min {
        Ok(())
    } else {
        Err(Error::InvalidParameter {
            name,
            value: value.to_string(),
            reason: "is below the minimum allowed value",
        })
    }
}
