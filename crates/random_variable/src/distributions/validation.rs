//! Parameter validation shared by all distribution families.
//!
//! Every check rejects NaN and ±∞ first, then applies the domain rule.

use crate::error::{RandomVariableError, Result};

/// Largest integer magnitude an `f64` parameter can carry exactly (2^53).
pub(crate) const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Rejects NaN and ±∞.
pub(crate) fn finite(family: &'static str, parameter: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RandomVariableError::invalid_parameter(
            family,
            parameter,
            value,
            "must be finite",
        ))
    }
}

/// Requires a finite value strictly greater than zero.
pub(crate) fn positive(family: &'static str, parameter: &'static str, value: f64) -> Result<f64> {
    let value = finite(family, parameter, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(RandomVariableError::invalid_parameter(
            family,
            parameter,
            value,
            "must be positive",
        ))
    }
}

/// Requires a probability in the open interval (0, 1).
pub(crate) fn probability(
    family: &'static str,
    parameter: &'static str,
    value: f64,
) -> Result<f64> {
    let value = finite(family, parameter, value)?;
    if value > 0.0 && value < 1.0 {
        Ok(value)
    } else {
        Err(RandomVariableError::invalid_parameter(
            family,
            parameter,
            value,
            "must be a probability in (0, 1)",
        ))
    }
}

/// Requires `value <= max`, for families with a stability cap.
pub(crate) fn at_most(
    family: &'static str,
    parameter: &'static str,
    value: f64,
    max: f64,
    reason: &'static str,
) -> Result<f64> {
    if value <= max {
        Ok(value)
    } else {
        Err(RandomVariableError::invalid_parameter(
            family, parameter, value, reason,
        ))
    }
}

/// Requires `value >= min`, for families with a stability floor.
pub(crate) fn at_least(
    family: &'static str,
    parameter: &'static str,
    value: f64,
    min: f64,
    reason: &'static str,
) -> Result<f64> {
    if value >= min {
        Ok(value)
    } else {
        Err(RandomVariableError::invalid_parameter(
            family, parameter, value, reason,
        ))
    }
}

/// Converts a parameter to a non-negative integer.
pub(crate) fn count(family: &'static str, parameter: &'static str, value: f64) -> Result<u64> {
    let value = finite(family, parameter, value)?;
    if value < 0.0 || value > MAX_EXACT_INTEGER || value.fract() != 0.0 {
        return Err(RandomVariableError::invalid_parameter(
            family,
            parameter,
            value,
            "must be a non-negative whole number",
        ));
    }
    Ok(value as u64)
}

/// Converts a parameter to a signed integer.
pub(crate) fn integer(family: &'static str, parameter: &'static str, value: f64) -> Result<i64> {
    let value = finite(family, parameter, value)?;
    if value.abs() > MAX_EXACT_INTEGER || value.fract() != 0.0 {
        return Err(RandomVariableError::invalid_parameter(
            family,
            parameter,
            value,
            "must be a whole number",
        ));
    }
    Ok(value as i64)
}
