//! Error types for random variable construction and evaluation.
//!
//! This module provides:
//! - `RandomVariableError`: every failure the crate can report
//! - `Result`: crate-wide result alias
//!
//! Validation failures are raised at construction time. Only arithmetic
//! failures (`DivisionByZero`, `Domain`) and nested use of the process-wide
//! generator (`ReentrantAccess`) can appear while evaluating an outcome.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, RandomVariableError>;

/// Categorised random variable errors.
///
/// Each variant carries the family/parameter that failed and the value that
/// was supplied, so the caller can correct the input without inspecting
/// internals.
///
/// # Examples
/// ```
/// use random_variable::{Bernoulli, RandomVariableError};
///
/// let err = Bernoulli::new(1.5).unwrap_err();
/// assert!(err.is_invalid_parameter());
/// assert!(err.to_string().contains("Bernoulli"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RandomVariableError {
    /// A distribution or generator parameter is non-finite or out of domain.
    #[error("Invalid parameter '{parameter}' for {family}: {value} ({reason})")]
    InvalidParameter {
        /// Distribution family (or `"Generator"` for seeds)
        family: &'static str,
        /// Parameter name
        parameter: &'static str,
        /// Supplied value, formatted
        value: String,
        /// Violated constraint
        reason: &'static str,
    },

    /// Wrong number of parameters for a family.
    #[error("Wrong number of parameters for {family}: expected {expected}, got {supplied}")]
    Arity {
        /// Distribution family
        family: &'static str,
        /// Number of parameters the family takes
        expected: usize,
        /// Number of parameters supplied
        supplied: usize,
    },

    /// An argument to a sampling call is out of range (e.g. a negative count).
    #[error("Invalid argument '{name}': {value} ({reason})")]
    InvalidArgument {
        /// Argument name
        name: &'static str,
        /// Supplied value, formatted
        value: String,
        /// Violated constraint
        reason: &'static str,
    },

    /// Division or modulo by an outcome that evaluated to zero.
    #[error("Division by zero in '{op}' while evaluating outcome")]
    DivisionByZero {
        /// Operator symbol
        op: &'static str,
    },

    /// A lifted function was evaluated outside its domain.
    #[error("Numerical argument {value} is out of domain for '{function}'")]
    Domain {
        /// Function name
        function: &'static str,
        /// Argument that was out of domain
        value: f64,
    },

    /// The process-wide generator was requested by a thread that already
    /// holds it, e.g. a `map` closure calling `outcome()`.
    #[error("Process-wide generator is already in use on this thread; sample with the supplied generator instead")]
    ReentrantAccess,

    /// Invalid sampling configuration.
    #[error("Invalid configuration '{name}': {value}")]
    InvalidConfig {
        /// Configuration field
        name: &'static str,
        /// Description of the invalid value
        value: String,
    },
}

impl RandomVariableError {
    /// Returns `true` for construction-time parameter errors, including arity.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(
            self,
            RandomVariableError::InvalidParameter { .. } | RandomVariableError::Arity { .. }
        )
    }

    /// Returns `true` for invalid call arguments.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, RandomVariableError::InvalidArgument { .. })
    }

    pub(crate) fn invalid_parameter(
        family: &'static str,
        parameter: &'static str,
        value: impl ToString,
        reason: &'static str,
    ) -> Self {
        tracing::debug!(family, parameter, reason, "rejected parameter");
        RandomVariableError::InvalidParameter {
            family,
            parameter,
            value: value.to_string(),
            reason,
        }
    }
}
