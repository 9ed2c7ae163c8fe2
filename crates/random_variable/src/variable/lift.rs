//! Lifting scalar math functions onto random variables.
//!
//! [`lift`] dispatches on the operand: a scalar goes straight through the
//! plain function, a random variable is wrapped in a node that applies the
//! function to each future outcome. Ordinary `f64` math is left untouched.

use std::fmt;

use super::{Operand, RandomVariable};
use crate::error::{RandomVariableError, Result};
use crate::math::special;

/// Elementary functions that can be lifted onto a random variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnaryFn {
    /// Arc cosine
    Acos,
    /// Inverse hyperbolic cosine
    Acosh,
    /// Arc sine
    Asin,
    /// Inverse hyperbolic sine
    Asinh,
    /// Arc tangent
    Atan,
    /// Inverse hyperbolic tangent
    Atanh,
    /// Cube root
    Cbrt,
    /// Cosine
    Cos,
    /// Hyperbolic cosine
    Cosh,
    /// Error function
    Erf,
    /// Complementary error function, with relative error below 1.2e-7 out
    /// to the underflow point
    Erfc,
    /// Exponential
    Exp,
    /// Gamma function
    Gamma,
    /// Natural log of the absolute gamma function
    Lgamma,
    /// Natural logarithm
    Log,
    /// Base-10 logarithm
    Log10,
    /// Base-2 logarithm
    Log2,
    /// Sine
    Sin,
    /// Hyperbolic sine
    Sinh,
    /// Square root
    Sqrt,
    /// Tangent
    Tan,
    /// Hyperbolic tangent
    Tanh,
}

impl UnaryFn {
    /// Function name.
    pub fn name(&self) -> &'static str {
        match self {
            UnaryFn::Acos => "acos",
            UnaryFn::Acosh => "acosh",
            UnaryFn::Asin => "asin",
            UnaryFn::Asinh => "asinh",
            UnaryFn::Atan => "atan",
            UnaryFn::Atanh => "atanh",
            UnaryFn::Cbrt => "cbrt",
            UnaryFn::Cos => "cos",
            UnaryFn::Cosh => "cosh",
            UnaryFn::Erf => "erf",
            UnaryFn::Erfc => "erfc",
            UnaryFn::Exp => "exp",
            UnaryFn::Gamma => "gamma",
            UnaryFn::Lgamma => "lgamma",
            UnaryFn::Log => "log",
            UnaryFn::Log10 => "log10",
            UnaryFn::Log2 => "log2",
            UnaryFn::Sin => "sin",
            UnaryFn::Sinh => "sinh",
            UnaryFn::Sqrt => "sqrt",
            UnaryFn::Tan => "tan",
            UnaryFn::Tanh => "tanh",
        }
    }

    /// Evaluates the plain scalar function with IEEE semantics
    /// (out-of-domain arguments yield NaN).
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            UnaryFn::Acos => x.acos(),
            UnaryFn::Acosh => x.acosh(),
            UnaryFn::Asin => x.asin(),
            UnaryFn::Asinh => x.asinh(),
            UnaryFn::Atan => x.atan(),
            UnaryFn::Atanh => x.atanh(),
            UnaryFn::Cbrt => x.cbrt(),
            UnaryFn::Cos => x.cos(),
            UnaryFn::Cosh => x.cosh(),
            UnaryFn::Erf => special::erf(x),
            UnaryFn::Erfc => special::erfc(x),
            UnaryFn::Exp => x.exp(),
            UnaryFn::Gamma => special::gamma(x),
            UnaryFn::Lgamma => special::ln_gamma(x),
            UnaryFn::Log => x.ln(),
            UnaryFn::Log10 => x.log10(),
            UnaryFn::Log2 => x.log2(),
            UnaryFn::Sin => x.sin(),
            UnaryFn::Sinh => x.sinh(),
            UnaryFn::Sqrt => x.sqrt(),
            UnaryFn::Tan => x.tan(),
            UnaryFn::Tanh => x.tanh(),
        }
    }

    /// Evaluates the function, reporting out-of-domain arguments.
    ///
    /// # Errors
    ///
    /// `Domain` when a non-NaN argument produces NaN (e.g. `log(-1)`).
    pub fn apply(&self, x: f64) -> Result<f64> {
        let y = self.eval(x);
        if y.is_nan() && !x.is_nan() {
            return Err(RandomVariableError::Domain {
                function: self.name(),
                value: x,
            });
        }
        Ok(y)
    }
}

impl fmt::Display for UnaryFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Applies `func` to an operand.
///
/// Scalars are evaluated immediately; random variables produce a new
/// random variable equivalent to `func(outcome)`.
///
/// # Errors
///
/// `Domain` if a scalar argument lies outside the function's domain.
///
/// # Examples
/// ```
/// use random_variable::{lift, RandomVariable, UnaryFn};
///
/// // Scalars pass straight through
/// let y = lift(UnaryFn::Sqrt, 16.0).unwrap();
/// assert_eq!(y.as_scalar(), Some(4.0));
///
/// // Random variables are wrapped lazily
/// let x = RandomVariable::exponential(1.0).unwrap();
/// let y = lift(UnaryFn::Sqrt, &x).unwrap();
/// assert!(y.as_variable().is_some());
/// ```
pub fn lift(func: UnaryFn, arg: impl Into<Operand>) -> Result<Operand> {
    match arg.into() {
        Operand::Scalar(x) => Ok(Operand::Scalar(func.apply(x)?)),
        Operand::Variable(rv) => Ok(Operand::Variable(rv.apply(func))),
    }
}
