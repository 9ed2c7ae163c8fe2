//! Arithmetic composition of random variables.
//!
//! Operators never sample: `x + y` builds a new node that evaluates both
//! operands and adds the results each time an outcome is requested.
//! Implementations are provided for owned and borrowed `RandomVariable`
//! operands, and for `f64` and `i32` scalars on either side.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use super::{Operand, RandomVariable};
use crate::error::{RandomVariableError, Result};

/// Binary operator stored in a composed node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `a + b`
    Add,
    /// `a - b`
    Sub,
    /// `a * b`
    Mul,
    /// `a / b`; fails on a zero divisor
    Div,
    /// Floored modulo; the result takes the sign of the divisor. Fails on a
    /// zero divisor.
    Rem,
    /// `a` raised to the power `b`
    Pow,
}

impl BinaryOp {
    /// Operator symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
            BinaryOp::Pow => "**",
        }
    }

    /// Combines two evaluated operands.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` when `Div` or `Rem` meets a zero divisor.
    ///
    /// # Examples
    /// ```
    /// use random_variable::BinaryOp;
    ///
    /// assert_eq!(BinaryOp::Rem.apply(-5.0, 3.0), Ok(1.0));
    /// assert_eq!(BinaryOp::Rem.apply(5.0, -3.0), Ok(-1.0));
    /// assert!(BinaryOp::Div.apply(1.0, 0.0).is_err());
    /// ```
    pub fn apply(&self, a: f64, b: f64) -> Result<f64> {
        match self {
            BinaryOp::Add => Ok(a + b),
            BinaryOp::Sub => Ok(a - b),
            BinaryOp::Mul => Ok(a * b),
            BinaryOp::Div => {
                if b == 0.0 {
                    return Err(RandomVariableError::DivisionByZero { op: self.symbol() });
                }
                Ok(a / b)
            }
            BinaryOp::Rem => {
                if b == 0.0 {
                    return Err(RandomVariableError::DivisionByZero { op: self.symbol() });
                }
                let r = a % b;
                if r != 0.0 && (r < 0.0) != (b < 0.0) {
                    Ok(r + b)
                } else {
                    Ok(r)
                }
            }
            BinaryOp::Pow => Ok(a.powf(b)),
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl RandomVariable {
    /// `self` raised to the power `exponent`.
    ///
    /// # Examples
    /// ```
    /// use random_variable::{Generator, RandomVariable};
    ///
    /// let x = RandomVariable::continuous_uniform(1.0, 2.0).unwrap();
    /// let squared = x.pow(2.0);
    /// let mut rng = Generator::from_seed(3);
    /// let v = squared.outcome_with(&mut rng).unwrap();
    /// assert!((1.0..=4.0).contains(&v));
    /// ```
    pub fn pow(&self, exponent: impl Into<Operand>) -> RandomVariable {
        RandomVariable::binary(BinaryOp::Pow, self.clone().into(), exponent.into())
    }

    /// `base` raised to the power `self`.
    pub fn rpow(&self, base: f64) -> RandomVariable {
        RandomVariable::binary(BinaryOp::Pow, Operand::Scalar(base), self.clone().into())
    }
}

macro_rules! impl_binary_ops {
    ($($trait:ident, $method:ident, $op:expr;)*) => {
        $(
            impl<R: Into<Operand>> $trait<R> for RandomVariable {
                type Output = RandomVariable;

                fn $method(self, rhs: R) -> RandomVariable {
                    RandomVariable::binary($op, Operand::Variable(self), rhs.into())
                }
            }

            impl<R: Into<Operand>> $trait<R> for &RandomVariable {
                type Output = RandomVariable;

                fn $method(self, rhs: R) -> RandomVariable {
                    RandomVariable::binary($op, Operand::Variable(self.clone()), rhs.into())
                }
            }

            impl $trait<RandomVariable> for f64 {
                type Output = RandomVariable;

                fn $method(self, rhs: RandomVariable) -> RandomVariable {
                    RandomVariable::binary($op, Operand::Scalar(self), Operand::Variable(rhs))
                }
            }

            impl $trait<&RandomVariable> for f64 {
                type Output = RandomVariable;

                fn $method(self, rhs: &RandomVariable) -> RandomVariable {
                    RandomVariable::binary($op, Operand::Scalar(self), Operand::Variable(rhs.clone()))
                }
            }

            impl $trait<RandomVariable> for i32 {
                type Output = RandomVariable;

                fn $method(self, rhs: RandomVariable) -> RandomVariable {
                    f64::from(self).$method(rhs)
                }
            }

            impl $trait<&RandomVariable> for i32 {
                type Output = RandomVariable;

                fn $method(self, rhs: &RandomVariable) -> RandomVariable {
                    f64::from(self).$method(rhs)
                }
            }
        )*
    };
}

impl_binary_ops! {
    Add, add, BinaryOp::Add;
    Sub, sub, BinaryOp::Sub;
    Mul, mul, BinaryOp::Mul;
    Div, div, BinaryOp::Div;
    Rem, rem, BinaryOp::Rem;
}

impl Neg for RandomVariable {
    type Output = RandomVariable;

    fn neg(self) -> RandomVariable {
        RandomVariable::binary(BinaryOp::Mul, Operand::Variable(self), Operand::Scalar(-1.0))
    }
}

impl Neg for &RandomVariable {
    type Output = RandomVariable;

    fn neg(self) -> RandomVariable {
        -self.clone()
    }
}
