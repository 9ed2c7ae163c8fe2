//! Composable random variables.
//!
//! A [`RandomVariable`] is an immutable expression tree. Leaves wrap a
//! validated [`Distribution`] or a constant; internal nodes hold an operator
//! and their operands. Arithmetic and lifted functions build new nodes without
//! sampling; an outcome is produced only when requested, by evaluating the
//! tree from the leaves up.
//!
//! ## Independent resampling
//!
//! Evaluation is never memoised. Each call to `outcome` samples every leaf
//! it reaches afresh, and a variable that appears twice in one expression is
//! sampled twice: `x - x` is not identically zero.
//!
//! ## Example
//!
//! ```
//! use random_variable::{Generator, RandomVariable, UnaryFn};
//!
//! let x = RandomVariable::normal(0.0, 1.0).unwrap();
//! let y = RandomVariable::exponential(2.0).unwrap();
//! let z = (&x * 3.0 + &y).apply(UnaryFn::Exp);
//!
//! let mut rng = Generator::from_seed(42);
//! let samples = z.outcomes_with(1000, &mut rng).unwrap();
//! assert_eq!(samples.len(), 1000);
//! assert!(samples.min().unwrap() > 0.0);
//! ```

mod lift;
mod ops;
mod parallel;

use std::fmt;
use std::sync::Arc;

pub use lift::{lift, UnaryFn};
pub use ops::BinaryOp;

use crate::config::SamplingConfig;
use crate::distributions::{
    Bernoulli, Beta, Binomial, ChiSquared, ContinuousUniform, DiscreteUniform, Distribution,
    DistributionKind, Exponential, Normal, Pareto, Poisson, Rademacher, Rayleigh, F,
};
use crate::error::{RandomVariableError, Result};
use crate::generator::{with_global_generator, Generator};
use crate::stats::Samples;

/// Scalar function wrapped by [`RandomVariable::map`].
type MapFn = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

enum Node {
    Leaf(Distribution),
    Constant(f64),
    Binary {
        op: BinaryOp,
        lhs: Operand,
        rhs: Operand,
    },
    Unary {
        func: UnaryFn,
        arg: RandomVariable,
    },
    Map {
        func: MapFn,
        arg: RandomVariable,
    },
}

/// Either a plain number or a random variable.
///
/// Used wherever an operation accepts both, e.g. the right-hand side of an
/// operator or the argument of [`lift`].
#[derive(Clone, Debug)]
pub enum Operand {
    /// A constant.
    Scalar(f64),
    /// A random variable, sampled on every evaluation.
    Variable(RandomVariable),
}

impl Operand {
    /// Returns the constant, if this is a scalar.
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Operand::Scalar(x) => Some(*x),
            Operand::Variable(_) => None,
        }
    }

    /// Returns the random variable, if this is one.
    pub fn as_variable(&self) -> Option<&RandomVariable> {
        match self {
            Operand::Scalar(_) => None,
            Operand::Variable(rv) => Some(rv),
        }
    }

    fn eval(&self, rng: &mut Generator) -> Result<f64> {
        match self {
            Operand::Scalar(x) => Ok(*x),
            Operand::Variable(rv) => rv.eval(rng),
        }
    }
}

impl From<f64> for Operand {
    fn from(x: f64) -> Self {
        Operand::Scalar(x)
    }
}

impl From<i32> for Operand {
    fn from(x: i32) -> Self {
        Operand::Scalar(f64::from(x))
    }
}

impl From<RandomVariable> for Operand {
    fn from(rv: RandomVariable) -> Self {
        Operand::Variable(rv)
    }
}

impl From<&RandomVariable> for Operand {
    fn from(rv: &RandomVariable) -> Self {
        Operand::Variable(rv.clone())
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Scalar(x) => write!(f, "{}", x),
            Operand::Variable(rv) => write!(f, "{}", rv),
        }
    }
}

/// A random variable: a distribution or an expression over other random
/// variables.
///
/// Cloning is cheap and shares the underlying expression tree.
#[derive(Clone)]
pub struct RandomVariable {
    node: Arc<Node>,
}

impl RandomVariable {
    /// Wraps a distribution as a leaf random variable.
    pub fn new(distribution: impl Into<Distribution>) -> Self {
        Self {
            node: Arc::new(Node::Leaf(distribution.into())),
        }
    }

    /// Builds a leaf from a family and positional parameters.
    ///
    /// # Errors
    ///
    /// `Arity` or `InvalidParameter`, see [`Distribution::from_params`].
    pub fn from_params(kind: DistributionKind, params: &[f64]) -> Result<Self> {
        Distribution::from_params(kind, params).map(Self::new)
    }

    /// Bernoulli(`p`) leaf.
    pub fn bernoulli(p: f64) -> Result<Self> {
        Bernoulli::new(p).map(Self::new)
    }

    /// Beta(`alpha`, `beta`) leaf.
    pub fn beta(alpha: f64, beta: f64) -> Result<Self> {
        Beta::new(alpha, beta).map(Self::new)
    }

    /// Binomial(`n`, `p`) leaf.
    pub fn binomial(n: u64, p: f64) -> Result<Self> {
        Binomial::new(n, p).map(Self::new)
    }

    /// ChiSquared(`k`) leaf.
    pub fn chi_squared(k: u64) -> Result<Self> {
        ChiSquared::new(k).map(Self::new)
    }

    /// ContinuousUniform(`a`, `b`) leaf.
    pub fn continuous_uniform(a: f64, b: f64) -> Result<Self> {
        ContinuousUniform::new(a, b).map(Self::new)
    }

    /// DiscreteUniform(`a`, `b`) leaf.
    pub fn discrete_uniform(a: i64, b: i64) -> Result<Self> {
        DiscreteUniform::new(a, b).map(Self::new)
    }

    /// Exponential(`mean`) leaf.
    pub fn exponential(mean: f64) -> Result<Self> {
        Exponential::new(mean).map(Self::new)
    }

    /// F(`d1`, `d2`) leaf.
    pub fn f(d1: f64, d2: f64) -> Result<Self> {
        F::new(d1, d2).map(Self::new)
    }

    /// Normal(`mu`, `sigma`) leaf.
    pub fn normal(mu: f64, sigma: f64) -> Result<Self> {
        Normal::new(mu, sigma).map(Self::new)
    }

    /// Pareto(`scale`, `shape`) leaf.
    pub fn pareto(scale: f64, shape: f64) -> Result<Self> {
        Pareto::new(scale, shape).map(Self::new)
    }

    /// Poisson(`lambda`) leaf.
    pub fn poisson(lambda: f64) -> Result<Self> {
        Poisson::new(lambda).map(Self::new)
    }

    /// Rademacher leaf.
    pub fn rademacher() -> Self {
        Self::new(Rademacher::new())
    }

    /// Rayleigh(`sigma`) leaf.
    pub fn rayleigh(sigma: f64) -> Result<Self> {
        Rayleigh::new(sigma).map(Self::new)
    }

    /// A degenerate variable whose every outcome is `value`. Draws nothing
    /// from the generator.
    ///
    /// # Examples
    /// ```
    /// use random_variable::{Generator, RandomVariable};
    ///
    /// let c = RandomVariable::constant(2.5);
    /// let x = RandomVariable::normal(0.0, 1.0).unwrap();
    /// let mut rng = Generator::from_seed(1);
    /// assert_eq!(c.outcome_with(&mut rng).unwrap(), 2.5);
    ///
    /// // the same draws as `&x * 2.5`
    /// let z = &x * &c;
    /// let mut a = Generator::from_seed(9);
    /// let mut b = Generator::from_seed(9);
    /// assert_eq!(z.outcome_with(&mut a), (&x * 2.5).outcome_with(&mut b));
    /// ```
    pub fn constant(value: f64) -> Self {
        Self {
            node: Arc::new(Node::Constant(value)),
        }
    }

    pub(crate) fn binary(op: BinaryOp, lhs: Operand, rhs: Operand) -> Self {
        Self {
            node: Arc::new(Node::Binary { op, lhs, rhs }),
        }
    }

    /// Lifts `func` onto this variable: each outcome is `func(outcome)`.
    pub fn apply(&self, func: UnaryFn) -> RandomVariable {
        Self {
            node: Arc::new(Node::Unary {
                func,
                arg: self.clone(),
            }),
        }
    }

    /// Lifts an arbitrary scalar function onto this variable.
    ///
    /// Unlike [`apply`](Self::apply), the result of `func` is not checked
    /// for domain errors.
    ///
    /// `func` runs while the generator is borrowed. If it samples another
    /// variable through [`outcome`](Self::outcome), that inner call returns
    /// `ReentrantAccess` when the outer evaluation uses the process-wide
    /// generator. Compose the variables with operators instead, so that
    /// every leaf draws from the same generator.
    pub fn map<G>(&self, func: G) -> RandomVariable
    where
        G: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self {
            node: Arc::new(Node::Map {
                func: Arc::new(func),
                arg: self.clone(),
            }),
        }
    }

    /// The wrapped distribution, if this is a leaf.
    pub fn distribution(&self) -> Option<&Distribution> {
        match &*self.node {
            Node::Leaf(d) => Some(d),
            _ => None,
        }
    }

    /// The value of a [`constant`](Self::constant) variable.
    pub fn as_constant(&self) -> Option<f64> {
        match &*self.node {
            Node::Constant(value) => Some(*value),
            _ => None,
        }
    }

    /// Whether this variable is an expression over other variables.
    pub fn is_composite(&self) -> bool {
        !matches!(&*self.node, Node::Leaf(_) | Node::Constant(_))
    }

    fn eval(&self, rng: &mut Generator) -> Result<f64> {
        match &*self.node {
            Node::Leaf(d) => Ok(d.sample(rng)),
            Node::Constant(value) => Ok(*value),
            Node::Binary { op, lhs, rhs } => {
                let a = lhs.eval(rng)?;
                let b = rhs.eval(rng)?;
                op.apply(a, b)
            }
            Node::Unary { func, arg } => func.apply(arg.eval(rng)?),
            Node::Map { func, arg } => Ok(func(arg.eval(rng)?)),
        }
    }

    /// Draws one outcome using `rng`.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` or `Domain` if the expression hits an arithmetic
    /// error for this draw. Leaves never fail.
    pub fn outcome_with(&self, rng: &mut Generator) -> Result<f64> {
        self.eval(rng)
    }

    /// Draws one outcome from the process-wide generator.
    ///
    /// # Errors
    ///
    /// As [`outcome_with`](Self::outcome_with), plus `ReentrantAccess` when
    /// called from code that already holds the process-wide generator, such
    /// as a [`map`](Self::map) closure being evaluated by another `outcome`.
    pub fn outcome(&self) -> Result<f64> {
        with_global_generator(|g| self.eval(g))?
    }

    /// Alias for [`outcome`](Self::outcome).
    pub fn sample(&self) -> Result<f64> {
        self.outcome()
    }

    /// Draws `n` independent outcomes using `rng`.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `n` is negative or does not fit in `usize`
    /// - the first arithmetic error raised by any evaluation
    pub fn outcomes_with<N>(&self, n: N, rng: &mut Generator) -> Result<Samples>
    where
        N: TryInto<usize> + Copy + fmt::Display,
    {
        let n = sample_count(n)?;
        self.collect_outcomes(n, rng)
    }

    /// Draws `n` independent outcomes from the process-wide generator.
    ///
    /// The generator lock is held for the whole batch, so the batch is a
    /// contiguous slice of the seeded stream.
    ///
    /// # Examples
    /// ```
    /// use random_variable::{set_seed, RandomVariable};
    ///
    /// let x = RandomVariable::poisson(3.0).unwrap();
    /// assert!(x.outcomes(-1).unwrap_err().is_invalid_argument());
    /// assert!(x.outcomes(0).unwrap().is_empty());
    ///
    /// set_seed(7).unwrap();
    /// let a = x.outcomes(10).unwrap();
    /// set_seed(7).unwrap();
    /// let b = x.outcomes(10).unwrap();
    /// assert_eq!(a, b);
    /// ```
    pub fn outcomes<N>(&self, n: N) -> Result<Samples>
    where
        N: TryInto<usize> + Copy + fmt::Display,
    {
        let n = sample_count(n)?;
        with_global_generator(|g| self.collect_outcomes(n, g))?
    }

    /// Alias for [`outcomes`](Self::outcomes).
    pub fn samples<N>(&self, n: N) -> Result<Samples>
    where
        N: TryInto<usize> + Copy + fmt::Display,
    {
        self.outcomes(n)
    }

    /// Draws `config.n_samples()` outcomes. A seeded configuration uses an
    /// isolated generator; otherwise the process-wide generator is used.
    pub fn sample_with_config(&self, config: &SamplingConfig) -> Result<Samples> {
        match config.seed() {
            Some(seed) => {
                let mut rng = Generator::from_seed(seed);
                self.collect_outcomes(config.n_samples(), &mut rng)
            }
            None => with_global_generator(|g| self.collect_outcomes(config.n_samples(), g))?,
        }
    }

    fn collect_outcomes(&self, n: usize, rng: &mut Generator) -> Result<Samples> {
        tracing::trace!(n, "sampling batch");
        (0..n).map(|_| self.eval(rng)).collect()
    }
}

fn sample_count<N>(n: N) -> Result<usize>
where
    N: TryInto<usize> + Copy + fmt::Display,
{
    n.try_into().map_err(|_| RandomVariableError::InvalidArgument {
        name: "n",
        value: n.to_string(),
        reason: "the number of outcomes cannot be negative",
    })
}

impl From<Distribution> for RandomVariable {
    fn from(d: Distribution) -> Self {
        Self::new(d)
    }
}

impl fmt::Display for RandomVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.node {
            Node::Leaf(d) => write!(f, "{}", d),
            Node::Constant(value) => write!(f, "{}", value),
            Node::Binary { op, lhs, rhs } => write!(f, "({} {} {})", lhs, op, rhs),
            Node::Unary { func, arg } => write!(f, "{}({})", func, arg),
            Node::Map { arg, .. } => write!(f, "map({})", arg),
        }
    }
}

impl fmt::Debug for RandomVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RandomVariable")
            .field(&format_args!("{}", self))
            .finish()
    }
}
