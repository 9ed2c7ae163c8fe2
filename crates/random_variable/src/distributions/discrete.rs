//! Discrete families: Bernoulli, Binomial, DiscreteUniform, Poisson and
//! Rademacher.
//!
//! Outcomes are integral values returned as `f64`.

use rand_distr::Distribution as _;

use super::validation;
use super::{DistributionKind, Family};
use crate::error::{RandomVariableError, Result};
use crate::generator::Generator;

/// Largest `n` the `rand_distr` inversion branch accepts; above it the
/// sampler falls back to BTPE, whose setup needs a mean of at least 10.
const INVERSION_N_MAX: u64 = i32::MAX as u64;

fn is_integral(x: f64) -> bool {
    x.is_finite() && x.fract() == 0.0
}

/// Bernoulli trial: 1 with probability `p`, otherwise 0.
///
/// # Examples
/// ```
/// use random_variable::{Bernoulli, Family, Generator};
///
/// let coin = Bernoulli::new(0.5).unwrap();
/// let mut rng = Generator::from_seed(1);
/// let x = coin.sample(&mut rng);
/// assert!(x == 0.0 || x == 1.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bernoulli {
    p: f64,
}

impl Bernoulli {
    /// Creates a Bernoulli distribution with success probability `p` in (0, 1).
    pub fn new(p: f64) -> Result<Self> {
        let p = validation::probability("Bernoulli", "p", p)?;
        Ok(Self { p })
    }

    /// Success probability.
    #[inline]
    pub fn p(&self) -> f64 {
        self.p
    }
}

impl Family for Bernoulli {
    const KIND: DistributionKind = DistributionKind::Bernoulli;

    #[inline]
    fn sample(&self, rng: &mut Generator) -> f64 {
        if rng.next_uniform() < self.p {
            1.0
        } else {
            0.0
        }
    }

    fn support_contains(&self, x: f64) -> bool {
        x == 0.0 || x == 1.0
    }

    fn params(&self) -> Vec<f64> {
        vec![self.p]
    }
}

/// Number of successes in `n` independent Bernoulli(`p`) trials.
#[derive(Clone, Copy, Debug)]
pub struct Binomial {
    n: u64,
    p: f64,
    sampler: rand_distr::Binomial,
}

impl Binomial {
    /// Largest accepted trial count (2^53), the largest count an `f64`
    /// outcome can represent exactly.
    pub const N_MAX: u64 = 1 << 53;

    /// Creates a Binomial distribution with `n` in [1, `N_MAX`] trials and
    /// success probability `p` in (0, 1).
    pub fn new(n: u64, p: f64) -> Result<Self> {
        if n == 0 {
            return Err(RandomVariableError::invalid_parameter(
                "Binomial",
                "n",
                n,
                "must be at least one trial",
            ));
        }
        if n > Self::N_MAX {
            return Err(RandomVariableError::invalid_parameter(
                "Binomial",
                "n",
                n,
                "exceeds n_max",
            ));
        }
        let p = validation::probability("Binomial", "p", p)?;
        let sampler = rand_distr::Binomial::new(n, p).map_err(|_| {
            RandomVariableError::invalid_parameter("Binomial", "p", p, "rejected by sampler")
        })?;
        Ok(Self { n, p, sampler })
    }

    /// Number of trials.
    #[inline]
    pub fn n(&self) -> u64 {
        self.n
    }

    /// Success probability per trial.
    #[inline]
    pub fn p(&self) -> f64 {
        self.p
    }

    /// Sequential inversion over the pmf, for very large `n` with a mean
    /// (or complementary mean) below 10.
    fn sample_by_inversion(&self, rng: &mut Generator) -> f64 {
        let flipped = self.p > 0.5;
        let p = if flipped { 1.0 - self.p } else { self.p };
        let n = self.n as f64;
        let odds = p / (1.0 - p);

        // P(X = 0) = (1 - p)^n
        let mut mass = (n * (-p).ln_1p()).exp();
        let mut u = rng.next_uniform();
        let mut k = 0.0;
        while u > mass && mass > 0.0 {
            u -= mass;
            mass *= (n - k) / (k + 1.0) * odds;
            k += 1.0;
        }
        if flipped {
            n - k
        } else {
            k
        }
    }
}

impl Family for Binomial {
    const KIND: DistributionKind = DistributionKind::Binomial;

    #[inline]
    fn sample(&self, rng: &mut Generator) -> f64 {
        if self.n > INVERSION_N_MAX && (self.n as f64) * self.p.min(1.0 - self.p) < 10.0 {
            return self.sample_by_inversion(rng);
        }
        self.sampler.sample(rng) as f64
    }

    fn support_contains(&self, x: f64) -> bool {
        is_integral(x) && x >= 0.0 && x <= self.n as f64
    }

    fn params(&self) -> Vec<f64> {
        vec![self.n as f64, self.p]
    }
}

/// Uniform integer on the closed interval `[a, b]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiscreteUniform {
    a: i64,
    b: i64,
}

impl DiscreteUniform {
    /// Creates a discrete uniform distribution; requires `a < b`.
    pub fn new(a: i64, b: i64) -> Result<Self> {
        if a >= b {
            return Err(RandomVariableError::invalid_parameter(
                "DiscreteUniform",
                "a",
                a,
                "must be lower than b",
            ));
        }
        Ok(Self { a, b })
    }

    /// Lower bound (inclusive).
    #[inline]
    pub fn a(&self) -> i64 {
        self.a
    }

    /// Upper bound (inclusive).
    #[inline]
    pub fn b(&self) -> i64 {
        self.b
    }
}

impl Family for DiscreteUniform {
    const KIND: DistributionKind = DistributionKind::DiscreteUniform;

    #[inline]
    fn sample(&self, rng: &mut Generator) -> f64 {
        rng.next_integer(self.a, self.b) as f64
    }

    fn support_contains(&self, x: f64) -> bool {
        is_integral(x) && x >= self.a as f64 && x <= self.b as f64
    }

    fn params(&self) -> Vec<f64> {
        vec![self.a as f64, self.b as f64]
    }
}

/// Poisson distribution with mean `lambda`, sampled with Knuth's
/// multiplication method.
///
/// `lambda` is capped at [`Poisson::LAMBDA_MAX`] so that `exp(-lambda)` stays
/// a normal `f64`; beyond it the product threshold underflows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Poisson {
    lambda: f64,
    /// exp(-lambda), the stopping threshold for the uniform product.
    threshold: f64,
}

impl Poisson {
    /// Largest accepted `lambda`.
    pub const LAMBDA_MAX: f64 = 700.0;

    /// Creates a Poisson distribution with mean `lambda` in (0, `LAMBDA_MAX`].
    ///
    /// # Examples
    /// ```
    /// use random_variable::Poisson;
    ///
    /// assert!(Poisson::new(0.0).is_err());
    /// assert!(Poisson::new(Poisson::LAMBDA_MAX * 2.0).is_err());
    /// assert!(Poisson::new(Poisson::LAMBDA_MAX).is_ok());
    /// ```
    pub fn new(lambda: f64) -> Result<Self> {
        let lambda = validation::positive("Poisson", "lambda", lambda)?;
        let lambda = validation::at_most(
            "Poisson",
            "lambda",
            lambda,
            Self::LAMBDA_MAX,
            "exceeds lambda_max",
        )?;
        Ok(Self {
            lambda,
            threshold: (-lambda).exp(),
        })
    }

    /// Mean of the distribution.
    #[inline]
    pub fn lambda(&self) -> f64 {
        self.lambda
    }
}

impl Family for Poisson {
    const KIND: DistributionKind = DistributionKind::Poisson;

    fn sample(&self, rng: &mut Generator) -> f64 {
        let mut k: u64 = 0;
        let mut product = rng.next_uniform();
        while product > self.threshold {
            k += 1;
            product *= rng.next_uniform();
        }
        k as f64
    }

    fn support_contains(&self, x: f64) -> bool {
        is_integral(x) && x >= 0.0
    }

    fn params(&self) -> Vec<f64> {
        vec![self.lambda]
    }
}

/// Rademacher distribution: -1 or +1 with equal probability.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rademacher;

impl Rademacher {
    /// Creates a Rademacher distribution; it takes no parameters.
    pub fn new() -> Self {
        Rademacher
    }
}

impl Family for Rademacher {
    const KIND: DistributionKind = DistributionKind::Rademacher;

    #[inline]
    fn sample(&self, rng: &mut Generator) -> f64 {
        if rng.next_uniform() < 0.5 {
            -1.0
        } else {
            1.0
        }
    }

    fn support_contains(&self, x: f64) -> bool {
        x == -1.0 || x == 1.0
    }

    fn params(&self) -> Vec<f64> {
        Vec::new()
    }
}
