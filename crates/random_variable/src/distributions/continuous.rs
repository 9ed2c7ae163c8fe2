//! Continuous families: Beta, ChiSquared, ContinuousUniform, Exponential, F,
//! Normal, Pareto and Rayleigh.

use rand_distr::Distribution as _;

use super::validation;
use super::{DistributionKind, Family};
use crate::error::{RandomVariableError, Result};
use crate::generator::Generator;

/// Draws `ln X` for `X ~ Gamma(shape, 1)`.
///
/// Uses `Gamma(shape) = Gamma(shape + 1) * U^(1 / shape)` and stays in log
/// space, so shapes far below one never underflow to a zero draw.
#[derive(Clone, Copy, Debug)]
struct LogGamma {
    boosted: rand_distr::Gamma<f64>,
    inv_shape: f64,
}

impl LogGamma {
    fn new(family: &'static str, parameter: &'static str, shape: f64) -> Result<Self> {
        let boosted = rand_distr::Gamma::new(shape + 1.0, 1.0).map_err(|_| {
            RandomVariableError::invalid_parameter(
                family,
                parameter,
                shape,
                "rejected by sampler",
            )
        })?;
        Ok(Self {
            boosted,
            inv_shape: 1.0 / shape,
        })
    }

    fn sample(&self, rng: &mut Generator) -> f64 {
        let g = self.boosted.sample(rng).max(f64::MIN_POSITIVE).ln();
        // 1 - u lies in [2^-53, 1], so its log is finite
        g + (1.0 - rng.next_uniform()).ln() * self.inv_shape
    }
}

/// Beta distribution on [0, 1] with shape parameters `alpha` and `beta`.
///
/// Sampled as `X / (X + Y)` for independent gamma draws, evaluated as
/// `1 / (1 + exp(ln Y - ln X))` so that tiny shapes give 0 or 1 instead of
/// `0 / 0`.
#[derive(Clone, Copy, Debug)]
pub struct Beta {
    alpha: f64,
    beta: f64,
    x: LogGamma,
    y: LogGamma,
}

impl Beta {
    /// Smallest accepted shape. Below it `ln(u) / shape` overflows and both
    /// log draws can become -∞ at once.
    pub const SHAPE_MIN: f64 = 1e-100;

    /// Creates a Beta distribution; both shapes must be at least `SHAPE_MIN`.
    pub fn new(alpha: f64, beta: f64) -> Result<Self> {
        let alpha = validation::positive("Beta", "alpha", alpha)?;
        let beta = validation::positive("Beta", "beta", beta)?;
        let alpha =
            validation::at_least("Beta", "alpha", alpha, Self::SHAPE_MIN, "below shape_min")?;
        let beta = validation::at_least("Beta", "beta", beta, Self::SHAPE_MIN, "below shape_min")?;
        Ok(Self {
            alpha,
            beta,
            x: LogGamma::new("Beta", "alpha", alpha)?,
            y: LogGamma::new("Beta", "beta", beta)?,
        })
    }

    /// First shape parameter.
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Second shape parameter.
    #[inline]
    pub fn beta(&self) -> f64 {
        self.beta
    }
}

impl Family for Beta {
    const KIND: DistributionKind = DistributionKind::Beta;

    #[inline]
    fn sample(&self, rng: &mut Generator) -> f64 {
        let ln_x = self.x.sample(rng);
        let ln_y = self.y.sample(rng);
        1.0 / (1.0 + (ln_y - ln_x).exp())
    }

    fn support_contains(&self, x: f64) -> bool {
        (0.0..=1.0).contains(&x)
    }

    fn params(&self) -> Vec<f64> {
        vec![self.alpha, self.beta]
    }
}

/// Chi-squared distribution with `k` degrees of freedom.
#[derive(Clone, Copy, Debug)]
pub struct ChiSquared {
    k: u64,
    sampler: rand_distr::ChiSquared<f64>,
}

impl ChiSquared {
    /// Creates a chi-squared distribution; requires `k >= 1`.
    pub fn new(k: u64) -> Result<Self> {
        if k == 0 {
            return Err(RandomVariableError::invalid_parameter(
                "ChiSquared",
                "k",
                k,
                "must be positive",
            ));
        }
        let sampler = rand_distr::ChiSquared::new(k as f64).map_err(|_| {
            RandomVariableError::invalid_parameter("ChiSquared", "k", k, "rejected by sampler")
        })?;
        Ok(Self { k, sampler })
    }

    /// Degrees of freedom.
    #[inline]
    pub fn k(&self) -> u64 {
        self.k
    }
}

impl Family for ChiSquared {
    const KIND: DistributionKind = DistributionKind::ChiSquared;

    #[inline]
    fn sample(&self, rng: &mut Generator) -> f64 {
        self.sampler.sample(rng)
    }

    fn support_contains(&self, x: f64) -> bool {
        x >= 0.0 && x.is_finite()
    }

    fn params(&self) -> Vec<f64> {
        vec![self.k as f64]
    }
}

/// Uniform distribution on the interval `[a, b)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContinuousUniform {
    a: f64,
    b: f64,
}

impl ContinuousUniform {
    /// Creates a continuous uniform distribution; requires `a < b` and a
    /// finite width `b - a`.
    pub fn new(a: f64, b: f64) -> Result<Self> {
        let a = validation::finite("ContinuousUniform", "a", a)?;
        let b = validation::finite("ContinuousUniform", "b", b)?;
        if a >= b {
            return Err(RandomVariableError::invalid_parameter(
                "ContinuousUniform",
                "a",
                a,
                "must be lower than b",
            ));
        }
        if !(b - a).is_finite() {
            return Err(RandomVariableError::invalid_parameter(
                "ContinuousUniform",
                "b",
                b,
                "interval width overflows",
            ));
        }
        Ok(Self { a, b })
    }

    /// Lower bound.
    #[inline]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Upper bound.
    #[inline]
    pub fn b(&self) -> f64 {
        self.b
    }
}

impl Family for ContinuousUniform {
    const KIND: DistributionKind = DistributionKind::ContinuousUniform;

    #[inline]
    fn sample(&self, rng: &mut Generator) -> f64 {
        // rounding in a + (b - a)u can land on b, or one ulp past it
        (self.a + (self.b - self.a) * rng.next_uniform()).min(self.b)
    }

    fn support_contains(&self, x: f64) -> bool {
        x >= self.a && x <= self.b
    }

    fn params(&self) -> Vec<f64> {
        vec![self.a, self.b]
    }
}

/// Exponential distribution parameterised by its mean, sampled by inverse
/// transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Exponential {
    mean: f64,
}

impl Exponential {
    /// Largest accepted mean; `-ln(1 - u)` is at most ~36.7, so outcomes
    /// stay finite below this cap.
    pub const MEAN_MAX: f64 = 1e300;

    /// Creates an exponential distribution with mean in (0, `MEAN_MAX`].
    pub fn new(mean: f64) -> Result<Self> {
        let mean = validation::positive("Exponential", "mean", mean)?;
        let mean = validation::at_most(
            "Exponential",
            "mean",
            mean,
            Self::MEAN_MAX,
            "exceeds mean_max",
        )?;
        Ok(Self { mean })
    }

    /// Mean of the distribution.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }
}

impl Family for Exponential {
    const KIND: DistributionKind = DistributionKind::Exponential;

    #[inline]
    fn sample(&self, rng: &mut Generator) -> f64 {
        -self.mean * (1.0 - rng.next_uniform()).ln()
    }

    fn support_contains(&self, x: f64) -> bool {
        x >= 0.0 && x.is_finite()
    }

    fn params(&self) -> Vec<f64> {
        vec![self.mean]
    }
}

/// Fisher–Snedecor F distribution with `d1` and `d2` degrees of freedom.
///
/// Sampled as the ratio of two scaled chi-squared draws, formed in log space
/// and exponentiated once.
#[derive(Clone, Copy, Debug)]
pub struct F {
    d1: f64,
    d2: f64,
    numerator: LogGamma,
    denominator: LogGamma,
    /// ln(d2 / d1), kept as a difference of logs so huge ratios do not overflow.
    ln_scale: f64,
}

impl F {
    /// Smallest accepted degrees of freedom. Each log chi-squared term is
    /// bounded by about `73.5 / d`, so at this floor the log ratio stays well
    /// inside the finite `f64` range.
    pub const DOF_MIN: f64 = 0.25;

    /// Creates an F distribution; both degrees of freedom must be finite and
    /// at least `DOF_MIN`.
    ///
    /// # Examples
    /// ```
    /// use random_variable::F;
    ///
    /// assert!(F::new(F::DOF_MIN, 1.0).is_ok());
    /// assert!(F::new(1e-3, 1.0).is_err());
    /// ```
    pub fn new(d1: f64, d2: f64) -> Result<Self> {
        let d1 = validation::positive("F", "d1", d1)?;
        let d2 = validation::positive("F", "d2", d2)?;
        let d1 = validation::at_least("F", "d1", d1, Self::DOF_MIN, "below dof_min")?;
        let d2 = validation::at_least("F", "d2", d2, Self::DOF_MIN, "below dof_min")?;
        Ok(Self {
            d1,
            d2,
            numerator: LogGamma::new("F", "d1", d1 / 2.0)?,
            denominator: LogGamma::new("F", "d2", d2 / 2.0)?,
            ln_scale: d2.ln() - d1.ln(),
        })
    }

    /// Numerator degrees of freedom.
    #[inline]
    pub fn d1(&self) -> f64 {
        self.d1
    }

    /// Denominator degrees of freedom.
    #[inline]
    pub fn d2(&self) -> f64 {
        self.d2
    }
}

impl Family for F {
    const KIND: DistributionKind = DistributionKind::F;

    #[inline]
    fn sample(&self, rng: &mut Generator) -> f64 {
        // (2 G1 / d1) / (2 G2 / d2) with G ~ Gamma(d / 2)
        let ln_num = self.numerator.sample(rng);
        let ln_den = self.denominator.sample(rng);
        (ln_num - ln_den + self.ln_scale).exp()
    }

    fn support_contains(&self, x: f64) -> bool {
        x >= 0.0 && x.is_finite()
    }

    fn params(&self) -> Vec<f64> {
        vec![self.d1, self.d2]
    }
}

/// Normal distribution with mean `mu` and standard deviation `sigma`.
///
/// # Examples
/// ```
/// use random_variable::{Family, Generator, Normal};
///
/// let x = Normal::new(10.0, 2.0).unwrap();
/// let mut rng = Generator::from_seed(42);
/// assert!(x.sample(&mut rng).is_finite());
/// assert!(Normal::new(0.0, 0.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Normal {
    mu: f64,
    sigma: f64,
}

impl Normal {
    /// Largest accepted `|mu|`.
    pub const MU_MAX: f64 = 1e300;

    /// Largest accepted `sigma`. The ziggurat never returns `|z|` above ~40,
    /// so `mu + sigma * z` stays finite under both caps.
    pub const SIGMA_MAX: f64 = 1e300;

    /// Creates a normal distribution with `|mu| <= MU_MAX` and `sigma` in
    /// (0, `SIGMA_MAX`].
    pub fn new(mu: f64, sigma: f64) -> Result<Self> {
        let mu = validation::finite("Normal", "mu", mu)?;
        if mu.abs() > Self::MU_MAX {
            return Err(RandomVariableError::invalid_parameter(
                "Normal",
                "mu",
                mu,
                "exceeds mu_max",
            ));
        }
        let sigma = validation::positive("Normal", "sigma", sigma)?;
        let sigma = validation::at_most(
            "Normal",
            "sigma",
            sigma,
            Self::SIGMA_MAX,
            "exceeds sigma_max",
        )?;
        Ok(Self { mu, sigma })
    }

    /// The standard normal distribution, N(0, 1).
    pub fn standard() -> Self {
        Self {
            mu: 0.0,
            sigma: 1.0,
        }
    }

    /// Mean.
    #[inline]
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Standard deviation.
    #[inline]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }
}

impl Default for Normal {
    fn default() -> Self {
        Self::standard()
    }
}

impl Family for Normal {
    const KIND: DistributionKind = DistributionKind::Normal;

    #[inline]
    fn sample(&self, rng: &mut Generator) -> f64 {
        self.mu + self.sigma * rng.next_normal()
    }

    fn support_contains(&self, x: f64) -> bool {
        x.is_finite()
    }

    fn params(&self) -> Vec<f64> {
        vec![self.mu, self.sigma]
    }
}

/// Pareto distribution with minimum `scale` and tail index `shape`, sampled
/// by inverse transform as `scale * (1 - u)^(-1 / shape)`.
///
/// `(1 - u)` is at least 2^-53, so the largest outcome is
/// `scale * exp(36.8 / shape)`. The caps below keep that finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pareto {
    scale: f64,
    shape: f64,
}

impl Pareto {
    /// Largest accepted `scale`.
    pub const SCALE_MAX: f64 = 1e100;

    /// Smallest accepted `shape`.
    pub const SHAPE_MIN: f64 = 0.1;

    /// Creates a Pareto distribution with `scale` in (0, `SCALE_MAX`] and
    /// finite `shape >= SHAPE_MIN`.
    pub fn new(scale: f64, shape: f64) -> Result<Self> {
        let scale = validation::positive("Pareto", "scale", scale)?;
        let scale = validation::at_most(
            "Pareto",
            "scale",
            scale,
            Self::SCALE_MAX,
            "exceeds scale_max",
        )?;
        let shape = validation::positive("Pareto", "shape", shape)?;
        let shape =
            validation::at_least("Pareto", "shape", shape, Self::SHAPE_MIN, "below shape_min")?;
        Ok(Self { scale, shape })
    }

    /// Minimum value.
    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Tail index.
    #[inline]
    pub fn shape(&self) -> f64 {
        self.shape
    }
}

impl Family for Pareto {
    const KIND: DistributionKind = DistributionKind::Pareto;

    #[inline]
    fn sample(&self, rng: &mut Generator) -> f64 {
        self.scale * (1.0 - rng.next_uniform()).powf(-1.0 / self.shape)
    }

    fn support_contains(&self, x: f64) -> bool {
        x >= self.scale && x.is_finite()
    }

    fn params(&self) -> Vec<f64> {
        vec![self.scale, self.shape]
    }
}

/// Rayleigh distribution with scale `sigma`, sampled by inverse transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rayleigh {
    sigma: f64,
}

impl Rayleigh {
    /// Largest accepted `sigma`; `sqrt(-2 ln(1 - u))` is at most ~8.6, so
    /// outcomes stay finite below this cap.
    pub const SIGMA_MAX: f64 = 1e300;

    /// Creates a Rayleigh distribution with `sigma` in (0, `SIGMA_MAX`].
    pub fn new(sigma: f64) -> Result<Self> {
        let sigma = validation::positive("Rayleigh", "sigma", sigma)?;
        let sigma = validation::at_most(
            "Rayleigh",
            "sigma",
            sigma,
            Self::SIGMA_MAX,
            "exceeds sigma_max",
        )?;
        Ok(Self { sigma })
    }

    /// Scale parameter.
    #[inline]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }
}

impl Family for Rayleigh {
    const KIND: DistributionKind = DistributionKind::Rayleigh;

    #[inline]
    fn sample(&self, rng: &mut Generator) -> f64 {
        self.sigma * (-2.0 * (1.0 - rng.next_uniform()).ln()).sqrt()
    }

    fn support_contains(&self, x: f64) -> bool {
        x >= 0.0 && x.is_finite()
    }

    fn params(&self) -> Vec<f64> {
        vec![self.sigma]
    }
}
