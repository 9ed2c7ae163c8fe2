//! Parametric distribution families.
//!
//! Each family is a validated struct: construction either returns an
//! instance whose parameters lie in the family's domain, or an
//! `InvalidParameter` error. No instance can exist with parameters outside
//! that domain. Sampling draws fresh randomness from a [`Generator`] on
//! every call.
//!
//! [`Distribution`] is the static-dispatch enum over all families, and
//! [`DistributionKind`] names a family without parameters.
//!
//! ## Example
//!
//! ```
//! use random_variable::{Distribution, DistributionKind, Generator};
//!
//! let d = Distribution::from_params(DistributionKind::Poisson, &[4.0]).unwrap();
//! let mut rng = Generator::from_seed(1);
//! let k = d.sample(&mut rng);
//! assert!(d.support_contains(k));
//!
//! // Wrong arity is an invalid parameter error
//! assert!(Distribution::from_params(DistributionKind::Normal, &[]).is_err());
//! ```

mod continuous;
mod discrete;
mod validation;

use std::fmt;
use std::str::FromStr;

pub use continuous::{Beta, ChiSquared, ContinuousUniform, Exponential, Normal, Pareto, Rayleigh, F};
pub use discrete::{Bernoulli, Binomial, DiscreteUniform, Poisson, Rademacher};

use crate::error::{RandomVariableError, Result};
use crate::generator::Generator;

/// Behaviour shared by every distribution family.
pub trait Family {
    /// The family this type implements.
    const KIND: DistributionKind;

    /// Draws one outcome.
    fn sample(&self, rng: &mut Generator) -> f64;

    /// Whether `x` lies in the family's support for these parameters.
    fn support_contains(&self, x: f64) -> bool;

    /// Parameters in constructor order.
    fn params(&self) -> Vec<f64>;
}

/// Distribution family identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DistributionKind {
    /// Bernoulli(p)
    Bernoulli,
    /// Beta(alpha, beta)
    Beta,
    /// Binomial(n, p)
    Binomial,
    /// ChiSquared(k)
    ChiSquared,
    /// ContinuousUniform(a, b)
    ContinuousUniform,
    /// DiscreteUniform(a, b)
    DiscreteUniform,
    /// Exponential(mean)
    Exponential,
    /// F(d1, d2)
    F,
    /// Normal(mu, sigma)
    Normal,
    /// Pareto(scale, shape)
    Pareto,
    /// Poisson(lambda)
    Poisson,
    /// Rademacher()
    Rademacher,
    /// Rayleigh(sigma)
    Rayleigh,
}

impl DistributionKind {
    /// All families, in alphabetical order.
    pub const ALL: [DistributionKind; 13] = [
        DistributionKind::Bernoulli,
        DistributionKind::Beta,
        DistributionKind::Binomial,
        DistributionKind::ChiSquared,
        DistributionKind::ContinuousUniform,
        DistributionKind::DiscreteUniform,
        DistributionKind::Exponential,
        DistributionKind::F,
        DistributionKind::Normal,
        DistributionKind::Pareto,
        DistributionKind::Poisson,
        DistributionKind::Rademacher,
        DistributionKind::Rayleigh,
    ];

    /// Family name.
    pub fn name(&self) -> &'static str {
        match self {
            DistributionKind::Bernoulli => "Bernoulli",
            DistributionKind::Beta => "Beta",
            DistributionKind::Binomial => "Binomial",
            DistributionKind::ChiSquared => "ChiSquared",
            DistributionKind::ContinuousUniform => "ContinuousUniform",
            DistributionKind::DiscreteUniform => "DiscreteUniform",
            DistributionKind::Exponential => "Exponential",
            DistributionKind::F => "F",
            DistributionKind::Normal => "Normal",
            DistributionKind::Pareto => "Pareto",
            DistributionKind::Poisson => "Poisson",
            DistributionKind::Rademacher => "Rademacher",
            DistributionKind::Rayleigh => "Rayleigh",
        }
    }

    /// Parameter names in constructor order.
    pub fn param_names(&self) -> &'static [&'static str] {
        match self {
            DistributionKind::Bernoulli => &["p"],
            DistributionKind::Beta => &["alpha", "beta"],
            DistributionKind::Binomial => &["n", "p"],
            DistributionKind::ChiSquared => &["k"],
            DistributionKind::ContinuousUniform => &["a", "b"],
            DistributionKind::DiscreteUniform => &["a", "b"],
            DistributionKind::Exponential => &["mean"],
            DistributionKind::F => &["d1", "d2"],
            DistributionKind::Normal => &["mu", "sigma"],
            DistributionKind::Pareto => &["scale", "shape"],
            DistributionKind::Poisson => &["lambda"],
            DistributionKind::Rademacher => &[],
            DistributionKind::Rayleigh => &["sigma"],
        }
    }

    /// Number of required parameters.
    #[inline]
    pub fn arity(&self) -> usize {
        self.param_names().len()
    }

    /// Whether outcomes are always integral.
    pub fn is_discrete(&self) -> bool {
        matches!(
            self,
            DistributionKind::Bernoulli
                | DistributionKind::Binomial
                | DistributionKind::DiscreteUniform
                | DistributionKind::Poisson
                | DistributionKind::Rademacher
        )
    }
}

impl fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DistributionKind {
    type Err = RandomVariableError;

    /// Parses a family name, ignoring case and `_`/`-` separators
    /// (`"ContinuousUniform"`, `"continuous_uniform"`).
    fn from_str(s: &str) -> Result<Self> {
        let wanted: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        DistributionKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().to_lowercase() == wanted)
            .ok_or_else(|| RandomVariableError::InvalidArgument {
                name: "family",
                value: s.to_string(),
                reason: "unknown distribution family",
            })
    }
}

/// Returns every supported distribution family.
///
/// # Examples
/// ```
/// use random_variable::{list_distributions, DistributionKind};
///
/// assert!(list_distributions().contains(&DistributionKind::Poisson));
/// ```
pub fn list_distributions() -> &'static [DistributionKind] {
    &DistributionKind::ALL
}

/// Static dispatch enum over all distribution families.
#[derive(Clone, Copy, Debug)]
pub enum Distribution {
    /// Bernoulli family
    Bernoulli(Bernoulli),
    /// Beta family
    Beta(Beta),
    /// Binomial family
    Binomial(Binomial),
    /// Chi-squared family
    ChiSquared(ChiSquared),
    /// Continuous uniform family
    ContinuousUniform(ContinuousUniform),
    /// Discrete uniform family
    DiscreteUniform(DiscreteUniform),
    /// Exponential family
    Exponential(Exponential),
    /// F family
    F(F),
    /// Normal family
    Normal(Normal),
    /// Pareto family
    Pareto(Pareto),
    /// Poisson family
    Poisson(Poisson),
    /// Rademacher family
    Rademacher(Rademacher),
    /// Rayleigh family
    Rayleigh(Rayleigh),
}

impl Distribution {
    /// Builds a distribution from a family and a positional parameter list.
    ///
    /// # Errors
    ///
    /// - `Arity` if `params.len()` differs from the family's arity
    /// - `InvalidParameter` if any parameter is non-finite, out of domain or
    ///   (for integer parameters) not a whole number
    pub fn from_params(kind: DistributionKind, params: &[f64]) -> Result<Self> {
        if params.len() != kind.arity() {
            return Err(RandomVariableError::Arity {
                family: kind.name(),
                expected: kind.arity(),
                supplied: params.len(),
            });
        }
        let name = kind.name();
        let d = match kind {
            DistributionKind::Bernoulli => Bernoulli::new(params[0])?.into(),
            DistributionKind::Beta => Beta::new(params[0], params[1])?.into(),
            DistributionKind::Binomial => {
                let n = validation::count(name, "n", params[0])?;
                Binomial::new(n, params[1])?.into()
            }
            DistributionKind::ChiSquared => {
                ChiSquared::new(validation::count(name, "k", params[0])?)?.into()
            }
            DistributionKind::ContinuousUniform => {
                ContinuousUniform::new(params[0], params[1])?.into()
            }
            DistributionKind::DiscreteUniform => {
                let a = validation::integer(name, "a", params[0])?;
                let b = validation::integer(name, "b", params[1])?;
                DiscreteUniform::new(a, b)?.into()
            }
            DistributionKind::Exponential => Exponential::new(params[0])?.into(),
            DistributionKind::F => F::new(params[0], params[1])?.into(),
            DistributionKind::Normal => Normal::new(params[0], params[1])?.into(),
            DistributionKind::Pareto => Pareto::new(params[0], params[1])?.into(),
            DistributionKind::Poisson => Poisson::new(params[0])?.into(),
            DistributionKind::Rademacher => Rademacher::new().into(),
            DistributionKind::Rayleigh => Rayleigh::new(params[0])?.into(),
        };
        Ok(d)
    }

    /// The family of this distribution.
    pub fn kind(&self) -> DistributionKind {
        match self {
            Distribution::Bernoulli(_) => Bernoulli::KIND,
            Distribution::Beta(_) => Beta::KIND,
            Distribution::Binomial(_) => Binomial::KIND,
            Distribution::ChiSquared(_) => ChiSquared::KIND,
            Distribution::ContinuousUniform(_) => ContinuousUniform::KIND,
            Distribution::DiscreteUniform(_) => DiscreteUniform::KIND,
            Distribution::Exponential(_) => Exponential::KIND,
            Distribution::F(_) => F::KIND,
            Distribution::Normal(_) => Normal::KIND,
            Distribution::Pareto(_) => Pareto::KIND,
            Distribution::Poisson(_) => Poisson::KIND,
            Distribution::Rademacher(_) => Rademacher::KIND,
            Distribution::Rayleigh(_) => Rayleigh::KIND,
        }
    }

    /// Draws one outcome.
    pub fn sample(&self, rng: &mut Generator) -> f64 {
        match self {
            Distribution::Bernoulli(d) => d.sample(rng),
            Distribution::Beta(d) => d.sample(rng),
            Distribution::Binomial(d) => d.sample(rng),
            Distribution::ChiSquared(d) => d.sample(rng),
            Distribution::ContinuousUniform(d) => d.sample(rng),
            Distribution::DiscreteUniform(d) => d.sample(rng),
            Distribution::Exponential(d) => d.sample(rng),
            Distribution::F(d) => d.sample(rng),
            Distribution::Normal(d) => d.sample(rng),
            Distribution::Pareto(d) => d.sample(rng),
            Distribution::Poisson(d) => d.sample(rng),
            Distribution::Rademacher(d) => d.sample(rng),
            Distribution::Rayleigh(d) => d.sample(rng),
        }
    }

    /// Whether `x` lies in the support of this distribution.
    pub fn support_contains(&self, x: f64) -> bool {
        match self {
            Distribution::Bernoulli(d) => d.support_contains(x),
            Distribution::Beta(d) => d.support_contains(x),
            Distribution::Binomial(d) => d.support_contains(x),
            Distribution::ChiSquared(d) => d.support_contains(x),
            Distribution::ContinuousUniform(d) => d.support_contains(x),
            Distribution::DiscreteUniform(d) => d.support_contains(x),
            Distribution::Exponential(d) => d.support_contains(x),
            Distribution::F(d) => d.support_contains(x),
            Distribution::Normal(d) => d.support_contains(x),
            Distribution::Pareto(d) => d.support_contains(x),
            Distribution::Poisson(d) => d.support_contains(x),
            Distribution::Rademacher(d) => d.support_contains(x),
            Distribution::Rayleigh(d) => d.support_contains(x),
        }
    }

    /// Parameters in constructor order.
    pub fn params(&self) -> Vec<f64> {
        match self {
            Distribution::Bernoulli(d) => d.params(),
            Distribution::Beta(d) => d.params(),
            Distribution::Binomial(d) => d.params(),
            Distribution::ChiSquared(d) => d.params(),
            Distribution::ContinuousUniform(d) => d.params(),
            Distribution::DiscreteUniform(d) => d.params(),
            Distribution::Exponential(d) => d.params(),
            Distribution::F(d) => d.params(),
            Distribution::Normal(d) => d.params(),
            Distribution::Pareto(d) => d.params(),
            Distribution::Poisson(d) => d.params(),
            Distribution::Rademacher(d) => d.params(),
            Distribution::Rayleigh(d) => d.params(),
        }
    }
}

impl PartialEq for Distribution {
    fn eq(&self, other: &Self) -> bool {
        self.kind() == other.kind() && self.params() == other.params()
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.kind())?;
        for (i, p) in self.params().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", p)?;
        }
        f.write_str(")")
    }
}

macro_rules! impl_from_family {
    ($($family:ident),* $(,)?) => {
        $(
            impl From<$family> for Distribution {
                fn from(d: $family) -> Self {
                    Distribution::$family(d)
                }
            }
        )*
    };
}

impl_from_family!(
    Bernoulli,
    Beta,
    Binomial,
    ChiSquared,
    ContinuousUniform,
    DiscreteUniform,
    Exponential,
    F,
    Normal,
    Pareto,
    Poisson,
    Rademacher,
    Rayleigh,
);
