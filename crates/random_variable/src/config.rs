//! Sampling and distribution configuration.
//!
//! [`SamplingConfig`] describes a batch: how many outcomes and, optionally,
//! the seed of an isolated generator. [`DistributionConfig`] is the
//! declarative (and, with the `serde` feature, serialisable) form of a
//! [`Distribution`].

use crate::distributions::{Distribution, DistributionKind};
use crate::error::{RandomVariableError, Result};

/// Maximum number of outcomes in one configured batch.
pub const MAX_SAMPLES: usize = 100_000_000;

/// Batch sampling configuration.
///
/// Immutable; use [`SamplingConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use random_variable::{RandomVariable, SamplingConfig};
///
/// let config = SamplingConfig::builder()
///     .n_samples(10_000)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// let x = RandomVariable::normal(0.0, 1.0).unwrap();
/// let samples = x.sample_with_config(&config).unwrap();
/// assert_eq!(samples.len(), 10_000);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamplingConfig {
    /// Number of outcomes per batch.
    n_samples: usize,
    /// Seed of an isolated generator; `None` uses the process-wide one.
    seed: Option<u64>,
}

impl SamplingConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SamplingConfigBuilder {
        SamplingConfigBuilder::default()
    }

    /// Returns the number of outcomes per batch.
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Returns the optional seed.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if `n_samples` is 0 or greater than [`MAX_SAMPLES`].
    pub fn validate(&self) -> Result<()> {
        if self.n_samples == 0 || self.n_samples > MAX_SAMPLES {
            return Err(RandomVariableError::InvalidConfig {
                name: "n_samples",
                value: format!("{} not in [1, {}]", self.n_samples, MAX_SAMPLES),
            });
        }
        Ok(())
    }
}

/// Builder for [`SamplingConfig`].
#[derive(Clone, Debug, Default)]
pub struct SamplingConfigBuilder {
    n_samples: Option<usize>,
    seed: Option<u64>,
}

impl SamplingConfigBuilder {
    /// Sets the number of outcomes, in [1, `MAX_SAMPLES`].
    #[inline]
    pub fn n_samples(mut self, n_samples: usize) -> Self {
        self.n_samples = Some(n_samples);
        self
    }

    /// Sets the seed of an isolated generator.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if `n_samples` is missing or out of range.
    pub fn build(self) -> Result<SamplingConfig> {
        let n_samples = self.n_samples.ok_or_else(|| RandomVariableError::InvalidConfig {
            name: "n_samples",
            value: "not set".to_string(),
        })?;
        let config = SamplingConfig {
            n_samples,
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Declarative description of a distribution.
///
/// # Examples
///
/// ```rust
/// use random_variable::{DistributionConfig, DistributionKind};
///
/// let config = DistributionConfig::new(DistributionKind::Binomial, vec![10.0, 0.25]);
/// let d = config.build().unwrap();
/// assert_eq!(d.to_config(), config);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistributionConfig {
    /// Family name.
    pub family: DistributionKind,
    /// Parameters in constructor order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub params: Vec<f64>,
}

impl DistributionConfig {
    /// Creates a configuration.
    pub fn new(family: DistributionKind, params: Vec<f64>) -> Self {
        Self { family, params }
    }

    /// Validates the parameters and builds the distribution.
    ///
    /// # Errors
    ///
    /// See [`Distribution::from_params`].
    pub fn build(&self) -> Result<Distribution> {
        Distribution::from_params(self.family, &self.params)
    }
}

impl Distribution {
    /// Returns the declarative form of this distribution.
    pub fn to_config(&self) -> DistributionConfig {
        DistributionConfig::new(self.kind(), self.params())
    }
}
