//! # Random Variable
//!
//! Parametric probability distributions as composable random variables.
//!
//! This crate provides:
//! - A seeded, replayable generator and a process-wide default instance
//! - Thirteen distribution families, validated once at construction
//! - Lazy algebraic composition: arithmetic and elementary functions over
//!   random variables build new random variables
//! - Summary statistics (min, max, mean, median) over sampled outcomes
//!
//! ## Design Principles
//!
//! - **Enum-based families** for static dispatch
//! - **Immutable expression trees** behind cheap `Arc` handles
//! - **Construction-time validation**: only arithmetic errors can surface
//!   while sampling
//!
//! ## Example
//!
//! ```
//! use random_variable::{set_seed, RandomVariable};
//!
//! let x = RandomVariable::bernoulli(0.5).unwrap();
//! let z = &x * 2.0 - 1.0;
//!
//! set_seed(2012).unwrap();
//! let samples = z.outcomes(100_000).unwrap();
//! assert!(samples.iter().all(|&v| v == -1.0 || v == 1.0));
//! assert!(samples.mean().unwrap().abs() < 0.05);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod distributions;
pub mod error;
pub mod generator;
pub mod math;
pub mod stats;
pub mod variable;

pub use config::{DistributionConfig, SamplingConfig, SamplingConfigBuilder, MAX_SAMPLES};
pub use distributions::{
    list_distributions, Bernoulli, Beta, Binomial, ChiSquared, ContinuousUniform,
    DiscreteUniform, Distribution, DistributionKind, Exponential, Family, Normal, Pareto,
    Poisson, Rademacher, Rayleigh, F,
};
pub use error::{RandomVariableError, Result};
pub use generator::{get_seed, new_seed, set_seed, set_seed_f64, Generator};
pub use stats::Samples;
pub use variable::{lift, BinaryOp, Operand, RandomVariable, UnaryFn};
