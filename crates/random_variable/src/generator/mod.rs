//! # Random Number Generation
//!
//! All distributions draw from a [`Generator`]: a seeded PRNG wrapper that
//! remembers its seed so runs can be replayed.
//!
//! ## Reproducibility
//!
//! The same seed produces the same sequence of draws for all subsequent
//! calls. Reseeding restarts the stream.
//!
//! ## Process-wide vs. isolated generators
//!
//! - The process-wide generator ([`get_seed`], [`set_seed`], [`new_seed`],
//!   [`with_global_generator`]) is initialised lazily from entropy and backs
//!   the convenience sampling methods.
//! - Isolated generators are plain values: construct one with
//!   [`Generator::from_seed`] and pass it to the `*_with` sampling methods.
//!   This is the way to get reproducible results from several threads.
//!
//! ## Usage Example
//!
//! ```rust
//! use random_variable::Generator;
//!
//! let mut rng = Generator::from_seed(12345);
//! let u = rng.next_uniform();
//! assert!((0.0..1.0).contains(&u));
//!
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_uniform(&mut buffer);
//! ```

mod global;
mod prng;

pub use global::{get_seed, new_seed, set_seed, set_seed_f64, with_global_generator};
pub use prng::Generator;
