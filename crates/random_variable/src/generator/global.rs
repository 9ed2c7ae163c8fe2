//! Process-wide default generator.
//!
//! The default generator is created lazily on first use with an
//! entropy-derived seed and lives for the rest of the process. Access is
//! serialised by a mutex; a poisoned lock is recovered rather than
//! propagated, since the generator state is always valid.
//!
//! Concurrent samplers each take the lock per call or per batch, so their
//! draws interleave in an unspecified order. Runs that must be reproducible
//! under concurrency should use their own [`Generator`] instances.
//!
//! Nested access from the thread that already holds the lock is reported as
//! `ReentrantAccess` instead of blocking.

use std::cell::Cell;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, OnceLock, PoisonError};

use super::Generator;
use crate::error::{RandomVariableError, Result};

static GLOBAL: OnceLock<Mutex<Generator>> = OnceLock::new();

/// Seed of the process-wide generator, readable without taking the lock.
static SEED: AtomicU64 = AtomicU64::new(0);

thread_local! {
    /// Set while this thread holds the process-wide generator.
    static HELD: Cell<bool> = const { Cell::new(false) };
}

fn global() -> &'static Mutex<Generator> {
    GLOBAL.get_or_init(|| {
        let generator = Generator::from_entropy();
        tracing::debug!(seed = generator.seed(), "default generator initialised");
        SEED.store(generator.seed(), Ordering::Relaxed);
        Mutex::new(generator)
    })
}

/// Marks the current thread as holding the generator until dropped.
struct HeldGuard;

impl HeldGuard {
    fn acquire() -> Result<Self> {
        HELD.with(|held| {
            if held.replace(true) {
                tracing::warn!("nested access to the process-wide generator");
                Err(RandomVariableError::ReentrantAccess)
            } else {
                Ok(HeldGuard)
            }
        })
    }
}

impl Drop for HeldGuard {
    fn drop(&mut self) {
        HELD.with(|held| held.set(false));
    }
}

/// Runs `f` with exclusive access to the process-wide generator.
///
/// The lock is held for the duration of `f`. Inside `f`, sample with the
/// supplied generator through the `*_with` forms.
///
/// # Errors
///
/// Returns `ReentrantAccess` when called from inside another
/// `with_global_generator` on the same thread, for example from a `map`
/// closure evaluated by `RandomVariable::outcome`. Waiting for the lock there
/// would never return.
///
/// # Examples
///
/// ```rust
/// use random_variable::generator::with_global_generator;
///
/// let u = with_global_generator(|g| g.next_uniform()).unwrap();
/// assert!((0.0..1.0).contains(&u));
///
/// let nested = with_global_generator(|_| with_global_generator(|g| g.next_uniform()));
/// assert!(nested.unwrap().is_err());
/// ```
pub fn with_global_generator<R>(f: impl FnOnce(&mut Generator) -> R) -> Result<R> {
    let _held = HeldGuard::acquire()?;
    let mut guard = global().lock().unwrap_or_else(PoisonError::into_inner);
    let result = f(&mut guard);
    SEED.store(guard.seed(), Ordering::Relaxed);
    Ok(result)
}

/// Returns the seed of the process-wide generator.
///
/// Never blocks, so it is safe to call from anywhere, including `map`
/// closures.
pub fn get_seed() -> u64 {
    global();
    SEED.load(Ordering::Relaxed)
}

/// Reseeds the process-wide generator and returns the new seed.
///
/// # Errors
///
/// Returns `ReentrantAccess` when the current thread is already inside
/// [`with_global_generator`].
///
/// # Examples
///
/// ```rust
/// use random_variable::{get_seed, set_seed};
///
/// assert_eq!(set_seed(113).unwrap(), 113);
/// assert_eq!(get_seed(), 113);
/// ```
pub fn set_seed(seed: u64) -> Result<u64> {
    with_global_generator(|g| g.set_seed(seed))
}

/// Reseeds the process-wide generator from a floating-point seed.
///
/// # Errors
///
/// Returns `InvalidParameter` if `seed` is NaN, infinite, negative,
/// fractional or not representable as a `u64`, and `ReentrantAccess` as for
/// [`set_seed`].
pub fn set_seed_f64(seed: f64) -> Result<u64> {
    set_seed(seed_from_f64(seed)?)
}

/// Reseeds the process-wide generator from entropy and returns the new seed.
///
/// # Errors
///
/// Returns `ReentrantAccess` as for [`set_seed`].
pub fn new_seed() -> Result<u64> {
    with_global_generator(|g| g.reseed_from_entropy())
}

/// Converts a floating-point seed into a `u64`, rejecting anything that is
/// not a non-negative whole number.
pub(crate) fn seed_from_f64(seed: f64) -> Result<u64> {
    // 2^64, the first value that no longer fits
    const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

    if !seed.is_finite() {
        return Err(RandomVariableError::invalid_parameter(
            "Generator",
            "seed",
            seed,
            "must be finite",
        ));
    }
    if seed < 0.0 || seed >= U64_LIMIT {
        return Err(RandomVariableError::invalid_parameter(
            "Generator",
            "seed",
            seed,
            "must be in range [0, 2^64)",
        ));
    }
    if seed.fract() != 0.0 {
        return Err(RandomVariableError::invalid_parameter(
            "Generator",
            "seed",
            seed,
            "must be a whole number",
        ));
    }
    Ok(seed as u64)
}
