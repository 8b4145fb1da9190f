//! Input data for the pipeline, tests and benchmarks.
//!
//! Seeded patterns share one seed per process. Tests print it, and `OVERRIDE_SEED=<seed>` replays
//! a failing run. The pipeline does not go through this seed, it draws its own.

use std::env;
use std::ops::Range;
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard, PoisonError};

use once_cell::sync::Lazy;
use rand::distributions::Uniform;
use rand::prelude::*;

use crate::Error;

// --- Public ---

/// `len` values drawn uniformly from the half-open `range`, using the per-process seed.
///
/// Panics if `range` is empty or its width overflows, use [`crate::Config`] to validate bounds
/// up front.
pub fn random_uniform_f64(len: usize, range: Range<f64>) -> Vec<f64> {
    random_uniform_f64_from_seed(len, range, random_init_seed())
}

/// Same as [`random_uniform_f64`], but the caller picks the seed. Equal seeds yield equal values.
pub fn random_uniform_f64_from_seed(len: usize, range: Range<f64>, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Uniform::from(range);

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

/// Small integer keys, mostly useful to produce many duplicates.
pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    let mut rng = StdRng::seed_from_u64(random_init_seed());
    let dist: Uniform<i32> = range.into();

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn ascending(len: usize) -> Vec<f64> {
    (0..len).map(|i| i as f64).collect()
}

/// Worst case for bubble sort, every pair is an inversion.
pub fn descending(len: usize) -> Vec<f64> {
    (0..len).rev().map(|i| i as f64).collect()
}

/// Overwrites the default behavior so that each call to a seeded pattern yields new random
/// values. Meant for benchmarks.
pub fn use_random_seed_each_time() -> Result<(), Error> {
    let (seed_type, _) = get_or_init_seed_type_and_value();
    if seed_type == SeedType::ExternalOverride {
        return Err(Error::SeedConflict);
    }

    *lock_seed_state() = Some((SeedType::RandomEachTime, 0));

    Ok(())
}

pub fn random_init_seed() -> u64 {
    get_or_init_seed_type_and_value().1
}

// --- Private ---

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum SeedType {
    RandomEachTime,
    RandomOncePerProcess,
    ExternalOverride,
}

static OVERRIDE_SEED: Lazy<Option<String>> = Lazy::new(|| env::var("OVERRIDE_SEED").ok());

static SEED_TYPE_AND_VALUE: Mutex<Option<(SeedType, u64)>> = Mutex::new(None);

fn parse_seed(seed: &str) -> Result<u64, Error> {
    u64::from_str(seed.trim()).map_err(|_| Error::InvalidSeed(seed.to_owned()))
}

fn initial_seed_state(override_seed: Option<&str>) -> (SeedType, u64) {
    match override_seed.map(parse_seed) {
        Some(Ok(seed)) => (SeedType::ExternalOverride, seed),
        Some(Err(err)) => {
            log::warn!("{err}, falling back to a random per-process seed");
            (SeedType::RandomOncePerProcess, thread_rng().gen())
        }
        None => (SeedType::RandomOncePerProcess, thread_rng().gen()),
    }
}

fn lock_seed_state() -> MutexGuard<'static, Option<(SeedType, u64)>> {
    SEED_TYPE_AND_VALUE
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

fn get_or_init_seed_type_and_value() -> (SeedType, u64) {
    let (seed_type, seed_val) =
        *lock_seed_state().get_or_insert_with(|| initial_seed_state(OVERRIDE_SEED.as_deref()));

    if seed_type == SeedType::RandomEachTime {
        (SeedType::RandomEachTime, thread_rng().gen())
    } else {
        (seed_type, seed_val)
    }
}
