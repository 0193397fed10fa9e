use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;

use rand::prelude::*;

use crate::config::{self, ConfigError};

/// Provides a set of patterns useful for testing and benchmarking sorting algorithms.
/// Limited to i32 values.

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    random_vec(len)
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::
    let mut rng = new_rng();

    // Abstracting over ranges in Rust :(
    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    //     .:
    //   .:::. :
    // .::::::.::
    // [----][--]
    //  ^      ^
    //  |      |
    // sorted  |
    //     unsorted

    // Simulate pre-existing sorted slice, where len - sorted_percent are the new unsorted values
    // and part of the overall distribution.
    let mut v = random_vec(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;

    v[0..sorted_len.min(len)].sort_unstable();

    v
}

pub fn random_random_size(max_len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::
    // < len > is random from call to call, with max_len as maximum len.

    let random_len = random_uniform(1, 0..=(max_len as i32));
    random(random_len[0] as usize)
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    (0..len).map(|_| 66).collect::<Vec<_>>()
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect::<Vec<_>>()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect::<Vec<_>>()
}

pub fn saw_ascending(len: usize, saw_count: usize) -> Vec<i32> {
    //   .:  .:
    // .:::.:::

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(len);

    for chunk in vals.chunks_mut(saw_len(len, saw_count)) {
        chunk.sort();
    }

    vals
}

pub fn saw_descending(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.
    // :::.:::.

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(len);

    for chunk in vals.chunks_mut(saw_len(len, saw_count)) {
        chunk.sort_by_key(|&e| std::cmp::Reverse(e));
    }

    vals
}

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(len);
    let chunks_len = saw_len(len, saw_count);
    let saw_directions = random_uniform((len / chunks_len) + 1, 0..=1);

    for (i, chunk) in vals.chunks_mut(chunks_len).enumerate() {
        if saw_directions[i] == 0 {
            chunk.sort();
        } else {
            chunk.sort_by_key(|&e| std::cmp::Reverse(e));
        }
    }

    vals
}

pub fn saw_mixed_range(len: usize, range: std::ops::Range<usize>) -> Vec<i32> {
    //     :.
    // :.  :::.    .::.      .:
    // :::.:::::..::::::..:.:::

    // ascending and descending randomly picked, with length in `range`.

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(len);

    let min_chunk = range.start.max(1);
    let max_chunks = len / min_chunk;
    let saw_directions = random_uniform(max_chunks + 1, 0..=1);
    let chunk_lens = random_uniform(
        max_chunks + 1,
        (min_chunk as i32)..(range.end.max(min_chunk + 1) as i32),
    );

    let mut i = 0;
    let mut l = 0;
    while l < len {
        let chunk_len = chunk_lens[i] as usize;
        let chunk_end = std::cmp::min(l + chunk_len, len);
        let chunk = &mut vals[l..chunk_end];

        if saw_directions[i] == 0 {
            chunk.sort();
        } else {
            chunk.sort_by_key(|&e| std::cmp::Reverse(e));
        }

        i += 1;
        l += chunk_len;
    }

    vals
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random_vec(len);

    let first_half = &mut vals[0..(len / 2)];
    first_half.sort();

    let second_half = &mut vals[(len / 2)..len];
    second_half.sort_by_key(|&e| std::cmp::Reverse(e));

    vals
}

/// Where the seed of the current process comes from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SeedType {
    RandomEachTime,
    RandomOncePerProcess,
    ExternalOverride,
}

/// Overwrites the default behavior so that each call to a random derived pattern yields new random
/// values.
///
/// By default `patterns::random(4)` will yield the same values per process invocation.
/// For benchmarks it's advised to call this function.
///
/// Panics if `OVERRIDE_SEED` is set, see [`try_use_random_seed_each_time`].
pub fn use_random_seed_each_time() {
    if let Err(err) = try_use_random_seed_each_time() {
        panic!("{err}");
    }
}

pub fn try_use_random_seed_each_time() -> Result<(), ConfigError> {
    let (seed_type, seed_val) = process_seed()?;
    if seed_type == SeedType::ExternalOverride {
        return Err(ConfigError::SeedOverrideConflict(seed_val));
    }

    RANDOM_EACH_TIME.store(true, Ordering::Release);

    Ok(())
}

pub fn seed_type() -> Result<SeedType, ConfigError> {
    if RANDOM_EACH_TIME.load(Ordering::Acquire) {
        return Ok(SeedType::RandomEachTime);
    }

    Ok(process_seed()?.0)
}

/// Panics if `OVERRIDE_SEED` holds something other than a `u64`.
pub fn random_init_seed() -> u64 {
    match try_random_init_seed() {
        Ok(seed) => seed,
        Err(err) => panic!("{err}"),
    }
}

pub fn try_random_init_seed() -> Result<u64, ConfigError> {
    let (_, seed_val) = process_seed()?;

    if RANDOM_EACH_TIME.load(Ordering::Acquire) {
        let seed: u64 = thread_rng().gen();
        tracing::trace!(seed, "fresh pattern seed");
        Ok(seed)
    } else {
        Ok(seed_val)
    }
}

// --- Private ---

static PROCESS_SEED: OnceCell<(SeedType, u64)> = OnceCell::new();
static RANDOM_EACH_TIME: AtomicBool = AtomicBool::new(false);

fn process_seed() -> Result<(SeedType, u64), ConfigError> {
    PROCESS_SEED
        .get_or_try_init(|| -> Result<_, ConfigError> {
            let (seed_type, seed_val) = match config::override_seed()? {
                Some(seed) => (SeedType::ExternalOverride, seed),
                None => (SeedType::RandomOncePerProcess, thread_rng().gen()),
            };

            tracing::debug!(seed = seed_val, source = ?seed_type, "pattern seed initialized");

            Ok((seed_type, seed_val))
        })
        .copied()
}

fn saw_len(len: usize, saw_count: usize) -> usize {
    (len / saw_count.max(1)).max(1)
}

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

fn random_vec(len: usize) -> Vec<i32> {
    let mut rng = new_rng();

    (0..len).map(|_| rng.gen::<i32>()).collect()
}
