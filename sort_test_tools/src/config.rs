//! Environment driven knobs shared by the test harness and the benchmarks.

use std::env::{self, VarError};
use std::num::ParseIntError;
use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Fixes the pattern seed, e.g. `OVERRIDE_SEED=360013155987181959` to reproduce a failure.
pub const OVERRIDE_SEED: &str = "OVERRIDE_SEED";

/// When set, failing comparisons of large inputs are written to files instead of being dropped.
pub const WRITE_LARGE_FAILURE: &str = "WRITE_LARGE_FAILURE";

/// When set, the benchmarks count comparisons instead of measuring time.
pub const MEASURE_COMP: &str = "MEASURE_COMP";

/// When set, the benchmarks include the large input sizes.
pub const BENCH_LARGE: &str = "BENCH_LARGE";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid OVERRIDE_SEED value '{value}': {source}")]
    InvalidSeed {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("OVERRIDE_SEED is not valid unicode")]
    SeedNotUnicode,
    #[error("using a random seed each time conflicts with the external seed override {0}")]
    SeedOverrideConflict(u64),
}

/// Reads `OVERRIDE_SEED`. Absent means no override.
pub fn override_seed() -> Result<Option<u64>, ConfigError> {
    seed_from_var(env::var(OVERRIDE_SEED))
}

/// Parses a seed value, surrounding whitespace is ignored.
pub fn parse_seed(value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|source| ConfigError::InvalidSeed {
            value: value.to_owned(),
            source,
        })
}

fn seed_from_var(var: Result<String, VarError>) -> Result<Option<u64>, ConfigError> {
    match var {
        Ok(value) => parse_seed(&value).map(Some),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::SeedNotUnicode),
    }
}

pub fn write_large_failure() -> bool {
    is_set(WRITE_LARGE_FAILURE)
}

pub fn measure_comp() -> bool {
    is_set(MEASURE_COMP)
}

pub fn bench_large() -> bool {
    is_set(BENCH_LARGE)
}

/// Installs a fmt subscriber filtered by `RUST_LOG`, defaulting to `warn`. Only the first call
/// has an effect, and an already installed global subscriber is left alone.
pub fn init_logging() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

fn is_set(name: &str) -> bool {
    env::var_os(name).is_some()
}
