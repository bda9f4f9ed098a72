//! Runtime configuration via environment variables.
//!
//! Both variables are read once, the first time the value is needed.
//!
//! * `SEVEN_PARALLEL_THRESHOLD`: number of result elements above which matrix operations are
//!   split across the [`parallel`][crate::parallel] runner. Defaults to 49.
//! * `SEVEN_WORKERS`: number of units of work a parallel operation fans out to. Defaults to the
//!   number of threads in the rayon thread pool.
//!
//! Invalid values are logged and replaced with the default.

use std::env::{self, VarError};

use once_cell::sync::Lazy;

const DEFAULT_PARALLEL_THRESHOLD: usize = 49;

static PARALLEL_THRESHOLD: Lazy<usize> = Lazy::new(|| {
    parse_var("SEVEN_PARALLEL_THRESHOLD", 0).unwrap_or(DEFAULT_PARALLEL_THRESHOLD)
});

static WORKERS: Lazy<usize> =
    Lazy::new(|| parse_var("SEVEN_WORKERS", 1).unwrap_or_else(rayon::current_num_threads));

fn parse_var(name: &str, min: usize) -> Option<usize> {
    match env::var(name) {
        Ok(v) => match v.trim().parse::<usize>() {
            Ok(n) if n >= min => Some(n),
            _ => {
                log::warn!("invalid value set for `{name}` variable: '{v}'; using the default");
                None
            }
        },
        Err(VarError::NotPresent) => None,
        Err(VarError::NotUnicode(s)) => {
            log::warn!(
                "invalid value set for `{name}` variable: {}; using the default",
                s.to_string_lossy()
            );
            None
        }
    }
}

/// Returns the element count above which matrix operations run in parallel.
pub fn parallel_threshold() -> usize {
    *PARALLEL_THRESHOLD
}

/// Returns the number of units of work a parallel operation is split into.
///
/// This is always at least 1.
pub fn worker_count() -> usize {
    (*WORKERS).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        env::set_var("SEVEN_TEST_PARSE_OK", " 12 ");
        env::set_var("SEVEN_TEST_PARSE_BAD", "twelve");
        env::set_var("SEVEN_TEST_PARSE_SMALL", "0");
        assert_eq!(parse_var("SEVEN_TEST_PARSE_OK", 0), Some(12));
        assert_eq!(parse_var("SEVEN_TEST_PARSE_BAD", 0), None);
        assert_eq!(parse_var("SEVEN_TEST_PARSE_SMALL", 1), None);
        assert_eq!(parse_var("SEVEN_TEST_PARSE_MISSING", 0), None);
    }

    #[test]
    fn defaults() {
        assert!(worker_count() >= 1);
        let _ = parallel_threshold();
    }
}
