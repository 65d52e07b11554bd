//! Seeded randomized testing of the array generators.
//!
//! Each iteration draws one random array (and a target, half the time taken
//! from the array) and runs it through every sorting and searching
//! generator, checking the trace with [`check`](super::check).
//!
//! Reproducibility: the same `random_seed` draws the same inputs and gives
//! the same result.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use algotrace_core::{AlgorithmId, ArrayState, Trace, TraceGenerator};

use super::{check, TraceViolation};
use crate::searching::{BinarySearch, LinearSearch};
use crate::sorting::{BubbleSort, HeapSort, InsertionSort, MergeSort, QuickSort, SelectionSort};

/// Configuration for a property test run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyTestConfig {
    /// Number of random arrays to draw.
    pub iterations: u32,
    pub random_seed: u64,
    /// Longest array drawn. Lengths are uniform in `0..=max_len`.
    pub max_len: usize,
    /// Inclusive value range.
    pub value_range: (i64, i64),
}

impl Default for PropertyTestConfig {
    fn default() -> Self {
        PropertyTestConfig {
            iterations: 100,
            random_seed: 0,
            max_len: 12,
            value_range: (-50, 50),
        }
    }
}

/// Result of a property test run.
#[derive(Debug, Clone, Serialize)]
pub struct PropertyTestResult {
    /// Generator runs, one per algorithm per iteration.
    pub total_run: u32,
    pub passed: u32,
    pub failures: Vec<PropertyTestFailure>,
    /// The random seed used (for reproducibility).
    pub random_seed: u64,
}

/// One failing run with the input that caused it and its full trace.
#[derive(Debug, Clone, Serialize)]
pub struct PropertyTestFailure {
    pub algorithm: AlgorithmId,
    pub input: Vec<i64>,
    pub target: Option<i64>,
    pub violations: Vec<TraceViolation>,
    pub trace: Trace<ArrayState>,
}

/// Draws a random array. About 30% of elements repeat an earlier value so
/// duplicates are common.
pub fn generate_random_array(config: &PropertyTestConfig, rng: &mut ChaCha8Rng) -> Vec<i64> {
    let (lo, hi) = config.value_range;
    let len = rng.gen_range(0..=config.max_len);
    let mut values: Vec<i64> = Vec::with_capacity(len);
    for _ in 0..len {
        if !values.is_empty() && rng.gen_ratio(3, 10) {
            let pick = values[rng.gen_range(0..values.len())];
            values.push(pick);
        } else {
            values.push(rng.gen_range(lo..=hi));
        }
    }
    values
}

/// Picks a search target: an element of `array` half the time, otherwise
/// any value in range (which may or may not be present).
pub fn generate_random_target(
    config: &PropertyTestConfig,
    array: &[i64],
    rng: &mut ChaCha8Rng,
) -> i64 {
    if !array.is_empty() && rng.gen_bool(0.5) {
        array[rng.gen_range(0..array.len())]
    } else {
        let (lo, hi) = config.value_range;
        rng.gen_range(lo..=hi)
    }
}

enum Case {
    Sort(fn(Vec<i64>) -> Trace<ArrayState>),
    Search(fn(Vec<i64>, i64) -> Trace<ArrayState>),
}

const CASES: [(AlgorithmId, Case); 8] = [
    (AlgorithmId::BubbleSort, Case::Sort(|a| BubbleSort::new(a).generate_steps())),
    (AlgorithmId::SelectionSort, Case::Sort(|a| SelectionSort::new(a).generate_steps())),
    (AlgorithmId::InsertionSort, Case::Sort(|a| InsertionSort::new(a).generate_steps())),
    (AlgorithmId::MergeSort, Case::Sort(|a| MergeSort::new(a).generate_steps())),
    (AlgorithmId::QuickSort, Case::Sort(|a| QuickSort::new(a).generate_steps())),
    (AlgorithmId::HeapSort, Case::Sort(|a| HeapSort::new(a).generate_steps())),
    (AlgorithmId::LinearSearch, Case::Search(|a, t| LinearSearch::new(a, t).generate_steps())),
    (AlgorithmId::BinarySearch, Case::Search(|a, t| BinarySearch::new(a, t).generate_steps())),
];

/// Runs every array generator on `config.iterations` random inputs.
pub fn run_property_tests(config: &PropertyTestConfig) -> PropertyTestResult {
    let mut rng = ChaCha8Rng::seed_from_u64(config.random_seed);
    let mut failures = Vec::new();
    let mut total_run: u32 = 0;
    let mut passed: u32 = 0;

    for _ in 0..config.iterations {
        let input = generate_random_array(config, &mut rng);
        let target = generate_random_target(config, &input, &mut rng);

        for (algorithm, case) in &CASES {
            total_run += 1;
            let (trace, violations, target) = match case {
                Case::Sort(run) => {
                    let trace = run(input.clone());
                    let violations = check::check_sorting(&trace, &input);
                    (trace, violations, None)
                }
                Case::Search(run) => {
                    let trace = run(input.clone(), target);
                    let violations = check::check_search(&trace, target);
                    (trace, violations, Some(target))
                }
            };
            if violations.is_empty() {
                passed += 1;
            } else {
                tracing::warn!(
                    "{} failed on {:?}: {} violation(s)",
                    algorithm,
                    input,
                    violations.len()
                );
                failures.push(PropertyTestFailure {
                    algorithm: *algorithm,
                    input: input.clone(),
                    target,
                    violations,
                    trace,
                });
            }
        }
    }

    PropertyTestResult {
        total_run,
        passed,
        failures,
        random_seed: config.random_seed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_arrays_respect_config() {
        let config = PropertyTestConfig {
            max_len: 5,
            value_range: (-3, 3),
            ..PropertyTestConfig::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let array = generate_random_array(&config, &mut rng);
            assert!(array.len() <= 5);
            assert!(array.iter().all(|v| (-3..=3).contains(v)));
        }
    }

    #[test]
    fn all_generators_pass() {
        let config = PropertyTestConfig {
            iterations: 50,
            random_seed: 42,
            ..PropertyTestConfig::default()
        };
        let result = run_property_tests(&config);
        assert_eq!(result.total_run, 50 * 8);
        assert!(
            result.failures.is_empty(),
            "first failure: {:?}",
            result.failures.first().map(|f| (&f.algorithm, &f.input, &f.violations))
        );
        assert_eq!(result.passed, result.total_run);
    }

    #[test]
    fn property_test_reproducibility() {
        let config = PropertyTestConfig {
            iterations: 10,
            random_seed: 12345,
            ..PropertyTestConfig::default()
        };
        let mut a = ChaCha8Rng::seed_from_u64(config.random_seed);
        let mut b = ChaCha8Rng::seed_from_u64(config.random_seed);
        for _ in 0..config.iterations {
            assert_eq!(
                generate_random_array(&config, &mut a),
                generate_random_array(&config, &mut b)
            );
        }
        let first = run_property_tests(&config);
        let second = run_property_tests(&config);
        assert_eq!(first.total_run, second.total_run);
        assert_eq!(first.passed, second.passed);
        assert_eq!(first.random_seed, 12345);
    }
}
