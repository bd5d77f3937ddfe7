//! Performance Evaluator
//!
//! Times each algorithm on its own private copy of the caller's sequence.
//! Runs are strictly sequential on the calling thread so that one measurement
//! never competes with another for CPU or cache.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info};

use crate::algorithm::Algorithm;
use crate::config::Config;
use crate::error::{Result, SortError};
use crate::sort::is_non_decreasing;

/// One algorithm's execution time for one input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Measurement {
    pub algorithm: Algorithm,
    pub time_ns: u64,
}

/// All measurements of a single evaluation run.
///
/// Holds exactly one entry per algorithm, every one taken from a fresh copy
/// of the same input. Read-only once built.
#[derive(Debug, Clone, Serialize)]
pub struct ResultSet {
    input_len: usize,
    measurements: BTreeMap<Algorithm, Measurement>,
    best: Measurement,
}

impl ResultSet {
    fn from_measurements(
        input_len: usize,
        measurements: [Measurement; Algorithm::ALL.len()],
    ) -> Self {
        let best = measurements.iter().copied().fold(measurements[0], faster);
        let measurements = measurements
            .into_iter()
            .map(|m| (m.algorithm, m))
            .collect();
        Self {
            input_len,
            measurements,
            best,
        }
    }

    /// Length of the evaluated sequence
    pub fn input_len(&self) -> usize {
        self.input_len
    }

    /// Number of measurements (always one per algorithm)
    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }

    /// Measurement for a single algorithm
    pub fn get(&self, algorithm: Algorithm) -> Option<&Measurement> {
        self.measurements.get(&algorithm)
    }

    /// Measurements ordered by algorithm name
    pub fn iter(&self) -> impl Iterator<Item = &Measurement> {
        self.measurements.values()
    }

    /// The fastest measurement
    pub fn best(&self) -> &Measurement {
        &self.best
    }
}

/// Pick the measurement with the smallest duration.
///
/// Exact ties resolve to the lexicographically first algorithm name, so the
/// winner is deterministic even when every run collapses to the clock's
/// resolution.
pub fn select_best(measurements: &[Measurement]) -> Option<&Measurement> {
    measurements.iter().min_by(|a, b| rank(a, b))
}

fn rank(a: &Measurement, b: &Measurement) -> Ordering {
    a.time_ns
        .cmp(&b.time_ns)
        .then_with(|| a.algorithm.name().cmp(b.algorithm.name()))
}

fn faster(best: Measurement, candidate: Measurement) -> Measurement {
    if rank(&candidate, &best) == Ordering::Less {
        candidate
    } else {
        best
    }
}

/// Time one sort of a private copy of `data`, returning nanoseconds.
///
/// The caller's slice is never mutated and the sorted copy is discarded.
pub fn measure(data: &[i64], algorithm: Algorithm) -> u64 {
    timed_sort(data, algorithm).0
}

/// Like [`measure`], with the algorithm given by name.
///
/// Fails with [`SortError::UnknownAlgorithm`] for names outside the known set.
pub fn measure_by_name(data: &[i64], name: &str) -> Result<u64> {
    let algorithm: Algorithm = name.parse()?;
    Ok(measure(data, algorithm))
}

/// Run all five algorithms over `data` with the default configuration, minus
/// the order check.
pub fn evaluate_all(data: &[i64]) -> ResultSet {
    let measurements = Algorithm::ALL.map(|algorithm| Measurement {
        algorithm,
        time_ns: measure(data, algorithm),
    });
    ResultSet::from_measurements(data.len(), measurements)
}

fn timed_sort(data: &[i64], algorithm: Algorithm) -> (u64, Vec<i64>) {
    let mut scratch = data.to_vec();
    let start = Instant::now();
    algorithm.sort(&mut scratch);
    let elapsed = start.elapsed();
    (u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX), scratch)
}

/// Evaluator applying a [`Config`] to each run
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    config: Config,
}

impl Evaluator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Measure one algorithm, including warm-up and the optional order check
    pub fn measure(&self, data: &[i64], algorithm: Algorithm) -> Result<Measurement> {
        for _ in 0..self.config.warmup_runs {
            let mut warmup = data.to_vec();
            algorithm.sort(&mut warmup);
        }

        let (time_ns, sorted) = timed_sort(data, algorithm);
        debug!(%algorithm, len = data.len(), time_ns, "measured");

        self.check_order(algorithm, &sorted)?;
        Ok(Measurement { algorithm, time_ns })
    }

    fn check_order(&self, algorithm: Algorithm, sorted: &[i64]) -> Result<()> {
        if self.config.verify_order && !is_non_decreasing(sorted) {
            return Err(SortError::OrderViolation { algorithm });
        }
        Ok(())
    }

    /// Measure every algorithm in turn and select the fastest
    pub fn evaluate(&self, data: &[i64]) -> Result<ResultSet> {
        let mut measurements = Algorithm::ALL.map(|algorithm| Measurement { algorithm, time_ns: 0 });
        for slot in &mut measurements {
            *slot = self.measure(data, slot.algorithm)?;
        }

        let results = ResultSet::from_measurements(data.len(), measurements);
        info!(
            len = data.len(),
            winner = %results.best().algorithm,
            time_ns = results.best().time_ns,
            "evaluation complete"
        );
        Ok(results)
    }
}
