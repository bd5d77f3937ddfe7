//! Algorithm identifiers and dispatch

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SortError;
use crate::sort;

/// The closed set of sorts the evaluator knows how to run.
///
/// Variants are declared in lexicographic order of their display names, so the
/// derived `Ord` doubles as the canonical tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Heap,
    Insertion,
    Merge,
    Quick,
    Shell,
}

impl Algorithm {
    /// Every algorithm, in the order an evaluation run executes them
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Insertion,
        Algorithm::Shell,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
    ];

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Heap => "Heap Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Shell => "Shell Sort",
        }
    }

    /// Asymptotic cost as (best, average, worst)
    pub fn complexity(&self) -> (&'static str, &'static str, &'static str) {
        match self {
            Algorithm::Insertion => ("O(n)", "O(n²)", "O(n²)"),
            Algorithm::Shell => ("O(n log n)", "O(n^1.5)", "O(n²)"),
            Algorithm::Merge | Algorithm::Heap => ("O(n log n)", "O(n log n)", "O(n log n)"),
            Algorithm::Quick => ("O(n log n)", "O(n log n)", "O(n²)"),
        }
    }

    /// Short description of the implementation policy
    pub fn policy(&self) -> &'static str {
        match self {
            Algorithm::Insertion => "shift-and-insert, no extra storage",
            Algorithm::Shell => "halving gaps n/2 .. 1",
            Algorithm::Merge => "top-down, one n-sized buffer per call",
            Algorithm::Quick => "median-of-three pivot, Hoare partition",
            Algorithm::Heap => "in-place max-heap, iterative sift-down",
        }
    }

    /// Sort `data` in place with this algorithm
    pub fn sort(&self, data: &mut [i64]) {
        match self {
            Algorithm::Insertion => sort::insertionsort(data),
            Algorithm::Shell => sort::shellsort(data),
            Algorithm::Merge => sort::mergesort(data),
            Algorithm::Quick => sort::quicksort(data),
            Algorithm::Heap => sort::heapsort(data),
        }
    }

    /// Return a sorted copy of `data`, leaving the input untouched
    pub fn sorted(&self, data: &[i64]) -> Vec<i64> {
        let mut out = data.to_vec();
        self.sort(&mut out);
        out
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    /// Accepts display names and short forms, ignoring case, spaces, `_` and `-`:
    /// `"Quick Sort"`, `"quick_sort"`, `"quicksort"` and `"quick"` all match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();
        let key = key.strip_suffix("sort").unwrap_or(&key);

        match key {
            "insertion" => Ok(Algorithm::Insertion),
            "shell" => Ok(Algorithm::Shell),
            "merge" => Ok(Algorithm::Merge),
            "quick" => Ok(Algorithm::Quick),
            "heap" => Ok(Algorithm::Heap),
            _ => Err(SortError::unknown(s)),
        }
    }
}
