//! SortScope - Sorting Algorithm Performance Evaluator
//!
//! Five classic in-memory sorts over `i64` sequences, plus a harness that times
//! each of them on identical input and reports the fastest.
//!
//! # Quick Start
//!
//! ```rust
//! use sortscope_core::{evaluate_all, sort, Algorithm};
//!
//! let mut data = vec![3, 1, 4, 1, 5, 9, 2, 6];
//! sort::quicksort(&mut data);
//! assert_eq!(data, vec![1, 1, 2, 3, 4, 5, 6, 9]);
//!
//! let results = evaluate_all(&[5, 4, 3, 2, 1]);
//! assert_eq!(results.len(), Algorithm::ALL.len());
//! println!("Winner: {} ({}ns)", results.best().algorithm, results.best().time_ns);
//! ```

pub mod algorithm;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod prelude;
pub mod sort;

pub use algorithm::Algorithm;
pub use config::Config;
pub use error::{Result, SortError};
pub use evaluator::{
    evaluate_all, measure, measure_by_name, select_best, Evaluator, Measurement, ResultSet,
};
