//! Prelude - commonly used types and functions

pub use crate::sort;
pub use crate::{
    evaluate_all, measure, select_best, Algorithm, Config, Evaluator, Measurement, ResultSet,
    SortError,
};
