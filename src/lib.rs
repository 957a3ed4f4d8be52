//! k-th largest selection over integer collections.
//!
//! Ranks are 1-indexed and duplicates occupy separate ranks, so the k-th
//! largest of `[5, 5, 3]` is `5` for both k = 1 and k = 2.

pub mod error;
pub mod input;
pub mod selector;

pub use error::{ParseError, SelectError, SelectResult};
pub use input::parse_values;
pub use selector::{kth_largest, kth_largest_with, resolve_rank, select, Selection, Strategy};
