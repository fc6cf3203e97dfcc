//! Generic operations over finite, ordered sequences.
//!
//! Every operation consumes an `IntoIterator` and is parameterized by a
//! caller-supplied transform or predicate. Each operation also has a `try_`
//! form whose transform may fail with a caller-chosen error type; the
//! operation stops at the first failure and returns it unchanged, producing
//! no partial result.
//!
//! Ordering guarantees are part of the contract:
//! - `sum` folds left-to-right from the additive identity
//! - `min_by_key`/`max_by_key` return the first element reaching the
//!   extremal key
//! - `distinct` keeps first occurrences in input order
//! - `sorted_by_key`/`sorted_by_key_desc` are stable
//! - elements within a [`Group`] keep input order, while the relative order
//!   of groups is unspecified

pub mod aggregate;
pub mod distinct;
pub mod group;
pub mod sort;

pub use aggregate::{
    max_by_key, min_by_key, sum, sum_by, try_max_by_key, try_min_by_key, try_sum_by,
};
pub use distinct::{
    count_distinct, count_distinct_by, count_where, distinct, distinct_by,
    try_count_distinct_by, try_count_where, try_distinct_by,
};
pub use group::{group_by, try_group_by, Group};
pub use sort::{sorted_by_key, sorted_by_key_desc, try_sorted_by_key, try_sorted_by_key_desc};
