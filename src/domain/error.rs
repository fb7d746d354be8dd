//! Domain validation errors for core domain types.
//!
//! These errors are returned by `try_new` constructors that validate inputs.

use thiserror::Error;

use super::price::{MAX_SAMPLE_COUNT, MIN_SAMPLE_COUNT};

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Price requests must name a commodity (or the `all` marker).
    #[error("commodity cannot be empty")]
    EmptyCommodity,

    /// Price requests must carry a region code.
    #[error("region cannot be empty")]
    EmptyRegion,

    /// The upstream source caps historical samples per request.
    #[error(
        "count must be between {min} and {max}, got {count}",
        min = MIN_SAMPLE_COUNT,
        max = MAX_SAMPLE_COUNT
    )]
    CountOutOfRange {
        /// The invalid count that was provided.
        count: u32,
    },
}
