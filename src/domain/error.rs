//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the permutation tree's limits.
///
/// Rank lookups never produce these: an invalid rank yields an empty
/// permutation instead.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("too many symbols: {count} exceeds the limit of {max}")]
    TooManySymbols { count: usize, max: usize },
}
