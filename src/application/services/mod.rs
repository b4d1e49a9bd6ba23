//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.

mod permutation;

pub use permutation::{PermutationService, RankStrategy};
