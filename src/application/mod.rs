//! Application layer: services and use cases
//!
//! This layer applies configured limits and strategies on top of the domain.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
