//! Domain layer: the permutation tree and its rank algorithms
//!
//! This layer is independent of external concerns (no I/O, no config loading).

pub mod arena;
pub mod builder;
pub mod decode;
pub mod display;
pub mod enumerate;
pub mod error;
pub mod search;
pub mod tree;

pub use arena::{PermArena, PermNode};
pub use builder::{BuildStrategy, TreeBuilder};
pub use display::TreeNodeConvert;
pub use error::DomainError;
pub use tree::{factorial, PermTree, Rank, Symbol};
