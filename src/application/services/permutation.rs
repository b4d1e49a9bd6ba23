//! Permutation service
//!
//! Builds trees within the configured size limit and answers rank queries
//! with the configured strategy.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::ApplicationResult;
use crate::config::Settings;
use crate::domain::{DomainError, PermTree, Rank, Symbol};

/// Algorithm used to turn a rank into a permutation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankStrategy {
    /// Materialize and sort every permutation, then index
    Enumerate,
    /// Factorial number system decoding
    #[default]
    Decode,
    /// Subtree-size guided walk down the tree
    Search,
}

/// Service for building permutation trees and querying them by rank.
#[derive(Debug, Clone, Default)]
pub struct PermutationService {
    settings: Settings,
}

impl PermutationService {
    /// Create a new permutation service.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Build the tree for `elements` with the configured build strategy.
    ///
    /// Inputs longer than `max_symbols` are rejected before any node is allocated.
    #[instrument(level = "debug", skip(self, elements), fields(symbols = elements.len()))]
    pub fn build<S: Symbol>(&self, elements: &[S]) -> ApplicationResult<PermTree<S>> {
        if elements.len() > self.settings.max_symbols {
            return Err(DomainError::TooManySymbols {
                count: elements.len(),
                max: self.settings.max_symbols,
            }
            .into());
        }
        Ok(PermTree::with_strategy(elements, self.settings.build_strategy))
    }

    /// Permutation at `rank`, empty for an invalid rank or an empty tree.
    pub fn permutation<S: Symbol>(&self, tree: &PermTree<S>, rank: Rank) -> Vec<S> {
        debug!("permutation: rank={}, strategy={:?}", rank, self.settings.rank_strategy);
        match self.settings.rank_strategy {
            RankStrategy::Enumerate => tree.index_rank(rank),
            RankStrategy::Decode => tree.decode_rank(rank),
            RankStrategy::Search => tree.search_rank(rank),
        }
    }

    /// Every permutation in sorted order.
    pub fn all<S: Symbol>(&self, tree: &PermTree<S>) -> Vec<Vec<S>> {
        tree.enumerate_all()
    }
}
