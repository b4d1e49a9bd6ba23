//! Direct rank decoding via the factorial number system.

use tracing::{instrument, trace};

use crate::domain::tree::{factorial, PermTree, Rank, Symbol};

impl<S: Symbol> PermTree<S> {
    /// 0-based index for `rank`, or None if it is outside `[1, n!]`.
    pub(crate) fn rank_offset(&self, rank: Rank) -> Option<u64> {
        if self.is_empty() {
            return None;
        }
        let rank = u64::try_from(rank).ok()?;
        (1..=self.total_permutations())
            .contains(&rank)
            .then(|| rank - 1)
    }

    /// Permutation at `rank` without enumerating any other permutation.
    ///
    /// `rank - 1` is expanded in mixed radix (n-1)!, ..., 1!, 0!; each digit
    /// picks the d-th symbol still unused. Symbols are taken from the root's
    /// children, so ranks follow construction order: they agree with
    /// `enumerate_all` only when the input was built in ascending order.
    ///
    /// Empty when the tree is empty or `rank` is out of range.
    #[instrument(level = "debug", skip(self))]
    pub fn decode_rank(&self, rank: Rank) -> Vec<S> {
        let Some(mut idx) = self.rank_offset(rank) else {
            return Vec::new();
        };

        let mut elements: Vec<S> = self.root_symbols().into_iter().cloned().collect();
        let mut result = Vec::with_capacity(elements.len());

        while !elements.is_empty() {
            let fact = factorial(elements.len() - 1);
            // idx < |elements|! keeps the digit in bounds
            let digit = usize::try_from(idx / fact).unwrap_or(usize::MAX);
            if digit >= elements.len() {
                return Vec::new();
            }
            trace!("decode digit={} of {}", digit, elements.len());
            result.push(elements.remove(digit));
            idx %= fact;
        }

        result
    }
}
