//! Pair agenda with index-stable removal.

use itertools::Itertools;

/// Worklist of unordered directory pairs, identified by index.
///
/// Pairs are generated in standard combinatorial order: `(0,1), (0,2), ...,
/// (1,2), ...`. Purging a directory removes every pair mentioning it while
/// leaving the cursor index where it is, so whatever shifts into the cursor
/// slot is the next pair returned by [`current`](Self::current).
#[derive(Debug, Clone)]
pub struct PairWorklist {
    pairs: Vec<(usize, usize)>,
    cursor: usize,
}

impl PairWorklist {
    /// Build the worklist of all `C(n, 2)` pairs for `n` directories.
    pub fn new(n: usize) -> Self {
        Self {
            pairs: (0..n).tuple_combinations().collect(),
            cursor: 0,
        }
    }

    /// The pair under the cursor, or `None` once the worklist is exhausted.
    pub fn current(&self) -> Option<(usize, usize)> {
        self.pairs.get(self.cursor).copied()
    }

    /// Move past the current pair.
    pub fn advance(&mut self) {
        if self.cursor < self.pairs.len() {
            self.cursor += 1;
        }
    }

    /// Remove every pair mentioning `dir` on either side.
    ///
    /// The cursor index is not adjusted. When removed pairs sat behind the
    /// cursor, the survivors that shift under it are never visited.
    ///
    /// Returns how many pairs at or after the cursor will no longer be
    /// processed, counting the current one.
    pub fn purge(&mut self, dir: usize) -> usize {
        let remaining_before = self.remaining();
        self.pairs.retain(|&(a, b)| a != dir && b != dir);
        remaining_before - self.remaining()
    }

    /// Pairs still at or after the cursor.
    pub fn remaining(&self) -> usize {
        self.pairs.len().saturating_sub(self.cursor)
    }

    /// Check whether there is nothing left to process.
    pub fn is_done(&self) -> bool {
        self.cursor >= self.pairs.len()
    }
}
