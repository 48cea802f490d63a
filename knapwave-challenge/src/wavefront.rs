//! Diagonal traversal over the `(num_items + 1) x (capacity + 1)` table.
//!
//! Cells are visited along anti-diagonals `w = i + j` in increasing `w`.
//! Every cell only reads row `i - 1` at columns `<= j`, which always lie on
//! an earlier diagonal, so any order within a single diagonal is valid.
//! Row 0 is the base case and is never visited.
//!
//! The sweep is split in three phases by where a diagonal meets the table
//! boundary:
//!
//! * [`Phase::Leading`]: the diagonal still starts in column 0 and has not
//!   reached the last row, `i = 1..=w`.
//! * [`Phase::Full`]: the diagonal spans every item row, `i = 1..=N`.
//! * [`Phase::Trailing`]: the diagonal has reached column `C` and shrinks
//!   back towards the single cell `(N, C)`.
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Leading,
    Full,
    Trailing,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Phase::Leading, Phase::Full, Phase::Trailing];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wavefront {
    pub num_items: usize,
    pub capacity: usize,
}

#[allow(clippy::reversed_empty_ranges)]
const EMPTY: RangeInclusive<usize> = 1..=0;

impl Wavefront {
    pub fn new(num_items: usize, capacity: usize) -> Self {
        Self {
            num_items,
            capacity,
        }
    }

    /// Diagonals `w` owned by `phase`. The three ranges are disjoint and
    /// together cover `1..=N+C` whenever `N > 0`.
    pub fn diagonals(&self, phase: Phase) -> RangeInclusive<usize> {
        let (n, c) = (self.num_items, self.capacity);
        if n == 0 {
            return EMPTY;
        }
        match phase {
            Phase::Leading => 1..=(n - 1).min(c),
            Phase::Full => n..=c,
            Phase::Trailing => match c.checked_add(1) {
                Some(first) => first..=n.saturating_add(c),
                None => EMPTY,
            },
        }
    }

    /// Item rows `i` visited on diagonal `w` during `phase`.
    pub fn rows(&self, phase: Phase, w: usize) -> RangeInclusive<usize> {
        let (n, c) = (self.num_items, self.capacity);
        match phase {
            Phase::Leading => 1..=w.min(n),
            Phase::Full => 1..=n,
            Phase::Trailing => w.saturating_sub(c).max(1)..=n.min(w),
        }
    }

    /// Visits every cell `(i, j)` with `1 <= i <= N` and `0 <= j <= C`
    /// exactly once, diagonal by diagonal.
    pub fn sweep<F>(&self, mut visit: F)
    where
        F: FnMut(Phase, usize, usize),
    {
        for phase in Phase::ALL {
            let diagonals = self.diagonals(phase);
            log::debug!(
                "wavefront {:?}: diagonals {:?} (N = {}, C = {})",
                phase,
                diagonals,
                self.num_items,
                self.capacity
            );
            for w in diagonals {
                for i in self.rows(phase, w) {
                    visit(phase, i, w - i);
                }
            }
        }
    }

    /// Number of cells a full sweep visits, saturating at `usize::MAX`.
    pub fn num_cells(&self) -> usize {
        self.num_items
            .saturating_mul(self.capacity.saturating_add(1))
    }
}
