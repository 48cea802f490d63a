use crate::{KnapsackError, KnapsackResult};
use ndarray::{Array2, ArrayView1, ArrayView2, Axis};
use std::fmt;

/// Best achievable profit for every `(item prefix, capacity)` pair.
///
/// Row `i` holds the values using items `1..=i`, column `j` the capacity
/// `j`. The table is filled once by [`build_table`](crate::build_table)
/// and is read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub(crate) cells: Array2<u64>,
}

impl Table {
    /// Allocates an all-zero table with `num_items + 1` rows and
    /// `capacity + 1` columns.
    pub fn zeroed(num_items: usize, capacity: usize) -> KnapsackResult<Self> {
        let failure = || KnapsackError::AllocationFailure {
            rows: num_items.saturating_add(1),
            columns: capacity.saturating_add(1),
        };
        let rows = num_items.checked_add(1).ok_or_else(failure)?;
        let columns = capacity.checked_add(1).ok_or_else(failure)?;
        let len = rows
            .checked_mul(columns)
            .filter(|&len| len <= isize::MAX as usize / std::mem::size_of::<u64>())
            .ok_or_else(failure)?;

        let mut buffer: Vec<u64> = Vec::new();
        buffer.try_reserve_exact(len).map_err(|_| failure())?;
        buffer.resize(len, 0);

        let cells = Array2::from_shape_vec((rows, columns), buffer).map_err(|_| failure())?;
        Ok(Self { cells })
    }

    pub fn num_items(&self) -> usize {
        self.cells.nrows() - 1
    }

    pub fn capacity(&self) -> usize {
        self.cells.ncols() - 1
    }

    pub fn get(&self, i: usize, j: usize) -> u64 {
        self.cells[[i, j]]
    }

    /// Value of cell `(N, C)`.
    pub fn optimal_value(&self) -> u64 {
        self.get(self.num_items(), self.capacity())
    }

    pub fn row(&self, i: usize) -> ArrayView1<'_, u64> {
        self.cells.row(i)
    }

    pub fn view(&self) -> ArrayView2<'_, u64> {
        self.cells.view()
    }

    pub fn to_rows(&self) -> Vec<Vec<u64>> {
        self.cells
            .axis_iter(Axis(0))
            .map(|row| row.to_vec())
            .collect()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.axis_iter(Axis(0)) {
            for value in row.iter() {
                write!(f, "{:4}", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
