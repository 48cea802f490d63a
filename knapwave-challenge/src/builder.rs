use crate::{Instance, KnapsackResult, Table, Wavefront};

/// Fills the dynamic programming table for `instance` along diagonals.
///
/// Cell `(i, j)` is the best profit using items `1..=i` within weight `j`:
/// item `i` is either skipped, inheriting `(i - 1, j)`, or taken on top of
/// `(i - 1, j - weight)` when it fits. Cell `(N, C)` holds the optimum.
pub fn build_table(instance: &Instance) -> KnapsackResult<Table> {
    let num_items = instance.num_items();
    let capacity = instance.capacity as usize;
    let mut table = Table::zeroed(num_items, capacity)?;

    let cells = &mut table.cells;
    Wavefront::new(num_items, capacity).sweep(|_, i, j| {
        let item = instance.item(i);
        let weight = item.weight as usize;
        let skip = cells[[i - 1, j]];
        cells[[i, j]] = if weight > j {
            skip
        } else {
            skip.max(item.profit as u64 + cells[[i - 1, j - weight]])
        };
    });

    log::debug!(
        "built {} x {} table, optimal profit {}",
        num_items + 1,
        capacity + 1,
        table.optimal_value()
    );
    Ok(table)
}
