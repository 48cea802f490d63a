use crate::{Instance, KnapsackError, KnapsackResult, Solution, Table};

/// Walks back from `(N, C)` and marks the items of one optimal solution.
///
/// An item is only marked when its row changes the value of the cell, so
/// of several optimal selections the one excluding later items wins.
pub fn reconstruct(table: &Table, instance: &Instance) -> KnapsackResult<Solution> {
    let num_items = instance.num_items();
    let capacity = instance.capacity as usize;
    if table.num_items() != num_items || table.capacity() != capacity {
        return Err(KnapsackError::InvalidInput(format!(
            "table of {} items and capacity {} does not match instance of {} items and capacity {}",
            table.num_items(),
            table.capacity(),
            num_items,
            capacity
        )));
    }

    let mut solution = Solution::empty(num_items);
    let (mut i, mut j) = (num_items, capacity);
    // Column 0 only holds profit when zero-weight items contribute to it
    while i > 0 && (j > 0 || table.get(i, 0) > 0) {
        if table.get(i, j) != table.get(i - 1, j) {
            let weight = instance.item(i).weight as usize;
            j = j.checked_sub(weight).ok_or_else(|| {
                KnapsackError::InvalidInput(format!(
                    "item {} of weight {} does not fit in remaining capacity {}",
                    i, weight, j
                ))
            })?;
            solution.flags[i - 1] = true;
        }
        i -= 1;
    }
    Ok(solution)
}
