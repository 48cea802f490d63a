use crate::{build_table, Instance};
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusion vector: `flags[k]` is set when item `k + 1` is selected.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub flags: Vec<bool>,
}

impl Solution {
    pub fn empty(num_items: usize) -> Self {
        Self {
            flags: vec![false; num_items],
        }
    }

    /// 1-based indices of the selected items.
    pub fn selected_items(&self) -> impl Iterator<Item = usize> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter_map(|(k, &included)| if included { Some(k + 1) } else { None })
    }
}

impl From<Vec<bool>> for Solution {
    fn from(flags: Vec<bool>) -> Self {
        Self { flags }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (k, &included) in self.flags.iter().enumerate() {
            if k > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", included as u8)?;
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub total_weight: u64,
    pub total_profit: u64,
}

impl Instance {
    pub fn evaluate_solution(&self, solution: &Solution) -> Result<Evaluation> {
        if solution.flags.len() != self.num_items() {
            return Err(anyhow!(
                "Invalid number of flags. Expected: {}, Actual: {}",
                self.num_items(),
                solution.flags.len()
            ));
        }
        let (total_weight, total_profit) = solution
            .selected_items()
            .map(|i| self.item(i))
            .fold((0u64, 0u64), |(weight, profit), item| {
                (weight + item.weight as u64, profit + item.profit as u64)
            });
        if total_weight > self.capacity as u64 {
            return Err(anyhow!(
                "Total weight ({}) exceeded capacity ({})",
                total_weight,
                self.capacity
            ));
        }
        Ok(Evaluation {
            total_weight,
            total_profit,
        })
    }

    pub fn verify_solution(&self, solution: &Solution) -> Result<()> {
        let evaluation = self.evaluate_solution(solution)?;
        let optimal_value = build_table(self)?.optimal_value();
        if evaluation.total_profit == optimal_value {
            Ok(())
        } else {
            Err(anyhow!(
                "Total profit ({}) does not match optimal profit ({})",
                evaluation.total_profit,
                optimal_value
            ))
        }
    }
}
