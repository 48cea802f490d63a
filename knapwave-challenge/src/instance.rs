use crate::{KnapsackError, KnapsackResult};
use anyhow::{anyhow, Result};
use rand::{
    rngs::{SmallRng, StdRng},
    Rng, SeedableRng,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Item {
    pub weight: u32,
    pub profit: u32,
}

impl Item {
    /// Item 0, standing for "no items considered".
    pub const SENTINEL: Item = Item {
        weight: 0,
        profit: 0,
    };

    pub fn new(weight: u32, profit: u32) -> Self {
        Self { weight, profit }
    }
}

impl From<(u32, u32)> for Item {
    fn from((weight, profit): (u32, u32)) -> Self {
        Self { weight, profit }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Difficulty {
    pub num_items: usize,
    /// Capacity as a percentage of the total item weight.
    pub budget: u32,
}

impl From<Vec<i32>> for Difficulty {
    fn from(arr: Vec<i32>) -> Self {
        Self {
            num_items: arr[0] as usize,
            budget: arr[1] as u32,
        }
    }
}

impl Into<Vec<i32>> for Difficulty {
    fn into(self) -> Vec<i32> {
        vec![self.num_items as i32, self.budget as i32]
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    pub capacity: u32,
    pub items: Vec<Item>,
}

impl Instance {
    /// Builds an instance from `(weight, profit)` pairs.
    pub fn new<I>(capacity: u32, items: I) -> Self
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        Self {
            capacity,
            items: items.into_iter().map(Item::from).collect(),
        }
    }

    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    /// Item by its 1-based index. Index 0 is the sentinel.
    pub fn item(&self, i: usize) -> Item {
        match i {
            0 => Item::SENTINEL,
            i => self.items[i - 1],
        }
    }

    pub fn generate_instance(seed: &[u8; 32], difficulty: &Difficulty) -> Result<Self> {
        if difficulty.budget > 100 {
            return Err(anyhow!(
                "Budget ({}) must be a percentage between 0 and 100",
                difficulty.budget
            ));
        }
        let mut rng = SmallRng::from_seed(StdRng::from_seed(seed.clone()).gen());

        // Weights in [1, 50], profits in [1, 100]
        let items: Vec<Item> = (0..difficulty.num_items)
            .map(|_| Item::new(rng.gen_range(1..=50), rng.gen_range(1..=100)))
            .collect();

        let total_weight: u64 = items.iter().map(|item| item.weight as u64).sum();
        let capacity = u32::try_from(total_weight * difficulty.budget as u64 / 100)
            .map_err(|_| anyhow!("Capacity does not fit in 32 bits"))?;

        Ok(Self { capacity, items })
    }

    /// Writes the instance in the whitespace separated text format read by
    /// [`Instance::from_str`].
    pub fn to_text(&self) -> String {
        let header = format!("{} {}\n", self.num_items(), self.capacity);
        self.items
            .iter()
            .fold(header, |mut text, item| {
                text.push_str(&format!("{} {}\n", item.weight, item.profit));
                text
            })
    }
}

fn next_number<'a, T, I>(tokens: &mut I, what: impl Fn() -> String) -> KnapsackResult<T>
where
    T: FromStr,
    I: Iterator<Item = &'a str>,
{
    let token = tokens
        .next()
        .ok_or_else(|| KnapsackError::InvalidInput(format!("missing {}", what())))?;
    token.parse::<T>().map_err(|_| {
        KnapsackError::InvalidInput(format!("could not read {} from '{}'", what(), token))
    })
}

impl FromStr for Instance {
    type Err = KnapsackError;

    /// Parses `N C` followed by `N` pairs of `weight profit`.
    fn from_str(s: &str) -> KnapsackResult<Self> {
        let mut tokens = s.split_whitespace();
        let header = || "number of objects or capacity".to_string();
        let num_items: usize = next_number(&mut tokens, header)?;
        let capacity: u32 = next_number(&mut tokens, header)?;

        let mut items = Vec::new();
        for k in 1..=num_items {
            let weight = next_number(&mut tokens, || format!("weight of item {}", k))?;
            let profit = next_number(&mut tokens, || format!("profit of item {}", k))?;
            items.push(Item { weight, profit });
        }

        let trailing = tokens.count();
        if trailing > 0 {
            log::warn!("ignoring {} trailing tokens after item {}", trailing, num_items);
        }
        Ok(Self { capacity, items })
    }
}
