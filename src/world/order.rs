//! The logical-to-physical building permutation.
//!
//! Players only ever see *logical* building numbers; the registry is
//! indexed physically. Reshuffling the permutation at startup and on reset
//! is what varies the world layout between runs.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A permutation mapping logical building indices (0-based) to physical
/// storage indices.
///
/// Always a bijection: every logical index maps to exactly one physical
/// index and vice versa. A reshuffle produces a fresh permutation rather
/// than mutating the old one in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingOrder {
    order: Vec<usize>,
}

impl BuildingOrder {
    /// The identity permutation: logical i maps to physical i.
    pub fn identity(building_count: usize) -> Self {
        Self {
            order: (0..building_count).collect(),
        }
    }

    /// Builds an order from an explicit permutation, rejecting anything
    /// that is not a bijection over `0..len`.
    pub fn from_permutation(order: Vec<usize>) -> crate::WarrenResult<Self> {
        let mut seen = vec![false; order.len()];
        for &physical in &order {
            if physical >= order.len() || seen[physical] {
                return Err(crate::WarrenError::DataIntegrity(format!(
                    "building order {order:?} is not a permutation"
                )));
            }
            seen[physical] = true;
        }
        Ok(Self { order })
    }

    /// A uniformly random permutation, produced by a Fisher-Yates shuffle
    /// with a properly decrementing range.
    pub fn shuffle<R: Rng>(building_count: usize, rng: &mut R) -> Self {
        let mut order: Vec<usize> = (0..building_count).collect();
        for i in (1..building_count).rev() {
            let j = rng.gen_range(0..=i);
            order.swap(i, j);
        }
        Self { order }
    }

    /// Number of buildings covered by this permutation.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Resolves a 0-based logical index to its physical storage index.
    ///
    /// # Panics
    ///
    /// Panics if `logical` is out of range; callers index with values
    /// already validated against the building count.
    pub fn logical_to_physical(&self, logical: usize) -> usize {
        self.order[logical]
    }

    /// Inverse lookup: the 0-based logical index currently assigned to a
    /// physical storage index. Used only for display.
    pub fn physical_to_logical(&self, physical: usize) -> usize {
        self.order
            .iter()
            .position(|&p| p == physical)
            .unwrap_or(physical)
    }

    /// Renders the mapping for logs, 1-based as players see it:
    /// `B1->pos2 B2->pos4 ...`
    pub fn display(&self) -> String {
        self.order
            .iter()
            .enumerate()
            .map(|(logical, physical)| format!("B{}->pos{}", logical + 1, physical + 1))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
