//! # World Module
//!
//! The building registry, the room/navigation data model, and the
//! randomized logical-to-physical building order.
//!
//! Everything here is either immutable after construction (the buildings)
//! or mutated only through [`World::reshuffle`] (the order). The world is
//! an explicitly owned aggregate handed to the engine, never a process
//! global.

pub mod building;
pub mod fixtures;
pub mod order;
pub mod room;

pub use building::{Building, NavResult};
pub use order::BuildingOrder;
pub use room::{Direction, Exit, ExitTarget, Room};

use crate::{WarrenError, WarrenResult};
use log::info;
use rand::Rng;

/// The complete world: every building plus the current building order.
#[derive(Debug, Clone)]
pub struct World {
    buildings: Vec<Building>,
    order: BuildingOrder,
}

impl World {
    /// Builds and validates a world, then shuffles the building order.
    ///
    /// Every building is validated eagerly; a data-integrity fault here
    /// means the server refuses to start.
    pub fn new<R: Rng>(buildings: Vec<Building>, rng: &mut R) -> WarrenResult<Self> {
        let order = BuildingOrder::shuffle(buildings.len(), rng);
        Self::with_order(buildings, order)
    }

    /// Builds and validates a world with an explicit building order.
    pub fn with_order(buildings: Vec<Building>, order: BuildingOrder) -> WarrenResult<Self> {
        if buildings.is_empty() {
            return Err(WarrenError::DataIntegrity("world has no buildings".into()));
        }
        if order.len() != buildings.len() {
            return Err(WarrenError::DataIntegrity(format!(
                "building order covers {} buildings, world has {}",
                order.len(),
                buildings.len()
            )));
        }
        for building in &buildings {
            building.validate(buildings.len())?;
        }
        info!("world initialized, building order: {}", order.display());
        Ok(Self { buildings, order })
    }

    pub fn building_count(&self) -> usize {
        self.buildings.len()
    }

    /// Looks up a building by physical index.
    pub fn building(&self, physical: usize) -> &Building {
        &self.buildings[physical]
    }

    pub fn order(&self) -> &BuildingOrder {
        &self.order
    }

    /// Recomputes the building order with a fresh shuffle.
    ///
    /// This is the reset side effect: it changes every player's
    /// logical-building view at once.
    pub fn reshuffle<R: Rng>(&mut self, rng: &mut R) {
        self.order = BuildingOrder::shuffle(self.buildings.len(), rng);
        info!("new building order: {}", self.order.display());
    }

    /// Resolves a 0-based logical building index to its physical index.
    pub fn logical_to_physical(&self, logical: usize) -> usize {
        self.order.logical_to_physical(logical)
    }

    /// The 0-based logical index currently shown for a physical building.
    pub fn physical_to_logical(&self, physical: usize) -> usize {
        self.order.physical_to_logical(physical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn authored_world_validates_and_shuffles() {
        let mut rng = StdRng::seed_from_u64(99);
        let world = World::new(fixtures::all(), &mut rng).unwrap();
        assert_eq!(world.building_count(), crate::config::BUILDING_COUNT);
    }

    #[test]
    fn order_length_must_match_building_count() {
        let result = World::with_order(fixtures::all(), BuildingOrder::identity(3));
        assert!(matches!(result, Err(WarrenError::DataIntegrity(_))));
    }

    #[test]
    fn reshuffle_keeps_the_bijection() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut world = World::new(fixtures::all(), &mut rng).unwrap();
        for _ in 0..20 {
            world.reshuffle(&mut rng);
            for logical in 0..world.building_count() {
                let physical = world.logical_to_physical(logical);
                assert_eq!(world.physical_to_logical(physical), logical);
            }
        }
    }
}
