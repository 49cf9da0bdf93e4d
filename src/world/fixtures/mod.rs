//! Authored building data.
//!
//! Each submodule is one author's ten-room world, expressed as pure data
//! over the shared [`Building`](crate::Building) abstraction. Connector
//! targets form a ring over the logical building numbers (1 -> 2 -> 3 ->
//! 4 -> 1) so every link stays in range no matter how the order is
//! shuffled.

mod campus;
mod dreamscape;
mod dungeon;
mod mistwood;

use crate::world::building::Building;

/// The gorilla dungeon (authored building 1).
pub fn dungeon() -> Building {
    dungeon::building()
}

/// The campus (authored building 2).
pub fn campus() -> Building {
    campus::building()
}

/// The dreamscape (authored building 3).
pub fn dreamscape() -> Building {
    dreamscape::building()
}

/// The mistwood (authored building 4).
pub fn mistwood() -> Building {
    mistwood::building()
}

/// All four buildings in physical order.
pub fn all() -> Vec<Building> {
    vec![dungeon(), campus(), dreamscape(), mistwood()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;
    use crate::world::room::Direction;

    #[test]
    fn every_building_validates() {
        for building in all() {
            building
                .validate(config::BUILDING_COUNT)
                .unwrap_or_else(|e| panic!("{}: {e}", building.name()));
        }
    }

    #[test]
    fn every_building_has_an_item_room() {
        for building in all() {
            let found = (1..=config::ROOMS_PER_BUILDING as u8)
                .any(|id| building.room(id).is_some_and(|r| r.is_item));
            assert!(found, "{} has no item room", building.name());
        }
    }

    #[test]
    fn connector_targets_form_a_ring() {
        let targets: Vec<u8> = all()
            .iter()
            .map(|b| {
                (1..=config::ROOMS_PER_BUILDING as u8)
                    .find_map(|id| b.room(id).and_then(|r| r.connects_to))
                    .expect("every building has a connector")
            })
            .collect();
        assert_eq!(targets, vec![2, 3, 4, 1]);
    }

    #[test]
    fn start_rooms_are_room_one_in_every_fixture() {
        for building in all() {
            assert_eq!(building.start_room().unwrap(), 1, "{}", building.name());
        }
    }

    #[test]
    fn no_description_is_empty() {
        for building in all() {
            for id in 1..=config::ROOMS_PER_BUILDING as u8 {
                let room = building.room(id).unwrap();
                for d in Direction::all() {
                    assert!(
                        !room.exit(d).description.is_empty(),
                        "{} room {id} direction {:?}",
                        building.name(),
                        d
                    );
                }
            }
        }
    }
}
