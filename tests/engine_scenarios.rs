//! End-to-end tests for the movement/session engine: join, movement,
//! connector traversal, reset, capacity, and the win condition.

use rand::rngs::StdRng;
use rand::SeedableRng;
use warren::world::room::ExitTarget;
use warren::{
    config, Building, BuildingOrder, Direction, Engine, Reply, Room, World,
};

/// A scripted ten-room building. Room 1 (start) leads north to room 2;
/// room 2 leads north to the item room 3 and east through its connector.
/// Descriptions are prefixed with `name` so tests can tell buildings apart.
fn scripted_building(name: &str, connects_to: u8) -> Building {
    let mut rooms = vec![
        Room::new(1)
            .north(&format!("{name}: you walk north into the corridor"), ExitTarget::Room(2))
            .south(&format!("{name}: a wall"), ExitTarget::Blocked)
            .east(&format!("{name}: a wall"), ExitTarget::Blocked)
            .west(&format!("{name}: a wall"), ExitTarget::Blocked)
            .start(),
        Room::new(2)
            .north(&format!("{name}: a glow ahead"), ExitTarget::Room(3))
            .south(&format!("{name}: back to the entrance"), ExitTarget::Room(1))
            .east(&format!("{name}: a door out of the building"), ExitTarget::Connector)
            .west(&format!("{name}: a wall"), ExitTarget::Blocked)
            .connector(connects_to),
        Room::new(3)
            .north(&format!("{name}: nothing beyond"), ExitTarget::Blocked)
            .south(&format!("{name}: back into the corridor"), ExitTarget::Room(2))
            .east(&format!("{name}: nothing beyond"), ExitTarget::Blocked)
            .west(&format!("{name}: nothing beyond"), ExitTarget::Blocked)
            .item(),
    ];
    for id in 4..=10u8 {
        rooms.push(
            Room::new(id)
                .north("sealed", ExitTarget::Blocked)
                .south("sealed", ExitTarget::Blocked)
                .east("sealed", ExitTarget::Blocked)
                .west("sealed", ExitTarget::Blocked),
        );
    }
    Building::new(name, rooms)
}

fn scripted_world(order: BuildingOrder) -> World {
    let buildings = vec![
        scripted_building("alpha", 3),
        scripted_building("beta", 3),
        scripted_building("gamma", 3),
        scripted_building("delta", 3),
    ];
    World::with_order(buildings, order).unwrap()
}

fn engine(order: BuildingOrder, seed: u64) -> Engine {
    Engine::with_rng(scripted_world(order), StdRng::seed_from_u64(seed))
}

/// Scenario A: with the identity order, a join lands in some building's
/// start room; moving north updates the session to room 2 and returns the
/// start room's north exit text.
#[test]
fn moving_updates_room_and_returns_the_departure_description() {
    let mut eng = engine(BuildingOrder::identity(4), 11);
    let (id, _) = eng.join("10.0.0.1:1234").unwrap();

    let physical = eng.session(id).unwrap().physical_building;
    let expected = eng
        .world()
        .building(physical)
        .describe(1, Direction::North)
        .unwrap()
        .to_string();

    let reply = eng.move_player(id, Direction::North).unwrap();
    assert_eq!(eng.session(id).unwrap().current_room, 2);
    assert_eq!(
        reply,
        Reply::Description {
            text: expected,
            won: false
        }
    );
}

/// Scenario B: a connector room pointing at logical building 3 moves the
/// player to whatever physical building the order currently assigns to
/// logical 3, landing in its start room.
#[test]
fn connector_traversal_resolves_through_the_building_order() {
    // Logical 3 (0-based index 2) maps to physical 1 ("beta").
    let order = BuildingOrder::from_permutation(vec![3, 2, 1, 0]).unwrap();
    let mut eng = engine(order, 12);
    let (id, _) = eng.join("10.0.0.1:1234").unwrap();

    eng.move_player(id, Direction::North).unwrap(); // into the connector room
    let reply = eng.move_player(id, Direction::East).unwrap();

    let session = eng.session(id).unwrap();
    assert_eq!(session.physical_building, 1);
    assert_eq!(session.current_room, 1); // beta's start room
    assert!(reply.text().contains("beta:"));
    assert!(reply.text().starts_with("Room 1 (Building 3)"));
}

/// Scenario C: a join at the player cap is rejected without allocating a
/// session.
#[test]
fn join_at_capacity_is_rejected() {
    let mut eng = engine(BuildingOrder::identity(4), 13);
    for i in 0..config::MAX_PLAYERS {
        eng.join(&format!("10.0.0.{i}:1000")).unwrap();
    }
    assert!(eng.join("10.0.1.1:1000").is_err());
    assert_eq!(eng.player_count(), config::MAX_PLAYERS);
}

/// Scenario D: a reset by one player reshuffles the order globally, and a
/// different player's next connector traversal observes the new mapping.
#[test]
fn reset_reshuffles_the_order_for_everyone() {
    let mut eng = engine(BuildingOrder::identity(4), 14);
    let (mover, _) = eng.join("10.0.0.1:1000").unwrap();
    let (resetter, _) = eng.join("10.0.0.2:1000").unwrap();

    // Park the first player in a connector room before the reset.
    eng.move_player(mover, Direction::North).unwrap();
    let target_logical = {
        let session = eng.session(mover).unwrap();
        let room = eng
            .world()
            .building(session.physical_building)
            .room(session.current_room)
            .unwrap();
        assert!(room.is_connector);
        room.connects_to.unwrap() as usize - 1
    };

    eng.reset(resetter).unwrap();

    let expected_physical = eng.world().logical_to_physical(target_logical);
    eng.move_player(mover, Direction::East).unwrap();
    assert_eq!(
        eng.session(mover).unwrap().physical_building,
        expected_physical
    );
}

/// Scenario E: landing in an item room surfaces the win flag alongside the
/// normal description.
#[test]
fn entering_the_item_room_signals_a_win() {
    let mut eng = engine(BuildingOrder::identity(4), 15);
    let (id, _) = eng.join("10.0.0.1:1234").unwrap();

    let no_win = eng.move_player(id, Direction::North).unwrap();
    assert!(matches!(no_win, Reply::Description { won: false, .. }));

    let win = eng.move_player(id, Direction::North).unwrap();
    let Reply::Description { text, won } = win else {
        panic!("expected a description reply");
    };
    assert!(won);
    assert!(text.contains("a glow ahead"));
    assert_eq!(eng.session(id).unwrap().current_room, 3);
}

/// Reset keeps the player's id and re-places them in a start room.
#[test]
fn reset_reuses_the_player_id() {
    let mut eng = engine(BuildingOrder::identity(4), 16);
    let (id, _) = eng.join("10.0.0.1:1234").unwrap();
    eng.move_player(id, Direction::North).unwrap();

    let reply = eng.reset(id).unwrap();
    assert_eq!(eng.player_count(), 1);
    let session = eng.session(id).unwrap();
    assert_eq!(session.player_id, id);
    assert_eq!(session.current_room, 1);
    assert!(reply.text().starts_with("Room 1 (Building "));
}

/// The authored world supports a full join-move-reset round trip.
#[test]
fn authored_fixtures_play_end_to_end() {
    let world = World::with_order(
        warren::world::fixtures::all(),
        BuildingOrder::identity(config::BUILDING_COUNT),
    )
    .unwrap();
    let mut eng = Engine::with_rng(world, StdRng::seed_from_u64(17));

    let (id, join_reply) = eng.join("10.0.0.1:1234").unwrap();
    assert!(join_reply.text().starts_with("Room 1 (Building "));

    // Every authored building's start room opens to the north.
    let reply = eng.move_player(id, Direction::North).unwrap();
    assert!(matches!(reply, Reply::Description { .. }));
    assert_eq!(eng.session(id).unwrap().current_room, 2);

    let reply = eng.reset(id).unwrap();
    assert!(reply.text().starts_with("Room 1 (Building "));
}
