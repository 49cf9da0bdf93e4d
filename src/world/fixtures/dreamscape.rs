//! The dreamscape: mirrors, flying chickens, and an ice cream truck with no
//! line. The golden chicken (room 10) is the goal; a missed door (room 8)
//! leads to the next building.

use crate::world::building::Building;
use crate::world::room::{ExitTarget::*, Room};

pub fn building() -> Building {
    let rooms = vec![
        Room::new(1)
            .north(
                "you go north, you find a room with mario and bowser have a brawl in the kingdom",
                Room(2),
            )
            .south("you go south, you hit a dead end", Blocked)
            .east(
                "you turn east, there's a room with ice cream trucks waiting for people to buy ",
                Room(4),
            )
            .west("you turn west, you are stuck in an endless dead end loop", Blocked)
            .start(),
        Room::new(2)
            .north("you go north, you cannot open the door", Blocked)
            .south("you go south, you find room with a stool with a feather on it", Room(1))
            .east(
                "you turn east, you find room with a mirror reflecting you as a child",
                Room(3),
            )
            .west("you turn west, you hit a dead end", Blocked),
        Room::new(3)
            .north("you go north, you hit a wall with chip paint", Blocked)
            .south(
                "you go south, you see a room with an ice cream truck waiting for customers",
                Room(4),
            )
            .east("you turn east, you see a locked window", Blocked)
            .west(
                "you turn west, you see a room with bowser fighting mario in his kingdom",
                Room(2),
            ),
        Room::new(4)
            .north(
                "you go north, you enter a room and see you as a child in the mirror",
                Room(3),
            )
            .south("you go south, you hit a wall with flower growing on it", Blocked)
            .east(
                "you turn east, there's a room with a bucket of korean fried chicken on a stool",
                Room(5),
            )
            .west("you turn west, there's a room and you see a feather on a stool", Room(1)),
        Room::new(5)
            .north("you go north, there's nothing but a dead end", Blocked)
            .south("you go south, you see a room filled  chickens flying everywhere", Room(6))
            .east("you turn east, you hit a metal wall", Blocked)
            .west("you turn west, theres a room with no line in front of the ice cream truck", Room(4)),
        Room::new(6)
            .north(
                "you go north, you see room with a stool with a bucket of korean fried chicken",
                Room(5),
            )
            .south("you go south, you find a room with people camping under the starry sky", Room(9))
            .east("you turn east, you see a room with people surfing on the ocean waves", Room(7))
            .west("you turn west, you find a locked purple door", Blocked),
        Room::new(7)
            .north("you go north, you hit a dead end and going nowhere", Blocked)
            .south("you go south, you find a room with an empty coffee table", Room(8))
            .east("you turn east, its just a window", Blocked)
            .west("you turn west, and there's a room with chicken flying all over", Room(6)),
        Room::new(8)
            .north("you go north, you see a room with people surfing", Room(7))
            .south("you go south, you hit a smooth wall", Blocked)
            .east("you turn east, you missed the chance to open the door", Connector)
            .west("you turn west, and its a room of people camping", Room(9))
            .connector(4),
        Room::new(9)
            .north("you go north, and its a room filled with chickens flying", Room(6))
            .south("you go south, you see a room with seaside bakery", Room(10))
            .east("you turn east, and its a room with an empty coffee table", Room(8))
            .west("you turn west, you hit a dead end", Blocked),
        Room::new(10)
            .north("Congrats! you found the golden chicken! Click any button to reset!", Room(9))
            .south("Congrats! you found the golden chicken! Click any button to reset!", Blocked)
            .east("Congrats! you found the golden chicken! Click any button to reset!", Blocked)
            .west("Congrats! you found the golden chicken! Click any button to reset!", Room(1))
            .item(),
    ];
    Building::new("dreamscape", rooms)
}
