//! The gorilla dungeon: a prisoner, a cake room, and a pitch-black wing
//! leading to a bridge. The treasure vault (room 7) is the goal; the castle
//! across the bridge (room 10) leads to the next building.

use crate::world::building::Building;
use crate::world::room::{ExitTarget::*, Room};

pub fn building() -> Building {
    let rooms = vec![
        Room::new(1)
            .north(
                "You run north, and eventually find an old, angry man imprisoned for 1000 years. He begs you to free him, but you refuse.",
                Room(2),
            )
            .south("You try to turn back and run, but the gorilla blocks your path.", Blocked)
            .east("You try to run east, but the gorilla blocks your path.", Blocked)
            .west("You try to run west, but the gorilla blocks your path.", Blocked)
            .start(),
        Room::new(2)
            .north(
                "The prisoner's cell takes up the entire north wall. His pleas are getting louder.",
                Blocked,
            )
            .south("You turn back, and run into the gorilla again. He seems angrier.", Room(1))
            .east("You turn east, and find a room filled with small dogs. You pet a few.", Room(5))
            .west(
                "You turn west, and find a room entire made of cake. You eat some, but it makes you feel a little sick.",
                Room(3),
            ),
        Room::new(3)
            .north(
                "You go north, and enter a room filled knee-deep with milk. It's very gross.",
                Room(4),
            )
            .south("You turn south, only to find a wall made of cake.", Blocked)
            .east(
                "You turn east, and find an old, angry man imprisoned for 1000 years. He begs you to free him, but you refuse.",
                Room(2),
            )
            .west("You turn west, only to find a wall made of cake.", Blocked),
        Room::new(4)
            .north("The north door is locked. Your pants are getting soaked with milk.", Blocked)
            .south(
                "You go south, and find a room entire made of cake. You eat some, but it makes you feel a little sick.",
                Room(3),
            )
            .east("The east wall looms over you. The milk is seeping into your shoes.", Blocked)
            .west("The west wall looms over you. The milk is starting to smell.", Blocked),
        Room::new(5)
            .north(
                "You go open the door in front of you, and enter a room filled with cobwebs. It takes a while, but you free yourself and keep going.",
                Room(6),
            )
            .south("You turn south, but the puppies seem sad. You decide to stay a while.", Blocked)
            .east("You turn east, but find a dead end. The puppies are barking at you.", Blocked)
            .west(
                "You turn west, and find an old, angry man imprisoned for 1000 years. He begs you to free him, but you refuse.",
                Room(2),
            ),
        Room::new(6)
            .north(
                "You go north, but set off a booby trap and get hit with an arrow. You keep going.",
                Room(8),
            )
            .south("You go south, and find a room filled with small dogs. You pet a few.", Room(5))
            .east("You turn east, and find a portal to leave the dungeon. You win!", Room(7))
            .west("You turn west, but find more cobwebs. You decide to go back.", Blocked),
        Room::new(7)
            .north("Piles of gold glitter against the north wall. There is no way onward.", Blocked)
            .south("The vault door slammed shut behind you. The treasure is yours now.", Blocked)
            .east("Torchlight dances over the treasure heaped along the east wall.", Blocked)
            .west("You step back through the portal, into the cobwebbed room.", Room(6))
            .item(),
        Room::new(8)
            .north("You go north, and find a giant ditch. You decide to go back.", Blocked)
            .south(
                "You go south, and enter a room filled with cobwebs. It takes a while, but you free yourself and keep going",
                Room(6),
            )
            .east("You try to open the east door, but it's locked.", Blocked)
            .west(
                "You take the west door, and find yourself in a pitch black room. You can't see anything.",
                Room(9),
            ),
        Room::new(9)
            .north(
                "You go north, and eventually find a long bridge in front of you. Do you cross it?",
                Room(10),
            )
            .south("You turn south, and walk for hours. You still can't see anything.", Blocked)
            .east(
                "You find a door, and go through it. You set off a booby trap and get hit with an arrow. You keep going.",
                Blocked,
            )
            .west(
                "You turn east, and walk in pitch black for a few minutes. You can feel something breathing down your neck.",
                Blocked,
            ),
        Room::new(10)
            .north("You cross the bridge, and find a castle. You decide to go inside.", Connector)
            .south("You turn back, and enter the darkness once again.", Room(9))
            .east("There's nothing east of you. The bridge calls your namne.", Blocked)
            .west("There's nothing west of you. The bridge calls your namne.", Blocked)
            .connector(2),
    ];
    Building::new("gorilla dungeon", rooms)
}
