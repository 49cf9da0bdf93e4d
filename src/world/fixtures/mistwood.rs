//! The mistwood: a ruined church, the Siofra depths, and an eternal city
//! beneath the roots. A glowing light between the trees (room 4) leads to
//! the next building; the peak (room 10) holds the goal.

use crate::world::building::Building;
use crate::world::room::{ExitTarget::*, Room};

pub fn building() -> Building {
    let rooms = vec![
        Room::new(1)
            .north(
                "you go north. Ruins of a humble church. A faint Site of Grace flickers.",
                Room(2),
            )
            .south("Collapsed walls block your path, overgrown with moss.", Blocked)
            .east("Collapsed walls block your path, overgrown with moss.", Blocked)
            .west("Collapsed walls block your path, overgrown with moss.", Blocked)
            .start(),
        Room::new(2)
            .north("you go north. The path darkens beneath the canopy.", Room(3))
            .south("you go south. You go back to the ruined church.", Room(1))
            .east("you go east. You glimpse a glowing light between the trees.", Room(4))
            .west("Thick roots entangle the forests edge.", Blocked),
        Room::new(3)
            .north("Sheer cliffs prevent movement", Blocked)
            .south("you go south. You go back to the mistwood outskirts", Room(2))
            .east("Sheer cliffs prevent movement", Blocked)
            .west("You descend to the Siofra depths.", Room(5)),
        Room::new(4)
            .north("The glowing light pulses above the treeline, out of reach.", Blocked)
            .south("Thick mist swallows the path south.", Blocked)
            .east("you step into the glowing light, and the mistwood falls away behind you.", Connector)
            .west("you go west. You go back beneath the canopy.", Room(3))
            .connector(1),
        Room::new(5)
            .north("you go north. A crumbled archway opens into shimmering ruins.", Room(6))
            .south("Impassable fog walls block the way.", Room(4))
            .east("you go east. You go back to the Siofra River lift", Blocked)
            .west("Impassable fog walls block the way.", Blocked),
        Room::new(6)
            .north("you go north. A collapsed stairway leads", Room(7))
            .south("you go south. You go back to the river depts", Room(5))
            .east("Ancient buildings block your path.", Blocked)
            .west("Ancient buildings bloc your path.", Blocked),
        Room::new(7)
            .north("Rivers of ghostlight cut off your way.", Blocked)
            .south("you go south. You go back to the eternal city.", Room(6))
            .east("A hidden path winds toward the surface.", Room(8))
            .west("Rivers of ghostlight cut off your way.", Blocked),
        Room::new(8)
            .north("Jagged rock and debris block the path", Blocked)
            .south("General Radahn, demigod of gravity stares you down.", Blocked)
            .east("you go east. Following the roots of the grand tree.", Room(9))
            .west("you go west. You go back to the hallowhorn grounds", Room(7)),
        Room::new(9)
            .north("The root walls are too thick to pass.", Blocked)
            .south("you go south. A faint golden glow shines from the peak", Blocked)
            .east("you follow the golden glow east, up toward the peak.", Room(10))
            .west("you go west. You go back to the crate of radahn.", Room(8)),
        Room::new(10)
            .north("you go north, theres a twisty backroad", Blocked)
            .south("you go south, park your car and head back home", Blocked)
            .east(
                "you turn east, you find a steak in the middle console and eat it (GAME OVER) ask to reset?",
                Blocked,
            )
            .west("you turn west, theres a racetrack with other cars", Room(9))
            .item(),
    ];
    Building::new("mistwood", rooms)
}
