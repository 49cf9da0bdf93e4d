//! The campus: library, dorms, dining hall, and a guest lecture in Building
//! 8 where the last slice of free pizza (room 8) is the goal. The bookstore
//! (room 10) opens onto the next building.

use crate::world::building::Building;
use crate::world::room::{ExitTarget::*, Room};

pub fn building() -> Building {
    let rooms = vec![
        Room::new(1)
            .north(
                "You head north out of the library, past shelves occupied with books and tables reserved by students being academic.",
                Room(2),
            )
            .south("The library stacks go on and on. There is no way out to the south.", Blocked)
            .east(
                "You slip out the east doors and a fresh breeze pulls you toward the indoor Japanese garden.",
                Room(3),
            )
            .west("A librarian shakes her head. The west wing is closed for finals.", Blocked)
            .start(),
        Room::new(2)
            .north("Brick walls and the occasional cockroach. The hallway dead-ends at the laundry room.", Blocked)
            .south("You head back south toward the quiet of the library.", Room(1))
            .east(
                "You follow a crowd of freshmen running down the hall and come out by Building 8.",
                Room(4),
            )
            .west("The RA's door is shut. A whiteboard reads: do not knock.", Blocked),
        Room::new(3)
            .north(
                "You leave the green scenery behind and cut across the lawn to Building 8.",
                Room(4),
            )
            .south("A koi pond blocks the path south. The koi look unimpressed.", Blocked)
            .east("The garden wall is covered in ivy. There is no gate here.", Blocked)
            .west("You wander back west into the library.", Room(1)),
        Room::new(4)
            .north(
                "You head north, following the smell of customized, delicious sandwiches to the dining hall.",
                Room(6),
            )
            .south("You take the south exit and end up back in the Japanese garden.", Room(3))
            .east(
                "Programmers fill the hallway on floors 1 and 3, preparing for battle in their CS class. You push east to the BRIC.",
                Room(5),
            )
            .west("You walk west back to the brick dorms.", Room(2)),
        Room::new(5)
            .north(
                "Packed at 8 PM with students avoiding the freshman 15, the gym floor ends at a stairwell up to the parking structure.",
                Room(7),
            )
            .south("Every squat rack is taken. There is nothing south but mirrors.", Blocked)
            .east("The pool is closed. A lifeguard chair sits empty behind glass.", Blocked)
            .west("You leave the BRIC and head back west into Building 8.", Room(4)),
        Room::new(6)
            .north(
                "You skip the long line and head north, where homemade jams fill wicker baskets at the farm store.",
                Room(9),
            )
            .south("You head south, back toward Building 8. The ice cream machine is working today.", Room(4))
            .east(
                "A flyer on the east door: guest speaker in Room 245, free pizza. You follow the arrows.",
                Room(8),
            )
            .west("Hungry people pack the west counter. You will never get through that line.", Blocked),
        Room::new(7)
            .north("Lots of cars line up along the cement walls. The north ramp only goes up.", Blocked)
            .south("You take the stairs down by the cement wall, back into the BRIC.", Room(5))
            .east(
                "You cut across the top level and take the footbridge east to the farm store.",
                Room(9),
            )
            .west("A battle for parking rages to the west. You stay out of it.", Blocked),
        Room::new(8)
            .north("The guest speaker is mid-sentence. You are not climbing over the podium.", Blocked)
            .south("Students fill every seat between you and the south door.", Blocked)
            .east("The projector screen covers the east wall.", Blocked)
            .west("You slip back out the west door into the dining hall.", Room(6))
            .item(),
        Room::new(9)
            .north("The freezers full of homemade ice cream block the north wall.", Blocked)
            .south("You head south, back toward the dining hall.", Room(6))
            .east(
                "You step out the east door and cross to the bookstore to represent the school.",
                Room(10),
            )
            .west("You take the footbridge west to the parking structure.", Room(7)),
        Room::new(10)
            .north(
                "Behind the CPP merchandise there is a door you have never noticed. You push it open and step through.",
                Connector,
            )
            .south("Billy Bronco keychains guard the south wall. No exit.", Blocked)
            .east("Stuffed animals and cups, floor to ceiling. No way through.", Blocked)
            .west("You head back west to the farm store.", Room(9))
            .connector(3),
    ];
    Building::new("campus", rooms)
}
