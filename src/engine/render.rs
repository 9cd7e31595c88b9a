use crate::engine::output::Output;
use crate::world;

/// Location block shown at the start of every turn.
pub fn render_location(out: &mut Output, location: &world::Location) {
    out.divider();
    out.say(location.desc.trim());

    if !location.items.is_empty() {
        out.say("You see the following items in the room:");
        for item in &location.items {
            out.say(format!("- {}", item.name()));
        }
    }

    // each name is followed by a space, including the last one
    let dirs: String = location
        .directions
        .keys()
        .map(|d| format!("{d} "))
        .collect();
    out.say(format!("Available directions: {dirs}"));

    let cast: String = location
        .characters
        .iter()
        .map(|c| format!("{} ", c.name()))
        .collect();
    out.say(format!("Characters in the room: {cast}"));

    out.divider();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::output::DIVIDER;
    use crate::world::{Location, LocationId};

    #[test]
    fn renders_empty_room() {
        let mut loc = Location::new("hole", "A hole.");
        loc.add_direction("north", LocationId(1));

        let mut out = Output::new();
        render_location(&mut out, &loc);

        assert_eq!(
            out.text(),
            format!(
                "{DIVIDER}\nA hole.\nAvailable directions: north \nCharacters in the room: \n{DIVIDER}\n"
            )
        );
    }

    #[test]
    fn renders_items_and_characters_in_order() {
        let mut loc = Location::new("yard", "A yard.");
        loc.add_direction("west", LocationId(1));
        loc.add_direction("east", LocationId(2));
        loc.add_item("key");
        loc.add_item("fan");
        loc.add_character("queen", "...");
        loc.add_character("hatter", "...");

        let mut out = Output::new();
        render_location(&mut out, &loc);

        assert_eq!(
            out.text(),
            format!(
                "{DIVIDER}\nA yard.\nYou see the following items in the room:\n- key\n- fan\n\
                 Available directions: east west \nCharacters in the room: queen hatter \n{DIVIDER}\n"
            )
        );
    }
}
