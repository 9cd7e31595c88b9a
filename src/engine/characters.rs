use std::path::Path;

use crate::engine::conditions::Ending;
use crate::engine::output::Output;
use crate::resources::read_lines;
use crate::world;

/// Talking to her ends the game.
pub const QUEEN: &str = "queen";
/// Talking to her also shows the reveal file.
pub const CATERPILLAR: &str = "caterpillar";

pub const CHARACTER_NOT_FOUND: &str = "Character not found in the room.";

/// Speak to a character standing in `location`. Returns an ending when the
/// conversation finishes the game.
pub fn handle_talk(
    out: &mut Output,
    location: &world::Location,
    name: &str,
    reveal_path: &Path,
) -> Option<Ending> {
    let Some(character) = location.find_character(name) else {
        tracing::debug!(character = name, location = %location.id, "nobody by that name");
        out.say(CHARACTER_NOT_FOUND);
        return None;
    };

    tracing::debug!(character = character.name(), "talk");

    match character.name() {
        QUEEN => {
            out.say("Queen: You've stolen my memories, and now I'll take your life!");
            out.say(
                "Game Over - The queen has killed you out of revenge for stealing her memories.",
            );
            Some(Ending::Confrontation)
        }
        CATERPILLAR => {
            out.say(character.dialogue());
            reveal(out, reveal_path);
            None
        }
        _ => {
            out.say(character.dialogue());
            None
        }
    }
}

fn reveal(out: &mut Output, path: &Path) {
    match read_lines(path) {
        Ok(lines) => {
            for line in lines {
                out.verbatim(line);
            }
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "reveal file unavailable");
            out.say(format!("Unable to open {}.", path.display()));
        }
    }
}
