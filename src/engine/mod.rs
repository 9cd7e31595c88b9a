mod characters;
mod command;
mod conditions;
mod items;
mod movement;
mod output;
mod render;

pub use characters::{CATERPILLAR, CHARACTER_NOT_FOUND, QUEEN, handle_talk};
pub use command::{Command, parse_command};
pub use conditions::{Ending, goal_reached};
pub use items::{handle_leave, handle_take};
pub use movement::{INVALID_DIRECTION, handle_movement};
pub use output::{DIVIDER, Output, OutputBlock};
pub use render::render_location;
