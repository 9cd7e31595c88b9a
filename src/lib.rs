pub mod config;
pub mod engine;
pub mod resources;
pub mod session;
pub mod world;

use std::path::PathBuf;

use engine::{
    Command, Ending, Output, goal_reached, handle_leave, handle_movement, handle_take,
    handle_talk, parse_command, render_location,
};
use world::{Inventory, LocationId, World};

pub use config::Config;
pub use session::{PROMPT, Session};
pub use world::{load_builtin_world, load_world_from_str};

/// Everything that changes while a game is played.
pub struct GameState {
    pub world: World,
    pub current: LocationId,
    pub inventory: Inventory,
    pub reveal_path: PathBuf,
}

impl GameState {
    pub fn new(world: World, reveal_path: impl Into<PathBuf>) -> Self {
        let current = world.start;
        GameState {
            world,
            current,
            inventory: Inventory::new(),
            reveal_path: reveal_path.into(),
        }
    }

    pub fn current_location(&self) -> Option<&world::Location> {
        self.world.location(self.current)
    }

    /// Render the current location, then check whether the game is won.
    pub fn begin_turn(&self) -> (Output, Option<Ending>) {
        let mut out = Output::new();
        if let Some(location) = self.current_location() {
            render_location(&mut out, location);
        }

        if goal_reached(&self.world, self.current, &self.inventory) {
            tracing::info!("goal reached");
            out.say("You win!");
            return (out, Some(Ending::Victory));
        }

        (out, None)
    }

    /// Process a single player input.
    pub fn step(&mut self, input: &str) -> (Output, Option<Ending>) {
        let mut out = Output::new();
        let command = parse_command(input);
        tracing::debug!(?command, "command");

        let ending = match command {
            Command::Take(name) => {
                handle_take(
                    &mut out,
                    &mut self.world,
                    self.current,
                    &mut self.inventory,
                    name,
                );
                None
            }
            Command::Leave(name) => {
                handle_leave(
                    &mut out,
                    &mut self.world,
                    self.current,
                    &mut self.inventory,
                    name,
                );
                None
            }
            Command::Talk(name) => match self.world.location(self.current) {
                Some(location) => handle_talk(&mut out, location, name, &self.reveal_path),
                None => None,
            },
            Command::Go(direction) => {
                handle_movement(&mut out, &mut self.current, &self.world, direction);
                None
            }
        };

        if let Some(e) = ending {
            tracing::info!(ending = ?e, "game over");
        }

        (out, ending)
    }
}
