mod loader;
mod model;
mod validator;

pub use loader::{BUILTIN_WORLD, LoadError, load_builtin_world, load_world_from_str};

// Minimal, intentional surface area: re-export only what the game/engine uses.
pub use model::{
    Character, Goal, Inventory, Item, Location, LocationId, TransferError, World,
};
pub use validator::{ValidationError, validate_world};
