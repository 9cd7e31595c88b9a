use crate::world::{Inventory, LocationId, World};

/// Ways a game can finish. Either one stops the command loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// Reached the goal location carrying the goal item.
    Victory,
    /// Spoke to the queen.
    Confrontation,
}

pub fn goal_reached(world: &World, current: LocationId, inventory: &Inventory) -> bool {
    current == world.goal.location && inventory.holds(&world.goal.item)
}
