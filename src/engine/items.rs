use crate::engine::output::Output;
use crate::world;

pub fn handle_take(
    out: &mut Output,
    world: &mut world::World,
    current: world::LocationId,
    inventory: &mut world::Inventory,
    name: &str,
) {
    let Some(location) = world.location_mut(current) else {
        return;
    };

    match location.take_item(name, inventory) {
        Ok(()) => tracing::debug!(item = name, location = %location.id, "item taken"),
        Err(e) => {
            tracing::debug!(item = name, error = %e, "take refused");
            out.say(e.to_string());
        }
    }
}

pub fn handle_leave(
    out: &mut Output,
    world: &mut world::World,
    current: world::LocationId,
    inventory: &mut world::Inventory,
    name: &str,
) {
    let Some(location) = world.location_mut(current) else {
        return;
    };

    match location.leave_item(name, inventory) {
        Ok(()) => tracing::debug!(item = name, location = %location.id, "item left"),
        Err(e) => {
            tracing::debug!(item = name, error = %e, "leave refused");
            out.say(e.to_string());
        }
    }
}
