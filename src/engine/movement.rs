use crate::engine::output::Output;
use crate::world;

pub const INVALID_DIRECTION: &str = "Invalid direction. Please enter north, east, south, or west.";

/// Follow the exit named by `cmd`, or report that there is none and stay put.
pub fn handle_movement(
    out: &mut Output,
    current: &mut world::LocationId,
    world: &world::World,
    cmd: &str,
) {
    let target = world
        .location(*current)
        .and_then(|loc| loc.resolve_direction(cmd));

    match target {
        Some(next) => {
            tracing::debug!(from = current.0, to = next.0, input = cmd, "moved");
            *current = next;
        }
        None => {
            tracing::debug!(input = cmd, "no matching exit");
            out.say(INVALID_DIRECTION);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::load_builtin_world;

    #[test]
    fn moves_along_matching_exit() {
        let world = load_builtin_world().unwrap();
        let mut current = world.start;
        let mut out = Output::new();

        handle_movement(&mut out, &mut current, &world, "N");

        assert_eq!(world.location(current).unwrap().id, "tulgey");
        assert!(out.blocks.is_empty());
    }

    #[test]
    fn stays_put_on_unknown_direction() {
        let world = load_builtin_world().unwrap();
        let mut current = world.start;
        let mut out = Output::new();

        handle_movement(&mut out, &mut current, &world, "south");

        assert_eq!(current, world.start);
        assert_eq!(out.text(), format!("{INVALID_DIRECTION}\n"));
    }

    #[test]
    fn one_way_edges_do_not_lead_back() {
        let world = load_builtin_world().unwrap();
        let mut current = world.location_by_name("tulgey").unwrap();
        let mut out = Output::new();

        handle_movement(&mut out, &mut current, &world, "south");
        assert_eq!(world.location(current).unwrap().id, "hole");

        handle_movement(&mut out, &mut current, &world, "south");
        assert_eq!(world.location(current).unwrap().id, "hole");
        assert_eq!(out.text(), format!("{INVALID_DIRECTION}\n"));
    }
}
