use std::collections::HashSet;

use thiserror::Error;

use super::model::{LocationId, World};

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

pub fn validate_world(world: &World) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    if world.locations.is_empty() {
        errors.push(ValidationError::new("world has no locations"));
    }

    let in_range = |id: LocationId| id.0 < world.locations.len();

    if !in_range(world.start) {
        errors.push(ValidationError::new(format!(
            "start location #{} is out of range",
            world.start.0
        )));
    }

    if !in_range(world.goal.location) {
        errors.push(ValidationError::new(format!(
            "goal location #{} is out of range",
            world.goal.location.0
        )));
    }

    if world.goal.item.trim().is_empty() {
        errors.push(ValidationError::new("goal item may not be empty"));
    }

    let mut seen: HashSet<&str> = HashSet::new();

    for loc in &world.locations {
        if loc.id.trim().is_empty() {
            errors.push(ValidationError::new("location with an empty id"));
        } else if !seen.insert(loc.id.as_str()) {
            errors.push(ValidationError::new(format!(
                "duplicate location id '{}'",
                loc.id
            )));
        }

        // No dangling edges
        for (direction, target) in &loc.directions {
            if direction.trim().is_empty() {
                errors.push(ValidationError::new(format!(
                    "location '{}' has an empty direction name",
                    loc.id
                )));
            }
            if !in_range(*target) {
                errors.push(ValidationError::new(format!(
                    "location '{}' exit '{}' targets missing location #{}",
                    loc.id, direction, target.0
                )));
            }
        }

        for item in &loc.items {
            if item.name().trim().is_empty() {
                errors.push(ValidationError::new(format!(
                    "location '{}' has an item with an empty name",
                    loc.id
                )));
            }
        }

        for ch in &loc.characters {
            if ch.name().trim().is_empty() {
                errors.push(ValidationError::new(format!(
                    "location '{}' has a character with an empty name",
                    loc.id
                )));
            }
        }
    }

    errors
}
