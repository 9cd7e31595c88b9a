use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

use super::model::{Goal, Location, LocationId, World};
use super::validator::{ValidationError, validate_world};

/// The map every game is played on.
pub const BUILTIN_WORLD: &str = include_str!("../../assets/wonderland.toml");

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("world table is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("duplicate location id: {0}")]
    DuplicateLocation(String),

    #[error("{context} references unknown location '{id}'")]
    UnknownLocation { context: String, id: String },

    #[error("world failed validation: {}", join_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
struct WorldFile {
    world: WorldHeader,
    goal: GoalConfig,
    #[serde(default)]
    location: Vec<LocationConfig>, // [[location]] blocks
}

#[derive(Deserialize)]
struct WorldHeader {
    start: String,
}

#[derive(Deserialize)]
struct GoalConfig {
    location: String,
    item: String,
}

#[derive(Deserialize)]
struct LocationConfig {
    id: String,
    #[serde(default)]
    desc: String,

    #[serde(default)]
    exits: BTreeMap<String, String>, // direction = "target id"
    #[serde(default)]
    items: Vec<String>,
    #[serde(default)]
    character: Vec<CharacterConfig>, // [[location.character]]
}

#[derive(Deserialize)]
struct CharacterConfig {
    name: String,
    dialogue: String,
}

/////////////////////////////
/// TOML PARSER FUNCTIONS ///
/////////////////////////////

/// Load the map compiled into the binary.
pub fn load_builtin_world() -> Result<World, LoadError> {
    load_world_from_str(BUILTIN_WORLD)
}

/// Parse a world table, wire its edges into indices and validate the result.
pub fn load_world_from_str(contents: &str) -> Result<World, LoadError> {
    let world_file: WorldFile = toml::from_str(contents)?;

    // First pass: assign an index to every location id
    let mut ids: HashMap<String, LocationId> = HashMap::new();
    for (idx, loc_cfg) in world_file.location.iter().enumerate() {
        if ids.insert(loc_cfg.id.clone(), LocationId(idx)).is_some() {
            return Err(LoadError::DuplicateLocation(loc_cfg.id.clone()));
        }
    }

    let lookup = |context: String, id: &str| -> Result<LocationId, LoadError> {
        ids.get(id).copied().ok_or_else(|| LoadError::UnknownLocation {
            context,
            id: id.to_string(),
        })
    };

    // Second pass: build locations with resolved edges
    let mut locations = Vec::with_capacity(world_file.location.len());
    for loc_cfg in world_file.location {
        let mut location = Location::new(loc_cfg.id.clone(), loc_cfg.desc.trim());

        for (direction, target) in &loc_cfg.exits {
            let context = format!("location '{}' exit '{}'", loc_cfg.id, direction);
            location.add_direction(direction.clone(), lookup(context, target)?);
        }

        for item in loc_cfg.items {
            location.add_item(item);
        }

        for ch in loc_cfg.character {
            location.add_character(ch.name, ch.dialogue.trim());
        }

        locations.push(location);
    }

    let start = lookup("world.start".to_string(), &world_file.world.start)?;
    let goal = Goal {
        location: lookup("goal.location".to_string(), &world_file.goal.location)?,
        item: world_file.goal.item,
    };

    let world = World {
        locations,
        start,
        goal,
    };

    let errors = validate_world(&world);
    if !errors.is_empty() {
        return Err(LoadError::Invalid(errors));
    }

    tracing::debug!(locations = world.locations.len(), "world table loaded");
    Ok(world)
}
