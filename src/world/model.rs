use std::collections::BTreeMap;

use thiserror::Error;

//////////////////////////////
/// GAME STRUCTS AND ENUMS ///
//////////////////////////////

/// Index of a location inside `World::locations`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocationId(pub usize);

/// Runtime world type used by the game loop. Owns every location; edges are indices.
#[derive(Debug)]
pub struct World {
    pub locations: Vec<Location>,
    pub start: LocationId,
    pub goal: Goal,
}

/// Reaching `location` while carrying an item named `item` wins the game.
#[derive(Debug)]
pub struct Goal {
    pub location: LocationId,
    pub item: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    name: String,
    dialogue: String,
}

#[derive(Debug)]
pub struct Location {
    pub id: String,
    pub desc: String,
    pub items: Vec<Item>,
    pub characters: Vec<Character>,
    // BTreeMap: exits render and abbreviate in name order
    pub directions: BTreeMap<String, LocationId>,
}

/// The player's single carrying slot.
#[derive(Debug, Default)]
pub struct Inventory {
    slot: Option<Item>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferError {
    #[error("Item not found in the room.")]
    NotInRoom,
    #[error("Item not found in the inventory.")]
    NotInInventory,
    #[error("You can only carry one item at a time. Leave the current item before taking another.")]
    HandsFull,
}

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Item { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Character {
    pub fn new(name: impl Into<String>, dialogue: impl Into<String>) -> Self {
        Character {
            name: name.into(),
            dialogue: dialogue.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dialogue(&self) -> &str {
        &self.dialogue
    }
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }

    pub fn item(&self) -> Option<&Item> {
        self.slot.as_ref()
    }

    pub fn holds(&self, name: &str) -> bool {
        self.slot.as_ref().is_some_and(|i| i.name() == name)
    }

    fn remove(&mut self, name: &str) -> Option<Item> {
        if self.holds(name) { self.slot.take() } else { None }
    }
}

impl Location {
    pub fn new(id: impl Into<String>, desc: impl Into<String>) -> Self {
        Location {
            id: id.into(),
            desc: desc.into(),
            items: Vec::new(),
            characters: Vec::new(),
            directions: BTreeMap::new(),
        }
    }

    /// Registers (or overwrites) an edge. Edges are one-way.
    pub fn add_direction(&mut self, direction: impl Into<String>, target: LocationId) {
        self.directions.insert(direction.into(), target);
    }

    pub fn add_item(&mut self, name: impl Into<String>) {
        self.items.push(Item::new(name));
    }

    pub fn add_character(&mut self, name: impl Into<String>, dialogue: impl Into<String>) {
        self.characters.push(Character::new(name, dialogue));
    }

    /// Full direction names match case-insensitively; a single character matches
    /// the first letter of a direction. The first hit in name order wins.
    pub fn resolve_direction(&self, input: &str) -> Option<LocationId> {
        let lower = input.to_lowercase();
        let mut chars = lower.chars();
        let abbrev = match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        };

        self.directions.iter().find_map(|(dir, target)| {
            let dir_lower = dir.to_lowercase();
            let hit = dir_lower == lower
                || abbrev.is_some_and(|c| dir_lower.chars().next() == Some(c));
            hit.then_some(*target)
        })
    }

    /// Moves the first item named exactly `name` into the inventory.
    pub fn take_item(&mut self, name: &str, inventory: &mut Inventory) -> Result<(), TransferError> {
        if !inventory.is_empty() {
            return Err(TransferError::HandsFull);
        }

        let idx = self
            .items
            .iter()
            .position(|i| i.name() == name)
            .ok_or(TransferError::NotInRoom)?;

        inventory.slot = Some(self.items.remove(idx));
        Ok(())
    }

    /// Moves the carried item named exactly `name` back into this location.
    pub fn leave_item(&mut self, name: &str, inventory: &mut Inventory) -> Result<(), TransferError> {
        let item = inventory
            .remove(name)
            .ok_or(TransferError::NotInInventory)?;
        self.items.push(item);
        Ok(())
    }

    pub fn find_character(&self, name: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.name() == name)
    }
}

impl World {
    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(id.0)
    }

    pub fn location_mut(&mut self, id: LocationId) -> Option<&mut Location> {
        self.locations.get_mut(id.0)
    }

    pub fn location_by_name(&self, id: &str) -> Option<LocationId> {
        self.locations
            .iter()
            .position(|l| l.id == id)
            .map(LocationId)
    }
}
