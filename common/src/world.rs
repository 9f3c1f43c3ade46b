//
// Copyright 2025-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! World definition data types
//!
//! A [`WorldDefinition`] is the plain, serializable description of a world:
//! rooms with their descriptions, the items seeded into each room, and the
//! named exits between rooms. The engine turns it into a live world graph.

use crate::direction::Direction;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Complete description of a world
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldDefinition {
    /// Name of the room the player starts in
    pub start: String,
    /// Rooms in creation order
    pub rooms: Vec<RoomDefinition>,
}

/// A single room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomDefinition {
    pub name: String,
    pub description: String,
    /// Items seeded into the room, in display order
    #[serde(default)]
    pub items: Vec<ItemDefinition>,
    /// Exits keyed by direction, naming the destination room
    #[serde(default)]
    pub exits: BTreeMap<Direction, String>,
}

/// A single item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDefinition {
    pub name: String,
    pub description: String,
    #[serde(default = "ItemDefinition::default_takeable")]
    pub takeable: bool,
}

impl WorldDefinition {
    /// Create a world definition with a start room name and no rooms
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            rooms: Vec::new(),
        }
    }

    /// Add a room to the definition
    pub fn with_room(mut self, room: RoomDefinition) -> Self {
        self.rooms.push(room);
        self
    }

    /// Find a room definition by name (case-insensitive)
    pub fn room(&self, name: &str) -> Option<&RoomDefinition> {
        self.rooms
            .iter()
            .find(|r| r.name.eq_ignore_ascii_case(name))
    }

    /// The built-in manor: a foyer, living room, kitchen and conservatory
    /// laid out in a line from the front door.
    pub fn manor() -> Self {
        WorldDefinition::new("Foyer")
            .with_room(
                RoomDefinition::new(
                    "Foyer",
                    "You are in a grand foyer with a beautiful chandelier hanging from the ceiling. \
                     There is a living room to the north and a kitchen east of the living room.",
                )
                .with_item(ItemDefinition::new(
                    "Note",
                    "A piece of paper with some writing on it.",
                ))
                .with_exit(Direction::North, "Living Room"),
            )
            .with_room(
                RoomDefinition::new(
                    "Living Room",
                    "You are in a cozy living room with a fireplace and comfortable chairs. \
                     To the south is the Foyer. To the east is the Kitchen.",
                )
                .with_item(ItemDefinition::new(
                    "Screwdriver",
                    "A tool with a flat head and a magnetic tip.",
                ))
                .with_exit(Direction::South, "Foyer")
                .with_exit(Direction::East, "Kitchen"),
            )
            .with_room(
                RoomDefinition::new(
                    "Kitchen",
                    "You are in a spacious kitchen with modern appliances and granite countertops. \
                     To the east is the Conservatory. To the west is the Living Room.",
                )
                .with_item(ItemDefinition::new("Key", "A shiny metal key."))
                .with_exit(Direction::East, "Conservatory")
                .with_exit(Direction::West, "Living Room"),
            )
            .with_room(
                RoomDefinition::new(
                    "Conservatory",
                    "You are in a conservatory with lots of stained glass and pebbled windows. \
                     There are many plants, flowers, and even a few trees in huge pots. \
                     To the west is the kitchen.",
                )
                .with_item(ItemDefinition::new(
                    "Brooch",
                    "A delicate gold filigree brooch in the shape of a leaf with green accents.",
                ))
                .with_item(ItemDefinition::new("Mirror", "A silver cracked mirror.").fixed())
                .with_exit(Direction::West, "Kitchen"),
            )
    }
}

impl RoomDefinition {
    /// Create a room with no items and no exits
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            items: Vec::new(),
            exits: BTreeMap::new(),
        }
    }

    /// Seed an item into the room
    pub fn with_item(mut self, item: ItemDefinition) -> Self {
        self.items.push(item);
        self
    }

    /// Link the room to another room by name
    pub fn with_exit(mut self, direction: Direction, destination: impl Into<String>) -> Self {
        self.exits.insert(direction, destination.into());
        self
    }
}

impl ItemDefinition {
    /// Create a takeable item
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            takeable: true,
        }
    }

    /// Mark the item as fixed in place
    pub fn fixed(mut self) -> Self {
        self.takeable = false;
        self
    }

    fn default_takeable() -> bool {
        true
    }
}
