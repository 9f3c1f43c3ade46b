//
// Copyright 2025 Hans W. Uhlig. All Rights Reserved.
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

//! Spatial components for positioning and containment

use crate::ecs::EcsEntity;
use manor_common::Direction;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Room the entity currently stands in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub room: EcsEntity,
}

impl Location {
    pub fn new(room: EcsEntity) -> Self {
        Self { room }
    }
}

/// Marks an entity as a navigable room
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room;

/// Marks an entity as an item, fixed in place unless takeable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub takeable: bool,
}

impl Item {
    /// An item that can be picked up
    pub fn takeable() -> Self {
        Self { takeable: true }
    }

    /// An item that stays where it is
    pub fn fixed() -> Self {
        Self { takeable: false }
    }
}

/// Ordered collection of item entities held by a room or the player.
///
/// Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Container {
    pub contents: Vec<EcsEntity>,
}

impl Container {
    /// Create an empty container
    pub fn new() -> Self {
        Self {
            contents: Vec::new(),
        }
    }

    /// Append an item
    pub fn add(&mut self, item: EcsEntity) {
        self.contents.push(item);
    }

    /// Remove an item, keeping the order of the rest. Returns false when the
    /// item was not held.
    pub fn remove(&mut self, item: EcsEntity) -> bool {
        match self.contents.iter().position(|&held| held == item) {
            Some(index) => {
                self.contents.remove(index);
                true
            }
            None => false,
        }
    }

    /// Check if the item is held
    pub fn contains(&self, item: EcsEntity) -> bool {
        self.contents.contains(&item)
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }
}

/// Links from a room to its neighbours
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exits {
    pub exits: BTreeMap<Direction, EcsEntity>,
}

impl Exits {
    /// Create a new empty exits collection
    pub fn new() -> Self {
        Self {
            exits: BTreeMap::new(),
        }
    }

    /// Add an exit to the collection
    pub fn add_exit(mut self, direction: Direction, destination: EcsEntity) -> Self {
        self.exits.insert(direction, destination);
        self
    }

    /// Set or replace the exit in a direction
    pub fn set_exit(&mut self, direction: Direction, destination: EcsEntity) {
        self.exits.insert(direction, destination);
    }

    /// Find the room in a direction
    pub fn find_exit(&self, direction: Direction) -> Option<EcsEntity> {
        self.exits.get(&direction).copied()
    }

    /// All linked directions in north, south, east, west order
    pub fn directions(&self) -> Vec<Direction> {
        self.exits.keys().copied().collect()
    }

    /// Check if there's an exit in a given direction
    pub fn has_exit(&self, direction: Direction) -> bool {
        self.exits.contains_key(&direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::GameWorld;

    #[test]
    fn test_container_keeps_insertion_order() {
        let mut world = GameWorld::new();
        let a = world.spawn((Item::takeable(),));
        let b = world.spawn((Item::takeable(),));
        let c = world.spawn((Item::takeable(),));

        let mut container = Container::new();
        container.add(c);
        container.add(a);
        container.add(b);
        assert_eq!(container.contents, vec![c, a, b]);

        assert!(container.remove(a));
        assert_eq!(container.contents, vec![c, b]);
        assert!(!container.remove(a));
        assert_eq!(container.len(), 2);
    }

    #[test]
    fn test_container_contains() {
        let mut world = GameWorld::new();
        let item = world.spawn((Item::fixed(),));
        let mut container = Container::default();
        assert!(container.is_empty());
        container.add(item);
        assert!(container.contains(item));
    }

    #[test]
    fn test_exits_collection() {
        let mut world = GameWorld::new();
        let room1 = world.spawn((Room,));
        let room2 = world.spawn((Room,));

        let exits = Exits::new()
            .add_exit(Direction::West, room2)
            .add_exit(Direction::North, room1);

        assert!(exits.has_exit(Direction::North));
        assert!(!exits.has_exit(Direction::South));
        assert_eq!(exits.find_exit(Direction::West), Some(room2));
        assert_eq!(exits.find_exit(Direction::East), None);
        assert_eq!(exits.directions(), vec![Direction::North, Direction::West]);
    }

    #[test]
    fn test_item_flags() {
        assert!(Item::takeable().takeable);
        assert!(!Item::fixed().takeable);
    }
}
