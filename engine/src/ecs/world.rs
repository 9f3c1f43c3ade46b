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

//! World graph construction
//!
//! [`WorldBuilder`] turns a [`WorldDefinition`] into a [`WorldGraph`]: every
//! room and item becomes an entity in one `hecs::World`, and exits become
//! `Direction -> EcsEntity` links. The link topology is fixed once the graph
//! is built; only containers change afterwards.

use crate::ecs::components::{Container, Description, Exits, Item, Name, Room};
use crate::ecs::registry::RoomRegistry;
use crate::ecs::{EcsEntity, GameWorld};
use crate::error::WorldError;
use manor_common::{Direction, WorldDefinition};
use std::collections::HashSet;

/// The live world: entity storage plus the room index
pub struct WorldGraph {
    world: GameWorld,
    registry: RoomRegistry,
    start_room: EcsEntity,
}

impl WorldGraph {
    /// Build the built-in manor
    pub fn manor() -> Result<Self, WorldError> {
        WorldBuilder::build(&WorldDefinition::manor())
    }

    /// Entity storage
    pub fn entities(&self) -> &GameWorld {
        &self.world
    }

    /// Entity storage, for spawning non-room entities such as the player
    pub fn entities_mut(&mut self) -> &mut GameWorld {
        &mut self.world
    }

    /// Room index
    pub fn registry(&self) -> &RoomRegistry {
        &self.registry
    }

    /// All rooms in definition order
    pub fn rooms(&self) -> &[EcsEntity] {
        self.registry.rooms()
    }

    /// Find a room by name, ignoring case
    pub fn room_by_name(&self, name: &str) -> Option<EcsEntity> {
        self.registry.get_entity(name)
    }

    /// Room the player starts in
    pub fn start_room(&self) -> EcsEntity {
        self.start_room
    }

    /// Room linked from `room` in `direction`, if any
    pub fn exit(
        &self,
        room: EcsEntity,
        direction: Direction,
    ) -> Result<Option<EcsEntity>, hecs::ComponentError> {
        Ok(self.world.get::<&Exits>(room)?.find_exit(direction))
    }

    /// Linked directions of a room in north, south, east, west order
    pub fn directions(&self, room: EcsEntity) -> Result<Vec<Direction>, hecs::ComponentError> {
        Ok(self.world.get::<&Exits>(room)?.directions())
    }

    /// Display name of any named entity
    pub fn name_of(&self, entity: EcsEntity) -> Result<String, hecs::ComponentError> {
        Ok(self.world.get::<&Name>(entity)?.display.clone())
    }

    /// Description of any described entity
    pub fn description_of(&self, entity: EcsEntity) -> Result<String, hecs::ComponentError> {
        Ok(self.world.get::<&Description>(entity)?.text.clone())
    }

    /// Display names of the items held by a room or the player, in order
    pub fn item_names(&self, holder: EcsEntity) -> Result<Vec<String>, hecs::ComponentError> {
        let container = self.world.get::<&Container>(holder)?;
        container
            .contents
            .iter()
            .map(|&item| self.name_of(item))
            .collect()
    }

    /// Verify that every link has a matching link back
    pub fn check_symmetry(&self) -> Result<(), WorldError> {
        for &room in self.registry.rooms() {
            let exits = self.world.get::<&Exits>(room)?;
            for (&direction, &destination) in &exits.exits {
                let back = self
                    .world
                    .get::<&Exits>(destination)?
                    .find_exit(direction.opposite());
                if back != Some(room) {
                    return Err(WorldError::AsymmetricLink {
                        from: self.room_label(room),
                        direction,
                        to: self.room_label(destination),
                    });
                }
            }
        }
        Ok(())
    }

    fn room_label(&self, room: EcsEntity) -> String {
        self.registry.get_name(room).unwrap_or_default().to_string()
    }
}

impl std::fmt::Debug for WorldGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorldGraph")
            .field("rooms", &self.registry.len())
            .field("entities", &self.world.len())
            .field("start_room", &self.start_room)
            .finish()
    }
}

/// Builds a [`WorldGraph`] from a [`WorldDefinition`]
pub struct WorldBuilder;

impl WorldBuilder {
    /// Spawn rooms and items, wire exits, and validate the result
    #[tracing::instrument(skip(definition), fields(rooms = definition.rooms.len()))]
    pub fn build(definition: &WorldDefinition) -> Result<WorldGraph, WorldError> {
        if definition.rooms.is_empty() {
            return Err(WorldError::Empty);
        }

        let mut world = GameWorld::new();
        let mut registry = RoomRegistry::new();

        // Rooms and their seeded items
        for room_def in &definition.rooms {
            let mut seen = HashSet::new();
            let mut container = Container::new();
            for item_def in &room_def.items {
                if !seen.insert(item_def.name.to_lowercase()) {
                    return Err(WorldError::DuplicateItem {
                        room: room_def.name.clone(),
                        item: item_def.name.clone(),
                    });
                }
                let kind = if item_def.takeable {
                    Item::takeable()
                } else {
                    Item::fixed()
                };
                let item = world.spawn((
                    Name::new(&item_def.name),
                    Description::new(&item_def.description),
                    kind,
                ));
                container.add(item);
            }

            let room = world.spawn((
                Name::new(&room_def.name),
                Description::new(&room_def.description),
                Room,
                Exits::new(),
                container,
            ));
            registry.register(room, &room_def.name)?;
            tracing::debug!(
                "Spawned room '{}' with {} item(s)",
                room_def.name,
                room_def.items.len()
            );
        }

        // Exits, once every room has a handle
        for (room_def, &room) in definition.rooms.iter().zip(registry.rooms()) {
            let mut exits = world.get::<&mut Exits>(room)?;
            for (&direction, target) in &room_def.exits {
                let destination =
                    registry
                        .get_entity(target)
                        .ok_or_else(|| WorldError::UnknownRoom {
                            room: room_def.name.clone(),
                            direction,
                            target: target.clone(),
                        })?;
                exits.set_exit(direction, destination);
            }
        }

        let start_room = registry
            .get_entity(&definition.start)
            .ok_or_else(|| WorldError::UnknownStartRoom(definition.start.clone()))?;

        let graph = WorldGraph {
            world,
            registry,
            start_room,
        };
        graph.check_symmetry()?;

        tracing::info!(
            "World built with {} rooms, starting in '{}'",
            graph.registry.len(),
            definition.start
        );
        Ok(graph)
    }
}
