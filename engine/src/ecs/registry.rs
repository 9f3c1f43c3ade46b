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

//! Room Registry for mapping between ECS runtime handles and room names
//!
//! This module provides bidirectional mapping between:
//! - `EcsEntity`: hecs runtime entity handles of rooms
//! - room names, compared case-insensitively
//!
//! It also remembers registration order, which is the order rooms were
//! defined in.

use crate::ecs::EcsEntity;
use crate::error::WorldError;
use std::collections::HashMap;

/// Registry for mapping between room entities and their names
#[derive(Debug, Default)]
pub struct RoomRegistry {
    /// Map from lowercased name to ECS entity handle
    name_to_entity: HashMap<String, EcsEntity>,

    /// Map from ECS entity handle to display name
    entity_to_name: HashMap<EcsEntity, String>,

    /// Rooms in registration order
    order: Vec<EcsEntity>,
}

impl RoomRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            name_to_entity: HashMap::new(),
            entity_to_name: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Register a mapping between a room entity and its name
    ///
    /// # Returns
    /// * `Ok(())` if registration succeeded
    /// * `Err(WorldError::DuplicateRoom)` if the name is already taken
    pub fn register(&mut self, entity: EcsEntity, name: &str) -> Result<(), WorldError> {
        let key = name.to_lowercase();
        if self.name_to_entity.contains_key(&key) || self.entity_to_name.contains_key(&entity) {
            return Err(WorldError::DuplicateRoom(name.to_string()));
        }

        self.name_to_entity.insert(key, entity);
        self.entity_to_name.insert(entity, name.to_string());
        self.order.push(entity);

        Ok(())
    }

    /// Look up a room by name, ignoring case
    pub fn get_entity(&self, name: &str) -> Option<EcsEntity> {
        self.name_to_entity.get(&name.to_lowercase()).copied()
    }

    /// Look up the display name of a room
    pub fn get_name(&self, entity: EcsEntity) -> Option<&str> {
        self.entity_to_name.get(&entity).map(String::as_str)
    }

    /// Check if an entity is a registered room
    pub fn contains_entity(&self, entity: EcsEntity) -> bool {
        self.entity_to_name.contains_key(&entity)
    }

    /// Rooms in registration order
    pub fn rooms(&self) -> &[EcsEntity] {
        &self.order
    }

    /// Get the number of registered rooms
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::GameWorld;
    use crate::ecs::components::Room;

    #[test]
    fn test_register_and_lookup() {
        let mut world = GameWorld::new();
        let mut registry = RoomRegistry::new();
        let foyer = world.spawn((Room,));

        registry.register(foyer, "Foyer").unwrap();

        assert_eq!(registry.get_entity("Foyer"), Some(foyer));
        assert_eq!(registry.get_entity("FOYER"), Some(foyer));
        assert_eq!(registry.get_name(foyer), Some("Foyer"));
        assert!(registry.contains_entity(foyer));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut world = GameWorld::new();
        let mut registry = RoomRegistry::new();
        let a = world.spawn((Room,));
        let b = world.spawn((Room,));

        registry.register(a, "Kitchen").unwrap();
        let err = registry.register(b, "kitchen").unwrap_err();
        assert!(matches!(err, WorldError::DuplicateRoom(ref name) if name == "kitchen"));
        assert_eq!(registry.len(), 1);
        assert!(!registry.contains_entity(b));
    }

    #[test]
    fn test_registration_order() {
        let mut world = GameWorld::new();
        let mut registry = RoomRegistry::new();
        let rooms: Vec<_> = (0..3).map(|_| world.spawn((Room,))).collect();

        registry.register(rooms[2], "C").unwrap();
        registry.register(rooms[0], "A").unwrap();
        registry.register(rooms[1], "B").unwrap();

        assert_eq!(registry.rooms(), &[rooms[2], rooms[0], rooms[1]]);
    }

    #[test]
    fn test_unknown_lookup() {
        let registry = RoomRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.get_entity("Attic"), None);
    }
}
