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

//! Inventory system for item management
//!
//! Items only ever move between two containers: the current room's and the
//! player's. A move removes the item from one and appends it to the other
//! before the next command runs, so an item is never in both or neither.

use crate::ecs::components::{Container, Item, Name};
use crate::ecs::context::GameState;
use crate::ecs::{EcsEntity, GameWorld};

/// Result of a pickup attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TakeOutcome {
    /// The item moved from the room to the player
    Taken(EcsEntity),
    /// The item is in the room but fixed in place
    NotTakeable(EcsEntity),
    /// No item with that name is in the room
    NotFound,
}

/// Result of a drop attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The item moved from the player to the room
    Dropped(EcsEntity),
    /// The player carries no item with that name
    NotCarried,
}

#[derive(Debug, Default)]
pub struct InventorySystem;

impl InventorySystem {
    /// Create a new inventory system
    pub fn new() -> Self {
        Self
    }

    /// Find an item by name (case-insensitive, exact) in a container
    pub fn find_item(
        &self,
        world: &GameWorld,
        holder: EcsEntity,
        name: &str,
    ) -> Result<Option<EcsEntity>, hecs::ComponentError> {
        let container = world.get::<&Container>(holder)?;
        for &item in &container.contents {
            if world.get::<&Name>(item)?.matches(name) {
                return Ok(Some(item));
            }
        }
        Ok(None)
    }

    /// Pick up an item from the current room
    pub fn pickup_item(
        &mut self,
        state: &mut GameState,
        name: &str,
    ) -> Result<TakeOutcome, hecs::ComponentError> {
        let room = state.current_room()?;
        let item = match self.find_item(state.entities(), room, name)? {
            Some(item) => item,
            None => return Ok(TakeOutcome::NotFound),
        };

        if !state.entities().get::<&Item>(item)?.takeable {
            tracing::debug!("Item {:?} is fixed in room {:?}", item, room);
            return Ok(TakeOutcome::NotTakeable(item));
        }

        Self::transfer(state.entities(), room, state.player(), item)?;
        tracing::debug!("Player picked up {:?} from room {:?}", item, room);
        Ok(TakeOutcome::Taken(item))
    }

    /// Drop a carried item into the current room
    pub fn drop_item(
        &mut self,
        state: &mut GameState,
        name: &str,
    ) -> Result<DropOutcome, hecs::ComponentError> {
        let player = state.player();
        let item = match self.find_item(state.entities(), player, name)? {
            Some(item) => item,
            None => return Ok(DropOutcome::NotCarried),
        };

        let room = state.current_room()?;
        Self::transfer(state.entities(), player, room, item)?;
        tracing::debug!("Player dropped {:?} in room {:?}", item, room);
        Ok(DropOutcome::Dropped(item))
    }

    /// Check if the player carries a specific item
    pub fn has_item(&self, state: &GameState, item: EcsEntity) -> bool {
        state
            .entities()
            .get::<&Container>(state.player())
            .map(|c| c.contains(item))
            .unwrap_or(false)
    }

    /// Get the number of carried items
    pub fn get_item_count(&self, state: &GameState) -> usize {
        state
            .entities()
            .get::<&Container>(state.player())
            .map(|c| c.len())
            .unwrap_or(0)
    }

    /// Move an item between containers. The destination is checked before
    /// the source is touched so a failure leaves both unchanged.
    fn transfer(
        world: &GameWorld,
        from: EcsEntity,
        to: EcsEntity,
        item: EcsEntity,
    ) -> Result<(), hecs::ComponentError> {
        drop(world.get::<&Container>(to)?);
        if world.get::<&mut Container>(from)?.remove(item) {
            world.get::<&mut Container>(to)?.add(item);
        }
        Ok(())
    }
}
