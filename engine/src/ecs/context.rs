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

use crate::ecs::components::{Container, Location, Name, Room};
use crate::ecs::world::WorldGraph;
use crate::ecs::{EcsEntity, GameWorld};
use crate::error::WorldError;
use crate::presentation::RoomView;

/// Game state owned by a single session
///
/// Wraps the world graph and the player entity. The player carries a
/// `Location` pointing at the current room and a `Container` holding the
/// carried items, so taking and dropping is a move between two containers
/// of the same shape.
///
/// # Invariants
///
/// - the player's `Location.room` is always a room of the graph
/// - every item entity is held by exactly one container
///
/// # Examples
///
/// ```ignore
/// let mut state = GameState::manor()?;
/// let view = state.current_room_view()?;
/// assert_eq!(view.name, "Foyer");
/// ```
pub struct GameState {
    graph: WorldGraph,
    player: EcsEntity,
}

impl GameState {
    /// Create a new game with the player standing in the start room,
    /// carrying nothing
    pub fn new(mut graph: WorldGraph) -> Self {
        let start = graph.start_room();
        let player = graph.entities_mut().spawn((
            Name::new("Player"),
            Location::new(start),
            Container::new(),
        ));
        tracing::debug!("Player {:?} placed in {:?}", player, start);
        Self { graph, player }
    }

    /// Create a new game in the built-in manor
    pub fn manor() -> Result<Self, WorldError> {
        Ok(Self::new(WorldGraph::manor()?))
    }

    /// The world graph
    pub fn graph(&self) -> &WorldGraph {
        &self.graph
    }

    /// Entity storage
    pub fn entities(&self) -> &GameWorld {
        self.graph.entities()
    }

    /// The player entity
    pub fn player(&self) -> EcsEntity {
        self.player
    }

    /// The room the player is in
    pub fn current_room(&self) -> Result<EcsEntity, hecs::ComponentError> {
        Ok(self.entities().get::<&Location>(self.player)?.room)
    }

    /// Move the player to another room. Fails without moving when `room` is
    /// not a room of the graph.
    pub fn set_current_room(&mut self, room: EcsEntity) -> Result<(), hecs::ComponentError> {
        if !self.graph.registry().contains_entity(room) {
            return Err(hecs::ComponentError::MissingComponent(
                hecs::MissingComponent::new::<Room>(),
            ));
        }
        self.entities().get::<&mut Location>(self.player)?.room = room;
        Ok(())
    }

    /// Snapshot of a room for presentation
    pub fn room_view(&self, room: EcsEntity) -> Result<RoomView, hecs::ComponentError> {
        Ok(RoomView {
            name: self.graph.name_of(room)?,
            description: self.graph.description_of(room)?,
            directions: self.graph.directions(room)?,
            items: self.graph.item_names(room)?,
        })
    }

    /// Snapshot of the player's room for presentation
    pub fn current_room_view(&self) -> Result<RoomView, hecs::ComponentError> {
        self.room_view(self.current_room()?)
    }

    /// Names of the carried items, in pickup order
    pub fn inventory_names(&self) -> Result<Vec<String>, hecs::ComponentError> {
        self.graph.item_names(self.player)
    }

    /// Every container (rooms and the player) currently holding `item`
    pub fn holders_of(&self, item: EcsEntity) -> Vec<EcsEntity> {
        self.graph
            .rooms()
            .iter()
            .copied()
            .chain(std::iter::once(self.player))
            .filter(|&holder| {
                self.entities()
                    .get::<&Container>(holder)
                    .map(|c| c.contains(item))
                    .unwrap_or(false)
            })
            .collect()
    }
}

impl std::fmt::Debug for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameState")
            .field("graph", &self.graph)
            .field("player", &self.player)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use manor_common::Direction;

    #[test]
    fn test_new_game_starts_in_foyer_empty_handed() {
        let state = GameState::manor().unwrap();
        let room = state.current_room().unwrap();
        assert_eq!(room, state.graph().start_room());
        assert!(state.inventory_names().unwrap().is_empty());
    }

    #[test]
    fn test_current_room_view() {
        let state = GameState::manor().unwrap();
        let view = state.current_room_view().unwrap();
        assert_eq!(view.name, "Foyer");
        assert!(view.description.contains("grand foyer"));
        assert_eq!(view.directions, vec![Direction::North]);
        assert_eq!(view.items, vec!["Note".to_string()]);
    }

    #[test]
    fn test_set_current_room() {
        let mut state = GameState::manor().unwrap();
        let kitchen = state.graph().room_by_name("Kitchen").unwrap();
        state.set_current_room(kitchen).unwrap();
        assert_eq!(state.current_room().unwrap(), kitchen);
        assert_eq!(state.current_room_view().unwrap().items, vec!["Key".to_string()]);
    }

    #[test]
    fn test_set_current_room_rejects_non_rooms() {
        let mut state = GameState::manor().unwrap();
        let foyer = state.current_room().unwrap();
        let note = state.entities().get::<&Container>(foyer).unwrap().contents[0];
        let player = state.player();

        for target in [note, player] {
            assert!(matches!(
                state.set_current_room(target),
                Err(hecs::ComponentError::MissingComponent(_))
            ));
            assert_eq!(state.current_room().unwrap(), foyer);
        }
        assert!(state.current_room_view().is_ok());
    }

    #[test]
    fn test_each_item_has_one_holder() {
        let state = GameState::manor().unwrap();
        for &room in state.graph().rooms() {
            let items = state.entities().get::<&Container>(room).unwrap().contents.clone();
            for item in items {
                assert_eq!(state.holders_of(item), vec![room]);
            }
        }
    }
}
