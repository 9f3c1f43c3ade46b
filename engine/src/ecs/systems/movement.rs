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

//! Movement system for player movement

use crate::ecs::EcsEntity;
use crate::ecs::context::GameState;
use manor_common::Direction;

/// Result of a movement attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The player walked from one room to another
    Moved { from: EcsEntity, to: EcsEntity },
    /// The current room has no exit that way; nothing changed
    NoExit,
}

#[derive(Debug, Default)]
pub struct MovementSystem;

impl MovementSystem {
    /// Create a new movement system
    pub fn new() -> Self {
        Self
    }

    /// Move the player one room in a direction, if the current room links
    /// that way
    pub fn move_player(
        &mut self,
        state: &mut GameState,
        direction: Direction,
    ) -> Result<MoveOutcome, hecs::ComponentError> {
        let from = state.current_room()?;

        let to = match state.graph().exit(from, direction)? {
            Some(to) => to,
            None => {
                tracing::debug!("No exit found in direction '{}' from room {:?}", direction, from);
                return Ok(MoveOutcome::NoExit);
            }
        };

        state.set_current_room(to)?;
        tracing::debug!("Player moved {} from room {:?} to room {:?}", direction, from, to);

        Ok(MoveOutcome::Moved { from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::test_utils::create_test_state;

    #[test]
    fn test_move_through_exit() {
        let mut state = GameState::manor().unwrap();
        let mut system = MovementSystem::new();
        let foyer = state.current_room().unwrap();
        let living = state.graph().room_by_name("Living Room").unwrap();

        let outcome = system.move_player(&mut state, Direction::North).unwrap();
        assert_eq!(outcome, MoveOutcome::Moved { from: foyer, to: living });
        assert_eq!(state.current_room().unwrap(), living);
    }

    #[test]
    fn test_move_without_exit_keeps_room() {
        let mut state = GameState::manor().unwrap();
        let mut system = MovementSystem::new();
        let foyer = state.current_room().unwrap();

        for direction in [Direction::South, Direction::East, Direction::West] {
            let outcome = system.move_player(&mut state, direction).unwrap();
            assert_eq!(outcome, MoveOutcome::NoExit);
            assert_eq!(state.current_room().unwrap(), foyer);
        }
    }

    #[test]
    fn test_walk_to_conservatory_and_back() {
        let mut state = GameState::manor().unwrap();
        let mut system = MovementSystem::new();
        let foyer = state.current_room().unwrap();

        for direction in [Direction::North, Direction::East, Direction::East] {
            assert!(matches!(
                system.move_player(&mut state, direction).unwrap(),
                MoveOutcome::Moved { .. }
            ));
        }
        assert_eq!(
            state.current_room().unwrap(),
            state.graph().room_by_name("Conservatory").unwrap()
        );

        for direction in [Direction::West, Direction::West, Direction::South] {
            system.move_player(&mut state, direction).unwrap();
        }
        assert_eq!(state.current_room().unwrap(), foyer);
    }

    #[test]
    fn test_move_in_custom_world() {
        let mut state = create_test_state();
        let mut system = MovementSystem::new();

        assert_eq!(system.move_player(&mut state, Direction::West).unwrap(), MoveOutcome::NoExit);
        assert!(matches!(
            system.move_player(&mut state, Direction::East).unwrap(),
            MoveOutcome::Moved { .. }
        ));
        assert_eq!(state.current_room_view().unwrap().name, "Study");
    }
}
