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

//! Test utilities for ECS testing

use crate::ecs::context::GameState;
use crate::ecs::world::WorldBuilder;
use manor_common::{Direction, ItemDefinition, RoomDefinition, WorldDefinition};

/// Two rooms side by side: a Hall (Lamp, fixed Statue) east of which lies
/// an empty Study
pub fn create_test_definition() -> WorldDefinition {
    WorldDefinition::new("Hall")
        .with_room(
            RoomDefinition::new("Hall", "A hall.")
                .with_item(ItemDefinition::new("Lamp", "A brass lamp."))
                .with_item(ItemDefinition::new("Statue", "Too heavy.").fixed())
                .with_exit(Direction::East, "Study"),
        )
        .with_room(RoomDefinition::new("Study", "A study.").with_exit(Direction::West, "Hall"))
}

/// A fresh game in the test world, player in the Hall
pub fn create_test_state() -> GameState {
    let graph = WorldBuilder::build(&create_test_definition()).expect("test world must build");
    GameState::new(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_state() {
        let state = create_test_state();
        let view = state.current_room_view().unwrap();
        assert_eq!(view.name, "Hall");
        assert_eq!(view.directions, vec![Direction::East]);
        assert_eq!(view.items, vec!["Lamp".to_string(), "Statue".to_string()]);
    }
}
