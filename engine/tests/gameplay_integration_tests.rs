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

//! Integration tests for complete play sessions

use manor_engine::console::ScriptedConsole;
use manor_engine::ecs::components::Container;
use manor_engine::ecs::systems::{CommandResult, CommandSystem, FAREWELL};
use manor_engine::ecs::{EcsEntity, GameState};
use manor_engine::session::{Session, SessionEnd};

fn play(system: &mut CommandSystem, state: &mut GameState, line: &str) -> CommandResult {
    system.execute_line(state, line).unwrap()
}

fn all_items(state: &GameState) -> Vec<EcsEntity> {
    state
        .graph()
        .rooms()
        .iter()
        .flat_map(|&room| state.entities().get::<&Container>(room).unwrap().contents.clone())
        .collect()
}

#[test]
fn test_foyer_to_living_room() {
    let mut state = GameState::manor().unwrap();
    let mut system = CommandSystem::new();

    let look = play(&mut system, &mut state, "look");
    assert!(look.message().starts_with("FOYER\n"));
    assert!(look.message().ends_with("Directions: NORTH\nThe room contains: Note"));

    let take = play(&mut system, &mut state, "take note");
    assert!(matches!(take, CommandResult::Success(_)));
    assert!(take.message().starts_with("You picked up the Note."));
    assert!(
        take.message()
            .contains("Initial examination of the Note reveals: A piece of paper with some writing on it.")
    );

    let north = play(&mut system, &mut state, "north");
    assert!(north.message().starts_with("LIVING ROOM\n"));
    assert!(north.message().ends_with("Directions: SOUTH, EAST"));

    assert_eq!(
        play(&mut system, &mut state, "inventory"),
        CommandResult::Success("Inventory: Note".to_string())
    );
    assert_eq!(
        play(&mut system, &mut state, "drop note"),
        CommandResult::Success("You dropped the Note.".to_string())
    );
    assert!(
        play(&mut system, &mut state, "look")
            .message()
            .ends_with("The room contains: Screwdriver, Note")
    );
    assert_eq!(
        play(&mut system, &mut state, "inventory"),
        CommandResult::Success("You are carrying nothing.".to_string())
    );
}

#[test]
fn test_south_from_foyer_is_blocked() {
    let mut state = GameState::manor().unwrap();
    let mut system = CommandSystem::new();
    let foyer = state.current_room().unwrap();

    assert_eq!(
        play(&mut system, &mut state, "south"),
        CommandResult::Failure("You can't go south from here.".to_string())
    );
    assert_eq!(state.current_room().unwrap(), foyer);
}

#[test]
fn test_quit_ends_session_without_more_prompts() {
    let console = ScriptedConsole::new(["look", "quit", "north", "look"]);
    let mut session = Session::new(GameState::manor().unwrap(), console);

    assert_eq!(session.run().unwrap(), SessionEnd::Quit);
    let foyer = session.state().graph().start_room();
    assert_eq!(session.state().current_room().unwrap(), foyer);

    let console = session.into_console();
    assert_eq!(console.prompts_shown(), 2);
    assert_eq!(console.remaining_input(), 2);
    // intro, look, farewell
    assert_eq!(console.output().len(), 3);
    assert_eq!(console.output()[2], FAREWELL);
}

#[test]
fn test_mirror_cannot_be_taken() {
    let mut state = GameState::manor().unwrap();
    let mut system = CommandSystem::new();
    for line in ["north", "east", "east"] {
        play(&mut system, &mut state, line);
    }
    let before = state.current_room_view().unwrap();

    assert_eq!(
        play(&mut system, &mut state, "take mirror"),
        CommandResult::Failure("You can't take the mirror.".to_string())
    );
    assert_eq!(state.current_room_view().unwrap(), before);
    assert!(state.inventory_names().unwrap().is_empty());
}

#[test]
fn test_take_is_case_insensitive() {
    for line in ["take KEY", "take key", "Take Key", "GET key"] {
        let mut state = GameState::manor().unwrap();
        let mut system = CommandSystem::new();
        play(&mut system, &mut state, "north");
        play(&mut system, &mut state, "east");

        let result = play(&mut system, &mut state, line);
        assert!(
            result.message().starts_with("You picked up the Key."),
            "'{}' gave '{}'",
            line,
            result.message()
        );
        assert_eq!(state.inventory_names().unwrap(), vec!["Key".to_string()]);
        assert!(state.current_room_view().unwrap().items.is_empty());
    }
}

#[test]
fn test_take_then_drop_restores_room() {
    let mut state = GameState::manor().unwrap();
    let mut system = CommandSystem::new();
    for line in ["north", "east", "east"] {
        play(&mut system, &mut state, line);
    }
    let mut before = state.current_room_view().unwrap().items;

    play(&mut system, &mut state, "take brooch");
    assert_eq!(state.current_room_view().unwrap().items, vec!["Mirror".to_string()]);
    play(&mut system, &mut state, "drop brooch");

    let mut after = state.current_room_view().unwrap().items;
    before.sort();
    after.sort();
    assert_eq!(before, after);
}

#[test]
fn test_items_are_never_duplicated_or_lost() {
    let mut state = GameState::manor().unwrap();
    let mut system = CommandSystem::new();
    let items = all_items(&state);
    assert_eq!(items.len(), 5);

    let script = [
        "take note", "north", "take screwdriver", "drop note", "east", "take key",
        "drop screwdriver", "take key", "east", "take brooch", "take mirror", "drop key",
        "west", "drop brooch", "drop note", "west", "south", "inventory",
    ];
    for line in script {
        play(&mut system, &mut state, line);
        for &item in &items {
            assert_eq!(
                state.holders_of(item).len(),
                1,
                "item {:?} after '{}'",
                item,
                line
            );
        }
    }
}

#[test]
fn test_invalid_input_keeps_playing() {
    let console = ScriptedConsole::new(["", "dance wildly", "n", "north"]);
    let mut session = Session::new(GameState::manor().unwrap(), console);

    assert_eq!(session.run().unwrap(), SessionEnd::EndOfInput);
    let output = session.console().output();
    for reply in &output[1..4] {
        assert_eq!(reply, "Invalid command, type 'help' for a list of commands.");
    }
    assert!(output[4].starts_with("LIVING ROOM\n"));
    assert_eq!(output[5], FAREWELL);
}
