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

//! Command system for processing player commands

mod exit;
mod help;
mod inventory;
mod look;
mod parser;

pub use exit::FAREWELL;
pub use help::HELP_TEXT;
pub use parser::{Command, ParsedInput, parse_input};

use crate::ecs::context::GameState;
use crate::ecs::systems::{InventorySystem, MoveOutcome, MovementSystem};
use crate::error::GameResult;
use crate::presentation::{Presenter, TextPresenter};
use manor_common::Direction;

/// Reply for input that is not a known command
pub const INVALID_COMMAND: &str = "Invalid command, type 'help' for a list of commands.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    Success(String),
    Failure(String),
    Invalid(String),
    /// The player asked to leave; carries the farewell
    Quit(String),
}

impl CommandResult {
    /// Text to show the player
    pub fn message(&self) -> &str {
        match self {
            CommandResult::Success(text)
            | CommandResult::Failure(text)
            | CommandResult::Invalid(text)
            | CommandResult::Quit(text) => text,
        }
    }

    /// Whether the session should end after this result
    pub fn is_quit(&self) -> bool {
        matches!(self, CommandResult::Quit(_))
    }
}

/// Dispatches parsed commands against a game state
///
/// Player mistakes come back as `Failure` or `Invalid` results. An `Err`
/// means the entity model itself is broken (a room lost a component).
#[derive(Debug, Default)]
pub struct CommandSystem<P: Presenter = TextPresenter> {
    presenter: P,
    movement: MovementSystem,
    inventory: InventorySystem,
}

impl CommandSystem<TextPresenter> {
    /// Create a new command system with the plain text presenter
    pub fn new() -> Self {
        Self::with_presenter(TextPresenter)
    }
}

impl<P: Presenter> CommandSystem<P> {
    /// Create a new command system with a custom presenter
    pub fn with_presenter(presenter: P) -> Self {
        Self {
            presenter,
            movement: MovementSystem::new(),
            inventory: InventorySystem::new(),
        }
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Parse and execute one line of input
    pub fn execute_line(&mut self, state: &mut GameState, raw: &str) -> GameResult<CommandResult> {
        self.execute(state, Command::parse(raw))
    }

    /// Execute a command
    pub fn execute(&mut self, state: &mut GameState, command: Command) -> GameResult<CommandResult> {
        tracing::debug!("Executing {:?}", command);
        match command {
            Command::Look => look::look_command(state, &self.presenter),
            Command::Take(target) => inventory::take_command(&mut self.inventory, state, &target),
            Command::Drop(target) => inventory::drop_command(&mut self.inventory, state, &target),
            Command::Inventory => inventory::inventory_command(state, &self.presenter),
            Command::Help => Ok(help::help_command()),
            Command::Quit => Ok(exit::exit_command()),
            Command::Move(direction) => self.move_command(state, direction),
            Command::Unknown(action) => {
                tracing::debug!("Unknown command: '{}'", action);
                Ok(CommandResult::Invalid(INVALID_COMMAND.to_string()))
            }
        }
    }

    /// Render the player's room as shown on arrival
    pub fn describe_current_room(&self, state: &GameState) -> GameResult<String> {
        Ok(self.presenter.room(&state.current_room_view()?))
    }

    #[tracing::instrument(skip(self, state))]
    fn move_command(
        &mut self,
        state: &mut GameState,
        direction: Direction,
    ) -> GameResult<CommandResult> {
        match self.movement.move_player(state, direction)? {
            MoveOutcome::Moved { .. } => {
                Ok(CommandResult::Success(self.describe_current_room(state)?))
            }
            MoveOutcome::NoExit => Ok(CommandResult::Failure(format!(
                "You can't go {} from here.",
                direction
            ))),
        }
    }
}
