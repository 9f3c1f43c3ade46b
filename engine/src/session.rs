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

//! Interactive game session
//!
//! A session owns one [`GameState`] and drives the read, execute, print
//! loop against a [`Console`] until the player quits or input runs out.

use crate::console::Console;
use crate::ecs::context::GameState;
use crate::ecs::systems::{CommandSystem, FAREWELL};
use crate::error::GameResult;
use crate::presentation::{Presenter, TextPresenter};

/// Default prompt shown before each command
pub const DEFAULT_PROMPT: &str = ">_";

/// Why a session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player typed `quit` or `exit`
    Quit,
    /// The console ran out of input
    EndOfInput,
}

pub struct Session<C: Console, P: Presenter = TextPresenter> {
    state: GameState,
    commands: CommandSystem<P>,
    console: C,
    prompt: String,
}

impl<C: Console> Session<C> {
    /// Create a new session with the plain text presenter
    pub fn new(state: GameState, console: C) -> Self {
        Self::with_commands(state, CommandSystem::new(), console)
    }
}

impl<C: Console, P: Presenter> Session<C, P> {
    pub fn with_commands(state: GameState, commands: CommandSystem<P>, console: C) -> Self {
        Self {
            state,
            commands,
            console,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Introduce the start room, then process commands until the player
    /// quits or the console has no more input
    #[tracing::instrument(skip(self))]
    pub fn run(&mut self) -> GameResult<SessionEnd> {
        let intro = self.commands.describe_current_room(&self.state)?;
        self.console.write_text(&intro)?;

        loop {
            let Some(line) = self.console.read_line(&self.prompt)? else {
                tracing::info!("Input closed, ending session");
                self.console.write_text(FAREWELL)?;
                return Ok(SessionEnd::EndOfInput);
            };

            let result = self.commands.execute_line(&mut self.state, &line)?;
            self.console.write_text(result.message())?;

            if result.is_quit() {
                return Ok(SessionEnd::Quit);
            }
        }
    }
}
