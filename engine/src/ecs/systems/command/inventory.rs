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

use crate::ecs::context::GameState;
use crate::ecs::systems::{CommandResult, DropOutcome, InventorySystem, TakeOutcome};
use crate::error::GameResult;
use crate::presentation::Presenter;

/// Command to get list of inventory items
#[tracing::instrument(skip_all)]
pub fn inventory_command<P: Presenter>(
    state: &GameState,
    presenter: &P,
) -> GameResult<CommandResult> {
    let items = state.inventory_names()?;
    Ok(CommandResult::Success(presenter.inventory(&items)))
}

/// Command to pick an item up from the current room
#[tracing::instrument(skip(system, state))]
pub fn take_command(
    system: &mut InventorySystem,
    state: &mut GameState,
    target: &str,
) -> GameResult<CommandResult> {
    if target.is_empty() {
        return Ok(CommandResult::Failure("Take what?".to_string()));
    }

    let result = match system.pickup_item(state, target)? {
        TakeOutcome::Taken(item) => {
            let name = state.graph().name_of(item)?;
            let description = state.graph().description_of(item)?;
            CommandResult::Success(format!(
                "You picked up the {}.\nInitial examination of the {} reveals: {}",
                name, name, description
            ))
        }
        TakeOutcome::NotTakeable(_) | TakeOutcome::NotFound => {
            CommandResult::Failure(format!("You can't take the {}.", target))
        }
    };
    Ok(result)
}

/// Command to put a carried item down in the current room
#[tracing::instrument(skip(system, state))]
pub fn drop_command(
    system: &mut InventorySystem,
    state: &mut GameState,
    target: &str,
) -> GameResult<CommandResult> {
    if target.is_empty() {
        return Ok(CommandResult::Failure("Drop what?".to_string()));
    }

    let result = match system.drop_item(state, target)? {
        DropOutcome::Dropped(item) => {
            CommandResult::Success(format!("You dropped the {}.", state.graph().name_of(item)?))
        }
        DropOutcome::NotCarried => {
            CommandResult::Failure(format!("You don't have {} in your inventory.", target))
        }
    };
    Ok(result)
}
