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
use crate::ecs::systems::CommandResult;
use crate::error::GameResult;
use crate::presentation::Presenter;

/// Describe the current room with its contents
#[tracing::instrument(skip_all)]
pub fn look_command<P: Presenter>(state: &GameState, presenter: &P) -> GameResult<CommandResult> {
    let view = state.current_room_view()?;
    tracing::debug!("Looking around {}", view.name);
    Ok(CommandResult::Success(presenter.look(&view)))
}
