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

//! Help command implementation

use crate::ecs::systems::command::CommandResult;

/// Vocabulary listing shown by `help`
pub const HELP_TEXT: &str = "You can use the following commands:
- look: to look around the room
- take [item] (or get [item]): to pick up an item
- drop [item]: to drop an item
- inventory (or i): to see your inventory
- north/south/east/west: to move in that direction
- help: to display this help message
- quit (or exit): to quit the game";

/// Help command - lists the available commands
pub fn help_command() -> CommandResult {
    CommandResult::Success(HELP_TEXT.to_string())
}
