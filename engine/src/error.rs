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

//! Engine error types
//!
//! Player mistakes are never errors; they come back as
//! [`CommandResult`](crate::ecs::systems::CommandResult) messages. The types
//! here cover world construction, configuration loading, and broken
//! internal invariants.

use manor_common::Direction;
use thiserror::Error;

/// Errors raised while building a world graph from a definition.
#[derive(Debug, Error)]
pub enum WorldError {
    /// The definition contains no rooms.
    #[error("World has no rooms")]
    Empty,

    /// Two rooms share the same name (case-insensitive).
    #[error("Duplicate room name: {0}")]
    DuplicateRoom(String),

    /// Two items in the same room share the same name (case-insensitive).
    #[error("Duplicate item '{item}' in room '{room}'")]
    DuplicateItem { room: String, item: String },

    /// An exit names a room that does not exist.
    #[error("Room '{room}' has an exit {direction} to unknown room '{target}'")]
    UnknownRoom {
        room: String,
        direction: Direction,
        target: String,
    },

    /// The start room does not exist.
    #[error("Start room not found: {0}")]
    UnknownStartRoom(String),

    /// A link has no matching link back.
    #[error("Room '{from}' leads {direction} to '{to}', but '{to}' does not lead {} back", .direction.opposite())]
    AsymmetricLink {
        from: String,
        direction: Direction,
        to: String,
    },

    /// The ECS rejected an access while wiring the graph.
    #[error("Component error: {0}")]
    Component(#[from] hecs::ComponentError),
}

/// Errors raised while loading configuration or world files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be opened.
    #[error("Failed to open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid YAML for the expected shape.
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Errors that end a game session.
#[derive(Debug, Error)]
pub enum GameError {
    /// An entity is missing a component it must have.
    #[error("Component error: {0}")]
    Component(#[from] hecs::ComponentError),

    /// The console failed to read or write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The world could not be built.
    #[error("World error: {0}")]
    World(#[from] WorldError),

    /// Configuration or a world file could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
