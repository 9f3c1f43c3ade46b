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

//! Manor Engine
//!
//! Single-player text adventure engine:
//! - Rooms, items and the player as `hecs` entities
//! - Command parsing and dispatch
//! - Text presentation and the interactive session loop
//! - Configuration loading

pub mod config;
pub mod console;
pub mod ecs;
pub mod error;
pub mod presentation;
pub mod session;
