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

//! Command line parsing
//!
//! Input is split into a verb (`action`) and the rest of the line
//! (`target`). There is no grammar beyond that: `take the brass key` looks
//! for an item literally named "the brass key".

use manor_common::Direction;

/// Raw input split into verb and remainder, both lowercased
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedInput {
    pub action: String,
    pub target: String,
}

impl ParsedInput {
    /// Whether anything followed the verb
    pub fn has_target(&self) -> bool {
        !self.target.is_empty()
    }
}

/// Split a line into action and target.
///
/// Lowercases, trims, and splits on runs of whitespace. The first token is
/// the action; the remaining tokens joined with single spaces are the target.
pub fn parse_input(raw: &str) -> ParsedInput {
    let lowered = raw.to_lowercase();
    let mut tokens = lowered.split_whitespace();
    let action = tokens.next().unwrap_or_default().to_string();
    let target = tokens.collect::<Vec<_>>().join(" ");
    ParsedInput { action, target }
}

/// A player command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Look,
    Take(String),
    Drop(String),
    Inventory,
    Help,
    Quit,
    Move(Direction),
    /// Unrecognised action, kept for logging
    Unknown(String),
}

impl Command {
    /// Parse a raw input line
    pub fn parse(raw: &str) -> Self {
        Self::from(parse_input(raw))
    }
}

impl From<ParsedInput> for Command {
    fn from(parsed: ParsedInput) -> Self {
        match parsed.action.as_str() {
            "look" => Command::Look,
            "take" | "get" => Command::Take(parsed.target),
            "drop" => Command::Drop(parsed.target),
            "inventory" | "i" => Command::Inventory,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            action => match action.parse::<Direction>() {
                Ok(direction) => Command::Move(direction),
                Err(_) => Command::Unknown(parsed.action),
            },
        }
    }
}
