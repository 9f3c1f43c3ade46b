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

//! Presentation of game state as player-facing text
//!
//! Presenters only see plain snapshots ([`RoomView`] and name lists), never
//! the ECS, so a different front-end can swap in its own [`Presenter`].
//!
//! Empty collections always render as an explicit sentence rather than an
//! empty list, for rooms and the inventory alike.

use manor_common::Direction;

/// Everything needed to describe a room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomView {
    pub name: String,
    pub description: String,
    /// Linked directions in north, south, east, west order
    pub directions: Vec<Direction>,
    /// Item names in display order
    pub items: Vec<String>,
}

/// Formats game state into text
pub trait Presenter {
    /// Room heading, description and exits; used on arrival
    fn room(&self, view: &RoomView) -> String;

    /// Exits line
    fn directions(&self, directions: &[Direction]) -> String;

    /// Room contents line
    fn room_contents(&self, items: &[String]) -> String;

    /// Player inventory line
    fn inventory(&self, items: &[String]) -> String;

    /// Full room description including contents; used by `look`
    fn look(&self, view: &RoomView) -> String {
        format!("{}\n{}", self.room(view), self.room_contents(&view.items))
    }
}

/// Plain text presenter for line-oriented terminals
#[derive(Debug, Clone, Copy, Default)]
pub struct TextPresenter;

impl Presenter for TextPresenter {
    fn room(&self, view: &RoomView) -> String {
        format!(
            "{}\n{}\n{}",
            view.name.to_uppercase(),
            view.description,
            self.directions(&view.directions)
        )
    }

    fn directions(&self, directions: &[Direction]) -> String {
        if directions.is_empty() {
            return "There are no exits.".to_string();
        }
        let names = directions
            .iter()
            .map(|d| d.as_str().to_uppercase())
            .collect::<Vec<_>>()
            .join(", ");
        format!("Directions: {}", names)
    }

    fn room_contents(&self, items: &[String]) -> String {
        if items.is_empty() {
            "The room is empty.".to_string()
        } else {
            format!("The room contains: {}", items.join(", "))
        }
    }

    fn inventory(&self, items: &[String]) -> String {
        if items.is_empty() {
            "You are carrying nothing.".to_string()
        } else {
            format!("Inventory: {}", items.join(", "))
        }
    }
}
