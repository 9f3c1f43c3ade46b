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

//! Identity components for entity identification and description

use serde::{Deserialize, Serialize};

/// Display name used for rendering and lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    /// Primary display name
    pub display: String,
    /// Lowercased name used for matching
    pub keyword: String,
}

impl Name {
    /// Create a new name
    pub fn new(display: impl Into<String>) -> Self {
        let display = display.into();
        let keyword = display.to_lowercase();
        Self { display, keyword }
    }

    /// Check if this name is exactly the given text, ignoring case
    pub fn matches(&self, text: &str) -> bool {
        self.keyword == text.to_lowercase()
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display)
    }
}

/// Player-facing description of a room or an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    pub text: String,
}

impl Description {
    /// Create a new description
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Get the description text
    pub fn as_str(&self) -> &str {
        &self.text
    }
}
