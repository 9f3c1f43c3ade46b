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

use crate::error::ConfigError;
use clap::Parser;
use manor_common::WorldDefinition;
use serde::{Deserialize, Serialize};
use serde_env_field::EnvField;
use std::convert::Infallible;
use std::str::FromStr;

#[derive(Debug, Default, Parser)]
#[command(version, about, long_about = None)]
pub struct Arguments {
    #[arg(short = 'c', long = "config", help = "Path to configuration file")]
    pub config_file: Option<String>,

    #[arg(
        short = 'e',
        long = "env",
        help = "Path to environment file (defaults to .env when present)"
    )]
    pub env_file: Option<String>,

    #[arg(
        short = 'w',
        long = "world",
        help = "Path to world definition file (overrides the configuration)"
    )]
    pub world_file: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(default)]
    pub game: GameConfig,
}

impl Configuration {
    pub fn load(path: &str) -> Result<Configuration, ConfigError> {
        let file = std::fs::File::open(path).map_err(|source| ConfigError::Open {
            path: path.to_string(),
            source,
        })?;
        let conf = serde_yaml::from_reader(file).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })?;

        Ok(conf)
    }

    /// World file to load, the command line taking precedence
    pub fn world_file<'a>(&'a self, arguments: &'a Arguments) -> Option<&'a str> {
        arguments
            .world_file
            .as_deref()
            .or_else(|| self.game.world_file.as_ref().map(|f| f.as_str()))
    }

    /// Load the configured world, or the built-in manor when none is set
    pub fn load_world(&self, arguments: &Arguments) -> Result<WorldDefinition, ConfigError> {
        match self.world_file(arguments) {
            Some(path) => load_world_definition(path),
            None => {
                tracing::debug!("No world file configured, using the built-in manor");
                Ok(WorldDefinition::manor())
            }
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GameConfig {
    /// Text shown before each command is read
    #[serde(default)]
    pub prompt: EnvField<Prompt>,

    /// YAML world definition replacing the built-in manor
    #[serde(default)]
    pub world_file: Option<EnvField<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt(String);

impl Prompt {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for Prompt {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl FromStr for Prompt {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl Default for Prompt {
    fn default() -> Self {
        Self(String::from(">_"))
    }
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Read a world definition from a YAML file
pub fn load_world_definition(path: &str) -> Result<WorldDefinition, ConfigError> {
    tracing::info!("Loading world definition from {}", path);
    let file = std::fs::File::open(path).map_err(|source| ConfigError::Open {
        path: path.to_string(),
        source,
    })?;
    serde_yaml::from_reader(file).map_err(|source| ConfigError::Parse {
        path: path.to_string(),
        source,
    })
}
