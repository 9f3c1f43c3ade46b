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

use clap::Parser;
use manor_engine::config::{Arguments, Configuration};
use manor_engine::console::StdConsole;
use manor_engine::ecs::{GameState, WorldBuilder};
use manor_engine::session::Session;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load arguments from the command line
    let arguments: Arguments = Parser::parse();

    // Initialize tracing/logging; game text owns stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(true)
        .init();

    // Load environment variables from .env file if specified
    if let Some(ref env_file) = arguments.env_file {
        if std::path::Path::new(env_file).exists() {
            tracing::debug!("Loading environment variables from file: {}", env_file);
            dotenv::from_filename(env_file).ok();
        } else {
            tracing::warn!("Environment file not found: {}", env_file);
        }
    } else {
        // Try default .env file
        tracing::debug!("Loading environment variables from default file");
        dotenv::dotenv().ok();
    }

    // Load configuration from a file with environment variable substitution
    let config = match arguments.config_file {
        Some(ref path) => Configuration::load(path).map_err(|e| {
            tracing::error!("Failed to load configuration: {}", e);
            e
        })?,
        None => Configuration::default(),
    };
    tracing::debug!("Configuration loaded: {:?}", config);

    let definition = match config.load_world(&arguments) {
        Ok(definition) => definition,
        Err(e) => {
            tracing::error!("Failed to load world: {}", e);
            return Err(format!("Failed to load world: {}", e).into());
        }
    };

    let graph = match WorldBuilder::build(&definition) {
        Ok(graph) => graph,
        Err(e) => {
            tracing::error!("Invalid world: {}", e);
            return Err(format!("Invalid world: {}", e).into());
        }
    };
    tracing::info!("World ready with {} rooms", graph.rooms().len());

    let mut session = Session::new(GameState::new(graph), StdConsole::new())
        .with_prompt(config.game.prompt.as_str());
    let end = session.run()?;
    tracing::info!("Session ended: {:?}", end);

    Ok(())
}
