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

//! Line-oriented player I/O
//!
//! The game never touches stdin or stdout directly; it reads and writes
//! through a [`Console`], so tests can script a whole session.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Source of player input and sink for game text
#[cfg_attr(test, mockall::automock)]
pub trait Console {
    /// Show the prompt and read one line, without its line ending.
    /// Returns `None` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Write a block of text followed by a newline
    fn write_text(&mut self, text: &str) -> io::Result<()>;
}

/// Console over a reader and a writer, stdin and stdout by default
pub struct StdConsole<R = io::StdinLock<'static>, W = io::Stdout> {
    input: R,
    output: W,
}

impl StdConsole {
    pub fn new() -> Self {
        Self::with_io(io::stdin().lock(), io::stdout())
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    pub fn with_io(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buffer = Vec::new();
        if self.input.read_until(b'\n', &mut buffer)? == 0 {
            // Keep the farewell off the prompt line
            writeln!(self.output)?;
            return Ok(None);
        }
        // Undecodable bytes become U+FFFD so a garbled line is just an
        // unknown command
        let line = String::from_utf8_lossy(&buffer);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn write_text(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()
    }
}

/// Console that replays fixed input lines and records everything written
#[derive(Debug, Default, Clone)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: Vec<String>,
    prompts: usize,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: Vec::new(),
            prompts: 0,
        }
    }

    /// Every block written so far, in order
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// All output joined by newlines
    pub fn transcript(&self) -> String {
        self.output.join("\n")
    }

    /// How many times input was requested
    pub fn prompts_shown(&self) -> usize {
        self.prompts
    }

    /// Lines not yet consumed
    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        self.prompts += 1;
        Ok(self.input.pop_front())
    }

    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.output.push(text.to_string());
        Ok(())
    }
}
