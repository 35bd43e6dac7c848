use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

use crate::input::KeyState;
use crate::machine::GameEngine;

/// A recorded session: the power-on seed plus the key lines of every
/// tick. The machine is deterministic, so this is enough to rebuild any
/// frame of the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recording {
    pub seed: u16,
    pub frames: Vec<KeyState>,
}

impl Recording {
    pub fn new(seed: u16) -> Self {
        Recording {
            seed,
            frames: Vec::new(),
        }
    }

    pub fn push(&mut self, keys: KeyState) {
        self.frames.push(keys);
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Sanity-check a recording loaded from disk.
    pub fn validate(&self) -> Result<()> {
        ensure!(!self.frames.is_empty(), "recording has no frames");
        // An hour of ticks is far beyond any real session; longer files
        // are corrupt or not ours.
        ensure!(
            self.frames.len() <= 60 * 60 * 60,
            "recording implausibly long: {} frames",
            self.frames.len()
        );
        Ok(())
    }

    /// A fresh engine at the recording's power-on state.
    pub fn fresh_engine(&self) -> GameEngine {
        GameEngine::with_seed(self.seed)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Recording> {
        let recording: Recording = serde_json::from_str(json)?;
        recording.validate()?;
        Ok(recording)
    }
}
