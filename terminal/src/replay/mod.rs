pub mod player;
pub mod reader;
pub mod writer;

use engine::Recording;
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// First line of a replay file; the recording follows on the second.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayMetadata {
    pub saved_at: SystemTime,
    pub final_score: u8,
    pub best_score: u8,
    pub frame_count: u32,
}

#[derive(Debug, Clone)]
pub struct ReplayData {
    pub metadata: ReplayMetadata,
    pub recording: Recording,
}

/// File extension replays are saved under.
pub const REPLAY_EXTENSION: &str = "replay";
