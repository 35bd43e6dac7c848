use super::{ReplayData, ReplayMetadata, REPLAY_EXTENSION};
use anyhow::{Context, Result};
use engine::Recording;
use flate2::read::GzDecoder;
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

pub struct ReplayReader;

impl ReplayReader {
    pub fn load_replay(path: &Path) -> Result<ReplayData> {
        let file =
            File::open(path).with_context(|| format!("Failed to open replay file: {:?}", path))?;
        let decoder = GzDecoder::new(file);
        let reader = BufReader::new(decoder);
        let mut lines = reader.lines();

        let metadata_line = lines
            .next()
            .context("Replay file is empty")?
            .context("Failed to read metadata line")?;
        let metadata: ReplayMetadata =
            serde_json::from_str(&metadata_line).context("Failed to parse replay metadata")?;

        let recording_line = lines
            .next()
            .context("Replay file missing recording")?
            .context("Failed to read recording line")?;
        let recording =
            Recording::from_json(&recording_line).context("Failed to parse recording")?;

        Ok(ReplayData {
            metadata,
            recording,
        })
    }

    /// All replay files under `dir`, newest first.
    pub fn list_replays(dir: &Path) -> Result<Vec<PathBuf>> {
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut replays = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension() == Some(OsStr::new(REPLAY_EXTENSION)) {
                replays.push(path);
            }
        }

        replays.sort_by(|a, b| {
            let a_time = a
                .metadata()
                .and_then(|m| m.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH);
            let b_time = b
                .metadata()
                .and_then(|m| m.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH);
            b_time.cmp(&a_time)
        });

        Ok(replays)
    }
}
