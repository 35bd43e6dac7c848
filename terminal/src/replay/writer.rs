use super::{ReplayData, ReplayMetadata, REPLAY_EXTENSION};
use anyhow::{Context, Result};
use engine::Recording;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

pub struct ReplayWriter;

impl ReplayWriter {
    /// Write a replay file: one gzip stream of two JSON lines, metadata
    /// first, then the recording.
    pub fn save(path: &Path, data: &ReplayData) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create replay dir: {:?}", parent))?;
        }
        let file = File::create(path)
            .with_context(|| format!("Failed to create replay file: {:?}", path))?;
        let mut encoder = GzEncoder::new(file, Compression::default());

        let metadata_line =
            serde_json::to_string(&data.metadata).context("Failed to serialize metadata")?;
        let recording_line = data
            .recording
            .to_json()
            .context("Failed to serialize recording")?;
        writeln!(encoder, "{}", metadata_line)?;
        writeln!(encoder, "{}", recording_line)?;
        encoder.finish().context("Failed to finish gzip stream")?;
        Ok(())
    }

    /// Save a finished run into `dir` under a timestamped name.
    pub fn save_run(dir: &Path, recording: &Recording, score: u8, best: u8) -> Result<PathBuf> {
        let saved_at = SystemTime::now();
        let stamp = saved_at
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let path = dir.join(format!("run_{stamp}.{REPLAY_EXTENSION}"));
        let data = ReplayData {
            metadata: ReplayMetadata {
                saved_at,
                final_score: score,
                best_score: best,
                frame_count: recording.len() as u32,
            },
            recording: recording.clone(),
        };
        Self::save(&path, &data)?;
        tracing::info!(?path, frames = recording.len(), "saved replay");
        Ok(path)
    }
}
