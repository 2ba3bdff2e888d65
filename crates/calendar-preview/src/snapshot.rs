//! Calendar snapshot JSON.
//!
//! Either the bare object or wrapped in an `attributes` field, the way a
//! home-automation sensor exposes it.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// One event as the data source reports it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawEvent {
    /// Event title.
    pub title: String,
    /// Source calendar name.
    #[serde(default)]
    pub calendar: String,
    /// `YYYY-MM-DD` for all-day events, otherwise `YYYY-MM-DDTHH:MM[:SS][±TZ]`.
    pub start: String,
    /// Same format as `start`, inclusive.
    pub end: String,
}

/// Calendar data for one render.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Snapshot {
    /// Today as `YYYY-MM-DD`.
    pub current_date: String,
    /// Today's weekday name.
    #[serde(default)]
    pub current_day: String,
    /// Time the snapshot was taken.
    #[serde(default)]
    pub current_time: String,
    /// First day of the window as `YYYY-MM-DD`.
    pub week_start: String,
    /// Events in source order.
    #[serde(default)]
    pub events: Vec<RawEvent>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotFile {
    Wrapped { attributes: Snapshot },
    Bare(Snapshot),
}

impl Snapshot {
    /// Parse snapshot JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: SnapshotFile =
            serde_json::from_str(json).context("snapshot is not valid calendar JSON")?;
        Ok(match file {
            SnapshotFile::Wrapped { attributes } => attributes,
            SnapshotFile::Bare(snapshot) => snapshot,
        })
    }

    /// Read and parse a snapshot file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read snapshot {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// `HH:MM` part of `current_time`, for the status bar.
    pub fn refresh_time(&self) -> &str {
        self.current_time.get(..5).unwrap_or(&self.current_time)
    }
}
