//! Per-term availability snapshots on disk.
//!
//! A snapshot is the JSON the session store keeps for a term. Loading is
//! forgiving: a missing file is an empty snapshot and entries that don't
//! describe a valid block are dropped. Saving replaces the file in one rename.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::models::interval::{Interval, SavedAvailability};

/// Saved availabilities for one term, in the session store's JSON shape
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilitySnapshot {
    pub term: String,
    #[serde(default)]
    pub availabilities: Vec<SavedAvailability>,
}

impl AvailabilitySnapshot {
    pub fn new(term: impl Into<String>, intervals: Vec<Interval>) -> Self {
        Self {
            term: term.into(),
            availabilities: intervals.into_iter().map(SavedAvailability::from).collect(),
        }
    }

    pub fn intervals(&self) -> Vec<Interval> {
        self.availabilities
            .iter()
            .filter_map(|saved| Interval::try_from(*saved).ok())
            .collect()
    }
}

/// Read the snapshot at `path`, dropping entries that aren't valid blocks
pub fn load_snapshot(path: &Path) -> Result<AvailabilitySnapshot> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            log::debug!("No availabilities saved at {}", path.display());
            return Ok(AvailabilitySnapshot::default());
        }
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read availabilities from {}", path.display()))
        }
    };

    let mut snapshot: AvailabilitySnapshot = serde_json::from_str(&data)
        .with_context(|| format!("failed to parse availabilities in {}", path.display()))?;

    snapshot.availabilities.retain(|saved| match Interval::try_from(*saved) {
        Ok(_) => true,
        Err(err) => {
            log::warn!("Dropping availability {:?} from {}: {}", saved, path.display(), err);
            false
        }
    });
    log::info!(
        "Loaded {} availabilities for term {} from {}",
        snapshot.availabilities.len(),
        snapshot.term,
        path.display()
    );
    Ok(snapshot)
}

/// Write the snapshot next to `path` and rename it into place
pub fn save_snapshot(path: &Path, snapshot: &AvailabilitySnapshot) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create dir {}", parent.display()))?;
    }

    let data = serde_json::to_string_pretty(snapshot)?;
    let staging = path.with_extension("json.tmp");
    fs::write(&staging, data)
        .with_context(|| format!("failed to write availabilities to {}", staging.display()))?;
    fs::rename(&staging, path)
        .with_context(|| format!("failed to replace {}", path.display()))?;
    Ok(())
}
