// Settings module
// Grid bounds and drag tuning, stored as TOML

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::interval::Minutes;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("first_hour ({first}) must be before last_hour ({last})")]
    HourOrder { first: u32, last: u32 },

    #[error("last_hour must be at most 24, got {0}")]
    LastHourTooLate(u32),

    #[error("snap_minutes must be positive")]
    ZeroSnap,

    #[error("min_block_minutes must be between 1 and the grid length ({grid} minutes), got {block}")]
    BlockSize { block: Minutes, grid: Minutes },

    #[error("days_shown must be between 1 and 7, got {0}")]
    DaysShown(usize),
}

/// Layout of the availability grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// First hour shown on the grid (inclusive)
    pub first_hour: u32,
    /// Last hour shown on the grid, the bottom edge
    pub last_hour: u32,
    /// Pointer positions snap to this many minutes
    pub snap_minutes: Minutes,
    /// Committed blocks are at least this long
    pub min_block_minutes: Minutes,
    /// Number of day columns, starting from Monday
    pub days_shown: usize,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            first_hour: 7,
            last_hour: 23,
            snap_minutes: 10,
            min_block_minutes: 30,
            days_shown: 5,
        }
    }
}

impl GridSettings {
    pub fn first_minute(&self) -> Minutes {
        self.first_hour * 60
    }

    pub fn last_minute(&self) -> Minutes {
        self.last_hour * 60
    }

    /// Length of the visible day in minutes
    pub fn grid_minutes(&self) -> Minutes {
        self.last_minute().saturating_sub(self.first_minute())
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.last_hour > 24 {
            return Err(SettingsError::LastHourTooLate(self.last_hour));
        }
        if self.first_hour >= self.last_hour {
            return Err(SettingsError::HourOrder {
                first: self.first_hour,
                last: self.last_hour,
            });
        }
        if self.snap_minutes == 0 {
            return Err(SettingsError::ZeroSnap);
        }
        if self.min_block_minutes == 0 || self.min_block_minutes > self.grid_minutes() {
            return Err(SettingsError::BlockSize {
                block: self.min_block_minutes,
                grid: self.grid_minutes(),
            });
        }
        if !(1..=7).contains(&self.days_shown) {
            return Err(SettingsError::DaysShown(self.days_shown));
        }
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
