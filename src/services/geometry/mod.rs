//! Pointer position to time-of-day conversion for the grid's day columns.
//!
//! The grid spans `first_hour..last_hour` over the height of the meetings
//! container. Positions above or below the container clamp to the grid edges.

use crate::models::interval::Minutes;
use crate::models::settings::GridSettings;

/// Vertical layout of the day columns, in the renderer's pixel space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGeometry {
    pub top: f32,
    pub height: f32,
    first_minute: Minutes,
    last_minute: Minutes,
    snap_minutes: Minutes,
}

impl TimeGeometry {
    /// Settings with `last_hour <= first_hour` collapse the grid to its first minute
    pub fn new(top: f32, height: f32, settings: &GridSettings) -> Self {
        let first_minute = settings.first_minute();
        Self {
            top,
            height,
            first_minute,
            last_minute: first_minute + settings.grid_minutes(),
            snap_minutes: settings.snap_minutes.max(1),
        }
    }

    /// Move or resize the container (window resize, scroll)
    pub fn set_bounds(&mut self, top: f32, height: f32) {
        self.top = top;
        self.height = height;
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn first_minute(&self) -> Minutes {
        self.first_minute
    }

    pub fn last_minute(&self) -> Minutes {
        self.last_minute
    }

    fn span(&self) -> Minutes {
        self.last_minute - self.first_minute
    }

    pub fn is_above(&self, y: f32) -> bool {
        y < self.top
    }

    pub fn is_below(&self, y: f32) -> bool {
        y > self.bottom()
    }

    /// Time under the pointer, snapped and clamped to the grid
    pub fn pointer_to_minutes(&self, y: f32) -> Minutes {
        if self.is_above(y) || !(self.height > 0.0) || self.span() == 0 {
            return self.first_minute;
        }
        if self.is_below(y) {
            return self.last_minute;
        }

        let span = self.span() as f32;
        let raw = (y - self.top) * span / self.height;
        let snap = self.snap_minutes as f32;
        let snapped = (raw / snap).round() * snap;

        let minutes = self.first_minute + snapped.max(0.0) as Minutes;
        minutes.clamp(self.first_minute, self.last_minute)
    }

    /// Pixel offset of a time within the container, for placing cards and handles
    pub fn minutes_to_offset(&self, minutes: Minutes) -> f32 {
        if self.span() == 0 {
            return 0.0;
        }
        let span = self.span() as f32;
        let clamped = minutes.clamp(self.first_minute, self.last_minute);
        (clamped - self.first_minute) as f32 / span * self.height
    }
}

/// One-shot conversion without keeping a geometry around
pub fn pointer_to_minutes(
    pointer_y: f32,
    container_top: f32,
    container_height: f32,
    settings: &GridSettings,
) -> Minutes {
    TimeGeometry::new(container_top, container_height, settings).pointer_to_minutes(pointer_y)
}
