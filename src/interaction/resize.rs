// Block Resize Handles
//
// Busy blocks can be resized by dragging a handle on their top or bottom edge.
// Grabbing a handle pins the opposite edge as the drag anchor.

use crate::models::interval::{Interval, SelectionArgs};
use crate::services::geometry::TimeGeometry;

/// Which edge of the block is being dragged
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizeHandle {
    /// Top edge - adjusts start time
    Top,
    /// Bottom edge - adjusts end time
    Bottom,
}

/// Pixel height of the handle hit area
pub const HANDLE_SIZE: f32 = 8.0;

impl ResizeHandle {
    /// Selection for dragging this edge of `interval`: the other edge is the anchor
    pub fn grab(self, interval: &Interval) -> SelectionArgs {
        match self {
            ResizeHandle::Top => interval.grab_start(),
            ResizeHandle::Bottom => interval.grab_end(),
        }
    }

    /// Which handle, if any, of `interval` sits under the pointer
    pub fn hit_test(interval: &Interval, geometry: &TimeGeometry, y: f32) -> Option<Self> {
        let top = geometry.top + geometry.minutes_to_offset(interval.start);
        let bottom = geometry.top + geometry.minutes_to_offset(interval.end);
        let half = HANDLE_SIZE / 2.0;

        if (y - top).abs() <= half {
            Some(ResizeHandle::Top)
        } else if (y - bottom).abs() <= half {
            Some(ResizeHandle::Bottom)
        } else {
            None
        }
    }
}
