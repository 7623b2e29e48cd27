// Pointer events fed to the drag controller by the renderer.
// Y positions are in the same pixel space as the controller's `TimeGeometry`.

use serde::{Deserialize, Serialize};

use crate::interaction::resize::ResizeHandle;
use crate::models::interval::{AvailabilityKind, DayOfWeek, Interval, Minutes};

/// What the pointer went down on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PointerTarget {
    /// Empty grid cell, or the body of a block
    #[default]
    Empty,
    /// Resize handle of an existing block
    Handle {
        start: Minutes,
        end: Minutes,
        #[serde(default)]
        available: AvailabilityKind,
        edge: HandleEdge,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandleEdge {
    Top,
    Bottom,
}

impl From<HandleEdge> for ResizeHandle {
    fn from(edge: HandleEdge) -> Self {
        match edge {
            HandleEdge::Top => ResizeHandle::Top,
            HandleEdge::Bottom => ResizeHandle::Bottom,
        }
    }
}

impl PointerTarget {
    pub fn handle(interval: &Interval, handle: ResizeHandle) -> Self {
        PointerTarget::Handle {
            start: interval.start,
            end: interval.end,
            available: interval.kind,
            edge: match handle {
                ResizeHandle::Top => HandleEdge::Top,
                ResizeHandle::Bottom => HandleEdge::Bottom,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PointerEvent {
    Down {
        day: DayOfWeek,
        y: f32,
        #[serde(default)]
        target: PointerTarget,
    },
    Move {
        y: f32,
    },
    Up {
        y: f32,
    },
    /// Pointer entered a day column
    Enter {
        day: DayOfWeek,
        y: f32,
    },
    /// Pointer left the grid; the edge is worked out from `y`
    Leave {
        y: f32,
    },
}
