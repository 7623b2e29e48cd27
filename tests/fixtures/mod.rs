// Test fixtures - reusable grid setups and gesture helpers
// Geometry is one pixel per minute with 7:00 at y = 0

#![allow(dead_code)]

use availability_grid::services::geometry::TimeGeometry;
use availability_grid::{
    AvailabilityEngine, DayOfWeek, DragController, GridSettings, Minutes, PointerEvent,
    PointerTarget,
};

pub const TERM: &str = "202031";

pub fn settings() -> GridSettings {
    GridSettings::default()
}

/// Engine on the test term plus a controller over a 960px column
pub fn grid() -> (DragController, AvailabilityEngine) {
    let settings = settings();
    let geometry = TimeGeometry::new(0.0, 960.0, &settings);
    (
        DragController::new(geometry),
        AvailabilityEngine::for_term(settings, TERM),
    )
}

/// Pixel offset of a minute of the day
pub fn y(minutes: Minutes) -> f32 {
    minutes as f32 - 420.0
}

pub mod events {
    use super::*;

    pub fn down(day: DayOfWeek, minutes: Minutes) -> PointerEvent {
        PointerEvent::Down {
            day,
            y: y(minutes),
            target: PointerTarget::Empty,
        }
    }

    pub fn move_to(minutes: Minutes) -> PointerEvent {
        PointerEvent::Move { y: y(minutes) }
    }

    pub fn enter(day: DayOfWeek, minutes: Minutes) -> PointerEvent {
        PointerEvent::Enter { day, y: y(minutes) }
    }

    pub fn up(minutes: Minutes) -> PointerEvent {
        PointerEvent::Up { y: y(minutes) }
    }
}

/// Run a whole gesture
pub fn replay(
    controller: &mut DragController,
    engine: &mut AvailabilityEngine,
    gesture: impl IntoIterator<Item = PointerEvent>,
) {
    for event in gesture {
        controller.handle(engine, event);
    }
}

/// `(start, end)` pairs of one day, sorted
pub fn ranges(engine: &AvailabilityEngine, day: DayOfWeek) -> Vec<(Minutes, Minutes)> {
    engine
        .store()
        .day_intervals(day)
        .iter()
        .map(|interval| (interval.start, interval.end))
        .collect()
}
