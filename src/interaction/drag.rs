// Availability Drag Controller
//
// Turns the pointer events of one gesture into engine actions:
// - press on an empty cell starts a new block, press on a handle resizes one
// - moves drag the free endpoint of every selected block together
// - entering other day columns paints copies across the days in between
// - release, or leaving through the top/bottom, rounds and commits the blocks
// - leaving sideways captures the pointer so the gesture can finish outside

use crate::commands::AvailabilityAction;
use crate::interaction::events::{PointerEvent, PointerTarget};
use crate::interaction::resize::ResizeHandle;
use crate::models::interval::{AvailabilityKind, DayOfWeek, Interval, Minutes, SelectionArgs};
use crate::services::availability::AvailabilityEngine;
use crate::services::geometry::TimeGeometry;
use crate::services::rounding::round_up;
use crate::utils::time::{format_clock, to_naive_time};
use chrono::NaiveTime;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragState {
    Idle,
    /// Pointer is down but hasn't moved; nothing is in the store yet
    CreatingNew { day: DayOfWeek, anchor: Minutes },
    /// One block on `day` follows the pointer
    DraggingExisting { day: DayOfWeek, anchor: Minutes },
    /// Copies on every day from `origin` to `hovered` follow the pointer
    CrossDayExpanding {
        origin: DayOfWeek,
        hovered: DayOfWeek,
    },
}

/// What an event did, so the renderer knows whether to redraw or save
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragOutcome {
    Ignored,
    Preview,
    /// Pointer left sideways and is now tracked outside the grid
    Captured,
    Committed { days: usize },
}

#[derive(Clone, Debug)]
pub struct DragController {
    geometry: TimeGeometry,
    mode: AvailabilityKind,
    state: DragState,
    origin_day: Option<DayOfWeek>,
    /// Last day column the drag was in
    last_day: Option<DayOfWeek>,
    /// Column and time under the pointer, for the hover time display
    hover: Option<(DayOfWeek, Minutes)>,
    /// Set while the pointer is outside the grid mid-drag
    capture: bool,
}

impl DragController {
    pub fn new(geometry: TimeGeometry) -> Self {
        Self {
            geometry,
            mode: AvailabilityKind::Busy,
            state: DragState::Idle,
            origin_day: None,
            last_day: None,
            hover: None,
            capture: false,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state != DragState::Idle
    }

    pub fn is_capturing(&self) -> bool {
        self.capture
    }

    pub fn hovered(&self) -> Option<(DayOfWeek, Minutes)> {
        self.hover
    }

    /// Hover position as a time of day, for the tooltip next to the pointer
    pub fn hovered_time(&self) -> Option<(DayOfWeek, NaiveTime)> {
        let (day, minutes) = self.hover?;
        to_naive_time(minutes).map(|time| (day, time))
    }

    pub fn mode(&self) -> AvailabilityKind {
        self.mode
    }

    /// Kind of block new gestures paint
    pub fn set_mode(&mut self, mode: AvailabilityKind) {
        self.mode = mode;
    }

    pub fn geometry(&self) -> &TimeGeometry {
        &self.geometry
    }

    /// Follow the day columns when the renderer moves or resizes them
    pub fn set_bounds(&mut self, top: f32, height: f32) {
        self.geometry.set_bounds(top, height);
    }

    pub fn handle(&mut self, engine: &mut AvailabilityEngine, event: PointerEvent) -> DragOutcome {
        match event {
            PointerEvent::Down { day, y, target } => self.pointer_down(engine, day, y, target),
            PointerEvent::Move { y } => self.pointer_move(engine, y),
            PointerEvent::Up { y } => self.pointer_up(engine, y),
            PointerEvent::Enter { day, y } => self.pointer_enter(engine, day, y),
            PointerEvent::Leave { y } => self.pointer_leave(engine, y),
        }
    }

    /// Delete button on a block. Ignored mid-gesture.
    pub fn delete_interval(&mut self, engine: &mut AvailabilityEngine, interval: &Interval) -> bool {
        if self.is_dragging() {
            log::debug!("Ignoring delete of {} during a drag", interval);
            return false;
        }
        engine.dispatch(AvailabilityAction::Delete(interval.grab_end()))
    }

    fn pointer_down(
        &mut self,
        engine: &mut AvailabilityEngine,
        day: DayOfWeek,
        y: f32,
        target: PointerTarget,
    ) -> DragOutcome {
        if self.is_dragging() {
            log::debug!("Ignoring pointer down while a drag is active");
            return DragOutcome::Ignored;
        }
        if !is_shown(engine, day) {
            log::debug!("Ignoring pointer down on hidden column {}", day);
            return DragOutcome::Ignored;
        }

        let minutes = self.geometry.pointer_to_minutes(y);
        self.hover = Some((day, minutes));
        self.origin_day = Some(day);
        self.last_day = Some(day);
        self.capture = false;

        match target {
            PointerTarget::Empty => {
                log::debug!(
                    "Starting new block on {} at {}",
                    day,
                    format_clock(minutes, false)
                );
                self.state = DragState::CreatingNew {
                    day,
                    anchor: minutes,
                };
            }
            PointerTarget::Handle {
                start,
                end,
                available,
                edge,
            } => {
                let interval = Interval {
                    day,
                    start,
                    end,
                    kind: available,
                };
                let args = ResizeHandle::from(edge).grab(&interval);
                log::debug!("Resizing {} from the {:?} edge", interval, edge);
                engine.dispatch(AvailabilityAction::AddToSelection(args));
                self.state = DragState::DraggingExisting {
                    day,
                    anchor: args.anchor,
                };
            }
        }
        DragOutcome::Preview
    }

    fn pointer_move(&mut self, engine: &mut AvailabilityEngine, y: f32) -> DragOutcome {
        let minutes = self.geometry.pointer_to_minutes(y);
        if let Some((day, _)) = self.hover {
            self.hover = Some((day, minutes));
        }

        match self.state {
            DragState::Idle => DragOutcome::Ignored,
            DragState::CreatingNew { day, anchor } => {
                self.start_live_block(engine, day, anchor, minutes);
                DragOutcome::Preview
            }
            DragState::DraggingExisting { .. } | DragState::CrossDayExpanding { .. } => {
                engine.drag_selection_to(minutes);
                DragOutcome::Preview
            }
        }
    }

    fn pointer_enter(
        &mut self,
        engine: &mut AvailabilityEngine,
        day: DayOfWeek,
        y: f32,
    ) -> DragOutcome {
        if !is_shown(engine, day) {
            self.hover = None;
            return DragOutcome::Ignored;
        }
        let minutes = self.geometry.pointer_to_minutes(y);
        self.hover = Some((day, minutes));

        let Some(origin) = self.origin_day.filter(|_| self.is_dragging()) else {
            return DragOutcome::Ignored;
        };
        if self.capture {
            log::debug!("Pointer back on the grid, resuming drag on {}", day);
            self.capture = false;
        }
        if let DragState::CreatingNew { day: start_day, anchor } = self.state {
            self.start_live_block(engine, start_day, anchor, minutes);
        }

        let previous = self.last_day.unwrap_or(origin);
        if day != previous {
            self.paint_days(engine, origin, previous, day);
            self.last_day = Some(day);
        }
        engine.drag_selection_to(minutes);
        DragOutcome::Preview
    }

    fn pointer_up(&mut self, engine: &mut AvailabilityEngine, y: f32) -> DragOutcome {
        if !self.is_dragging() {
            return DragOutcome::Ignored;
        }
        let minutes = self.geometry.pointer_to_minutes(y);
        self.commit(engine, minutes)
    }

    fn pointer_leave(&mut self, engine: &mut AvailabilityEngine, y: f32) -> DragOutcome {
        self.hover = None;
        if !self.is_dragging() {
            return DragOutcome::Ignored;
        }

        if self.geometry.is_above(y) {
            self.commit(engine, self.geometry.first_minute())
        } else if self.geometry.is_below(y) {
            self.commit(engine, self.geometry.last_minute())
        } else {
            log::debug!("Pointer left the grid sideways, capturing");
            self.capture = true;
            DragOutcome::Captured
        }
    }

    /// First movement of a new gesture. Pressing exactly on the edge of an
    /// existing block of the same kind grabs that block instead of starting one.
    fn start_live_block(
        &mut self,
        engine: &mut AvailabilityEngine,
        day: DayOfWeek,
        anchor: Minutes,
        moving: Minutes,
    ) {
        let args = SelectionArgs::new(day, self.mode, anchor, moving);

        if let Some(existing) = engine.store().find_by_anchor(&args).copied() {
            let grabbed = SelectionArgs::new(
                day,
                existing.kind,
                existing.opposite_endpoint(anchor),
                anchor,
            );
            log::debug!("Grabbed edge of existing block {}", existing);
            engine.dispatch(AvailabilityAction::AddToSelection(grabbed));
            self.state = DragState::DraggingExisting {
                day,
                anchor: grabbed.anchor,
            };
            return;
        }

        engine.add_selected(args);
        self.state = DragState::DraggingExisting { day, anchor };
    }

    /// Keep exactly one selected copy on every day between the origin and the
    /// hovered column. Moving away from the origin adds days, moving back
    /// removes the ones left behind.
    fn paint_days(
        &mut self,
        engine: &mut AvailabilityEngine,
        origin: DayOfWeek,
        previous: DayOfWeek,
        hovered: DayOfWeek,
    ) {
        let Some(template) = engine
            .selection()
            .get(origin)
            .or_else(|| engine.selection().first())
            .copied()
        else {
            return;
        };

        log::debug!(
            "Drag moved {} from {} to {} (origin {})",
            if hovered.distance(origin) > previous.distance(origin) {
                "away"
            } else {
                "back"
            },
            previous,
            hovered,
            origin
        );

        let span: Vec<DayOfWeek> = DayOfWeek::span(origin, hovered).collect();
        for selected in engine.selection().to_vec() {
            if !span.contains(&selected.day) {
                engine.remove_selected(selected);
            }
        }
        for day in span {
            if !engine.selection().contains_day(day) {
                engine.add_selected(template.on_day(day));
            }
        }

        self.state = if engine.selection().len() > 1 {
            DragState::CrossDayExpanding { origin, hovered }
        } else {
            DragState::DraggingExisting {
                day: origin,
                anchor: template.anchor,
            }
        };
    }

    fn commit(&mut self, engine: &mut AvailabilityEngine, minutes: Minutes) -> DragOutcome {
        let settings = engine.settings().clone();

        let days = match self.state {
            DragState::Idle => return DragOutcome::Ignored,
            DragState::CreatingNew { day, anchor } => {
                // a click without movement
                let block = round_up(SelectionArgs::new(day, self.mode, anchor, minutes), &settings);
                engine.dispatch(AvailabilityAction::Add(block));
                engine.dispatch(AvailabilityAction::Merge(1));
                1
            }
            DragState::DraggingExisting { .. } | DragState::CrossDayExpanding { .. } => {
                // live blocks are replaced by exact range; saved blocks touching
                // them are left for the merge
                let selected = engine.selection().to_vec();
                for live in &selected {
                    let block = round_up(live.with_moving(minutes), &settings);
                    engine.dispatch(AvailabilityAction::Delete(*live));
                    engine.dispatch(AvailabilityAction::Add(block));
                }
                engine.dispatch(AvailabilityAction::Merge(selected.len()));
                engine.dispatch(AvailabilityAction::ClearSelection);
                selected.len()
            }
        };

        log::info!("Committed availability on {} day(s)", days);
        self.state = DragState::Idle;
        self.origin_day = None;
        self.last_day = None;
        self.capture = false;
        DragOutcome::Committed { days }
    }
}

/// Columns past `days_shown` aren't drawn, so they take no input
fn is_shown(engine: &AvailabilityEngine, day: DayOfWeek) -> bool {
    day.index() < engine.settings().days_shown
}
