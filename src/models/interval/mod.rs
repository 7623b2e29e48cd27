// Interval module
// Busy blocks on the weekly availability grid

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minutes since midnight
pub type Minutes = u32;

/// Errors raised when building intervals from untrusted input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntervalError {
    #[error("interval end {end} must be after start {start}")]
    EmptyRange { start: Minutes, end: Minutes },

    #[error("invalid day of week index: {0}")]
    InvalidDay(u8),

    #[error("invalid availability type: {0}")]
    InvalidKind(u8),

    #[error("invalid time {hours}:{minutes:02}")]
    InvalidTime { hours: u32, minutes: u32 },
}

/// Day column of the grid, Monday = 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// Column index, Monday = 0
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a day from its column index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Number of columns between two days
    pub fn distance(self, other: DayOfWeek) -> usize {
        self.index().abs_diff(other.index())
    }

    /// Every day from `a` to `b` inclusive, in column order
    pub fn span(a: DayOfWeek, b: DayOfWeek) -> impl Iterator<Item = DayOfWeek> {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        (lo.index()..=hi.index()).filter_map(Self::from_index)
    }

    pub fn short_name(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Mon",
            DayOfWeek::Tuesday => "Tue",
            DayOfWeek::Wednesday => "Wed",
            DayOfWeek::Thursday => "Thu",
            DayOfWeek::Friday => "Fri",
            DayOfWeek::Saturday => "Sat",
            DayOfWeek::Sunday => "Sun",
        }
    }
}

impl std::fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.short_name())
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        Self::ALL[weekday.num_days_from_monday() as usize]
    }
}

impl From<DayOfWeek> for Weekday {
    fn from(day: DayOfWeek) -> Self {
        match day {
            DayOfWeek::Monday => Weekday::Mon,
            DayOfWeek::Tuesday => Weekday::Tue,
            DayOfWeek::Wednesday => Weekday::Wed,
            DayOfWeek::Thursday => Weekday::Thu,
            DayOfWeek::Friday => Weekday::Fri,
            DayOfWeek::Saturday => Weekday::Sat,
            DayOfWeek::Sunday => Weekday::Sun,
        }
    }
}

impl TryFrom<u8> for DayOfWeek {
    type Error = IntervalError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_index(value as usize).ok_or(IntervalError::InvalidDay(value))
    }
}

impl From<DayOfWeek> for u8 {
    fn from(day: DayOfWeek) -> Self {
        day as u8
    }
}

/// What a block marks the user as. Only `Busy` is painted by the grid today,
/// `None` is kept so saved data from either mode round-trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum AvailabilityKind {
    None,
    #[default]
    Busy,
}

impl TryFrom<u8> for AvailabilityKind {
    type Error = IntervalError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(AvailabilityKind::None),
            1 => Ok(AvailabilityKind::Busy),
            other => Err(IntervalError::InvalidKind(other)),
        }
    }
}

impl From<AvailabilityKind> for u8 {
    fn from(kind: AvailabilityKind) -> Self {
        match kind {
            AvailabilityKind::None => 0,
            AvailabilityKind::Busy => 1,
        }
    }
}

impl std::fmt::Display for AvailabilityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AvailabilityKind::None => f.write_str("None"),
            AvailabilityKind::Busy => f.write_str("Busy"),
        }
    }
}

/// An interval that is still being dragged.
///
/// During a drag we don't yet know which endpoint ends up smaller, so the
/// block is tracked by the endpoint that stays put (`anchor`) and the one
/// following the pointer (`moving`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectionArgs {
    pub day: DayOfWeek,
    pub kind: AvailabilityKind,
    pub anchor: Minutes,
    pub moving: Minutes,
}

impl SelectionArgs {
    pub fn new(day: DayOfWeek, kind: AvailabilityKind, anchor: Minutes, moving: Minutes) -> Self {
        Self {
            day,
            kind,
            anchor,
            moving,
        }
    }

    pub fn with_moving(self, moving: Minutes) -> Self {
        Self { moving, ..self }
    }

    pub fn on_day(self, day: DayOfWeek) -> Self {
        Self { day, ..self }
    }

    /// True unless the pointer is above the anchor; a zero-length drag counts as downward
    pub fn is_downward(&self) -> bool {
        self.moving >= self.anchor
    }

    pub fn span(&self) -> Minutes {
        self.anchor.abs_diff(self.moving)
    }

    pub fn to_interval(&self) -> Interval {
        Interval::from_args(self)
    }
}

/// A block of time on one day of the week, half-open `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    pub day: DayOfWeek,
    pub start: Minutes,
    pub end: Minutes,
    pub kind: AvailabilityKind,
}

impl Interval {
    /// Create a committed interval, rejecting empty or inverted ranges
    ///
    /// # Examples
    /// ```
    /// use availability_grid::models::interval::{AvailabilityKind, DayOfWeek, Interval};
    ///
    /// let lab = Interval::new(DayOfWeek::Tuesday, 480, 570, AvailabilityKind::Busy).unwrap();
    /// assert_eq!(lab.duration(), 90);
    /// ```
    pub fn new(
        day: DayOfWeek,
        start: Minutes,
        end: Minutes,
        kind: AvailabilityKind,
    ) -> Result<Self, IntervalError> {
        if end <= start {
            return Err(IntervalError::EmptyRange { start, end });
        }
        Ok(Self {
            day,
            start,
            end,
            kind,
        })
    }

    /// Build the `[min, max)` range of a selection. May be zero-length while
    /// a drag preview sits on its anchor.
    pub fn from_args(args: &SelectionArgs) -> Self {
        Self {
            day: args.day,
            start: args.anchor.min(args.moving),
            end: args.anchor.max(args.moving),
            kind: args.kind,
        }
    }

    pub fn duration(&self) -> Minutes {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Same day and kind, and the ranges overlap or share an endpoint
    pub fn overlaps_or_touches(&self, other: &Interval) -> bool {
        if self.day != other.day || self.kind != other.kind {
            return false;
        }
        let (earlier, later) = if self.start < other.start {
            (self, other)
        } else {
            (other, self)
        };
        earlier.end >= later.start
    }

    /// True when either endpoint equals `minutes`
    pub fn has_endpoint(&self, minutes: Minutes) -> bool {
        self.start == minutes || self.end == minutes
    }

    /// Structural identity used by drag updates: day, kind, and one endpoint
    pub fn matches_anchor(&self, args: &SelectionArgs) -> bool {
        self.day == args.day && self.kind == args.kind && self.has_endpoint(args.anchor)
    }

    /// Exact match on both endpoints, in either order
    pub fn matches_range(&self, args: &SelectionArgs) -> bool {
        self.day == args.day
            && self.kind == args.kind
            && self.start == args.anchor.min(args.moving)
            && self.end == args.anchor.max(args.moving)
    }

    /// The endpoint that is not `minutes`. Returns `start` when neither matches.
    pub fn opposite_endpoint(&self, minutes: Minutes) -> Minutes {
        if self.start == minutes {
            self.end
        } else {
            self.start
        }
    }

    /// Selection that keeps `start` fixed and drags `end`
    pub fn grab_end(&self) -> SelectionArgs {
        SelectionArgs::new(self.day, self.kind, self.start, self.end)
    }

    /// Selection that keeps `end` fixed and drags `start`
    pub fn grab_start(&self) -> SelectionArgs {
        SelectionArgs::new(self.day, self.kind, self.end, self.start)
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {:02}:{:02}-{:02}:{:02} {}",
            self.day,
            self.start / 60,
            self.start % 60,
            self.end / 60,
            self.end % 60,
            self.kind
        )
    }
}

/// Interval in the shape the session store saves and returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedAvailability {
    pub day_of_week: DayOfWeek,
    pub start_time_hours: u32,
    pub start_time_minutes: u32,
    pub end_time_hours: u32,
    pub end_time_minutes: u32,
    pub available: AvailabilityKind,
}

impl From<Interval> for SavedAvailability {
    fn from(interval: Interval) -> Self {
        Self {
            day_of_week: interval.day,
            start_time_hours: interval.start / 60,
            start_time_minutes: interval.start % 60,
            end_time_hours: interval.end / 60,
            end_time_minutes: interval.end % 60,
            available: interval.kind,
        }
    }
}

impl TryFrom<SavedAvailability> for Interval {
    type Error = IntervalError;

    fn try_from(saved: SavedAvailability) -> Result<Self, Self::Error> {
        let start = to_minutes(saved.start_time_hours, saved.start_time_minutes)?;
        let end = to_minutes(saved.end_time_hours, saved.end_time_minutes)?;
        Interval::new(saved.day_of_week, start, end, saved.available)
    }
}

fn to_minutes(hours: u32, minutes: u32) -> Result<Minutes, IntervalError> {
    if hours > 24 || minutes >= 60 || (hours == 24 && minutes != 0) {
        return Err(IntervalError::InvalidTime { hours, minutes });
    }
    Ok(hours * 60 + minutes)
}
