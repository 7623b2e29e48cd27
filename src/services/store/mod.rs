//! Committed availability blocks for the active term.
//!
//! Blocks are kept in one list ordered by recency: `add` and `update` both
//! leave the touched block at the end, which is how [`IntervalStore::commit_merge`]
//! finds the blocks a gesture just produced. Per-day views are derived.

mod merge;

use crate::models::interval::{DayOfWeek, Interval, SelectionArgs};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntervalStore {
    intervals: Vec<Interval>,
}

impl IntervalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a block without reconciling it, so live previews can overlap
    pub fn add(&mut self, args: &SelectionArgs) {
        self.intervals.push(args.to_interval());
    }

    /// Re-range the block(s) whose fixed endpoint is `args.anchor`.
    ///
    /// All matches collapse into a single block moved to the end of the list.
    /// Returns false when nothing matched.
    pub fn update(&mut self, args: &SelectionArgs) -> bool {
        let before = self.intervals.len();
        self.intervals.retain(|interval| !interval.matches_anchor(args));
        if self.intervals.len() == before {
            return false;
        }
        self.intervals.push(args.to_interval());
        true
    }

    /// Remove the newest block whose range is exactly `args`' endpoints, in either order.
    /// A live preview is always newer than a saved copy of the same range.
    pub fn delete(&mut self, args: &SelectionArgs) -> bool {
        match self.intervals.iter().rposition(|interval| interval.matches_range(args)) {
            Some(index) => {
                self.intervals.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove every block on `args.day` with an endpoint at `args.anchor`.
    /// Used when only the fixed endpoint of a selection is known.
    pub fn remove_by_anchor(&mut self, args: &SelectionArgs) -> usize {
        let before = self.intervals.len();
        self.intervals.retain(|interval| !interval.matches_anchor(args));
        before - self.intervals.len()
    }

    /// Replace everything, e.g. with a term's saved availabilities
    pub fn replace_all(&mut self, intervals: Vec<Interval>) {
        self.intervals = intervals;
    }

    pub fn clear(&mut self) {
        self.intervals.clear();
    }

    /// First block (oldest) on the day and kind of `args` with an endpoint at `args.anchor`
    pub fn find_by_anchor(&self, args: &SelectionArgs) -> Option<&Interval> {
        self.intervals.iter().find(|interval| interval.matches_anchor(args))
    }

    /// Blocks on one day, sorted by start time
    pub fn day_intervals(&self, day: DayOfWeek) -> Vec<Interval> {
        let mut intervals: Vec<Interval> = self
            .intervals
            .iter()
            .filter(|interval| interval.day == day)
            .copied()
            .collect();
        intervals.sort_by_key(|interval| (interval.start, interval.end));
        intervals
    }

    /// All blocks sorted by day then start, independent of recency
    pub fn canonical(&self) -> Vec<Interval> {
        let mut intervals = self.intervals.clone();
        intervals.sort_by_key(|interval| {
            (interval.day, interval.start, interval.end, u8::from(interval.kind))
        });
        intervals
    }

    pub fn iter(&self) -> impl Iterator<Item = &Interval> {
        self.intervals.iter()
    }

    pub fn as_slice(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::interval::{AvailabilityKind, Minutes};
    use pretty_assertions::assert_eq;

    fn args(day: DayOfWeek, anchor: Minutes, moving: Minutes) -> SelectionArgs {
        SelectionArgs::new(day, AvailabilityKind::Busy, anchor, moving)
    }

    fn ranges(store: &IntervalStore, day: DayOfWeek) -> Vec<(Minutes, Minutes)> {
        store
            .day_intervals(day)
            .iter()
            .map(|interval| (interval.start, interval.end))
            .collect()
    }

    #[test]
    fn test_add_keeps_overlaps() {
        let mut store = IntervalStore::new();
        store.add(&args(DayOfWeek::Monday, 480, 720));
        store.add(&args(DayOfWeek::Monday, 690, 822));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_update_moves_free_endpoint() {
        let mut store = IntervalStore::new();
        store.add(&args(DayOfWeek::Monday, 540, 600));
        store.add(&args(DayOfWeek::Tuesday, 700, 760));

        assert!(store.update(&args(DayOfWeek::Monday, 540, 510)));
        assert_eq!(ranges(&store, DayOfWeek::Monday), vec![(510, 540)]);
        // updated block is now the most recent
        assert_eq!(store.as_slice().last().map(|i| i.day), Some(DayOfWeek::Monday));
    }

    #[test]
    fn test_update_matches_either_endpoint() {
        let mut store = IntervalStore::new();
        store.add(&args(DayOfWeek::Monday, 540, 600));
        assert!(store.update(&args(DayOfWeek::Monday, 600, 660)));
        assert_eq!(ranges(&store, DayOfWeek::Monday), vec![(600, 660)]);
    }

    #[test]
    fn test_update_without_match_is_noop() {
        let mut store = IntervalStore::new();
        store.add(&args(DayOfWeek::Monday, 540, 600));
        let before = store.clone();

        assert!(!store.update(&args(DayOfWeek::Monday, 555, 700)));
        assert!(!store.update(&args(DayOfWeek::Tuesday, 540, 700)));
        assert!(!store.update(&SelectionArgs::new(
            DayOfWeek::Monday,
            AvailabilityKind::None,
            540,
            700
        )));
        assert_eq!(store, before);
    }

    #[test]
    fn test_delete_either_order() {
        let mut store = IntervalStore::new();
        store.add(&args(DayOfWeek::Wednesday, 540, 600));
        store.add(&args(DayOfWeek::Wednesday, 700, 800));

        assert!(store.delete(&args(DayOfWeek::Wednesday, 600, 540)));
        assert_eq!(ranges(&store, DayOfWeek::Wednesday), vec![(700, 800)]);
        assert!(!store.delete(&args(DayOfWeek::Wednesday, 600, 540)));
    }

    #[test]
    fn test_delete_takes_newest_copy() {
        let mut store = IntervalStore::new();
        store.add(&args(DayOfWeek::Wednesday, 540, 600));
        store.add(&args(DayOfWeek::Wednesday, 700, 800));
        store.add(&args(DayOfWeek::Wednesday, 540, 600));

        assert!(store.delete(&args(DayOfWeek::Wednesday, 540, 600)));
        assert_eq!(store.len(), 2);
        assert_eq!(store.as_slice()[1], args(DayOfWeek::Wednesday, 700, 800).to_interval());
    }

    #[test]
    fn test_delete_needs_both_endpoints() {
        let mut store = IntervalStore::new();
        store.add(&args(DayOfWeek::Wednesday, 540, 600));
        assert!(!store.delete(&args(DayOfWeek::Wednesday, 540, 610)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_by_anchor() {
        let mut store = IntervalStore::new();
        store.add(&args(DayOfWeek::Friday, 540, 600));
        store.add(&args(DayOfWeek::Friday, 800, 900));
        assert_eq!(store.remove_by_anchor(&args(DayOfWeek::Friday, 600, 0)), 1);
        assert_eq!(ranges(&store, DayOfWeek::Friday), vec![(800, 900)]);
    }

    #[test]
    fn test_day_intervals_sorted() {
        let mut store = IntervalStore::new();
        store.add(&args(DayOfWeek::Monday, 900, 960));
        store.add(&args(DayOfWeek::Tuesday, 500, 560));
        store.add(&args(DayOfWeek::Monday, 480, 540));
        assert_eq!(
            ranges(&store, DayOfWeek::Monday),
            vec![(480, 540), (900, 960)]
        );
        assert_eq!(store.canonical()[2].day, DayOfWeek::Tuesday);
    }
}
