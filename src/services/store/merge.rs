// Commit-time reconciliation of freshly dragged blocks

use super::IntervalStore;
use crate::models::interval::Interval;

impl IntervalStore {
    /// Fold the `count` most recent blocks into the rest of the store.
    ///
    /// Newest first, each block absorbs every same-day, same-kind block it
    /// overlaps or touches, growing as it goes so chains of overlaps collapse
    /// in one pass. Blocks of a different kind are left alone even when they
    /// overlap. Each merged block ends up at the end of the list.
    pub fn commit_merge(&mut self, count: usize) {
        let count = count.min(self.intervals.len());
        let fresh: Vec<Interval> = self.intervals.iter().rev().take(count).copied().collect();

        for block in fresh {
            let merged = self.absorb_overlaps(block);
            debug_assert!(
                !merged.is_empty(),
                "committed interval must have start < end: {merged:?}"
            );
            log::debug!("merged {} into {}", block, merged);
            self.intervals.push(merged);
        }
    }

    /// Remove every block overlapping `block` (itself included), returning their union
    fn absorb_overlaps(&mut self, block: Interval) -> Interval {
        let mut merged = block;
        loop {
            let Some(position) = self
                .intervals
                .iter()
                .position(|other| other.overlaps_or_touches(&merged))
            else {
                break;
            };
            let other = self.intervals.remove(position);
            merged.start = merged.start.min(other.start);
            merged.end = merged.end.max(other.end);
        }
        merged
    }
}
