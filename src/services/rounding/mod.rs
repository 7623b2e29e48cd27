//! Minimum-size policy applied when a drag is committed.
//!
//! Blocks shorter than `min_block_minutes` grow away from the anchor in the
//! direction of the drag. When growing would push past the top or bottom of
//! the grid, the block is instead snapped flush against that edge, which moves
//! its anchor onto the edge. The rounded block always contains the dragged one.

use crate::models::interval::SelectionArgs;
use crate::models::settings::GridSettings;

/// The block a committed drag leaves behind
pub fn round_up(args: SelectionArgs, settings: &GridSettings) -> SelectionArgs {
    let min = settings.min_block_minutes;
    if args.span() >= min {
        return args;
    }

    let first = settings.first_minute();
    let last = settings.last_minute();

    if args.is_downward() {
        if args.anchor + min <= last {
            return args.with_moving(args.anchor + min);
        }
        SelectionArgs {
            anchor: last,
            moving: last.saturating_sub(min),
            ..args
        }
    } else {
        if args.anchor >= first + min {
            return args.with_moving(args.anchor - min);
        }
        SelectionArgs {
            anchor: first,
            moving: first + min,
            ..args
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::interval::{AvailabilityKind, DayOfWeek, Minutes};
    use test_case::test_case;

    fn hm(h: Minutes, m: Minutes) -> Minutes {
        h * 60 + m
    }

    // Same bounds the session tests used: 8:00 to 21:00
    fn settings() -> GridSettings {
        GridSettings {
            first_hour: 8,
            last_hour: 21,
            ..Default::default()
        }
    }

    fn args(anchor: Minutes, moving: Minutes) -> SelectionArgs {
        SelectionArgs::new(DayOfWeek::Tuesday, AvailabilityKind::Busy, anchor, moving)
    }

    fn range(args: SelectionArgs) -> (Minutes, Minutes) {
        let interval = args.to_interval();
        (interval.start, interval.end)
    }

    #[test_case(hm(8, 10), hm(8, 20), (hm(8, 10), hm(8, 40)) ; "starts near top and drags down")]
    #[test_case(hm(20, 50), hm(20, 40), (hm(20, 20), hm(20, 50)) ; "starts near bottom and drags up")]
    #[test_case(hm(10, 20), hm(10, 10), (hm(9, 50), hm(10, 20)) ; "drags up mid day")]
    #[test_case(hm(12, 0), hm(12, 0), (hm(12, 0), hm(12, 30)) ; "click grows downward")]
    fn test_expands_in_drag_direction(anchor: Minutes, moving: Minutes, expected: (Minutes, Minutes)) {
        let rounded = round_up(args(anchor, moving), &settings());
        assert_eq!(rounded.anchor, anchor);
        assert_eq!(range(rounded), expected);
    }

    #[test_case(hm(8, 20), hm(8, 10), (hm(8, 0), hm(8, 30)) ; "dragging up near top")]
    #[test_case(hm(8, 0), hm(8, 0), (hm(8, 0), hm(8, 30)) ; "click on top edge")]
    #[test_case(hm(20, 40), hm(20, 50), (hm(20, 30), hm(21, 0)) ; "dragging down near bottom")]
    #[test_case(hm(21, 0), hm(21, 0), (hm(20, 30), hm(21, 0)) ; "click on bottom edge")]
    fn test_snaps_flush_to_edge(anchor: Minutes, moving: Minutes, expected: (Minutes, Minutes)) {
        assert_eq!(range(round_up(args(anchor, moving), &settings())), expected);
    }

    #[test]
    fn test_flush_block_is_anchored_on_edge() {
        let rounded = round_up(args(hm(20, 40), hm(20, 50)), &settings());
        assert_eq!((rounded.anchor, rounded.moving), (hm(21, 0), hm(20, 30)));
    }

    #[test]
    fn test_long_blocks_are_untouched() {
        let long = args(hm(9, 0), hm(9, 30));
        assert_eq!(round_up(long, &settings()), long);
    }

    #[test]
    fn test_first_hour_click_with_default_bounds() {
        let rounded = round_up(args(420, 430), &GridSettings::default());
        assert_eq!(range(rounded), (420, 450));
    }

    #[test]
    fn test_rounded_block_contains_dragged_block() {
        let settings = settings();
        for anchor in (hm(8, 0)..=hm(21, 0)).step_by(10) {
            for moving in [anchor.saturating_sub(20), anchor, anchor + 10] {
                let moving = moving.clamp(hm(8, 0), hm(21, 0));
                let dragged = args(anchor, moving).to_interval();
                let rounded = round_up(args(anchor, moving), &settings).to_interval();
                assert!(rounded.start <= dragged.start && rounded.end >= dragged.end);
                assert!(rounded.duration() >= 30);
            }
        }
    }
}
