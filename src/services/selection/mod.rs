// Selection module
// Blocks currently following the pointer, at most one per day

use crate::models::interval::{DayOfWeek, Minutes, SelectionArgs};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    items: Vec<SelectionArgs>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a block. A block already selected on the same day is replaced.
    pub fn add(&mut self, args: SelectionArgs) {
        self.items.retain(|item| item.day != args.day);
        self.items.push(args);
    }

    /// Drop entries with the same day, kind and anchor as `key`
    pub fn remove(&mut self, key: &SelectionArgs) -> bool {
        let before = self.items.len();
        self.items
            .retain(|item| !(item.day == key.day && item.kind == key.kind && item.anchor == key.anchor));
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Point every selected block's moving endpoint at `moving`
    pub fn set_moving(&mut self, moving: Minutes) {
        for item in &mut self.items {
            item.moving = moving;
        }
    }

    pub fn get(&self, day: DayOfWeek) -> Option<&SelectionArgs> {
        self.items.iter().find(|item| item.day == day)
    }

    pub fn contains_day(&self, day: DayOfWeek) -> bool {
        self.get(day).is_some()
    }

    pub fn days(&self) -> Vec<DayOfWeek> {
        self.items.iter().map(|item| item.day).collect()
    }

    pub fn first(&self) -> Option<&SelectionArgs> {
        self.items.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectionArgs> {
        self.items.iter()
    }

    pub fn to_vec(&self) -> Vec<SelectionArgs> {
        self.items.clone()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::interval::AvailabilityKind;

    fn args(day: DayOfWeek, anchor: Minutes, moving: Minutes) -> SelectionArgs {
        SelectionArgs::new(day, AvailabilityKind::Busy, anchor, moving)
    }

    #[test]
    fn test_one_entry_per_day() {
        let mut selection = SelectionSet::new();
        selection.add(args(DayOfWeek::Monday, 540, 600));
        selection.add(args(DayOfWeek::Monday, 700, 760));
        assert_eq!(selection.len(), 1);
        assert_eq!(selection.get(DayOfWeek::Monday).map(|s| s.anchor), Some(700));
    }

    #[test]
    fn test_set_moving_applies_to_all_days() {
        let mut selection = SelectionSet::new();
        selection.add(args(DayOfWeek::Monday, 540, 600));
        selection.add(args(DayOfWeek::Tuesday, 540, 600));
        selection.set_moving(660);
        assert!(selection.iter().all(|item| item.moving == 660));
    }

    #[test]
    fn test_remove_by_anchor_only() {
        let mut selection = SelectionSet::new();
        selection.add(args(DayOfWeek::Monday, 540, 600));
        assert!(!selection.remove(&args(DayOfWeek::Monday, 600, 540)));
        assert!(selection.remove(&args(DayOfWeek::Monday, 540, 0)));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_days_in_insertion_order() {
        let mut selection = SelectionSet::new();
        selection.add(args(DayOfWeek::Wednesday, 540, 600));
        selection.add(args(DayOfWeek::Tuesday, 540, 600));
        assert_eq!(selection.days(), vec![DayOfWeek::Wednesday, DayOfWeek::Tuesday]);
        assert!(selection.contains_day(DayOfWeek::Tuesday));
        assert!(!selection.contains_day(DayOfWeek::Friday));
    }
}
