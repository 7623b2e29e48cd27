// Availability Action System
//
// Every mutation of the availability engine is expressed as an action,
// so the drag controller, the persistence layer and tests all drive the
// engine through the same surface.

use crate::models::interval::{Interval, SelectionArgs};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvailabilityAction {
    /// Append a block without merging (live preview)
    Add(SelectionArgs),
    /// Move the free endpoint of the block anchored at `anchor`
    Update(SelectionArgs),
    /// Merge the given number of most recent blocks into the store
    Merge(usize),
    /// Remove the block with exactly these endpoints
    Delete(SelectionArgs),
    /// Replace every block, only if `term` is the active term
    SetAll { intervals: Vec<Interval>, term: String },
    /// Switch the active term, dropping the previous term's blocks
    SetTerm(String),
    AddToSelection(SelectionArgs),
    /// Deselect by anchor, removing the matching live block too
    RemoveFromSelection(SelectionArgs),
    ClearSelection,
}

impl AvailabilityAction {
    /// Get a human-readable description of the action
    pub fn description(&self) -> String {
        match self {
            AvailabilityAction::Add(args) => format!("Add {}", args.to_interval()),
            AvailabilityAction::Update(args) => format!(
                "Update {} {} anchored at {} to {}",
                args.day, args.kind, args.anchor, args.moving
            ),
            AvailabilityAction::Merge(count) => format!("Merge {} newest block(s)", count),
            AvailabilityAction::Delete(args) => format!("Delete {}", args.to_interval()),
            AvailabilityAction::SetAll { intervals, term } => {
                format!("Set {} block(s) for term {}", intervals.len(), term)
            }
            AvailabilityAction::SetTerm(term) => format!("Switch to term {}", term),
            AvailabilityAction::AddToSelection(args) => {
                format!("Select {} anchored at {}", args.day, args.anchor)
            }
            AvailabilityAction::RemoveFromSelection(args) => {
                format!("Deselect {} anchored at {}", args.day, args.anchor)
            }
            AvailabilityAction::ClearSelection => "Clear selection".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::interval::{AvailabilityKind, DayOfWeek};

    #[test]
    fn test_descriptions() {
        let args = SelectionArgs::new(DayOfWeek::Monday, AvailabilityKind::Busy, 540, 480);
        assert_eq!(
            AvailabilityAction::Add(args).description(),
            "Add Mon 08:00-09:00 Busy"
        );
        assert_eq!(
            AvailabilityAction::Merge(3).description(),
            "Merge 3 newest block(s)"
        );
        assert_eq!(
            AvailabilityAction::SetAll {
                intervals: vec![],
                term: "202031".to_string()
            }
            .description(),
            "Set 0 block(s) for term 202031"
        );
    }
}
