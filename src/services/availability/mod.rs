//! Single owner of the interval store and the drag selection.
//!
//! The store and selection are only ever written through [`AvailabilityEngine::dispatch`]
//! so that live drag previews, commits and saved-data loads all pass through
//! the same term guard and logging.

use crate::commands::AvailabilityAction;
use crate::models::interval::{Interval, Minutes, SelectionArgs};
use crate::models::settings::GridSettings;
use crate::services::persistence::AvailabilitySnapshot;
use crate::services::selection::SelectionSet;
use crate::services::store::IntervalStore;

#[derive(Debug, Clone, Default)]
pub struct AvailabilityEngine {
    store: IntervalStore,
    selection: SelectionSet,
    active_term: Option<String>,
    settings: GridSettings,
}

impl AvailabilityEngine {
    pub fn new(settings: GridSettings) -> Self {
        Self {
            settings,
            ..Default::default()
        }
    }

    /// Engine already switched to `term`
    pub fn for_term(settings: GridSettings, term: impl Into<String>) -> Self {
        let mut engine = Self::new(settings);
        engine.dispatch(AvailabilityAction::SetTerm(term.into()));
        engine
    }

    pub fn settings(&self) -> &GridSettings {
        &self.settings
    }

    pub fn store(&self) -> &IntervalStore {
        &self.store
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn active_term(&self) -> Option<&str> {
        self.active_term.as_deref()
    }

    /// Apply one action. Returns false when the action was a no-op
    /// (nothing matched, or a stale term was dropped).
    pub fn dispatch(&mut self, action: AvailabilityAction) -> bool {
        log::debug!("{}", action.description());
        match action {
            AvailabilityAction::Add(args) => {
                self.store.add(&args);
                true
            }
            AvailabilityAction::Update(args) => self.store.update(&args),
            AvailabilityAction::Merge(count) => {
                self.store.commit_merge(count);
                true
            }
            AvailabilityAction::Delete(args) => self.store.delete(&args),
            AvailabilityAction::SetAll { intervals, term } => self.set_all(intervals, &term),
            AvailabilityAction::SetTerm(term) => self.set_term(term),
            AvailabilityAction::AddToSelection(args) => {
                self.selection.add(args);
                true
            }
            AvailabilityAction::RemoveFromSelection(args) => {
                let deselected = self.selection.remove(&args);
                let removed = self.store.remove_by_anchor(&args);
                deselected || removed > 0
            }
            AvailabilityAction::ClearSelection => {
                self.selection.clear();
                true
            }
        }
    }

    /// Point every selected block at `moving`, in the store and the selection
    pub fn drag_selection_to(&mut self, moving: Minutes) {
        for args in self.selection.to_vec() {
            self.dispatch(AvailabilityAction::Update(args.with_moving(moving)));
        }
        self.selection.set_moving(moving);
    }

    /// Add a live block and select it
    pub fn add_selected(&mut self, args: SelectionArgs) {
        self.dispatch(AvailabilityAction::Add(args));
        self.dispatch(AvailabilityAction::AddToSelection(args));
    }

    /// Deselect the block on `args.day` and remove its live preview from the store
    pub fn remove_selected(&mut self, args: SelectionArgs) {
        self.selection.remove(&args);
        self.dispatch(AvailabilityAction::Delete(args));
    }

    fn set_all(&mut self, intervals: Vec<Interval>, term: &str) -> bool {
        if self.active_term.as_deref() != Some(term) {
            log::warn!(
                "Ignoring {} saved block(s) for term {}, active term is {:?}",
                intervals.len(),
                term,
                self.active_term
            );
            return false;
        }
        debug_assert!(intervals.iter().all(|interval| !interval.is_empty()));
        self.store.replace_all(intervals);
        self.selection.clear();
        true
    }

    fn set_term(&mut self, term: String) -> bool {
        if self.active_term.as_deref() == Some(term.as_str()) {
            return false;
        }
        log::info!("Switching availability term to {}", term);
        self.store.clear();
        self.selection.clear();
        self.active_term = Some(term);
        true
    }

    /// Current term and its committed blocks, for saving
    pub fn snapshot(&self) -> AvailabilitySnapshot {
        AvailabilitySnapshot::new(
            self.active_term.clone().unwrap_or_default(),
            self.store.canonical(),
        )
    }

    /// Load a saved snapshot through the term guard
    pub fn load_snapshot(&mut self, snapshot: AvailabilitySnapshot) -> bool {
        let term = snapshot.term.clone();
        self.dispatch(AvailabilityAction::SetAll {
            intervals: snapshot.intervals(),
            term,
        })
    }
}
