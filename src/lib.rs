// Availability Grid Library
// Weekly busy-time editor: interval store, drag interaction and saved forms

pub mod commands;
pub mod interaction;
pub mod models;
pub mod services;
pub mod utils;

pub use commands::AvailabilityAction;
pub use interaction::{DragController, DragOutcome, DragState, PointerEvent, PointerTarget};
pub use models::interval::{AvailabilityKind, DayOfWeek, Interval, Minutes, SelectionArgs};
pub use models::settings::GridSettings;
pub use services::availability::AvailabilityEngine;
