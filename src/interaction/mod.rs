// Pointer interaction on the weekly grid

pub mod drag;
pub mod events;
pub mod resize;

pub use drag::{DragController, DragOutcome, DragState};
pub use events::{HandleEdge, PointerEvent, PointerTarget};
pub use resize::ResizeHandle;
