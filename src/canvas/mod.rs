//! Canvas interaction layer: coordinate mapping, hit-testing and the
//! click-to-close drawing gesture. Independent of any rendering backend.

pub mod gesture;
pub mod viewport;

pub use gesture::{ClickOutcome, DrawingGesture, GesturePhase};
pub use viewport::{CanvasViewport, SurfaceRect, POINT_CLICK_THRESHOLD, VIRTUAL_HEIGHT, VIRTUAL_WIDTH};
