//! Point-by-point polygon drawing gesture.
//!
//! ```text
//! Idle --start--> Drawing (0-2 points) --3rd point--> Closable
//!   ^                                                    |
//!   +------ click near first point (emits points) -------+
//!   +------ cancel (discards points) from any phase -----+
//! ```

use crate::canvas::viewport::{CanvasViewport, POINT_CLICK_THRESHOLD};
use crate::types::internal::{Point, MIN_POLYGON_POINTS};

/// Where the gesture currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    /// Not drawing; clicks are ignored
    Idle,
    /// Collecting points, too few to close
    Drawing,
    /// Enough points collected; a click on the first point closes the shape
    Closable,
}

/// Result of feeding a click into the gesture
#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    /// Gesture is idle, or the surface has no drawable area
    Ignored,
    /// A new point was appended at this index
    PointAdded(usize),
    /// The click landed on an already placed point; nothing changed
    ExistingPoint(usize),
    /// The shape was closed; points in click order
    Closed(Vec<Point>),
}

/// State of one in-progress polygon
#[derive(Debug, Clone)]
pub struct DrawingGesture {
    active: bool,
    points: Vec<Point>,
    hovered: Option<usize>,
    threshold: f64,
}

impl Default for DrawingGesture {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingGesture {
    pub fn new() -> Self {
        Self::with_threshold(POINT_CLICK_THRESHOLD)
    }

    /// Gesture with a custom hit radius in rendered pixels
    ///
    /// Negative and NaN radii are clamped to 0, which still matches a click
    /// exactly on a placed point.
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            active: false,
            points: Vec::new(),
            hovered: None,
            threshold: threshold.max(0.0),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn phase(&self) -> GesturePhase {
        if !self.active {
            GesturePhase::Idle
        } else if self.points.len() >= MIN_POLYGON_POINTS {
            GesturePhase::Closable
        } else {
            GesturePhase::Drawing
        }
    }

    pub fn is_drawing(&self) -> bool {
        self.active
    }

    pub fn can_close(&self) -> bool {
        self.phase() == GesturePhase::Closable
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Anchor for the preview line to the pointer
    pub fn last_point(&self) -> Option<&Point> {
        self.points.last()
    }

    /// Index of the point last reported by `hover`
    pub fn hovered_point(&self) -> Option<usize> {
        self.hovered
    }

    /// Begin a new polygon, dropping anything collected so far
    pub fn start(&mut self) {
        self.active = true;
        self.points.clear();
        self.hovered = None;
    }

    /// Abandon the current polygon
    pub fn cancel(&mut self) {
        if self.active {
            tracing::debug!("Drawing cancelled with {} points", self.points.len());
        }

        self.active = false;
        self.points.clear();
        self.hovered = None;
    }

    /// Index of the first placed point within the hit radius of `point`
    pub fn find_point(&self, viewport: &CanvasViewport, point: &Point) -> Option<usize> {
        self.points
            .iter()
            .position(|placed| viewport.is_near(point, placed, self.threshold))
    }

    fn is_close_target(&self, viewport: &CanvasViewport, point: &Point) -> bool {
        self.can_close()
            && self
                .points
                .first()
                .is_some_and(|first| viewport.is_near(point, first, self.threshold))
    }

    /// Feed a click at a virtual point into the gesture
    ///
    /// Closing is checked before anything else, so once the shape is
    /// closable a click on the first point always finishes it.
    pub fn click(&mut self, viewport: &CanvasViewport, point: Point) -> ClickOutcome {
        if !self.active {
            return ClickOutcome::Ignored;
        }

        if !viewport.is_drawable() {
            tracing::debug!("Click ignored: surface has no drawable area");
            return ClickOutcome::Ignored;
        }

        if self.is_close_target(viewport, &point) {
            let points = std::mem::take(&mut self.points);
            self.active = false;
            self.hovered = None;
            tracing::debug!("Polygon closed with {} points", points.len());
            return ClickOutcome::Closed(points);
        }

        if let Some(index) = self.find_point(viewport, &point) {
            return ClickOutcome::ExistingPoint(index);
        }

        self.points.push(point);
        ClickOutcome::PointAdded(self.points.len() - 1)
    }

    /// Track the pointer; reports the first point when hovering the close target
    pub fn hover(&mut self, viewport: &CanvasViewport, point: &Point) -> Option<usize> {
        self.hovered = self.is_close_target(viewport, point).then_some(0);
        self.hovered
    }
}
