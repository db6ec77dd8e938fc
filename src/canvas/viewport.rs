//! Coordinate mapping between the virtual canvas and the rendered surface.
//!
//! Points are always stored in a fixed virtual space so that a polygon drawn
//! on a small window looks the same on a large one. Hit-testing happens in
//! rendered pixels, so the click tolerance feels the same at any size.

use crate::types::internal::Point;

/// Width of the virtual coordinate space.
pub const VIRTUAL_WIDTH: f64 = 800.0;

/// Height of the virtual coordinate space.
pub const VIRTUAL_HEIGHT: f64 = 600.0;

/// Distance in rendered pixels within which a click counts as hitting a point.
pub const POINT_CLICK_THRESHOLD: f64 = 16.0;

/// Screen rectangle the canvas is drawn into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl SurfaceRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Surface with its origin at the screen origin.
    pub fn sized(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    fn is_drawable(&self) -> bool {
        is_positive_extent(self.width) && is_positive_extent(self.height)
    }
}

fn is_positive_extent(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Maps between virtual and rendered coordinates.
#[derive(Debug, Clone)]
pub struct CanvasViewport {
    virtual_width: f64,
    virtual_height: f64,
    surface: SurfaceRect,
}

impl CanvasViewport {
    /// Creates a viewport over the standard 800 x 600 virtual canvas.
    pub fn new(surface: SurfaceRect) -> Self {
        Self {
            virtual_width: VIRTUAL_WIDTH,
            virtual_height: VIRTUAL_HEIGHT,
            surface,
        }
    }

    /// Viewport over a custom virtual space.
    ///
    /// Returns `None` unless both virtual dimensions are positive and finite.
    pub fn with_virtual_size(virtual_width: f64, virtual_height: f64, surface: SurfaceRect) -> Option<Self> {
        (is_positive_extent(virtual_width) && is_positive_extent(virtual_height)).then_some(Self {
            virtual_width,
            virtual_height,
            surface,
        })
    }

    /// Whether the rendered surface currently has an area to hit-test against.
    pub fn is_drawable(&self) -> bool {
        self.surface.is_drawable()
    }

    pub fn surface(&self) -> SurfaceRect {
        self.surface
    }

    /// Replaces the rendered rectangle, typically after a window resize.
    ///
    /// Stored points are virtual and need no adjustment.
    pub fn resize(&mut self, surface: SurfaceRect) {
        self.surface = surface;
    }

    /// Converts a pointer position in screen pixels to a virtual point.
    ///
    /// Formula:
    /// ```text
    /// x = (client_x - left) * virtual_width / width
    /// y = (client_y - top) * virtual_height / height
    /// ```
    ///
    /// Returns `None` while the surface has no drawable area.
    pub fn pointer_to_virtual(&self, client_x: f64, client_y: f64) -> Option<Point> {
        if !self.surface.is_drawable() {
            return None;
        }

        let scale_x = self.virtual_width / self.surface.width;
        let scale_y = self.virtual_height / self.surface.height;

        Some(Point::new(
            (client_x - self.surface.left) * scale_x,
            (client_y - self.surface.top) * scale_y,
        ))
    }

    /// Converts a virtual point to pixels relative to the surface origin.
    pub fn virtual_to_rendered(&self, point: &Point) -> (f64, f64) {
        let scale_x = self.surface.width / self.virtual_width;
        let scale_y = self.surface.height / self.virtual_height;

        (point.x() * scale_x, point.y() * scale_y)
    }

    /// Whether two virtual points land within `threshold` pixels of each
    /// other once rendered.
    ///
    /// Always false on a surface with no drawable area, where every point
    /// would project onto the origin.
    pub fn is_near(&self, a: &Point, b: &Point, threshold: f64) -> bool {
        if !self.is_drawable() {
            return false;
        }

        let (ax, ay) = self.virtual_to_rendered(a);
        let (bx, by) = self.virtual_to_rendered(b);

        Point::new(ax, ay).distance_to(&Point::new(bx, by)) <= threshold
    }
}
