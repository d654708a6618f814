use crate::math::{Point2, Vector2};

/// Zoom and pan transform between widget coordinates and scene coordinates.
///
/// `widget = (scene - origin) * scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    scale: f64,
    origin: Point2,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            scale: 1.0,
            origin: Point2::origin(),
        }
    }
}

impl Viewport {
    /// Creates an unzoomed viewport with the scene origin at the widget origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Multiplies the current zoom by `factor`. Non-positive or non-finite factors are ignored.
    pub fn zoom(&mut self, factor: f64) {
        if factor.is_finite() && factor > 0.0 {
            self.scale *= factor;
        }
    }

    /// Shifts the visible area by `delta` scene units.
    pub fn pan(&mut self, delta: Vector2) {
        self.origin += delta;
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Converts a widget position (e.g. a mouse click) to scene coordinates.
    #[must_use]
    pub fn map_to_scene(&self, widget: Point2) -> Point2 {
        self.origin + widget.coords / self.scale
    }

    /// Converts a scene position to widget coordinates.
    #[must_use]
    pub fn map_from_scene(&self, scene: Point2) -> Point2 {
        Point2::from((scene - self.origin) * self.scale)
    }
}
