use crate::math::Point2;
use crate::mst::Edge;

slotmap::new_key_type! {
    /// Unique identifier for a point marker in the scene.
    pub struct MarkerId;
}

slotmap::new_key_type! {
    /// Unique identifier for a tree line in the scene.
    pub struct LineId;
}

slotmap::new_key_type! {
    /// Unique identifier for a distance label in the scene.
    pub struct LabelId;
}

/// Named colors used by the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Blue,
}

/// Filled circle drawn on a selected point.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub center: Point2,
    pub radius: f64,
    pub color: Color,
}

/// Straight line drawn for one tree edge.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub start: Point2,
    pub end: Point2,
    pub width: f64,
    pub color: Color,
    /// The tree edge this line represents.
    pub edge: Edge,
    /// The distance label drawn for this line.
    pub label: LabelId,
}

/// Text drawn at the middle of a tree line.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub position: Point2,
    pub text: String,
    pub font_size: u16,
}
