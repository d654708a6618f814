use slotmap::SlotMap;

use super::{Label, LabelId, LineId, LineItem, Marker, MarkerId, RenderConfig};
use crate::error::{self, SceneError};
use crate::math::distance_2d::midpoint;
use crate::math::Point2;
use crate::mst::SpanningTree;
use crate::selection::PointSet;

/// Arena of everything drawn over the map: point markers, tree lines and labels.
///
/// Items are addressed by typed keys so a front end can keep handles to the
/// shapes it created and drop them when the scene removes them.
#[derive(Debug, Default)]
pub struct Scene {
    markers: SlotMap<MarkerId, Marker>,
    lines: SlotMap<LineId, LineItem>,
    labels: SlotMap<LabelId, Label>,
}

impl Scene {
    /// Creates a new, empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a marker centered on `point`.
    pub fn add_marker(&mut self, point: Point2, config: &RenderConfig) -> MarkerId {
        self.markers.insert(Marker {
            center: point,
            radius: config.marker_radius,
            color: config.marker_color,
        })
    }

    /// Adds one line and one midpoint label per tree edge. Each line holds
    /// the ID of its label.
    ///
    /// # Errors
    ///
    /// Returns an error if an edge refers to a point missing from `points`.
    pub fn draw_tree(
        &mut self,
        points: &PointSet,
        tree: &SpanningTree,
        config: &RenderConfig,
    ) -> error::Result<Vec<LineId>> {
        let mut ids = Vec::with_capacity(tree.len());
        for edge in &tree.edges {
            let start = *points.get(edge.a)?;
            let end = *points.get(edge.b)?;
            let label = self.labels.insert(Label {
                position: midpoint(&start, &end),
                text: config.format_distance(edge.weight),
                font_size: config.label_font_size,
            });
            ids.push(self.lines.insert(LineItem {
                start,
                end,
                width: config.line_width,
                color: config.line_color,
                edge: *edge,
                label,
            }));
        }
        Ok(ids)
    }

    /// Removes every tree line and label, leaving markers in place.
    pub fn clear_tree(&mut self) {
        self.lines.clear();
        self.labels.clear();
    }

    /// Removes every point marker.
    pub fn clear_markers(&mut self) {
        self.markers.clear();
    }

    /// Returns the marker with the given ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the marker is not in the scene.
    pub fn marker(&self, id: MarkerId) -> Result<&Marker, SceneError> {
        self.markers
            .get(id)
            .ok_or(SceneError::ItemNotFound("marker"))
    }

    /// Returns the line with the given ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the line is not in the scene.
    pub fn line(&self, id: LineId) -> Result<&LineItem, SceneError> {
        self.lines.get(id).ok_or(SceneError::ItemNotFound("line"))
    }

    /// Returns the label with the given ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the label is not in the scene.
    pub fn label(&self, id: LabelId) -> Result<&Label, SceneError> {
        self.labels.get(id).ok_or(SceneError::ItemNotFound("label"))
    }

    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.markers.values()
    }

    pub fn lines(&self) -> impl Iterator<Item = &LineItem> {
        self.lines.values()
    }

    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.labels.values()
    }

    #[must_use]
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn label_count(&self) -> usize {
        self.labels.len()
    }
}
