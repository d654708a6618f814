use tracing::{debug, info};

use crate::error::Result;
use crate::math::Point2;
use crate::mst::{compute_with, SpanningTree};
use crate::render::{MarkerId, RenderConfig, Scene, Viewport};
use crate::selection::PointSet;

/// Mouse buttons a canvas can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// State of one interactive map session: selected points, the drawn scene,
/// the current zoom, and the last computed tree.
#[derive(Debug, Default)]
pub struct Session {
    config: RenderConfig,
    points: PointSet,
    scene: Scene,
    viewport: Viewport,
    tree: Option<SpanningTree>,
}

impl Session {
    /// Creates an empty session drawing with `config`.
    #[must_use]
    pub fn new(config: RenderConfig) -> Self {
        info!(map = %config.map_image, "starting session");
        Self {
            config,
            points: PointSet::new(),
            scene: Scene::new(),
            viewport: Viewport::new(),
            tree: None,
        }
    }

    /// Handles a click at widget position `(x, y)`.
    ///
    /// Only the left button selects a point. Returns the marker added for it.
    ///
    /// # Errors
    ///
    /// Returns an error if the mapped position is not finite.
    pub fn click(&mut self, button: MouseButton, x: f64, y: f64) -> Result<Option<MarkerId>> {
        if button != MouseButton::Left {
            return Ok(None);
        }
        let point = self.viewport.map_to_scene(Point2::new(x, y));
        self.select(point).map(Some)
    }

    /// Appends a point given in scene coordinates and marks it.
    ///
    /// # Errors
    ///
    /// Returns an error if the point has a non-finite coordinate.
    pub fn select(&mut self, point: Point2) -> Result<MarkerId> {
        let index = self.points.push(point)?;
        let marker = self.scene.add_marker(point, &self.config);
        info!(index, x = point.x, y = point.y, "selected point");
        debug!(points = ?self.points.as_slice(), "current selection");
        Ok(marker)
    }

    /// Computes the spanning tree of the selected points with the named
    /// algorithm and draws it, replacing any tree drawn before.
    ///
    /// # Errors
    ///
    /// Returns an error if `algorithm` is not supported. The scene is left
    /// unchanged in that case.
    pub fn calculate(&mut self, algorithm: &str) -> Result<&SpanningTree> {
        let tree = compute_with(algorithm, &self.points)?;
        info!(
            algorithm,
            edges = tree.len(),
            total_weight = tree.total_weight(),
            "computed minimum spanning tree"
        );
        for edge in &tree.edges {
            info!(
                a = edge.a,
                b = edge.b,
                weight = edge.weight,
                label = %self.config.format_distance(edge.weight),
                "tree edge"
            );
        }

        self.scene.clear_tree();
        self.scene.draw_tree(&self.points, &tree, &self.config)?;
        Ok(self.tree.insert(tree))
    }

    /// Removes the drawn tree, keeping the selected points.
    pub fn clear_tree(&mut self) {
        self.scene.clear_tree();
        self.tree = None;
        info!("cleared spanning tree");
    }

    /// Removes the drawn tree and every selected point.
    pub fn clear_points(&mut self) {
        self.clear_tree();
        self.points.clear();
        self.scene.clear_markers();
        info!("cleared all selected points");
    }

    pub fn zoom_in(&mut self) {
        self.viewport.zoom(self.config.zoom_in_factor);
        debug!(scale = self.viewport.scale(), "zoomed in");
    }

    pub fn zoom_out(&mut self) {
        self.viewport.zoom(self.config.zoom_out_factor);
        debug!(scale = self.viewport.scale(), "zoomed out");
    }

    #[must_use]
    pub fn points(&self) -> &PointSet {
        &self.points
    }

    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// The tree from the last successful `calculate`, if not cleared since.
    #[must_use]
    pub fn tree(&self) -> Option<&SpanningTree> {
        self.tree.as_ref()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        info!("closing session");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{AlgorithmError, MstMapError};
    use approx::assert_relative_eq;

    fn session_with(coords: &[(f64, f64)]) -> Session {
        let mut session = Session::new(RenderConfig::default());
        for &(x, y) in coords {
            session.click(MouseButton::Left, x, y).unwrap();
        }
        session
    }

    #[test]
    fn left_click_selects_and_marks() {
        let session = session_with(&[(1.0, 2.0), (3.0, 4.0)]);
        assert_eq!(session.points().len(), 2);
        assert_eq!(session.scene().marker_count(), 2);
    }

    #[test]
    fn other_buttons_are_ignored() {
        let mut session = Session::new(RenderConfig::default());
        assert_eq!(session.click(MouseButton::Right, 1.0, 1.0).unwrap(), None);
        assert_eq!(session.click(MouseButton::Middle, 1.0, 1.0).unwrap(), None);
        assert!(session.points().is_empty());
    }

    #[test]
    fn calculate_draws_tree() {
        let mut session = session_with(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0)]);
        let tree = session.calculate("Kruskal").unwrap();
        assert_relative_eq!(tree.total_weight(), 20.0);
        assert_eq!(session.scene().line_count(), 2);
        assert_eq!(session.scene().label_count(), 2);
    }

    #[test]
    fn recalculating_replaces_previous_tree() {
        let mut session = session_with(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0)]);
        let first = session.calculate("Kruskal").unwrap().clone();
        let second = session.calculate("Kruskal").unwrap().clone();
        assert_eq!(first, second);
        assert_eq!(session.scene().line_count(), 2);
    }

    #[test]
    fn unsupported_algorithm_leaves_scene_untouched() {
        let mut session = session_with(&[(0.0, 0.0), (5.0, 0.0)]);
        session.calculate("Kruskal").unwrap();
        let err = session.calculate("Dijkstra").unwrap_err();
        assert!(matches!(
            err,
            MstMapError::Algorithm(AlgorithmError::Unsupported(ref name)) if name == "Dijkstra"
        ));
        assert_eq!(session.scene().line_count(), 1);
        assert!(session.tree().is_some());
    }

    #[test]
    fn calculate_with_no_points_is_empty() {
        let mut session = Session::new(RenderConfig::default());
        assert!(session.calculate("Kruskal").unwrap().is_empty());
        assert_eq!(session.scene().line_count(), 0);
    }

    #[test]
    fn clear_tree_keeps_points() {
        let mut session = session_with(&[(0.0, 0.0), (5.0, 0.0)]);
        session.calculate("Kruskal").unwrap();
        session.clear_tree();
        assert!(session.tree().is_none());
        assert_eq!(session.scene().line_count(), 0);
        assert_eq!(session.scene().marker_count(), 2);
        assert_eq!(session.points().len(), 2);
    }

    #[test]
    fn clear_points_then_reclick_behaves_as_fresh() {
        let coords = [(0.0, 0.0), (0.0, 10.0), (10.0, 10.0)];
        let mut fresh = session_with(&coords);
        let expected = fresh.calculate("Kruskal").unwrap().clone();

        let mut reused = session_with(&[(50.0, 50.0), (70.0, 20.0), (5.0, 90.0), (1.0, 1.0)]);
        reused.calculate("Kruskal").unwrap();
        reused.clear_points();
        assert!(reused.points().is_empty());
        assert_eq!(reused.scene().marker_count(), 0);
        assert_eq!(reused.scene().line_count(), 0);

        for &(x, y) in &coords {
            reused.click(MouseButton::Left, x, y).unwrap();
        }
        assert_eq!(reused.points(), fresh.points());
        assert_eq!(reused.calculate("Kruskal").unwrap(), &expected);
    }

    #[test]
    fn clicks_are_mapped_through_zoom() {
        let mut session = Session::new(RenderConfig::default());
        session.zoom_in();
        session.click(MouseButton::Left, 120.0, 60.0).unwrap();
        let p = session.points().get(0).unwrap();
        assert_relative_eq!(p.x, 100.0, epsilon = 1e-9);
        assert_relative_eq!(p.y, 50.0, epsilon = 1e-9);

        session.zoom_out();
        assert_relative_eq!(session.viewport().scale(), 0.96, epsilon = 1e-12);
    }

    #[test]
    fn non_finite_click_is_rejected() {
        let mut session = Session::new(RenderConfig::default());
        assert!(session.click(MouseButton::Left, f64::NAN, 0.0).is_err());
        assert_eq!(session.scene().marker_count(), 0);
    }
}
