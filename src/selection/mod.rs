mod parse;

pub use parse::parse_point;

use crate::error::SelectionError;
use crate::math::Point2;

/// Ordered sequence of points picked on the map.
///
/// Insertion order is selection order. A point's index stays valid until the
/// set is cleared; there is no partial delete.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSet {
    points: Vec<Point2>,
}

impl PointSet {
    /// Creates a new, empty point set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a point and returns its index.
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::NonFinite` if either coordinate is NaN or infinite.
    pub fn push(&mut self, point: Point2) -> Result<usize, SelectionError> {
        if !point.x.is_finite() || !point.y.is_finite() {
            return Err(SelectionError::NonFinite {
                x: point.x,
                y: point.y,
            });
        }
        self.points.push(point);
        Ok(self.points.len() - 1)
    }

    /// Removes every point.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Returns the point at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is past the end of the set.
    pub fn get(&self, index: usize) -> Result<&Point2, SelectionError> {
        self.points
            .get(index)
            .ok_or(SelectionError::IndexOutOfRange {
                index,
                len: self.points.len(),
            })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Point2] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point2> {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point2;
    type IntoIter = std::slice::Iter<'a, Point2>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl TryFrom<Vec<Point2>> for PointSet {
    type Error = SelectionError;

    fn try_from(points: Vec<Point2>) -> Result<Self, Self::Error> {
        let mut set = Self::new();
        for p in points {
            set.push(p)?;
        }
        Ok(set)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn push_returns_insertion_index() {
        let mut set = PointSet::new();
        assert_eq!(set.push(Point2::new(1.0, 2.0)).unwrap(), 0);
        assert_eq!(set.push(Point2::new(3.0, 4.0)).unwrap(), 1);
        assert_eq!(set.len(), 2);
        assert_eq!(*set.get(1).unwrap(), Point2::new(3.0, 4.0));
    }

    #[test]
    fn push_rejects_nan() {
        let mut set = PointSet::new();
        let result = set.push(Point2::new(f64::NAN, 0.0));
        assert!(matches!(result, Err(SelectionError::NonFinite { .. })));
        assert!(set.is_empty());
    }

    #[test]
    fn push_rejects_infinity() {
        let mut set = PointSet::new();
        assert!(set.push(Point2::new(0.0, f64::INFINITY)).is_err());
    }

    #[test]
    fn get_out_of_range() {
        let set = PointSet::try_from(vec![Point2::new(0.0, 0.0)]).unwrap();
        assert_eq!(
            set.get(3),
            Err(SelectionError::IndexOutOfRange { index: 3, len: 1 })
        );
    }

    #[test]
    fn clear_then_push_starts_at_zero() {
        let mut set = PointSet::new();
        set.push(Point2::new(5.0, 5.0)).unwrap();
        set.push(Point2::new(6.0, 6.0)).unwrap();
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.push(Point2::new(7.0, 7.0)).unwrap(), 0);
        assert_eq!(set, PointSet::try_from(vec![Point2::new(7.0, 7.0)]).unwrap());
    }

    #[test]
    fn iteration_preserves_selection_order() {
        let pts = vec![
            Point2::new(3.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        ];
        let set = PointSet::try_from(pts.clone()).unwrap();
        let collected: Vec<Point2> = set.iter().copied().collect();
        assert_eq!(collected, pts);
    }
}
