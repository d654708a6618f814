use std::fmt;
use std::str::FromStr;

use tracing::warn;

use super::{Kruskal, SpanningTree};
use crate::error::{AlgorithmError, Result};
use crate::selection::PointSet;

/// Spanning tree strategy chosen by name from the UI or command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    #[default]
    Kruskal,
}

impl Algorithm {
    /// Runs the selected strategy.
    #[must_use]
    pub fn compute(self, points: &PointSet) -> SpanningTree {
        match self {
            Self::Kruskal => Kruskal::new().execute(points),
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Kruskal => "Kruskal",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = AlgorithmError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("kruskal") {
            Ok(Self::Kruskal)
        } else {
            Err(AlgorithmError::Unsupported(s.to_owned()))
        }
    }
}

/// Parses `algorithm` and computes the spanning tree of `points` with it.
///
/// # Errors
///
/// Returns `AlgorithmError::Unsupported` if `algorithm` names no known strategy.
pub fn compute_with(algorithm: &str, points: &PointSet) -> Result<SpanningTree> {
    let algorithm: Algorithm = algorithm.parse().inspect_err(|e| warn!("{e}"))?;
    Ok(algorithm.compute(points))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::MstMapError;
    use crate::math::Point2;

    #[test]
    fn parses_kruskal_in_any_case() {
        assert_eq!("Kruskal".parse::<Algorithm>().unwrap(), Algorithm::Kruskal);
        assert_eq!("kruskal".parse::<Algorithm>().unwrap(), Algorithm::Kruskal);
        assert_eq!(" KRUSKAL ".parse::<Algorithm>().unwrap(), Algorithm::Kruskal);
    }

    #[test]
    fn unknown_name_is_unsupported() {
        assert_eq!(
            "Prim".parse::<Algorithm>(),
            Err(AlgorithmError::Unsupported("Prim".to_owned()))
        );
    }

    #[test]
    fn unsupported_message_names_the_algorithm() {
        let err = compute_with("Boruvka", &PointSet::new()).unwrap_err();
        assert!(matches!(err, MstMapError::Algorithm(_)));
        assert_eq!(
            err.to_string(),
            "unsupported algorithm: Boruvka (available: Kruskal)"
        );
    }

    #[test]
    fn compute_with_kruskal_on_degenerate_input() {
        let mut points = PointSet::new();
        assert!(compute_with("Kruskal", &points).unwrap().is_empty());
        points.push(Point2::new(1.0, 1.0)).unwrap();
        assert!(compute_with("Kruskal", &points).unwrap().is_empty());
    }

    #[test]
    fn display_round_trips_through_parse() {
        let name = Algorithm::Kruskal.to_string();
        assert_eq!(name.parse::<Algorithm>().unwrap(), Algorithm::Kruskal);
    }
}
