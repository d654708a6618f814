pub mod cli;
pub mod error;
pub mod math;
pub mod mst;
pub mod render;
pub mod selection;
pub mod session;

pub use error::{MstMapError, Result};
pub use mst::{compute_with, Algorithm, Edge, Kruskal, SpanningTree};
pub use selection::PointSet;
pub use session::{MouseButton, Session};
