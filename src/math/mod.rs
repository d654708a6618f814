pub mod distance_2d;

/// 2D point type, in map image pixel space.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;
