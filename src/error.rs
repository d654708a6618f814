use thiserror::Error;

/// Top-level error type for mstmap.
#[derive(Debug, Error)]
pub enum MstMapError {
    #[error(transparent)]
    Algorithm(#[from] AlgorithmError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to choosing a spanning tree algorithm.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlgorithmError {
    #[error("unsupported algorithm: {0} (available: Kruskal)")]
    Unsupported(String),
}

/// Errors related to the selected point set.
#[derive(Debug, Error, PartialEq)]
pub enum SelectionError {
    #[error("point ({x}, {y}) has a non-finite coordinate")]
    NonFinite { x: f64, y: f64 },

    #[error("point index {index} is out of range for {len} selected points")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Errors related to the render scene and its configuration.
#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    #[error("scene item not found: {0}")]
    ItemNotFound(&'static str),

    #[error("invalid render configuration: {0}")]
    InvalidConfig(String),
}

/// Errors related to parsing user input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("malformed point {0:?}, expected X,Y")]
    MalformedPoint(String),
}

/// Convenience type alias for results using [`MstMapError`].
pub type Result<T> = std::result::Result<T, MstMapError>;
