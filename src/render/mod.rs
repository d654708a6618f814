mod config;
mod items;
mod scene;
mod viewport;

pub use config::{RenderConfig, DEFAULT_DISTANCE_SCALE};
pub use items::{Color, Label, LabelId, LineId, LineItem, Marker, MarkerId};
pub use scene::Scene;
pub use viewport::Viewport;
