use crate::error::SceneError;

use super::Color;

/// Map pixels per metre on the bundled map image: 115 px span 200 m.
pub const DEFAULT_DISTANCE_SCALE: f64 = 200.0 / 115.0;

/// Parameters controlling how points and trees are drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    distance_scale: f64,
    unit: String,
    /// Radius of a point marker, in scene pixels.
    pub marker_radius: f64,
    pub marker_color: Color,
    /// Stroke width of a tree line, in scene pixels.
    pub line_width: f64,
    pub line_color: Color,
    /// Label font size, in points.
    pub label_font_size: u16,
    /// Factor applied by one zoom-in step.
    pub zoom_in_factor: f64,
    /// Factor applied by one zoom-out step.
    pub zoom_out_factor: f64,
    /// Path of the static map image shown under the scene.
    pub map_image: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            distance_scale: DEFAULT_DISTANCE_SCALE,
            unit: "m".to_owned(),
            marker_radius: 2.0,
            marker_color: Color::Red,
            line_width: 2.0,
            line_color: Color::Blue,
            label_font_size: 8,
            zoom_in_factor: 1.2,
            zoom_out_factor: 0.8,
            map_image: "img/map.png".to_owned(),
        }
    }
}

impl RenderConfig {
    /// Sets the factor converting pixel distances to real-world units.
    ///
    /// # Errors
    ///
    /// Returns an error if `scale` is not a positive finite number.
    pub fn with_distance_scale(mut self, scale: f64) -> Result<Self, SceneError> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(SceneError::InvalidConfig(format!(
                "distance scale must be positive, got {scale}"
            )));
        }
        self.distance_scale = scale;
        Ok(self)
    }

    /// Sets the unit suffix appended to distance labels.
    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    #[must_use]
    pub fn distance_scale(&self) -> f64 {
        self.distance_scale
    }

    #[must_use]
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Formats a pixel distance as a label, e.g. `"17.39m"` for 10 px.
    #[must_use]
    pub fn format_distance(&self, weight: f64) -> String {
        format!("{:.2}{}", weight * self.distance_scale, self.unit)
    }
}
