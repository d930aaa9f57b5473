use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::ConfigError;

/// Cosmetic style of an edge. Has no effect on graph semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeStyle {
  pub animated: bool,
  pub stroke: Color,
  pub stroke_width: f64,
}

impl Default for EdgeStyle {
  fn default() -> Self {
    Self {
      animated: true,
      stroke: Color("#404040".to_string()),
      stroke_width: 2.0,
    }
  }
}

impl EdgeStyle {
  pub(crate) fn validate(&self) -> Result<(), ConfigError> {
    if !(self.stroke_width.is_finite() && self.stroke_width > 0.0) {
      return Err(ConfigError::Invalid(format!(
        "stroke width must be positive, got {}",
        self.stroke_width
      )));
    }
    Ok(())
  }
}
