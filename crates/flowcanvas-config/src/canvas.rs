use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Rectangle of canvas coordinates in which new nodes are placed.
///
/// A node added without an explicit position lands at a uniformly random
/// point in `[x, x + width) x [y, y + height)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasBounds {
  pub x: f64,
  pub y: f64,
  pub width: f64,
  pub height: f64,
}

impl Default for CanvasBounds {
  fn default() -> Self {
    Self {
      x: 150.0,
      y: 50.0,
      width: 400.0,
      height: 300.0,
    }
  }
}

impl CanvasBounds {
  pub(crate) fn validate(&self) -> Result<(), ConfigError> {
    let finite = [self.x, self.y, self.width, self.height]
      .iter()
      .all(|v| v.is_finite());
    if !finite {
      return Err(ConfigError::Invalid(
        "canvas bounds must be finite".to_string(),
      ));
    }
    if !(self.x + self.width).is_finite() || !(self.y + self.height).is_finite() {
      return Err(ConfigError::Invalid(
        "canvas far edge must be finite".to_string(),
      ));
    }
    if self.width < 0.0 || self.height < 0.0 {
      return Err(ConfigError::Invalid(format!(
        "canvas size must not be negative: {}x{}",
        self.width, self.height
      )));
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_negative_size_rejected() {
    let bounds = CanvasBounds {
      width: -1.0,
      ..CanvasBounds::default()
    };
    assert!(bounds.validate().is_err());
  }

  #[test]
  fn test_zero_size_allowed() {
    let bounds = CanvasBounds {
      x: 10.0,
      y: 20.0,
      width: 0.0,
      height: 0.0,
    };
    assert!(bounds.validate().is_ok());
  }

  #[test]
  fn test_overflowing_far_edge_rejected() {
    let wide = CanvasBounds {
      x: 1e308,
      width: 1e308,
      ..CanvasBounds::default()
    };
    assert!(wide.validate().is_err());

    let tall = CanvasBounds {
      y: 1e308,
      height: 1e308,
      ..CanvasBounds::default()
    };
    assert!(tall.validate().is_err());
  }

  #[test]
  fn test_nan_rejected() {
    let bounds = CanvasBounds {
      x: f64::NAN,
      ..CanvasBounds::default()
    };
    assert!(bounds.validate().is_err());
  }
}
