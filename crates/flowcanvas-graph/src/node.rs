use flowcanvas_config::Color;
use serde::{Deserialize, Serialize};

/// A point on the canvas. Unconstrained, may be negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
  pub x: f64,
  pub y: f64,
}

impl Position {
  pub fn new(x: f64, y: f64) -> Self {
    Self { x, y }
  }
}

/// One workflow step on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
  pub id: String,
  pub label: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub content: Option<String>,
  pub color: Color,
  pub position: Position,
}
