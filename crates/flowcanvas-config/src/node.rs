use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Label and content given to nodes added without a preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultNode {
  pub label: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub content: Option<String>,
}

impl Default for DefaultNode {
  fn default() -> Self {
    Self {
      label: "New Node".to_string(),
      content: Some("Configure this node...".to_string()),
    }
  }
}

/// Caller-supplied values for a node being added.
///
/// Any field left out falls back to the store configuration: the default
/// label/content, or a color drawn from the palette.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodePreset {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub label: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub content: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub color: Option<Color>,
}

impl NodePreset {
  pub fn labeled(label: impl Into<String>) -> Self {
    Self {
      label: Some(label.into()),
      ..Self::default()
    }
  }

  pub fn with_content(mut self, content: impl Into<String>) -> Self {
    self.content = Some(content.into());
    self
  }

  pub fn with_color(mut self, color: Color) -> Self {
    self.color = Some(color);
    self
  }
}
