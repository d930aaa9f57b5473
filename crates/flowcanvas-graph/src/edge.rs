use flowcanvas_config::EdgeStyle;
use serde::{Deserialize, Serialize};

/// A directed connection from `source`'s output to `target`'s input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
  pub id: String,
  pub source: String,
  pub target: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub source_handle: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub target_handle: Option<String>,
  #[serde(default)]
  pub style: EdgeStyle,
}

impl Edge {
  /// Whether either endpoint is `node_id`.
  pub fn touches(&self, node_id: &str) -> bool {
    self.source == node_id || self.target == node_id
  }
}
