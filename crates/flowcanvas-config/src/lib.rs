//! Flowcanvas Config
//!
//! This crate contains the serializable configuration for the Flowcanvas
//! workflow editor. It describes how the graph store creates nodes and edges,
//! not the graph itself:
//! - Canvas bounds and palette used when placing new nodes
//! - The default node preset and edge style
//! - Connection policies (self-loops, duplicate edges)
//! - The node identifier strategy
//!
//! Configuration can be loaded from JSON (via CLI with `--config=editor.json`)
//! or built in code starting from [`StoreConfig::default`].

mod canvas;
mod color;
mod edge;
mod enums;
mod error;
mod node;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use canvas::CanvasBounds;
pub use color::{Color, DEFAULT_PALETTE, default_palette};
pub use edge::EdgeStyle;
pub use enums::{DuplicateEdgePolicy, IdStrategy, SelfLoopPolicy};
pub use error::ConfigError;
pub use node::{DefaultNode, NodePreset};

/// Configuration for a graph store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
  /// Area in which freshly added nodes are placed.
  pub canvas: CanvasBounds,
  /// Colors drawn from when a new node has no explicit color.
  pub palette: Vec<Color>,
  /// Label and content for nodes added without a preset.
  pub default_node: DefaultNode,
  /// Style applied to every accepted connection.
  pub edge_style: EdgeStyle,
  pub self_loops: SelfLoopPolicy,
  pub duplicate_edges: DuplicateEdgePolicy,
  pub node_ids: IdStrategy,
  /// Seed for placement and palette randomness. Entropy when absent.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub seed: Option<u64>,
}

impl Default for StoreConfig {
  fn default() -> Self {
    Self {
      canvas: CanvasBounds::default(),
      palette: default_palette(),
      default_node: DefaultNode::default(),
      edge_style: EdgeStyle::default(),
      self_loops: SelfLoopPolicy::default(),
      duplicate_edges: DuplicateEdgePolicy::default(),
      node_ids: IdStrategy::default(),
      seed: None,
    }
  }
}

impl StoreConfig {
  /// Parse and validate a JSON configuration.
  pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
    let config: StoreConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
  }

  /// Read, parse and validate a JSON configuration file.
  pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    Self::from_json_str(&content)
  }

  /// Check the values serde cannot check on its own.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.palette.is_empty() {
      return Err(ConfigError::Invalid("palette must not be empty".to_string()));
    }
    self.canvas.validate()?;
    self.edge_style.validate()?;
    if self.default_node.label.trim().is_empty() {
      return Err(ConfigError::Invalid(
        "default node label must not be empty".to_string(),
      ));
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_defaults_match_editor() {
    let config = StoreConfig::default();
    assert_eq!(config.palette.len(), 6);
    assert_eq!(config.default_node.label, "New Node");
    assert_eq!(config.self_loops, SelfLoopPolicy::Reject);
    assert_eq!(config.duplicate_edges, DuplicateEdgePolicy::Allow);
    assert_eq!(config.node_ids, IdStrategy::Sequential);
    assert!(config.validate().is_ok());
  }

  #[test]
  fn test_partial_json_uses_defaults() {
    let config = StoreConfig::from_json_str(
      r##"{ "self_loops": "allow", "palette": ["#ffffff"], "seed": 7 }"##,
    )
    .unwrap();

    assert_eq!(config.self_loops, SelfLoopPolicy::Allow);
    assert_eq!(config.palette, vec![Color::parse("#ffffff").unwrap()]);
    assert_eq!(config.seed, Some(7));
    assert_eq!(config.canvas, CanvasBounds::default());
  }

  #[test]
  fn test_empty_palette_rejected() {
    let err = StoreConfig::from_json_str(r#"{ "palette": [] }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
  }

  #[test]
  fn test_bad_color_rejected_at_parse() {
    let err = StoreConfig::from_json_str(r#"{ "palette": ["blue"] }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
  }

  #[test]
  fn test_blank_default_label_rejected() {
    let err = StoreConfig::from_json_str(r#"{ "default_node": { "label": "  " } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
  }

  #[test]
  fn test_load_missing_file() {
    let err = StoreConfig::load("/nonexistent/flowcanvas.json").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
  }
}
