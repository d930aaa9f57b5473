use flowcanvas_graph::Position;
use serde::{Deserialize, Serialize};

/// A node change reported by the rendering surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeChange {
  /// The node was dragged to a new position.
  Move { id: String, position: Position },
  /// The node was deleted. Its edges go with it.
  Remove { id: String },
  /// Selection highlight toggled. View state, not stored.
  Select { id: String, selected: bool },
}

/// An edge change reported by the rendering surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EdgeChange {
  Remove { id: String },
  /// Selection highlight toggled. View state, not stored.
  Select { id: String, selected: bool },
}

/// A proposed edge, submitted for validation before it becomes part of the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
  pub source: String,
  pub target: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub source_handle: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub target_handle: Option<String>,
}

impl Connection {
  pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
    Self {
      source: source.into(),
      target: target.into(),
      source_handle: None,
      target_handle: None,
    }
  }

  pub fn with_handles(
    mut self,
    source_handle: impl Into<String>,
    target_handle: impl Into<String>,
  ) -> Self {
    self.source_handle = Some(source_handle.into());
    self.target_handle = Some(target_handle.into());
    self
  }
}

/// Result of applying a change batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeReport {
  /// Number of changes that mutated the graph.
  pub applied: usize,
  /// Ids referenced by changes whose target was already gone.
  pub stale: Vec<String>,
}

impl ChangeReport {
  pub fn is_noop(&self) -> bool {
    self.applied == 0
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_node_change_wire_format() {
    let changes: Vec<NodeChange> = serde_json::from_str(
      r#"[
        { "type": "move", "id": "2", "position": { "x": 10.5, "y": -3 } },
        { "type": "remove", "id": "3" },
        { "type": "select", "id": "1", "selected": true }
      ]"#,
    )
    .unwrap();

    assert_eq!(
      changes,
      vec![
        NodeChange::Move {
          id: "2".to_string(),
          position: Position::new(10.5, -3.0),
        },
        NodeChange::Remove {
          id: "3".to_string()
        },
        NodeChange::Select {
          id: "1".to_string(),
          selected: true
        },
      ]
    );
  }

  #[test]
  fn test_connection_handles_are_camel_case() {
    let connection: Connection = serde_json::from_str(
      r#"{ "source": "1", "target": "2", "sourceHandle": "out", "targetHandle": "in" }"#,
    )
    .unwrap();
    assert_eq!(connection, Connection::new("1", "2").with_handles("out", "in"));

    let bare = serde_json::to_string(&Connection::new("1", "2")).unwrap();
    assert_eq!(bare, r#"{"source":"1","target":"2"}"#);
  }
}
