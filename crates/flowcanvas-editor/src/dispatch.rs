//! The inbound contract as data.
//!
//! Everything the rendering surface can ask of the store is one
//! [`EditorEvent`]. Scripts and bridges deserialize events and feed them to
//! [`GraphStore::dispatch`].

use flowcanvas_config::NodePreset;
use flowcanvas_graph::{Edge, Node};
use serde::{Deserialize, Serialize};

use crate::change::{ChangeReport, Connection, EdgeChange, NodeChange};
use crate::error::ConnectionRejected;
use crate::store::GraphStore;

/// A request from the rendering surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EditorEvent {
  /// The add-node button was pressed.
  AddNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    preset: Option<NodePreset>,
  },
  NodesChange { changes: Vec<NodeChange> },
  EdgesChange { changes: Vec<EdgeChange> },
  /// The user dragged from one handle to another.
  Connect {
    #[serde(flatten)]
    connection: Connection,
  },
}

/// What the store did with an [`EditorEvent`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EventOutcome {
  NodeAdded { node: Node },
  Changed { report: ChangeReport },
  Connected { edge: Edge },
  Rejected { rejection: ConnectionRejected },
}

impl EventOutcome {
  pub fn is_rejected(&self) -> bool {
    matches!(self, EventOutcome::Rejected { .. })
  }
}

impl GraphStore {
  /// Apply one event from the rendering surface.
  pub fn dispatch(&mut self, event: EditorEvent) -> EventOutcome {
    match event {
      EditorEvent::AddNode { preset } => EventOutcome::NodeAdded {
        node: self.add_node(preset),
      },
      EditorEvent::NodesChange { changes } => EventOutcome::Changed {
        report: self.apply_node_changes(changes),
      },
      EditorEvent::EdgesChange { changes } => EventOutcome::Changed {
        report: self.apply_edge_changes(changes),
      },
      EditorEvent::Connect { connection } => match self.connect(connection) {
        Ok(edge) => EventOutcome::Connected { edge },
        Err(rejection) => EventOutcome::Rejected { rejection },
      },
    }
  }
}

#[cfg(test)]
mod tests {
  use flowcanvas_config::StoreConfig;
  use flowcanvas_graph::starter_graph;

  use super::*;

  #[test]
  fn test_event_wire_format() {
    let events: Vec<EditorEvent> = serde_json::from_str(
      r##"[
        { "type": "add_node" },
        { "type": "add_node", "preset": { "label": "Branch", "color": "#ef4444" } },
        { "type": "connect", "source": "1", "target": "2", "sourceHandle": "a" },
        { "type": "edges_change", "changes": [{ "type": "remove", "id": "e1-2" }] }
      ]"##,
    )
    .unwrap();

    assert_eq!(events[0], EditorEvent::AddNode { preset: None });
    assert!(matches!(
      &events[1],
      EditorEvent::AddNode { preset: Some(p) } if p.label.as_deref() == Some("Branch")
    ));
    assert_eq!(
      events[2],
      EditorEvent::Connect {
        connection: Connection {
          source: "1".to_string(),
          target: "2".to_string(),
          source_handle: Some("a".to_string()),
          target_handle: None,
        }
      }
    );
    assert!(matches!(&events[3], EditorEvent::EdgesChange { changes } if changes.len() == 1));
  }

  #[test]
  fn test_dispatch_reports_rejection() {
    let mut store = GraphStore::with_graph(StoreConfig::default(), starter_graph()).unwrap();
    let outcome = store.dispatch(EditorEvent::Connect {
      connection: Connection::new("1", "1"),
    });

    assert!(outcome.is_rejected());
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["outcome"], "rejected");
    assert_eq!(json["rejection"]["reason"], "self_loop");
    assert_eq!(json["rejection"]["node_id"], "1");
  }

  #[test]
  fn test_dispatch_add_node() {
    let mut store = GraphStore::new(StoreConfig::default()).unwrap();
    let outcome = store.dispatch(EditorEvent::AddNode { preset: None });
    match outcome {
      EventOutcome::NodeAdded { node } => assert!(store.graph().contains_node(&node.id)),
      other => panic!("unexpected outcome: {other:?}"),
    }
  }
}
