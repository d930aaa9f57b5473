use flowcanvas_config::{EdgeStyle, default_palette};

use crate::edge::Edge;
use crate::graph::Graph;
use crate::node::{Node, Position};

// Colored with the first four palette entries, in order.
const STARTER_NODES: [(&str, &str, &str, f64, f64); 4] = [
  ("1", "Start", "Trigger the workflow", 100.0, 150.0),
  ("2", "Process", "Transform the data", 400.0, 100.0),
  ("3", "Filter", "Apply conditions", 400.0, 280.0),
  ("4", "Output", "Send the result", 700.0, 190.0),
];

const STARTER_EDGES: [(&str, &str); 4] = [("1", "2"), ("1", "3"), ("2", "4"), ("3", "4")];

/// The four-step workflow a new editor session opens with.
///
/// Start fans out to Process and Filter, which both feed Output.
pub fn starter_graph() -> Graph {
  let nodes = STARTER_NODES
    .iter()
    .zip(default_palette())
    .map(|(&(id, label, content, x, y), color)| Node {
      id: id.to_string(),
      label: label.to_string(),
      content: Some(content.to_string()),
      color,
      position: Position::new(x, y),
    })
    .collect();

  let edges = STARTER_EDGES
    .iter()
    .map(|&(source, target)| Edge {
      id: format!("e{source}-{target}"),
      source: source.to_string(),
      target: target.to_string(),
      source_handle: None,
      target_handle: None,
      style: EdgeStyle::default(),
    })
    .collect();

  Graph::from_parts_unchecked(nodes, edges)
}
