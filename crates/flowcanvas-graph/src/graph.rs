use serde::{Deserialize, Serialize};

use crate::edge::Edge;
use crate::error::GraphError;
use crate::node::{Node, Position};
use crate::topology::Topology;

/// Unvalidated nodes and edges, as read from JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDef {
  #[serde(default)]
  pub nodes: Vec<Node>,
  #[serde(default)]
  pub edges: Vec<Edge>,
}

/// The workflow graph: insertion-ordered nodes and edges.
///
/// Fields are private so that every mutation goes through a method that
/// keeps ids unique and edges attached to live nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GraphDef")]
pub struct Graph {
  nodes: Vec<Node>,
  edges: Vec<Edge>,
}

impl Graph {
  pub fn new() -> Self {
    Self::default()
  }

  pub(crate) fn from_parts_unchecked(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
    Self { nodes, edges }
  }

  pub fn nodes(&self) -> &[Node] {
    &self.nodes
  }

  pub fn edges(&self) -> &[Edge] {
    &self.edges
  }

  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }

  /// Get a node by ID.
  pub fn node(&self, node_id: &str) -> Option<&Node> {
    self.nodes.iter().find(|n| n.id == node_id)
  }

  /// Get an edge by ID.
  pub fn edge(&self, edge_id: &str) -> Option<&Edge> {
    self.edges.iter().find(|e| e.id == edge_id)
  }

  pub fn contains_node(&self, node_id: &str) -> bool {
    self.node(node_id).is_some()
  }

  pub fn contains_edge(&self, edge_id: &str) -> bool {
    self.edge(edge_id).is_some()
  }

  /// Whether any edge already runs from `source` to `target`.
  pub fn has_connection(&self, source: &str, target: &str) -> bool {
    self
      .edges
      .iter()
      .any(|e| e.source == source && e.target == target)
  }

  /// Edges with `node_id` as source or target, in insertion order.
  pub fn incident_edges<'a>(&'a self, node_id: &'a str) -> impl Iterator<Item = &'a Edge> + 'a {
    self.edges.iter().filter(move |e| e.touches(node_id))
  }

  /// Append a node. Fails if the id is empty or taken, or the label is blank.
  pub fn insert_node(&mut self, node: Node) -> Result<(), GraphError> {
    if node.id.is_empty() {
      return Err(GraphError::InvalidNode {
        node_id: node.id,
        reason: "id must not be empty".to_string(),
      });
    }
    if node.label.trim().is_empty() {
      return Err(GraphError::InvalidNode {
        node_id: node.id,
        reason: "label must not be blank".to_string(),
      });
    }
    if self.contains_node(&node.id) {
      return Err(GraphError::DuplicateNode(node.id));
    }
    self.nodes.push(node);
    Ok(())
  }

  /// Append an edge. Fails if the id is taken or either endpoint is missing.
  pub fn insert_edge(&mut self, edge: Edge) -> Result<(), GraphError> {
    if self.contains_edge(&edge.id) {
      return Err(GraphError::DuplicateEdge(edge.id));
    }
    if !self.contains_node(&edge.source) || !self.contains_node(&edge.target) {
      return Err(GraphError::InvalidEdge {
        edge_id: edge.id,
        from: edge.source,
        to: edge.target,
      });
    }
    self.edges.push(edge);
    Ok(())
  }

  /// Update a node's position. Returns false if the node is gone.
  pub fn move_node(&mut self, node_id: &str, position: Position) -> bool {
    match self.nodes.iter_mut().find(|n| n.id == node_id) {
      Some(node) => {
        node.position = position;
        true
      }
      None => false,
    }
  }

  /// Remove a node together with every edge incident to it.
  ///
  /// Returns the removed node and the pruned edges, or `None` if the node
  /// was not present (the graph is then left untouched).
  pub fn remove_node(&mut self, node_id: &str) -> Option<(Node, Vec<Edge>)> {
    let index = self.nodes.iter().position(|n| n.id == node_id)?;
    let node = self.nodes.remove(index);

    let (pruned, kept): (Vec<Edge>, Vec<Edge>) = std::mem::take(&mut self.edges)
      .into_iter()
      .partition(|e| e.touches(node_id));
    self.edges = kept;

    Some((node, pruned))
  }

  /// Remove an edge. Returns `None` if it was already gone.
  pub fn remove_edge(&mut self, edge_id: &str) -> Option<Edge> {
    let index = self.edges.iter().position(|e| e.id == edge_id)?;
    Some(self.edges.remove(index))
  }

  /// Entry and exit points of the current graph.
  pub fn topology(&self) -> Topology {
    Topology::new(self)
  }
}

impl TryFrom<GraphDef> for Graph {
  type Error = GraphError;

  fn try_from(def: GraphDef) -> Result<Self, Self::Error> {
    let mut graph = Graph::new();
    for node in def.nodes {
      graph.insert_node(node)?;
    }
    for edge in def.edges {
      graph.insert_edge(edge)?;
    }
    Ok(graph)
  }
}

impl From<Graph> for GraphDef {
  fn from(graph: Graph) -> Self {
    GraphDef {
      nodes: graph.nodes,
      edges: graph.edges,
    }
  }
}
