use std::collections::HashSet;

use crate::graph::Graph;

/// Where a workflow starts and ends, for a graph snapshot.
///
/// Built fresh from a [`Graph`]; it does not follow later mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topology {
  entry_points: Vec<String>,
  exit_points: Vec<String>,
}

impl Topology {
  pub fn new(graph: &Graph) -> Self {
    let mut has_incoming: HashSet<&str> = HashSet::new();
    let mut has_outgoing: HashSet<&str> = HashSet::new();
    for edge in graph.edges() {
      has_outgoing.insert(&edge.source);
      has_incoming.insert(&edge.target);
    }

    let ids_without = |set: &HashSet<&str>| -> Vec<String> {
      graph
        .nodes()
        .iter()
        .filter(|n| !set.contains(n.id.as_str()))
        .map(|n| n.id.clone())
        .collect()
    };

    Self {
      entry_points: ids_without(&has_incoming),
      exit_points: ids_without(&has_outgoing),
    }
  }

  /// Nodes with no incoming edges, in node insertion order.
  pub fn entry_points(&self) -> &[String] {
    &self.entry_points
  }

  /// Nodes with no outgoing edges, in node insertion order.
  pub fn exit_points(&self) -> &[String] {
    &self.exit_points
  }
}

#[cfg(test)]
mod tests {
  use crate::{Graph, starter_graph};

  #[test]
  fn test_starter_topology() {
    let topology = starter_graph().topology();

    assert_eq!(topology.entry_points(), ["1".to_string()]);
    assert_eq!(topology.exit_points(), ["4".to_string()]);
  }

  #[test]
  fn test_topology_after_cascade() {
    let mut graph = starter_graph();
    graph.remove_node("1");
    let topology = graph.topology();

    assert_eq!(topology.entry_points(), ["2".to_string(), "3".to_string()]);
    assert_eq!(topology.exit_points(), ["4".to_string()]);
  }

  #[test]
  fn test_isolated_node_is_both_entry_and_exit() {
    let mut graph = starter_graph();
    graph.remove_node("2");
    graph.remove_node("3");
    let topology = graph.topology();

    assert_eq!(topology.entry_points(), ["1".to_string(), "4".to_string()]);
    assert_eq!(topology.exit_points(), ["1".to_string(), "4".to_string()]);
  }

  #[test]
  fn test_empty_graph() {
    let topology = Graph::new().topology();
    assert!(topology.entry_points().is_empty());
    assert!(topology.exit_points().is_empty());
  }
}
