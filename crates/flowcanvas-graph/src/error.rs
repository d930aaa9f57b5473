use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
  #[error("invalid node {node_id:?}: {reason}")]
  InvalidNode { node_id: String, reason: String },

  #[error("duplicate node id: {0}")]
  DuplicateNode(String),

  #[error("duplicate edge id: {0}")]
  DuplicateEdge(String),

  #[error("edge {edge_id} references unknown node: from={from}, to={to}")]
  InvalidEdge {
    edge_id: String,
    from: String,
    to: String,
  },
}
