use serde::Serialize;
use thiserror::Error;

/// Why a connection attempt did not become an edge.
///
/// Rejections are reported to the caller, never raised as faults. The
/// renderer must not draw an edge for a rejected attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum ConnectionRejected {
  #[error("source node not found: {node_id}")]
  MissingSource { node_id: String },

  #[error("target node not found: {node_id}")]
  MissingTarget { node_id: String },

  #[error("node {node_id} cannot connect to itself")]
  SelfLoop { node_id: String },

  /// Only produced when duplicate edges are configured to be rejected.
  #[error("an edge from {from} to {to} already exists")]
  Duplicate { from: String, to: String },

  #[error("invalid edge: {message}")]
  Invalid { message: String },
}
