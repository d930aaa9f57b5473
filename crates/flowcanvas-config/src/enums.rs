use serde::{Deserialize, Serialize};

/// Whether a connection from a node to itself is accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelfLoopPolicy {
  #[default]
  Reject,
  Allow,
}

/// Whether a second edge between the same ordered (source, target) pair is accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateEdgePolicy {
  #[default]
  Allow,
  Reject,
}

/// How fresh node identifiers are generated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
  /// "1", "2", "3", ...
  #[default]
  Sequential,
  /// Random v4 UUIDs in simple (hyphen-free) form.
  Uuid,
}
