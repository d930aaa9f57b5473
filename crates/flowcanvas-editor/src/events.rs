//! Projections and the observers that receive them.
//!
//! After every mutation the store hands a full snapshot of the graph to its
//! observer. The renderer redraws from that snapshot and never holds
//! authoritative state of its own.

use flowcanvas_graph::{Edge, Node};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// Read-only snapshot of the graph handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
  /// Increases by one with every mutation that changed the graph.
  pub revision: u64,
  pub nodes: Vec<Node>,
  pub edges: Vec<Edge>,
}

/// Trait for receiving projections.
///
/// The store calls `notify` once per mutation, after the mutation has been
/// fully applied.
pub trait ProjectionObserver: Send + Sync {
  fn notify(&self, projection: Projection);
}

/// An observer that discards all projections.
#[derive(Debug, Clone, Default)]
pub struct NoopObserver;

impl ProjectionObserver for NoopObserver {
  fn notify(&self, _projection: Projection) {}
}

/// An observer that sends projections to an unbounded channel.
///
/// Use this when the renderer consumes projections on another task or thread.
#[derive(Debug, Clone)]
pub struct ChannelObserver {
  // Unbounded so a slow renderer never blocks a mutation. One projection is
  // produced per user gesture.
  sender: mpsc::UnboundedSender<Projection>,
}

impl ChannelObserver {
  pub fn new(sender: mpsc::UnboundedSender<Projection>) -> Self {
    Self { sender }
  }
}

impl ProjectionObserver for ChannelObserver {
  fn notify(&self, projection: Projection) {
    // Receiver may have been dropped
    let _ = self.sender.send(projection);
  }
}
