use flowcanvas_config::{
  CanvasBounds, ConfigError, DuplicateEdgePolicy, IdStrategy, NodePreset, SelfLoopPolicy,
  StoreConfig,
};
use flowcanvas_graph::{Edge, Graph, Node, Position};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument, warn};

use crate::change::{ChangeReport, Connection, EdgeChange, NodeChange};
use crate::error::ConnectionRejected;
use crate::events::{NoopObserver, Projection, ProjectionObserver};
use crate::ids::{IdSource, SequentialIds, UuidIds, fresh_id, suffixed_id};

/// Owns the workflow graph for one editing session.
///
/// Every mutation is applied in full before the observer is notified, and
/// the observer is notified at most once per call.
pub struct GraphStore {
  graph: Graph,
  config: StoreConfig,
  revision: u64,
  node_ids: Box<dyn IdSource>,
  rng: StdRng,
  observer: Box<dyn ProjectionObserver>,
}

impl GraphStore {
  /// Create a store with an empty graph.
  pub fn new(config: StoreConfig) -> Result<Self, ConfigError> {
    Self::with_graph(config, Graph::new())
  }

  /// Create a store seeded with an existing graph.
  pub fn with_graph(config: StoreConfig, graph: Graph) -> Result<Self, ConfigError> {
    config.validate()?;

    let node_ids = id_source_for(config.node_ids, &graph);
    let rng = match config.seed {
      Some(seed) => StdRng::seed_from_u64(seed),
      None => StdRng::from_entropy(),
    };

    Ok(Self {
      graph,
      config,
      revision: 0,
      node_ids,
      rng,
      observer: Box::new(NoopObserver),
    })
  }

  /// Attach the observer that receives a projection after each mutation.
  pub fn with_observer(mut self, observer: impl ProjectionObserver + 'static) -> Self {
    self.observer = Box::new(observer);
    self
  }

  /// Replace the node identifier source.
  pub fn with_id_source(mut self, source: impl IdSource + 'static) -> Self {
    self.node_ids = Box::new(source);
    self
  }

  pub fn graph(&self) -> &Graph {
    &self.graph
  }

  pub fn config(&self) -> &StoreConfig {
    &self.config
  }

  pub fn revision(&self) -> u64 {
    self.revision
  }

  /// Snapshot of the current graph.
  pub fn projection(&self) -> Projection {
    Projection {
      revision: self.revision,
      nodes: self.graph.nodes().to_vec(),
      edges: self.graph.edges().to_vec(),
    }
  }

  /// Add a node with a fresh id and a random position on the canvas.
  ///
  /// Fields missing from `preset` come from the configured default node and
  /// palette.
  pub fn add_node(&mut self, preset: Option<NodePreset>) -> Node {
    let preset = preset.unwrap_or_default();

    let label = match preset.label {
      Some(label) if !label.trim().is_empty() => label,
      Some(_) => {
        debug!("blank preset label replaced by default");
        self.config.default_node.label.clone()
      }
      None => self.config.default_node.label.clone(),
    };
    let content = preset
      .content
      .or_else(|| self.config.default_node.content.clone());
    let color = match preset.color {
      Some(color) => color,
      None => {
        // Palette is non-empty, checked by StoreConfig::validate.
        let index = self.rng.gen_range(0..self.config.palette.len());
        self.config.palette[index].clone()
      }
    };
    let position = random_position(&mut self.rng, &self.config.canvas);

    let graph = &self.graph;
    let id = fresh_id(&mut *self.node_ids, |candidate| graph.contains_node(candidate));

    let node = Node {
      id,
      label,
      content,
      color,
      position,
    };

    // Cannot fail: fresh_id returns a non-empty id absent from the graph and
    // the label is non-blank (preset checked above, default by validate).
    let inserted = self.graph.insert_node(node.clone());
    debug_assert!(inserted.is_ok(), "node insert failed: {inserted:?}");

    info!(node_id = %node.id, label = %node.label, "node added");
    self.commit();
    node
  }

  /// Apply a batch of node changes from the renderer.
  ///
  /// Changes naming a node that is already gone are skipped and listed in
  /// the report. Selection changes are view state and are ignored.
  pub fn apply_node_changes(
    &mut self,
    changes: impl IntoIterator<Item = NodeChange>,
  ) -> ChangeReport {
    let mut report = ChangeReport::default();

    for change in changes {
      match change {
        NodeChange::Move { id, position } => {
          if self.graph.move_node(&id, position) {
            report.applied += 1;
          } else {
            debug!(node_id = %id, "move for missing node ignored");
            report.stale.push(id);
          }
        }
        NodeChange::Remove { id } => match self.graph.remove_node(&id) {
          Some((node, pruned)) => {
            info!(
              node_id = %node.id,
              pruned_edges = pruned.len(),
              "node removed"
            );
            report.applied += 1;
          }
          None => {
            debug!(node_id = %id, "remove for missing node ignored");
            report.stale.push(id);
          }
        },
        NodeChange::Select { id, selected } => {
          debug!(node_id = %id, selected, "node selection left to the view");
        }
      }
    }

    if !report.is_noop() {
      self.commit();
    }
    report
  }

  /// Apply a batch of edge changes from the renderer.
  ///
  /// Removing an edge that is already gone is a no-op.
  pub fn apply_edge_changes(
    &mut self,
    changes: impl IntoIterator<Item = EdgeChange>,
  ) -> ChangeReport {
    let mut report = ChangeReport::default();

    for change in changes {
      match change {
        EdgeChange::Remove { id } => match self.graph.remove_edge(&id) {
          Some(edge) => {
            info!(edge_id = %edge.id, "edge removed");
            report.applied += 1;
          }
          None => {
            debug!(edge_id = %id, "remove for missing edge ignored");
            report.stale.push(id);
          }
        },
        EdgeChange::Select { id, selected } => {
          debug!(edge_id = %id, selected, "edge selection left to the view");
        }
      }
    }

    if !report.is_noop() {
      self.commit();
    }
    report
  }

  /// Turn a connection attempt into an edge, or say why not.
  ///
  /// Both endpoints must exist. Self-loops and repeated (source, target)
  /// pairs are accepted or rejected according to the store's policies;
  /// by default self-loops are rejected and repeats are accepted, each
  /// repeat getting its own edge id.
  #[instrument(
    skip(self, connection),
    fields(source = %connection.source, target = %connection.target)
  )]
  pub fn connect(&mut self, connection: Connection) -> Result<Edge, ConnectionRejected> {
    if let Err(rejection) = self.check_connection(&connection) {
      warn!(reason = %rejection, "connection rejected");
      return Err(rejection);
    }

    let base = format!("e{}-{}", connection.source, connection.target);
    let graph = &self.graph;
    let id = suffixed_id(&base, |candidate| graph.contains_edge(candidate));

    let edge = Edge {
      id,
      source: connection.source,
      target: connection.target,
      source_handle: connection.source_handle,
      target_handle: connection.target_handle,
      style: self.config.edge_style.clone(),
    };

    if let Err(err) = self.graph.insert_edge(edge.clone()) {
      warn!(%err, "edge insert failed");
      return Err(ConnectionRejected::Invalid {
        message: err.to_string(),
      });
    }

    info!(edge_id = %edge.id, "edge added");
    self.commit();
    Ok(edge)
  }

  fn check_connection(&self, connection: &Connection) -> Result<(), ConnectionRejected> {
    if !self.graph.contains_node(&connection.source) {
      return Err(ConnectionRejected::MissingSource {
        node_id: connection.source.clone(),
      });
    }
    if !self.graph.contains_node(&connection.target) {
      return Err(ConnectionRejected::MissingTarget {
        node_id: connection.target.clone(),
      });
    }
    if connection.source == connection.target && self.config.self_loops == SelfLoopPolicy::Reject {
      return Err(ConnectionRejected::SelfLoop {
        node_id: connection.source.clone(),
      });
    }
    if self.config.duplicate_edges == DuplicateEdgePolicy::Reject
      && self
        .graph
        .has_connection(&connection.source, &connection.target)
    {
      return Err(ConnectionRejected::Duplicate {
        from: connection.source.clone(),
        to: connection.target.clone(),
      });
    }
    Ok(())
  }

  fn commit(&mut self) {
    self.revision += 1;
    self.observer.notify(self.projection());
  }
}

fn id_source_for(strategy: IdStrategy, graph: &Graph) -> Box<dyn IdSource> {
  match strategy {
    IdStrategy::Sequential => {
      // Continue after the highest numeric id already in use
      let next = graph
        .nodes()
        .iter()
        .filter_map(|n| n.id.parse::<u64>().ok())
        .max()
        .map_or(1, |max| max.saturating_add(1));
      Box::new(SequentialIds::starting_at(next))
    }
    IdStrategy::Uuid => Box::new(UuidIds),
  }
}

fn random_position(rng: &mut StdRng, canvas: &CanvasBounds) -> Position {
  Position::new(
    sample_axis(rng, canvas.x, canvas.width),
    sample_axis(rng, canvas.y, canvas.height),
  )
}

fn sample_axis(rng: &mut StdRng, origin: f64, extent: f64) -> f64 {
  // Also covers extents too small to move a large origin, or large enough
  // to overflow it
  let far = origin + extent;
  if far.is_finite() && far > origin {
    rng.gen_range(origin..origin + extent)
  } else {
    origin
  }
}
