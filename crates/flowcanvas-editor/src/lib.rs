//! Flowcanvas Editor
//!
//! This crate provides the graph store behind the workflow editor. The store
//! is the single source of truth for the graph: the rendering surface sends
//! it change batches and connection attempts, and receives a full
//! [`Projection`] of the resulting graph after each mutation.
//!
//! All operations are synchronous. A mutation is applied completely before
//! its projection is emitted, so a renderer never sees a node removed while
//! its edges are still present.

mod change;
mod dispatch;
mod error;
mod events;
mod ids;
mod store;

pub use change::{ChangeReport, Connection, EdgeChange, NodeChange};
pub use dispatch::{EditorEvent, EventOutcome};
pub use error::ConnectionRejected;
pub use events::{ChannelObserver, NoopObserver, Projection, ProjectionObserver};
pub use ids::{IdSource, SequentialIds, UuidIds};
pub use store::GraphStore;
