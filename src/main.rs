use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use flowcanvas_config::StoreConfig;
use flowcanvas_editor::{ChannelObserver, EditorEvent, EventOutcome, GraphStore, Projection};
use flowcanvas_graph::{Graph, starter_graph};

/// Flowcanvas - the graph store behind a visual workflow editor
#[derive(Parser)]
#[command(name = "flowcanvas")]
#[command(version, about, long_about = None)]
struct Cli {
  /// Path to an editor config file (JSON)
  #[arg(long, global = true)]
  config: Option<PathBuf>,

  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
  /// Print the starter workflow graph
  Sample,

  /// Replay a script of editor events against a store
  Replay {
    /// Path to the script file (JSON)
    script_file: PathBuf,

    /// Start from an empty graph when the script has none
    #[arg(long)]
    empty: bool,

    /// Also print every projection emitted along the way
    #[arg(long)]
    trace: bool,
  },
}

/// A recorded editing session.
#[derive(Deserialize)]
struct Script {
  /// Graph to start from. The starter graph when absent.
  #[serde(default)]
  graph: Option<Graph>,
  events: Vec<EditorEvent>,
}

#[derive(Serialize)]
struct SampleOutput<'a> {
  graph: &'a Graph,
  entry_points: &'a [String],
  exit_points: &'a [String],
}

#[derive(Serialize)]
struct ReplayOutput {
  #[serde(skip_serializing_if = "Vec::is_empty")]
  trace: Vec<Projection>,
  outcomes: Vec<EventOutcome>,
  projection: Projection,
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
    )
    .init();

  let cli = Cli::parse();

  let config = match &cli.config {
    Some(path) => StoreConfig::load(path)
      .with_context(|| format!("failed to load config: {}", path.display()))?,
    None => StoreConfig::default(),
  };

  match cli.command {
    Some(Commands::Sample) => print_sample()?,
    Some(Commands::Replay {
      script_file,
      empty,
      trace,
    }) => replay(&script_file, config, empty, trace)?,
    None => {
      println!("flowcanvas - use --help to see available commands");
    }
  }

  Ok(())
}

fn print_sample() -> Result<()> {
  let graph = starter_graph();
  let topology = graph.topology();

  let output = SampleOutput {
    graph: &graph,
    entry_points: topology.entry_points(),
    exit_points: topology.exit_points(),
  };
  println!("{}", serde_json::to_string_pretty(&output)?);

  Ok(())
}

fn replay(script_file: &Path, config: StoreConfig, empty: bool, trace: bool) -> Result<()> {
  let content = std::fs::read_to_string(script_file)
    .with_context(|| format!("failed to read script file: {}", script_file.display()))?;

  let script: Script = serde_json::from_str(&content)
    .with_context(|| format!("failed to parse script file: {}", script_file.display()))?;

  let graph = match script.graph {
    Some(graph) => graph,
    None if empty => Graph::new(),
    None => starter_graph(),
  };
  eprintln!(
    "Starting with {} nodes and {} edges",
    graph.nodes().len(),
    graph.edges().len()
  );

  let (sender, mut receiver) = mpsc::unbounded_channel();
  let mut store = GraphStore::with_graph(config, graph).context("invalid editor config")?;
  if trace {
    store = store.with_observer(ChannelObserver::new(sender));
  }

  let outcomes: Vec<EventOutcome> = script
    .events
    .into_iter()
    .map(|event| store.dispatch(event))
    .collect();

  let rejected = outcomes.iter().filter(|o| o.is_rejected()).count();
  eprintln!(
    "Replayed {} events ({} connections rejected)",
    outcomes.len(),
    rejected
  );

  let mut projections = Vec::new();
  while let Ok(projection) = receiver.try_recv() {
    projections.push(projection);
  }

  let output = ReplayOutput {
    trace: projections,
    outcomes,
    projection: store.projection(),
  };
  println!("{}", serde_json::to_string_pretty(&output)?);

  Ok(())
}
