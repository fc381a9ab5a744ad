//! Command implementations and argument parsing for the spantree CLI.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use spantree_core::{
    DocumentError, Graph, GraphDocument, MstError, Position, SpanningForest, kruskal,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::layout::complete_positions;

/// Edge list of the built-in demonstration graph.
const EXAMPLE_EDGES: [(usize, usize, f64); 9] = [
    (0, 1, 10.0),
    (0, 2, 6.0),
    (0, 3, 5.0),
    (1, 3, 15.0),
    (2, 3, 4.0),
    (1, 2, 8.0),
    (3, 4, 7.0),
    (2, 4, 3.0),
    (1, 4, 9.0),
];

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "spantree", about = "Compute minimum spanning trees with Kruskal's algorithm.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Compute the minimum spanning tree of a graph and print it.
    Run(RunCommand),
    /// Write a graph, with layout positions, to a JSON document.
    Save(SaveCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Graph source configuration.
    #[command(subcommand)]
    pub source: GraphSource,
}

/// Options accepted by the `save` command.
#[derive(Debug, Args, Clone)]
pub struct SaveCommand {
    /// Destination path for the graph document.
    #[arg(long = "out")]
    pub out: PathBuf,

    /// Graph source configuration.
    #[command(subcommand)]
    pub source: GraphSource,
}

/// Graph sources accepted by every command.
#[derive(Debug, Subcommand, Clone)]
pub enum GraphSource {
    /// Load a graph document from a JSON file.
    File(FileArgs),
    /// Use the built-in five-vertex demonstration graph.
    Example,
    /// Build a graph from edges supplied on the command line.
    Edges(EdgesArgs),
}

/// File source arguments.
#[derive(Debug, Args, Clone)]
pub struct FileArgs {
    /// Path to a JSON graph document.
    pub path: PathBuf,

    /// Override name for the graph source (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Inline edge-list arguments.
#[derive(Debug, Args, Clone)]
pub struct EdgesArgs {
    /// Edge given as `U,V,W` with vertex indices `U` and `V` and weight `W`.
    #[arg(
        long = "edge",
        value_name = "U,V,W",
        value_parser = parse_edge_spec,
        required = true,
    )]
    pub edges: Vec<EdgeSpec>,
}

/// A single `U,V,W` edge parsed from the command line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeSpec {
    /// First endpoint.
    pub source: usize,
    /// Second endpoint.
    pub target: usize,
    /// Edge weight.
    pub weight: f64,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while reading or writing a graph document.
    #[error("failed to access `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// A graph document failed to parse as JSON.
    #[error("failed to parse `{path}`: {source}")]
    Parse {
        /// Path of the malformed document.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// A graph document could not be serialised to JSON.
    #[error("failed to serialise `{path}`: {source}")]
    Serialise {
        /// Destination path of the document.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// The loaded document failed validation.
    #[error(transparent)]
    Document(#[from] DocumentError),
    /// The spanning-tree engine rejected the graph.
    #[error(transparent)]
    Mst(#[from] MstError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub enum ExecutionSummary {
    /// Outcome of the `run` command.
    Run(RunSummary),
    /// Outcome of the `save` command.
    Save(SaveSummary),
}

/// Outcome of computing a spanning forest via the `run` command.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Human-readable name of the graph source.
    pub source_name: String,
    /// Number of vertices in the loaded graph.
    pub vertex_count: usize,
    /// Number of edges in the loaded graph.
    pub edge_count: usize,
    /// The spanning forest selected by the engine.
    pub forest: SpanningForest,
}

/// Outcome of writing a graph document via the `save` command.
#[derive(Debug, Clone)]
pub struct SaveSummary {
    /// Destination the document was written to.
    pub path: PathBuf,
    /// Human-readable name of the graph source.
    pub source_name: String,
    /// Number of vertices in the saved document.
    pub vertex_count: usize,
    /// Number of edges in the saved document.
    pub edge_count: usize,
    /// Number of layout positions generated for vertices lacking one.
    pub generated_positions: usize,
}

/// A graph loaded from one of the CLI sources.
#[derive(Debug, Clone)]
pub(super) struct LoadedGraph {
    /// Human-readable source name used in summaries and logs.
    pub(super) name: String,
    /// The loaded graph.
    pub(super) graph: Graph,
    /// Layout positions carried by the source document, if any.
    pub(super) positions: BTreeMap<usize, Position>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading, validation, or the spanning-tree
/// computation fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use spantree_cli::cli::{
/// #     Cli, Command, EdgeSpec, EdgesArgs, ExecutionSummary, GraphSource, RunCommand, run_cli,
/// # };
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         source: GraphSource::Edges(EdgesArgs {
///             edges: vec![
///                 EdgeSpec { source: 0, target: 1, weight: 2.0 },
///                 EdgeSpec { source: 1, target: 2, weight: 1.0 },
///             ],
///         }),
///     }),
/// };
/// let ExecutionSummary::Run(summary) = run_cli(cli)? else {
///     panic!("run produces a run summary");
/// };
/// assert_eq!(summary.forest.total_weight(), 3.0);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run).map(ExecutionSummary::Run)
        }
        Command::Save(save) => {
            Span::current().record("command", field::display("save"));
            save_command(save).map(ExecutionSummary::Save)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(source = field::Empty, vertices = field::Empty, edges = field::Empty),
)]
pub(super) fn run_command(command: RunCommand) -> Result<RunSummary, CliError> {
    let loaded = load_source(command.source)?;
    let span = Span::current();
    span.record("source", field::display(loaded.name.as_str()));
    span.record("vertices", field::display(loaded.graph.vertex_count()));
    span.record("edges", field::display(loaded.graph.edge_count()));

    let forest = kruskal(&loaded.graph)?;
    info!(
        source = loaded.name.as_str(),
        accepted = forest.edges().len(),
        components = forest.component_count(),
        "run completed"
    );
    Ok(RunSummary {
        source_name: loaded.name,
        vertex_count: loaded.graph.vertex_count(),
        edge_count: loaded.graph.edge_count(),
        forest,
    })
}

#[instrument(
    name = "cli.save",
    err,
    skip(command),
    fields(out = field::Empty, source = field::Empty),
)]
pub(super) fn save_command(command: SaveCommand) -> Result<SaveSummary, CliError> {
    let SaveCommand { out, source } = command;
    let span = Span::current();
    span.record("out", field::display(out.display()));

    let loaded = load_source(source)?;
    span.record("source", field::display(loaded.name.as_str()));

    let mut positions = loaded.positions;
    let generated = complete_positions(&mut positions, loaded.graph.vertex_count());
    let document = GraphDocument::from_graph(&loaded.graph, positions);
    write_document(&out, &document)?;
    info!(
        source = loaded.name.as_str(),
        vertices = document.vertex_count(),
        generated_positions = generated,
        "document saved"
    );
    Ok(SaveSummary {
        path: out,
        source_name: loaded.name,
        vertex_count: document.vertex_count(),
        edge_count: document.edges().len(),
        generated_positions: generated,
    })
}

#[instrument(
    name = "cli.load_source",
    err,
    skip(source),
    fields(kind = field::Empty, path = field::Empty, override_name = field::Empty),
)]
pub(super) fn load_source(source: GraphSource) -> Result<LoadedGraph, CliError> {
    let span = Span::current();
    match source {
        GraphSource::File(args) => {
            span.record("kind", field::display("file"));
            span.record("path", field::display(args.path.display()));
            span.record(
                "override_name",
                field::display(args.name.as_deref().unwrap_or("<derived>")),
            );
            load_document_file(&args.path, args.name.as_deref())
        }
        GraphSource::Example => {
            span.record("kind", field::display("example"));
            Ok(example_graph())
        }
        GraphSource::Edges(args) => {
            span.record("kind", field::display("edges"));
            Ok(edges_graph(&args.edges))
        }
    }
}

fn load_document_file(path: &Path, override_name: Option<&str>) -> Result<LoadedGraph, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let document: GraphDocument =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    let graph = document.to_graph()?;
    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "document loaded"
    );
    Ok(LoadedGraph {
        name: derive_source_name(path, override_name),
        graph,
        positions: document.positions().clone(),
    })
}

pub(super) fn example_graph() -> LoadedGraph {
    let mut graph = Graph::new();
    for (source, target, weight) in EXAMPLE_EDGES {
        graph.add_edge(source, target, weight);
    }
    LoadedGraph {
        name: "example".to_owned(),
        graph,
        positions: BTreeMap::new(),
    }
}

fn edges_graph(edges: &[EdgeSpec]) -> LoadedGraph {
    let mut graph = Graph::new();
    for edge in edges {
        graph.add_edge(edge.source, edge.target, edge.weight);
    }
    LoadedGraph {
        name: "edges".to_owned(),
        graph,
        positions: BTreeMap::new(),
    }
}

pub(super) fn derive_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "graph".to_owned())
}

pub(super) fn parse_edge_spec(raw: &str) -> Result<EdgeSpec, String> {
    let pieces: Vec<&str> = raw.split(',').map(str::trim).collect();
    let &[source, target, weight] = pieces.as_slice() else {
        return Err(format!("expected `U,V,W`, got `{raw}`"));
    };
    Ok(EdgeSpec {
        source: parse_vertex(source)?,
        target: parse_vertex(target)?,
        weight: parse_weight(weight)?,
    })
}

fn parse_vertex(piece: &str) -> Result<usize, String> {
    piece
        .parse()
        .map_err(|_| format!("vertex index `{piece}` must be a non-negative integer"))
}

fn parse_weight(piece: &str) -> Result<f64, String> {
    let weight: f64 = piece
        .parse()
        .map_err(|_| format!("weight `{piece}` must be a number"))?;
    if !weight.is_finite() {
        return Err(format!("weight `{piece}` must be finite"));
    }
    Ok(weight)
}

fn write_document(path: &Path, document: &GraphDocument) -> Result<(), CliError> {
    let file = File::create(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, document).map_err(|source| CliError::Serialise {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::io::Cursor;
/// # use spantree_cli::cli::{ExecutionSummary, RunSummary, render_summary};
/// # use spantree_core::{Graph, kruskal};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let mut graph = Graph::new();
/// graph.add_edge(0, 1, 2.5);
/// let summary = ExecutionSummary::Run(RunSummary {
///     source_name: "demo".into(),
///     vertex_count: graph.vertex_count(),
///     edge_count: graph.edge_count(),
///     forest: kruskal(&graph)?,
/// });
/// let mut buffer = Cursor::new(Vec::new());
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer.into_inner())?;
/// assert!(text.contains("minimum spanning tree with total weight 2.5"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Run(run) => render_run(run, &mut writer),
        ExecutionSummary::Save(save) => render_save(save, &mut writer),
    }
}

fn render_run(summary: &RunSummary, writer: &mut impl Write) -> io::Result<()> {
    writeln!(
        writer,
        "graph: {} ({} vertices, {} edges)",
        summary.source_name, summary.vertex_count, summary.edge_count
    )?;
    let forest = &summary.forest;
    if forest.is_spanning_tree() {
        writeln!(
            writer,
            "minimum spanning tree with total weight {}",
            forest.total_weight()
        )?;
    } else if forest.edges().is_empty() {
        writeln!(writer, "no spanning edges selected")?;
        return Ok(());
    } else {
        writeln!(
            writer,
            "minimum spanning forest with {} components and total weight {}",
            forest.component_count(),
            forest.total_weight()
        )?;
    }
    for (index, edge) in forest.edges().iter().enumerate() {
        writeln!(
            writer,
            "{}. {} -- {} == {}",
            index + 1,
            edge.source(),
            edge.target(),
            edge.weight()
        )?;
    }
    Ok(())
}

fn render_save(summary: &SaveSummary, writer: &mut impl Write) -> io::Result<()> {
    writeln!(
        writer,
        "saved {} ({} vertices, {} edges) to {}",
        summary.source_name,
        summary.vertex_count,
        summary.edge_count,
        summary.path.display()
    )?;
    if summary.generated_positions > 0 {
        writeln!(
            writer,
            "generated {} layout positions",
            summary.generated_positions
        )?;
    }
    Ok(())
}
