//! Command implementations and argument parsing for the wugraph CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::{Span, field, info, instrument};
use wugraph_core::{EdgeScan, Kruskal, WuGraph};

use super::edge_list::{EdgeListError, read_edge_list};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "wugraph",
    about = "Inspect weighted undirected graphs and their minimum spanning trees."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Report vertex, edge and weight totals for an edge list.
    Summary(GraphArgs),
    /// Print the minimum spanning forest of an edge list.
    Mst(MstArgs),
}

/// Input shared by every command.
#[derive(Debug, Args, Clone)]
pub struct GraphArgs {
    /// Edge-list file: `u v weight` or `vertex` per line, `#` comments.
    pub path: PathBuf,
}

/// Options accepted by the `mst` command.
#[derive(Debug, Args, Clone)]
pub struct MstArgs {
    /// Graph to span.
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Which incidences of each edge Kruskal's scan collects.
    #[arg(long, value_enum, default_value_t = ScanArg::All)]
    pub scan: ScanArg,
}

/// Command-line spelling of [`EdgeScan`].
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum ScanArg {
    /// Collect every edge from both endpoints.
    #[default]
    All,
    /// Collect every edge once, from its earlier endpoint.
    Lower,
}

impl From<ScanArg> for EdgeScan {
    fn from(value: ScanArg) -> Self {
        match value {
            ScanArg::All => Self::AllIncidences,
            ScanArg::Lower => Self::LowerIndexEndpoint,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The input file is not a valid edge list.
    #[error("invalid edge list `{path}`: {source}")]
    EdgeList {
        /// Path of the rejected file.
        path: PathBuf,
        /// Parse or read failure.
        #[source]
        source: EdgeListError,
    },
}

/// Size and weight totals of a loaded graph.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GraphSummary {
    /// Name derived from the input file.
    pub data_source: String,
    /// Number of vertices.
    pub vertices: usize,
    /// Number of logical edges, self-edges included.
    pub edges: usize,
    /// Number of self-edges.
    pub self_edges: usize,
    /// Sum of all edge weights.
    pub total_weight: i128,
}

/// Minimum spanning forest of a loaded graph.
#[derive(Debug, Clone)]
pub struct MstReport {
    /// Name derived from the input file.
    pub data_source: String,
    /// Scan used to build the forest.
    pub scan: EdgeScan,
    /// The forest itself, on the input's vertex set.
    pub forest: WuGraph<String>,
}

impl MstReport {
    /// Number of trees in the forest; isolated vertices count as one each.
    ///
    /// Saturates at zero when `forest` holds more edges than vertices.
    #[must_use]
    pub fn components(&self) -> usize {
        self.forest
            .vertex_count()
            .saturating_sub(self.forest.edge_count())
    }
}

/// Outcome of a CLI command, ready for rendering.
#[derive(Debug, Clone)]
pub enum Report {
    /// Output of `summary`.
    Summary(GraphSummary),
    /// Output of `mst`.
    Mst(MstReport),
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the input cannot be opened or parsed.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use wugraph_cli::cli::{Cli, Command, GraphArgs, MstArgs, Report, ScanArg, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "a b 5\nb c 3\na c 10\n")?;
/// let cli = Cli {
///     command: Command::Mst(MstArgs {
///         graph: GraphArgs { path: file.path().to_path_buf() },
///         scan: ScanArg::All,
///     }),
/// };
/// let Report::Mst(report) = run_cli(cli)? else {
///     unreachable!("mst produces an mst report");
/// };
/// assert_eq!(report.forest.total_weight(), 8);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<Report, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Summary(args) => {
            span.record("command", field::display("summary"));
            summarise(&args).map(Report::Summary)
        }
        Command::Mst(args) => {
            span.record("command", field::display("mst"));
            span_forest(&args).map(Report::Mst)
        }
    }
}

#[instrument(name = "cli.summary", err, skip(args), fields(path = %args.path.display()))]
pub(super) fn summarise(args: &GraphArgs) -> Result<GraphSummary, CliError> {
    let graph = load_graph(&args.path)?;
    let self_edges = graph.edges().iter().filter(|(u, v, _)| u == v).count();
    let summary = GraphSummary {
        data_source: derive_data_source_name(&args.path),
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        self_edges,
        total_weight: graph.total_weight(),
    };
    info!(
        data_source = summary.data_source.as_str(),
        vertices = summary.vertices,
        edges = summary.edges,
        "summary completed"
    );
    Ok(summary)
}

#[instrument(
    name = "cli.mst",
    err,
    skip(args),
    fields(path = %args.graph.path.display(), scan = ?args.scan),
)]
pub(super) fn span_forest(args: &MstArgs) -> Result<MstReport, CliError> {
    let graph = load_graph(&args.graph.path)?;
    let scan = EdgeScan::from(args.scan);
    let forest = Kruskal::builder().with_edge_scan(scan).build().run(&graph);
    let report = MstReport {
        data_source: derive_data_source_name(&args.graph.path),
        scan,
        forest,
    };
    info!(
        data_source = report.data_source.as_str(),
        edges = report.forest.edge_count(),
        components = report.components(),
        "minimum spanning forest computed"
    );
    Ok(report)
}

pub(super) fn load_graph(path: &Path) -> Result<WuGraph<String>, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_edge_list(BufReader::new(file)).map_err(|source| CliError::EdgeList {
        path: path.to_path_buf(),
        source,
    })
}

pub(super) fn derive_data_source_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "graph".to_owned(), ToOwned::to_owned)
}

/// Renders `report` to `writer` as plain text.
///
/// `mst` output lists one `u<TAB>v<TAB>weight` line per forest edge after the
/// header lines.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use wugraph_cli::cli::{GraphSummary, Report, render_report};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let report = Report::Summary(GraphSummary {
///     data_source: "demo".into(),
///     vertices: 3,
///     edges: 2,
///     self_edges: 0,
///     total_weight: 7,
/// });
/// let mut buffer = Vec::new();
/// render_report(&report, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "data source: demo\nvertices: 3\nedges: 2\nself-edges: 0\ntotal weight: 7\n",
/// );
/// # Ok(())
/// # }
/// ```
pub fn render_report(report: &Report, mut writer: impl Write) -> io::Result<()> {
    match report {
        Report::Summary(summary) => {
            writeln!(writer, "data source: {}", summary.data_source)?;
            writeln!(writer, "vertices: {}", summary.vertices)?;
            writeln!(writer, "edges: {}", summary.edges)?;
            writeln!(writer, "self-edges: {}", summary.self_edges)?;
            writeln!(writer, "total weight: {}", summary.total_weight)?;
        }
        Report::Mst(mst) => {
            writeln!(writer, "data source: {}", mst.data_source)?;
            writeln!(writer, "vertices: {}", mst.forest.vertex_count())?;
            writeln!(writer, "tree edges: {}", mst.forest.edge_count())?;
            writeln!(writer, "components: {}", mst.components())?;
            writeln!(writer, "total weight: {}", mst.forest.total_weight())?;
            for (u, v, weight) in mst.forest.edges() {
                writeln!(writer, "{u}\t{v}\t{weight}")?;
            }
        }
    }
    Ok(())
}
