//! Command-line interface for inspecting edge-list graphs.
//!
//! `summary` reports the size and weight of a graph; `mst` prints its minimum
//! spanning forest.

mod commands;
mod edge_list;

pub use commands::{
    Cli, CliError, Command, GraphArgs, GraphSummary, MstArgs, MstReport, Report, ScanArg,
    render_report, run_cli,
};
pub use edge_list::{EdgeListError, MalformedReason, read_edge_list};
