//! Line-based edge-list reader.
//!
//! Each non-blank line holds either `vertex` or `u v weight`, separated by
//! whitespace. A `#` starts a comment that runs to the end of the line.
//! Vertices are registered in the order they first appear and a repeated edge
//! overwrites the earlier weight.

use std::io::{self, BufRead};

use thiserror::Error;
use tracing::{debug, instrument};
use wugraph_core::{Weight, WuGraph};

/// Errors raised while reading an edge list.
#[derive(Debug, Error)]
pub enum EdgeListError {
    /// The underlying reader failed, or the input was not UTF-8.
    #[error("failed to read edge list: {source}")]
    Read {
        /// Underlying I/O failure.
        #[from]
        source: io::Error,
    },
    /// A line does not match either record shape.
    #[error("line {line}: {reason}")]
    Malformed {
        /// One-based line number.
        line: usize,
        /// What was wrong with the line.
        reason: MalformedReason,
    },
}

/// Why a line was rejected.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MalformedReason {
    /// The line held neither one nor three fields.
    #[error("expected `vertex` or `u v weight`, found {found} fields")]
    FieldCount {
        /// Number of whitespace-separated fields present.
        found: usize,
    },
    /// The weight field is not a signed 64-bit integer.
    #[error("weight `{raw}` is not a 64-bit integer")]
    Weight {
        /// The offending field.
        raw: String,
    },
}

enum Record<'a> {
    Vertex(&'a str),
    Edge(&'a str, &'a str, Weight),
}

/// Reads an edge list into a graph keyed by vertex name.
///
/// # Errors
/// Returns [`EdgeListError::Read`] when `reader` fails and
/// [`EdgeListError::Malformed`] for the first line that cannot be parsed.
///
/// # Examples
/// ```
/// use wugraph_cli::cli::read_edge_list;
///
/// let input = "# triangle\na b 5\nb c 3\na c 10\nlonely\n";
/// let graph = read_edge_list(input.as_bytes())?;
/// assert_eq!(graph.vertices(), ["a", "b", "c", "lonely"]);
/// assert_eq!(graph.weight(&"c".to_owned(), &"a".to_owned()), 10);
/// # Ok::<(), wugraph_cli::cli::EdgeListError>(())
/// ```
#[instrument(name = "cli.read_edge_list", err, skip(reader))]
pub fn read_edge_list(reader: impl BufRead) -> Result<WuGraph<String>, EdgeListError> {
    let mut graph = WuGraph::new();
    let mut records = 0_usize;
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let record = parse_line(&line).map_err(|reason| EdgeListError::Malformed {
            line: index + 1,
            reason,
        })?;
        match record {
            Some(Record::Vertex(vertex)) => graph.add_vertex(vertex.to_owned()),
            Some(Record::Edge(u, v, weight)) => {
                let (u, v) = (u.to_owned(), v.to_owned());
                graph.add_vertex(u.clone());
                graph.add_vertex(v.clone());
                graph.add_edge(&u, &v, weight);
            }
            None => continue,
        }
        records += 1;
    }
    debug!(
        records,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "edge list loaded"
    );
    Ok(graph)
}

fn parse_line(line: &str) -> Result<Option<Record<'_>>, MalformedReason> {
    let content = line.split_once('#').map_or(line, |(before, _)| before);
    let fields: Vec<&str> = content.split_whitespace().collect();
    match fields.as_slice() {
        [] => Ok(None),
        [vertex] => Ok(Some(Record::Vertex(*vertex))),
        [u, v, raw] => raw
            .parse::<Weight>()
            .map(|weight| Some(Record::Edge(*u, *v, weight)))
            .map_err(|_| MalformedReason::Weight {
                raw: (*raw).to_owned(),
            }),
        other => Err(MalformedReason::FieldCount { found: other.len() }),
    }
}
