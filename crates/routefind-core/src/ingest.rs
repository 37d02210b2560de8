//! Edge-list ingestion
//!
//! Input is a delimited text stream. The first record is the query header
//! `source,destination`; every following record is an edge `from,to,weight`.
//! Blank lines are ignored and fields are trimmed. Rows that do not fit this
//! shape are rejected here so the graph model never sees malformed input.

use std::io::{BufRead, ErrorKind};

use crate::bail_malformed;
use crate::error::{Result, RouteError};
use crate::graph::{EdgeSpec, Graph, NodeId, MAX_NODE_COUNT};

/// Default field delimiter
pub const DEFAULT_DELIMITER: char = ',';

/// Options for parsing route input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestOptions {
    pub delimiter: char,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

/// A parsed query: endpoints from the header plus the edge list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub source: NodeId,
    pub target: NodeId,
    pub edges: Vec<EdgeSpec>,
}

impl RouteRequest {
    /// Replace the header endpoints, keeping those not given
    pub fn with_endpoints(self, source: Option<NodeId>, target: Option<NodeId>) -> Self {
        Self {
            source: source.unwrap_or(self.source),
            target: target.unwrap_or(self.target),
            ..self
        }
    }

    /// Node count for the graph built from this request.
    ///
    /// An explicit count wins. Otherwise the count covers every label the
    /// request mentions, endpoints included, so an endpoint naming a node
    /// without edges yields an isolated node rather than an invalid id.
    /// A label too large to count past fails with `TooManyNodes`.
    pub fn node_count(&self, explicit: Option<usize>) -> Result<usize> {
        if let Some(count) = explicit {
            return Ok(count);
        }
        let max = self
            .edges
            .iter()
            .flat_map(|edge| [edge.from, edge.to])
            .chain([self.source, self.target])
            .max()
            .unwrap_or(self.source);
        max.checked_add(1).ok_or_else(|| RouteError::TooManyNodes {
            requested: (max as u128 + 1).to_string(),
            limit: MAX_NODE_COUNT,
        })
    }

    /// Build the graph described by this request
    pub fn build_graph(&self, explicit_nodes: Option<usize>, directed: bool) -> Result<Graph> {
        Graph::build(self.node_count(explicit_nodes)?, directed, &self.edges)
    }
}

/// Parse route input from a buffered reader
#[tracing::instrument(skip(reader))]
pub fn parse_route_input<R: BufRead>(reader: R, opts: &IngestOptions) -> Result<RouteRequest> {
    let mut header: Option<(NodeId, NodeId)> = None;
    let mut edges = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.map_err(|e| match e.kind() {
            ErrorKind::InvalidData => RouteError::malformed(line_no, "invalid UTF-8"),
            _ => RouteError::Io(e),
        })?;
        let record = line.trim();
        if record.is_empty() {
            continue;
        }

        let fields: Vec<&str> = record.split(opts.delimiter).map(str::trim).collect();

        match header {
            None => {
                if fields.len() != 2 {
                    bail_malformed!(
                        line_no,
                        "expected header `source{}destination` with 2 fields, found {}",
                        opts.delimiter,
                        fields.len()
                    );
                }
                header = Some((
                    parse_node(fields[0], line_no, "source")?,
                    parse_node(fields[1], line_no, "destination")?,
                ));
            }
            Some(_) => {
                if fields.len() != 3 {
                    bail_malformed!(
                        line_no,
                        "expected edge `from{d}to{d}weight` with 3 fields, found {n}",
                        d = opts.delimiter,
                        n = fields.len()
                    );
                }
                edges.push(EdgeSpec {
                    from: parse_node(fields[0], line_no, "from")?,
                    to: parse_node(fields[1], line_no, "to")?,
                    weight: parse_weight(fields[2], line_no)?,
                });
            }
        }
    }

    let (source, target) = header.ok_or(RouteError::EmptyInput)?;
    tracing::debug!(source, target, edges = edges.len(), "parsed_route_input");

    Ok(RouteRequest {
        source,
        target,
        edges,
    })
}

/// Parse route input held in memory
pub fn parse_route_str(input: &str, opts: &IngestOptions) -> Result<RouteRequest> {
    parse_route_input(input.as_bytes(), opts)
}

fn parse_node(field: &str, line: usize, name: &str) -> Result<NodeId> {
    match field.parse::<NodeId>() {
        Ok(node) => Ok(node),
        Err(_) => bail_malformed!(
            line,
            "{} must be a non-negative integer, found `{}`",
            name,
            field
        ),
    }
}

fn parse_weight(field: &str, line: usize) -> Result<i64> {
    match field.parse::<i64>() {
        Ok(weight) => Ok(weight),
        Err(_) => bail_malformed!(line, "weight must be an integer, found `{}`", field),
    }
}
