//! Helper functions for loading graph descriptions.
//!
//! A graph description is line oriented:
//!
//! ```text
//! <vertex count> <edge count>
//! <label> <latitude> <longitude>    (vertex count lines)
//! <source index> <target index>     (edge count lines)
//! ```
//!
//! Labels are discarded and indices are zero-based positions in the
//! vertex list. Parsing is all-or-nothing: any short, extra or
//! unparsable line yields [`Error::MalformedInput`].

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use crate::types::coordinate::Coordinate;
use crate::types::edge::Edge;
use crate::types::error::{Error, Result};

/// Raw vertex and edge lists together with the counts they declare.
///
/// A description is only a transport value; it is checked for
/// consistency when handed to
/// [`GraphStore::build`](crate::types::graph::GraphStore::build).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphDescription {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub vertices: Vec<Coordinate>,
    pub edges: Vec<Edge>,
}

impl GraphDescription {
    /// Creates a description whose declared counts match the given lists.
    pub fn new(vertices: Vec<Coordinate>, edges: Vec<Edge>) -> Self {
        GraphDescription {
            vertex_count: vertices.len(),
            edge_count: edges.len(),
            vertices,
            edges,
        }
    }

    /// Reads a description from any reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        text.parse()
    }

    /// Reads a description from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading graph description from {}", path.display());
        Self::from_reader(File::open(path)?)
    }
}

impl FromStr for GraphDescription {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let end_of_input = text.lines().count() + 1;
        let mut lines = text.lines().enumerate().map(|(i, line)| (i + 1, line));

        let (line_no, header) = lines
            .next()
            .ok_or_else(|| Error::malformed(1, "missing header line"))?;
        let mut tokens = header.split_whitespace();
        let vertex_count: usize = parse_field(tokens.next(), line_no, "vertex count")?;
        let edge_count: usize = parse_field(tokens.next(), line_no, "edge count")?;

        let mut vertices = Vec::new();
        for found in 0..vertex_count {
            let (line_no, line) = lines.next().ok_or_else(|| {
                Error::malformed(
                    end_of_input,
                    format!("expected {} vertex lines, found {}", vertex_count, found),
                )
            })?;
            vertices.push(parse_vertex(line, line_no)?);
        }

        let mut edges = Vec::new();
        for found in 0..edge_count {
            let (line_no, line) = lines.next().ok_or_else(|| {
                Error::malformed(
                    end_of_input,
                    format!("expected {} edge lines, found {}", edge_count, found),
                )
            })?;
            let mut tokens = line.split_whitespace();
            let source = parse_field(tokens.next(), line_no, "source index")?;
            let target = parse_field(tokens.next(), line_no, "target index")?;
            edges.push(Edge::new(source, target));
        }

        if let Some((line_no, _)) = lines.find(|(_, line)| !line.trim().is_empty()) {
            return Err(Error::malformed(
                line_no,
                "unexpected data after the declared edges",
            ));
        }

        Ok(GraphDescription {
            vertex_count,
            edge_count,
            vertices,
            edges,
        })
    }
}

//---------------------------------------------------------------
// Private functions
//---------------------------------------------------------------

fn parse_vertex(line: &str, line_no: usize) -> Result<Coordinate> {
    let mut tokens = line.split_whitespace();
    if tokens.next().is_none() {
        return Err(Error::malformed(line_no, "missing vertex label"));
    }
    let latitude: f64 = parse_field(tokens.next(), line_no, "latitude")?;
    let longitude: f64 = parse_field(tokens.next(), line_no, "longitude")?;
    if !latitude.is_finite() || !longitude.is_finite() {
        return Err(Error::malformed(line_no, "coordinates must be finite"));
    }
    Ok(Coordinate::new(latitude, longitude))
}

fn parse_field<T: FromStr>(token: Option<&str>, line_no: usize, what: &str) -> Result<T> {
    let token = token.ok_or_else(|| Error::malformed(line_no, format!("missing {}", what)))?;
    token
        .parse()
        .map_err(|_| Error::malformed(line_no, format!("invalid {} {:?}", what, token)))
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------
