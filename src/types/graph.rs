//! The undirected coordinate graph that every query runs against.
//!
//! Vertices are stored in a petgraph [`UnGraph`] and found again through
//! a map from [`Coordinate`] to [`NodeIndex`]. Edge weights are never
//! stored: the cost of an edge is the distance between its endpoints.

use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use super::coordinate::Coordinate;
use super::error::{Error, Result};
use crate::utils::graph::GraphDescription;

/// An immutable, simple, undirected graph of coordinates.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    graph: UnGraph<Coordinate, ()>,
    node_indices: HashMap<Coordinate, NodeIndex>,
}

impl GraphStore {
    /// Builds a graph from a description.
    ///
    /// The description is validated in full before anything is built:
    /// the declared counts must match the supplied lists and every edge
    /// must reference an existing vertex index. Repeated coordinates
    /// collapse into the vertex of their first occurrence, and repeated
    /// edges collapse into one.
    ///
    /// # Time Complexity
    /// *O*(*V* + *E*), plus the parallel-edge check on each insert.
    pub fn build(description: &GraphDescription) -> Result<GraphStore> {
        validate(description)?;
        info!(
            "Building graph with {} vertices and {} edges",
            description.vertex_count, description.edge_count
        );

        let mut graph =
            UnGraph::with_capacity(description.vertices.len(), description.edges.len());
        let mut node_indices: HashMap<Coordinate, NodeIndex> = HashMap::new();

        let resolved: Vec<NodeIndex> = description
            .vertices
            .iter()
            .map(|&coordinate| {
                *node_indices
                    .entry(coordinate)
                    .or_insert_with(|| graph.add_node(coordinate))
            })
            .collect();
        if graph.node_count() < resolved.len() {
            warn!(
                "{} duplicate vertices collapsed into existing coordinates",
                resolved.len() - graph.node_count()
            );
        }

        for edge in &description.edges {
            if edge.is_self_loop() {
                warn!("Vertex {} has an edge to itself", edge.source);
            }
            graph.update_edge(resolved[edge.source], resolved[edge.target], ());
        }

        info!(
            "Graph ready: {} distinct vertices, {} distinct edges",
            graph.node_count(),
            graph.edge_count()
        );
        Ok(GraphStore {
            graph,
            node_indices,
        })
    }

    /// Builds a graph straight from vertex and edge lists.
    pub fn from_parts(
        vertices: Vec<Coordinate>,
        edges: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<GraphStore> {
        let edges = edges.into_iter().map(Into::into).collect();
        Self::build(&GraphDescription::new(vertices, edges))
    }

    /// Every distinct vertex, in order of first occurrence.
    pub fn vertices(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.graph.node_indices().map(move |index| self.graph[index])
    }

    /// Every edge once, as the pair of coordinates it joins.
    pub fn edges(&self) -> Vec<(Coordinate, Coordinate)> {
        self.graph
            .edge_references()
            .map(|edge| (self.graph[edge.source()], self.graph[edge.target()]))
            .collect()
    }

    /// Neighbors of `point`. Empty if `point` is not a vertex.
    pub fn neighbors(&self, point: &Coordinate) -> Vec<Coordinate> {
        match self.node_index(point) {
            Some(index) => self
                .graph
                .neighbors(index)
                .map(|neighbor| self.graph[neighbor])
                .collect(),
            None => Vec::new(),
        }
    }

    /// Returns `true` if `point` is a vertex of the graph.
    pub fn contains(&self, point: &Coordinate) -> bool {
        self.node_indices.contains_key(point)
    }

    /// Returns `true` if `point` is a vertex with at least one incident
    /// edge, that is, a key of the adjacency mapping.
    pub fn in_adjacency(&self, point: &Coordinate) -> bool {
        self.node_index(point)
            .map(|index| self.graph.neighbors(index).next().is_some())
            .unwrap_or(false)
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Get the NodeIndex for a given coordinate. The NodeIndex is used
    /// to reference things in the underlying graph.
    pub(crate) fn node_index(&self, point: &Coordinate) -> Option<NodeIndex> {
        self.node_indices.get(point).copied()
    }

    pub(crate) fn inner(&self) -> &UnGraph<Coordinate, ()> {
        &self.graph
    }
}

//---------------------------------------------------------------
// Private functions
//---------------------------------------------------------------

/// Checks declared counts and edge indices without building anything.
fn validate(description: &GraphDescription) -> Result<()> {
    if description.vertices.len() != description.vertex_count {
        return Err(Error::malformed(
            0,
            format!(
                "declared {} vertices but {} were supplied",
                description.vertex_count,
                description.vertices.len()
            ),
        ));
    }
    if description.edges.len() != description.edge_count {
        return Err(Error::malformed(
            0,
            format!(
                "declared {} edges but {} were supplied",
                description.edge_count,
                description.edges.len()
            ),
        ));
    }
    if let Some((position, edge)) = description
        .edges
        .iter()
        .enumerate()
        .find(|(_, edge)| !edge.fits(description.vertex_count))
    {
        return Err(Error::malformed(
            0,
            format!(
                "edge {} ({} - {}) references a vertex outside 0..{}",
                position, edge.source, edge.target, description.vertex_count
            ),
        ));
    }
    Ok(())
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------
