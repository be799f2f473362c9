//! Definition of the `Edge` type.

/// An undirected connection between two vertices of a graph
/// description, named by their zero-based positions in the vertex list.
///
/// An edge carries no weight. Its cost is always the distance between
/// its endpoint coordinates, computed when it is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    /// One end of the edge.
    pub source: usize,

    /// The other end of the edge.
    pub target: usize,
}

impl Edge {
    pub const fn new(source: usize, target: usize) -> Self {
        Edge { source, target }
    }

    /// Returns `true` if both endpoints fall inside a vertex list of
    /// length `vertex_count`.
    pub fn fits(&self, vertex_count: usize) -> bool {
        self.source < vertex_count && self.target < vertex_count
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl From<(usize, usize)> for Edge {
    fn from((source, target): (usize, usize)) -> Self {
        Edge::new(source, target)
    }
}
