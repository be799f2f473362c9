//! Connected components of a [`GraphStore`].
//!
//! Components are computed once, as a pure function of the graph, and
//! never change afterwards. Ids are handed out in vertex order: the
//! component holding the first vertex is `0`, the component holding the
//! first vertex not yet reached is `1`, and so on.

use std::collections::HashMap;

use petgraph::visit::{Dfs, VisitMap};

use crate::types::coordinate::Coordinate;
use crate::types::graph::GraphStore;

/// Maps every vertex of a graph to its component id.
#[derive(Debug, Clone, Default)]
pub struct ComponentIndex {
    components: HashMap<Coordinate, usize>,
    count: usize,
}

impl ComponentIndex {
    /// Labels every vertex of `store` with a component id.
    ///
    /// A single iterative depth-first search is reused for every root,
    /// so a vertex discovered from one root is never a root itself.
    ///
    /// # Time Complexity
    /// *O*(*V* + *E*).
    pub fn build(store: &GraphStore) -> ComponentIndex {
        let graph = store.inner();
        let mut components = HashMap::with_capacity(graph.node_count());
        let mut count = 0;
        let mut dfs = Dfs::empty(graph);

        for root in graph.node_indices() {
            if dfs.discovered.is_visited(&root) {
                continue;
            }
            dfs.move_to(root);
            while let Some(node) = dfs.next(graph) {
                components.insert(graph[node], count);
            }
            count += 1;
        }

        info!(
            "Found {} connected components among {} vertices",
            count,
            components.len()
        );
        ComponentIndex { components, count }
    }

    /// Component id of `point`, if it is a vertex.
    pub fn component_of(&self, point: &Coordinate) -> Option<usize> {
        self.components.get(point).copied()
    }

    /// Returns `true` if a path joins `a` and `b`.
    ///
    /// A point that is not a vertex is connected to nothing, not even
    /// itself.
    pub fn same_component(&self, a: &Coordinate, b: &Coordinate) -> bool {
        match (self.component_of(a), self.component_of(b)) {
            (Some(left), Some(right)) => left == right,
            _ => false,
        }
    }

    /// Number of components.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of labelled vertices.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------

#[cfg(test)]
mod component_tests {
    use super::*;

    fn points(n: usize) -> Vec<Coordinate> {
        (0..n)
            .map(|i| Coordinate::new(i as f64, (i * i) as f64))
            .collect()
    }

    #[test]
    fn test_ids_follow_vertex_order() {
        let p = points(6);
        // {0, 4}, {1, 2, 5}, {3}
        let store = GraphStore::from_parts(p.clone(), [(4, 0), (5, 2), (1, 5)]).unwrap();
        let index = ComponentIndex::build(&store);

        assert_eq!(index.count(), 3);
        assert_eq!(index.len(), 6);
        assert_eq!(index.component_of(&p[0]), Some(0));
        assert_eq!(index.component_of(&p[4]), Some(0));
        assert_eq!(index.component_of(&p[1]), Some(1));
        assert_eq!(index.component_of(&p[2]), Some(1));
        assert_eq!(index.component_of(&p[5]), Some(1));
        assert_eq!(index.component_of(&p[3]), Some(2));
    }

    #[test]
    fn test_same_component() {
        let p = points(4);
        let store = GraphStore::from_parts(p.clone(), [(0, 1), (2, 3)]).unwrap();
        let index = ComponentIndex::build(&store);

        assert!(index.same_component(&p[0], &p[1]));
        assert!(index.same_component(&p[1], &p[0]));
        assert!(index.same_component(&p[2], &p[2]));
        assert!(!index.same_component(&p[1], &p[2]));
    }

    #[test]
    fn test_absent_point_is_not_connected() {
        let p = points(2);
        let store = GraphStore::from_parts(p.clone(), [(0, 1)]).unwrap();
        let index = ComponentIndex::build(&store);
        let stranger = Coordinate::new(-50.0, -50.0);

        assert_eq!(index.component_of(&stranger), None);
        assert!(!index.same_component(&stranger, &p[0]));
        assert!(!index.same_component(&stranger, &stranger));
    }

    #[test]
    fn test_empty_graph_has_no_components() {
        let store = GraphStore::from_parts(Vec::new(), []).unwrap();
        let index = ComponentIndex::build(&store);
        assert_eq!(index.count(), 0);
        assert!(index.is_empty());
    }
}
