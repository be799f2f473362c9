//! The core of the router library.
//!
//! A [`RoutePlanner`] owns a [`GraphStore`] and the [`ComponentIndex`]
//! derived from it. Both are fixed at construction, so a planner can be
//! shared by any number of readers; every query keeps its working state
//! on its own stack.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::coordinate::{self, Coordinate};
use super::error::{Error, Result};
use super::graph::GraphStore;
use crate::algorithms::components::ComponentIndex;
use crate::algorithms::dijkstra;
use crate::utils::graph::GraphDescription;

/// A route handed to a visualizer: the points to draw, start first, and
/// the total length in miles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub points: Vec<Coordinate>,
    pub distance_miles: f64,
}

impl Route {
    /// Number of edges travelled.
    pub fn hop_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }
}

/// Answers nearest-vertex and shortest-route queries on one graph.
#[derive(Debug, Clone, Default)]
pub struct RoutePlanner {
    store: GraphStore,
    components: ComponentIndex,
}

impl RoutePlanner {
    /// Creates a planner, computing the components of `store` once.
    pub fn new(store: GraphStore) -> RoutePlanner {
        let components = ComponentIndex::build(&store);
        RoutePlanner { store, components }
    }

    /// Validates and builds a planner from a description.
    pub fn from_description(description: &GraphDescription) -> Result<RoutePlanner> {
        Ok(Self::new(GraphStore::build(description)?))
    }

    /// Reads, validates and builds a planner from a description file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<RoutePlanner> {
        Self::from_description(&GraphDescription::from_path(path)?)
    }

    /// Reads, validates and builds a planner from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<RoutePlanner> {
        Self::from_description(&GraphDescription::from_reader(reader)?)
    }

    pub fn graph(&self) -> &GraphStore {
        &self.store
    }

    pub fn components(&self) -> &ComponentIndex {
        &self.components
    }

    /// Returns the vertex closest to `query`, which need not be a vertex
    /// itself. Ties go to the vertex that was loaded first.
    ///
    /// # Time Complexity
    /// *O*(*V*).
    pub fn nearest_vertex(&self, query: &Coordinate) -> Result<Coordinate> {
        let mut vertices = self.store.vertices();
        let first = vertices.next().ok_or(Error::EmptyGraph)?;
        let (nearest, nearest_distance) = vertices.fold(
            (first, coordinate::distance(query, &first)),
            |(best, best_distance), vertex| {
                let candidate = coordinate::distance(query, &vertex);
                if candidate < best_distance {
                    (vertex, candidate)
                } else {
                    (best, best_distance)
                }
            },
        );
        debug!(
            "Nearest vertex to {} is {} ({} miles away)",
            query, nearest, nearest_distance
        );
        Ok(nearest)
    }

    /// Sums the distance between consecutive points of `path`. The path
    /// does not have to follow graph edges.
    pub fn route_distance(&self, path: &[Coordinate]) -> f64 {
        coordinate::route_distance(path)
    }

    /// Returns `true` if a path joins `a` and `b`.
    pub fn connected(&self, a: &Coordinate, b: &Coordinate) -> bool {
        self.components.same_component(a, b)
    }

    /// Finds the shortest route from `start` to `end`.
    ///
    /// The checks run in order, each before any search is done:
    /// * identical endpoints give [`Error::TrivialRoute`];
    /// * an endpoint with no edges in the graph gives [`Error::UnknownPoint`];
    /// * endpoints in different components give [`Error::Unreachable`].
    ///
    /// # Returns
    /// The vertices of the route, `start` first and `end` last, with no
    /// vertex repeated.
    pub fn route(&self, start: &Coordinate, end: &Coordinate) -> Result<Vec<Coordinate>> {
        debug!("Routing from {} to {}", start, end);
        if start == end {
            return Err(Error::TrivialRoute { point: *start });
        }
        for point in [start, end] {
            if !self.store.in_adjacency(point) {
                return Err(Error::UnknownPoint { point: *point });
            }
        }
        if !self.components.same_component(start, end) {
            return Err(Error::Unreachable {
                start: *start,
                end: *end,
            });
        }

        let path = dijkstra::shortest_path(&self.store, start, end)?;
        debug!("Route has {} points", path.len());
        Ok(path)
    }

    /// Like [`route`](Self::route), but packages the points with their
    /// total distance.
    pub fn plan(&self, start: &Coordinate, end: &Coordinate) -> Result<Route> {
        let points = self.route(start, end)?;
        let distance_miles = coordinate::route_distance(&points);
        Ok(Route {
            points,
            distance_miles,
        })
    }

    /// Snaps two arbitrary coordinates to their nearest vertices and
    /// plans a route between those.
    pub fn nearest_route(&self, from: &Coordinate, to: &Coordinate) -> Result<Route> {
        let start = self.nearest_vertex(from)?;
        let end = self.nearest_vertex(to)?;
        self.plan(&start, &end)
    }
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------

#[cfg(test)]
mod router_tests {
    use super::*;
    use crate::types::coordinate::distance;

    /// Four points in Durham, NC chained 0 - 1 - 2 - 3, plus an isolated
    /// pair 4 - 5 near Seattle and a lone vertex 6.
    fn planner() -> (RoutePlanner, Vec<Coordinate>) {
        let p = vec![
            Coordinate::new(35.994, -78.8986),
            Coordinate::new(36.0014, -78.9382),
            Coordinate::new(36.0107, -78.9176),
            Coordinate::new(35.9940, -78.9400),
            Coordinate::new(47.6062, -122.3321),
            Coordinate::new(47.6205, -122.3493),
            Coordinate::new(25.7617, -80.1918),
        ];
        let store = GraphStore::from_parts(p.clone(), [(0, 1), (1, 2), (2, 3), (4, 5)]).unwrap();
        (RoutePlanner::new(store), p)
    }

    #[test]
    fn test_nearest_vertex() {
        let store = GraphStore::from_parts(
            vec![Coordinate::new(0.0, 0.0), Coordinate::new(10.0, 10.0)],
            [],
        )
        .unwrap();
        let planner = RoutePlanner::new(store);
        assert_eq!(
            planner.nearest_vertex(&Coordinate::new(1.0, 1.0)).unwrap(),
            Coordinate::new(0.0, 0.0)
        );
        assert_eq!(
            planner.nearest_vertex(&Coordinate::new(9.0, 9.0)).unwrap(),
            Coordinate::new(10.0, 10.0)
        );
    }

    #[test]
    fn test_nearest_vertex_tie_goes_to_first() {
        let store = GraphStore::from_parts(
            vec![Coordinate::new(0.0, -1.0), Coordinate::new(0.0, 1.0)],
            [],
        )
        .unwrap();
        let planner = RoutePlanner::new(store);
        assert_eq!(
            planner.nearest_vertex(&Coordinate::new(0.0, 0.0)).unwrap(),
            Coordinate::new(0.0, -1.0)
        );
    }

    #[test]
    fn test_nearest_vertex_empty_graph() {
        let planner = RoutePlanner::default();
        assert!(matches!(
            planner.nearest_vertex(&Coordinate::new(1.0, 1.0)),
            Err(Error::EmptyGraph)
        ));
    }

    #[test]
    fn test_route_along_chain() {
        let (planner, p) = planner();
        let path = planner.route(&p[0], &p[3]).unwrap();
        assert_eq!(path, vec![p[0], p[1], p[2], p[3]]);
        assert_eq!(
            planner.route_distance(&path),
            distance(&p[0], &p[1]) + distance(&p[1], &p[2]) + distance(&p[2], &p[3])
        );
    }

    #[test]
    fn test_route_same_point_is_trivial() {
        let (planner, p) = planner();
        assert!(matches!(
            planner.route(&p[1], &p[1]),
            Err(Error::TrivialRoute { point }) if point == p[1]
        ));
    }

    #[test]
    fn test_route_unknown_point() {
        let (planner, p) = planner();
        let stranger = Coordinate::new(1.0, 1.0);
        assert!(matches!(
            planner.route(&p[0], &stranger),
            Err(Error::UnknownPoint { point }) if point == stranger
        ));
        assert!(matches!(
            planner.route(&stranger, &p[0]),
            Err(Error::UnknownPoint { point }) if point == stranger
        ));
    }

    #[test]
    fn test_route_isolated_vertex_is_unknown() {
        let (planner, p) = planner();
        assert!(matches!(
            planner.route(&p[0], &p[6]),
            Err(Error::UnknownPoint { point }) if point == p[6]
        ));
    }

    #[test]
    fn test_route_across_components_is_unreachable() {
        let (planner, p) = planner();
        assert!(!planner.connected(&p[0], &p[4]));
        assert!(matches!(
            planner.route(&p[0], &p[4]),
            Err(Error::Unreachable { .. })
        ));
    }

    #[test]
    fn test_plan_carries_distance() {
        let (planner, p) = planner();
        let route = planner.plan(&p[5], &p[4]).unwrap();
        assert_eq!(route.points, vec![p[5], p[4]]);
        assert_eq!(route.hop_count(), 1);
        assert_eq!(route.distance_miles, distance(&p[5], &p[4]));
    }

    #[test]
    fn test_nearest_route_snaps_endpoints() {
        let (planner, p) = planner();
        let route = planner
            .nearest_route(
                &Coordinate::new(35.99, -78.89),
                &Coordinate::new(36.011, -78.917),
            )
            .unwrap();
        assert_eq!(route.points, vec![p[0], p[1], p[2]]);
    }
}
