//! Shortest path search over a [`GraphStore`].
//!
//! The frontier is a plain [`BinaryHeap`] with lazy deletion: a vertex
//! is pushed again every time its distance improves, and stale entries
//! are dropped when they surface for a vertex that is already settled.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use ordered_float::OrderedFloat;
use petgraph::graph::NodeIndex;
use petgraph::visit::{VisitMap, Visitable};

use crate::types::coordinate::{distance, Coordinate};
use crate::types::error::{Error, Result};
use crate::types::graph::GraphStore;

type FrontierEntry = Reverse<(OrderedFloat<f64>, NodeIndex)>;

/// Finds the path from `start` to `end` with the smallest summed
/// [`distance`], using Dijkstra's algorithm.
///
/// Both endpoints must be vertices of `store`. Callers are expected to
/// have ruled out trivial and disconnected queries already; if the
/// search still fails to link the two points, [`Error::NoPath`] is
/// returned instead of a partial route.
///
/// # Time Complexity
/// *O*((*V* + *E*) log *V*).
pub fn shortest_path(
    store: &GraphStore,
    start: &Coordinate,
    end: &Coordinate,
) -> Result<Vec<Coordinate>> {
    let no_path = || Error::NoPath {
        start: *start,
        end: *end,
    };
    let graph = store.inner();
    let source = store.node_index(start).ok_or_else(no_path)?;
    let target = store.node_index(end).ok_or_else(no_path)?;

    let mut distances: HashMap<NodeIndex, f64> = HashMap::new();
    let mut predecessors: HashMap<NodeIndex, NodeIndex> = HashMap::new();
    let mut settled = graph.visit_map();
    let mut frontier: BinaryHeap<FrontierEntry> = BinaryHeap::new();

    distances.insert(source, 0.0);
    frontier.push(Reverse((OrderedFloat(0.0), source)));

    while let Some(Reverse((OrderedFloat(current_distance), current))) = frontier.pop() {
        if settled.is_visited(&current) {
            continue;
        }
        if current == target {
            break;
        }
        settled.visit(current);

        let here = graph[current];
        for neighbor in graph.neighbors(current) {
            if settled.is_visited(&neighbor) {
                continue;
            }
            let candidate = current_distance + distance(&here, &graph[neighbor]);
            let best = distances.get(&neighbor).copied().unwrap_or(f64::INFINITY);
            if candidate < best {
                distances.insert(neighbor, candidate);
                predecessors.insert(neighbor, current);
                frontier.push(Reverse((OrderedFloat(candidate), neighbor)));
            }
        }
    }

    if !predecessors.contains_key(&target) {
        return Err(no_path());
    }

    let mut path = vec![graph[target]];
    let mut cursor = target;
    while let Some(&previous) = predecessors.get(&cursor) {
        path.push(graph[previous]);
        cursor = previous;
    }
    path.reverse();

    if path.first() != Some(start) {
        return Err(no_path());
    }
    debug!(
        "Settled {} vertices, path has {} points",
        settled.count_ones(..),
        path.len()
    );
    Ok(path)
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------
