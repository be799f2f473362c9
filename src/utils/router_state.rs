//! Stores the state of the router
//!
//! A [`RouterState`] holds the current [`RoutePlanner`] behind an
//! [`Arc`]. Readers take a snapshot and query it without holding any
//! lock; a reload builds the replacement planner completely and then
//! swaps the pointer, so queries already in flight finish on the graph
//! they started with.
//!
//! The free functions operate on one process-wide state that is set up
//! once with [`init_router`].

use std::sync::{Arc, PoisonError, RwLock};

use once_cell::sync::OnceCell;

use crate::types::coordinate::Coordinate;
use crate::types::error::{Error, Result};
use crate::types::router::{Route, RoutePlanner};
use crate::utils::graph::GraphDescription;

/// Query struct to find a route between two arbitrary locations.
#[derive(Debug, Copy, Clone)]
pub struct RouteQuery {
    ///from
    pub from: Coordinate,
    ///to
    pub to: Coordinate,
}

/// A planner that can be swapped out while it is being read.
#[derive(Debug)]
pub struct RouterState {
    current: RwLock<Arc<RoutePlanner>>,
}

impl RouterState {
    pub fn new(planner: RoutePlanner) -> RouterState {
        RouterState {
            current: RwLock::new(Arc::new(planner)),
        }
    }

    /// The planner in use right now.
    pub fn snapshot(&self) -> Arc<RoutePlanner> {
        // The guarded value is only ever replaced whole, so a poisoned
        // lock still holds a complete planner.
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Installs `planner` and returns the one it replaced.
    pub fn replace(&self, planner: RoutePlanner) -> Arc<RoutePlanner> {
        let incoming = Arc::new(planner);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, incoming)
    }
}

/// Process-wide router state.
static ROUTER_STATE: OnceCell<RouterState> = OnceCell::new();

/// Checks if router is initialized
pub fn is_router_initialized() -> bool {
    ROUTER_STATE.get().is_some()
}

/// Initializes the process-wide router from a graph description.
pub fn init_router(description: &GraphDescription) -> Result<()> {
    if is_router_initialized() {
        return Err(Error::RouterAlreadyInitialized);
    }
    info!("Initializing router");
    let planner = RoutePlanner::from_description(description)?;
    ROUTER_STATE
        .set(RouterState::new(planner))
        .map_err(|_| Error::RouterAlreadyInitialized)?;
    info!("Router is ready");
    Ok(())
}

/// Replaces the process-wide router with one built from `description`.
///
/// The new planner is built before anything is swapped; if the
/// description is rejected the current router stays in place.
pub fn reload_router(description: &GraphDescription) -> Result<()> {
    let state = ROUTER_STATE.get().ok_or(Error::RouterNotInitialized)?;
    let planner = RoutePlanner::from_description(description)?;
    let previous = state.replace(planner);
    info!(
        "Router reloaded, replacing a graph of {} vertices",
        previous.graph().vertex_count()
    );
    Ok(())
}

/// The process-wide planner in use right now.
pub fn current_router() -> Result<Arc<RoutePlanner>> {
    ROUTER_STATE
        .get()
        .map(RouterState::snapshot)
        .ok_or(Error::RouterNotInitialized)
}

/// Takes a source and a destination location and returns the vertices
/// nearest to each.
pub fn get_nearest_vertices(
    src_location: &Coordinate,
    dst_location: &Coordinate,
) -> Result<(Coordinate, Coordinate)> {
    info!("Getting nearest vertices");
    let router = current_router()?;
    let src = router.nearest_vertex(src_location)?;
    let dst = router.nearest_vertex(dst_location)?;
    Ok((src, dst))
}

/// Get route
pub fn get_route(req: RouteQuery) -> Result<Route> {
    info!("Getting route");
    let RouteQuery { from, to } = req;
    let route = current_router()?.nearest_route(&from, &to)?;
    debug!("route: {:?}", route);
    info!("Finished getting route");
    Ok(route)
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------

#[cfg(test)]
mod router_state_tests {
    use super::*;
    use crate::types::edge::Edge;
    use crate::types::graph::GraphStore;

    fn line(points: &[(f64, f64)]) -> GraphDescription {
        let vertices = points.iter().copied().map(Coordinate::from).collect();
        let edges = (1..points.len()).map(|i| Edge::new(i - 1, i)).collect();
        GraphDescription::new(vertices, edges)
    }

    #[test]
    fn test_snapshot_survives_replace() {
        let first = RoutePlanner::from_description(&line(&[(0.0, 0.0), (0.0, 1.0)])).unwrap();
        let state = RouterState::new(first);

        let before = state.snapshot();
        let second =
            RoutePlanner::from_description(&line(&[(5.0, 5.0), (5.0, 6.0), (5.0, 7.0)])).unwrap();
        let replaced = state.replace(second);

        assert!(Arc::ptr_eq(&before, &replaced));
        assert_eq!(before.graph().vertex_count(), 2);
        assert_eq!(state.snapshot().graph().vertex_count(), 3);
    }

    #[test]
    fn test_snapshot_is_shared_across_threads() {
        let store = GraphStore::build(&line(&[(0.0, 0.0), (0.0, 1.0), (0.0, 2.0)])).unwrap();
        let state = Arc::new(RouterState::new(RoutePlanner::new(store)));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let state = Arc::clone(&state);
                std::thread::spawn(move || {
                    state
                        .snapshot()
                        .route(&Coordinate::new(0.0, 0.0), &Coordinate::new(0.0, 2.0))
                        .map(|path| path.len())
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), 3);
        }
    }

    /// The only test touching the process-wide state.
    #[test]
    fn test_global_router_lifecycle() {
        let description = line(&[(0.0, 0.0), (0.0, 1.0), (0.0, 2.0)]);
        assert!(matches!(current_router(), Err(Error::RouterNotInitialized)));
        assert!(matches!(
            reload_router(&description),
            Err(Error::RouterNotInitialized)
        ));

        init_router(&description).unwrap();
        assert!(is_router_initialized());
        assert!(matches!(
            init_router(&description),
            Err(Error::RouterAlreadyInitialized)
        ));

        let (src, dst) =
            get_nearest_vertices(&Coordinate::new(0.1, -0.1), &Coordinate::new(0.0, 2.2)).unwrap();
        assert_eq!(src, Coordinate::new(0.0, 0.0));
        assert_eq!(dst, Coordinate::new(0.0, 2.0));

        let route = get_route(RouteQuery {
            from: Coordinate::new(0.1, -0.1),
            to: Coordinate::new(0.0, 2.2),
        })
        .unwrap();
        assert_eq!(route.points.len(), 3);
        assert!(route.distance_miles > 0.0);

        let mut broken = line(&[(1.0, 1.0)]);
        broken.vertex_count = 2;
        assert!(matches!(
            reload_router(&broken),
            Err(Error::MalformedInput { .. })
        ));
        assert_eq!(current_router().unwrap().graph().vertex_count(), 3);

        reload_router(&line(&[(9.0, 9.0), (9.0, 8.0)])).unwrap();
        assert_eq!(current_router().unwrap().graph().vertex_count(), 2);
    }
}
