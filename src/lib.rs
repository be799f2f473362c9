//! Geographic Routing Library.
//! Handles connectivity and shortest-path queries on graphs whose
//! vertices are latitude/longitude points.
//!
//! A graph is loaded once from a [`GraphDescription`], turned into a
//! [`GraphStore`], and wrapped in a [`RoutePlanner`] that answers
//! nearest-vertex, connectivity and route queries. Edge costs are
//! always the [`distance`] between endpoints, in miles.

#[macro_use]
extern crate log;

pub mod types {
    pub mod coordinate;
    pub mod edge;
    pub mod error;
    pub mod graph;
    pub mod router;
}

pub mod algorithms {
    pub mod components;
    pub mod dijkstra;
}

pub mod utils {
    pub mod graph;
    pub mod router_state;
}

pub use algorithms::components::ComponentIndex;
pub use types::coordinate::{distance, route_distance, Coordinate, EARTH_RADIUS_MILES};
pub use types::edge::Edge;
pub use types::error::{Error, Result};
pub use types::graph::GraphStore;
pub use types::router::{Route, RoutePlanner};
pub use utils::graph::GraphDescription;
pub use utils::router_state::{
    current_router, get_nearest_vertices, get_route, init_router, is_router_initialized,
    reload_router, RouteQuery, RouterState,
};
