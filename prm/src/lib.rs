pub mod builder;
pub mod collision;
pub mod error;
pub mod obstacle;
pub mod roadmap;
pub mod sequence;

mod utils;

pub use builder::PrmBuilder;
pub use collision::{is_edge_valid, EdgeChecker};
pub use error::{PrmError, Result};
pub use obstacle::{Obstacle, ObstacleField, ObstacleMap, Rectangle};
pub use roadmap::{AdjacencyList, Roadmap, VertexIndex};
pub use sequence::{Halton, VanDerCorput};

/// Builds a roadmap with the default configuration, connecting each vertex to up to `k`
/// neighbours at most `r` away.
pub fn build_roadmap<F: ObstacleField>(field: F, k: usize, r: f64) -> Result<Roadmap> {
    PrmBuilder::new(field, k, r).build()
}
