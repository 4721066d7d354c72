//! # stepwise_pathfinding
//!
//! Grid pathfinding that can be watched while it runs. A [Graph] is built once from a raw grid of
//! terrain values; a [Pathfinder] then searches it with
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search),
//! [Dijkstra's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm) or
//! [greedy best-first search](https://en.wikipedia.org/wiki/Best-first_search), one node
//! expansion per [Pathfinder::step]. After every step the frontier, the explored set and the best
//! path found so far can be inspected, which makes it easy to animate a search or to stop it
//! early.
//!
//! All three modes share one frontier, a binary min-heap ([PriorityQueue]). Breadth-first search
//! is emulated on it with a monotonically increasing priority. Movement is 8-directional with
//! octile distances, and leaving a node costs an extra [NodeType::terrain_cost].
mod error;
pub mod graph;
pub mod node;
pub mod pathfinder;
pub mod priority_queue;
pub mod solver;

pub use error::{Endpoint, EndpointReason, Error, Result};
pub use graph::{Graph, RowPolicy};
pub use node::{Node, NodeType};
pub use pathfinder::{EarlyExit, Pathfinder, SearchConfig, SearchStatus, Snapshot};
pub use priority_queue::PriorityQueue;
pub use solver::{Expander, SearchMode};

use grid_util::point::Point;
use itertools::Itertools;

/// Approximation of the square root of two used for diagonal steps. Kept at 1.4 so path costs
/// stay comparable across implementations.
pub const DIAGONAL_COST: f32 = 1.4;
pub const N_SMALLVEC_SIZE: usize = 8;

/// Sums the octile step plus the terrain cost of the node being left over consecutive points of
/// `path`. This equals the distance traveled the search recorded for the last point of a path it
/// reconstructed. Returns [None] if a point is outside the graph.
pub fn path_cost(graph: &Graph, path: &[Point]) -> Option<f32> {
    path.iter()
        .tuple_windows()
        .map(|(a, b)| {
            graph
                .get_node(*a)
                .map(|node| graph.node_distance(*a, *b) + node.terrain_cost())
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_cost_charges_terrain_of_source() {
        let graph = Graph::new(&[[2u8, 3, 0]]).unwrap();
        let path = [Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)];
        assert_eq!(path_cost(&graph, &path), Some(1.0 + 1.0 + 1.0 + 2.0));
        assert_eq!(path_cost(&graph, &path[..1]), Some(0.0));
        assert_eq!(path_cost(&graph, &[Point::new(5, 0), Point::new(0, 0)]), None);
    }
}
