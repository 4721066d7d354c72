use crate::graph::Graph;
use crate::solver::{Expander, SearchMode, SearchState};

/// Uniform-cost search: the frontier is ordered by distance travelled.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraExpander;

impl Expander for DijkstraExpander {
    fn mode(&self) -> SearchMode {
        SearchMode::Dijkstra
    }

    fn expand(&self, graph: &Graph, state: &mut SearchState, node: usize, _goal: usize) {
        for &neighbor in graph.node(node).neighbors() {
            if state.is_explored(neighbor) {
                continue;
            }
            let new_distance = state.distance_through(graph, node, neighbor);
            let current = state.distance_traveled[neighbor];
            if current.is_infinite() || current > new_distance {
                state.distance_traveled[neighbor] = new_distance;
                state.previous[neighbor] = Some(node);
                // Entries keep the priority they were pushed with, so an improvement gets its own
                // entry. The outdated one surfaces after the node is explored and is dropped.
                state.enqueue(neighbor, new_distance);
            }
        }
    }
}
