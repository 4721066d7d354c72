use crate::graph::Graph;
use crate::solver::{Expander, SearchMode, SearchState};

/// Breadth-first search on top of the min-heap frontier.
#[derive(Clone, Copy, Debug, Default)]
pub struct BreadthFirstExpander;

impl Expander for BreadthFirstExpander {
    fn mode(&self) -> SearchMode {
        SearchMode::BreadthFirstSearch
    }

    fn expand(&self, graph: &Graph, state: &mut SearchState, node: usize, _goal: usize) {
        for &neighbor in graph.node(node).neighbors() {
            if state.is_explored(neighbor) || state.in_frontier(neighbor) {
                continue;
            }
            // Not used for ordering, only to judge the quality of the resulting path.
            state.distance_traveled[neighbor] = state.distance_through(graph, node, neighbor);
            state.previous[neighbor] = Some(node);
            // The explored count only grows, so every node discovered later sorts after every
            // node discovered earlier and the heap behaves like a FIFO queue.
            let priority = state.explored.len() as f32;
            state.enqueue(neighbor, priority);
        }
    }
}
