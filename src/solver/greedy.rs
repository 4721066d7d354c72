use crate::graph::Graph;
use crate::solver::{Expander, SearchMode, SearchState};

/// Greedy best-first search: the frontier is ordered by octile distance to the goal alone.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyBestFirstExpander;

impl Expander for GreedyBestFirstExpander {
    fn mode(&self) -> SearchMode {
        SearchMode::GreedyBestFirst
    }

    fn expand(&self, graph: &Graph, state: &mut SearchState, node: usize, goal: usize) {
        let goal_pos = graph.node(goal).index();
        for &neighbor in graph.node(node).neighbors() {
            if state.is_explored(neighbor) || state.in_frontier(neighbor) {
                continue;
            }
            state.distance_traveled[neighbor] = state.distance_through(graph, node, neighbor);
            state.previous[neighbor] = Some(node);
            let priority = graph.node_distance(graph.node(neighbor).index(), goal_pos);
            state.enqueue(neighbor, priority);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_util::point::Point;

    #[test]
    fn prefers_neighbour_closest_to_goal() {
        let graph = Graph::new(&vec![vec![0u8; 3]; 3]).unwrap();
        let start = graph.get_ix(Point::new(0, 0)).unwrap();
        let goal = graph.get_ix(Point::new(2, 2)).unwrap();
        let mut state = SearchState::new(graph.len());
        state.reset(graph.len(), start);
        state.frontier.dequeue().unwrap();
        state.explored.insert(start);

        GreedyBestFirstExpander.expand(&graph, &mut state, start, goal);

        assert_eq!(state.frontier.count(), 3);
        let best = state.frontier.peek().unwrap();
        assert_eq!(graph.node(best.node).index(), Point::new(1, 1));
        assert!((best.priority - 1.4).abs() < 1e-6);
        let side = graph.get_ix(Point::new(1, 0)).unwrap();
        assert!((state.priority[side] - 2.4).abs() < 1e-6);
    }
}
