//! Expansion strategies and the per-run bookkeeping they share.
//!
//! A search run never writes to the [Graph]. Its scratch values live in [SearchState], a set of
//! arrays parallel to the graph's node arena, so the same graph can back any number of runs.
use crate::graph::Graph;
use crate::priority_queue::PriorityQueue;
use core::cmp::Ordering;
use core::fmt;
use fxhash::FxBuildHasher;
use indexmap::IndexSet;

pub mod breadth_first;
pub mod dijkstra;
pub mod greedy;

pub use breadth_first::BreadthFirstExpander;
pub use dijkstra::DijkstraExpander;
pub use greedy::GreedyBestFirstExpander;

pub type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// Selects the [Expander] a search run uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchMode {
    #[default]
    BreadthFirstSearch,
    Dijkstra,
    GreedyBestFirst,
}

impl SearchMode {
    pub const ALL: [SearchMode; 3] = [
        SearchMode::BreadthFirstSearch,
        SearchMode::Dijkstra,
        SearchMode::GreedyBestFirst,
    ];

    pub fn expander(self) -> Box<dyn Expander> {
        match self {
            SearchMode::BreadthFirstSearch => Box::new(BreadthFirstExpander),
            SearchMode::Dijkstra => Box::new(DijkstraExpander),
            SearchMode::GreedyBestFirst => Box::new(GreedyBestFirstExpander),
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            SearchMode::BreadthFirstSearch => "breadth-first",
            SearchMode::Dijkstra => "dijkstra",
            SearchMode::GreedyBestFirst => "greedy best-first",
        };
        write!(f, "{}", name)
    }
}

/// A node waiting in the frontier together with the priority it was enqueued with.
///
/// Orders by priority first and then by arena index, so equal priorities pop in a fixed order
/// that does not depend on when they were pushed.
#[derive(Clone, Copy, Debug)]
pub struct FrontierEntry {
    pub priority: f32,
    pub node: usize,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.priority.total_cmp(&other.priority) {
            Ordering::Equal => self.node.cmp(&other.node),
            s => s,
        }
    }
}

/// Scratch values of one search run, indexed by arena index.
#[derive(Clone, Debug, Default)]
pub struct SearchState {
    pub distance_traveled: Vec<f32>,
    pub priority: Vec<f32>,
    pub previous: Vec<Option<usize>>,
    pub frontier: PriorityQueue<FrontierEntry>,
    /// Settled nodes in the order they were first dequeued.
    pub explored: FxIndexSet<usize>,
}

impl SearchState {
    pub fn new(node_count: usize) -> SearchState {
        SearchState {
            distance_traveled: vec![f32::INFINITY; node_count],
            priority: vec![0.0; node_count],
            previous: vec![None; node_count],
            frontier: PriorityQueue::new(),
            explored: FxIndexSet::default(),
        }
    }

    /// Clears everything and puts `start` in the frontier at distance and priority zero.
    pub fn reset(&mut self, node_count: usize, start: usize) {
        self.distance_traveled.clear();
        self.distance_traveled.resize(node_count, f32::INFINITY);
        self.priority.clear();
        self.priority.resize(node_count, 0.0);
        self.previous.clear();
        self.previous.resize(node_count, None);
        self.frontier.clear();
        self.explored.clear();
        self.distance_traveled[start] = 0.0;
        self.enqueue(start, 0.0);
    }

    pub fn is_explored(&self, ix: usize) -> bool {
        self.explored.contains(&ix)
    }

    /// Linear scan of the frontier.
    pub fn in_frontier(&self, ix: usize) -> bool {
        self.frontier.any(|entry| entry.node == ix)
    }

    /// Records `priority` for the node and pushes a matching frontier entry.
    pub fn enqueue(&mut self, ix: usize, priority: f32) {
        self.priority[ix] = priority;
        self.frontier.enqueue(FrontierEntry { priority, node: ix });
    }

    /// Cost of reaching `to` through `from`: the distance travelled to `from`, the octile step
    /// and the terrain cost of the node being left.
    pub fn distance_through(&self, graph: &Graph, from: usize, to: usize) -> f32 {
        let source = graph.node(from);
        self.distance_traveled[from]
            + graph.node_distance(source.index(), graph.node(to).index())
            + source.terrain_cost()
    }
}

/// Given a node that has just been dequeued, updates its neighbours and pushes the ones that
/// should be searched next.
pub trait Expander: fmt::Debug {
    fn mode(&self) -> SearchMode;

    fn expand(&self, graph: &Graph, state: &mut SearchState, node: usize, goal: usize);
}
