//! The steppable search engine.
//!
//! A [Pathfinder] performs one dequeue-and-expand per [Pathfinder::step] call and returns a
//! [Snapshot] of its frontier, explored set and best path so far. It holds no timer and never
//! blocks; how often to step is up to the caller.
use crate::error::{Endpoint, EndpointReason, Error, Result};
use crate::graph::Graph;
use crate::solver::{Expander, SearchMode, SearchState};
use grid_util::point::Point;
use log::{debug, info, trace, warn};

/// When a run stops before its frontier is exhausted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EarlyExit {
    /// Run until the frontier is empty.
    Disabled,
    /// Stop on the step where the goal first enters the frontier.
    #[default]
    OnDiscovery,
    /// Stop on the step where the goal is dequeued. Combined with [SearchMode::Dijkstra] the
    /// path is then a shortest one.
    OnSettled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    pub mode: SearchMode,
    pub early_exit: EarlyExit,
}

impl SearchConfig {
    pub fn new(mode: SearchMode) -> SearchConfig {
        SearchConfig {
            mode,
            ..SearchConfig::default()
        }
    }

    pub fn with_early_exit(mut self, early_exit: EarlyExit) -> SearchConfig {
        self.early_exit = early_exit;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStatus {
    Uninitialized,
    Ready,
    Running,
    Complete,
}

/// Read-only view of a run after a step.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    graph: &'a Graph,
    state: &'a SearchState,
    /// Start to goal inclusive; empty until the goal has entered the frontier.
    pub path: &'a [Point],
    pub iterations: usize,
    pub is_complete: bool,
    /// The node dequeued by the step that produced this snapshot.
    pub expanded: Option<Point>,
}

impl<'a> Snapshot<'a> {
    /// Frontier positions in heap order; only the first is guaranteed to be the minimum.
    /// A position may appear more than once in Dijkstra runs.
    pub fn frontier(&self) -> impl Iterator<Item = Point> + 'a {
        let (graph, state) = (self.graph, self.state);
        state
            .frontier
            .iter()
            .map(move |entry| graph.node(entry.node).index())
    }

    /// Explored positions in the order they were settled.
    pub fn explored(&self) -> impl Iterator<Item = Point> + 'a {
        let (graph, state) = (self.graph, self.state);
        state
            .explored
            .iter()
            .map(move |&ix| graph.node(ix).index())
    }

    pub fn frontier_len(&self) -> usize {
        self.state.frontier.count()
    }

    pub fn explored_len(&self) -> usize {
        self.state.explored.len()
    }

    pub fn in_frontier(&self, pos: Point) -> bool {
        self.graph
            .get_ix(pos)
            .map_or(false, |ix| self.state.in_frontier(ix))
    }

    pub fn is_explored(&self, pos: Point) -> bool {
        self.graph
            .get_ix(pos)
            .map_or(false, |ix| self.state.is_explored(ix))
    }
}

/// Drives one search at a time over a borrowed [Graph].
///
/// ```
/// use grid_util::point::Point;
/// use stepwise_pathfinding::{Graph, Pathfinder, SearchConfig, SearchMode};
///
/// let graph = Graph::new(&[[0u8, 0, 0], [0, 1, 0], [0, 0, 0]]).unwrap();
/// let config = SearchConfig::new(SearchMode::Dijkstra);
/// let mut pathfinder =
///     Pathfinder::with_endpoints(&graph, Point::new(0, 0), Point::new(2, 2), config).unwrap();
/// while !pathfinder.is_complete() {
///     let snapshot = pathfinder.step().unwrap();
///     println!("{} nodes in frontier", snapshot.frontier_len());
/// }
/// assert_eq!(pathfinder.path().last(), Some(&Point::new(2, 2)));
/// ```
#[derive(Debug)]
pub struct Pathfinder<'g> {
    graph: &'g Graph,
    config: SearchConfig,
    expander: Box<dyn Expander>,
    start: Option<usize>,
    goal: Option<usize>,
    state: SearchState,
    path: Vec<Point>,
    iterations: usize,
    status: SearchStatus,
}

impl<'g> Pathfinder<'g> {
    /// Creates an engine with no endpoints; [initialize](Self::initialize) must be called before
    /// stepping.
    pub fn new(graph: &'g Graph, config: SearchConfig) -> Pathfinder<'g> {
        Pathfinder {
            graph,
            config,
            expander: config.mode.expander(),
            start: None,
            goal: None,
            state: SearchState::default(),
            path: Vec::new(),
            iterations: 0,
            status: SearchStatus::Uninitialized,
        }
    }

    /// Creates an engine that is ready to step from `start` towards `goal`.
    pub fn with_endpoints(
        graph: &'g Graph,
        start: Point,
        goal: Point,
        config: SearchConfig,
    ) -> Result<Pathfinder<'g>> {
        let mut pathfinder = Pathfinder::new(graph, config);
        pathfinder.initialize(start, goal)?;
        Ok(pathfinder)
    }

    fn endpoint_ix(&self, which: Endpoint, position: Point) -> Result<usize> {
        let invalid = |reason| Error::InvalidEndpoint {
            which,
            position,
            reason,
        };
        let ix = self
            .graph
            .get_ix(position)
            .ok_or_else(|| invalid(EndpointReason::OutOfBounds))?;
        if self.graph.node(ix).node_type().is_blocked() {
            return Err(invalid(EndpointReason::Blocked));
        }
        Ok(ix)
    }

    /// Validates the endpoints and resets the run so the next [step](Self::step) expands
    /// `start`. Can be called in any state; on error the engine is left as it was.
    pub fn initialize(&mut self, start: Point, goal: Point) -> Result<()> {
        let start_ix = self.endpoint_ix(Endpoint::Start, start)?;
        let goal_ix = self.endpoint_ix(Endpoint::Goal, goal)?;
        if self.graph.unreachable(start, goal) {
            warn!(
                "{} is not reachable from {}, the search will exhaust its frontier",
                goal, start
            );
        }
        debug!(
            "Initializing {} search from {} to {}",
            self.config.mode, start, goal
        );
        self.state.reset(self.graph.len(), start_ix);
        self.start = Some(start_ix);
        self.goal = Some(goal_ix);
        self.path.clear();
        self.iterations = 0;
        self.status = SearchStatus::Ready;
        Ok(())
    }

    /// Dequeues and expands one node.
    ///
    /// Fails with [Error::SearchAlreadyComplete] once the run is complete, without touching any
    /// state, and with [Error::NotInitialized] before [initialize](Self::initialize).
    pub fn step(&mut self) -> Result<Snapshot<'_>> {
        let goal = match (self.status, self.goal) {
            (SearchStatus::Complete, _) => return Err(Error::SearchAlreadyComplete),
            (SearchStatus::Uninitialized, _) | (_, None) => return Err(Error::NotInitialized),
            (_, Some(goal)) => goal,
        };
        let node = self.state.frontier.dequeue()?.node;
        self.status = SearchStatus::Running;
        self.iterations += 1;

        if self.state.explored.insert(node) {
            self.expander.expand(self.graph, &mut self.state, node, goal);
        } else {
            trace!(
                "Discarding outdated frontier entry for {}",
                self.graph.node(node).index()
            );
        }

        let goal_found = self.state.in_frontier(goal);
        let goal_settled = node == goal;
        if goal_found || goal_settled {
            self.path = self.reconstruct_path(goal);
        }
        trace!(
            "Step {}: expanded {}, {} in frontier, {} explored",
            self.iterations,
            self.graph.node(node).index(),
            self.state.frontier.count(),
            self.state.explored.len()
        );

        let exit = match self.config.early_exit {
            EarlyExit::Disabled => false,
            EarlyExit::OnDiscovery => goal_found || goal_settled,
            EarlyExit::OnSettled => goal_settled,
        };
        if exit || self.state.frontier.is_empty() {
            self.complete(goal);
        }
        Ok(self.snapshot_with(Some(self.graph.node(node).index())))
    }

    /// Steps until the run is complete.
    pub fn run_to_completion(&mut self) -> Result<Snapshot<'_>> {
        while self.status != SearchStatus::Complete {
            self.step()?;
        }
        Ok(self.snapshot())
    }

    fn complete(&mut self, goal: usize) {
        self.status = SearchStatus::Complete;
        if self.path.is_empty() {
            info!(
                "{} search finished after {} iterations without reaching {}",
                self.config.mode,
                self.iterations,
                self.graph.node(goal).index()
            );
        } else {
            info!(
                "{} search finished after {} iterations. Distance traveled: {} units",
                self.config.mode, self.iterations, self.state.distance_traveled[goal]
            );
        }
    }

    /// Follows back-pointers from `goal` and reverses them. The walk is bounded by the node
    /// count; back-pointers only ever point at nodes discovered earlier.
    fn reconstruct_path(&self, goal: usize) -> Vec<Point> {
        let mut path: Vec<Point> =
            std::iter::successors(Some(goal), |&ix| self.state.previous[ix])
                .take(self.graph.len())
                .map(|ix| self.graph.node(ix).index())
                .collect();
        path.reverse();
        path
    }

    fn snapshot_with(&self, expanded: Option<Point>) -> Snapshot<'_> {
        Snapshot {
            graph: self.graph,
            state: &self.state,
            path: &self.path,
            iterations: self.iterations,
            is_complete: self.is_complete(),
            expanded,
        }
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        self.snapshot_with(None)
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }
    pub fn config(&self) -> SearchConfig {
        self.config
    }
    pub fn mode(&self) -> SearchMode {
        self.expander.mode()
    }
    pub fn status(&self) -> SearchStatus {
        self.status
    }
    pub fn is_complete(&self) -> bool {
        self.status == SearchStatus::Complete
    }
    pub fn iterations(&self) -> usize {
        self.iterations
    }
    pub fn path(&self) -> &[Point] {
        &self.path
    }
    pub fn start(&self) -> Option<Point> {
        self.start.map(|ix| self.graph.node(ix).index())
    }
    pub fn goal(&self) -> Option<Point> {
        self.goal.map(|ix| self.graph.node(ix).index())
    }

    /// Best known distance from the start, infinite if not yet discovered. [None] out of bounds
    /// or before initialization.
    pub fn distance_traveled(&self, pos: Point) -> Option<f32> {
        self.graph
            .get_ix(pos)
            .and_then(|ix| self.state.distance_traveled.get(ix).copied())
    }

    pub fn priority(&self, pos: Point) -> Option<f32> {
        self.graph
            .get_ix(pos)
            .and_then(|ix| self.state.priority.get(ix).copied())
    }

    /// The predecessor of `pos` on the best path found to it so far.
    pub fn previous(&self, pos: Point) -> Option<Point> {
        self.graph
            .get_ix(pos)
            .and_then(|ix| self.state.previous.get(ix).copied().flatten())
            .map(|ix| self.graph.node(ix).index())
    }
}
