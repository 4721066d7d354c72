use crate::error::{Error, Result};
use crate::node::{Node, NodeType};
use crate::{DIAGONAL_COST, N_SMALLVEC_SIZE};
use core::fmt;
use grid_util::grid::{Grid, SimpleGrid};
use grid_util::point::Point;
use itertools::{iproduct, Itertools};
use log::{debug, warn};
use num_traits::ToPrimitive;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// Compass offsets in the order neighbours are recorded.
pub const ALL_DIRECTIONS: [(i32, i32); 8] = [
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// How rows shorter than the widest row are treated when building a [Graph].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RowPolicy {
    /// Missing cells are filled with [NodeType::Open].
    #[default]
    Lenient,
    /// Short rows are rejected with [Error::RaggedRow].
    Strict,
}

/// [Graph] owns one [Node] per cell of a rectangular grid. The parsed terrain is kept in a
/// [SimpleGrid], whose row-major layout also fixes the node arena: the node at `(x, y)` lives at
/// `terrain.get_ix(x, y)` and comes from `rows[y][x]` of the raw map.
/// Neighbour lists and connected components (kept in a [UnionFind]) are computed once at
/// construction; afterwards the graph is read-only.
#[derive(Clone, Debug)]
pub struct Graph {
    terrain: SimpleGrid<NodeType>,
    nodes: Vec<Node>,
    walls: Vec<Point>,
    components: UnionFind<usize>,
}

impl Default for Graph {
    fn default() -> Graph {
        Graph {
            terrain: SimpleGrid::new(0, 0, NodeType::Open),
            nodes: Vec::new(),
            walls: Vec::new(),
            components: UnionFind::new(0),
        }
    }
}

impl Graph {
    /// Builds a graph from raw rows with [RowPolicy::Lenient].
    pub fn new<R, T>(rows: &[R]) -> Result<Graph>
    where
        R: AsRef<[T]>,
        T: ToPrimitive + Copy + fmt::Display,
    {
        Graph::with_policy(rows, RowPolicy::default())
    }

    /// Builds a graph from raw rows. The width is that of the widest row, the height the number
    /// of rows.
    pub fn with_policy<R, T>(rows: &[R], policy: RowPolicy) -> Result<Graph>
    where
        R: AsRef<[T]>,
        T: ToPrimitive + Copy + fmt::Display,
    {
        let height = rows.len();
        let width = rows.iter().map(|r| r.as_ref().len()).max().unwrap_or(0);
        let mut terrain = SimpleGrid::new(width, height, NodeType::Open);

        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() < width {
                match policy {
                    RowPolicy::Strict => {
                        return Err(Error::RaggedRow {
                            row: y,
                            len: row.len(),
                            width,
                        })
                    }
                    RowPolicy::Lenient => {
                        warn!("Row {} has {} of {} cells, padding with open cells", y, row.len(), width)
                    }
                }
            }
            for (x, &value) in row.iter().enumerate() {
                let node_type = NodeType::from_raw(value).ok_or_else(|| Error::MapFormat {
                    x,
                    y,
                    value: value.to_string(),
                })?;
                terrain.set(x, y, node_type);
            }
        }

        // Row-major order, so the i-th node pushed is the one at terrain index i.
        let mut nodes = Vec::with_capacity(width * height);
        let mut walls = Vec::new();
        for (y, x) in iproduct!(0..height, 0..width) {
            let node_type = terrain.get(x, y);
            let point = Point::new(x as i32, y as i32);
            if node_type.is_blocked() {
                walls.push(point);
            }
            nodes.push(Node::new(point, node_type));
        }

        let mut graph = Graph {
            terrain,
            nodes,
            walls,
            components: UnionFind::new(width * height),
        };
        // Neighbours can only be linked once every node exists.
        for ix in 0..graph.nodes.len() {
            if graph.nodes[ix].node_type.is_blocked() {
                continue;
            }
            let neighbors = graph.neighbor_indices(graph.nodes[ix].index);
            graph.nodes[ix].neighbors = neighbors;
        }
        graph.generate_components();
        debug!(
            "Built {}x{} graph with {} walls and {} components",
            graph.width(),
            graph.height(),
            graph.walls.len(),
            graph.component_count()
        );
        Ok(graph)
    }

    fn neighbor_indices(&self, pos: Point) -> SmallVec<[usize; N_SMALLVEC_SIZE]> {
        ALL_DIRECTIONS
            .iter()
            .filter_map(|&(dx, dy)| self.get_ix(Point::new(pos.x + dx, pos.y + dy)))
            .filter(|&ix| !self.nodes[ix].node_type.is_blocked())
            .collect()
    }

    /// Links every passable node to its neighbours in a fresh [UnionFind].
    fn generate_components(&mut self) {
        let mut components = UnionFind::new(self.nodes.len());
        for (ix, node) in self.nodes.iter().enumerate() {
            for &n in &node.neighbors {
                components.union(ix, n);
            }
        }
        self.components = components;
    }

    pub fn width(&self) -> usize {
        self.terrain.width()
    }
    pub fn height(&self) -> usize {
        self.terrain.height()
    }
    /// The parsed map, one [NodeType] per cell.
    pub fn terrain(&self) -> &SimpleGrid<NodeType> {
        &self.terrain
    }
    /// Number of nodes, `width * height`.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }
    /// Positions of all blocked cells, in construction order.
    pub fn walls(&self) -> &[Point] {
        &self.walls
    }

    pub fn is_within_bounds(&self, pos: Point) -> bool {
        self.terrain.point_in_bounds(pos)
    }

    /// Arena index of the node at `pos`, [None] if out of bounds.
    pub fn get_ix(&self, pos: Point) -> Option<usize> {
        if self.is_within_bounds(pos) {
            Some(self.terrain.get_ix_point(&pos))
        } else {
            None
        }
    }

    pub fn get_node(&self, pos: Point) -> Option<&Node> {
        self.get_ix(pos).map(|ix| &self.nodes[ix])
    }

    /// The node stored at an arena index handed out by this graph.
    ///
    /// # Panics
    ///
    /// Panics if `ix >= self.len()`. Indices from [Graph::get_ix], [Node::neighbors] or a
    /// search over this graph are always valid; use [Graph::get_node] for positions that may
    /// fall outside the grid.
    pub fn node(&self, ix: usize) -> &Node {
        &self.nodes[ix]
    }

    /// Number of connected components among passable cells.
    pub fn component_count(&self) -> usize {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| !node.node_type.is_blocked())
            .map(|(ix, _)| self.components.find(ix))
            .unique()
            .count()
    }

    /// Octile distance with the fixed 1.4 approximation for a diagonal step.
    pub fn node_distance(&self, a: Point, b: Point) -> f32 {
        let dx = (a.x - b.x).abs();
        let dy = (a.y - b.y).abs();
        let diagonal = dx.min(dy);
        let straight = dx.max(dy) - diagonal;
        DIAGONAL_COST * diagonal as f32 + straight as f32
    }

    /// The precomputed passable neighbours of `pos`, [None] if out of bounds.
    pub fn get_neighbors(&self, pos: Point) -> Option<SmallVec<[Point; N_SMALLVEC_SIZE]>> {
        self.get_node(pos)
            .map(|node| node.neighbors.iter().map(|&n| self.nodes[n].index).collect())
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn component(&self, pos: Point) -> Option<usize> {
        self.get_ix(pos).map(|ix| self.components.find(ix))
    }

    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: Point, goal: Point) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component. Out-of-bounds points are
    /// unreachable.
    pub fn unreachable(&self, start: Point, goal: Point) -> bool {
        match (self.get_ix(start), self.get_ix(goal)) {
            (Some(s), Some(g)) => !self.components.equiv(s, g),
            _ => true,
        }
    }
}

impl fmt::Display for Graph {
    /// Prints node type ordinals with the highest row first, so y grows upwards.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.nodes.chunks(self.width().max(1)).rev() {
            writeln!(f, "{}", row.iter().map(|n| n.node_type.ordinal()).join(" "))?;
        }
        Ok(())
    }
}
