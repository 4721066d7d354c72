use crate::N_SMALLVEC_SIZE;
use grid_util::point::Point;
use num_traits::ToPrimitive;
use smallvec::SmallVec;

/// Terrain classification of a grid cell. The discriminant is the raw map value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum NodeType {
    #[default]
    Open = 0,
    Blocked = 1,
    LightTerrain = 2,
    MediumTerrain = 3,
    HeavyTerrain = 4,
}

impl NodeType {
    pub const ALL: [NodeType; 5] = [
        NodeType::Open,
        NodeType::Blocked,
        NodeType::LightTerrain,
        NodeType::MediumTerrain,
        NodeType::HeavyTerrain,
    ];

    /// Maps any primitive integer onto a node type, [None] if it is not a known ordinal.
    pub fn from_raw<T: ToPrimitive>(value: T) -> Option<NodeType> {
        value
            .to_u8()
            .and_then(|v| NodeType::ALL.get(v as usize).copied())
    }

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn is_blocked(self) -> bool {
        self == NodeType::Blocked
    }

    /// Additive penalty paid when leaving a node of this type.
    pub fn terrain_cost(self) -> f32 {
        match self {
            NodeType::Open | NodeType::Blocked => 0.0,
            NodeType::LightTerrain => 1.0,
            NodeType::MediumTerrain => 2.0,
            NodeType::HeavyTerrain => 3.0,
        }
    }
}

/// A vertex of the [Graph](crate::Graph). Immutable once the graph is built; everything a search
/// writes lives in its own [SearchState](crate::solver::SearchState).
#[derive(Clone, Debug)]
pub struct Node {
    pub(crate) index: Point,
    pub(crate) node_type: NodeType,
    /// Arena indices of passable neighbours, in compass order.
    pub(crate) neighbors: SmallVec<[usize; N_SMALLVEC_SIZE]>,
}

impl Node {
    pub(crate) fn new(index: Point, node_type: NodeType) -> Node {
        Node {
            index,
            node_type,
            neighbors: SmallVec::new(),
        }
    }
    pub fn index(&self) -> Point {
        self.index
    }
    pub fn node_type(&self) -> NodeType {
        self.node_type
    }
    pub fn neighbors(&self) -> &[usize] {
        &self.neighbors
    }
    pub fn terrain_cost(&self) -> f32 {
        self.node_type.terrain_cost()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_values_map_to_types() {
        assert_eq!(NodeType::from_raw(0u8), Some(NodeType::Open));
        assert_eq!(NodeType::from_raw(1i32), Some(NodeType::Blocked));
        assert_eq!(NodeType::from_raw(4u64), Some(NodeType::HeavyTerrain));
        assert_eq!(NodeType::from_raw(5u8), None);
        assert_eq!(NodeType::from_raw(-1i32), None);
        assert_eq!(NodeType::from_raw(300i32), None);
    }

    #[test]
    fn terrain_tiers_cost_one_two_three() {
        let costs = NodeType::ALL.map(|t| t.terrain_cost());
        assert_eq!(costs, [0.0, 0.0, 1.0, 2.0, 3.0]);
        for t in NodeType::ALL {
            assert_eq!(NodeType::from_raw(t.ordinal()), Some(t));
        }
    }
}
