//! Domain entities: core data structures

use std::fmt;

use generational_arena::Index;

/// Stable handle of a node inside its [`Graph`](crate::domain::Graph) arena.
pub type NodeId = Index;

/// One step of the direction tape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Parse a tape character (`L` or `R`).
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'L' => Some(Direction::Left),
            'R' => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Named node with a left and right outgoing edge.
///
/// Edges stay `None` until the loader has declared every node and replays
/// the cached edge records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub name: String,
    /// (left, right) targets
    pub edges: Option<(NodeId, NodeId)>,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            edges: None,
        }
    }

    pub fn left(&self) -> Option<NodeId> {
        self.edges.map(|(left, _)| left)
    }

    pub fn right(&self) -> Option<NodeId> {
        self.edges.map(|(_, right)| right)
    }

    /// Edge target for `direction`, `None` while unlinked.
    pub fn target(&self, direction: Direction) -> Option<NodeId> {
        match direction {
            Direction::Left => self.left(),
            Direction::Right => self.right(),
        }
    }
}
