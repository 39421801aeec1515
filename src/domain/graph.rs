use std::collections::HashMap;
use std::fmt;

use generational_arena::Arena;
use itertools::Itertools;
use tracing::{instrument, warn};

use crate::domain::entities::{Direction, Node, NodeId};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::pattern::NamePattern;

/// Arena-based network of named nodes plus the cyclic direction tape.
///
/// Nodes are owned by the arena and refer to each other through [`NodeId`]
/// handles, so the cyclic structure needs no shared ownership. Iteration
/// follows declaration order.
#[derive(Debug, Default)]
pub struct Graph {
    /// Arena storage for all nodes
    arena: Arena<Node>,
    /// Handles in declaration order
    order: Vec<NodeId>,
    /// First handle declared under each name
    by_name: HashMap<String, NodeId>,
    directions: Vec<Direction>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_direction(&mut self, direction: Direction) {
        self.directions.push(direction);
    }

    /// Declares a new unlinked node.
    ///
    /// Duplicate names are accepted; lookups keep resolving to the node that
    /// was declared first.
    #[instrument(level = "trace", skip(self))]
    pub fn add_node(&mut self, name: &str) -> NodeId {
        let idx = self.arena.insert(Node::new(name));
        self.order.push(idx);
        if self.by_name.contains_key(name) {
            warn!("duplicate node name {name}, lookups resolve to the first declaration");
        } else {
            self.by_name.insert(name.to_string(), idx);
        }
        idx
    }

    /// Points `from` at `(left, right)`.
    ///
    /// All three names must already be declared; the first missing one is
    /// reported.
    #[instrument(level = "trace", skip(self))]
    pub fn add_edge(&mut self, from: &str, left: &str, right: &str) -> DomainResult<()> {
        let from_idx = self.lookup(from)?;
        let left_idx = self.lookup(left)?;
        let right_idx = self.lookup(right)?;
        let node = self
            .arena
            .get_mut(from_idx)
            .ok_or(DomainError::ForeignHandle(from_idx))?;
        node.edges = Some((left_idx, right_idx));
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> DomainResult<NodeId> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| DomainError::NodeNotFound(name.to_string()))
    }

    pub fn node(&self, idx: NodeId) -> DomainResult<&Node> {
        self.arena.get(idx).ok_or(DomainError::ForeignHandle(idx))
    }

    pub fn name(&self, idx: NodeId) -> DomainResult<&str> {
        self.node(idx).map(|node| node.name.as_str())
    }

    /// Follows one edge of `idx`.
    pub fn step(&self, idx: NodeId, direction: Direction) -> DomainResult<NodeId> {
        let node = self.node(idx)?;
        node.target(direction)
            .ok_or_else(|| DomainError::UnlinkedNode(node.name.clone()))
    }

    /// Direction applied on jump number `jumps` (zero based), wrapping around the tape.
    pub fn direction_at(&self, jumps: u64) -> DomainResult<Direction> {
        if self.directions.is_empty() {
            return Err(DomainError::EmptyDirections);
        }
        let len = self.directions.len() as u64;
        Ok(self.directions[(jumps % len) as usize])
    }

    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.order
            .iter()
            .filter_map(move |&idx| self.arena.get(idx).map(|node| (idx, node)))
    }

    /// Handles of all nodes whose name matches `pattern`, in declaration order.
    pub fn matching(&self, pattern: &NamePattern) -> Vec<NodeId> {
        self.nodes()
            .filter(|(_, node)| pattern.matches(&node.name))
            .map(|(idx, _)| idx)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn edge_name(&self, edge: Option<NodeId>) -> &str {
        edge.and_then(|idx| self.arena.get(idx))
            .map_or("null", |node| node.name.as_str())
    }
}

/// Diagnostic dump: the tape on the first line, then `NAME: (LEFT, RIGHT)` per node.
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.directions.iter().join(""))?;
        for (_, node) in self.nodes() {
            writeln!(
                f,
                "{}: ({}, {})",
                node.name,
                self.edge_name(node.left()),
                self.edge_name(node.right())
            )?;
        }
        Ok(())
    }
}
