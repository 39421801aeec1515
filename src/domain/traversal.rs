//! Jump counting over a loaded [`Graph`].
//!
//! Every walk applies `directions[jumps % len]`, moves along that edge, bumps
//! the counter and only then tests the termination pattern, so a walker
//! sitting on a target at the start still makes at least one jump.

use tracing::{debug, instrument, trace};

use crate::domain::entities::NodeId;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::graph::Graph;
use crate::domain::math::lcm_all;
use crate::domain::pattern::NamePattern;

/// Receives the round counter of the lockstep walk once per round.
pub trait ProgressReporter {
    fn report(&mut self, jumps: u64);
}

impl<F: FnMut(u64)> ProgressReporter for F {
    fn report(&mut self, jumps: u64) {
        self(jumps)
    }
}

/// Discards progress.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn report(&mut self, _jumps: u64) {}
}

/// Traversal cursor: current node plus the number of jumps taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Walker {
    pub at: NodeId,
    pub jumps: u64,
}

impl Walker {
    pub const fn new(at: NodeId) -> Self {
        Self { at, jumps: 0 }
    }

    /// One jump along the tape; returns the new position.
    pub fn jump(&mut self, graph: &Graph) -> DomainResult<NodeId> {
        let direction = graph.direction_at(self.jumps)?;
        self.at = graph.step(self.at, direction)?;
        self.jumps += 1;
        Ok(self.at)
    }
}

/// Read-only traversal engine over a graph.
#[derive(Debug, Clone, Copy)]
pub struct Traversal<'g> {
    graph: &'g Graph,
    max_jumps: Option<u64>,
}

impl<'g> Traversal<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            max_jumps: None,
        }
    }

    /// Bounds every walk; `None` walks forever if the target is unreachable.
    pub fn with_max_jumps(mut self, max_jumps: Option<u64>) -> Self {
        self.max_jumps = max_jumps;
        self
    }

    /// Jumps from `start` until the current node matches `target`.
    #[instrument(level = "debug", skip(self, target), fields(to = %target))]
    pub fn single_target_walk(&self, start: &str, target: &NamePattern) -> DomainResult<u64> {
        let start = self.graph.lookup(start)?;
        self.walk_from(start, target)
    }

    /// Per-walker jump count to the first hit of `target`, for every node matching `start`.
    #[instrument(level = "debug", skip_all, fields(from = %start, to = %target))]
    pub fn walker_cycle_lengths(
        &self,
        start: &NamePattern,
        target: &NamePattern,
    ) -> DomainResult<Vec<(String, u64)>> {
        self.start_nodes(start)?
            .into_iter()
            .map(|idx| -> DomainResult<(String, u64)> {
                let jumps = self.walk_from(idx, target)?;
                let name = self.graph.name(idx)?.to_string();
                debug!("walker {name} hits target after {jumps} jumps");
                Ok((name, jumps))
            })
            .collect()
    }

    /// Combines the per-walker first-hit counts with a least common multiple.
    ///
    /// Only valid when every walker is periodic with a period equal to its
    /// first hit and enters that cycle without a tail. That holds for
    /// puzzle-shaped inputs but not for arbitrary networks;
    /// [`multi_walker_brute_force`](Self::multi_walker_brute_force) is the
    /// reference answer.
    #[instrument(level = "debug", skip_all, fields(from = %start, to = %target))]
    pub fn multi_walker_lcm(&self, start: &NamePattern, target: &NamePattern) -> DomainResult<u64> {
        self.multi_walker_lcm_with_cycles(start, target)
            .map(|(_, jumps)| jumps)
    }

    /// [`multi_walker_lcm`](Self::multi_walker_lcm) plus the per-walker
    /// counts it was folded from.
    pub fn multi_walker_lcm_with_cycles(
        &self,
        start: &NamePattern,
        target: &NamePattern,
    ) -> DomainResult<(Vec<(String, u64)>, u64)> {
        let cycles = self.walker_cycle_lengths(start, target)?;
        let jumps = lcm_all(cycles.iter().map(|(_, jumps)| *jumps))?;
        Ok((cycles, jumps))
    }

    /// Advances every walker matching `start` in lockstep until all of them
    /// sit on a `target` node at once. Cost is proportional to the answer.
    #[instrument(level = "debug", skip_all, fields(from = %start, to = %target))]
    pub fn multi_walker_brute_force(
        &self,
        start: &NamePattern,
        target: &NamePattern,
        progress: &mut dyn ProgressReporter,
    ) -> DomainResult<u64> {
        let mut walkers: Vec<Walker> = self
            .start_nodes(start)?
            .into_iter()
            .map(Walker::new)
            .collect();
        debug!("walking {} ghosts in lockstep", walkers.len());

        let mut rounds = 0u64;
        loop {
            for walker in walkers.iter_mut() {
                walker.jump(self.graph)?;
            }
            rounds += 1;
            progress.report(rounds);
            if self.all_on_target(&walkers, target)? {
                return Ok(rounds);
            }
            self.check_limit(rounds)?;
        }
    }

    fn walk_from(&self, start: NodeId, target: &NamePattern) -> DomainResult<u64> {
        let mut walker = Walker::new(start);
        loop {
            let at = walker.jump(self.graph)?;
            let name = self.graph.name(at)?;
            trace!(jumps = walker.jumps, "at {name}");
            if target.matches(name) {
                return Ok(walker.jumps);
            }
            self.check_limit(walker.jumps)?;
        }
    }

    fn all_on_target(&self, walkers: &[Walker], target: &NamePattern) -> DomainResult<bool> {
        for walker in walkers {
            if !target.matches(self.graph.name(walker.at)?) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn start_nodes(&self, start: &NamePattern) -> DomainResult<Vec<NodeId>> {
        let nodes = self.graph.matching(start);
        if nodes.is_empty() {
            return Err(DomainError::NoStartNodes(start.to_string()));
        }
        Ok(nodes)
    }

    fn check_limit(&self, jumps: u64) -> DomainResult<()> {
        match self.max_jumps {
            Some(limit) if jumps >= limit => Err(DomainError::JumpLimitExceeded { limit }),
            _ => Ok(()),
        }
    }
}
