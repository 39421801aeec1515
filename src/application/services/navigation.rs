//! Navigation service: loads the configured network and solves the puzzles on it.

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::application::loader::GraphLoader;
use crate::application::ApplicationResult;
use crate::config::Settings;
use crate::domain::{Graph, NamePattern, ProgressReporter, Traversal};

/// Per-walker first-hit counts plus their combined period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GhostReport {
    pub cycles: Vec<(String, u64)>,
    pub jumps: u64,
}

/// Runs the three jump counts with the limits and patterns from [`Settings`].
pub struct NavigationService {
    settings: Settings,
}

impl NavigationService {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Load the network from the configured input file.
    #[instrument(level = "debug", skip(self))]
    pub fn load(&self) -> ApplicationResult<Graph> {
        self.load_from(&self.settings.input)
    }

    pub fn load_from(&self, path: &Path) -> ApplicationResult<Graph> {
        info!("loading network from {}", path.display());
        GraphLoader::new().load_path(path)
    }

    /// Single walker from `from` (default: `settings.start`) to `to` (default: `settings.target`).
    #[instrument(level = "debug", skip(self, graph))]
    pub fn walk(&self, graph: &Graph, from: Option<&str>, to: Option<&str>) -> ApplicationResult<u64> {
        let from = from.unwrap_or(&self.settings.start);
        let target = NamePattern::new(to.unwrap_or(&self.settings.target))?;
        let jumps = self.traversal(graph).single_target_walk(from, &target)?;
        debug!("{from} reaches {target} after {jumps} jumps");
        Ok(jumps)
    }

    /// Ghost walk through the least common multiple of the per-walker cycles.
    #[instrument(level = "debug", skip(self, graph))]
    pub fn ghost_walk_lcm(
        &self,
        graph: &Graph,
        from: Option<&str>,
        to: Option<&str>,
    ) -> ApplicationResult<GhostReport> {
        let (start, target) = self.ghost_patterns(from, to)?;
        let (cycles, jumps) = self
            .traversal(graph)
            .multi_walker_lcm_with_cycles(&start, &target)?;
        Ok(GhostReport { cycles, jumps })
    }

    /// Ghost walk by simulating every walker in lockstep.
    #[instrument(level = "debug", skip(self, graph, progress))]
    pub fn ghost_walk_naive(
        &self,
        graph: &Graph,
        from: Option<&str>,
        to: Option<&str>,
        progress: &mut dyn ProgressReporter,
    ) -> ApplicationResult<u64> {
        let (start, target) = self.ghost_patterns(from, to)?;
        let jumps = self
            .traversal(graph)
            .multi_walker_brute_force(&start, &target, progress)?;
        Ok(jumps)
    }

    fn ghost_patterns(
        &self,
        from: Option<&str>,
        to: Option<&str>,
    ) -> ApplicationResult<(NamePattern, NamePattern)> {
        let start = NamePattern::new(from.unwrap_or(&self.settings.ghost_start))?;
        let target = NamePattern::new(to.unwrap_or(&self.settings.ghost_target))?;
        Ok((start, target))
    }

    fn traversal<'g>(&self, graph: &'g Graph) -> Traversal<'g> {
        Traversal::new(graph).with_max_jumps(self.settings.max_jumps)
    }
}
