//! Self-reflective search: a depth-first engine and a breadth-first engine
//! taking turns.
//!
//! The controller starts depth-first. Whenever the active engine breaches its
//! threshold, the other engine takes over from wherever *it* left off. The two
//! engines never share visited or frontier state, so the first switch to
//! breadth-first starts that engine from `start` with nothing visited. A breach
//! is ignored when the other engine is already exhausted.
//!
//! If the active engine runs out of frontier without breaching while the other
//! still has work, control is handed to the other engine. Without this hand-off
//! the controller would keep stepping an exhausted engine forever.

use super::{
    BreadthFirstEngine, BreadthFirstMetrics, DepthFirstEngine, DepthFirstMetrics, SearchEngine,
    StepResult, Strategy,
};
use crate::config::SearchConfig;
use crate::graph::GraphModel;
use serde::Serialize;
use std::fmt;

/// Combined metrics of a [`HybridController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HybridMetrics {
    /// Metrics of the depth-first engine.
    pub depth_first: DepthFirstMetrics,

    /// Metrics of the breadth-first engine.
    pub breadth_first: BreadthFirstMetrics,

    /// Strategy that will receive the next step.
    pub active_strategy: Strategy,

    /// How many times the active strategy changed. Each step switches at most
    /// once.
    pub strategy_switches: usize,
}

impl HybridMetrics {
    /// Nodes explored by both engines together.
    #[must_use]
    pub fn total_nodes_explored(&self) -> usize {
        self.depth_first.nodes_explored + self.breadth_first.nodes_explored
    }
}

/// Why the controller changed strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SwitchReason {
    Breach,
    Exhausted,
}

impl fmt::Display for SwitchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Breach => write!(f, "threshold breached"),
            Self::Exhausted => write!(f, "frontier exhausted"),
        }
    }
}

/// Hybrid search that switches strategy in response to its own resource usage.
pub struct HybridController<'g, G: GraphModel> {
    depth_first: DepthFirstEngine<'g, G>,
    breadth_first: BreadthFirstEngine<'g, G>,
    strategy: Strategy,
    strategy_switches: usize,
}

impl<G> fmt::Debug for HybridController<'_, G>
where
    G: GraphModel,
    G::Node: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HybridController")
            .field("depth_first", &self.depth_first)
            .field("breadth_first", &self.breadth_first)
            .field("strategy", &self.strategy)
            .field("strategy_switches", &self.strategy_switches)
            .finish()
    }
}

impl<'g, G: GraphModel> HybridController<'g, G> {
    /// Create a controller with explicit thresholds, starting depth-first.
    pub fn new(
        graph: &'g G,
        start: G::Node,
        goal: G::Node,
        depth_threshold: usize,
        memory_threshold: usize,
    ) -> Self {
        Self {
            depth_first: DepthFirstEngine::new(
                graph,
                start.clone(),
                goal.clone(),
                depth_threshold,
            ),
            breadth_first: BreadthFirstEngine::new(graph, start, goal, memory_threshold),
            strategy: Strategy::DepthFirst,
            strategy_switches: 0,
        }
    }

    /// Create a controller with thresholds taken from `config`.
    pub fn with_config(graph: &'g G, start: G::Node, goal: G::Node, config: &SearchConfig) -> Self {
        Self::new(
            graph,
            start,
            goal,
            config.depth_threshold,
            config.memory_threshold,
        )
    }

    /// The strategy that will receive the next step.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// The depth-first engine.
    pub fn depth_first(&self) -> &DepthFirstEngine<'g, G> {
        &self.depth_first
    }

    /// The breadth-first engine.
    pub fn breadth_first(&self) -> &BreadthFirstEngine<'g, G> {
        &self.breadth_first
    }

    /// Whether both engines have run out of frontier.
    pub fn is_exhausted(&self) -> bool {
        self.depth_first.is_exhausted() && self.breadth_first.is_exhausted()
    }

    /// Step the active engine once and switch strategy if needed.
    ///
    /// A breach flips the strategy unless the other engine has nothing left to
    /// explore, in which case the breaching engine keeps going. An active engine
    /// that is exhausted while the other is not also hands over control. At most
    /// one switch happens per step.
    pub fn step(&mut self) -> StepResult<G::Node> {
        let result = match self.strategy {
            Strategy::DepthFirst => self.depth_first.step(),
            Strategy::BreadthFirst => self.breadth_first.step(),
        };

        if result.is_breach() && !self.other_is_exhausted() {
            self.switch_strategy(SwitchReason::Breach);
        }
        if !result.is_found() && self.active_is_exhausted() && !self.is_exhausted() {
            self.switch_strategy(SwitchReason::Exhausted);
        }

        result
    }

    /// Run until the goal is found or both engines are exhausted.
    ///
    /// Returns `None` when no path was found.
    pub fn search(&mut self) -> Option<Vec<G::Node>> {
        loop {
            if let StepResult::Found(path) = self.step() {
                tracing::debug!(
                    strategy = %self.strategy,
                    switches = self.strategy_switches,
                    length = path.len(),
                    "Hybrid search found path"
                );
                return Some(path);
            }

            if self.is_exhausted() {
                tracing::debug!(
                    switches = self.strategy_switches,
                    "Hybrid search exhausted both engines"
                );
                return None;
            }
        }
    }

    /// Snapshot of both engines' metrics and the active strategy.
    pub fn metrics(&self) -> HybridMetrics {
        HybridMetrics {
            depth_first: self.depth_first.metrics(),
            breadth_first: self.breadth_first.metrics(),
            active_strategy: self.strategy,
            strategy_switches: self.strategy_switches,
        }
    }

    fn other_is_exhausted(&self) -> bool {
        match self.strategy {
            Strategy::DepthFirst => self.breadth_first.is_exhausted(),
            Strategy::BreadthFirst => self.depth_first.is_exhausted(),
        }
    }

    fn active_is_exhausted(&self) -> bool {
        match self.strategy {
            Strategy::DepthFirst => self.depth_first.is_exhausted(),
            Strategy::BreadthFirst => self.breadth_first.is_exhausted(),
        }
    }

    fn switch_strategy(&mut self, reason: SwitchReason) {
        let next = self.strategy.other();
        tracing::debug!(from = %self.strategy, to = %next, %reason, "Switching strategy");
        self.strategy = next;
        self.strategy_switches += 1;
    }
}
