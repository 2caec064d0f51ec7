//! Stepwise search engines and the self-reflective hybrid controller.
//!
//! Each engine consumes exactly one frontier entry per [`SearchEngine::step`]
//! and reports one of three outcomes:
//!
//! - [`StepResult::Continue`]: nothing conclusive yet (also returned when the
//!   engine is already exhausted)
//! - [`StepResult::Found`]: the popped node is the goal
//! - [`StepResult::ThresholdBreached`]: the engine's resource bound was exceeded
//!
//! # Abandon-on-breach
//!
//! When a step breaches its threshold, the triggering node's successors are
//! **not** expanded. That branch is lost to the engine unless it is reached
//! again through a different path. This bounds resource usage at the cost of
//! completeness: a lone engine can miss a reachable goal, which is exactly the
//! case [`HybridController`] compensates for by falling back to the other
//! engine.
//!
//! # Architecture
//!
//! The two engines share the [`SearchEngine`] trait and differ only in frontier
//! discipline (stack vs queue) and which resource they bound. They never share
//! visited or frontier state, even inside one hybrid run.

mod breadth_first;
mod depth_first;
mod hybrid;

pub use breadth_first::{BreadthFirstEngine, BreadthFirstMetrics};
pub use depth_first::{DepthFirstEngine, DepthFirstMetrics};
pub use hybrid::{HybridController, HybridMetrics};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a single engine step.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepResult<N> {
    /// Keep stepping; the goal has not been reached.
    Continue,

    /// The goal was reached. The path runs from start to goal inclusive.
    Found(Vec<N>),

    /// The engine's threshold was exceeded and the popped node was not expanded.
    ThresholdBreached,
}

impl<N> StepResult<N> {
    /// Whether this step reached the goal.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Whether this step breached the engine's threshold.
    pub fn is_breach(&self) -> bool {
        matches!(self, Self::ThresholdBreached)
    }
}

/// Terminal outcome of driving a single engine with [`SearchEngine::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome<N> {
    /// The goal was reached along this path.
    Found(Vec<N>),

    /// The engine stopped at its first threshold breach.
    Breached,

    /// The frontier emptied without reaching the goal.
    Exhausted,
}

impl<N> RunOutcome<N> {
    /// The found path, if any.
    pub fn into_path(self) -> Option<Vec<N>> {
        match self {
            Self::Found(path) => Some(path),
            Self::Breached | Self::Exhausted => None,
        }
    }

    /// Short label for reports.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Found(_) => "found",
            Self::Breached => "breached",
            Self::Exhausted => "exhausted",
        }
    }
}

/// Traversal strategy selected by the hybrid controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// LIFO traversal bounded by path depth.
    DepthFirst,

    /// FIFO traversal bounded by frontier size.
    BreadthFirst,
}

impl Strategy {
    /// The strategy to switch to.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::DepthFirst => Self::BreadthFirst,
            Self::BreadthFirst => Self::DepthFirst,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DepthFirst => write!(f, "depth-first"),
            Self::BreadthFirst => write!(f, "breadth-first"),
        }
    }
}

/// A pending search entry: a node and the path that reached it.
///
/// The path is never empty, starts at the search's start node and ends at
/// `node`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierEntry<N> {
    node: N,
    path: Vec<N>,
}

impl<N: Clone> FrontierEntry<N> {
    /// The initial entry of every frontier: `start` reached by the path `[start]`.
    pub fn root(start: N) -> Self {
        Self {
            path: vec![start.clone()],
            node: start,
        }
    }

    /// A new entry for `successor`, reached by this entry's path plus one hop.
    #[must_use]
    pub fn extend(&self, successor: &N) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(successor.clone());
        Self {
            node: successor.clone(),
            path,
        }
    }
}

impl<N> FrontierEntry<N> {
    /// The node this entry will expand.
    pub fn node(&self) -> &N {
        &self.node
    }

    /// The path from start to [`node`](Self::node), inclusive.
    pub fn path(&self) -> &[N] {
        &self.path
    }

    /// Path length in nodes (the start node alone has depth 1).
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Consume the entry, keeping only its path.
    pub fn into_path(self) -> Vec<N> {
        self.path
    }
}

/// Capability shared by the depth-first and breadth-first engines.
///
/// Stepping an exhausted engine is a no-op that returns
/// [`StepResult::Continue`]; use [`is_exhausted`](Self::is_exhausted) to
/// detect termination.
pub trait SearchEngine {
    /// Node identifier type of the underlying graph.
    type Node;

    /// Strategy-specific metrics record.
    type Metrics;

    /// Which strategy this engine implements.
    fn strategy(&self) -> Strategy;

    /// Consume one frontier entry.
    fn step(&mut self) -> StepResult<Self::Node>;

    /// Whether the frontier is empty.
    fn is_exhausted(&self) -> bool;

    /// Number of entries waiting in the frontier.
    fn frontier_len(&self) -> usize;

    /// Snapshot of this engine's exploration metrics.
    fn metrics(&self) -> Self::Metrics;

    /// Step until the goal is found, a threshold is breached, or the frontier empties.
    fn run(&mut self) -> RunOutcome<Self::Node> {
        loop {
            if self.is_exhausted() {
                return RunOutcome::Exhausted;
            }
            match self.step() {
                StepResult::Found(path) => return RunOutcome::Found(path),
                StepResult::ThresholdBreached => return RunOutcome::Breached,
                StepResult::Continue => {}
            }
        }
    }
}
