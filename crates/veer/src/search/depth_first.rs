//! Depth-first engine: LIFO frontier bounded by path depth.

use super::{FrontierEntry, SearchEngine, StepResult, Strategy};
use crate::graph::GraphModel;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// Exploration metrics of a [`DepthFirstEngine`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DepthFirstMetrics {
    /// Number of steps that popped an entry.
    pub nodes_explored: usize,

    /// Longest path (in nodes) popped so far.
    pub max_depth_seen: usize,
}

/// Stepwise depth-first search from `start` to `goal`.
///
/// Successors are explored in listed order. A popped entry whose path is
/// longer than `depth_threshold` breaches the threshold and is abandoned
/// without expanding its successors.
pub struct DepthFirstEngine<'g, G: GraphModel> {
    graph: &'g G,
    goal: G::Node,
    depth_threshold: usize,
    visited: HashSet<G::Node>,
    stack: Vec<FrontierEntry<G::Node>>,
    metrics: DepthFirstMetrics,
}

impl<G> fmt::Debug for DepthFirstEngine<'_, G>
where
    G: GraphModel,
    G::Node: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DepthFirstEngine")
            .field("goal", &self.goal)
            .field("depth_threshold", &self.depth_threshold)
            .field("visited", &self.visited.len())
            .field("stack", &self.stack.len())
            .field("metrics", &self.metrics)
            .finish_non_exhaustive()
    }
}

impl<'g, G: GraphModel> DepthFirstEngine<'g, G> {
    /// Create an engine whose stack holds the single entry `start`.
    pub fn new(graph: &'g G, start: G::Node, goal: G::Node, depth_threshold: usize) -> Self {
        Self {
            graph,
            goal,
            depth_threshold,
            visited: HashSet::new(),
            stack: vec![FrontierEntry::root(start)],
            metrics: DepthFirstMetrics::default(),
        }
    }

    /// The configured depth threshold.
    pub fn depth_threshold(&self) -> usize {
        self.depth_threshold
    }

    /// Whether this engine has already popped `node`.
    pub fn has_visited(&self, node: &G::Node) -> bool {
        self.visited.contains(node)
    }
}

impl<G: GraphModel> SearchEngine for DepthFirstEngine<'_, G> {
    type Node = G::Node;
    type Metrics = DepthFirstMetrics;

    fn strategy(&self) -> Strategy {
        Strategy::DepthFirst
    }

    fn step(&mut self) -> StepResult<G::Node> {
        let Some(entry) = self.stack.pop() else {
            return StepResult::Continue;
        };

        self.visited.insert(entry.node().clone());
        self.metrics.nodes_explored += 1;
        self.metrics.max_depth_seen = self.metrics.max_depth_seen.max(entry.depth());

        if *entry.node() == self.goal {
            tracing::debug!(
                nodes_explored = self.metrics.nodes_explored,
                depth = entry.depth(),
                "Depth-first search reached goal"
            );
            return StepResult::Found(entry.into_path());
        }

        if entry.depth() > self.depth_threshold {
            tracing::debug!(
                depth = entry.depth(),
                threshold = self.depth_threshold,
                "Depth threshold breached, abandoning branch"
            );
            return StepResult::ThresholdBreached;
        }

        // Reverse push so the first-listed successor is popped first
        for successor in self.graph.successors(entry.node()).iter().rev() {
            if !self.visited.contains(successor) {
                self.stack.push(entry.extend(successor));
            }
        }

        tracing::trace!(
            depth = entry.depth(),
            stack = self.stack.len(),
            "Depth-first step expanded node"
        );
        StepResult::Continue
    }

    fn is_exhausted(&self) -> bool {
        self.stack.is_empty()
    }

    fn frontier_len(&self) -> usize {
        self.stack.len()
    }

    fn metrics(&self) -> DepthFirstMetrics {
        self.metrics
    }
}
