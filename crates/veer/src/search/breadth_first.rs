//! Breadth-first engine: FIFO frontier bounded by queue length.

use super::{FrontierEntry, SearchEngine, StepResult, Strategy};
use crate::graph::GraphModel;
use serde::Serialize;
use std::collections::{HashSet, VecDeque};
use std::fmt;

/// Exploration metrics of a [`BreadthFirstEngine`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BreadthFirstMetrics {
    /// Number of steps that dequeued an entry.
    pub nodes_explored: usize,

    /// Entries currently waiting in the queue.
    pub queue_size: usize,
}

/// Stepwise breadth-first search from `start` to `goal`.
///
/// After each dequeue, if more than `memory_threshold` entries remain queued
/// the step breaches the threshold and the dequeued node is abandoned
/// without enqueuing its successors.
pub struct BreadthFirstEngine<'g, G: GraphModel> {
    graph: &'g G,
    goal: G::Node,
    memory_threshold: usize,
    visited: HashSet<G::Node>,
    queue: VecDeque<FrontierEntry<G::Node>>,
    nodes_explored: usize,
}

impl<G> fmt::Debug for BreadthFirstEngine<'_, G>
where
    G: GraphModel,
    G::Node: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BreadthFirstEngine")
            .field("goal", &self.goal)
            .field("memory_threshold", &self.memory_threshold)
            .field("visited", &self.visited.len())
            .field("queue", &self.queue.len())
            .field("nodes_explored", &self.nodes_explored)
            .finish_non_exhaustive()
    }
}

impl<'g, G: GraphModel> BreadthFirstEngine<'g, G> {
    /// Create an engine whose queue holds the single entry `start`.
    pub fn new(graph: &'g G, start: G::Node, goal: G::Node, memory_threshold: usize) -> Self {
        Self {
            graph,
            goal,
            memory_threshold,
            visited: HashSet::new(),
            queue: VecDeque::from([FrontierEntry::root(start)]),
            nodes_explored: 0,
        }
    }

    /// The configured memory threshold.
    pub fn memory_threshold(&self) -> usize {
        self.memory_threshold
    }

    /// Whether this engine has already dequeued `node`.
    pub fn has_visited(&self, node: &G::Node) -> bool {
        self.visited.contains(node)
    }
}

impl<G: GraphModel> SearchEngine for BreadthFirstEngine<'_, G> {
    type Node = G::Node;
    type Metrics = BreadthFirstMetrics;

    fn strategy(&self) -> Strategy {
        Strategy::BreadthFirst
    }

    fn step(&mut self) -> StepResult<G::Node> {
        let Some(entry) = self.queue.pop_front() else {
            return StepResult::Continue;
        };

        self.visited.insert(entry.node().clone());
        self.nodes_explored += 1;

        if *entry.node() == self.goal {
            tracing::debug!(
                nodes_explored = self.nodes_explored,
                depth = entry.depth(),
                "Breadth-first search reached goal"
            );
            return StepResult::Found(entry.into_path());
        }

        // Measured after the dequeue and before any enqueue
        if self.queue.len() > self.memory_threshold {
            tracing::debug!(
                queue = self.queue.len(),
                threshold = self.memory_threshold,
                "Memory threshold breached, abandoning branch"
            );
            return StepResult::ThresholdBreached;
        }

        for successor in self.graph.successors(entry.node()) {
            if !self.visited.contains(successor) {
                self.queue.push_back(entry.extend(successor));
            }
        }

        tracing::trace!(
            depth = entry.depth(),
            queue = self.queue.len(),
            "Breadth-first step expanded node"
        );
        StepResult::Continue
    }

    fn is_exhausted(&self) -> bool {
        self.queue.is_empty()
    }

    fn frontier_len(&self) -> usize {
        self.queue.len()
    }

    fn metrics(&self) -> BreadthFirstMetrics {
        BreadthFirstMetrics {
            nodes_explored: self.nodes_explored,
            queue_size: self.queue.len(),
        }
    }
}
