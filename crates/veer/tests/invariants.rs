//! Property tests for the search engines over randomly generated graphs.

use proptest::prelude::*;
use std::collections::{HashSet, VecDeque};
use veer::{
    BreadthFirstEngine, DepthFirstEngine, Graph, GraphModel, HybridController, NodeId,
    RunOutcome, SearchEngine, StepResult,
};

fn node(index: usize) -> NodeId {
    NodeId::new(format!("n{index}"))
}

/// Build a graph where every node `0..adjacency.len()` has an entry.
fn build_graph(adjacency: &[Vec<usize>]) -> Graph {
    adjacency
        .iter()
        .enumerate()
        .map(|(i, successors)| {
            let successors: Vec<NodeId> = successors.iter().map(|&s| node(s)).collect();
            (node(i), successors)
        })
        .collect()
}

// Up to 8 nodes with up to 4 successors each. Duplicates and self-loops allowed.
fn graph_strategy() -> impl Strategy<Value = Vec<Vec<usize>>> {
    (1_usize..8).prop_flat_map(|n| prop::collection::vec(prop::collection::vec(0..n, 0..4), n))
}

fn assert_valid_path(graph: &Graph, path: &[NodeId], start: &NodeId, goal: &NodeId) {
    assert_eq!(path.first(), Some(start));
    assert_eq!(path.last(), Some(goal));
    for pair in path.windows(2) {
        assert!(
            graph.successors(&pair[0]).contains(&pair[1]),
            "{} -> {} is not an edge",
            pair[0],
            pair[1]
        );
    }
    let distinct: HashSet<&NodeId> = path.iter().collect();
    assert_eq!(distinct.len(), path.len(), "path revisits a node: {path:?}");
}

/// Fewest nodes on any path from `start` to `goal`, counting both ends.
fn shortest_path_len(graph: &Graph, start: &NodeId, goal: &NodeId) -> Option<usize> {
    let mut seen = HashSet::from([start.clone()]);
    let mut queue = VecDeque::from([(start.clone(), 1)]);
    while let Some((current, len)) = queue.pop_front() {
        if &current == goal {
            return Some(len);
        }
        for successor in graph.successors(&current) {
            if seen.insert(successor.clone()) {
                queue.push_back((successor.clone(), len + 1));
            }
        }
    }
    None
}

// =============================================================================
// Found paths are real paths
// =============================================================================
proptest! {
    #[test]
    fn found_paths_follow_edges(
        adjacency in graph_strategy(),
        goal in 0_usize..8,
        depth_threshold in 0_usize..6,
        memory_threshold in 0_usize..6,
    ) {
        let graph = build_graph(&adjacency);
        let (start, goal) = (node(0), node(goal));

        let mut depth_first =
            DepthFirstEngine::new(&graph, start.clone(), goal.clone(), depth_threshold);
        if let RunOutcome::Found(path) = depth_first.run() {
            assert_valid_path(&graph, &path, &start, &goal);
            prop_assert!(path.len() <= depth_threshold + 1);
        }

        let mut breadth_first =
            BreadthFirstEngine::new(&graph, start.clone(), goal.clone(), memory_threshold);
        if let RunOutcome::Found(path) = breadth_first.run() {
            assert_valid_path(&graph, &path, &start, &goal);
        }

        let mut hybrid = HybridController::new(
            &graph,
            start.clone(),
            goal.clone(),
            depth_threshold,
            memory_threshold,
        );
        if let Some(path) = hybrid.search() {
            assert_valid_path(&graph, &path, &start, &goal);
        }
    }
}

// =============================================================================
// Hybrid termination
// =============================================================================
proptest! {
    #[test]
    fn hybrid_terminates(
        adjacency in graph_strategy(),
        goal in 0_usize..10,
        depth_threshold in 0_usize..4,
        memory_threshold in 0_usize..4,
    ) {
        let graph = build_graph(&adjacency);
        // Frontier paths are simple, so each engine can only ever hold finitely
        // many entries. Every hybrid step pops one of them.
        let budget = 100_000;

        let mut hybrid =
            HybridController::new(&graph, node(0), node(goal), depth_threshold, memory_threshold);
        let mut steps = 0;
        let mut found = false;
        while !hybrid.is_exhausted() && steps <= budget {
            if let StepResult::Found(_) = hybrid.step() {
                found = true;
                break;
            }
            steps += 1;
        }

        prop_assert!(found || hybrid.is_exhausted(), "no result after {steps} steps");
        prop_assert!(steps <= budget);
    }
}

// =============================================================================
// Depth-first paths stay simple
// =============================================================================
proptest! {
    #[test]
    fn depth_first_depth_bounded_by_node_count(
        adjacency in graph_strategy(),
        goal in 0_usize..10,
    ) {
        let graph = build_graph(&adjacency);
        let mut engine = DepthFirstEngine::new(&graph, node(0), node(goal), usize::MAX);
        let outcome = engine.run();

        prop_assert!(!matches!(outcome, RunOutcome::Breached));
        prop_assert!(engine.metrics().max_depth_seen <= graph.node_count());
    }
}

// =============================================================================
// Completeness when depth-first cannot breach
// =============================================================================
proptest! {
    #[test]
    fn hybrid_finds_path_iff_reachable(
        adjacency in graph_strategy(),
        goal in 0_usize..10,
        memory_threshold in 0_usize..4,
    ) {
        let graph = build_graph(&adjacency);
        let (start, goal) = (node(0), node(goal));
        let reachable = graph.contains_node(goal.as_str())
            && graph.is_reachable(start.as_str(), goal.as_str()).unwrap();

        let mut hybrid = HybridController::new(
            &graph,
            start,
            goal,
            graph.node_count(),
            memory_threshold,
        );
        prop_assert_eq!(hybrid.search().is_some(), reachable);
    }
}

// =============================================================================
// Breadth-first finds shortest paths
// =============================================================================
proptest! {
    #[test]
    fn breadth_first_path_is_shortest(
        adjacency in graph_strategy(),
        goal in 0_usize..8,
    ) {
        let graph = build_graph(&adjacency);
        let (start, goal) = (node(0), node(goal));

        let mut engine = BreadthFirstEngine::new(&graph, start.clone(), goal.clone(), usize::MAX);
        let found = engine.run().into_path().map(|path| path.len());

        prop_assert_eq!(found, shortest_path_len(&graph, &start, &goal));
    }
}
