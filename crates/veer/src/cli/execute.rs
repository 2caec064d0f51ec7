//! Command execution logic.
//!
//! This module contains the implementation of all CLI commands.

use anyhow::{Context, Result};
use std::time::{Duration, Instant};

use super::args::{GraphsArgs, SearchArgs};
use super::types::SearchKind;
use crate::config::{Preset, SearchConfig};
use crate::graph::{Graph, NodeId};
use crate::output::{
    self, GraphSummary, OutputMode, ReportMetrics, SearchReport, StrategyReport,
};
use crate::samples;
use crate::search::{
    BreadthFirstEngine, DepthFirstEngine, HybridController, RunOutcome, SearchEngine,
};

/// Execute the search command
pub async fn execute_search(args: &SearchArgs, output_mode: OutputMode) -> Result<()> {
    let (label, graph) = load_graph(args).await?;
    let config = resolve_config(args).await?;

    let start = NodeId::new(args.start.as_str());
    let goal = NodeId::new(args.goal.as_str());

    if graph.is_empty() {
        tracing::warn!(graph = %label, "Graph has no entries");
    }

    let goal_reachable = start == goal
        || (graph.contains_node(start.as_str())
            && graph.contains_node(goal.as_str())
            && graph.is_reachable(start.as_str(), goal.as_str())?);

    let results = args
        .strategy
        .kinds()
        .iter()
        .map(|kind| run_search(&graph, *kind, &start, &goal, &config))
        .collect();

    let report = SearchReport {
        graph: label,
        start_has_entry: graph.has_entry(start.as_str()),
        start,
        goal,
        config,
        goal_reachable,
        results,
    };

    output::print_search_report(&report, output_mode)?;
    Ok(())
}

/// Execute the graphs command
pub fn execute_graphs(_args: &GraphsArgs, output_mode: OutputMode) -> Result<()> {
    let summaries = samples::NAMES
        .iter()
        .map(|&name| -> Result<GraphSummary> {
            let graph = samples::by_name(name)?;
            Ok(GraphSummary {
                name,
                nodes: graph.node_count(),
                edges: graph.edge_count(),
                cyclic: graph.has_cycle(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    output::print_graph_summaries(&summaries, output_mode)?;
    Ok(())
}

/// Resolve the graph to search and a label for reports.
async fn load_graph(args: &SearchArgs) -> Result<(String, Graph)> {
    match (&args.graph, &args.file) {
        (Some(name), _) => Ok((name.clone(), samples::by_name(name)?)),
        (None, Some(path)) => {
            let graph = Graph::load(path)
                .await
                .with_context(|| format!("Failed to load graph from {}", path.display()))?;
            Ok((path.display().to_string(), graph))
        }
        (None, None) => anyhow::bail!("Either --graph or --file is required"),
    }
}

/// Layer thresholds: preset, then config file, then environment, then flags.
async fn resolve_config(args: &SearchArgs) -> Result<SearchConfig> {
    let mut base = SearchConfig::from_preset(Preset::from(args.preset));
    if let Some(path) = &args.config {
        base = base
            .with_file(path)
            .await
            .with_context(|| format!("Failed to load config from {}", path.display()))?;
    }

    let config = base
        .with_env_overrides()
        .with_overrides(args.depth_threshold, args.memory_threshold);

    tracing::debug!(?config, "Resolved search thresholds");
    Ok(config)
}

/// Run one search to completion and time it.
pub(crate) fn run_search(
    graph: &Graph,
    kind: SearchKind,
    start: &NodeId,
    goal: &NodeId,
    config: &SearchConfig,
) -> StrategyReport {
    let timer = Instant::now();

    let (outcome, metrics, frontier_len, elapsed) = match kind {
        SearchKind::DepthFirst => {
            let mut engine =
                DepthFirstEngine::new(graph, start.clone(), goal.clone(), config.depth_threshold);
            let outcome = engine.run();
            let elapsed = timer.elapsed();
            log_engine_stop(&engine);
            (
                outcome,
                ReportMetrics::DepthFirst(engine.metrics()),
                engine.frontier_len(),
                elapsed,
            )
        }
        SearchKind::BreadthFirst => {
            let mut engine = BreadthFirstEngine::new(
                graph,
                start.clone(),
                goal.clone(),
                config.memory_threshold,
            );
            let outcome = engine.run();
            let elapsed = timer.elapsed();
            log_engine_stop(&engine);
            (
                outcome,
                ReportMetrics::BreadthFirst(engine.metrics()),
                engine.frontier_len(),
                elapsed,
            )
        }
        SearchKind::Hybrid => {
            let mut search =
                HybridController::with_config(graph, start.clone(), goal.clone(), config);
            let outcome = search.search().map_or(RunOutcome::Exhausted, RunOutcome::Found);
            let elapsed = timer.elapsed();
            let frontier_len =
                search.depth_first().frontier_len() + search.breadth_first().frontier_len();
            (outcome, ReportMetrics::Hybrid(search.metrics()), frontier_len, elapsed)
        }
    };

    tracing::info!(
        strategy = %kind,
        outcome = outcome.label(),
        elapsed_us = micros(elapsed),
        "Search finished"
    );

    StrategyReport {
        strategy: kind,
        outcome: outcome.label(),
        path: outcome.into_path(),
        metrics,
        frontier_len,
        elapsed_micros: micros(elapsed),
    }
}

fn log_engine_stop<E: SearchEngine>(engine: &E) {
    tracing::debug!(
        strategy = %engine.strategy(),
        frontier = engine.frontier_len(),
        "Engine stopped"
    );
}

fn micros(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX)
}
