//! Output formatting for CLI commands.
//!
//! This module provides utilities for formatting command output in both
//! human-readable text format and JSON format for programmatic use.
//!
//! Submodules:
//! - [`color`]: Color and styling helpers

pub mod color;

use crate::cli::SearchKind;
use crate::config::SearchConfig;
use crate::graph::NodeId;
use crate::search::{BreadthFirstMetrics, DepthFirstMetrics, HybridMetrics};
use serde::Serialize;
use std::env;
use std::io::{self, Write};

use color::{bold, colorize_outcome, dimmed, info, warning};

// ============================================================================
// Output Configuration
// ============================================================================

/// Configuration for output formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Whether to use colors in output.
    pub use_colors: bool,
    /// Whether to use ASCII-only arrows instead of Unicode.
    pub use_ascii: bool,
}

impl OutputConfig {
    /// Create an `OutputConfig` by reading from environment variables.
    ///
    /// Reads:
    /// - `NO_COLOR`: Standard env var to disable colors (any value disables colors)
    /// - `VEER_COLOR`: Set to "0" or "false" to disable colors (default: true)
    /// - `VEER_ASCII`: Set to "1" or "true" for ASCII-only arrows (default: false)
    pub fn from_env() -> Self {
        let use_ascii = match env::var("VEER_ASCII") {
            Ok(v) if v == "1" || v.eq_ignore_ascii_case("true") => true,
            Ok(v) if v == "0" || v.eq_ignore_ascii_case("false") || v.is_empty() => false,
            Ok(v) => {
                tracing::warn!(
                    env_var = "VEER_ASCII",
                    value = %v,
                    "Invalid value (expected '1', 'true', '0', or 'false'), using default"
                );
                false
            }
            Err(_) => false,
        };

        // Respect NO_COLOR standard (https://no-color.org/)
        let use_colors = env::var("NO_COLOR").is_err()
            && env::var("VEER_COLOR")
                .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
                .unwrap_or(true);

        Self {
            use_colors,
            use_ascii,
        }
    }

    fn arrow(&self) -> &'static str {
        if self.use_ascii { " -> " } else { " → " }
    }
}

/// Output format mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text format
    Text,
    /// JSON format for programmatic use
    Json,
}

// ============================================================================
// Report Types
// ============================================================================

/// Metrics of whichever engine produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ReportMetrics {
    /// Standalone depth-first engine
    DepthFirst(DepthFirstMetrics),
    /// Standalone breadth-first engine
    BreadthFirst(BreadthFirstMetrics),
    /// Hybrid controller
    Hybrid(HybridMetrics),
}

/// Result of running one strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrategyReport {
    /// Which search ran.
    pub strategy: SearchKind,
    /// Terminal outcome label: found, breached or exhausted.
    pub outcome: &'static str,
    /// Path from start to goal, if one was found.
    pub path: Option<Vec<NodeId>>,
    /// Exploration metrics.
    pub metrics: ReportMetrics,
    /// Entries left unexplored in the frontier when the run stopped.
    pub frontier_len: usize,
    /// Wall-clock time spent searching, in microseconds.
    pub elapsed_micros: u64,
}

/// Everything the `search` command reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    /// Built-in graph name or file path.
    pub graph: String,
    /// Start node.
    pub start: NodeId,
    /// Goal node.
    pub goal: NodeId,
    /// Resolved thresholds.
    pub config: SearchConfig,
    /// Whether the start node has its own adjacency entry.
    pub start_has_entry: bool,
    /// Whether any directed path leads from start to goal.
    pub goal_reachable: bool,
    /// One report per strategy, in run order.
    pub results: Vec<StrategyReport>,
}

/// One row of the `graphs` listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphSummary {
    /// Built-in graph name.
    pub name: &'static str,
    /// Distinct nodes.
    pub nodes: usize,
    /// Edges, counting duplicates.
    pub edges: usize,
    /// Whether the graph contains a directed cycle.
    pub cyclic: bool,
}

// ============================================================================
// Public Dispatch Functions
// ============================================================================

/// Print a search report in the specified format
pub fn print_search_report(report: &SearchReport, mode: OutputMode) -> io::Result<()> {
    match mode {
        OutputMode::Json => print_json(report),
        OutputMode::Text => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_search_text(&mut handle, report, &OutputConfig::from_env())
        }
    }
}

/// Print the built-in graph listing in the specified format
pub fn print_graph_summaries(summaries: &[GraphSummary], mode: OutputMode) -> io::Result<()> {
    match mode {
        OutputMode::Json => print_json(&summaries),
        OutputMode::Text => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_graphs_text(&mut handle, summaries, &OutputConfig::from_env())
        }
    }
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(handle, "{json}")
}

// ============================================================================
// Text Formatting
// ============================================================================

fn format_path(path: &[NodeId], config: &OutputConfig) -> String {
    path.iter()
        .map(|node| info(node.as_str(), config))
        .collect::<Vec<_>>()
        .join(config.arrow())
}

fn write_search_text<W: Write>(
    w: &mut W,
    report: &SearchReport,
    config: &OutputConfig,
) -> io::Result<()> {
    writeln!(
        w,
        "{} {}{}{} in {} {}",
        bold("Search", config),
        info(report.start.as_str(), config),
        config.arrow(),
        info(report.goal.as_str(), config),
        report.graph,
        dimmed(
            &format!(
                "(depth threshold {}, memory threshold {})",
                report.config.depth_threshold, report.config.memory_threshold
            ),
            config
        ),
    )?;

    if !report.start_has_entry {
        writeln!(
            w,
            "{} start node '{}' has no adjacency entry; it has no successors",
            warning("warning:", config),
            report.start
        )?;
    }
    if !report.goal_reachable {
        writeln!(
            w,
            "{} goal '{}' is not reachable from '{}'",
            warning("warning:", config),
            report.goal,
            report.start
        )?;
    }

    for result in &report.results {
        writeln!(w)?;
        write_strategy_text(w, result, config)?;
    }
    Ok(())
}

fn write_strategy_text<W: Write>(
    w: &mut W,
    result: &StrategyReport,
    config: &OutputConfig,
) -> io::Result<()> {
    let path = match &result.path {
        Some(path) => format_path(path, config),
        None => dimmed("no path", config),
    };
    writeln!(
        w,
        "{} {} {}",
        bold(&format!("{:<14}", result.strategy.to_string()), config),
        colorize_outcome(&format!("{:<10}", result.outcome), config),
        path
    )?;

    let time = format!(
        "frontier left: {}  time: {}µs",
        result.frontier_len, result.elapsed_micros
    );
    match &result.metrics {
        ReportMetrics::DepthFirst(metrics) => writeln!(
            w,
            "    {}",
            dimmed(
                &format!(
                    "nodes explored: {}  max depth: {}  {time}",
                    metrics.nodes_explored, metrics.max_depth_seen
                ),
                config
            )
        ),
        ReportMetrics::BreadthFirst(metrics) => writeln!(
            w,
            "    {}",
            dimmed(
                &format!(
                    "nodes explored: {}  queue size: {}  {time}",
                    metrics.nodes_explored, metrics.queue_size
                ),
                config
            )
        ),
        ReportMetrics::Hybrid(metrics) => {
            writeln!(
                w,
                "    {}",
                dimmed(
                    &format!(
                        "depth-first: {} explored, max depth {}  breadth-first: {} explored, queue size {}",
                        metrics.depth_first.nodes_explored,
                        metrics.depth_first.max_depth_seen,
                        metrics.breadth_first.nodes_explored,
                        metrics.breadth_first.queue_size
                    ),
                    config
                )
            )?;
            writeln!(
                w,
                "    {}",
                dimmed(
                    &format!(
                        "active: {}  switches: {}  {time}",
                        metrics.active_strategy, metrics.strategy_switches
                    ),
                    config
                )
            )
        }
    }
}

fn write_graphs_text<W: Write>(
    w: &mut W,
    summaries: &[GraphSummary],
    config: &OutputConfig,
) -> io::Result<()> {
    writeln!(
        w,
        "{}",
        bold(&format!("{:<10} {:>6} {:>6}  cyclic", "graph", "nodes", "edges"), config)
    )?;
    for summary in summaries {
        writeln!(
            w,
            "{} {:>6} {:>6}  {}",
            info(&format!("{:<10}", summary.name), config),
            summary.nodes,
            summary.edges,
            if summary.cyclic { "yes" } else { "no" }
        )?;
    }
    Ok(())
}
