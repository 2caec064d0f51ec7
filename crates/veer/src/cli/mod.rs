//! CLI argument parsing and command dispatch.
//!
//! This module provides the command-line interface for veer using clap's derive API.
//!
//! # Commands
//!
//! - `search`: Run depth-first, breadth-first and/or hybrid search on a graph
//! - `graphs`: List the built-in graphs
//!
//! # Global Flags
//!
//! - `--json`: Output in JSON format (applies to all commands)
//!
//! # Example
//!
//! ```bash
//! veer search --graph monster --start A --goal Q
//! veer search --file graph.yaml --start A --goal Z --strategy hybrid --depth-threshold 3
//! veer --json graphs
//! ```

mod args;
mod execute;
mod types;
mod validators;

use anyhow::Result;
use clap::{Parser, Subcommand};

// Re-export argument structs
pub use args::{GraphsArgs, SearchArgs};

// Re-export types
pub use types::{PresetArg, SearchKind, StrategyArg};

// Re-export validators for external use
pub use validators::{validate_graph_name, validate_node_id};

/// Veer - self-reflective path-finding
///
/// Searches a directed graph with depth-first, breadth-first, or a hybrid
/// search that switches strategy whenever it breaches a resource threshold.
#[derive(Parser, Debug)]
#[command(name = "veer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Search a graph for a path from start to goal
    ///
    /// Runs each selected strategy independently and reports the path found,
    /// exploration metrics and elapsed time.
    Search(SearchArgs),

    /// List the built-in graphs
    ///
    /// Shows node count, edge count and whether each graph contains a cycle.
    Graphs(GraphsArgs),
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    ///
    /// # Errors
    ///
    /// Returns a clap error if the arguments are invalid.
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Execute the CLI command
    ///
    /// # Errors
    ///
    /// Returns an error if a graph or config file cannot be loaded, or output fails.
    pub async fn execute(&self) -> Result<()> {
        use crate::output::OutputMode;

        let output_mode = if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };

        match &self.command {
            Some(Commands::Search(args)) => execute::execute_search(args, output_mode).await,
            Some(Commands::Graphs(args)) => execute::execute_graphs(args, output_mode),
            None => {
                println!("Veer self-reflective path-finding");
                println!("Use --help for more information");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::path::PathBuf;

    fn parse_search(args: &[&str]) -> SearchArgs {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Some(Commands::Search(search)) => search,
            other => panic!("expected search command, got {other:?}"),
        }
    }

    #[test]
    fn test_search_defaults() {
        let args = parse_search(&["veer", "search", "--graph", "tree", "-s", "A", "-G", "Q"]);

        assert_eq!(args.graph.as_deref(), Some("tree"));
        assert_eq!(args.start, "A");
        assert_eq!(args.goal, "Q");
        assert_eq!(args.strategy, StrategyArg::All);
        assert_eq!(args.preset, PresetArg::Standard);
        assert_eq!(args.depth_threshold, None);
        assert_eq!(args.memory_threshold, None);
    }

    #[test]
    fn test_search_with_file_and_thresholds() {
        let args = parse_search(&[
            "veer",
            "search",
            "--file",
            "graph.yaml",
            "--start",
            "A",
            "--goal",
            "F",
            "--strategy",
            "hybrid",
            "--preset",
            "deep",
            "-d",
            "3",
            "-m",
            "7",
        ]);

        assert_eq!(args.file, Some(PathBuf::from("graph.yaml")));
        assert_eq!(args.strategy, StrategyArg::Hybrid);
        assert_eq!(args.preset, PresetArg::Deep);
        assert_eq!(args.depth_threshold, Some(3));
        assert_eq!(args.memory_threshold, Some(7));
    }

    #[test]
    fn test_node_ids_keep_whitespace() {
        let args = parse_search(&["veer", "search", "-g", "tree", "-s", "New York", "-G", " B"]);

        assert_eq!(args.start, "New York");
        assert_eq!(args.goal, " B");
    }

    #[test]
    fn test_global_json_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["veer", "graphs", "--json"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Some(Commands::Graphs(_))));
    }

    #[rstest]
    #[case::missing_source(&["veer", "search", "-s", "A", "-G", "B"][..])]
    #[case::both_sources(&["veer", "search", "-g", "tree", "-f", "g.json", "-s", "A", "-G", "B"][..])]
    #[case::unknown_graph(&["veer", "search", "-g", "lattice", "-s", "A", "-G", "B"][..])]
    #[case::missing_goal(&["veer", "search", "-g", "tree", "-s", "A"][..])]
    #[case::empty_start(&["veer", "search", "-g", "tree", "-s", "", "-G", "B"][..])]
    #[case::negative_threshold(&["veer", "search", "-g", "tree", "-s", "A", "-G", "B", "-d", "-1"][..])]
    fn test_invalid_search_args(#[case] args: &[&str]) {
        assert!(Cli::try_parse_from(args).is_err());
    }
}
