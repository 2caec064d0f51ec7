//! CLI argument structs for all commands.
//!
//! Each command has its own argument struct with clap derive attributes
//! for parsing and validation.

use clap::{ArgGroup, Parser};
use std::path::PathBuf;

use super::types::{PresetArg, StrategyArg};
use super::validators::{validate_graph_name, validate_node_id};

/// Arguments for the `search` command
#[derive(Parser, Debug, Clone)]
#[command(group(ArgGroup::new("source").required(true).args(["graph", "file"])))]
pub struct SearchArgs {
    /// Built-in graph to search (tree, monster)
    #[arg(short, long, value_parser = validate_graph_name)]
    pub graph: Option<String>,

    /// Graph file to search (.json, .yaml or .yml)
    ///
    /// The file holds a mapping from each node to its ordered list of successors.
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Node the search starts from
    #[arg(short, long, value_parser = validate_node_id)]
    pub start: String,

    /// Node the search looks for
    #[arg(short = 'G', long, value_parser = validate_node_id)]
    pub goal: String,

    /// Strategies to run
    #[arg(long, value_enum, default_value_t = StrategyArg::All)]
    pub strategy: StrategyArg,

    /// Threshold preset applied before the config file, environment and flags
    #[arg(long, value_enum, default_value_t = PresetArg::Standard)]
    pub preset: PresetArg,

    /// YAML file with `depth-threshold` and/or `memory-threshold`
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Longest path the depth-first engine expands
    #[arg(short = 'd', long)]
    pub depth_threshold: Option<usize>,

    /// Largest queue the breadth-first engine tolerates before expanding
    #[arg(short = 'm', long)]
    pub memory_threshold: Option<usize>,
}

/// Arguments for the `graphs` command
#[derive(Parser, Debug, Clone)]
pub struct GraphsArgs {}
