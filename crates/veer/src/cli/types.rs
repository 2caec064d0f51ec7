//! CLI value enums and domain type conversions.
//!
//! This module contains the value enums used for CLI argument parsing
//! and their conversions to/from domain types.

use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

use crate::config::Preset;

// ============================================================================
// Value Enums
// ============================================================================

/// Which strategies to run for CLI arguments
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyArg {
    /// Depth-first search only
    Dfs,
    /// Breadth-first search only
    Bfs,
    /// Self-reflective hybrid search only
    Hybrid,
    /// All three, one after another
    All,
}

impl StrategyArg {
    /// The searches to run, in report order.
    #[must_use]
    pub fn kinds(self) -> &'static [SearchKind] {
        match self {
            Self::Dfs => &[SearchKind::DepthFirst],
            Self::Bfs => &[SearchKind::BreadthFirst],
            Self::Hybrid => &[SearchKind::Hybrid],
            Self::All => &[
                SearchKind::DepthFirst,
                SearchKind::BreadthFirst,
                SearchKind::Hybrid,
            ],
        }
    }
}

impl fmt::Display for StrategyArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dfs => write!(f, "dfs"),
            Self::Bfs => write!(f, "bfs"),
            Self::Hybrid => write!(f, "hybrid"),
            Self::All => write!(f, "all"),
        }
    }
}

/// Threshold preset for CLI arguments
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetArg {
    /// Depth threshold 10, memory threshold 50
    Standard,
    /// Depth threshold 100, memory threshold 50
    Deep,
}

impl fmt::Display for PresetArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Deep => write!(f, "deep"),
        }
    }
}

// ============================================================================
// Domain Type Conversions
// ============================================================================

impl From<PresetArg> for Preset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Standard => Preset::Standard,
            PresetArg::Deep => Preset::Deep,
        }
    }
}

// ============================================================================
// Report Types
// ============================================================================

/// A single search the `search` command runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchKind {
    /// Standalone depth-first engine
    DepthFirst,
    /// Standalone breadth-first engine
    BreadthFirst,
    /// Hybrid controller
    Hybrid,
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DepthFirst => write!(f, "depth-first"),
            Self::BreadthFirst => write!(f, "breadth-first"),
            Self::Hybrid => write!(f, "hybrid"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(StrategyArg::Dfs, 1)]
    #[case(StrategyArg::Bfs, 1)]
    #[case(StrategyArg::Hybrid, 1)]
    #[case(StrategyArg::All, 3)]
    fn test_strategy_kinds(#[case] arg: StrategyArg, #[case] count: usize) {
        assert_eq!(arg.kinds().len(), count);
    }

    #[test]
    fn test_all_runs_hybrid_last() {
        assert_eq!(StrategyArg::All.kinds().last(), Some(&SearchKind::Hybrid));
    }

    #[rstest]
    #[case(PresetArg::Standard, Preset::Standard)]
    #[case(PresetArg::Deep, Preset::Deep)]
    fn test_preset_conversion(#[case] arg: PresetArg, #[case] expected: Preset) {
        assert_eq!(Preset::from(arg), expected);
    }
}
