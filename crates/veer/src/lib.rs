//! Veer - self-reflective path-finding over directed graphs.
//!
//! This crate provides three interchangeable, stepwise search strategies:
//!
//! - [`DepthFirstEngine`]: LIFO traversal bounded by a depth threshold
//! - [`BreadthFirstEngine`]: FIFO traversal bounded by a frontier-size threshold
//! - [`HybridController`]: starts depth-first and switches strategy every time
//!   the active engine breaches its threshold
//!
//! Every engine can be driven one [`step`](SearchEngine::step) at a time, so a
//! caller can interleave search with rendering or cancellation checks.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use veer::HybridController;
//!
//! let graph: HashMap<&str, Vec<&str>> = HashMap::from([
//!     ("A", vec!["B", "C"]),
//!     ("B", vec!["D"]),
//!     ("C", vec!["D"]),
//! ]);
//!
//! let mut search = HybridController::new(&graph, "A", "D", 10, 50);
//! assert_eq!(search.search(), Some(vec!["A", "B", "D"]));
//! ```

#![forbid(unsafe_code)]

// Public modules for library usage
pub mod config;
pub mod error;
pub mod graph;
pub mod samples;
pub mod search;

// Public CLI module (needed by binary)
pub mod cli;

// Internal modules (not exposed as public API)
pub(crate) mod output;

pub use config::{DEEP_DEPTH_THRESHOLD, DEFAULT_DEPTH_THRESHOLD, DEFAULT_MEMORY_THRESHOLD};
pub use graph::{Graph, GraphModel, NodeId};
pub use search::{
    BreadthFirstEngine, BreadthFirstMetrics, DepthFirstEngine, DepthFirstMetrics, FrontierEntry,
    HybridController, HybridMetrics, RunOutcome, SearchEngine, StepResult, Strategy,
};
