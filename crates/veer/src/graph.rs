//! Graph model consumed by the search engines.
//!
//! The engines only need one capability from a graph: looking up the ordered
//! successors of a node. [`GraphModel`] captures that, with the rule that a
//! node missing from the mapping simply has no successors.
//!
//! [`Graph`] is the owned, string-keyed implementation used by the CLI and the
//! built-in samples. It also offers structural analysis (cycle detection and
//! reachability) using petgraph.

use crate::error::{Error, Result};
use petgraph::algo;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::path::Path;
use tokio::fs;

/// Read-only adjacency lookup used by the search engines.
///
/// Successor order is significant: both engines explore successors in the
/// order they are listed. Duplicate edges and self-loops are passed through
/// untouched.
pub trait GraphModel {
    /// Node identifier type.
    type Node: Clone + Eq + Hash;

    /// Ordered successors of `node`, or an empty slice if the node has no entry.
    fn successors(&self, node: &Self::Node) -> &[Self::Node];
}

impl<N, S> GraphModel for HashMap<N, Vec<N>, S>
where
    N: Clone + Eq + Hash,
    S: BuildHasher,
{
    type Node = N;

    fn successors(&self, node: &N) -> &[N] {
        self.get(node).map(Vec::as_slice).unwrap_or_default()
    }
}

impl<N> GraphModel for BTreeMap<N, Vec<N>>
where
    N: Clone + Ord + Hash,
{
    type Node = N;

    fn successors(&self, node: &N) -> &[N] {
        self.get(node).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Unique identifier for a node in a [`Graph`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    /// Create a new node ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Supported graph file formats, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GraphFileFormat {
    Json,
    Yaml,
}

impl GraphFileFormat {
    fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Ok(Self::Yaml)
            }
            _ => Err(Error::GraphFormat(format!(
                "Unsupported graph file '{}' (expected .json, .yaml or .yml)",
                path.display()
            ))),
        }
    }
}

/// Owned directed graph keyed by [`NodeId`].
///
/// Keys are kept sorted so listings and analysis output are deterministic.
/// Successor lists keep their insertion order, including duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Graph {
    adjacency: BTreeMap<NodeId, Vec<NodeId>>,
}

impl Graph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from `(node, successors)` pairs.
    ///
    /// A node listed twice has its successor lists concatenated.
    pub fn from_adjacency<I, K, V, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<NodeId>,
        V: IntoIterator<Item = S>,
        S: Into<NodeId>,
    {
        let mut graph = Self::new();
        for (node, successors) in entries {
            graph.add_edges(node, successors);
        }
        graph
    }

    /// Append edges from `node` to each of `successors`.
    ///
    /// The node gets an entry even when `successors` is empty.
    pub fn add_edges<K, V, S>(&mut self, node: K, successors: V) -> &mut Self
    where
        K: Into<NodeId>,
        V: IntoIterator<Item = S>,
        S: Into<NodeId>,
    {
        self.adjacency
            .entry(node.into())
            .or_default()
            .extend(successors.into_iter().map(Into::into));
        self
    }

    /// Parse a graph from a JSON object mapping node to successor list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GraphFormat`] if the input is not a valid adjacency mapping.
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::GraphFormat(format!("JSON error: {e}")))
    }

    /// Parse a graph from a YAML mapping of node to successor list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GraphFormat`] if the input is not a valid adjacency mapping.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::GraphFormat(format!("YAML error: {e}")))
    }

    /// Load a graph from a `.json`, `.yaml` or `.yml` file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file extension is not supported
    /// - The file cannot be read
    /// - The content is not a valid adjacency mapping
    pub async fn load(path: &Path) -> Result<Self> {
        let format = GraphFileFormat::from_path(path)?;
        let content = fs::read_to_string(path).await?;
        let graph = match format {
            GraphFileFormat::Json => Self::from_json_str(&content)?,
            GraphFileFormat::Yaml => Self::from_yaml_str(&content)?,
        };

        tracing::debug!(
            path = %path.display(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "Loaded graph"
        );

        Ok(graph)
    }

    /// Successors of the node with the given id (empty if it has no entry).
    #[must_use]
    pub fn successors_of(&self, id: &str) -> &[NodeId] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Whether `id` has its own entry in the adjacency mapping.
    #[must_use]
    pub fn has_entry(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Whether `id` appears anywhere in the graph, as a key or as a successor.
    #[must_use]
    pub fn contains_node(&self, id: &str) -> bool {
        self.has_entry(id)
            || self
                .adjacency
                .values()
                .any(|successors| successors.iter().any(|s| s.as_str() == id))
    }

    /// All nodes: keys plus every node that only appears as a successor.
    #[must_use]
    pub fn nodes(&self) -> BTreeSet<&NodeId> {
        self.adjacency
            .iter()
            .flat_map(|(node, successors)| std::iter::once(node).chain(successors))
            .collect()
    }

    /// Number of distinct nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes().len()
    }

    /// Number of edges, counting duplicates.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Whether the graph has no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Iterate over `(node, successors)` entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, &[NodeId])> {
        self.adjacency
            .iter()
            .map(|(node, successors)| (node, successors.as_slice()))
    }

    /// Whether the graph contains a directed cycle. Self-loops count.
    #[must_use]
    pub fn has_cycle(&self) -> bool {
        let (graph, _) = self.to_digraph();
        algo::is_cyclic_directed(&graph)
    }

    /// Whether any directed path leads from `from` to `to`.
    ///
    /// A node is always reachable from itself.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if either node does not appear in the graph.
    pub fn is_reachable(&self, from: &str, to: &str) -> Result<bool> {
        let (graph, node_map) = self.to_digraph();
        let from_node = node_map
            .get(from)
            .ok_or_else(|| Error::UnknownNode(from.to_string()))?;
        let to_node = node_map
            .get(to)
            .ok_or_else(|| Error::UnknownNode(to.to_string()))?;

        Ok(algo::has_path_connecting(&graph, *from_node, *to_node, None))
    }

    /// Build a petgraph view of this graph plus the id-to-index side table.
    fn to_digraph(&self) -> (DiGraph<NodeId, ()>, HashMap<NodeId, NodeIndex>) {
        let mut graph = DiGraph::new();
        let mut node_map: HashMap<NodeId, NodeIndex> = HashMap::new();

        for node in self.nodes() {
            let index = graph.add_node(node.clone());
            node_map.insert(node.clone(), index);
        }

        for (node, successors) in self.iter() {
            let source = node_map[node];
            for successor in successors {
                graph.add_edge(source, node_map[successor], ());
            }
        }

        (graph, node_map)
    }
}

impl GraphModel for Graph {
    type Node = NodeId;

    fn successors(&self, node: &NodeId) -> &[NodeId] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or_default()
    }
}

impl<K, V, S> FromIterator<(K, V)> for Graph
where
    K: Into<NodeId>,
    V: IntoIterator<Item = S>,
    S: Into<NodeId>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_adjacency(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn diamond() -> Graph {
        Graph::from_adjacency([
            ("A", vec!["B", "C"]),
            ("B", vec!["D"]),
            ("C", vec!["D"]),
        ])
    }

    #[test]
    fn test_missing_key_has_no_successors() {
        let graph = diamond();
        assert!(graph.successors_of("D").is_empty());
        assert!(graph.successors(&NodeId::new("Z")).is_empty());
    }

    #[test]
    fn test_hashmap_graph_model_absent_key() {
        let graph: HashMap<&str, Vec<&str>> = HashMap::from([("A", vec!["B"])]);
        assert_eq!(graph.successors(&"A"), &["B"]);
        assert!(graph.successors(&"B").is_empty());
    }

    #[test]
    fn test_btreemap_graph_model_keeps_order() {
        let graph: BTreeMap<u32, Vec<u32>> = BTreeMap::from([(1, vec![3, 2, 3])]);
        assert_eq!(graph.successors(&1), &[3, 2, 3]);
    }

    #[test]
    fn test_add_edges_keeps_duplicates_and_order() {
        let mut graph = Graph::new();
        graph.add_edges("A", ["B", "C"]).add_edges("A", ["B"]);

        let successors: Vec<&str> = graph.successors_of("A").iter().map(NodeId::as_str).collect();
        assert_eq!(successors, vec!["B", "C", "B"]);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_iter_yields_entries_in_key_order() {
        let graph = Graph::from_adjacency([("C", vec!["A"]), ("A", vec!["C", "B"])]);

        let entries: Vec<(&str, Vec<&str>)> = graph
            .iter()
            .map(|(node, successors)| {
                (node.as_str(), successors.iter().map(NodeId::as_str).collect())
            })
            .collect();
        assert_eq!(entries, vec![("A", vec!["C", "B"]), ("C", vec!["A"])]);
    }

    #[test]
    fn test_nodes_include_successor_only_nodes() {
        let graph = diamond();
        let nodes: Vec<&str> = graph.nodes().into_iter().map(NodeId::as_str).collect();
        assert_eq!(nodes, vec!["A", "B", "C", "D"]);
        assert_eq!(graph.node_count(), 4);
        assert!(graph.contains_node("D"));
        assert!(!graph.has_entry("D"));
        assert!(!graph.contains_node("Z"));
    }

    #[rstest]
    #[case::acyclic(vec![("A", vec!["B"]), ("B", vec!["C"])], false)]
    #[case::two_cycle(vec![("A", vec!["B"]), ("B", vec!["A"])], true)]
    #[case::self_loop(vec![("A", vec!["A"])], true)]
    #[case::diamond(vec![("A", vec!["B", "C"]), ("B", vec!["D"]), ("C", vec!["D"])], false)]
    fn test_has_cycle(#[case] entries: Vec<(&str, Vec<&str>)>, #[case] expected: bool) {
        let graph = Graph::from_adjacency(entries);
        assert_eq!(graph.has_cycle(), expected);
    }

    #[rstest]
    #[case("A", "D", true)]
    #[case("D", "A", false)]
    #[case("B", "C", false)]
    #[case("C", "C", true)]
    fn test_is_reachable(#[case] from: &str, #[case] to: &str, #[case] expected: bool) {
        assert_eq!(diamond().is_reachable(from, to).unwrap(), expected);
    }

    #[test]
    fn test_is_reachable_unknown_node() {
        let result = diamond().is_reachable("A", "Z");
        assert!(matches!(result, Err(Error::UnknownNode(id)) if id == "Z"));
    }

    #[test]
    fn test_parse_json_and_yaml_agree() {
        let from_json = Graph::from_json_str(r#"{"A": ["B", "C"], "B": ["D"], "C": ["D"]}"#).unwrap();
        let from_yaml = Graph::from_yaml_str("A: [B, C]\nB: [D]\nC: [D]\n").unwrap();
        assert_eq!(from_json, diamond());
        assert_eq!(from_yaml, diamond());
    }

    #[test]
    fn test_parse_rejects_non_mapping() {
        let result = Graph::from_json_str(r#"["A", "B"]"#);
        assert!(matches!(result, Err(Error::GraphFormat(_))));
    }

    #[tokio::test]
    async fn test_load_yaml_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "A: [B]\nB: []").unwrap();

        let graph = Graph::load(file.path()).await.unwrap();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[tokio::test]
    async fn test_load_rejects_unknown_extension() {
        let file = NamedTempFile::new().unwrap();

        let err = Graph::load(file.path()).await.unwrap_err();
        assert!(err.to_string().contains("Unsupported graph file"));
    }
}
