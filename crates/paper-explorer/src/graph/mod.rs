//! Citation neighborhood graph.
//!
//! One main node, an edge main → cited paper for every reference, and an edge
//! citing paper → main for every citation. Nodes are keyed by DOI when one is
//! known and by title plus year otherwise, so two different papers that only
//! share a title stay apart.

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::models::{PaperRecord, PaperRef};

/// Role of a paper in the neighborhood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeRole {
    /// The paper that was looked up.
    Main,
    /// A paper the main paper cites.
    Cited,
    /// A paper citing the main paper.
    Referencing,
}

/// Role of a citation edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeRole {
    /// Main paper → paper it cites.
    Cites,
    /// Citing paper → main paper.
    CitedBy,
}

/// Identity of a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKey {
    /// Lower-cased DOI.
    Doi(String),
    /// Title and year, for papers without a DOI.
    TitleYear(String, Option<i32>),
}

impl NodeKey {
    /// Key for a paper with the given metadata.
    #[must_use]
    pub fn new(title: &str, doi: Option<&str>, year: Option<i32>) -> Self {
        match doi.map(str::trim).filter(|d| !d.is_empty()) {
            Some(doi) => Self::Doi(doi.to_lowercase()),
            None => Self::TitleYear(title.to_string(), year),
        }
    }
}

impl From<&PaperRef> for NodeKey {
    fn from(paper: &PaperRef) -> Self {
        Self::new(&paper.title, paper.doi.as_deref(), paper.year)
    }
}

/// A paper in the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperNode {
    /// Display label.
    pub title: String,
    /// Publication year.
    pub year: Option<i32>,
    /// Role in the neighborhood.
    pub role: NodeRole,
}

/// Directed citation graph around one paper.
#[derive(Debug, Clone)]
pub struct CitationGraph {
    graph: DiGraph<PaperNode, EdgeRole>,
    index: HashMap<NodeKey, NodeIndex>,
    main: NodeIndex,
}

impl CitationGraph {
    /// Build the graph for a record.
    ///
    /// References are added before citations; a paper appearing in both lists
    /// is a single node that ends up with the `Referencing` role and carries
    /// both edges.
    #[must_use]
    pub fn build(record: &PaperRecord) -> Self {
        let mut graph = DiGraph::new();
        let mut index = HashMap::new();

        let main_key = NodeKey::new(&record.title, record.doi.as_deref(), record.year);
        let main = graph.add_node(PaperNode {
            title: record.title.clone(),
            year: record.year,
            role: NodeRole::Main,
        });
        index.insert(main_key, main);

        let mut this = Self { graph, index, main };

        for cited in &record.cited_papers {
            if let Some(node) = this.upsert(cited, NodeRole::Cited) {
                this.graph.update_edge(main, node, EdgeRole::Cites);
            }
        }

        for citing in &record.related_papers {
            if let Some(node) = this.upsert(citing, NodeRole::Referencing) {
                this.graph.update_edge(node, main, EdgeRole::CitedBy);
            }
        }

        tracing::debug!(
            nodes = this.node_count(),
            edges = this.edge_count(),
            "Built citation graph"
        );

        this
    }

    /// Add or retag the node for `paper`. Returns `None` for self-references.
    fn upsert(&mut self, paper: &PaperRef, role: NodeRole) -> Option<NodeIndex> {
        let key = NodeKey::from(paper);

        if let Some(&existing) = self.index.get(&key) {
            if existing == self.main {
                tracing::warn!(title = %paper.title, "Skipping self-reference to the main paper");
                return None;
            }
            self.graph[existing].role = role;
            return Some(existing);
        }

        let node = self.graph.add_node(PaperNode {
            title: paper.title.clone(),
            year: paper.year,
            role,
        });
        self.index.insert(key, node);
        Some(node)
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Index of the main paper.
    #[must_use]
    pub const fn main_node(&self) -> NodeIndex {
        self.main
    }

    /// Look up a node by index.
    #[must_use]
    pub fn node(&self, index: NodeIndex) -> Option<&PaperNode> {
        self.graph.node_weight(index)
    }

    /// Look up a node by key.
    #[must_use]
    pub fn find(&self, key: &NodeKey) -> Option<&PaperNode> {
        self.index.get(key).and_then(|&i| self.node(i))
    }

    /// All nodes with their indices, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeIndex, &PaperNode)> {
        self.graph.node_indices().map(move |i| (i, &self.graph[i]))
    }

    /// All edges as (source, target, role).
    pub fn edges(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex, EdgeRole)> + '_ {
        self.graph.edge_references().map(|e| (e.source(), e.target(), *e.weight()))
    }

    /// Indices of nodes with the given role.
    #[must_use]
    pub fn nodes_with_role(&self, role: NodeRole) -> Vec<NodeIndex> {
        self.nodes().filter(|(_, n)| n.role == role).map(|(i, _)| i).collect()
    }

    /// Edges with the given role.
    #[must_use]
    pub fn edges_with_role(&self, role: EdgeRole) -> Vec<EdgeIndex> {
        self.graph.edge_references().filter(|e| *e.weight() == role).map(|e| e.id()).collect()
    }

    /// Papers cited by the main paper.
    pub fn cited_by_main(&self) -> impl Iterator<Item = &PaperNode> {
        self.graph.neighbors_directed(self.main, Direction::Outgoing).map(|i| &self.graph[i])
    }

    /// Papers citing the main paper.
    pub fn citing_main(&self) -> impl Iterator<Item = &PaperNode> {
        self.graph.neighbors_directed(self.main, Direction::Incoming).map(|i| &self.graph[i])
    }
}
