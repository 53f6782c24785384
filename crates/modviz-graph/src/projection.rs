//! Projection requests and the de-duplicated node/edge output.

use std::fmt::Write as _;

use modviz_config::VisibilityConfig;
use serde::{Deserialize, Serialize};

use crate::record::{FxIndexMap, FxIndexSet, ModuleTable, Selection};
use crate::render::{GraphEdge, GraphNode, Highlight, NodeShape};
use crate::Result;

/// Start/end text of a pathfinding query. Each side is resolved to module ids
/// through text search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathfindingRequest {
    pub start: String,
    pub end: String,
}

impl PathfindingRequest {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Both sides must be non-blank.
    pub fn is_active(&self) -> bool {
        !self.start.trim().is_empty() && !self.end.trim().is_empty()
    }
}

/// Everything a projection depends on besides the stored records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionRequest {
    #[serde(default)]
    pub visibility: VisibilityConfig,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub pathfinding: Option<PathfindingRequest>,
    /// Restrict search and full projections to the subgraph below this id.
    #[serde(default)]
    pub filter_node: Option<String>,
}

impl ProjectionRequest {
    pub fn new(visibility: VisibilityConfig) -> Self {
        Self {
            visibility,
            ..Self::default()
        }
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    pub fn with_pathfinding(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.pathfinding = Some(PathfindingRequest::new(start, end));
        self
    }

    pub fn with_filter_node(mut self, id: impl Into<String>) -> Self {
        self.filter_node = Some(id.into());
        self
    }

    /// The pathfinding request, if both sides are filled in.
    pub fn active_pathfinding(&self) -> Option<&PathfindingRequest> {
        self.pathfinding.as_ref().filter(|request| request.is_active())
    }

    /// The search text, if non-blank.
    pub fn active_search(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}

/// Renderable output of a projection: nodes unique by id, edges unique by
/// `(from, to)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl Projection {
    /// Render a selection. Ids missing from `modules` are dropped along with
    /// their edges.
    pub fn from_selection<H>(selection: &Selection, modules: &ModuleTable, highlight: H) -> Self
    where
        H: Fn(&str) -> Highlight,
    {
        let nodes: Vec<GraphNode> = selection
            .nodes
            .iter()
            .filter_map(|id| modules.get(id))
            .map(|record| GraphNode::from_record(record).with_highlight(highlight(&record.id)))
            .collect();
        let edges = selection
            .edges
            .iter()
            .filter(|edge| modules.contains_key(&edge.from) && modules.contains_key(&edge.to))
            .map(|edge| GraphEdge::dependency(&edge.from, &edge.to))
            .collect();
        Self { nodes, edges }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.edges.iter().any(|edge| edge.from == from && edge.to == to)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Graphviz DOT rendering.
    pub fn to_dot(&self) -> String {
        let mut out = String::from("digraph modules {\n");
        out.push_str("  node [style=filled, fontname=\"Helvetica\"];\n");
        for node in &self.nodes {
            let shape = match node.shape {
                NodeShape::Dot => "ellipse",
                NodeShape::Diamond => "diamond",
                NodeShape::Hexagon => "hexagon",
            };
            let _ = write!(
                out,
                "  \"{}\" [label=\"{}\", shape={}, fillcolor=\"{}\"",
                escape_dot(&node.id),
                escape_dot(&node.label),
                shape,
                node.file_type().color(),
            );
            if let Some(color) = node.highlight.font_color() {
                let _ = write!(out, ", fontcolor=\"{color}\"");
            }
            if let Some(color) = node.highlight.border_color() {
                let _ = write!(out, ", color=\"{color}\"");
            }
            if let Some(width) = node.highlight.border_width() {
                let _ = write!(out, ", penwidth={width}");
            }
            out.push_str("];\n");
        }
        for edge in &self.edges {
            let _ = write!(
                out,
                "  \"{}\" -> \"{}\"",
                escape_dot(&edge.from),
                escape_dot(&edge.to)
            );
            if edge.arrows.has_source_circle() {
                out.push_str(" [dir=both, arrowtail=odot");
            } else {
                out.push_str(" [arrowtail=none");
            }
            let _ = writeln!(
                out,
                ", arrowsize={}, penwidth={}];",
                edge.arrows.scale(),
                edge.width()
            );
        }
        out.push_str("}\n");
        out
    }
}

fn escape_dot(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Accumulates nodes and edges where a later highlight replaces an earlier one.
#[derive(Debug, Default)]
pub(crate) struct ProjectionBuilder {
    nodes: FxIndexMap<String, GraphNode>,
    edges: FxIndexSet<(String, String)>,
}

impl ProjectionBuilder {
    /// Ids missing from `modules` are skipped.
    pub(crate) fn node(&mut self, id: &str, modules: &ModuleTable, highlight: Highlight) {
        if let Some(existing) = self.nodes.get_mut(id) {
            existing.highlight = highlight;
            return;
        }
        if let Some(record) = modules.get(id) {
            self.nodes.insert(
                id.to_string(),
                GraphNode::from_record(record).with_highlight(highlight),
            );
        }
    }

    pub(crate) fn edge(&mut self, from: &str, to: &str) {
        self.edges.insert((from.to_string(), to.to_string()));
    }

    pub(crate) fn build_path(self) -> Projection {
        Projection {
            nodes: self.nodes.into_values().collect(),
            edges: self
                .edges
                .into_iter()
                .map(|(from, to)| GraphEdge::path(from, to))
                .collect(),
        }
    }
}
