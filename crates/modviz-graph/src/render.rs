//! Renderable node and edge records handed to the visualization layer.

use serde::{Deserialize, Serialize};

use crate::record::ModuleRecord;

/// Base node size before the dependency bonus.
const BASE_NODE_SIZE: f64 = 15.0;
/// Upper bound of the dependency bonus.
const MAX_SIZE_BONUS: f64 = 8.0;
/// Arrow scale for both ends of an edge.
const ARROW_SCALE: f64 = 0.8;

/// Node size grows with the number of direct dependencies, capped.
pub fn node_size(dep_count: usize) -> f64 {
    BASE_NODE_SIZE + (dep_count as f64 / 2.0).min(MAX_SIZE_BONUS)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeShape {
    /// Regular source file.
    Dot,
    /// Virtual module.
    Diamond,
    /// Third-party package.
    Hexagon,
}

impl NodeShape {
    pub fn for_record(record: &ModuleRecord) -> Self {
        if record.is_node_module() {
            Self::Hexagon
        } else if record.is_virtual {
            Self::Diamond
        } else {
            Self::Dot
        }
    }
}

/// Known file types and their palette colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Vue,
    Ts,
    Js,
    Json,
    Css,
    Html,
    Jsx,
    Tsx,
    Other,
}

impl FileType {
    pub const ALL: [FileType; 9] = [
        Self::Vue,
        Self::Ts,
        Self::Js,
        Self::Json,
        Self::Css,
        Self::Html,
        Self::Jsx,
        Self::Tsx,
        Self::Other,
    ];

    pub fn from_group(group: &str) -> Self {
        match group {
            "vue" => Self::Vue,
            "ts" => Self::Ts,
            "js" => Self::Js,
            "json" => Self::Json,
            "css" => Self::Css,
            "html" => Self::Html,
            "jsx" => Self::Jsx,
            "tsx" => Self::Tsx,
            _ => Self::Other,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Vue => "#42b883",
            Self::Ts => "#3B86CB",
            Self::Js => "#d6cb2d",
            Self::Json => "#cf8f30",
            Self::Css => "#e6659a",
            Self::Html => "#e34c26",
            Self::Jsx => "#54B9D1",
            Self::Tsx => "#4FC7FF",
            Self::Other => "#B86542",
        }
    }
}

/// Why a node is emphasized in a projection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Highlight {
    #[default]
    None,
    /// Hit of a text search.
    SearchMatch,
    /// Pathfinding start candidate.
    Start,
    /// Pathfinding end candidate.
    End,
    /// First node of an enumerated path.
    PathStart,
    /// Last node of an enumerated path.
    PathEnd,
    /// Any other node on an enumerated path.
    PathIntermediate,
}

impl Highlight {
    pub fn is_highlighted(self) -> bool {
        self != Self::None
    }

    pub fn font_color(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::SearchMatch => Some("#F19B4A"),
            Self::Start | Self::PathIntermediate => Some("#f59e0b"),
            Self::End | Self::PathEnd => Some("#ef4444"),
            Self::PathStart => Some("#10b981"),
        }
    }

    pub fn border_color(self) -> Option<&'static str> {
        match self {
            Self::Start => Some("#f59e0b"),
            Self::End | Self::PathEnd => Some("#ef4444"),
            Self::PathStart => Some("#10b981"),
            Self::None | Self::SearchMatch | Self::PathIntermediate => None,
        }
    }

    pub fn border_width(self) -> Option<u8> {
        self.border_color().map(|_| 3)
    }
}

/// A node as consumed by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    pub group: String,
    pub size: f64,
    pub shape: NodeShape,
    #[serde(default)]
    pub highlight: Highlight,
}

impl GraphNode {
    pub fn from_record(record: &ModuleRecord) -> Self {
        Self {
            id: record.id.clone(),
            label: record.display_name.clone(),
            group: record.group().to_string(),
            size: node_size(record.deps.len()),
            shape: NodeShape::for_record(record),
            highlight: Highlight::None,
        }
    }

    pub fn with_highlight(mut self, highlight: Highlight) -> Self {
        self.highlight = highlight;
        self
    }

    pub fn file_type(&self) -> FileType {
        FileType::from_group(&self.group)
    }

    /// Label with HTML markup; emphasized nodes are bold.
    pub fn label_markup(&self) -> String {
        if self.highlight.is_highlighted() {
            format!("<b>{}</b>", self.label)
        } else {
            self.label.clone()
        }
    }
}

/// Arrow decoration of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrowStyle {
    /// Arrow at the target and a circle at the source.
    Dependency,
    /// Arrow at the target only.
    Path,
}

impl ArrowStyle {
    pub fn scale(self) -> f64 {
        ARROW_SCALE
    }

    pub fn has_source_circle(self) -> bool {
        matches!(self, Self::Dependency)
    }
}

/// An edge as consumed by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
    pub arrows: ArrowStyle,
    #[serde(default)]
    pub highlighted: bool,
}

impl GraphEdge {
    pub fn dependency(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            arrows: ArrowStyle::Dependency,
            highlighted: false,
        }
    }

    pub fn path(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            arrows: ArrowStyle::Path,
            highlighted: true,
        }
    }

    /// Drawn width; path edges are thicker.
    pub fn width(&self) -> u8 {
        if self.highlighted { 2 } else { 1 }
    }
}
