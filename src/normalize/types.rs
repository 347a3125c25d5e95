//! Core types for the normalized tree

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::scene::{AutoLayout, Corners, Paint};

/// A 2D point in the document coordinate system (y pointing down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned box. Serialized as the flat `x`, `y`, `width`, `height`
/// fields every node carries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a zero-sized bounding box at the origin
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// The four corners, clockwise from the origin
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x, self.y),
            Point::new(self.right(), self.y),
            Point::new(self.right(), self.bottom()),
            Point::new(self.x, self.bottom()),
        ]
    }

    /// Smallest box containing every point. Returns `None` for an empty input.
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Self::new(min_x, min_y, max_x - min_x, max_y - min_y))
    }

    /// Check whether `other` lies entirely inside this box. Shared edges count
    /// as inside.
    pub fn contains_box(&self, other: &BoundingBox) -> bool {
        self.x <= other.x
            && self.y <= other.y
            && self.right() >= other.right()
            && self.bottom() >= other.bottom()
    }

    /// Same box moved by `(dx, dy)`
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::zero()
    }
}

/// Identifier of a node, as issued by the design tool
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of a node in the normalized tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    Rectangle,
    Vector,
    Frame,
    Group,
    Text,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Rectangle => "RECTANGLE",
            NodeKind::Vector => "VECTOR",
            NodeKind::Frame => "FRAME",
            NodeKind::Group => "GROUP",
            NodeKind::Text => "TEXT",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Back-reference from a node to the container holding it.
///
/// This is a lookup key into the tree, resolved through
/// [`NormalizedTree::parent_of`](super::NormalizedTree::parent_of). Children
/// are owned by their container's child list, never through this reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<NodeId>,
    #[serde(rename = "type")]
    pub kind: NodeKind,
}

impl ParentRef {
    pub fn new(id: Option<NodeId>, kind: NodeKind) -> Self {
        Self { id, kind }
    }
}

/// Frame-specific payload: auto-layout attributes plus owned children
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FrameContent {
    #[serde(flatten)]
    pub layout: AutoLayout,
    pub children: Vec<NormalizedNode>,
}

/// Per-kind content of a normalized node
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeContent {
    Rectangle,
    /// Opaque graphic. Never has children.
    Vector {
        /// Set on containers whose whole subtree is exported as one image
        #[serde(rename = "exportAsImage", skip_serializing_if = "std::ops::Not::not")]
        export_as_image: bool,
    },
    Frame(FrameContent),
    Group {
        children: Vec<NormalizedNode>,
    },
    Text {
        #[serde(skip_serializing_if = "Option::is_none")]
        characters: Option<String>,
    },
}

impl NodeContent {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeContent::Rectangle => NodeKind::Rectangle,
            NodeContent::Vector { .. } => NodeKind::Vector,
            NodeContent::Frame(_) => NodeKind::Frame,
            NodeContent::Group { .. } => NodeKind::Group,
            NodeContent::Text { .. } => NodeKind::Text,
        }
    }
}

fn is_zero(value: &f64) -> bool {
    *value == 0.0
}

/// A node of the normalized, layout-ready tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<NodeId>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<ParentRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(flatten)]
    pub bounds: BoundingBox,
    #[serde(skip_serializing_if = "is_zero")]
    pub rotation: f64,
    #[serde(flatten)]
    pub paint: Paint,
    #[serde(flatten)]
    pub corners: Corners,
    #[serde(flatten)]
    pub content: NodeContent,
    /// Attributes the model does not interpret, carried through verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NormalizedNode {
    /// Create a node with the given content and no styling
    pub fn new(id: Option<NodeId>, bounds: BoundingBox, content: NodeContent) -> Self {
        Self {
            id,
            name: String::new(),
            parent: None,
            visible: None,
            bounds,
            rotation: 0.0,
            paint: Paint::default(),
            corners: Corners::default(),
            content,
            extra: Map::new(),
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.content.kind()
    }

    /// Get the identifier as a string, if present
    pub fn id_str(&self) -> Option<&str> {
        self.id.as_ref().map(NodeId::as_str)
    }

    pub fn children(&self) -> &[NormalizedNode] {
        match &self.content {
            NodeContent::Frame(frame) => &frame.children,
            NodeContent::Group { children } => children,
            NodeContent::Rectangle | NodeContent::Vector { .. } | NodeContent::Text { .. } => &[],
        }
    }

    /// Auto-layout attributes, for frames
    pub fn layout(&self) -> Option<&AutoLayout> {
        match &self.content {
            NodeContent::Frame(frame) => Some(&frame.layout),
            _ => None,
        }
    }

    /// Whether this node can host the siblings painted on top of it
    pub fn is_background_candidate(&self) -> bool {
        matches!(
            self.content,
            NodeContent::Rectangle | NodeContent::Vector { .. }
        )
    }

    /// The key children of this node use to refer back to it
    pub fn as_parent(&self) -> ParentRef {
        ParentRef::new(self.id.clone(), self.kind())
    }

    /// Replace the children of a frame or group. Leaves are returned as-is.
    pub fn with_children(mut self, new_children: Vec<NormalizedNode>) -> Self {
        match &mut self.content {
            NodeContent::Frame(frame) => frame.children = new_children,
            NodeContent::Group { children } => *children = new_children,
            NodeContent::Rectangle | NodeContent::Vector { .. } | NodeContent::Text { .. } => {}
        }
        self
    }

    pub fn reparented(mut self, parent: Option<ParentRef>) -> Self {
        self.parent = parent;
        self
    }

    pub fn translated(mut self, dx: f64, dy: f64) -> Self {
        self.bounds = self.bounds.translated(dx, dy);
        self
    }
}
