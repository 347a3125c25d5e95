//! Source document model
//!
//! Mirrors the subset of the Figma node schema the normalizer reads. Every
//! attribute the model does not name lands in `extra` and is re-emitted
//! unchanged on the normalized node.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::normalize::types::BoundingBox;

/// Kind of a source node, from its `type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SourceKind {
    Rectangle,
    Ellipse,
    Vector,
    Star,
    Polygon,
    Line,
    Text,
    Group,
    Frame,
    Instance,
    Component,
    /// Any kind the normalizer has no rule for (boolean operations, slices,
    /// sections, ...)
    #[serde(other)]
    Unknown,
}

impl SourceKind {
    /// Kinds that are always exported as opaque graphics
    pub fn is_vector_like(self) -> bool {
        matches!(
            self,
            SourceKind::Vector | SourceKind::Ellipse | SourceKind::Star | SourceKind::Polygon
        )
    }

    /// Kinds that make a container eligible for image export when every
    /// child has one of them
    pub fn is_asset_like(self) -> bool {
        self.is_vector_like() || self == SourceKind::Rectangle
    }

    pub fn is_container(self) -> bool {
        matches!(
            self,
            SourceKind::Group | SourceKind::Frame | SourceKind::Instance | SourceKind::Component
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SourceKind::Rectangle => "RECTANGLE",
            SourceKind::Ellipse => "ELLIPSE",
            SourceKind::Vector => "VECTOR",
            SourceKind::Star => "STAR",
            SourceKind::Polygon => "POLYGON",
            SourceKind::Line => "LINE",
            SourceKind::Text => "TEXT",
            SourceKind::Group => "GROUP",
            SourceKind::Frame => "FRAME",
            SourceKind::Instance => "INSTANCE",
            SourceKind::Component => "COMPONENT",
            SourceKind::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position, size and rotation as reported by the design tool
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Geometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Degrees, counter-clockwise positive
    pub rotation: f64,
}

impl Geometry {
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::new(self.x, self.y, self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StrokeAlign {
    Inside,
    Outside,
    Center,
}

/// Paint attributes. Fills, strokes and effects are opaque to the normalizer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Paint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fills: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_style_id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strokes: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_style_id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effects: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect_style_id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_align: Option<StrokeAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

impl Paint {
    /// Drop fills, strokes, effects and their shared style references
    pub fn without_fill_props(self) -> Self {
        Self {
            fills: None,
            fill_style_id: None,
            strokes: None,
            stroke_style_id: None,
            effects: None,
            effect_style_id: None,
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Corners {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_left_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_right_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_right_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_left_radius: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutMode {
    None,
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AxisAlign {
    Min,
    Center,
    Max,
    SpaceBetween,
    Baseline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SizingMode {
    Fixed,
    Auto,
}

/// Container-only auto-layout attributes
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AutoLayout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_mode: Option<LayoutMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_axis_align_items: Option<AxisAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counter_axis_align_items: Option<AxisAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_axis_sizing_mode: Option<SizingMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counter_axis_sizing_mode: Option<SizingMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_right: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_spacing: Option<f64>,
}

impl AutoLayout {
    /// Layout of a frame synthesized around a background: no auto-layout,
    /// fixed size, children pinned to the start of both axes
    pub fn fixed_frame() -> Self {
        Self {
            layout_mode: Some(LayoutMode::None),
            primary_axis_align_items: Some(AxisAlign::Min),
            counter_axis_align_items: Some(AxisAlign::Min),
            primary_axis_sizing_mode: Some(SizingMode::Fixed),
            counter_axis_sizing_mode: Some(SizingMode::Fixed),
            ..Self::default()
        }
    }

    /// Whether the frame flows its children (horizontal or vertical)
    pub fn is_auto(&self) -> bool {
        matches!(
            self.layout_mode,
            Some(LayoutMode::Horizontal) | Some(LayoutMode::Vertical)
        )
    }
}

/// A node of the source document, read-only input of the normalizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceNode {
    #[serde(rename = "type")]
    pub kind: SourceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    /// Absent means visible
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub characters: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SourceNode>,
    #[serde(flatten)]
    pub geometry: Geometry,
    #[serde(flatten)]
    pub paint: Paint,
    #[serde(flatten)]
    pub corners: Corners,
    #[serde(flatten)]
    pub layout: AutoLayout,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SourceNode {
    pub fn new(kind: SourceKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: Some(id.into()),
            name: String::new(),
            visible: None,
            characters: None,
            children: Vec::new(),
            geometry: Geometry::default(),
            paint: Paint::default(),
            corners: Corners::default(),
            layout: AutoLayout::default(),
            extra: Map::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.geometry.x = x;
        self.geometry.y = y;
        self
    }

    pub fn sized(mut self, width: f64, height: f64) -> Self {
        self.geometry.width = width;
        self.geometry.height = height;
        self
    }

    pub fn rotated(mut self, rotation: f64) -> Self {
        self.geometry.rotation = rotation;
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    pub fn with_children(mut self, children: Vec<SourceNode>) -> Self {
        self.children = children;
        self
    }

    pub fn with_paint(mut self, paint: Paint) -> Self {
        self.paint = paint;
        self
    }

    pub fn with_layout(mut self, layout: AutoLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn without_id(mut self) -> Self {
        self.id = None;
        self
    }

    /// Absent `visible` counts as visible
    pub fn is_visible(&self) -> bool {
        self.visible != Some(false)
    }
}
